// src/specs/rankings.rs
//! Spec for ranking pages (default and per-subject).
//!
//! Ground truth: the `<table id="qs-rankings">` body. Each ranked row carries
//! the university name in an anchor whose class contains `title`, and the
//! country in a `td` with class `country`. Rows without a title anchor
//! (headers, spacers, ad rows) are not rankings and are skipped.

use scraper::{Html, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::ScrapeError;

/// One ranked row as the page presents it, top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankRow {
    pub name: String,
    pub country: String,
}

fn selector(css: &'static str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|_| ScrapeError::PageStructure { what: css })
}

/// Extract ranked rows from a full ranking page document.
///
/// A page without the rankings table, or with a table that yields zero rows,
/// counts as a structure failure: either the site changed or we were served
/// an interstitial, and silently returning nothing would poison the run.
pub fn parse_doc(doc: &str) -> Result<Vec<RankRow>, ScrapeError> {
    let html = Html::parse_document(doc);
    let table_sel = selector("table#qs-rankings")?;
    let row_sel = selector("tr")?;
    let name_sel = selector(r#"a[class*="title"]"#)?;
    let country_sel = selector("td.country")?;

    let table = html
        .select(&table_sel)
        .next()
        .ok_or(ScrapeError::PageStructure {
            what: "rankings table (#qs-rankings)",
        })?;

    let mut rows = Vec::new();
    for tr in table.select(&row_sel) {
        let Some(anchor) = tr.select(&name_sel).next() else {
            continue;
        };
        let name = normalize_ws(&anchor.text().collect::<String>());
        let country = tr
            .select(&country_sel)
            .next()
            .map(|td| normalize_ws(&td.text().collect::<String>()))
            .unwrap_or_default();
        rows.push(RankRow { name, country });
    }

    if rows.is_empty() {
        return Err(ScrapeError::PageStructure {
            what: "ranked rows in #qs-rankings",
        });
    }
    Ok(rows)
}
