// src/specs/subjects.rs
//! Spec for the subject hub page.
//!
//! Ground truth: anchors inside `div.sub-list` containers, one per subject,
//! in document order. A duplicate label keeps its first position but takes
//! the last href seen, matching map-insertion semantics on the original page
//! (the hub repeats a handful of links between the overview and footer lists).

use scraper::{Html, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::ScrapeError;

fn selector(css: &'static str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|_| ScrapeError::PageStructure { what: css })
}

/// Extract `(subject label, href)` pairs from the hub document.
/// Hrefs are returned as written in the page; the caller resolves them
/// against the hub URL.
pub fn parse_doc(doc: &str) -> Result<Vec<(String, String)>, ScrapeError> {
    let html = Html::parse_document(doc);
    let list_sel = selector("div.sub-list")?;
    let anchor_sel = selector("a")?;

    let mut out: Vec<(String, String)> = Vec::new();
    for list in html.select(&list_sel) {
        for anchor in list.select(&anchor_sel) {
            let label = normalize_ws(&anchor.text().collect::<String>());
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            if label.is_empty() {
                continue;
            }
            match out.iter_mut().find(|(l, _)| l == &label) {
                Some(slot) => slot.1 = href.to_string(),
                None => out.push((label, href.to_string())),
            }
        }
    }

    if out.is_empty() {
        return Err(ScrapeError::PageStructure {
            what: "subject links (div.sub-list a)",
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_labels_and_hrefs_in_document_order() {
        let doc = r#"
            <div class="sub-list">
              <a href="/subject-rankings/2018/physics">Physics &amp; Astronomy</a>
              <a href="/subject-rankings/2018/chemistry"> Chemistry </a>
            </div>
            <div class="sub-list">
              <a href="/subject-rankings/2018/history">History</a>
            </div>
        "#;
        let subjects = parse_doc(doc).unwrap();
        assert_eq!(
            subjects,
            vec![
                ("Physics & Astronomy".to_string(), "/subject-rankings/2018/physics".to_string()),
                ("Chemistry".to_string(), "/subject-rankings/2018/chemistry".to_string()),
                ("History".to_string(), "/subject-rankings/2018/history".to_string()),
            ]
        );
    }

    #[test]
    fn duplicate_label_keeps_first_position_last_href() {
        let doc = r#"
            <div class="sub-list">
              <a href="/old">Physics</a>
              <a href="/chem">Chemistry</a>
              <a href="/new">Physics</a>
            </div>
        "#;
        let subjects = parse_doc(doc).unwrap();
        assert_eq!(
            subjects,
            vec![
                ("Physics".to_string(), "/new".to_string()),
                ("Chemistry".to_string(), "/chem".to_string()),
            ]
        );
    }

    #[test]
    fn anchors_outside_sub_list_are_ignored() {
        let doc = r#"
            <a href="/nav">Home</a>
            <div class="sub-list"><a href="/cs">Computer Science</a></div>
        "#;
        let subjects = parse_doc(doc).unwrap();
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].0, "Computer Science");
    }

    #[test]
    fn hub_without_lists_is_a_structure_error() {
        assert!(parse_doc("<html><body></body></html>").is_err());
    }
}
