// src/source.rs
//! The narrow capability the runner needs from "the website": fetch one
//! ranking page as rows, and list the subjects behind the hub page.
//! `HttpSource` is the production implementation; tests drive the runner
//! with in-memory fakes instead.

use crate::core::net;
use crate::error::ScrapeError;
use crate::specs::{rankings, rankings::RankRow, subjects};

pub trait PageSource {
    /// Rows of one ranking page, in displayed rank order.
    fn fetch_rankings(&self, url: &str) -> Result<Vec<RankRow>, ScrapeError>;

    /// `(subject label, absolute url)` pairs from the hub page, in
    /// discovery order.
    fn discover_subjects(&self, hub_url: &str) -> Result<Vec<(String, String)>, ScrapeError>;
}

/// Live HTTP implementation: GET + CSS-selector extraction.
pub struct HttpSource {
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            agent: net::build_agent(timeout_secs),
        }
    }
}

impl PageSource for HttpSource {
    fn fetch_rankings(&self, url: &str) -> Result<Vec<RankRow>, ScrapeError> {
        let doc = net::get(&self.agent, url)?;
        rankings::parse_doc(&doc)
    }

    fn discover_subjects(&self, hub_url: &str) -> Result<Vec<(String, String)>, ScrapeError> {
        let doc = net::get(&self.agent, hub_url)?;
        let pairs = subjects::parse_doc(&doc)?;
        Ok(pairs
            .into_iter()
            .map(|(label, href)| {
                let url = absolutize(hub_url, &href);
                (label, url)
            })
            .collect())
    }
}

/// Resolve an href against the page it came from. Handles the three shapes
/// the hub actually uses: absolute URLs, root-relative paths, and plain
/// relative paths.
fn absolutize(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if let Some(rest) = href.strip_prefix('/') {
        // scheme://host[/...] -> scheme://host + href
        if let Some(scheme_end) = base.find("://") {
            let host_end = base[scheme_end + 3..]
                .find('/')
                .map(|i| scheme_end + 3 + i)
                .unwrap_or(base.len());
            return format!("{}/{}", &base[..host_end], rest);
        }
        return href.to_string();
    }
    // relative to the base's directory
    match base.rfind('/') {
        Some(i) if i > base.find("://").map(|s| s + 2).unwrap_or(0) => {
            format!("{}/{}", &base[..i], href)
        }
        _ => format!("{}/{}", base.trim_end_matches('/'), href),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_href_passes_through() {
        assert_eq!(
            absolutize("https://site.test/hub", "https://other.test/x"),
            "https://other.test/x"
        );
    }

    #[test]
    fn root_relative_href_joins_host() {
        assert_eq!(
            absolutize("https://site.test/a/b/c", "/subject-rankings/2018/physics"),
            "https://site.test/subject-rankings/2018/physics"
        );
    }

    #[test]
    fn relative_href_joins_base_directory() {
        assert_eq!(
            absolutize("https://site.test/subject-rankings/2018", "physics"),
            "https://site.test/subject-rankings/physics"
        );
    }
}
