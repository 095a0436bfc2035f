// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific extraction for the QS site. Each spec encodes *where the
//! ground truth lives in the HTML* for one page kind and how to pull it out:
//!
//! - `rankings` — the `#qs-rankings` table on a ranking page (default or
//!   per-subject): one `(university, country)` row per table row, in the
//!   page's displayed rank order.
//! - `subjects` — the subject hub page: ordered `(label, href)` pairs from
//!   the `sub-list` link containers.
//!
//! Specs are pure `&str -> rows` functions over `scraper` selectors so they
//! can be tested offline against captured snippets. Fetching, merging and
//! persistence live in higher layers (`source`, `runner`, `store`).

pub mod rankings;
pub mod subjects;
