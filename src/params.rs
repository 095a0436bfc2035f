// src/params.rs

use std::path::PathBuf;

pub const DEFAULT_RANK_URL: &str =
    "https://www.topuniversities.com/university-rankings/world-university-rankings/2018";
pub const DEFAULT_SUBJECT_URL: &str = "https://www.topuniversities.com/subject-rankings/2018";
pub const DEFAULT_OUT_FILE: &str = "univ_rank.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "qs_scrape/0.1";

#[derive(Clone, Debug)]
pub struct Params {
    pub rank_url: String,    // default (all-subject) ranking page
    pub subject_url: String, // hub page listing per-subject rankings
    pub out: PathBuf,        // output JSON path
    pub timeout_secs: u64,   // per-request HTTP timeout
    pub skip_subjects: bool, // collect the default ranking only
    pub list_subjects: bool, // print discovered subjects then exit
}

impl Params {
    pub fn new() -> Self {
        Self {
            rank_url: DEFAULT_RANK_URL.to_string(),
            subject_url: DEFAULT_SUBJECT_URL.to_string(),
            out: PathBuf::from(DEFAULT_OUT_FILE),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            skip_subjects: false,
            list_subjects: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
