// src/runner.rs

use std::path::PathBuf;

use crate::{
    error::ScrapeError,
    params::Params,
    progress::Progress,
    reconcile::Registry,
    source::PageSource,
    store::{RankCollection, UnivInfo},
};

/// Summary of what one run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub out_path: PathBuf,
    pub universities: usize,
    pub subjects_done: usize,
    pub subjects_skipped: usize,
}

/// Top-level run: default ranking, then every discovered subject, then one
/// JSON write.
///
/// The default fetch is fatal (there is nothing to collect without it) and
/// so are subject discovery and the final write. Individual subject pages
/// are best-effort: a failed fetch or parse logs the subject and moves on,
/// leaving the registry exactly as the previous call left it.
pub fn run(
    params: &Params,
    source: &dyn PageSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let mut registry = Registry::new();

    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching default ranking…");
    }
    let rows = source.fetch_rankings(&params.rank_url)?;
    let default_view = registry.reconcile(&rows)?;
    logf!("default ranking: {} universities", registry.len());

    let mut subjects_out: Vec<(String, Vec<usize>)> = Vec::new();
    let mut skipped = 0usize;

    if !params.skip_subjects {
        let subjects = source.discover_subjects(&params.subject_url)?;
        logf!("discovered {} subjects", subjects.len());
        if let Some(p) = progress.as_deref_mut() {
            p.begin(subjects.len());
        }

        for (label, url) in subjects {
            // Each call sees the registry state the previous call produced.
            match source
                .fetch_rankings(&url)
                .and_then(|rows| registry.reconcile(&rows))
            {
                Ok(view) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(&label);
                    }
                    subjects_out.push((label, view));
                }
                Err(e) => {
                    loge!("skipping subject {label} ({url}): {e}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(&label);
                    }
                    skipped += 1;
                }
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
    }

    let subjects_done = subjects_out.len();
    let universities = registry.len();

    let collection = RankCollection {
        univ_info: UnivInfo::from_records(registry.into_entries()),
        default: default_view,
        subjects: subjects_out,
    };
    collection.save(&params.out)?;
    logf!("wrote {} ({universities} universities)", params.out.display());

    Ok(RunSummary {
        out_path: params.out.clone(),
        universities,
        subjects_done,
        subjects_skipped: skipped,
    })
}
