// src/cli.rs

use std::env;
use std::path::PathBuf;

use color_eyre::eyre::{bail, Result};

use crate::params::Params;
use crate::progress::Progress;
use crate::runner;
use crate::source::{HttpSource, PageSource};

pub fn run() -> Result<()> {
    let params = parse_cli()?;
    let source = HttpSource::new(params.timeout_secs);

    if params.list_subjects {
        for (label, url) in source.discover_subjects(&params.subject_url)? {
            println!("{label}\t{url}");
        }
        return Ok(());
    }

    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&params, &source, Some(&mut progress))?;

    println!(
        "Wrote {} ({} universities, {} subject views{})",
        summary.out_path.display(),
        summary.universities,
        summary.subjects_done,
        if summary.subjects_skipped > 0 {
            format!(", {} skipped", summary.subjects_skipped)
        } else {
            String::new()
        }
    );
    Ok(())
}

fn parse_cli() -> Result<Params> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                let Some(v) = args.next() else { bail!("Missing output path") };
                params.out = PathBuf::from(v);
            }
            "--rank-url" => {
                let Some(v) = args.next() else { bail!("Missing value for --rank-url") };
                params.rank_url = v;
            }
            "--subject-url" => {
                let Some(v) = args.next() else { bail!("Missing value for --subject-url") };
                params.subject_url = v;
            }
            "--timeout" => {
                let Some(v) = args.next() else { bail!("Missing value for --timeout") };
                params.timeout_secs = v.parse()?;
            }
            "--skip-subjects" => params.skip_subjects = true,
            "--list-subjects" => params.list_subjects = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => bail!("Unknown arg: {a}"),
        }
    }

    Ok(params)
}

/* ---------------- Console progress sink ---------------- */

#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    current: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Collecting {total} subject rankings…");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, label: &str) {
        self.current += 1;
        println!("[{}/{}] {}", self.current, self.total, label);
    }

    fn item_failed(&mut self, label: &str) {
        self.current += 1;
        println!("[{}/{}] {} (skipped)", self.current, self.total, label);
    }
}
