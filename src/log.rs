// src/log.rs
// Append-only run log. Progress lines go to the console via the Progress
// sink; this file keeps the noisier diagnostics (skipped subjects, fetch
// errors) for after the run.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

static LOG_FILE: &str = "qs_scrape.log";

struct Sink {
    file: Option<File>,
    started: Instant,
}

static SINK: OnceLock<Mutex<Sink>> = OnceLock::new();

fn sink() -> &'static Mutex<Sink> {
    SINK.get_or_init(|| {
        let file = OpenOptions::new().create(true).append(true).open(LOG_FILE).ok();
        Mutex::new(Sink {
            file,
            started: Instant::now(),
        })
    })
}

/// Internal logging function; use the `logf!`/`logd!`/`loge!` macros.
pub fn write_log(level: &str, msg: &str) {
    if let Ok(mut s) = sink().lock() {
        let ms = s.started.elapsed().as_millis() as u64;
        let line = format!(
            "[{:02}:{:02}:{:02}.{:03}][{}] {}\n",
            ms / 3_600_000,
            (ms % 3_600_000) / 60_000,
            (ms % 60_000) / 1_000,
            ms % 1_000,
            level,
            msg
        );
        if let Some(f) = s.file.as_mut() {
            let _ = f.write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}
