// src/store.rs
//! Persistence of one completed run.
//!
//! Output document layout:
//!
//! ```json
//! {
//!   "univ_info": { "name": [...], "country": [...] },
//!   "rank": { "default": [...], "subject": { "<label>": [...] } }
//! }
//! ```
//!
//! `univ_info` arrays are aligned by registry index; each rank array holds
//! registry indices in that view's displayed order. Subjects keep discovery
//! order. Written as UTF-8 with tab indentation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::ScrapeError;
use crate::reconcile::UnivRecord;

/// Registry snapshot as parallel arrays, aligned by index.
#[derive(Debug, Serialize)]
pub struct UnivInfo {
    pub name: Vec<String>,
    pub country: Vec<String>,
}

impl UnivInfo {
    pub fn from_records(records: Vec<UnivRecord>) -> Self {
        let mut name = Vec::with_capacity(records.len());
        let mut country = Vec::with_capacity(records.len());
        for rec in records {
            name.push(rec.name);
            country.push(rec.country);
        }
        Self { name, country }
    }
}

/// Everything one run produced: the shared registry snapshot, the default
/// rank view, and one view per collected subject in discovery order.
#[derive(Debug)]
pub struct RankCollection {
    pub univ_info: UnivInfo,
    pub default: Vec<usize>,
    pub subjects: Vec<(String, Vec<usize>)>,
}

impl RankCollection {
    pub fn to_value(&self) -> Value {
        let mut subject = Map::with_capacity(self.subjects.len());
        for (label, view) in &self.subjects {
            subject.insert(label.clone(), json!(view));
        }
        json!({
            "univ_info": self.univ_info,
            "rank": {
                "default": self.default,
                "subject": Value::Object(subject),
            }
        })
    }

    pub fn to_json_string(&self) -> Result<String, ScrapeError> {
        let mut buf = Vec::new();
        write_value(&self.to_value(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| ScrapeError::Encode {
            source: Box::new(e),
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ScrapeError> {
        let persist = |source| ScrapeError::Persist {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(persist)?;
        let mut writer = BufWriter::new(file);
        write_value(&self.to_value(), &mut writer)?;
        writer.write_all(b"\n").map_err(persist)?;
        writer.flush().map_err(persist)?;
        Ok(())
    }
}

fn write_value<W: Write>(value: &Value, writer: W) -> Result<(), ScrapeError> {
    // Tab indentation, matching the long-lived layout of this dataset.
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(writer, fmt);
    value.serialize(&mut ser)?;
    Ok(())
}
