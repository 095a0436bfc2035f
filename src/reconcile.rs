// src/reconcile.rs
//! Identity reconciliation across ranking views.
//!
//! Every ranking page lists universities by name, but the same university
//! appears in many subject views. The [`Registry`] assigns each distinct
//! name a stable index at first sight and turns each page's row sequence
//! into a view of those indices. Registry order is first-seen order across
//! the whole run, so the first (default) view comes out as the identity
//! sequence and later views reference a mix of old and new indices.

use std::collections::HashMap;

use crate::error::ScrapeError;
use crate::specs::rankings::RankRow;

/// One registered university. `country` is whatever the row that first
/// introduced the name carried; later sightings never update it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnivRecord {
    pub name: String,
    pub country: String,
}

/// Append-only university registry plus its name lookup.
///
/// Invariants: indices are assigned in first-seen order and never reassigned
/// or compacted; `index[name] == i` exactly when `entries[i].name == name`.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<UnivRecord>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[UnivRecord] {
        &self.entries
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn into_entries(self) -> Vec<UnivRecord> {
        self.entries
    }

    /// Resolve one page's rows into a rank view, registering unseen names.
    ///
    /// Returns one registry index per input row, in row order. On an empty
    /// registry this degenerates to the identity sequence `0..rows.len()`.
    /// A blank name anywhere in `rows` rejects the whole call with
    /// `BlankName`, and the registry is left exactly as it was.
    pub fn reconcile(&mut self, rows: &[RankRow]) -> Result<Vec<usize>, ScrapeError> {
        // Validate up front so a bad row cannot leave a half-applied call.
        for (i, row) in rows.iter().enumerate() {
            if row.name.trim().is_empty() {
                return Err(ScrapeError::BlankName { row: i });
            }
        }

        let mut view = Vec::with_capacity(rows.len());
        for row in rows {
            let idx = match self.index.get(&row.name) {
                Some(&i) => i, // known name: re-observed country is discarded
                None => {
                    let i = self.entries.len();
                    self.entries.push(UnivRecord {
                        name: row.name.clone(),
                        country: row.country.clone(),
                    });
                    self.index.insert(row.name.clone(), i);
                    i
                }
            };
            view.push(idx);
        }
        Ok(view)
    }
}
