// src/store.rs
// Presence history: one record per calendar date, kept sorted ascending.
// Persisted as a JSON array of {date, presence}; a missing file is simply an
// empty history.

use std::{fs, path::Path};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;

/// One collected data point. `date` is an ISO-8601 calendar date; `presence`
/// is the raw value as published (typically something like "87%").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceRecord {
    pub date: String,
    pub presence: String,
}

impl PresenceRecord {
    pub fn from_datetime(moment: NaiveDateTime, presence: impl Into<String>) -> Self {
        Self {
            date: moment.date().format("%Y-%m-%d").to_string(),
            presence: presence.into(),
        }
    }
}

pub fn load_history(path: &Path) -> Result<Vec<PresenceRecord>, ScrapeError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

pub fn save_history(records: &[PresenceRecord], path: &Path) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(records)?)?;
    Ok(())
}

/// Merge `new` into `records`: a record with the same date is replaced in
/// place, otherwise `new` is appended. The result is re-sorted ascending by
/// date string (lexical order on ISO dates is chronological), so insertion
/// position never shows in the output. Idempotent.
pub fn merge_record(records: &[PresenceRecord], new: PresenceRecord) -> Vec<PresenceRecord> {
    let mut merged = Vec::with_capacity(records.len() + 1);
    let mut found = false;
    for record in records {
        if record.date == new.date {
            merged.push(new.clone());
            found = true;
        } else {
            merged.push(record.clone());
        }
    }
    if !found {
        merged.push(new);
    }
    merged.sort_by(|a, b| a.date.cmp(&b.date));
    merged
}
