//! Review sessions: classification results held for follow-up export.
//!
//! The store hands out an explicit handle per classification instead of
//! keeping one process-wide "last result", so independent callers never
//! overwrite each other. Exporting a handle that was never stored, was
//! dropped, or holds no rules is an error, never an empty file.

use crate::error::{FwkitError, Result};
use crate::ingest::csv_field;
use crate::review::classifier::ClassifiedRule;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;

/// Handle to a stored classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One classification result, kept until replaced or dropped.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    rules: Vec<ClassifiedRule>,
    created_at: DateTime<Utc>,
}

impl ReviewSession {
    pub fn new(rules: Vec<ClassifiedRule>) -> Self {
        Self {
            rules,
            created_at: Utc::now(),
        }
    }

    pub fn rules(&self) -> &[ClassifiedRule] {
        &self.rules
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Serialize for download: original columns in first-seen order,
    /// then the joined `Categories` column. The section helper fields
    /// are annotations, not columns, and never appear.
    pub fn to_csv(&self) -> String {
        let columns = columns(&self.rules);

        let mut out = String::new();
        let mut header: Vec<String> = columns.iter().map(|c| csv_field(c)).collect();
        header.push("Categories".to_string());
        out.push_str(&header.join(","));
        out.push('\n');

        for rule in &self.rules {
            let mut fields: Vec<String> =
                columns.iter().map(|c| csv_field(rule.row.get(c))).collect();
            fields.push(csv_field(&rule.categories_display()));
            out.push_str(&fields.join(","));
            out.push('\n');
        }

        out
    }
}

/// Union of columns across classified rows, in first-seen order.
pub fn columns(rules: &[ClassifiedRule]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for rule in rules {
        for column in rule.row.columns() {
            if !out.iter().any(|c| c == column) {
                out.push(column.to_string());
            }
        }
    }
    out
}

/// Download filename stamped with the export time.
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("classified_rules_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Holds classification results keyed by session handle.
#[derive(Debug, Default)]
pub struct ReviewStore {
    sessions: HashMap<SessionId, ReviewSession>,
    next_id: u64,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a result and hand back the handle for later export.
    pub fn insert(&mut self, rules: Vec<ClassifiedRule>) -> SessionId {
        self.next_id += 1;
        let id = SessionId(self.next_id);

        log::debug!("storing review session {} ({} rules)", id, rules.len());
        self.sessions.insert(id, ReviewSession::new(rules));

        id
    }

    pub fn get(&self, id: SessionId) -> Option<&ReviewSession> {
        self.sessions.get(&id)
    }

    /// Drop a stored result once the caller is done with it.
    pub fn remove(&mut self, id: SessionId) -> Option<ReviewSession> {
        self.sessions.remove(&id)
    }

    /// Export a stored result as CSV.
    pub fn export_csv(&self, id: SessionId) -> Result<String> {
        let session = self
            .sessions
            .get(&id)
            .ok_or(FwkitError::NothingToExport)?;

        if session.rules.is_empty() {
            return Err(FwkitError::NothingToExport);
        }

        Ok(session.to_csv())
    }
}
