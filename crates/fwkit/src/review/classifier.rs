//! Policy rule classification.
//!
//! This module tags each exported rule row with review categories:
//! - Disabled (`Type` contains "[disabled]")
//! - Zero Hits (`Hits` is "zero")
//! - Any in Source/Destination
//! - Weak Protocol (services list split on `;`, checked against a
//!   configurable set)
//!
//! Rows whose `Type` is "section" are structural headers, not rules;
//! they get a display name and a single Section Header tag. Rule rows
//! matching nothing are tagged Normal, so every row carries at least
//! one tag. Classification is a pure, order-preserving, 1:1 transform
//! and never fails on malformed rows: absent columns read as empty.

use crate::config::ReviewConfig;
use crate::review::category::RuleCategory;
use crate::table::{Row, Table};
use std::collections::HashSet;

const COL_TYPE: &str = "Type";
const COL_NAME: &str = "Name";
const COL_SOURCE: &str = "Source";
const COL_DESTINATION: &str = "Destination";
const COL_HITS: &str = "Hits";
const COL_SERVICES: &str = "Services & Applications";

/// A rule row plus the review annotations attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRule {
    pub row: Row,
    pub is_section: bool,
    pub section_display_name: Option<String>,
    pub categories: Vec<RuleCategory>,
}

impl ClassifiedRule {
    /// Categories joined for display/export, e.g. "Zero Hits, Weak Protocol".
    pub fn categories_display(&self) -> String {
        RuleCategory::join(&self.categories)
    }
}

/// Applies the review heuristics to exported rule tables.
pub struct RuleClassifier {
    weak_protocols: HashSet<String>,
}

impl RuleClassifier {
    pub fn new(config: &ReviewConfig) -> Self {
        Self {
            weak_protocols: config
                .weak_protocols
                .iter()
                .map(|p| p.trim().to_lowercase())
                .collect(),
        }
    }

    /// Classify every row of a table, in order, one output per input.
    pub fn classify_table(&self, table: &Table) -> Vec<ClassifiedRule> {
        let classified: Vec<ClassifiedRule> =
            table.rows().iter().map(|row| self.classify_row(row)).collect();

        log::debug!(
            "classified {} rows ({} section headers)",
            classified.len(),
            classified.iter().filter(|r| r.is_section).count()
        );

        classified
    }

    pub fn classify_row(&self, row: &Row) -> ClassifiedRule {
        if row.trimmed(COL_TYPE).eq_ignore_ascii_case("section") {
            return self.classify_section(row);
        }

        let mut categories = Vec::new();

        if row.get(COL_TYPE).to_lowercase().contains("[disabled]") {
            categories.push(RuleCategory::Disabled);
        }
        if row.trimmed(COL_HITS).eq_ignore_ascii_case("zero") {
            categories.push(RuleCategory::ZeroHits);
        }
        if row.trimmed(COL_SOURCE).eq_ignore_ascii_case("any")
            || row.trimmed(COL_DESTINATION).eq_ignore_ascii_case("any")
        {
            categories.push(RuleCategory::AnyEndpoint);
        }
        if self.has_weak_service(row.get(COL_SERVICES)) {
            categories.push(RuleCategory::WeakProtocol);
        }
        if categories.is_empty() {
            categories.push(RuleCategory::Normal);
        }

        ClassifiedRule {
            row: row.clone(),
            is_section: false,
            section_display_name: None,
            categories,
        }
    }

    fn classify_section(&self, row: &Row) -> ClassifiedRule {
        let name = row.trimmed(COL_NAME);
        let display = if name.is_empty() || name.eq_ignore_ascii_case("nan") {
            // Exports leave section names blank (or literally "nan")
            // when the sheet had no value; fall back to the Source cell.
            let source = row.trimmed(COL_SOURCE);
            let source = if source.is_empty() { "Unnamed Section" } else { source };
            format!("SECTION: {}", source)
        } else {
            name.to_string()
        };

        // Blank every other column so spreadsheet artifacts do not leak
        // through on header rows.
        let mut cleaned = Row::new();
        for (column, value) in row.iter() {
            if column == COL_NAME || column == COL_TYPE {
                cleaned.set(column, value);
            } else {
                cleaned.set(column, "");
            }
        }

        ClassifiedRule {
            row: cleaned,
            is_section: true,
            section_display_name: Some(display.to_uppercase()),
            categories: vec![RuleCategory::SectionHeader],
        }
    }

    fn has_weak_service(&self, services: &str) -> bool {
        services
            .split(';')
            .any(|token| self.weak_protocols.contains(&token.trim().to_lowercase()))
    }
}
