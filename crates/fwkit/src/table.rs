//! Ordered row and table types for uploaded policy exports.
//!
//! The column set is determined by the uploaded file, not known ahead of
//! time, so rows are insertion-ordered column -> value mappings rather
//! than fixed structs. Column order is preserved for faithful CSV
//! re-export.

/// A single row: column name -> value, in file order.
///
/// Lookups are linear; policy exports carry a dozen columns at most.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Build a row from (column, value) pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set a column value, appending the column if it is new.
    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| k == column) {
            slot.1 = value.into();
        } else {
            self.fields.push((column.to_string(), value.into()));
        }
    }

    /// Value of a column. Absent columns read as empty string.
    pub fn get(&self, column: &str) -> &str {
        self.fields
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Trimmed value of a column, for heuristic comparisons.
    pub fn trimmed(&self, column: &str) -> &str {
        self.get(column).trim()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An ordered sequence of rows, as parsed from one uploaded file.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_column_reads_empty() {
        let row = Row::from_pairs([("Type", "Allow")]);
        assert_eq!(row.get("Source"), "");
        assert_eq!(row.get("Type"), "Allow");
    }

    #[test]
    fn test_set_preserves_insertion_order() {
        let mut row = Row::new();
        row.set("Type", "Allow");
        row.set("Source", "Any");
        row.set("Type", "Drop");

        let columns: Vec<&str> = row.columns().collect();
        assert_eq!(columns, vec!["Type", "Source"]);
        assert_eq!(row.get("Type"), "Drop");
    }
}
