#![deny(unsafe_code)]

/// Row-oriented in-memory table.
///
/// Column order is significant and preserved through every stage. Cells
/// are trimmed strings; an empty string is a missing value. The pipeline
/// never mutates a table it was given, it builds a new one.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrialTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TrialTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Index of a column by exact name. Callers match against canonical
    /// names after normalization, so lookup is never case-folded here.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cell content, or the empty string when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TrialTable {
        let mut table = TrialTable::new(vec!["TRIAL_ID".to_string(), "STATUS".to_string()]);
        table.push_row(vec!["T001".to_string(), "Completed".to_string()]);
        table
    }

    #[test]
    fn column_lookup_is_exact() {
        let table = sample();
        assert_eq!(table.column_index("STATUS"), Some(1));
        assert_eq!(table.column_index("status"), None);
    }

    #[test]
    fn short_rows_read_as_missing() {
        let mut table = sample();
        table.push_row(vec!["T002".to_string()]);
        assert_eq!(table.cell(1, 0), "T002");
        assert_eq!(table.cell(1, 1), "");
    }
}
