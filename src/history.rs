//! Prediction history: most recent first, never edited.

use std::collections::VecDeque;

use crate::api::PredictionResult;
use crate::severity::clean_severity;

/// File name offered for the CSV download.
pub const CSV_FILENAME: &str = "results.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub filename: String,
    pub predicted_class: String,
    pub confidence: String,
    /// Severity with pictographic markers removed.
    pub severity: String,
}

impl HistoryRow {
    pub fn from_result(result: &PredictionResult) -> Self {
        Self {
            filename: result.filename.clone(),
            predicted_class: result.predicted_class.clone(),
            confidence: result.confidence.clone(),
            severity: clean_severity(&result.severity),
        }
    }

    /// Second line of the class cell.
    pub fn summary(&self) -> String {
        format!("Conf: {} | Sev: {}", self.confidence, self.severity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    rows: VecDeque<HistoryRow>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row for a successful prediction at the top.
    pub fn record(&mut self, result: &PredictionResult) {
        self.rows.push_front(HistoryRow::from_result(result));
    }

    pub fn rows(&self) -> impl Iterator<Item = &HistoryRow> {
        self.rows.iter()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as CSV, in table order.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("filename,predicted_class,confidence,severity\n");
        for row in &self.rows {
            let fields = [&row.filename, &row.predicted_class, &row.confidence, &row.severity];
            let line = fields
                .iter()
                .map(|f| csv_field(f))
                .collect::<Vec<_>>()
                .join(",");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
