//! Participant data types
//!
//! - RowTable: the spreadsheet as text cells
//! - ParticipantRecord: one row with its logical fields filled in

use crate::alias::FieldMapping;
use serde::{Deserialize, Serialize};

/// Tabular participant data with a header row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RowTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text, empty when the row is shorter than the header
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// One participant row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub name: String,
    pub institute: String,
    pub participant_type: String,
    pub paper_title: String,
    /// Output file stem; blank ids are rejected by the pipeline
    pub paper_id: String,
}

impl ParticipantRecord {
    /// Build a record from a table row through the resolved mapping
    ///
    /// A missing participant type column or a blank type cell falls back to
    /// `default_type`.
    pub fn from_row(table: &RowTable, row: usize, mapping: &FieldMapping, default_type: &str) -> Self {
        let participant_type = mapping
            .participant_type
            .as_ref()
            .map(|col| table.cell(row, col.index).trim())
            .filter(|s| !s.is_empty())
            .unwrap_or(default_type);

        Self {
            name: table.cell(row, mapping.participant_name.index).to_string(),
            institute: table.cell(row, mapping.institute.index).to_string(),
            participant_type: participant_type.to_string(),
            paper_title: table.cell(row, mapping.paper_title.index).to_string(),
            paper_id: table.cell(row, mapping.paper_id.index).trim().to_string(),
        }
    }
}
