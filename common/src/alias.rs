//! Column alias resolution
//!
//! Maps each logical field to whichever spreadsheet header is present,
//! scanning the alias list of the field in priority order.

use crate::error::{Error, Result};
use std::fmt;

/// A semantic data slot, independent of the header text used for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    ParticipantName,
    Institute,
    ParticipantType,
    PaperTitle,
    PaperId,
}

impl LogicalField {
    pub fn key(&self) -> &'static str {
        match self {
            LogicalField::ParticipantName => "participant_name",
            LogicalField::Institute => "institute",
            LogicalField::ParticipantType => "participant_type",
            LogicalField::PaperTitle => "paper_title",
            LogicalField::PaperId => "paper_id",
        }
    }

    /// Optional fields resolve to "absent" instead of failing
    pub fn is_optional(&self) -> bool {
        matches!(self, LogicalField::ParticipantType)
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One row of the alias table
#[derive(Debug, Clone, Copy)]
pub struct AliasEntry {
    pub field: LogicalField,
    pub aliases: &'static [&'static str],
}

/// Header aliases per logical field (case-sensitive, first match wins)
pub const ALIAS_TABLE: &[AliasEntry] = &[
    AliasEntry {
        field: LogicalField::ParticipantName,
        aliases: &["Corresponding Author", "Author Name", "Name", "Presenter Name"],
    },
    AliasEntry {
        field: LogicalField::Institute,
        aliases: &["Institute", "University", "College"],
    },
    AliasEntry {
        field: LogicalField::ParticipantType,
        aliases: &["Participant Type", "Type", "Category"],
    },
    AliasEntry {
        field: LogicalField::PaperTitle,
        aliases: &["Paper Title", "Title", "Research Title"],
    },
    AliasEntry {
        field: LogicalField::PaperId,
        aliases: &["Paper ID", "ID", "Unique ID"],
    },
];

/// A header matched for a logical field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub header: String,
    pub index: usize,
}

/// Logical field → actual column, resolved once per run
#[derive(Debug, Clone)]
pub struct FieldMapping {
    pub participant_name: ResolvedColumn,
    pub institute: ResolvedColumn,
    pub participant_type: Option<ResolvedColumn>,
    pub paper_title: ResolvedColumn,
    pub paper_id: ResolvedColumn,
}

impl FieldMapping {
    pub fn column(&self, field: LogicalField) -> Option<&ResolvedColumn> {
        match field {
            LogicalField::ParticipantName => Some(&self.participant_name),
            LogicalField::Institute => Some(&self.institute),
            LogicalField::ParticipantType => self.participant_type.as_ref(),
            LogicalField::PaperTitle => Some(&self.paper_title),
            LogicalField::PaperId => Some(&self.paper_id),
        }
    }
}

/// First alias (in alias order) that appears among the columns
pub fn find_column(columns: &[String], aliases: &[&str]) -> Option<ResolvedColumn> {
    aliases.iter().find_map(|alias| {
        columns
            .iter()
            .position(|c| c == alias)
            .map(|index| ResolvedColumn {
                header: columns[index].clone(),
                index,
            })
    })
}

/// Resolve every logical field of `table` against the available columns
pub fn resolve(columns: &[String], table: &[AliasEntry]) -> Result<FieldMapping> {
    let lookup = |field: LogicalField| -> Option<ResolvedColumn> {
        table
            .iter()
            .filter(|entry| entry.field == field)
            .find_map(|entry| find_column(columns, entry.aliases))
    };

    let mandatory = |field: LogicalField| -> Result<ResolvedColumn> {
        lookup(field).ok_or_else(|| Error::ColumnNotFound {
            field: field.key().to_string(),
            available: columns.to_vec(),
        })
    };

    Ok(FieldMapping {
        participant_name: mandatory(LogicalField::ParticipantName)?,
        institute: mandatory(LogicalField::Institute)?,
        paper_title: mandatory(LogicalField::PaperTitle)?,
        paper_id: mandatory(LogicalField::PaperId)?,
        participant_type: lookup(LogicalField::ParticipantType),
    })
}

/// Resolve against the built-in alias table
pub fn resolve_columns(columns: &[String]) -> Result<FieldMapping> {
    resolve(columns, ALIAS_TABLE)
}

/// Preferred header of every field, in table order
pub fn canonical_headers() -> Vec<&'static str> {
    ALIAS_TABLE
        .iter()
        .filter_map(|entry| entry.aliases.first().copied())
        .collect()
}
