//! Batch driver
//!
//! Resolves columns once, then wraps, renders and exports every row in
//! sheet order. A failed PDF conversion or a blank paper id only affects
//! its own row; everything else aborts the run.

use crate::error::{CertGenError, Result};
use crate::export::{file_stem_for, Exporter};
use crate::render::Renderer;
use certgen_common::{resolve_columns, wrap_title, FieldMapping, ParticipantRecord, RowTable};
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Abort before writing anything when two rows share a paper id
    pub strict_ids: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowStatus {
    Generated { png: PathBuf, pdf: PathBuf },
    /// PNG written, PDF conversion failed
    PdfFailed { png: PathBuf, reason: String },
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    /// 0-based index into the table rows
    pub row: usize,
    pub paper_id: String,
    pub status: RowStatus,
}

#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub rows: Vec<RowOutcome>,
    /// Paper ids used by more than one row
    pub duplicate_ids: Vec<String>,
}

impl RunReport {
    /// Rows with a PNG on disk
    pub fn generated(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| !matches!(r.status, RowStatus::Skipped { .. }))
            .count()
    }

    pub fn failures(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| !matches!(r.status, RowStatus::Generated { .. }))
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }
}

pub struct Pipeline {
    renderer: Renderer,
    exporter: Exporter,
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(renderer: Renderer, exporter: Exporter, options: PipelineOptions) -> Self {
        Self {
            renderer,
            exporter,
            options,
        }
    }

    pub fn run(&self, table: &RowTable) -> Result<RunReport> {
        self.run_with_progress(table, &ProgressBar::hidden())
    }

    pub fn run_with_progress(&self, table: &RowTable, progress: &ProgressBar) -> Result<RunReport> {
        let mapping = resolve_columns(&table.headers)?;
        tracing::debug!(?mapping, "columns resolved");

        let config = self.renderer.config();
        let records: Vec<ParticipantRecord> = (0..table.len())
            .map(|row| ParticipantRecord::from_row(table, row, &mapping, &config.default_participant_type))
            .collect();

        let duplicate_ids = find_duplicate_ids(&records);
        if !duplicate_ids.is_empty() {
            if self.options.strict_ids {
                return Err(CertGenError::DuplicatePaperId(duplicate_ids));
            }
            tracing::warn!(ids = ?duplicate_ids, "duplicate paper ids, later rows overwrite earlier files");
        }

        self.exporter.prepare()?;

        let mut report = RunReport {
            rows: Vec::with_capacity(records.len()),
            duplicate_ids,
        };
        progress.set_length(records.len() as u64);

        for (row, record) in records.iter().enumerate() {
            let status = self.process_row(row, record, progress)?;
            report.rows.push(RowOutcome {
                row,
                paper_id: record.paper_id.clone(),
                status,
            });
            progress.inc(1);
        }

        progress.finish_and_clear();
        Ok(report)
    }

    fn process_row(&self, row: usize, record: &ParticipantRecord, progress: &ProgressBar) -> Result<RowStatus> {
        if record.paper_id.is_empty() {
            let reason = "blank paper id".to_string();
            progress.suspend(|| eprintln!("✖ Row {}: skipped ({})", row + 1, reason));
            return Ok(RowStatus::Skipped { reason });
        }

        let title = wrap_title(&record.paper_title, self.renderer.config().max_line_width);
        tracing::debug!(row, paper_id = %record.paper_id, variant = ?title.variant, lines = title.lines.len(), "rendering");

        let image = self.renderer.render(record, &title);
        let outcome = self.exporter.export(&image, &record.paper_id)?;

        match outcome.pdf {
            Ok(pdf) => {
                progress.suspend(|| {
                    println!("✔ Certificate generated for: {} (PNG and PDF)", record.paper_id)
                });
                Ok(RowStatus::Generated { png: outcome.png, pdf })
            }
            Err(e) => {
                progress.suspend(|| {
                    eprintln!(
                        "✖ Error converting {} (row {}) to PDF: {}",
                        record.paper_id,
                        row + 1,
                        e
                    )
                });
                Ok(RowStatus::PdfFailed {
                    png: outcome.png,
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// Resolve columns only, for previewing a sheet
pub fn preview_mapping(table: &RowTable) -> Result<FieldMapping> {
    Ok(resolve_columns(&table.headers)?)
}

/// Non-blank paper ids whose output file is shared with another row
///
/// Ids are grouped by file stem, so `A/1` and `A_1` collide. Each id is
/// listed once, grouped by stem in first-seen order.
pub fn find_duplicate_ids(records: &[ParticipantRecord]) -> Vec<String> {
    let mut by_stem: HashMap<String, Vec<&str>> = HashMap::new();
    let mut stems = Vec::new();
    for record in records.iter().filter(|r| !r.paper_id.is_empty()) {
        let stem = file_stem_for(&record.paper_id);
        by_stem
            .entry(stem.clone())
            .or_insert_with(|| {
                stems.push(stem);
                Vec::new()
            })
            .push(record.paper_id.as_str());
    }

    let mut duplicates: Vec<String> = Vec::new();
    for ids in stems.iter().filter_map(|stem| by_stem.get(stem)) {
        if ids.len() < 2 {
            continue;
        }
        for id in ids {
            if !duplicates.iter().any(|d| d == id) {
                duplicates.push(id.to_string());
            }
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ParticipantRecord {
        ParticipantRecord {
            paper_id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_find_duplicate_ids() {
        let records = vec![record("1"), record("2"), record("1"), record(""), record(""), record("1")];
        assert_eq!(find_duplicate_ids(&records), vec!["1".to_string()]);
    }

    #[test]
    fn test_ids_sharing_a_file_stem_are_duplicates() {
        let records = vec![record("A/1"), record("B"), record("A_1"), record("A:1")];
        assert_eq!(
            find_duplicate_ids(&records),
            vec!["A/1".to_string(), "A_1".to_string(), "A:1".to_string()]
        );
    }

    #[test]
    fn test_report_counts() {
        let report = RunReport {
            rows: vec![
                RowOutcome {
                    row: 0,
                    paper_id: "1".into(),
                    status: RowStatus::Generated { png: "a.png".into(), pdf: "a.pdf".into() },
                },
                RowOutcome {
                    row: 1,
                    paper_id: "2".into(),
                    status: RowStatus::PdfFailed { png: "b.png".into(), reason: "boom".into() },
                },
                RowOutcome {
                    row: 2,
                    paper_id: String::new(),
                    status: RowStatus::Skipped { reason: "blank paper id".into() },
                },
            ],
            duplicate_ids: Vec::new(),
        };
        assert_eq!(report.generated(), 2);
        assert_eq!(report.failures(), 2);
        assert!(!report.is_success());
    }
}
