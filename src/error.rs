use thiserror::Error;

#[derive(Error, Debug)]
pub enum CertGenError {
    #[error(transparent)]
    Common(#[from] certgen_common::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Could not read spreadsheet {path}: {reason}")]
    SpreadsheetLoad { path: String, reason: String },

    #[error("Could not load template {path}: {reason}")]
    TemplateLoad { path: String, reason: String },

    #[error("Could not load font {path}: {reason}")]
    FontLoad { path: String, reason: String },

    #[error("Could not save image {path}: {reason}")]
    ImageSave { path: String, reason: String },

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("Duplicate paper id(s): {}", .0.join(", "))]
    DuplicatePaperId(Vec<String>),

    #[error("Excel generation error: {0}")]
    ExcelGeneration(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CertGenError>;
