//! Export core modules shared by the CLI and tests.

pub mod pdf_core;

#[cfg(feature = "excel")]
pub mod excel_core;
