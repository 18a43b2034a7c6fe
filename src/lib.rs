//! Spreadsheet-driven certificate generator
//!
//! Row source → column resolution → title wrapping → rendering → export.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod render;
pub mod source;
