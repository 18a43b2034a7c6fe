//! Certificate Generator Common Library
//!
//! IO-free types and logic shared by the CLI and its tests

pub mod types;
pub mod layout;
pub mod alias;
pub mod color;
pub mod error;
pub mod wrap;
pub mod export;

pub use types::{ParticipantRecord, RowTable};
pub use layout::{Anchor, FieldStyle, RenderConfig, TextStyle};
pub use alias::{resolve_columns, FieldMapping, LogicalField, ResolvedColumn, ALIAS_TABLE};
pub use color::{parse_color, Color};
pub use error::{Error, Result};
pub use wrap::{wrap_title, LayoutVariant, WrappedTitle};
