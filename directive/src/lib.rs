//! The `documentedlist` directive around the table builder.
//!
//! This crate is the caller side of [`doclist_table`]:
//!
//! - [`parse`]: finds directive blocks and reads their options
//! - [`options`]: turns options into a [`doclist_table::TableConfig`]
//! - [`source`]: resolves `module.member` paths into rows
//! - [`run`]: ties the above together and attaches title and name
//! - [`html`]: writes a built table as HTML
//!
//! JSON output comes for free from the `serde` derives on the table tree.

pub mod error;
pub mod html;
pub mod options;
pub mod parse;
pub mod run;
pub mod source;

pub use error::{DirectiveError, SourceError};
pub use html::to_html;
pub use options::{DEFAULT_HEADER, DirectiveOptions, parse_widths};
pub use parse::{DIRECTIVE_MARKER, Directive};
pub use run::{DirectiveOutput, Runner};
pub use source::{DataSource, JsonDirSource, MemorySource, rows_from_json, split_member_path};
