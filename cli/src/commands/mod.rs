//! Command implementations for the doclist CLI.
//!
//! Each subcommand is implemented in its own module.

pub mod check;
pub mod completions;
pub mod directive;
pub mod render;

pub use check::run_check;
pub use completions::generate_completions;
pub use directive::run_directive;
pub use render::run_render;

use anyhow::{Context as _, Result};
use doclist_directive::{DirectiveOutput, to_html};
use doclist_table::TableNode;

use crate::cli::Format;
use crate::output::Output;
use crate::text::to_text;

/// Formats a single table.
pub fn format_table(table: &TableNode, format: Format) -> Result<String> {
    match format {
        Format::Html => Ok(to_html(table)),
        Format::Text => Ok(to_text(table)),
        Format::Json => {
            serde_json::to_string_pretty(table).context("Failed to serialize table as JSON")
        }
    }
}

/// Formats several tables; JSON output becomes one array.
pub fn format_tables(tables: &[TableNode], format: Format) -> Result<String> {
    match format {
        Format::Json => {
            serde_json::to_string_pretty(tables).context("Failed to serialize tables as JSON")
        }
        Format::Html | Format::Text => {
            let parts = tables
                .iter()
                .map(|table| format_table(table, format))
                .collect::<Result<Vec<_>>>()?;
            Ok(parts.join("\n"))
        }
    }
}

/// Prints the non-fatal messages of a directive run as warnings.
pub fn report_messages(output: &DirectiveOutput) {
    let err = Output::stderr();
    for message in &output.messages {
        tracing::debug!("Directive message: {message}");
        err.warning(message);
    }
}
