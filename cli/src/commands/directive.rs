//! Render every directive found in a reStructuredText file.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result, bail};
use doclist_directive::{DataSource, Directive, Runner};
use tracing::instrument;

use crate::cli::Format;
use crate::commands::{format_tables, report_messages};
use crate::output::Output;

#[instrument(skip_all, name = "directive", fields(file = %file.display()))]
pub fn run_directive<S: DataSource>(runner: &Runner<S>, file: &Path, format: Format) -> Result<()> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let directives = Directive::parse_all(&source);
    if directives.is_empty() {
        Output::stderr().dim(format!("No documentedlist directives in {}", file.display()));
        return Ok(());
    }

    let err = Output::stderr();
    let mut tables = Vec::with_capacity(directives.len());
    let mut failures = 0;
    for directive in &directives {
        match runner.run(directive) {
            Ok(output) => {
                report_messages(&output);
                tables.push(output.table);
            }
            Err(e) => {
                failures += 1;
                err.error(format!(
                    "{}:{}: {:#}",
                    file.display(),
                    directive.line,
                    anyhow::Error::from(e)
                ));
            }
        }
    }

    if !tables.is_empty() {
        Output::new().print(format_tables(&tables, format)?);
    }
    if failures > 0 {
        bail!("{failures} of {} directive(s) failed", directives.len());
    }
    Ok(())
}
