//! Check that every directive in a file resolves and builds.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result, bail};
use doclist_directive::{DataSource, Directive, Runner};
use tracing::instrument;

use crate::output::Output;

#[instrument(skip_all, name = "check", fields(file = %file.display()))]
pub fn run_check<S: DataSource>(runner: &Runner<S>, file: &Path) -> Result<()> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let out = Output::stderr();
    let directives = Directive::parse_all(&source);
    let mut failures = 0;
    for directive in &directives {
        let location = format!("{}:{}", file.display(), directive.line);
        match runner.run(directive) {
            Ok(output) => {
                out.success(format!(
                    "{location}: {} body row(s), {} sub-table(s)",
                    output.table.body().len(),
                    output.table.sub_tables().len()
                ));
                for message in &output.messages {
                    out.warning(format!("{location}: {message}"));
                }
            }
            Err(e) => {
                failures += 1;
                out.error(format!("{location}: {:#}", anyhow::Error::from(e)));
            }
        }
    }

    out.count("Directives checked", directives.len());
    if failures > 0 {
        bail!("{failures} directive(s) failed");
    }
    Ok(())
}
