//! Render one list named on the command line.

use anyhow::{Context as _, Result};
use doclist_directive::{DataSource, Directive, Runner};
use tracing::instrument;

use crate::cli::{Format, RenderArgs};
use crate::commands::{format_table, report_messages};
use crate::output::Output;

impl RenderArgs {
    /// The equivalent directive, so flags and directive options share one path.
    pub fn to_directive(&self, default_header: Option<&str>) -> Directive {
        let mut options = vec![("listobject".to_owned(), self.listobject.clone())];
        if let Some(header) = self.header.as_deref().or(default_header) {
            options.push(("header".to_owned(), header.to_owned()));
        }
        if self.spantolast {
            options.push(("spantolast".to_owned(), String::new()));
        }
        if self.descend {
            options.push(("descend".to_owned(), String::new()));
        }
        if let Some(widths) = &self.widths {
            options.push(("widths".to_owned(), widths.clone()));
        }
        if let Some(name) = &self.name {
            options.push(("name".to_owned(), name.clone()));
        }

        Directive {
            line: 1,
            title: self.title.clone(),
            options,
            content: Vec::new(),
        }
    }
}

#[instrument(skip_all, name = "render", fields(listobject = %args.listobject))]
pub fn run_render<S: DataSource>(
    runner: &Runner<S>,
    args: &RenderArgs,
    default_header: Option<&str>,
    format: Format,
) -> Result<()> {
    let directive = args.to_directive(default_header);
    let output = runner
        .run(&directive)
        .with_context(|| format!("Failed to render {}", args.listobject))?;

    report_messages(&output);
    Output::new().print(format_table(&output.table, format)?);
    Ok(())
}
