//! Running a parsed directive against a data source.

use doclist_table::{DEFAULT_MAX_DEPTH, TableBuilder, TableNode, equal_widths};

use crate::error::DirectiveError;
use crate::parse::Directive;
use crate::source::DataSource;

/// A built table plus the non-fatal messages produced while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveOutput {
    pub table: TableNode,
    pub messages: Vec<String>,
}

/// Runs directives: resolves their data, builds the table, attaches the title.
pub struct Runner<S> {
    source: S,
    widths_for: fn(usize) -> Vec<u32>,
    max_depth: usize,
}

impl<S: DataSource> Runner<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            widths_for: equal_widths,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Column widths used when a directive has no `:widths:` option.
    pub fn with_widths(mut self, widths_for: fn(usize) -> Vec<u32>) -> Self {
        self.widths_for = widths_for;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn run(&self, directive: &Directive) -> Result<DirectiveOutput, DirectiveError> {
        if directive.has_content() {
            return Err(DirectiveError::UnexpectedContent);
        }

        let options = directive.options()?;
        let path = options
            .listobject
            .as_deref()
            .ok_or(DirectiveError::MissingDataSource)?;

        let rows = self.source.resolve(path).map_err(|source| {
            log::warn!("Could not resolve {path}: {source}");
            DirectiveError::UnresolvableDataSource {
                path: path.to_owned(),
                source,
            }
        })?;

        let config = options.table_config(self.widths_for, self.max_depth)?;
        let built = TableBuilder::new(&config).build(&rows)?;

        let mut table = built.table.with_classes(options.classes.clone());
        if let Some(title) = &directive.title {
            table = table.with_title(title.as_str());
        }
        if let Some(name) = &options.name {
            table = table.with_name(name.as_str());
        }

        let messages = built
            .notices
            .iter()
            .map(|notice| format!("line {}: {notice}", directive.line))
            .collect();

        Ok(DirectiveOutput { table, messages })
    }
}
