//! Table configuration shared by every level of a build.

use crate::error::{Error, Result};
use crate::node::ColumnSpec;

/// How many levels of nested rows a build follows before giving up.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Splits 100 evenly across `cols` columns.
///
/// This is the width function used when no explicit widths are given. Every
/// column gets at least a width of one.
pub fn equal_widths(cols: usize) -> Vec<u32> {
    if cols == 0 {
        return Vec::new();
    }
    let share = u32::try_from(100 / cols).unwrap_or(1).max(1);
    vec![share; cols]
}

/// Immutable settings for one table build.
///
/// The header count fixes the column count; widths always match it. Sub-tables
/// created by descent reuse the same headers and widths as the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    headers: Vec<String>,
    column_widths: Vec<u32>,
    span_to_last: bool,
    descend: bool,
    max_depth: usize,
}

impl TableConfig {
    /// Creates a config with evenly split column widths.
    pub fn new<I, S>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_widths_from(headers, equal_widths)
    }

    /// Creates a config whose widths come from `widths_for(column_count)`.
    pub fn with_widths_from<I, S, F>(headers: I, widths_for: F) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnOnce(usize) -> Vec<u32>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if headers.is_empty() {
            return Err(Error::EmptyHeaders);
        }
        let column_widths = widths_for(headers.len());
        validate_widths(headers.len(), &column_widths)?;

        Ok(Self {
            headers,
            column_widths,
            span_to_last: false,
            descend: false,
            max_depth: DEFAULT_MAX_DEPTH,
        })
    }

    /// Replaces the column widths. The count must match the header count.
    pub fn with_column_widths(mut self, widths: Vec<u32>) -> Result<Self> {
        validate_widths(self.headers.len(), &widths)?;
        self.column_widths = widths;
        Ok(self)
    }

    pub fn with_span_to_last(mut self, span_to_last: bool) -> Self {
        self.span_to_last = span_to_last;
        self
    }

    pub fn with_descend(mut self, descend: bool) -> Self {
        self.descend = descend;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn max_cols(&self) -> usize {
        self.headers.len()
    }

    pub fn column_widths(&self) -> &[u32] {
        &self.column_widths
    }

    pub fn span_to_last(&self) -> bool {
        self.span_to_last
    }

    pub fn descend(&self) -> bool {
        self.descend
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Column specs named `c0`, `c1`, ... carrying the configured widths.
    pub fn column_specs(&self) -> Vec<ColumnSpec> {
        self.column_widths
            .iter()
            .enumerate()
            .map(|(idx, width)| ColumnSpec::new(format!("c{idx}"), *width))
            .collect()
    }
}

fn validate_widths(expected: usize, widths: &[u32]) -> Result<()> {
    if widths.len() != expected {
        return Err(Error::width_count_mismatch(expected, widths.len()));
    }
    if let Some(column) = widths.iter().position(|w| *w == 0) {
        return Err(Error::ZeroWidth { column });
    }
    Ok(())
}
