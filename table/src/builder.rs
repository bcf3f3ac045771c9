//! Recursive table building.
//!
//! Every row becomes a [`RowNode`]. With descent enabled, a row holding a
//! nested row sequence is promoted: instead of landing in its table's body it
//! becomes the header of a new sub-table whose body is the nested sequence,
//! rendered the same way. All sub-tables, however deep, end up in one flat
//! list on the outermost [`TableNode`], in depth-first order.

use std::fmt;

use crate::cell::{Cell, Row};
use crate::config::TableConfig;
use crate::error::{Error, Result};
use crate::node::{Entry, RowNode, TableGroup, TableNode};

/// Input that was rendered by fallback policy rather than as written.
///
/// `depth` is 0 for the top-level rows and grows by one per descent; `row` is
/// the row's index within its own sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// More cells than headers; the extra cells were kept as extra columns.
    RowTooLong {
        depth: usize,
        row: usize,
        cells: usize,
        max_cols: usize,
    },
    /// Only the first nested sequence descends; the others were shown as text.
    ExtraNested {
        depth: usize,
        row: usize,
        count: usize,
    },
    /// The nested sequence had no rows, so no sub-table was created.
    EmptyNested { depth: usize, row: usize },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowTooLong {
                depth,
                row,
                cells,
                max_cols,
            } => write!(
                f,
                "row {row} at depth {depth} has {cells} cells but the table has {max_cols} columns"
            ),
            Self::ExtraNested { depth, row, count } => write!(
                f,
                "row {row} at depth {depth} holds {count} more nested list(s); only the first is used as a sub-table"
            ),
            Self::EmptyNested { depth, row } => {
                write!(f, "row {row} at depth {depth} holds an empty nested list")
            }
        }
    }
}

/// Result of [`TableBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Built {
    pub table: TableNode,
    pub notices: Vec<Notice>,
}

/// Row cells left after the nested sequence (if any) was taken out.
struct SplitRow<'r> {
    cells: Vec<&'r Cell>,
    nested: Option<&'r [Row]>,
}

pub struct TableBuilder<'a> {
    config: &'a TableConfig,
    notices: Vec<Notice>,
}

impl<'a> TableBuilder<'a> {
    pub fn new(config: &'a TableConfig) -> Self {
        Self {
            config,
            notices: Vec::new(),
        }
    }

    /// Builds the table for `rows`. The rows are only read.
    pub fn build(mut self, rows: &[Row]) -> Result<Built> {
        log::debug!(
            "Building table: {} rows, {} columns, descend={}, spantolast={}",
            rows.len(),
            self.config.max_cols(),
            self.config.descend(),
            self.config.span_to_last()
        );

        let (body, sub_tables) = self.render_rows(rows, 0)?;
        let group = TableGroup {
            columns: self.config.column_specs(),
            head: vec![RowNode::from_labels(self.config.headers())],
            body,
        };

        log::debug!(
            "Built table: {} body rows, {} sub-tables, {} notices",
            group.body.len(),
            sub_tables.len(),
            self.notices.len()
        );

        Ok(Built {
            table: TableNode::new(group, sub_tables),
            notices: self.notices,
        })
    }

    fn render_rows(
        &mut self,
        rows: &[Row],
        depth: usize,
    ) -> Result<(Vec<RowNode>, Vec<TableGroup>)> {
        if depth > self.config.max_depth() {
            return Err(Error::depth_exceeded(self.config.max_depth()));
        }

        let mut body = Vec::with_capacity(rows.len());
        let mut sub_tables = Vec::new();

        for (idx, row) in rows.iter().enumerate() {
            let split = self.split_row(row, depth, idx);
            let rendered = self.render_row(&split.cells, depth, idx);

            match split.nested {
                Some(nested) if !nested.is_empty() => {
                    let (sub_body, descendants) = self.render_rows(nested, depth + 1)?;
                    sub_tables.push(TableGroup {
                        columns: self.config.column_specs(),
                        head: vec![rendered],
                        body: sub_body,
                    });
                    sub_tables.extend(descendants);
                }
                Some(_) => {
                    self.notices.push(Notice::EmptyNested { depth, row: idx });
                    body.push(rendered);
                }
                None => body.push(rendered),
            }
        }

        Ok((body, sub_tables))
    }

    /// Takes the first nested cell out of `row` when descending.
    fn split_row<'r>(&mut self, row: &'r Row, depth: usize, idx: usize) -> SplitRow<'r> {
        if !self.config.descend() {
            return SplitRow {
                cells: row.iter().collect(),
                nested: None,
            };
        }

        let mut cells = Vec::with_capacity(row.len());
        let mut nested = None;
        let mut extra = 0;
        for cell in row {
            match cell {
                Cell::Nested(rows) if nested.is_none() => nested = Some(rows.as_slice()),
                Cell::Nested(_) => {
                    extra += 1;
                    cells.push(cell);
                }
                Cell::Scalar(_) => cells.push(cell),
            }
        }

        if extra > 0 {
            log::warn!("Row {idx} at depth {depth} has {extra} unused nested list(s)");
            self.notices.push(Notice::ExtraNested {
                depth,
                row: idx,
                count: extra,
            });
        }

        SplitRow { cells, nested }
    }

    fn render_row(&mut self, cells: &[&Cell], depth: usize, idx: usize) -> RowNode {
        let max_cols = self.config.max_cols();
        let ncols = cells.len();

        if ncols > max_cols {
            log::debug!("Row {idx} at depth {depth} is longer than the header ({ncols} > {max_cols})");
            self.notices.push(Notice::RowTooLong {
                depth,
                row: idx,
                cells: ncols,
                max_cols,
            });
        }

        let span_last = self.config.span_to_last() && ncols < max_cols;
        let entries = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                if span_last && col == ncols - 1 {
                    Entry::spanning(cell.to_string(), max_cols - ncols)
                } else {
                    Entry::new(cell.to_string())
                }
            })
            .collect();

        RowNode::new(entries)
    }
}

/// Builds the table for `rows` under `config`, dropping the notices.
pub fn build(config: &TableConfig, rows: &[Row]) -> Result<TableNode> {
    TableBuilder::new(config).build(rows).map(|built| built.table)
}
