//! Row records and the cells they hold.
//!
//! A [`Cell`] is either plain text or a nested row sequence. Nested cells only
//! turn into sub-tables when the table is built with descent enabled; otherwise
//! they are displayed as text like any other cell.

use std::fmt;

/// One value inside a [`Row`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Text shown as-is in the rendered entry.
    Scalar(String),
    /// Rows of a sub-table rooted at the row holding this cell.
    Nested(Vec<Row>),
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Scalar(text.into())
    }

    pub fn nested(rows: impl IntoIterator<Item = Row>) -> Self {
        Self::Nested(rows.into_iter().collect())
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(_))
    }

    /// Returns the nested rows when this cell is a [`Cell::Nested`].
    pub fn as_nested(&self) -> Option<&[Row]> {
        match self {
            Self::Nested(rows) => Some(rows),
            Self::Scalar(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(text) => f.write_str(text),
            Self::Nested(rows) => {
                f.write_str("[")?;
                for (idx, row) in rows.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{row}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::Scalar(text.to_owned())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::Scalar(text)
    }
}

impl From<Vec<Row>> for Cell {
    fn from(rows: Vec<Row>) -> Self {
        Self::Nested(rows)
    }
}

/// An ordered record of cells, one table row before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, cell) in self.cells.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{cell}")?;
        }
        f.write_str("]")
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl<C: Into<Cell>, const N: usize> From<[C; N]> for Row {
    fn from(cells: [C; N]) -> Self {
        cells.into_iter().map(Into::into).collect()
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
