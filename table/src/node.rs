//! The rendered table tree.
//!
//! A [`TableNode`] holds one main [`TableGroup`] (header row plus body rows)
//! and a flat list of sub-table groups produced by descent. Sub-tables of
//! sub-tables are not nested inside their parent group; they follow it in the
//! same list, depth-first.

use serde::{Deserialize, Serialize};

/// A single rendered cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub text: String,
    /// Extra columns this entry stretches over, on top of its own.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub more_cols: usize,
}

fn is_zero(value: &usize) -> bool {
    *value == 0
}

impl Entry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            more_cols: 0,
        }
    }

    pub fn spanning(text: impl Into<String>, more_cols: usize) -> Self {
        Self {
            text: text.into(),
            more_cols,
        }
    }

    /// Total number of columns covered, always at least one.
    pub fn span(&self) -> usize {
        1 + self.more_cols
    }
}

/// A rendered row: entries in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowNode {
    pub entries: Vec<Entry>,
}

impl RowNode {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// One single-column entry per label.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        Self {
            entries: labels.iter().map(|l| Entry::new(l.as_ref())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    pub fn spans(&self) -> Vec<usize> {
        self.entries.iter().map(Entry::span).collect()
    }

    /// Number of columns the row occupies once spans are applied.
    pub fn width(&self) -> usize {
        self.entries.iter().map(Entry::span).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub width: u32,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, width: u32) -> Self {
        Self {
            name: name.into(),
            width,
        }
    }
}

/// Column specs, header rows and body rows of one table or sub-table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableGroup {
    pub columns: Vec<ColumnSpec>,
    pub head: Vec<RowNode>,
    pub body: Vec<RowNode>,
}

impl TableGroup {
    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    /// The first header row, if any.
    pub fn header(&self) -> Option<&RowNode> {
        self.head.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    pub group: TableGroup,
    #[serde(default)]
    pub sub_tables: Vec<TableGroup>,
}

impl TableNode {
    pub fn new(group: TableGroup, sub_tables: Vec<TableGroup>) -> Self {
        Self {
            title: None,
            name: None,
            classes: Vec::new(),
            group,
            sub_tables,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_classes(mut self, classes: Vec<String>) -> Self {
        self.classes = classes;
        self
    }

    pub fn header(&self) -> Option<&RowNode> {
        self.group.header()
    }

    pub fn body(&self) -> &[RowNode] {
        &self.group.body
    }

    pub fn sub_tables(&self) -> &[TableGroup] {
        &self.sub_tables
    }

    /// The main group followed by every sub-table group.
    pub fn groups(&self) -> impl Iterator<Item = &TableGroup> {
        std::iter::once(&self.group).chain(self.sub_tables.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_span_defaults_to_one() {
        assert_eq!(Entry::new("x").span(), 1);
        assert_eq!(Entry::spanning("x", 2).span(), 3);
    }

    #[test]
    fn test_row_width_counts_spans() {
        let row = RowNode::new(vec![Entry::new("x"), Entry::spanning("int", 1)]);
        assert_eq!(row.len(), 2);
        assert_eq!(row.width(), 3);
        assert_eq!(row.spans(), vec![1, 2]);
    }

    #[test]
    fn test_serialization_omits_default_span() {
        let json = serde_json::to_value(Entry::new("x")).expect("Should serialize");
        assert_eq!(json, serde_json::json!({ "text": "x" }));

        let json = serde_json::to_value(Entry::spanning("x", 1)).expect("Should serialize");
        assert_eq!(json, serde_json::json!({ "text": "x", "more_cols": 1 }));
    }

    #[test]
    fn test_groups_lists_main_group_first() {
        let main = TableGroup {
            head: vec![RowNode::from_labels(&["a"])],
            ..TableGroup::default()
        };
        let sub = TableGroup {
            head: vec![RowNode::from_labels(&["b"])],
            ..TableGroup::default()
        };
        let node = TableNode::new(main, vec![sub]);
        let heads: Vec<Vec<&str>> = node
            .groups()
            .filter_map(TableGroup::header)
            .map(RowNode::texts)
            .collect();
        assert_eq!(heads, vec![vec!["a"], vec!["b"]]);
    }
}
