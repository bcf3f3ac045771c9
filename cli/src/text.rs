//! Plain-text table output using `tabled`.
//!
//! Each group (the main table, then every sub-table) is printed as its own
//! box. Spanning entries are widened with [`Span::column`] over padding cells.

use doclist_table::{RowNode, TableGroup, TableNode};
use tabled::builder::Builder;
use tabled::settings::{Span, Style};

pub fn to_text(table: &TableNode) -> String {
    let mut sections = Vec::with_capacity(table.sub_tables.len() + 2);
    if let Some(title) = &table.title {
        sections.push(title.clone());
    }
    sections.extend(table.groups().map(render_group));
    sections.join("\n")
}

fn render_group(group: &TableGroup) -> String {
    let width = group
        .head
        .iter()
        .chain(&group.body)
        .map(RowNode::width)
        .max()
        .unwrap_or(0)
        .max(group.cols());

    let mut builder = Builder::default();
    let mut spans = Vec::new();
    for (row_idx, row) in group.head.iter().chain(&group.body).enumerate() {
        let mut record: Vec<String> = Vec::with_capacity(width);
        for entry in &row.entries {
            if entry.more_cols > 0 {
                spans.push((row_idx, record.len(), entry.span()));
            }
            record.push(entry.text.clone());
            record.extend(std::iter::repeat_n(String::new(), entry.more_cols));
        }
        record.resize(width, String::new());
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    for (row, col, span) in spans {
        table.modify((row, col), Span::column(span as _));
    }
    table.to_string()
}
