//! HTML output for built tables.
//!
//! The main group renders as `<thead>` + `<tbody>`; every sub-table follows as
//! its own `<tbody class="subtable">` whose first row is the promoted header
//! row. Column widths become percentages of their sum.

use doclist_table::{ColumnSpec, RowNode, TableGroup, TableNode};
use maud::{Markup, html};

pub fn to_html(table: &TableNode) -> String {
    render(table).into_string()
}

/// Text is escaped by `maud`.
fn render(table: &TableNode) -> Markup {
    let mut classes = vec!["docutils", "documentedlist"];
    classes.extend(table.classes.iter().map(String::as_str));

    html! {
        table id=[table.name.as_deref()] class=(classes.join(" ")) {
            @if let Some(title) = &table.title {
                caption { (title) }
            }
            (colgroup(&table.group.columns))
            thead {
                @for row in &table.group.head {
                    (table_row(row, true, None))
                }
            }
            tbody {
                @for row in &table.group.body {
                    (table_row(row, false, None))
                }
            }
            @for group in &table.sub_tables {
                (sub_table(group))
            }
        }
    }
}

fn sub_table(group: &TableGroup) -> Markup {
    html! {
        tbody class="subtable" {
            @for row in &group.head {
                (table_row(row, true, Some("subtable-head")))
            }
            @for row in &group.body {
                (table_row(row, false, None))
            }
        }
    }
}

fn colgroup(columns: &[ColumnSpec]) -> Markup {
    let total: u64 = columns.iter().map(|c| u64::from(c.width)).sum();
    html! {
        @if total > 0 {
            colgroup {
                @for column in columns {
                    col style={ "width: " (u64::from(column.width) * 100 / total) "%" };
                }
            }
        }
    }
}

fn table_row(row: &RowNode, header: bool, class: Option<&str>) -> Markup {
    html! {
        tr class=[class] {
            @for entry in &row.entries {
                @let colspan = (entry.span() > 1).then(|| entry.span());
                @if header {
                    th colspan=[colspan] { (entry.text) }
                } @else {
                    td colspan=[colspan] { (entry.text) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doclist_table::{Cell, Row, TableConfig, build};

    #[test]
    fn test_text_is_escaped() {
        let config = TableConfig::new(["<b>", "a & b"]).expect("valid config");
        let table = build(&config, &[Row::from(["x < y", "\"quoted\""])])
            .expect("build")
            .with_title("<script>");
        let html = to_html(&table);

        assert!(html.contains("<caption>&lt;script&gt;</caption>"));
        assert!(html.contains("<th>&lt;b&gt;</th><th>a &amp; b</th>"));
        assert!(html.contains("<td>x &lt; y</td><td>&quot;quoted&quot;</td>"));
    }

    #[test]
    fn test_html_spans_and_caption() {
        let config = TableConfig::new(["Name", "Type", "Description"])
            .expect("valid config")
            .with_span_to_last(true);
        let table = build(&config, &[Row::from(["x", "int"])])
            .expect("build")
            .with_title("Fields")
            .with_name("fields");
        let html = to_html(&table);

        assert!(html.starts_with("<table id=\"fields\" class=\"docutils documentedlist\">"));
        assert!(html.contains("<caption>Fields</caption>"));
        assert!(html.contains("<col style=\"width: 33%\">"));
        assert!(html.contains("<tr><th>Name</th><th>Type</th><th>Description</th></tr>"));
        assert!(html.contains("<tr><td>x</td><td colspan=\"2\">int</td></tr>"));
    }

    #[test]
    fn test_html_without_name_has_no_id() {
        let config = TableConfig::new(["a"]).expect("valid config");
        let table = build(&config, &[])
            .expect("build")
            .with_classes(vec!["wide".to_owned()]);
        let html = to_html(&table);

        assert!(html.starts_with("<table class=\"docutils documentedlist wide\">"));
        assert!(!html.contains("<caption>"));
    }

    #[test]
    fn test_html_sub_tables_follow_body() {
        let config = TableConfig::new(["a", "b"])
            .expect("valid config")
            .with_descend(true);
        let rows = vec![
            Row::from(["plain", "row"]),
            Row::new(vec![
                Cell::text("head"),
                Cell::text("er"),
                Cell::nested([Row::from(["c1", "c2"])]),
            ]),
        ];
        let html = to_html(&build(&config, &rows).expect("build"));

        let body_at = html.find("<td>plain</td>").expect("body row");
        let sub_at = html.find("<tbody class=\"subtable\">").expect("sub-table");
        assert!(body_at < sub_at);
        assert!(html.contains("<tr class=\"subtable-head\"><th>head</th><th>er</th></tr>"));
        assert!(html.contains("<tr><td>c1</td><td>c2</td></tr>"));
    }
}
