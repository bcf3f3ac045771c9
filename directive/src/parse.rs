//! Reading `documentedlist` directive blocks out of reStructuredText source.
//!
//! A block looks like:
//!
//! ```text
//! .. documentedlist:: Optional title
//!    :listobject: package.module.MEMBER
//!    :header: Name Type "Long description"
//!    :spantolast:
//!    :descend:
//! ```
//!
//! The block ends at the first non-blank line indented no deeper than the
//! marker, so blocks nested in lists or admonitions work too. An option value
//! may wrap onto lines indented deeper than its field. Only the option list is
//! understood; anything else inside the block is kept as content so the runner
//! can reject it.

use crate::error::DirectiveError;
use crate::options::DirectiveOptions;

/// Marker that opens a block.
pub const DIRECTIVE_MARKER: &str = ".. documentedlist::";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directive {
    /// 1-based line of the marker within the parsed source.
    pub line: usize,
    pub title: Option<String>,
    pub options: Vec<(String, String)>,
    pub content: Vec<String>,
}

impl Directive {
    /// Parses the first directive block in `source`.
    pub fn parse(source: &str) -> Result<Self, DirectiveError> {
        let lines: Vec<&str> = source.lines().collect();
        let start = lines
            .iter()
            .position(|line| is_marker(line))
            .ok_or_else(|| DirectiveError::malformed("no documentedlist directive found"))?;
        Ok(parse_block(&lines, start).0)
    }

    /// Parses every directive block in `source`, in order.
    pub fn parse_all(source: &str) -> Vec<Self> {
        let lines: Vec<&str> = source.lines().collect();
        let mut directives = Vec::new();
        let mut idx = 0;

        while idx < lines.len() {
            if is_marker(lines[idx]) {
                let (directive, next) = parse_block(&lines, idx);
                directives.push(directive);
                idx = next;
            } else {
                idx += 1;
            }
        }

        log::debug!("Found {} documentedlist directive(s)", directives.len());
        directives
    }

    /// Interprets the raw option list.
    pub fn options(&self) -> Result<DirectiveOptions, DirectiveError> {
        DirectiveOptions::from_pairs(
            self.options
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        )
    }

    pub fn has_content(&self) -> bool {
        self.content.iter().any(|line| !line.trim().is_empty())
    }
}

fn is_marker(line: &str) -> bool {
    line.trim_start().starts_with(DIRECTIVE_MARKER)
}

/// Parses the block opening at `start`; returns it with the index of the first
/// line after the block.
fn parse_block(lines: &[&str], start: usize) -> (Directive, usize) {
    let marker_indent = indent_of(lines[start]);
    let marker_line = lines[start].trim_start();
    let title = marker_line[DIRECTIVE_MARKER.len()..].trim();

    let mut directive = Directive {
        line: start + 1,
        title: (!title.is_empty()).then(|| title.to_owned()),
        ..Directive::default()
    };

    let mut idx = start + 1;
    let mut in_options = true;
    // Indent of the field that owns the current option, for continuation lines.
    let mut option_indent = None;
    while idx < lines.len() {
        let line = lines[idx];
        let trimmed = line.trim();
        let indent = indent_of(line);
        if !trimmed.is_empty() && indent <= marker_indent {
            break;
        }
        idx += 1;

        if trimmed.is_empty() {
            if !directive.options.is_empty() || !directive.content.is_empty() {
                in_options = false;
            }
            continue;
        }

        if in_options {
            if let Some((name, value)) = parse_option(trimmed) {
                directive.options.push((name.to_owned(), value.to_owned()));
                option_indent = Some(indent);
                continue;
            }
            if let (Some(owner), Some((_, value))) = (option_indent, directive.options.last_mut())
                && indent > owner
            {
                if !value.is_empty() {
                    value.push(' ');
                }
                value.push_str(trimmed);
                continue;
            }
        }
        in_options = false;
        directive.content.push(trimmed.to_owned());
    }

    (directive, idx)
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Splits `:name: value` into its parts.
fn parse_option(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix(':')?;
    let (name, value) = rest.split_once(':')?;
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    Some((name, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_option() {
        assert_eq!(parse_option(":header: a b"), Some(("header", "a b")));
        assert_eq!(parse_option(":descend:"), Some(("descend", "")));
        assert_eq!(parse_option("not an option"), None);
        assert_eq!(parse_option(":bad name: x"), None);
    }

    #[test]
    fn test_parse_full_block() {
        let source = "\
Some text.

.. documentedlist:: Registers
   :listobject: device.regs.REGISTERS
   :header: Name \"Reset value\" Description
   :spantolast:

After the block.
";
        let directive = Directive::parse(source).expect("directive");
        assert_eq!(directive.line, 3);
        assert_eq!(directive.title.as_deref(), Some("Registers"));
        assert_eq!(directive.options.len(), 3);
        assert_eq!(
            directive.options[0],
            ("listobject".to_owned(), "device.regs.REGISTERS".to_owned())
        );
        assert!(!directive.has_content());

        let options = directive.options().expect("valid options");
        assert!(options.spantolast);
        assert!(!options.descend);
    }

    #[test]
    fn test_content_after_options_is_kept() {
        let source = "\
.. documentedlist::
   :listobject: a.b

   Some body text that does not belong here.
";
        let directive = Directive::parse(source).expect("directive");
        assert!(directive.title.is_none());
        assert!(directive.has_content());
        assert_eq!(directive.options.len(), 1);
    }

    #[test]
    fn test_option_after_blank_line_is_content() {
        let source = "\
.. documentedlist::
   :listobject: a.b

   :descend:
";
        let directive = Directive::parse(source).expect("directive");
        assert_eq!(directive.options.len(), 1);
        assert_eq!(directive.content, vec![":descend:"]);
    }

    #[test]
    fn test_parse_all_finds_every_block() {
        let source = "\
.. documentedlist:: First
   :listobject: a.first

Text between.

.. documentedlist:: Second
   :listobject: a.second
   :descend:
";
        let directives = Directive::parse_all(source);
        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].title.as_deref(), Some("First"));
        assert_eq!(directives[1].title.as_deref(), Some("Second"));
        assert_eq!(directives[1].line, 6);
    }

    #[test]
    fn test_indented_block_ends_at_marker_indent() {
        let source = "\
- item

  .. documentedlist:: T
     :listobject: a.b

  More list text.
";
        let directive = Directive::parse(source).expect("directive");
        assert_eq!(directive.line, 3);
        assert_eq!(directive.title.as_deref(), Some("T"));
        assert_eq!(
            directive.options,
            vec![("listobject".to_owned(), "a.b".to_owned())]
        );
        assert!(!directive.has_content());
    }

    #[test]
    fn test_parse_all_resumes_after_indented_block() {
        let source = "\
.. note::

   .. documentedlist::
      :listobject: a.first

   Note text.

.. documentedlist::
   :listobject: a.second
";
        let directives = Directive::parse_all(source);
        assert_eq!(directives.len(), 2);
        assert!(directives.iter().all(|d| !d.has_content()));
    }

    #[test]
    fn test_option_value_continues_on_deeper_lines() {
        let source = "\
.. documentedlist::
   :listobject: a.b
   :header: Name Type
      \"Long description\"
   :descend:
";
        let directive = Directive::parse(source).expect("directive");
        assert!(!directive.has_content());
        assert_eq!(
            directive.options[1],
            ("header".to_owned(), "Name Type \"Long description\"".to_owned())
        );

        let options = directive.options().expect("valid options");
        assert_eq!(
            options.headers().expect("headers"),
            vec!["Name", "Type", "Long description"]
        );
        assert!(options.descend);
    }

    #[test]
    fn test_parse_without_directive_fails() {
        let err = Directive::parse("plain text").expect_err("no directive");
        assert!(matches!(err, DirectiveError::MalformedDirective { .. }));
    }
}
