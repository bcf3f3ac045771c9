//! Directive options and their conversion into a [`TableConfig`].

use doclist_table::{DEFAULT_MAX_DEPTH, TableConfig};

use crate::error::DirectiveError;

/// Header used when no `:header:` option is given.
pub const DEFAULT_HEADER: &str = "Item Description";

/// Options of one `documentedlist` directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveOptions {
    pub listobject: Option<String>,
    pub header: Option<String>,
    pub spantolast: bool,
    pub descend: bool,
    pub widths: Option<Vec<u32>>,
    pub name: Option<String>,
    pub classes: Vec<String>,
}

impl DirectiveOptions {
    /// Reads `(name, value)` option pairs in the order they were written.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, DirectiveError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::default();
        let mut seen: Vec<&str> = Vec::new();

        for (name, value) in pairs {
            if seen.contains(&name) {
                return Err(DirectiveError::invalid_option(name, "given more than once"));
            }
            seen.push(name);

            let value = value.trim();
            match name {
                "listobject" => options.listobject = non_empty(value),
                "header" => options.header = Some(value.to_owned()),
                "spantolast" => options.spantolast = true,
                "descend" => {
                    if !value.is_empty() {
                        return Err(DirectiveError::invalid_option(name, "takes no value"));
                    }
                    options.descend = true;
                }
                "widths" => options.widths = Some(parse_widths(value)?),
                "name" => options.name = non_empty(value),
                "class" => {
                    options.classes = value.split_whitespace().map(str::to_owned).collect();
                }
                other => {
                    return Err(DirectiveError::UnknownOption {
                        name: other.to_owned(),
                    });
                }
            }
        }

        Ok(options)
    }

    /// Header labels, split with shell quoting rules.
    pub fn headers(&self) -> Result<Vec<String>, DirectiveError> {
        let header = self.header.as_deref().unwrap_or(DEFAULT_HEADER);
        shlex::split(header)
            .ok_or_else(|| DirectiveError::invalid_option("header", "unbalanced quotes"))
    }

    /// Builds the table config, taking widths from `:widths:` or `widths_for`.
    pub fn table_config<F>(
        &self,
        widths_for: F,
        max_depth: usize,
    ) -> Result<TableConfig, DirectiveError>
    where
        F: FnOnce(usize) -> Vec<u32>,
    {
        let headers = self.headers()?;
        let config = match &self.widths {
            Some(widths) => {
                let widths = widths.clone();
                TableConfig::with_widths_from(headers, move |_| widths)?
            }
            None => TableConfig::with_widths_from(headers, widths_for)?,
        };

        Ok(config
            .with_span_to_last(self.spantolast)
            .with_descend(self.descend)
            .with_max_depth(max_depth))
    }

    /// Same as [`Self::table_config`] with the default depth limit.
    pub fn default_table_config<F>(&self, widths_for: F) -> Result<TableConfig, DirectiveError>
    where
        F: FnOnce(usize) -> Vec<u32>,
    {
        self.table_config(widths_for, DEFAULT_MAX_DEPTH)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// Parses `1 2 3` or `1, 2, 3` into positive widths.
pub fn parse_widths(value: &str) -> Result<Vec<u32>, DirectiveError> {
    let widths = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<u32>() {
            Ok(width) if width > 0 => Ok(width),
            _ => Err(DirectiveError::invalid_option(
                "widths",
                format!("`{part}` is not a positive integer"),
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if widths.is_empty() {
        return Err(DirectiveError::invalid_option("widths", "no widths given"));
    }
    Ok(widths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use doclist_table::equal_widths;

    #[test]
    fn test_default_header_splits_into_two_labels() {
        let options = DirectiveOptions::default();
        assert_eq!(
            options.headers().expect("default header"),
            vec!["Item", "Description"]
        );
    }

    #[test]
    fn test_quoted_header_labels() {
        let options = DirectiveOptions::from_pairs([("header", r#""Long name" Type 'A b'"#)])
            .expect("valid options");
        assert_eq!(
            options.headers().expect("valid header"),
            vec!["Long name", "Type", "A b"]
        );
    }

    #[test]
    fn test_unbalanced_quotes_are_rejected() {
        let options =
            DirectiveOptions::from_pairs([("header", r#""Name Type"#)]).expect("valid options");
        assert!(matches!(
            options.headers(),
            Err(DirectiveError::InvalidOption { name, .. }) if name == "header"
        ));
    }

    #[test]
    fn test_flags() {
        let options = DirectiveOptions::from_pairs([("spantolast", "yes"), ("descend", "")])
            .expect("valid options");
        assert!(options.spantolast);
        assert!(options.descend);
    }

    #[test]
    fn test_descend_rejects_a_value() {
        let err = DirectiveOptions::from_pairs([("descend", "yes")]).expect_err("value given");
        assert!(matches!(err, DirectiveError::InvalidOption { .. }));
    }

    #[test]
    fn test_unknown_and_duplicate_options() {
        let err = DirectiveOptions::from_pairs([("colour", "red")]).expect_err("unknown");
        assert!(matches!(err, DirectiveError::UnknownOption { name } if name == "colour"));

        let err = DirectiveOptions::from_pairs([("header", "a"), ("header", "b")])
            .expect_err("duplicate");
        assert!(matches!(err, DirectiveError::InvalidOption { .. }));
    }

    #[test]
    fn test_parse_widths() {
        assert_eq!(parse_widths("1 2 3").expect("valid"), vec![1, 2, 3]);
        assert_eq!(parse_widths("10, 90").expect("valid"), vec![10, 90]);
        assert!(parse_widths("").is_err());
        assert!(parse_widths("1 0").is_err());
        assert!(parse_widths("1 x").is_err());
    }

    #[test]
    fn test_table_config_uses_width_function_without_widths() {
        let options = DirectiveOptions::from_pairs([("header", "a b c"), ("spantolast", "")])
            .expect("valid options");
        let config = options
            .default_table_config(equal_widths)
            .expect("valid config");
        assert_eq!(config.column_widths(), &[33, 33, 33]);
        assert!(config.span_to_last());
        assert!(!config.descend());
    }

    #[test]
    fn test_table_config_checks_width_count() {
        let options = DirectiveOptions::from_pairs([("header", "a b"), ("widths", "1 2 3")])
            .expect("valid options");
        let err = options
            .default_table_config(equal_widths)
            .expect_err("three widths, two headers");
        assert!(matches!(
            err,
            DirectiveError::Table(doclist_table::Error::WidthCountMismatch {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn test_empty_header_is_a_table_error() {
        let options = DirectiveOptions::from_pairs([("header", "")]).expect("valid options");
        let err = options
            .default_table_config(equal_widths)
            .expect_err("no labels");
        assert!(matches!(
            err,
            DirectiveError::Table(doclist_table::Error::EmptyHeaders)
        ));
    }
}
