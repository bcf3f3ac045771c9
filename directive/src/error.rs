use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a row-data path into rows.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("`{path}` is not a `module.member` path")]
    BadPath { path: String },
    #[error("no data module `{module}`")]
    ModuleNotFound { module: String },
    #[error("data module `{module}` has no member `{member}`")]
    MemberNotFound { module: String, member: String },
    #[error("`{path}` is a {found}, not a list of rows")]
    NotARowSequence { path: String, found: &'static str },
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    pub fn bad_path(path: impl Into<String>) -> Self {
        Self::BadPath { path: path.into() }
    }

    pub fn member_not_found(module: impl Into<String>, member: impl Into<String>) -> Self {
        Self::MemberNotFound {
            module: module.into(),
            member: member.into(),
        }
    }
}

/// Errors reported for a single directive.
#[derive(Debug, Error)]
pub enum DirectiveError {
    #[error("the documentedlist directive needs the :listobject: option naming the row data")]
    MissingDataSource,
    #[error("could not load the row data named by `{path}`")]
    UnresolvableDataSource {
        path: String,
        #[source]
        source: SourceError,
    },
    #[error("the documentedlist directive does not accept content")]
    UnexpectedContent,
    #[error("unknown option :{name}:")]
    UnknownOption { name: String },
    #[error("invalid value for :{name}: ({reason})")]
    InvalidOption { name: String, reason: String },
    #[error("malformed directive: {reason}")]
    MalformedDirective { reason: String },
    #[error(transparent)]
    Table(#[from] doclist_table::Error),
}

impl DirectiveError {
    pub fn invalid_option(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDirective {
            reason: reason.into(),
        }
    }
}
