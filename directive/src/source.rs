//! Row data sources.
//!
//! The table builder never looks data up itself. A directive names its rows
//! with a dotted `module.member` path and a [`DataSource`] turns that path into
//! rows:
//!
//! - [`JsonDirSource`]: module `a.b` is the file `<root>/a/b.json`, member is a
//!   top-level key of the JSON object in it
//! - [`MemorySource`]: rows registered in memory, for embedding and tests

use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use doclist_table::{Cell, Row};
use serde_json::Value;

use crate::error::SourceError;

/// Resolves a `module.member` path into row data.
pub trait DataSource {
    fn resolve(&self, path: &str) -> Result<Vec<Row>, SourceError>;
}

impl<S: DataSource + ?Sized> DataSource for &S {
    fn resolve(&self, path: &str) -> Result<Vec<Row>, SourceError> {
        (**self).resolve(path)
    }
}

/// Splits `a.b.c` into module `a.b` and member `c`.
pub fn split_member_path(path: &str) -> Result<(&str, &str), SourceError> {
    match path.trim().rsplit_once('.') {
        Some((module, member))
            if !member.is_empty() && !module.is_empty() && module.split('.').all(|s| !s.is_empty()) =>
        {
            Ok((module, member))
        }
        _ => Err(SourceError::bad_path(path)),
    }
}

/// Reads row data from JSON files below a root directory.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File holding `module`: dots become directory separators. Every segment
    /// must be a plain name so the file stays under the root.
    pub fn module_path(&self, module: &str) -> Result<PathBuf, SourceError> {
        let mut path = self.root.clone();
        for segment in module.split('.') {
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(name)), None) => path.push(name),
                _ => return Err(SourceError::bad_path(module)),
            }
        }
        path.set_extension("json");
        Ok(path)
    }

    fn load_module(&self, module: &str) -> Result<Value, SourceError> {
        let path = self.module_path(module)?;
        if !path.is_file() {
            return Err(SourceError::ModuleNotFound {
                module: module.to_owned(),
            });
        }

        log::debug!("Loading row data module {module} from {}", path.display());
        let content = fs::read_to_string(&path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SourceError::Json { path, source })
    }
}

impl DataSource for JsonDirSource {
    fn resolve(&self, path: &str) -> Result<Vec<Row>, SourceError> {
        let (module, member) = split_member_path(path)?;
        let value = self.load_module(module)?;
        let rows = value
            .get(member)
            .ok_or_else(|| SourceError::member_not_found(module, member))?;
        rows_from_json(path, rows)
    }
}

/// Rows registered by path, held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    members: HashMap<String, Vec<Row>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, rows: Vec<Row>) {
        self.members.insert(path.into(), rows);
    }

    pub fn with(mut self, path: impl Into<String>, rows: Vec<Row>) -> Self {
        self.insert(path, rows);
        self
    }
}

impl DataSource for MemorySource {
    fn resolve(&self, path: &str) -> Result<Vec<Row>, SourceError> {
        let (module, member) = split_member_path(path)?;
        self.members
            .get(path.trim())
            .cloned()
            .ok_or_else(|| SourceError::member_not_found(module, member))
    }
}

/// Converts a JSON array of rows.
///
/// Each element is one row. Arrays map cell by cell, any other value becomes a
/// one-cell row. Inside a row, arrays become nested row sequences, strings are
/// taken verbatim, `null` is empty text and every other value shows its JSON
/// text.
pub fn rows_from_json(path: &str, value: &Value) -> Result<Vec<Row>, SourceError> {
    match value {
        Value::Array(items) => Ok(items.iter().map(row_from_json).collect()),
        other => Err(SourceError::NotARowSequence {
            path: path.to_owned(),
            found: json_kind(other),
        }),
    }
}

fn row_from_json(value: &Value) -> Row {
    match value {
        Value::Array(cells) => cells.iter().map(cell_from_json).collect(),
        other => Row::new(vec![cell_from_json(other)]),
    }
}

fn cell_from_json(value: &Value) -> Cell {
    match value {
        Value::String(text) => Cell::text(text.as_str()),
        Value::Null => Cell::text(""),
        Value::Array(items) => Cell::Nested(items.iter().map(row_from_json).collect()),
        other => Cell::text(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_member_path() {
        assert_eq!(
            split_member_path("pkg.mod.ITEMS").expect("valid"),
            ("pkg.mod", "ITEMS")
        );
        assert!(split_member_path("ITEMS").is_err());
        assert!(split_member_path("pkg.").is_err());
        assert!(split_member_path(".ITEMS").is_err());
        assert!(split_member_path("a..b").is_err());
    }

    #[test]
    fn test_rows_from_json_scalars() {
        let rows = rows_from_json("m.x", &json!([["a", 1, true, null], "lone"])).expect("rows");
        assert_eq!(rows[0], Row::from(["a", "1", "true", ""]));
        assert_eq!(rows[1], Row::from(["lone"]));
    }

    #[test]
    fn test_rows_from_json_nested() {
        let rows = rows_from_json("m.x", &json!([["A", [["A1", "B1"]]]])).expect("rows");
        assert_eq!(
            rows[0],
            Row::new(vec![Cell::text("A"), Cell::nested([Row::from(["A1", "B1"])])])
        );
    }

    #[test]
    fn test_rows_from_json_object_cell_is_text() {
        let rows = rows_from_json("m.x", &json!([[{"k": 1}]])).expect("rows");
        assert_eq!(rows[0], Row::from([r#"{"k":1}"#]));
    }

    #[test]
    fn test_rows_from_json_rejects_non_array() {
        let err = rows_from_json("m.x", &json!({"a": 1})).expect_err("object");
        assert!(matches!(
            err,
            SourceError::NotARowSequence {
                found: "object",
                ..
            }
        ));
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new().with("pkg.ITEMS", vec![Row::from(["a"])]);
        assert_eq!(source.resolve("pkg.ITEMS").expect("rows").len(), 1);
        assert!(matches!(
            source.resolve("pkg.OTHER"),
            Err(SourceError::MemberNotFound { .. })
        ));
        assert!(matches!(
            source.resolve("ITEMS"),
            Err(SourceError::BadPath { .. })
        ));
    }

    #[test]
    fn test_module_path() {
        let source = JsonDirSource::new("/data");
        assert_eq!(
            source.module_path("pkg.regs").expect("plain module"),
            PathBuf::from("/data/pkg/regs.json")
        );
    }

    #[test]
    fn test_module_path_stays_under_root() {
        let source = JsonDirSource::new("/data");
        for module in ["/etc/secrets", "pkg./tmp/x", "pkg..regs", "..", "pkg/regs"] {
            assert!(
                matches!(source.module_path(module), Err(SourceError::BadPath { .. })),
                "{module} should be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_rejects_file_outside_root() {
        let outside = tempfile::TempDir::new().expect("temp dir");
        fs::write(outside.path().join("secret.json"), r#"{"ROWS": [["leaked"]]}"#)
            .expect("write data");
        let root = tempfile::TempDir::new().expect("temp dir");
        let source = JsonDirSource::new(root.path());

        let module = outside.path().join("secret");
        let path = format!("{}.ROWS", module.display());
        assert!(matches!(
            source.resolve(&path),
            Err(SourceError::BadPath { .. })
        ));
    }
}
