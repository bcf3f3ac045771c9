//! Table trees for documented lists.
//!
//! Turns an ordered sequence of row records into a [`TableNode`]: a header
//! row, body rows and, when descent is enabled, sub-tables for rows that carry
//! a nested row sequence.
//!
//! ```
//! use doclist_table::{Row, TableConfig, build};
//!
//! let config = TableConfig::new(["Name", "Type", "Description"])
//!     .expect("three headers")
//!     .with_span_to_last(true);
//! let rows = vec![Row::from(["x", "int"])];
//!
//! let table = build(&config, &rows).expect("no descent, cannot fail");
//! assert_eq!(table.body()[0].spans(), vec![1, 2]);
//! ```

mod builder;
mod cell;
mod config;
mod error;
mod node;

pub use builder::{Built, Notice, TableBuilder, build};
pub use cell::{Cell, Row};
pub use config::{DEFAULT_MAX_DEPTH, TableConfig, equal_widths};
pub use error::{Error, Result};
pub use node::{ColumnSpec, Entry, RowNode, TableGroup, TableNode};
