//! Tabular Parsing System
//!
//! Line-oriented parsing of a LaTeX `tabular` environment into a
//! row/column table.
//!
//! This module provides:
//! - Cell-level normalization (markup stripping, `\textsuperscript`
//!   conversion, `\multicolumn` span extraction)
//! - Alias extraction from `\newcommand`-style definition lines
//! - The driving line scanner that assembles header, rows and index
//!
//! # Architecture
//!
//! ```text
//! Raw lines -> classification -> cell normalization -> span expansion
//!           -> table assembly -> alias / search-replace post-passes
//! ```
//!
//! # Example
//!
//! ```
//! use tabular2xlsx::{parse_tabular_str, ParseOptions};
//!
//! let table = parse_tabular_str("A & B\n1 & 2\n", &ParseOptions::default()).unwrap();
//! assert_eq!(table.columns, vec!["B"]);
//! ```

pub mod cell;
pub mod macros;
pub mod parser;


// Re-export public API
pub use cell::{normalize_cell, strip_markup, CleanedCell};
pub use macros::{extract_newcommand, split_brace_groups};
pub use parser::{default_rules, parse_tabular_str, ParseOptions, Table, TableIndex, TableRow};
