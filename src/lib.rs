//! # tabular2xlsx
//!
//! Convert LaTeX `tabular` environments to xlsx spreadsheets.
//!
//! ## Features
//!
//! - **Cell Normalization**: strips decorative LaTeX markup
//!   (`\textbf`, `\emph`, `\rowcolor`, spacing directives) from cell text
//! - **Superscripts**: `\textsuperscript{...}` becomes Unicode superscript
//!   characters
//! - **Column Spans**: `\multicolumn{N}{fmt}{text}` expands to N columns
//! - **Aliases**: `\newcommand`-style definitions found in the file are
//!   applied to matching cells
//! - **Search & Replace**: an ordered, caller-extensible regex rule set
//!   runs as a final pass over every cell
//! - **Styled Output**: bold/italic header row, auto-sized columns,
//!   font colors for palette-known color tokens
//!
//! ## Usage Examples
//!
//! ### Parsing tabular source
//!
//! ```rust
//! use tabular2xlsx::{parse_tabular_str, ParseOptions};
//!
//! let table = parse_tabular_str(
//!     "Categorie & Test & Uitkomst\nIPv6 & bereikbaarheid & \\textbf{goed}\n",
//!     &ParseOptions::default(),
//! ).unwrap();
//!
//! assert_eq!(table.columns, vec!["Test", "Uitkomst"]);
//! assert_eq!(table.rows[0].values, vec!["bereikbaarheid", "goed"]);
//! ```
//!
//! ### End-to-end conversion
//!
//! ```rust,no_run
//! use tabular2xlsx::{convert_to_xlsx, ParseOptions};
//!
//! convert_to_xlsx("table.tex", "table.xlsx", &ParseOptions::default()).unwrap();
//! ```

use std::fs;
use std::path::Path;

/// Core parsing modules
pub mod core;

/// Data layer - static mappings
pub mod data;

/// Output layer - spreadsheet writing
pub mod output;

/// Utility modules
pub mod utils;

// Re-export core parsing API
pub use crate::core::cell::{normalize_cell, strip_markup, CleanedCell};
pub use crate::core::macros::{extract_newcommand, split_brace_groups};
pub use crate::core::parser::{
    default_rules, parse_tabular_str, ParseOptions, Table, TableIndex, TableRow,
};

// Re-export data layer
pub use crate::data::colors::{split_color_token, NamedPalette, Palette, NAMED_COLORS};
pub use crate::data::superscripts::to_superscript;

// Re-export output and utilities
pub use crate::output::xlsx::{write_xlsx, DEFAULT_SHEET_NAME};
pub use crate::utils::error::{ConvertError, ConvertResult};

/// Parse a tabular file into a [`Table`]
///
/// # Arguments
/// * `path` - the LaTeX tabular file
/// * `options` - parse configuration
///
/// # Returns
/// The assembled table, or an error if the file cannot be read or the
/// input violates the configuration.
pub fn parse_tabular(path: impl AsRef<Path>, options: &ParseOptions) -> ConvertResult<Table> {
    let input = fs::read_to_string(path)?;
    parse_tabular_str(&input, options)
}

/// Convert a tabular file straight to an xlsx file
///
/// Parses `input`, then writes the result to `output` with the default
/// sheet name and the built-in named-color palette.
pub fn convert_to_xlsx(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ParseOptions,
) -> ConvertResult<()> {
    let table = parse_tabular(input, options)?;
    write_xlsx(&table, output.as_ref(), DEFAULT_SHEET_NAME, &NamedPalette)
}
