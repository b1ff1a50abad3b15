//! Output layer - spreadsheet writing

pub mod xlsx;

pub use xlsx::{write_xlsx, DEFAULT_SHEET_NAME};
