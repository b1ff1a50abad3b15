//! Utility modules
//!
//! Error types and result types shared by the parser and the writer.

pub mod error;

pub use error::{ConvertError, ConvertResult};
