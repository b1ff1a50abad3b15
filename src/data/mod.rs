//! Data layer - static mappings
//!
//! This module contains the static data used during conversion:
//! - Named-color palette and the palette lookup seam
//! - Unicode superscript character mappings

pub mod colors;
pub mod superscripts;

// Re-export commonly used items
pub use colors::{split_color_token, NamedPalette, Palette, NAMED_COLORS};
pub use superscripts::{to_superscript, SUPERSCRIPTS};
