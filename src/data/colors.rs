//! Named-color palette for cell styling
//!
//! Cell values produced by the parser may carry a leading color token (the
//! residue of a color alias in the source document). The writer resolves
//! such tokens against a [`Palette`] and, on a hit, strips the token and
//! writes the remaining text with a font color. The palette is a seam: the
//! built-in [`NamedPalette`] serves the xcolor names below, but any other
//! source can be plugged in.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Named colors from the xcolor package (base set plus common dvipsnames),
    /// as 0xRRGGBB values
    pub static ref NAMED_COLORS: HashMap<&'static str, u32> = {
        let mut m = HashMap::new();

        // Basic colors
        m.insert("black", 0x000000);
        m.insert("white", 0xFFFFFF);
        m.insert("red", 0xFF0000);
        m.insert("green", 0x00FF00);
        m.insert("blue", 0x0000FF);
        m.insert("yellow", 0xFFFF00);
        m.insert("cyan", 0x00FFFF);
        m.insert("magenta", 0xFF00FF);
        m.insert("orange", 0xFFA500);
        m.insert("purple", 0x800080);
        m.insert("pink", 0xFFC0CB);
        m.insert("brown", 0xA52A2A);
        m.insert("gray", 0x808080);
        m.insert("grey", 0x808080);
        m.insert("darkgray", 0xA9A9A9);
        m.insert("darkgrey", 0xA9A9A9);
        m.insert("lightgray", 0xD3D3D3);
        m.insert("lightgrey", 0xD3D3D3);
        m.insert("lime", 0x00FF00);
        m.insert("olive", 0x808000);
        m.insert("teal", 0x008080);
        m.insert("navy", 0x000080);
        m.insert("maroon", 0x800000);
        m.insert("silver", 0xC0C0C0);
        m.insert("aqua", 0x00FFFF);
        m.insert("fuchsia", 0xFF00FF);

        // Common dvipsnames
        m.insert("Apricot", 0xFBB982);
        m.insert("BrickRed", 0xB6321C);
        m.insert("BurntOrange", 0xF7921D);
        m.insert("CadetBlue", 0x74729A);
        m.insert("Cerulean", 0x00A2E3);
        m.insert("CornflowerBlue", 0x41B0E4);
        m.insert("Emerald", 0x00A99D);
        m.insert("ForestGreen", 0x009B55);
        m.insert("Goldenrod", 0xFFDF42);
        m.insert("Lavender", 0xF49EC4);
        m.insert("LimeGreen", 0x8DC73E);
        m.insert("Mahogany", 0xA9341F);
        m.insert("MidnightBlue", 0x006795);
        m.insert("NavyBlue", 0x006EB8);
        m.insert("OliveGreen", 0x3C8031);
        m.insert("Orchid", 0xAF72B0);
        m.insert("Peach", 0xF7965A);
        m.insert("RoyalBlue", 0x006EB8);
        m.insert("Salmon", 0xF69289);
        m.insert("SeaGreen", 0x3FBC9D);
        m.insert("SkyBlue", 0x46C5DD);
        m.insert("Violet", 0x58429B);

        m
    };
}

/// Lookup interface for resolving a color name to a 0xRRGGBB value
///
/// Returning `None` means the name is unknown; callers leave the value
/// unmodified and unstyled in that case.
pub trait Palette {
    fn lookup(&self, name: &str) -> Option<u32>;
}

/// Palette backed by the static [`NAMED_COLORS`] table
#[derive(Debug, Default, Clone, Copy)]
pub struct NamedPalette;

impl Palette for NamedPalette {
    fn lookup(&self, name: &str) -> Option<u32> {
        NAMED_COLORS.get(name).copied()
    }
}

/// Find a palette-known token in a cell value
///
/// Scans the whitespace-separated tokens of `value`; on the first token the
/// palette resolves, returns the color and the value with that token
/// removed. Returns `None` when no token matches.
pub fn split_color_token(value: &str, palette: &dyn Palette) -> Option<(u32, String)> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let idx = tokens.iter().position(|t| palette.lookup(t).is_some())?;
    let rgb = palette.lookup(tokens[idx])?;
    let rest: Vec<&str> = tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != idx)
        .map(|(_, t)| *t)
        .collect();
    Some((rgb, rest.join(" ")))
}
