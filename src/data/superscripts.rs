//! Unicode superscript character mappings
//!
//! Used when rewriting `\textsuperscript{...}` invocations: each character
//! of the inner text that has a Unicode superscript form is replaced by it,
//! anything else passes through unchanged. Note that `q` and `Q` have no
//! superscript codepoint and are therefore absent from the map.

use phf::phf_map;

/// Characters with a Unicode superscript equivalent
pub static SUPERSCRIPTS: phf::Map<char, char> = phf_map! {
    // Uppercase letters (no superscript Q exists)
    'A' => 'ᴬ',
    'B' => 'ᴮ',
    'C' => 'ᶜ',
    'D' => 'ᴰ',
    'E' => 'ᴱ',
    'F' => 'ᶠ',
    'G' => 'ᴳ',
    'H' => 'ᴴ',
    'I' => 'ᴵ',
    'J' => 'ᴶ',
    'K' => 'ᴷ',
    'L' => 'ᴸ',
    'M' => 'ᴹ',
    'N' => 'ᴺ',
    'O' => 'ᴼ',
    'P' => 'ᴾ',
    'R' => 'ᴿ',
    'S' => 'ˢ',
    'T' => 'ᵀ',
    'U' => 'ᵁ',
    'V' => 'ⱽ',
    'W' => 'ᵂ',
    'X' => 'ˣ',
    'Y' => 'ʸ',
    'Z' => 'ᶻ',

    // Lowercase letters (no superscript q exists)
    'a' => 'ᵃ',
    'b' => 'ᵇ',
    'c' => 'ᶜ',
    'd' => 'ᵈ',
    'e' => 'ᵉ',
    'f' => 'ᶠ',
    'g' => 'ᵍ',
    'h' => 'ʰ',
    'i' => 'ᶦ',
    'j' => 'ʲ',
    'k' => 'ᵏ',
    'l' => 'ˡ',
    'm' => 'ᵐ',
    'n' => 'ⁿ',
    'o' => 'ᵒ',
    'p' => 'ᵖ',
    'r' => 'ʳ',
    's' => 'ˢ',
    't' => 'ᵗ',
    'u' => 'ᵘ',
    'v' => 'ᵛ',
    'w' => 'ʷ',
    'x' => 'ˣ',
    'y' => 'ʸ',
    'z' => 'ᶻ',

    // Digits
    '0' => '⁰',
    '1' => '¹',
    '2' => '²',
    '3' => '³',
    '4' => '⁴',
    '5' => '⁵',
    '6' => '⁶',
    '7' => '⁷',
    '8' => '⁸',
    '9' => '⁹',

    // Operators and parentheses
    '+' => '⁺',
    '-' => '⁻',
    '=' => '⁼',
    '(' => '⁽',
    ')' => '⁾',
};

/// Convert every mappable character of `text` to its superscript form
pub fn to_superscript(text: &str) -> String {
    text.chars()
        .map(|c| SUPERSCRIPTS.get(&c).copied().unwrap_or(c))
        .collect()
}
