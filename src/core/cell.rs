//! Cell normalization
//!
//! Transforms the raw text between two column separators into display
//! text, reporting the column span implied by a `\multicolumn` directive.
//! The steps run in a fixed order so the patterns cannot interfere:
//! superscript conversion first (it needs the braces still intact), then
//! span extraction, then markup stripping, then alias substitution.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use log::warn;
use regex::{Captures, Regex};

use crate::core::macros::split_brace_groups;
use crate::data::superscripts::to_superscript;

lazy_static! {
    // Inner text may carry one level of wrapper braces, e.g. \textbf{2)}
    static ref TEXTSUPERSCRIPT_RE: Regex =
        Regex::new(r"\\textsuperscript\{((?:[^{}]|\{[^{}]*\})*)\}").unwrap();
    static ref MULTICOLUMN_RE: Regex =
        Regex::new(r"\\multicolumn\{([^{}]*)\}").unwrap();
    static ref ROWCOLOR_RE: Regex = Regex::new(r"\\rowcolor\{[^{}]*\}").unwrap();
    static ref SPACING_RE: Regex = Regex::new(r"\\[hv]space\*?\{[^{}]*\}").unwrap();
    // Horizontal rules riding on a data line, with or without a column range
    static ref HRULE_RE: Regex =
        Regex::new(r"\\(?:toprule|midrule|bottomrule|hline)|\\c(?:line|midrule)(?:\([^)]*\))?\{[^{}]*\}")
            .unwrap();
}

/// Decorative wrappers removed name-plus-opening-brace, keeping the content
const WRAPPER_PREFIXES: [&str; 5] = [
    "\\cornercell{",
    "\\normalsize{",
    "\\textbf{",
    "\\emph{",
    "\\python{",
];

/// A normalized cell: display text plus the column span implied by a
/// `\multicolumn` directive (`None` when there was none)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedCell {
    pub text: String,
    pub span: Option<usize>,
}

/// Remove spurious LaTeX markup from a piece of cell text
///
/// Drops `\rowcolor{...}` with its argument, collapses spacing directives
/// and horizontal rules, unwraps the known decorative wrappers, deletes
/// residual braces and backslashes, and folds the `--` en-dash convention
/// to a single hyphen.
pub fn strip_markup(text: &str) -> String {
    let mut out = ROWCOLOR_RE.replace_all(text, "").into_owned();
    out = SPACING_RE.replace_all(&out, "").into_owned();
    out = HRULE_RE.replace_all(&out, "").into_owned();
    for prefix in WRAPPER_PREFIXES {
        out = out.replace(prefix, "");
    }
    out = out.replace(['{', '}', '\\'], "");
    out.replace("--", "-")
}

/// Replace each `\textsuperscript{...}` invocation with the Unicode
/// superscript form of its (stripped) inner text
fn replace_superscripts(cell: &str) -> String {
    TEXTSUPERSCRIPT_RE
        .replace_all(cell, |caps: &Captures| {
            let inner = strip_markup(&caps[1]);
            to_superscript(inner.trim())
        })
        .into_owned()
}

/// Extract a `\multicolumn{N}{format}{content}` directive
///
/// Returns the working text and the span count. Without a directive the
/// whole cell is the working text and the span is `None`. The format
/// argument is discarded; a count that is not a positive integer is logged
/// and the directive ignored.
fn extract_multicolumn(cell: &str) -> (String, Option<usize>) {
    let caps = match MULTICOLUMN_RE.captures(cell) {
        Some(caps) => caps,
        None => return (cell.to_string(), None),
    };

    let span = match caps[1].trim().parse::<usize>() {
        Ok(n) if n >= 1 => n,
        _ => {
            warn!(
                "ignoring multicolumn directive with invalid count '{}'",
                &caps[1]
            );
            return (cell.to_string(), None);
        }
    };

    let remainder = MULTICOLUMN_RE.replace(cell, "").into_owned();
    let (_format, content) = split_brace_groups(&remainder);
    (content, Some(span))
}

/// Normalize one raw cell
///
/// `aliases` holds the macro definitions discovered so far; substitution
/// fires only when the entire cleaned text equals an alias name (anchored
/// match), never on substring hits.
pub fn normalize_cell(raw: &str, aliases: &IndexMap<String, String>) -> CleanedCell {
    let cell = replace_superscripts(raw);
    let (working, span) = extract_multicolumn(&cell);
    let text = strip_markup(&working);
    let text = text.trim();

    let text = match aliases.get(text) {
        Some(pattern) => pattern.clone(),
        None => text.to_string(),
    };

    CleanedCell {
        text: text.trim().to_string(),
        span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(raw: &str) -> CleanedCell {
        normalize_cell(raw, &IndexMap::new())
    }

    #[test]
    fn test_bold_wrapper() {
        assert_eq!(clean(r"\textbf{Foo}").text, "Foo");
    }

    #[test]
    fn test_emph_and_size_wrappers() {
        assert_eq!(clean(r"\emph{nadruk}").text, "nadruk");
        assert_eq!(clean(r"\normalsize{Categorie}").text, "Categorie");
        assert_eq!(clean(r"\cornercell{Categorie}").text, "Categorie");
    }

    #[test]
    fn test_rowcolor_argument_removed() {
        let cell = clean(r"\rowcolor{white} IPv6");
        assert_eq!(cell.text, "IPv6");
        assert!(!cell.text.contains("white"));
    }

    #[test]
    fn test_spacing_collapsed() {
        assert_eq!(clean(r"A\hspace{2mm}B").text, "AB");
        assert_eq!(clean(r"\vspace*{1em}C").text, "C");
    }

    #[test]
    fn test_rule_commands_removed() {
        assert_eq!(clean(r"\hline Categorie").text, "Categorie");
        assert_eq!(clean(r"\cmidrule(lr){2-4} B").text, "B");
        assert_eq!(clean(r"\toprule A").text, "A");
    }

    #[test]
    fn test_double_hyphen() {
        assert_eq!(clean("2008--2013").text, "2008-2013");
    }

    #[test]
    fn test_superscript_digits() {
        assert_eq!(clean(r"x\textsuperscript{2}").text, "x²");
    }

    #[test]
    fn test_superscript_with_paren() {
        assert_eq!(clean(r"2014-2019 \textsuperscript{1)}").text, "2014-2019 ¹⁾");
    }

    #[test]
    fn test_superscript_inner_markup() {
        // Inner text runs through the stripping rules before mapping
        assert_eq!(clean(r"OM\textsuperscript{\textbf{2)}}").text, "OM²⁾");
    }

    #[test]
    fn test_multicolumn_span() {
        let cell = clean(r"\multicolumn{2}{c}{Totaal}");
        assert_eq!(cell.text, "Totaal");
        assert_eq!(cell.span, Some(2));
    }

    #[test]
    fn test_multicolumn_nested_content() {
        let cell = clean(r"\multicolumn{3}{|l|}{\textbf{Wide}}");
        assert_eq!(cell.text, "Wide");
        assert_eq!(cell.span, Some(3));
    }

    #[test]
    fn test_multicolumn_bad_count_ignored() {
        let cell = clean(r"\multicolumn{x}{c}{Foo}");
        assert_eq!(cell.span, None);
        // Directive left in place degrades to plain stripping
        assert!(cell.text.contains("Foo"));
    }

    #[test]
    fn test_plain_cell_without_span() {
        let cell = clean("plain value");
        assert_eq!(cell.text, "plain value");
        assert_eq!(cell.span, None);
    }

    #[test]
    fn test_alias_anchored_match() {
        let mut aliases = IndexMap::new();
        aliases.insert("good".to_string(), "goed".to_string());

        assert_eq!(normalize_cell("good", &aliases).text, "goed");
        // Substring hits are left untouched
        assert_eq!(normalize_cell("good/bad", &aliases).text, "good/bad");
    }

    #[test]
    fn test_row_terminator_stripped() {
        // \\ at line end is residual markup, not structure
        assert_eq!(clean(r"waarde \\").text, "waarde");
    }
}
