//! Macro/alias definition extraction
//!
//! `\newcommand{\name}{pattern}` lines are scanned with an explicit
//! brace-depth state machine rather than a regex, because the replacement
//! pattern may itself contain braces. The same scanner splits the
//! `{format}{content}` tail of a `\multicolumn` directive.

use crate::core::cell::strip_markup;

/// Split a line into its top-level brace groups
///
/// The first top-level group accumulates into the first buffer; everything
/// inside the following top-level group(s) accumulates into the second.
/// Characters outside any group only drive the depth tracking. The buffers
/// keep the raw characters (opening braces included); callers strip them.
pub fn split_brace_groups(line: &str) -> (String, String) {
    let mut first = String::new();
    let mut rest = String::new();
    let mut in_first = true;
    let mut depth: i32 = 0;

    for ch in line.chars() {
        if ch == '{' {
            depth += 1;
        } else if ch == '}' {
            depth -= 1;
        }

        if depth > 0 {
            if in_first {
                first.push(ch);
            } else {
                rest.push(ch);
            }
        } else if !first.is_empty() {
            // First group closed; subsequent groups feed the second buffer
            in_first = false;
        }
    }

    (first, rest)
}

/// Extract `(name, pattern)` from a newcommand-style definition line
///
/// Both buffers pass through the cell stripping rules, which removes the
/// leading backslash of the macro name and any residual braces. An empty
/// name means the line could not be parsed; callers log and skip it.
pub fn extract_newcommand(line: &str) -> (String, String) {
    let (name, pattern) = split_brace_groups(line);
    (strip_markup(&name), strip_markup(&pattern))
}
