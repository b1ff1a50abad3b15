//! Line-oriented tabular parser
//!
//! Drives the end-to-end parse: classifies each input line as caption,
//! alias definition and/or structural table line, normalizes and expands
//! the cells of structural lines, and assembles the result into a [`Table`]
//! with a single- or two-level row index. Alias substitution and the
//! search-and-replace rule set run as post-passes over the assembled table.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::core::cell::{normalize_cell, CleanedCell};
use crate::core::macros::extract_newcommand;
use crate::utils::error::{ConvertError, ConvertResult};

lazy_static! {
    static ref CAPTION_RE: Regex = Regex::new(r"caption\{(.*)\}").unwrap();
}

/// Column separator of the tabular environment
const COLUMN_SEPARATOR: char = '&';

/// Row index shape of an assembled table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIndex {
    /// Single index column, named after the first header cell
    Single { name: String },
    /// Two-level index built from the first two columns; the level names
    /// are internal (synthetic for empty header cells) and display blank
    Multi { names: [String; 2] },
}

impl TableIndex {
    /// Number of index columns
    pub fn depth(&self) -> usize {
        match self {
            TableIndex::Single { .. } => 1,
            TableIndex::Multi { .. } => 2,
        }
    }

    /// Labels written to the header row of the output sheet
    ///
    /// Multi-level names are renamed to empty display labels.
    pub fn display_names(&self) -> Vec<String> {
        match self {
            TableIndex::Single { name } => vec![name.clone()],
            TableIndex::Multi { .. } => vec![String::new(), String::new()],
        }
    }
}

/// One data row: index label(s) plus the value columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub labels: Vec<String>,
    pub values: Vec<String>,
}

/// The assembled table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub index: TableIndex,
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

/// Default cleanup rules applied after assembly
///
/// The patterns match the post-stripping spelling of `$\cdot$` and `$\ast$`
/// (the normalizer has already removed every backslash by the time the rule
/// pass runs).
pub fn default_rules() -> IndexMap<String, String> {
    let mut rules = IndexMap::new();
    rules.insert(r"\$cdot\$".to_string(), ".".to_string());
    rules.insert(r"\$ast\$".to_string(), "*".to_string());
    rules
}

/// Caller-facing parse configuration
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Build a two-level row index from the first two columns
    pub multi_index: bool,
    /// Regex search-and-replace rules, applied in insertion order over
    /// every cell of the assembled table
    pub search_and_replace: IndexMap<String, String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            multi_index: false,
            search_and_replace: default_rules(),
        }
    }
}

impl ParseOptions {
    /// Merge caller rules over the defaults; a rule with an existing key
    /// overrides the default in place
    pub fn with_rules(rules: IndexMap<String, String>) -> Self {
        let mut options = Self::default();
        options.search_and_replace.extend(rules);
        options
    }
}

/// Accumulating parser state for one pass over the input lines
struct TabularParser {
    aliases: IndexMap<String, String>,
    header: Option<Vec<String>>,
    rows: Vec<(usize, Vec<String>)>,
}

impl TabularParser {
    fn new() -> Self {
        TabularParser {
            aliases: IndexMap::new(),
            header: None,
            rows: Vec::new(),
        }
    }

    /// Classify one trimmed line; the checks are independent and
    /// non-exclusive
    fn scan_line(&mut self, line_no: usize, line: &str) {
        let line = line.trim();

        if let Some(caps) = CAPTION_RE.captures(line) {
            // Diagnostic only; captions never reach the output table
            debug!("CAPTION: {}", &caps[1]);
        }

        if line.contains("newcommand") {
            let (name, pattern) = extract_newcommand(line);
            if name.is_empty() {
                warn!("line {}: unparsable macro definition: {}", line_no, line);
            } else {
                debug!("alias {} -> {}", name, pattern);
                self.aliases.insert(name, pattern);
            }
        }

        let fields: Vec<&str> = line.split(COLUMN_SEPARATOR).collect();
        if fields.len() > 1 {
            debug!("INSIDE: {}", line);
            let cells = self.expand_fields(&fields);
            if self.header.is_none() {
                self.header = Some(cells);
            } else {
                self.rows.push((line_no, cells));
            }
        } else {
            debug!("OUTSIDE: {}", line);
        }
    }

    /// Normalize every field and expand multi-column spans: a span of N
    /// inserts N-1 empty cells right after the normalized value
    fn expand_fields(&self, fields: &[&str]) -> Vec<String> {
        let mut cells = Vec::with_capacity(fields.len());
        for field in fields {
            let CleanedCell { text, span } = normalize_cell(field, &self.aliases);
            cells.push(text);
            for _ in 1..span.unwrap_or(1) {
                cells.push(String::new());
            }
        }
        cells
    }

    /// Build the final table and run the post-passes
    fn finish(self, options: &ParseOptions) -> ConvertResult<Table> {
        let header = self
            .header
            .ok_or_else(|| ConvertError::parse("no tabular lines found in input"))?;

        let index = if options.multi_index {
            if header.len() < 2 {
                return Err(ConvertError::configuration(format!(
                    "multi-index requested but the header has {} column(s); at least 2 are needed",
                    header.len()
                )));
            }
            TableIndex::Multi {
                names: [
                    level_name(&header[0], "l1"),
                    level_name(&header[1], "l2"),
                ],
            }
        } else {
            TableIndex::Single {
                name: header[0].clone(),
            }
        };
        let depth = index.depth();

        // Header arity is authoritative; a mismatching row is a caller
        // error, not something to pad or truncate
        let mut rows = Vec::with_capacity(self.rows.len());
        for (line_no, cells) in self.rows {
            if cells.len() != header.len() {
                return Err(ConvertError::configuration(format!(
                    "line {}: row has {} cells after span expansion, header has {}",
                    line_no,
                    cells.len(),
                    header.len()
                )));
            }
            let values = cells[depth..].to_vec();
            let mut labels = cells;
            labels.truncate(depth);
            rows.push(TableRow { labels, values });
        }

        let columns = header[depth..].to_vec();

        // Alias post-pass: anchored exact match over the value columns
        for (name, pattern) in &self.aliases {
            for row in &mut rows {
                for value in &mut row.values {
                    if value == name {
                        *value = pattern.clone();
                    }
                }
            }
        }

        // Search-and-replace rules, in insertion order; later rules see the
        // output of earlier ones
        for (pattern, replacement) in &options.search_and_replace {
            let re = Regex::new(pattern).map_err(|err| {
                ConvertError::configuration(format!(
                    "invalid search pattern '{}': {}",
                    pattern, err
                ))
            })?;
            for row in &mut rows {
                for cell in row.labels.iter_mut().chain(row.values.iter_mut()) {
                    *cell = re.replace_all(cell, replacement.as_str()).into_owned();
                }
            }
        }

        Ok(Table {
            index,
            columns,
            rows,
        })
    }
}

/// Substitute a synthetic level label for an empty header cell
fn level_name(name: &str, fallback: &str) -> String {
    if name.is_empty() {
        fallback.to_string()
    } else {
        name.to_string()
    }
}

/// Parse tabular source text into a [`Table`]
pub fn parse_tabular_str(input: &str, options: &ParseOptions) -> ConvertResult<Table> {
    let mut parser = TabularParser::new();
    for (idx, line) in input.lines().enumerate() {
        parser.scan_line(idx + 1, line);
    }
    parser.finish(options)
}
