//! Spreadsheet output
//!
//! Writes an assembled [`Table`] to a single-worksheet xlsx file. The
//! header row carries a bold/italic word-wrapped style with top and bottom
//! borders, data cells are left-aligned, and every column is sized to its
//! longest entry. A cell value containing a palette-known color token is
//! written with that font color, the token itself stripped; an unknown
//! token leaves the value as-is.

use log::debug;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

use crate::core::parser::Table;
use crate::data::colors::{split_color_token, Palette};
use crate::utils::error::ConvertResult;

/// Worksheet name used when the caller does not supply one
pub const DEFAULT_SHEET_NAME: &str = "Sheet";

/// Write `table` to an xlsx file at `path`
pub fn write_xlsx(
    table: &Table,
    path: &Path,
    sheet_name: &str,
    palette: &dyn Palette,
) -> ConvertResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let header_format = Format::new()
        .set_bold()
        .set_italic()
        .set_text_wrap()
        .set_border_top(FormatBorder::Thin)
        .set_border_bottom(FormatBorder::Thin);
    let body_format = Format::new().set_align(FormatAlign::Left);

    let index_names = table.index.display_names();
    let depth = index_names.len();

    // Header row: index level label(s) first, then the column names
    for (col, name) in index_names.iter().chain(table.columns.iter()).enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let out_row = (row_idx + 1) as u32;
        for (col, value) in row.labels.iter().chain(row.values.iter()).enumerate() {
            write_cell(worksheet, out_row, col as u16, value, &body_format, palette)?;
        }
    }

    // Auto-size: longest of the header label and the column's values
    for col in 0..depth + table.columns.len() {
        let header_len = if col < depth {
            index_names[col].chars().count()
        } else {
            table.columns[col - depth].chars().count()
        };
        let width = table
            .rows
            .iter()
            .map(|row| {
                let value = if col < depth {
                    &row.labels[col]
                } else {
                    &row.values[col - depth]
                };
                value.chars().count()
            })
            .fold(header_len, usize::max);
        worksheet.set_column_width(col as u16, width.max(1) as f64)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Write one value, resolving a possible color token against the palette
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    body_format: &Format,
    palette: &dyn Palette,
) -> ConvertResult<()> {
    match split_color_token(value, palette) {
        Some((rgb, text)) => {
            debug!("font color #{:06X} for cell ({}, {})", rgb, row, col);
            let colored = body_format.clone().set_font_color(Color::RGB(rgb));
            worksheet.write_string_with_format(row, col, &text, &colored)?;
        }
        None => {
            worksheet.write_string_with_format(row, col, value, body_format)?;
        }
    }
    Ok(())
}
