//! Workbook loading via calamine (xlsx, xlsm, xlsb, xls, ods).

use std::collections::HashSet;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};
use log::debug;

use super::{Cell, Sheet};
use crate::core::TranzitError;

/// Load the first worksheet of a workbook held in memory.
pub fn read_first_sheet(bytes: &[u8]) -> Result<Sheet, TranzitError> {
    let workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| TranzitError::Spreadsheet(format!("failed to open workbook: {e}")))?;
    first_sheet(workbook)
}

/// Load the first worksheet of a workbook file.
pub fn open_first_sheet(path: impl AsRef<Path>) -> Result<Sheet, TranzitError> {
    let path = path.as_ref();
    let workbook = open_workbook_auto(path).map_err(|e| {
        TranzitError::Spreadsheet(format!("failed to open {}: {e}", path.display()))
    })?;
    first_sheet(workbook)
}

fn first_sheet<RS: Read + Seek>(mut workbook: Sheets<RS>) -> Result<Sheet, TranzitError> {
    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| TranzitError::Spreadsheet("workbook has no sheets".into()))?;

    let values = workbook
        .worksheet_range(&name)
        .map_err(|e| TranzitError::Spreadsheet(format!("failed to read sheet '{name}': {e}")))?;
    // Not every format exposes formulas; without them formula cells read as plain values.
    let formulas = workbook.worksheet_formula(&name).ok();

    let sheet = build_sheet(&values, formulas.as_ref());
    debug!(
        "loaded sheet '{name}', rows {:?}..={:?}",
        sheet.first_row(),
        sheet.last_row()
    );
    Ok(sheet)
}

fn build_sheet(values: &Range<Data>, formulas: Option<&Range<String>>) -> Sheet {
    let formula_cells = formulas.map(formula_positions).unwrap_or_default();

    let mut sheet = Sheet::new();
    let Some((start_row, start_col)) = values.start() else {
        return sheet;
    };
    for (r, c, data) in values.used_cells() {
        let (row, col) = (start_row + r as u32, start_col + c as u32);
        let cell = if formula_cells.contains(&(row, col)) {
            Cell::Formula(data_text(data))
        } else {
            to_cell(data)
        };
        sheet.set(row, col, cell);
    }
    sheet
}

fn formula_positions(formulas: &Range<String>) -> HashSet<(u32, u32)> {
    let Some((start_row, start_col)) = formulas.start() else {
        return HashSet::new();
    };
    formulas
        .used_cells()
        .filter(|(_, _, f)| !f.is_empty())
        .map(|(r, c, _)| (start_row + r as u32, start_col + c as u32))
        .collect()
}

const MAX_EXACT_INT: u64 = 1 << 53;

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Float(n) => Cell::Number(*n),
        // f64 holds integers exactly up to 2^53; larger ones keep their digits as text
        Data::Int(n) if n.unsigned_abs() <= MAX_EXACT_INT => Cell::Number(*n as f64),
        Data::Int(n) => Cell::Other(n.to_string()),
        Data::String(s) => Cell::Text(s.clone()),
        other => Cell::Other(data_text(other)),
    }
}

fn data_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::Float(n) => Cell::Number(*n).display_text(),
        Data::Int(n) => n.to_string(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Bool(b) => b.to_string().to_uppercase(),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()).display_text(),
        Data::Error(e) => e.to_string(),
    }
}
