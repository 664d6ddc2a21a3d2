//! In-memory worksheet model, header location, and row extraction.
//!
//! A [`Sheet`] is a sparse grid of [`Cell`]s addressed by zero-based row and
//! column. It can be filled by hand (tests, other readers) or loaded from a
//! workbook with the `xlsx` feature.
//!
//! # Example
//!
//! ```
//! use tranzit::sheet::{read_manifest, Cell, Sheet};
//! use tranzit::ManifestConfig;
//! use rust_decimal_macros::dec;
//!
//! let sheet = Sheet::from_rows(0, vec![
//!     vec![Cell::text("AWB"), Cell::text("Descriere marfa"), Cell::text("Incadrare"), Cell::text("KGS")],
//!     vec![Cell::text("176-1"), Cell::text("Books"), Cell::text("4901"), Cell::number(5.5)],
//!     vec![Cell::text("176-2"), Cell::text("Toys"), Cell::text("9503"), Cell::text("2,25")],
//! ]);
//!
//! let manifest = read_manifest(&sheet, &ManifestConfig::default()).unwrap();
//! assert_eq!(manifest.len(), 2);
//! assert_eq!(manifest.total_weight(), dec!(7.75));
//! ```

pub mod extract;
pub mod header;
#[cfg(feature = "xlsx")]
pub mod xlsx;

use std::collections::BTreeMap;

use crate::core::{Manifest, ManifestConfig, TranzitError, format_decimal, quantity};

pub use extract::extract_manifest;
pub use header::locate_header;

/// A single cell value with its representation kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// A stored number.
    Number(f64),
    /// A literal string.
    Text(String),
    /// A formula, carried as its cached result rendered to text.
    Formula(String),
    /// Booleans, dates, error codes and the like, rendered to text.
    Other(String),
}

/// Representation kind of a [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Numeric,
    Text,
    Formula,
    Other,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn number(value: f64) -> Self {
        Cell::Number(value)
    }

    pub fn formula(result: impl Into<String>) -> Self {
        Cell::Formula(result.into())
    }

    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Empty => CellKind::Empty,
            Cell::Number(_) => CellKind::Numeric,
            Cell::Text(_) => CellKind::Text,
            Cell::Formula(_) => CellKind::Formula,
            Cell::Other(_) => CellKind::Other,
        }
    }

    /// Display text, as a spreadsheet would show it in General format.
    pub fn display_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(n) => quantity::decimal_from_f64(*n)
                .map(format_decimal)
                .unwrap_or_else(|_| n.to_string()),
            Cell::Text(s) | Cell::Formula(s) | Cell::Other(s) => s.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

/// One sheet row: a sparse column → cell map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: BTreeMap<u32, Cell>,
}

impl Row {
    /// The cell at `col`, or [`Cell::Empty`].
    pub fn cell(&self, col: u32) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.cells.get(&col).unwrap_or(&EMPTY)
    }

    /// Trimmed display text of the cell at `col`.
    pub fn cell_text(&self, col: u32) -> String {
        self.cell(col).display_text().trim().to_string()
    }

    /// Populated cells in column order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, &Cell)> {
        self.cells.iter().map(|(col, cell)| (*col, cell))
    }

    fn is_blank(&self) -> bool {
        self.cells.values().all(Cell::is_empty)
    }
}

/// A sparse worksheet. Rows without any populated cell do not exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    rows: BTreeMap<u32, Row>,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sheet from dense rows, the first one placed at `start_row`.
    /// Columns start at 0; [`Cell::Empty`] entries are skipped.
    pub fn from_rows(start_row: u32, rows: Vec<Vec<Cell>>) -> Self {
        let mut sheet = Self::new();
        for (r, cells) in (start_row..).zip(rows) {
            for (c, cell) in (0u32..).zip(cells) {
                sheet.set(r, c, cell);
            }
        }
        sheet
    }

    /// Set a cell. Setting an empty cell clears it.
    pub fn set(&mut self, row: u32, col: u32, cell: Cell) {
        if cell.is_empty() {
            if let Some(existing) = self.rows.get_mut(&row) {
                existing.cells.remove(&col);
                if existing.is_blank() {
                    self.rows.remove(&row);
                }
            }
            return;
        }
        self.rows.entry(row).or_default().cells.insert(col, cell);
    }

    /// The row at `index`, if it has any populated cell.
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// Index of the first populated row.
    pub fn first_row(&self) -> Option<u32> {
        self.rows.keys().next().copied()
    }

    /// Index of the last populated row.
    pub fn last_row(&self) -> Option<u32> {
        self.rows.keys().next_back().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Locate the header and extract every line item up to the end-of-data row.
pub fn read_manifest(sheet: &Sheet, config: &ManifestConfig) -> Result<Manifest, TranzitError> {
    let header = locate_header(sheet, config).ok_or(TranzitError::HeaderNotFound {
        window: config.header_window,
    })?;
    extract_manifest(sheet, &header)
}
