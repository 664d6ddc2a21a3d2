use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that abort a conversion run.
///
/// Every variant is fatal: nothing is written when one of these is returned.
/// An empty manifest is not an error, see `Outcome::NoData`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranzitError {
    /// The declaration template is missing, unparseable, or lacks a mandatory node.
    #[error("template error: {0}")]
    Template(String),

    /// No row inside the scan window carries all required column labels.
    #[error("unable to find header row with required columns within {window} rows of the sheet start")]
    HeaderNotFound {
        /// Number of rows scanned after the sheet's first row.
        window: u32,
    },

    /// A data row failed validation.
    #[error("row {row}: {problem}")]
    Row {
        /// 1-based spreadsheet row number.
        row: u32,
        /// What is wrong with the row.
        problem: RowProblem,
    },

    /// Summing the weights of a hand-built manifest exceeded the decimal range.
    #[error("total weight overflows at item {item}")]
    TotalOverflow {
        /// 1-based position of the item that did not fit.
        item: usize,
    },

    /// The workbook could not be opened or has no worksheet.
    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    /// XML serialization failed.
    #[error("XML error: {0}")]
    Xml(String),

    /// The declaration identifier (LRN) is blank.
    #[error("declaration identifier must not be blank")]
    InvalidIdentifier,

    /// Reading an input stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reason a data row was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowProblem {
    /// Required values are absent. Never empty.
    Missing(Vec<Field>),
    /// The weight cell holds text that is not a number.
    InvalidWeight {
        /// The offending cell text, as read.
        text: String,
    },
    /// The weight parsed but is below zero.
    NegativeWeight {
        /// The parsed value.
        value: Decimal,
    },
    /// Adding this row's weight would overflow the manifest total.
    TotalOverflow,
}

impl std::fmt::Display for RowProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowProblem::Missing(fields) => {
                let names: Vec<&str> = fields.iter().map(|field| field.label()).collect();
                write!(f, "missing values for {}", names.join("/"))
            }
            RowProblem::InvalidWeight { text } => write!(f, "weight {text:?} is not a number"),
            RowProblem::NegativeWeight { value } => write!(f, "weight {value} is negative"),
            RowProblem::TotalOverflow => f.write_str("total weight is too large"),
        }
    }
}

/// Required manifest columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Goods description ("descriere marfa").
    Description,
    /// Tariff classification code ("incadrare").
    TariffCode,
    /// Shipment reference ("AWB").
    Reference,
    /// Gross weight ("greutate" / "kgs").
    Weight,
}

impl Field {
    /// Short name used in row error messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Description => "description",
            Field::TariffCode => "classification",
            Field::Reference => "reference",
            Field::Weight => "weight",
        }
    }
}

/// A cell value that could not be read as a decimal quantity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{text:?} is not a valid quantity")]
pub struct QuantityError {
    /// The cell text before normalization.
    pub text: String,
}
