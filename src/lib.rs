//! # tranzit
//!
//! Turns a shipment manifest spreadsheet into an NCTS T2 transit declaration
//! (CC015C XML).
//!
//! The pipeline: find the header row by column label, read line items until
//! the first row without an AWB, total the weights with exact decimals, then
//! fill a fixed declaration template with one `ConsignmentItem` per line.
//!
//! All weights use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use tranzit::declaration::Template;
//! use tranzit::sheet::{Cell, Sheet};
//! use tranzit::{ManifestConfig, Outcome, convert_sheet};
//!
//! let sheet = Sheet::from_rows(0, vec![
//!     vec![Cell::text("AWB"), Cell::text("Descriere marfa"), Cell::text("Incadrare"), Cell::text("Greutate")],
//!     vec![Cell::text("1Z01"), Cell::text("Books"), Cell::text("490199"), Cell::number(5.5)],
//!     vec![Cell::text("1Z02"), Cell::text("Toys"), Cell::text("950300"), Cell::text("2,25")],
//!     vec![Cell::text("1Z03"), Cell::text("Shoes"), Cell::text("640399"), Cell::number(10.0)],
//! ]);
//!
//! let date = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
//! let outcome = convert_sheet(&sheet, Template::bundled().unwrap(), "LRN123", date, &ManifestConfig::default()).unwrap();
//! let Outcome::Converted(conversion) = outcome else { panic!("manifest has rows") };
//! assert_eq!(conversion.manifest.total_weight(), dec!(17.75));
//! assert!(conversion.xml.contains("<LRN>LRN123</LRN>"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Manifest types, quantity parsing, header location, row extraction |
//! | `xlsx` | Reading the first sheet of xlsx/xls/xlsb/ods workbooks |
//! | `declaration` | XML tree, bundled T2 template, declaration assembly |
//! | `all` (default) | Everything plus the `convert` entry points |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod sheet;

#[cfg(feature = "declaration")]
pub mod declaration;

#[cfg(feature = "all")]
mod convert;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "all")]
pub use convert::{Conversion, Outcome, convert, convert_at, convert_sheet};
