//! Core manifest types, quantity parsing, formatting, and configuration.
//!
//! All weights use [`rust_decimal::Decimal`], so totals never drift the way
//! binary floating point sums do.

mod config;
mod error;
pub mod format;
mod naming;
pub mod quantity;
mod types;

pub use config::*;
pub use error::*;
pub use format::format_decimal;
pub use naming::*;
pub use quantity::{parse_quantity, parse_quantity_text};
pub use types::*;
