use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::TranzitError;

/// One manifest row, mapped to one `ConsignmentItem` of the declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Goods description (`descriptionOfGoods`).
    pub description: String,
    /// Tariff classification code (`harmonizedSystemSubHeadingCode`).
    pub tariff_code: String,
    /// Shipment reference, usually an air waybill number (`PreviousDocument/referenceNumber`).
    pub reference: String,
    /// Gross mass in kilograms, never negative.
    pub weight: Decimal,
}

/// Validated line items in sheet order plus their exact total weight.
///
/// The total is always the decimal sum of the item weights; there is no way
/// to construct a `Manifest` whose total disagrees with its items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    items: Vec<LineItem>,
    total_weight: Decimal,
}

impl Manifest {
    /// Build a manifest, summing the item weights.
    ///
    /// Fails with [`TranzitError::TotalOverflow`] if the sum does not fit a
    /// `Decimal`.
    pub fn from_items(items: Vec<LineItem>) -> Result<Self, TranzitError> {
        let mut manifest = Self::default();
        for (index, item) in items.into_iter().enumerate() {
            if manifest.push(item).is_none() {
                return Err(TranzitError::TotalOverflow { item: index + 1 });
            }
        }
        Ok(manifest)
    }

    /// Append an item and add its weight to the running total. Returns the
    /// new total, or `None` (leaving the manifest unchanged) on overflow.
    pub(crate) fn push(&mut self, item: LineItem) -> Option<Decimal> {
        self.total_weight = self.total_weight.checked_add(item.weight)?;
        self.items.push(item);
        Some(self.total_weight)
    }

    /// Items in sheet order. Position `i` becomes goods item number `i + 1`.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of all item weights.
    pub fn total_weight(&self) -> Decimal {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Position of the header row and of each required column, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLocation {
    /// Header row index.
    pub row: u32,
    /// Column of the goods description.
    pub description: u32,
    /// Column of the tariff classification code.
    pub tariff_code: u32,
    /// Column of the shipment reference.
    pub reference: u32,
    /// Column of the weight.
    pub weight: u32,
}
