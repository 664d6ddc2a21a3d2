//! Cell → exact decimal quantity.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::error::QuantityError;
use crate::sheet::Cell;

/// Read a cell as a decimal quantity.
///
/// Numeric cells are converted from their stored value directly. Every other
/// kind goes through its display text: trimmed, spaces (thousands separators)
/// removed, comma turned into the decimal point.
///
/// Returns `Ok(None)` for empty cells and blank text.
pub fn parse_quantity(cell: &Cell) -> Result<Option<Decimal>, QuantityError> {
    match cell {
        Cell::Empty => Ok(None),
        Cell::Number(value) => decimal_from_f64(*value).map(Some),
        Cell::Text(text) | Cell::Formula(text) | Cell::Other(text) => parse_quantity_text(text),
    }
}

/// Parse quantity text as it appears in a manifest ("1 234,50", "17.75").
pub fn parse_quantity_text(text: &str) -> Result<Option<Decimal>, QuantityError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let normalized: String = trimmed
        .chars()
        .filter(|c| !is_group_separator(*c))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    let parsed = if normalized.contains(['e', 'E']) {
        Decimal::from_scientific(&normalized)
    } else {
        Decimal::from_str(&normalized)
    };

    parsed.map(Some).map_err(|_| QuantityError {
        text: text.to_string(),
    })
}

fn is_group_separator(c: char) -> bool {
    // plain, no-break and narrow no-break space
    matches!(c, ' ' | '\u{a0}' | '\u{202f}')
}

/// Convert a stored spreadsheet number without picking up binary noise:
/// `0.1` becomes exactly `0.1`, not `0.1000000000000000055511151231257827`.
pub(crate) fn decimal_from_f64(value: f64) -> Result<Decimal, QuantityError> {
    if !value.is_finite() {
        return Err(QuantityError {
            text: value.to_string(),
        });
    }
    // f64 Display is the shortest round-trip form and never uses an exponent
    let text = value.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::try_from(value))
        .map_err(|_| QuantityError { text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn comma_and_period_agree() {
        assert_eq!(parse_quantity_text("1 234,50").unwrap(), Some(dec!(1234.50)));
        assert_eq!(parse_quantity_text("1234.50").unwrap(), Some(dec!(1234.50)));
        assert_eq!(parse_quantity_text("  17,75 ").unwrap(), Some(dec!(17.75)));
    }

    #[test]
    fn no_break_space_groups() {
        assert_eq!(parse_quantity_text("1\u{a0}000").unwrap(), Some(dec!(1000)));
    }

    #[test]
    fn blank_is_none() {
        assert_eq!(parse_quantity_text("").unwrap(), None);
        assert_eq!(parse_quantity_text("   ").unwrap(), None);
        assert_eq!(parse_quantity(&Cell::Empty).unwrap(), None);
    }

    #[test]
    fn malformed_text_is_an_error() {
        let err = parse_quantity_text("1.234,50").unwrap_err();
        assert_eq!(err.text, "1.234,50");
        assert!(parse_quantity_text("abc").is_err());
        assert!(parse_quantity_text("12kg").is_err());
    }

    #[test]
    fn scientific_text() {
        assert_eq!(parse_quantity_text("1.5E3").unwrap(), Some(dec!(1500)));
    }

    #[test]
    fn numeric_cells_skip_text_normalization() {
        assert_eq!(parse_quantity(&Cell::Number(0.1)).unwrap(), Some(dec!(0.1)));
        assert_eq!(parse_quantity(&Cell::Number(10.0)).unwrap(), Some(dec!(10)));
        assert_eq!(parse_quantity(&Cell::Number(5.5)).unwrap(), Some(dec!(5.5)));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert!(parse_quantity(&Cell::Number(f64::NAN)).is_err());
        assert!(parse_quantity(&Cell::Number(f64::INFINITY)).is_err());
    }

    #[test]
    fn formula_results_use_text_rules() {
        let cell = Cell::Formula("2,25".into());
        assert_eq!(parse_quantity(&cell).unwrap(), Some(dec!(2.25)));
    }
}
