use rust_decimal::Decimal;

/// Format a Decimal for the declaration: trailing fractional zeros removed,
/// whole numbers without a decimal point, never exponential.
pub fn format_decimal(d: Decimal) -> String {
    // normalize() also turns -0 into 0
    d.normalize().to_string()
}
