//! Data row extraction below a located header.

use log::{debug, trace};

use super::Sheet;
use crate::core::{
    Field, HeaderLocation, LineItem, Manifest, RowProblem, TranzitError, parse_quantity,
};

/// Read line items from the rows after the header.
///
/// Extraction ends at the first missing row or the first row whose reference
/// cell is blank; nothing after that row is read. Any earlier row lacking a
/// description, tariff code, or usable weight fails the whole extraction.
pub fn extract_manifest(sheet: &Sheet, header: &HeaderLocation) -> Result<Manifest, TranzitError> {
    let mut manifest = Manifest::default();
    let Some(last) = sheet.last_row() else {
        return Ok(manifest);
    };

    for index in header.row.saturating_add(1)..=last {
        let Some(row) = sheet.row(index) else {
            debug!("row {} is empty, end of data", index + 1);
            break;
        };

        let reference = row.cell_text(header.reference);
        if reference.is_empty() {
            debug!("row {} has no reference, end of data", index + 1);
            break;
        }

        let description = row.cell_text(header.description);
        let tariff_code = row.cell_text(header.tariff_code);
        let weight = parse_quantity(row.cell(header.weight)).map_err(|e| TranzitError::Row {
            row: index + 1,
            problem: RowProblem::InvalidWeight { text: e.text },
        })?;

        let mut missing = Vec::new();
        if description.is_empty() {
            missing.push(Field::Description);
        }
        if tariff_code.is_empty() {
            missing.push(Field::TariffCode);
        }
        let Some(weight) = weight else {
            missing.push(Field::Weight);
            return Err(TranzitError::Row {
                row: index + 1,
                problem: RowProblem::Missing(missing),
            });
        };
        if !missing.is_empty() {
            return Err(TranzitError::Row {
                row: index + 1,
                problem: RowProblem::Missing(missing),
            });
        }
        if weight.is_sign_negative() && !weight.is_zero() {
            return Err(TranzitError::Row {
                row: index + 1,
                problem: RowProblem::NegativeWeight { value: weight },
            });
        }

        trace!("row {}: {reference} {weight} kg", index + 1);
        let item = LineItem {
            description,
            tariff_code,
            reference,
            weight,
        };
        if manifest.push(item).is_none() {
            return Err(TranzitError::Row {
                row: index + 1,
                problem: RowProblem::TotalOverflow,
            });
        }
    }

    debug!(
        "extracted {} items, total weight {}",
        manifest.len(),
        manifest.total_weight()
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Cell;
    use rust_decimal_macros::dec;

    const HEADER: HeaderLocation = HeaderLocation {
        row: 0,
        reference: 0,
        description: 1,
        tariff_code: 2,
        weight: 3,
    };

    fn header_row() -> Vec<Cell> {
        ["awb", "descriere marfa", "incadrare", "kgs"]
            .into_iter()
            .map(Cell::text)
            .collect()
    }

    fn data_row(awb: &str, desc: &str, code: &str, weight: Cell) -> Vec<Cell> {
        vec![Cell::text(awb), Cell::text(desc), Cell::text(code), weight]
    }

    #[test]
    fn stops_at_blank_reference() {
        let sheet = Sheet::from_rows(
            0,
            vec![
                header_row(),
                data_row("1Z1", "Books", "4901", Cell::number(5.5)),
                data_row("", "Total", "", Cell::number(5.5)),
                data_row("1Z2", "Toys", "9503", Cell::number(1.0)),
            ],
        );
        let manifest = extract_manifest(&sheet, &HEADER).unwrap();
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.total_weight(), dec!(5.5));
    }

    #[test]
    fn stops_at_missing_row() {
        let sheet = Sheet::from_rows(
            0,
            vec![
                header_row(),
                data_row("1Z1", "Books", "4901", Cell::number(2.0)),
                vec![],
                data_row("1Z2", "", "", Cell::Empty),
            ],
        );
        let manifest = extract_manifest(&sheet, &HEADER).unwrap();
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn missing_weight_names_row_and_field() {
        let sheet = Sheet::from_rows(
            0,
            vec![
                header_row(),
                data_row("1Z1", "Books", "4901", Cell::number(2.0)),
                data_row("1Z2", "Toys", "9503", Cell::Empty),
            ],
        );
        match extract_manifest(&sheet, &HEADER) {
            Err(TranzitError::Row { row, problem }) => {
                assert_eq!(row, 3);
                assert_eq!(problem, RowProblem::Missing(vec![Field::Weight]));
            }
            other => panic!("expected row error, got {other:?}"),
        }
    }

    #[test]
    fn blank_description_and_code_with_reference_is_an_error() {
        let sheet = Sheet::from_rows(
            0,
            vec![header_row(), data_row("1Z1", " ", "", Cell::text("3"))],
        );
        match extract_manifest(&sheet, &HEADER) {
            Err(TranzitError::Row { row: 2, problem }) => assert_eq!(
                problem,
                RowProblem::Missing(vec![Field::Description, Field::TariffCode])
            ),
            other => panic!("expected row error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_weight_is_a_row_error() {
        let sheet = Sheet::from_rows(
            0,
            vec![header_row(), data_row("1Z1", "Books", "4901", Cell::text("1.234,5"))],
        );
        match extract_manifest(&sheet, &HEADER) {
            Err(TranzitError::Row { row: 2, problem }) => assert_eq!(
                problem,
                RowProblem::InvalidWeight {
                    text: "1.234,5".into()
                }
            ),
            other => panic!("expected row error, got {other:?}"),
        }
    }

    #[test]
    fn negative_weight_is_rejected() {
        let sheet = Sheet::from_rows(
            0,
            vec![header_row(), data_row("1Z1", "Books", "4901", Cell::number(-1.5))],
        );
        assert!(matches!(
            extract_manifest(&sheet, &HEADER),
            Err(TranzitError::Row {
                row: 2,
                problem: RowProblem::NegativeWeight { .. }
            })
        ));
    }

    #[test]
    fn overflowing_total_is_a_row_error() {
        let sheet = Sheet::from_rows(
            0,
            vec![
                header_row(),
                data_row("1Z1", "Steel", "7208", Cell::text("50000000000000000000000000000")),
                data_row("1Z2", "Steel", "7208", Cell::text("50000000000000000000000000000")),
            ],
        );
        match extract_manifest(&sheet, &HEADER) {
            Err(err @ TranzitError::Row { row: 3, .. }) => {
                assert_eq!(err.to_string(), "row 3: total weight is too large");
            }
            other => panic!("expected row error, got {other:?}"),
        }
    }

    #[test]
    fn header_on_last_row_yields_nothing() {
        let sheet = Sheet::from_rows(0, vec![header_row()]);
        assert!(extract_manifest(&sheet, &HEADER).unwrap().is_empty());
    }

    #[test]
    fn values_are_trimmed() {
        let sheet = Sheet::from_rows(
            0,
            vec![
                header_row(),
                data_row(" 1Z1 ", "  Books ", " 4901", Cell::formula(" 1 000,5 ")),
            ],
        );
        let manifest = extract_manifest(&sheet, &HEADER).unwrap();
        let item = &manifest.items()[0];
        assert_eq!(item.reference, "1Z1");
        assert_eq!(item.description, "Books");
        assert_eq!(item.tariff_code, "4901");
        assert_eq!(item.weight, dec!(1000.5));
    }
}
