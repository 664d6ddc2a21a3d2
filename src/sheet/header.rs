//! Header row detection by normalized column label.

use std::collections::HashMap;

use log::debug;

use super::Sheet;
use crate::core::{HeaderLocation, ManifestConfig};

/// Find the first row, within the configured window, whose labels include
/// the description, tariff code, reference and one of the weight labels.
///
/// Labels are compared after [`normalize_label`]. When a label repeats in a
/// row, its leftmost column is used.
pub fn locate_header(sheet: &Sheet, config: &ManifestConfig) -> Option<HeaderLocation> {
    let first = sheet.first_row()?;
    let last = sheet
        .last_row()?
        .min(first.saturating_add(config.header_window));

    let description = normalize_label(&config.description_label);
    let tariff_code = normalize_label(&config.tariff_code_label);
    let reference = normalize_label(&config.reference_label);
    let weights: Vec<String> = config
        .weight_labels
        .iter()
        .map(|label| normalize_label(label))
        .collect();

    for index in first..=last {
        let Some(row) = sheet.row(index) else {
            continue;
        };

        let mut columns: HashMap<String, u32> = HashMap::new();
        for (col, cell) in row.cells() {
            let name = normalize_label(&cell.display_text());
            if !name.is_empty() {
                columns.entry(name).or_insert(col);
            }
        }

        let weight = weights.iter().find_map(|label| columns.get(label));
        if let (Some(&description), Some(&tariff_code), Some(&reference), Some(&weight)) = (
            columns.get(&description),
            columns.get(&tariff_code),
            columns.get(&reference),
            weight,
        ) {
            let location = HeaderLocation {
                row: index,
                description,
                tariff_code,
                reference,
                weight,
            };
            debug!("header found at row {}: {location:?}", index + 1);
            return Some(location);
        }
    }

    debug!("no header row between rows {} and {}", first + 1, last + 1);
    None
}

/// Trim, collapse whitespace runs to one space, lowercase.
pub fn normalize_label(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
