use chrono::NaiveDate;
use log::debug;

use super::names;
use super::template::Template;
use super::tree::{Document, Element};
use crate::core::{LineItem, Manifest, TranzitError, format_decimal};

/// Fill a template with a manifest.
///
/// Sets the LRN and limit date, writes the total gross mass to the
/// consignment and the house consignment, and replaces the house
/// consignment's items with one copy of its first `ConsignmentItem` per line
/// item, numbered from 1. Everything else in the template is left as is.
///
/// Fails before touching the document if `HouseConsignment` or its item
/// template is missing.
pub fn assemble(
    template: Template,
    identifier: &str,
    date: NaiveDate,
    manifest: &Manifest,
) -> Result<Document, TranzitError> {
    let mut document = template.into_document();
    let root = document.root_mut();

    let item_template = root
        .find(&[names::CONSIGNMENT, names::HOUSE_CONSIGNMENT])
        .ok_or_else(|| TranzitError::Template("template is missing HouseConsignment".into()))?
        .child(names::CONSIGNMENT_ITEM)
        .cloned()
        .ok_or_else(|| {
            TranzitError::Template("template has no ConsignmentItem entries".into())
        })?;

    if let Some(operation) = root.child_mut(names::TRANSIT_OPERATION) {
        operation.set_text_at(&[names::LRN], identifier);
        operation.set_text_at(&[names::LIMIT_DATE], &date.format("%Y-%m-%d").to_string());
    }

    let total = format_decimal(manifest.total_weight());
    let Some(consignment) = root.child_mut(names::CONSIGNMENT) else {
        return Err(TranzitError::Template("template is missing Consignment".into()));
    };
    consignment.set_text_at(&[names::GROSS_MASS], &total);

    let Some(house) = consignment.child_mut(names::HOUSE_CONSIGNMENT) else {
        return Err(TranzitError::Template("template is missing HouseConsignment".into()));
    };
    house.set_text_at(&[names::GROSS_MASS], &total);

    let removed = house.remove_children(names::CONSIGNMENT_ITEM);
    for (index, item) in manifest.items().iter().enumerate() {
        house.push(fill_item(&item_template, index + 1, item));
    }

    debug!(
        "assembled declaration {identifier}: {} item(s) replacing {removed}, total {total}",
        manifest.len()
    );
    Ok(document)
}

fn fill_item(template: &Element, sequence: usize, item: &LineItem) -> Element {
    let mut node = template.clone();
    let sequence = sequence.to_string();

    node.set_text_at(&[names::GOODS_ITEM_NUMBER], &sequence);
    node.set_text_at(&[names::DECLARATION_GOODS_ITEM_NUMBER], &sequence);
    node.set_text_at(&[names::COMMODITY, names::DESCRIPTION_OF_GOODS], &item.description);
    node.set_text_at(
        &[names::COMMODITY, names::COMMODITY_CODE, names::HS_SUBHEADING_CODE],
        &item.tariff_code,
    );
    node.set_text_at(
        &[names::COMMODITY, names::GOODS_MEASURE, names::GROSS_MASS],
        &format_decimal(item.weight),
    );
    node.set_text_at(
        &[names::PREVIOUS_DOCUMENT, names::REFERENCE_NUMBER],
        &item.reference,
    );
    node
}
