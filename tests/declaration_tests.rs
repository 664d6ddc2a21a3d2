#![cfg(feature = "declaration")]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tranzit::declaration::{Document, Element, Template, assemble};
use tranzit::*;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 15).unwrap()
}

fn item(reference: &str, description: &str, code: &str, weight: Decimal) -> LineItem {
    LineItem {
        description: description.into(),
        tariff_code: code.into(),
        reference: reference.into(),
        weight,
    }
}

fn three_items() -> Manifest {
    Manifest::from_items(vec![
        item("1Z01", "Carti", "490199", dec!(5.5)),
        item("1Z02", "Jucarii", "950300", dec!(2.25)),
        item("1Z03", "Pantofi", "640399", dec!(10)),
    ])
    .unwrap()
}

/// Serialize and parse again, so assertions run against the actual output.
fn roundtrip(doc: &Document) -> Document {
    Document::parse(&doc.to_xml_string().unwrap()).unwrap()
}

fn items(doc: &Document) -> Vec<&Element> {
    doc.root()
        .find(&["Consignment", "HouseConsignment"])
        .unwrap()
        .children_named("ConsignmentItem")
        .collect()
}

fn text(el: &Element, path: &[&str]) -> String {
    el.find(path).map(Element::text).unwrap_or_default()
}

#[test]
fn three_item_declaration() {
    let doc = roundtrip(&assemble(Template::bundled().unwrap(), "LRN123", date(), &three_items()).unwrap());
    let root = doc.root();

    assert_eq!(text(root, &["TransitOperation", "LRN"]), "LRN123");
    assert_eq!(text(root, &["TransitOperation", "limitDate"]), "2024-10-15");
    assert_eq!(text(root, &["Consignment", "grossMass"]), "17.75");
    assert_eq!(text(root, &["Consignment", "HouseConsignment", "grossMass"]), "17.75");

    let items = items(&doc);
    assert_eq!(items.len(), 3);
    for (i, el) in items.iter().enumerate() {
        let n = (i + 1).to_string();
        assert_eq!(text(el, &["goodsItemNumber"]), n);
        assert_eq!(text(el, &["declarationGoodsItemNumber"]), n);
    }
    assert_eq!(text(items[0], &["Commodity", "descriptionOfGoods"]), "Carti");
    assert_eq!(
        text(items[1], &["Commodity", "CommodityCode", "harmonizedSystemSubHeadingCode"]),
        "950300"
    );
    assert_eq!(text(items[2], &["Commodity", "GoodsMeasure", "grossMass"]), "10");
    assert_eq!(text(items[2], &["PreviousDocument", "referenceNumber"]), "1Z03");
}

#[test]
fn unaddressed_nodes_are_unchanged() {
    let template = Template::bundled().unwrap();
    let original = template.document().clone();
    let doc = roundtrip(&assemble(template, "LRN123", date(), &three_items()).unwrap());

    let changed = ["TransitOperation", "Consignment"];
    let before: Vec<&Element> = original
        .root()
        .children()
        .filter(|e| !changed.contains(&e.local_name()))
        .collect();
    let after: Vec<&Element> = doc
        .root()
        .children()
        .filter(|e| !changed.contains(&e.local_name()))
        .collect();
    assert_eq!(before, after);
    assert_eq!(doc.root().name(), "ncts:CC015C");
    assert_eq!(doc.root().attribute("PhaseID").as_deref(), Some("NCTS5.0"));

    let untouched_in = |doc: &Document, section: &str, skip: &[&str]| -> Vec<Element> {
        doc.root()
            .child(section)
            .unwrap()
            .children()
            .filter(|e| !skip.contains(&e.local_name()))
            .cloned()
            .collect()
    };
    assert_eq!(
        untouched_in(&original, "TransitOperation", &["LRN", "limitDate"]),
        untouched_in(&doc, "TransitOperation", &["LRN", "limitDate"])
    );
    assert_eq!(
        untouched_in(&original, "Consignment", &["grossMass", "HouseConsignment"]),
        untouched_in(&doc, "Consignment", &["grossMass", "HouseConsignment"])
    );

    let template_item = original
        .root()
        .find(&["Consignment", "HouseConsignment", "ConsignmentItem"])
        .unwrap();
    for el in items(&doc) {
        assert_eq!(el.child("Packaging"), template_item.child("Packaging"));
        assert_eq!(
            el.find(&["PreviousDocument", "type"]),
            template_item.find(&["PreviousDocument", "type"])
        );
    }
}

#[test]
fn items_are_appended_after_other_house_content() {
    let doc = assemble(Template::bundled().unwrap(), "X", date(), &three_items()).unwrap();
    let house = doc.root().find(&["Consignment", "HouseConsignment"]).unwrap();
    let names: Vec<&str> = house.children().map(Element::local_name).collect();
    assert_eq!(
        names,
        vec![
            "sequenceNumber",
            "grossMass",
            "ConsignmentItem",
            "ConsignmentItem",
            "ConsignmentItem"
        ]
    );
}

#[test]
fn total_formatting() {
    for (weights, expected) in [
        (vec![dec!(4.00), dec!(6.00)], "10"),
        (vec![dec!(10.50)], "10.5"),
        (vec![dec!(10), dec!(0.125)], "10.125"),
    ] {
        let manifest = Manifest::from_items(
            weights.into_iter().map(|w| item("R", "D", "C", w)).collect(),
        )
        .unwrap();
        let doc = assemble(Template::bundled().unwrap(), "X", date(), &manifest).unwrap();
        assert_eq!(text(doc.root(), &["Consignment", "grossMass"]), expected);
    }
}

#[test]
fn template_without_transit_operation_is_tolerated() {
    let xml = r#"<?xml version="1.0"?>
<Decl xmlns="urn:example">
  <Other keep="yes">value</Other>
  <Consignment>
    <HouseConsignment>
      <ConsignmentItem>
        <goodsItemNumber/>
        <Commodity><descriptionOfGoods/></Commodity>
      </ConsignmentItem>
    </HouseConsignment>
  </Consignment>
</Decl>"#;
    let doc = assemble(Template::parse(xml).unwrap(), "X", date(), &three_items()).unwrap();
    let out = doc.to_xml_string().unwrap();
    assert!(out.contains("<Decl xmlns=\"urn:example\">"));
    assert!(out.contains("<Other keep=\"yes\">value</Other>"));
    assert!(!out.contains("<grossMass>"));
    assert!(out.contains("<descriptionOfGoods>Pantofi</descriptionOfGoods>"));
    assert_eq!(items(&Document::parse(&out).unwrap()).len(), 3);
}

#[test]
fn missing_structure_fails_before_assembly() {
    for xml in [
        "<Decl><Consignment/></Decl>",
        "<Decl><Consignment><HouseConsignment/></Consignment></Decl>",
    ] {
        assert!(matches!(Template::parse(xml), Err(TranzitError::Template(_))));
    }
}

#[test]
fn special_characters_are_escaped() {
    let manifest = Manifest::from_items(vec![item("1Z<1>", "Nuts & bolts", "7318", dec!(1))]).unwrap();
    let doc = assemble(Template::bundled().unwrap(), "LRN&1", date(), &manifest).unwrap();
    let out = doc.to_xml_string().unwrap();
    assert!(out.contains("<descriptionOfGoods>Nuts &amp; bolts</descriptionOfGoods>"));
    assert!(out.contains("<LRN>LRN&amp;1</LRN>"));
    let parsed = Document::parse(&out).unwrap();
    assert_eq!(text(items(&parsed)[0], &["PreviousDocument", "referenceNumber"]), "1Z<1>");
}

#[test]
fn output_is_indented_utf8() {
    let doc = assemble(Template::bundled().unwrap(), "Î", date(), &three_items()).unwrap();
    let mut bytes = Vec::new();
    doc.write_to(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<ncts:CC015C"));
    let out = String::from_utf8(bytes).unwrap();
    assert!(out.contains("\n    <LRN>Î</LRN>\n"));
    assert!(out.contains("\n        <goodsItemNumber>3</goodsItemNumber>\n"));
}
