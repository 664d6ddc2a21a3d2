use std::io::Read;

use log::debug;

use super::names;
use super::tree::Document;
use crate::core::TranzitError;

/// The T2 declaration skeleton shipped with the crate.
pub const BUNDLED_TEMPLATE: &str = include_str!("t2_declaration.xml");

/// A parsed declaration template that has the nodes the assembler needs:
/// `Consignment/HouseConsignment` holding at least one `ConsignmentItem`.
#[derive(Debug, Clone)]
pub struct Template {
    document: Document,
}

impl Template {
    /// Parse the bundled template.
    pub fn bundled() -> Result<Self, TranzitError> {
        Self::parse(BUNDLED_TEMPLATE)
    }

    /// Read and parse a template from a stream.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, TranzitError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let xml = String::from_utf8(bytes)
            .map_err(|e| TranzitError::Template(format!("template is not UTF-8: {e}")))?;
        Self::parse(&xml)
    }

    /// Parse template XML. Anything before the XML declaration, including a
    /// byte-order mark, is ignored.
    pub fn parse(xml: &str) -> Result<Self, TranzitError> {
        let xml = match xml.find("<?xml") {
            Some(start) => &xml[start..],
            None => xml.trim_start_matches('\u{feff}'),
        };
        let document = Document::parse(xml)?;
        check_structure(&document)?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub(crate) fn into_document(self) -> Document {
        self.document
    }
}

fn check_structure(document: &Document) -> Result<(), TranzitError> {
    let consignment = document
        .root()
        .child(names::CONSIGNMENT)
        .ok_or_else(|| TranzitError::Template("template is missing Consignment".into()))?;
    let house = consignment
        .child(names::HOUSE_CONSIGNMENT)
        .ok_or_else(|| TranzitError::Template("template is missing HouseConsignment".into()))?;
    let items = house.children_named(names::CONSIGNMENT_ITEM).count();
    if items == 0 {
        return Err(TranzitError::Template(
            "template has no ConsignmentItem entries".into(),
        ));
    }
    debug!(
        "template <{}> ok, {items} item node(s) in HouseConsignment",
        document.root().name()
    );
    Ok(())
}
