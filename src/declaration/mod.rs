//! NCTS T2 transit declaration assembly.
//!
//! The declaration is produced from a fixed XML template (CC015C). The
//! assembler rewrites a handful of fields and clones the first
//! `ConsignmentItem` once per manifest line; every other node comes out as it
//! went in.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use tranzit::declaration::{Template, assemble};
//! use tranzit::{LineItem, Manifest};
//!
//! let manifest = Manifest::from_items(vec![LineItem {
//!     description: "Books".into(),
//!     tariff_code: "490199".into(),
//!     reference: "1Z999AA10123456784".into(),
//!     weight: dec!(12.50),
//! }]).unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
//! let document = assemble(Template::bundled().unwrap(), "24RO0001", date, &manifest).unwrap();
//! let xml = document.to_xml_string().unwrap();
//! assert!(xml.contains("<LRN>24RO0001</LRN>"));
//! assert!(xml.contains("<grossMass>12.5</grossMass>"));
//! ```

mod assemble;
mod template;
pub mod tree;

pub use assemble::assemble;
pub use template::{BUNDLED_TEMPLATE, Template};
pub use tree::{Document, Element, Node};

/// Element names (local names) the assembler addresses.
pub mod names {
    pub const TRANSIT_OPERATION: &str = "TransitOperation";
    pub const LRN: &str = "LRN";
    pub const LIMIT_DATE: &str = "limitDate";
    pub const CONSIGNMENT: &str = "Consignment";
    pub const HOUSE_CONSIGNMENT: &str = "HouseConsignment";
    pub const GROSS_MASS: &str = "grossMass";
    pub const CONSIGNMENT_ITEM: &str = "ConsignmentItem";
    pub const GOODS_ITEM_NUMBER: &str = "goodsItemNumber";
    pub const DECLARATION_GOODS_ITEM_NUMBER: &str = "declarationGoodsItemNumber";
    pub const COMMODITY: &str = "Commodity";
    pub const DESCRIPTION_OF_GOODS: &str = "descriptionOfGoods";
    pub const COMMODITY_CODE: &str = "CommodityCode";
    pub const HS_SUBHEADING_CODE: &str = "harmonizedSystemSubHeadingCode";
    pub const GOODS_MEASURE: &str = "GoodsMeasure";
    pub const PREVIOUS_DOCUMENT: &str = "PreviousDocument";
    pub const REFERENCE_NUMBER: &str = "referenceNumber";
}
