//! Single-call conversion: manifest workbook + template → declaration XML.

use chrono::{Local, NaiveDate};
use log::debug;
use std::io::{Read, Write};

use crate::core::{Manifest, ManifestConfig, TranzitError};
use crate::declaration::{Template, assemble};
use crate::sheet::{Sheet, read_manifest, xlsx};

/// Result of a conversion run that did not fail.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The declaration was built and serialized.
    Converted(Conversion),
    /// The manifest has a header but no data rows; nothing was assembled.
    NoData,
}

/// A finished declaration, serialized and ready to be persisted.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The line items that went into the declaration.
    pub manifest: Manifest,
    /// The declaration document, UTF-8, indented.
    pub xml: String,
}

impl Conversion {
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), TranzitError> {
        out.write_all(self.xml.as_bytes())?;
        Ok(())
    }
}

/// Convert a manifest workbook into a declaration dated today.
///
/// `manifest` holds workbook bytes (xlsx, xls, xlsb or ods; the first sheet is
/// read) and `template` the declaration template XML. Nothing is written:
/// persisting [`Conversion::xml`] is up to the caller.
pub fn convert(
    manifest: impl Read,
    template: impl Read,
    identifier: &str,
    config: &ManifestConfig,
) -> Result<Outcome, TranzitError> {
    convert_at(manifest, template, identifier, Local::now().date_naive(), config)
}

/// [`convert`] with an explicit declaration date.
pub fn convert_at(
    mut manifest: impl Read,
    template: impl Read,
    identifier: &str,
    date: NaiveDate,
    config: &ManifestConfig,
) -> Result<Outcome, TranzitError> {
    check_identifier(identifier)?;
    let mut bytes = Vec::new();
    manifest.read_to_end(&mut bytes)?;
    let sheet = xlsx::read_first_sheet(&bytes)?;
    convert_with(&sheet, || Template::from_reader(template), identifier, date, config)
}

/// Convert an already loaded sheet.
pub fn convert_sheet(
    sheet: &Sheet,
    template: Template,
    identifier: &str,
    date: NaiveDate,
    config: &ManifestConfig,
) -> Result<Outcome, TranzitError> {
    check_identifier(identifier)?;
    convert_with(sheet, || Ok(template), identifier, date, config)
}

fn convert_with(
    sheet: &Sheet,
    load_template: impl FnOnce() -> Result<Template, TranzitError>,
    identifier: &str,
    date: NaiveDate,
    config: &ManifestConfig,
) -> Result<Outcome, TranzitError> {
    let manifest = read_manifest(sheet, config)?;
    if manifest.is_empty() {
        debug!("manifest has no data rows, skipping assembly");
        return Ok(Outcome::NoData);
    }

    let document = assemble(load_template()?, identifier.trim(), date, &manifest)?;
    let xml = document.to_xml_string()?;
    Ok(Outcome::Converted(Conversion { manifest, xml }))
}

fn check_identifier(identifier: &str) -> Result<(), TranzitError> {
    if identifier.trim().is_empty() {
        return Err(TranzitError::InvalidIdentifier);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Cell;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 15).unwrap()
    }

    fn header_only() -> Sheet {
        Sheet::from_rows(
            0,
            vec![
                ["awb", "descriere marfa", "incadrare", "greutate"]
                    .into_iter()
                    .map(Cell::text)
                    .collect(),
            ],
        )
    }

    #[test]
    fn blank_identifier_is_rejected() {
        let result = convert_sheet(
            &header_only(),
            Template::bundled().unwrap(),
            "  ",
            date(),
            &ManifestConfig::default(),
        );
        assert!(matches!(result, Err(TranzitError::InvalidIdentifier)));
    }

    #[test]
    fn header_without_rows_is_no_data() {
        let outcome = convert_sheet(
            &header_only(),
            Template::bundled().unwrap(),
            "LRN1",
            date(),
            &ManifestConfig::default(),
        )
        .unwrap();
        assert!(matches!(outcome, Outcome::NoData));
    }

    #[test]
    fn no_data_never_reads_the_template() {
        let sheet = header_only();
        let outcome = convert_with(
            &sheet,
            || Err(TranzitError::Template("should not be loaded".into())),
            "LRN1",
            date(),
            &ManifestConfig::default(),
        )
        .unwrap();
        assert!(matches!(outcome, Outcome::NoData));
    }
}
