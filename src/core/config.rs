use serde::{Deserialize, Serialize};

/// Column labels and scan limits used to read a manifest sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Rows scanned for the header after the sheet's first row (inclusive),
    /// so the default of 20 inspects 21 rows.
    pub header_window: u32,
    /// Label of the goods description column.
    pub description_label: String,
    /// Label of the tariff classification column.
    pub tariff_code_label: String,
    /// Label of the shipment reference column. A blank cell here ends the data.
    pub reference_label: String,
    /// Accepted labels for the weight column, in priority order.
    pub weight_labels: Vec<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            header_window: 20,
            description_label: "descriere marfa".into(),
            tariff_code_label: "incadrare".into(),
            reference_label: "awb".into(),
            weight_labels: vec!["greutate".into(), "kgs".into()],
        }
    }
}

/// Builder for [`ManifestConfig`].
///
/// # Example
///
/// ```
/// use tranzit::ManifestConfigBuilder;
///
/// let config = ManifestConfigBuilder::new()
///     .header_window(40)
///     .weight_labels(["gross weight", "kgs"])
///     .build();
/// assert_eq!(config.weight_labels, vec!["gross weight", "kgs"]);
/// ```
#[derive(Debug, Default)]
pub struct ManifestConfigBuilder {
    config: ManifestConfig,
}

impl ManifestConfigBuilder {
    /// Start from the default labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many rows past the first row may hold the header.
    pub fn header_window(mut self, rows: u32) -> Self {
        self.config.header_window = rows;
        self
    }

    /// Set the goods description label.
    pub fn description_label(mut self, label: impl Into<String>) -> Self {
        self.config.description_label = label.into();
        self
    }

    /// Set the tariff classification label.
    pub fn tariff_code_label(mut self, label: impl Into<String>) -> Self {
        self.config.tariff_code_label = label.into();
        self
    }

    /// Set the shipment reference label.
    pub fn reference_label(mut self, label: impl Into<String>) -> Self {
        self.config.reference_label = label.into();
        self
    }

    /// Replace the accepted weight labels. Earlier labels win.
    pub fn weight_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.weight_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> ManifestConfig {
        self.config
    }
}

/// Naming scheme for generated declaration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputNaming {
    /// Prepended to the timestamp.
    pub prefix: String,
    /// `chrono` format string for the local timestamp.
    pub stamp_format: String,
    /// File extension without the dot.
    pub extension: String,
}

impl Default for OutputNaming {
    fn default() -> Self {
        Self {
            prefix: "T2-".into(),
            stamp_format: "%Y%m%d-%H%M".into(),
            extension: "xml".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_romanian_manifest_headers() {
        let config = ManifestConfig::default();
        assert_eq!(config.header_window, 20);
        assert_eq!(config.description_label, "descriere marfa");
        assert_eq!(config.weight_labels, vec!["greutate", "kgs"]);
    }

    #[test]
    fn builder_overrides() {
        let config = ManifestConfigBuilder::new()
            .description_label("Goods")
            .tariff_code_label("HS code")
            .reference_label("Waybill")
            .build();
        assert_eq!(config.description_label, "Goods");
        assert_eq!(config.tariff_code_label, "HS code");
        assert_eq!(config.reference_label, "Waybill");
        assert_eq!(config.header_window, 20);
    }
}
