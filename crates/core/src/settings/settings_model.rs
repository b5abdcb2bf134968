use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Largest number of fractional digits a `Decimal` can carry.
pub const MAX_PRECISION: u32 = 28;

/// How monetary values and quantities are rendered.
///
/// Defaults match a Brazilian-real display (`R$ 1.234,56`) with quantities
/// shown to eight decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySettings {
    pub currency_symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    /// Fractional digits for fiat values
    pub fiat_precision: u32,
    /// Fractional digits for asset quantities
    pub quantity_precision: u32,
    /// `chrono` format string for transaction timestamps
    pub date_format: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            decimal_separator: ',',
            grouping_separator: '.',
            fiat_precision: 2,
            quantity_precision: 8,
            date_format: "%d/%m/%Y %H:%M".to_string(),
        }
    }
}

impl DisplaySettings {
    /// Parses settings from JSON. Missing keys take their default value.
    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: DisplaySettings = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.decimal_separator == self.grouping_separator {
            return Err(Error::InvalidConfigValue(format!(
                "decimal and grouping separators must differ (both '{}')",
                self.decimal_separator
            )));
        }
        if self.fiat_precision > MAX_PRECISION {
            return Err(Error::InvalidConfigValue(format!(
                "fiatPrecision {} exceeds {}",
                self.fiat_precision, MAX_PRECISION
            )));
        }
        if self.quantity_precision > MAX_PRECISION {
            return Err(Error::InvalidConfigValue(format!(
                "quantityPrecision {} exceeds {}",
                self.quantity_precision, MAX_PRECISION
            )));
        }
        if self.date_format.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "dateFormat cannot be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::InvalidConfigValue(format!(
                "dateFormat '{}' is not a valid strftime pattern",
                self.date_format
            )));
        }
        Ok(())
    }
}
