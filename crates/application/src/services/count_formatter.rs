use icu_decimal::input::Decimal;
use icu_decimal::{DecimalFormatter, DecimalFormatterPreferences};
use icu_locale_core::Locale;
use visitor_counter_domain::DomainError;

/// Renders counts with the digit grouping of a configured locale.
pub struct CountFormatter {
    locale: String,
    formatter: DecimalFormatter,
}

impl CountFormatter {
    pub fn new(locale: &str) -> Result<Self, DomainError> {
        let parsed: Locale = locale.parse().map_err(|e| {
            DomainError::InvalidConfiguration(format!("Invalid locale '{}': {}", locale, e))
        })?;

        let formatter = DecimalFormatter::try_new(
            DecimalFormatterPreferences::from(&parsed),
            Default::default(),
        )
        .map_err(|e| {
            DomainError::InvalidConfiguration(format!(
                "No number formatting data for locale '{}': {}",
                locale, e
            ))
        })?;

        Ok(Self {
            locale: locale.to_string(),
            formatter,
        })
    }

    pub fn format(&self, value: u64) -> String {
        self.formatter.format(&Decimal::from(value)).to_string()
    }
}

impl std::fmt::Debug for CountFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountFormatter")
            .field("locale", &self.locale)
            .finish()
    }
}
