//! User settings for Pocket Ledger
//!
//! Manages user preferences: how currency amounts are typed and displayed,
//! the log level, and the event loop tick rate.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// Currency entry and display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettings {
    /// Symbol shown in front of amounts (empty for none)
    #[serde(default)]
    pub symbol: String,

    /// Character grouping thousands (e.g. `1,234.50`)
    #[serde(default = "default_thousands_delimiter")]
    pub thousands_delimiter: char,

    /// Character between whole units and cents
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            symbol: String::new(),
            thousands_delimiter: default_thousands_delimiter(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

/// User settings for Pocket Ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency entry/display format
    #[serde(default)]
    pub currency: CurrencySettings,

    /// Filter directive for the log file (e.g. "info", "pocket_ledger=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Event loop tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_thousands_delimiter() -> char {
    ','
}

fn default_decimal_separator() -> char {
    '.'
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: CurrencySettings::default(),
            log_level: default_log_level(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check that the currency format can be parsed back unambiguously and
    /// that the log level is a usable filter directive
    pub fn validate(&self) -> Result<(), LedgerError> {
        let currency = &self.currency;
        if currency.thousands_delimiter == currency.decimal_separator {
            return Err(LedgerError::Config(format!(
                "Thousands delimiter and decimal separator must differ (both '{}')",
                currency.decimal_separator
            )));
        }
        if currency.thousands_delimiter.is_ascii_digit() || currency.decimal_separator.is_ascii_digit()
        {
            return Err(LedgerError::Config(
                "Currency delimiters cannot be digits".into(),
            ));
        }
        if self.tick_rate_ms == 0 {
            return Err(LedgerError::Config("Tick rate must be at least 1ms".into()));
        }
        // Checked on its own: `RUST_LOG` must not hide a bad stored value
        EnvFilter::try_new(&self.log_level).map_err(|e| {
            LedgerError::Config(format!("Invalid log level '{}': {}", self.log_level, e))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency.thousands_delimiter, ',');
        assert_eq!(settings.currency.decimal_separator, '.');
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.tick_rate_ms, 250);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency.thousands_delimiter = '.';
        settings.currency.decimal_separator = ',';
        settings.currency.symbol = "€".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency, settings.currency);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"log_level": "debug"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.log_level, "debug");
        assert_eq!(loaded.currency, CurrencySettings::default());
    }

    #[test]
    fn test_rejects_equal_delimiters() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"currency": {"thousands_delimiter": ".", "decimal_separator": "."}}"#,
        )
        .unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"log_level": "not a[valid directive"}"#,
        )
        .unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("Invalid log level"));

        let settings = Settings {
            log_level: "pocket_ledger=debug,warn".into(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        assert!(Settings::load_or_create(&paths).is_err());
    }
}
