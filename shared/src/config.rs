use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const DEFAULT_REPORTER_NAME: &str = "彭先生";
pub const DEFAULT_CURRENCY_PREFIX: &str = "NT$";
/// Gives the print layout a frame to settle before the shell prints.
pub const DEFAULT_PRINT_DELAY_MS: u64 = 50;
pub const MAX_PRINT_DELAY_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Shown in the print header as the person who prepared the sheet.
    pub reporter_name: String,
    pub currency_prefix: String,
    pub print_delay_ms: u64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            reporter_name: DEFAULT_REPORTER_NAME.to_owned(),
            currency_prefix: DEFAULT_CURRENCY_PREFIX.to_owned(),
            print_delay_ms: DEFAULT_PRINT_DELAY_MS,
        }
    }
}

impl SheetConfig {
    /// Strict loader for shell-provided config files. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.reporter_name.trim().is_empty() {
            return Err(ConfigError::EmptyReporter);
        }
        if config.print_delay_ms > MAX_PRINT_DELAY_MS {
            return Err(ConfigError::InvalidDelay {
                value: config.print_delay_ms,
                max: MAX_PRINT_DELAY_MS,
            });
        }
        Ok(config)
    }

    pub fn validated(mut self) -> Self {
        self.print_delay_ms = self.print_delay_ms.min(MAX_PRINT_DELAY_MS);
        if self.reporter_name.trim().is_empty() {
            self.reporter_name = DEFAULT_REPORTER_NAME.to_owned();
        }
        self.currency_prefix = self.currency_prefix.trim().to_owned();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn from_json_fills_missing_keys_with_defaults() {
        let config = SheetConfig::from_json(r#"{"reporter_name": "陳小姐"}"#).unwrap();
        assert_eq!(config.reporter_name, "陳小姐");
        assert_eq!(config.currency_prefix, DEFAULT_CURRENCY_PREFIX);
        assert_eq!(config.print_delay_ms, DEFAULT_PRINT_DELAY_MS);
    }

    #[test]
    fn from_json_rejects_bad_values() {
        assert_matches!(
            SheetConfig::from_json(r#"{"reporter_name": "  "}"#),
            Err(ConfigError::EmptyReporter)
        );
        assert_matches!(
            SheetConfig::from_json(r#"{"print_delay_ms": 60000}"#),
            Err(ConfigError::InvalidDelay { value: 60000, .. })
        );
        assert_matches!(SheetConfig::from_json("not json"), Err(ConfigError::Parse(_)));
    }

    #[test]
    fn validated_repairs_instead_of_failing() {
        let config = SheetConfig {
            reporter_name: String::new(),
            currency_prefix: " NT$ ".into(),
            print_delay_ms: u64::MAX,
        }
        .validated();
        assert_eq!(config.reporter_name, DEFAULT_REPORTER_NAME);
        assert_eq!(config.currency_prefix, "NT$");
        assert_eq!(config.print_delay_ms, MAX_PRINT_DELAY_MS);
    }
}
