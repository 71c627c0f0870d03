//! Environment configuration.

use std::str::FromStr;
use std::time::Duration;

use studio_core::locale::Locale;

use crate::error::AppError;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(AppError::Config(format!(
                "STUDIO_LOG_FORMAT must be json or pretty, got {other:?}"
            ))),
        }
    }
}

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Subscriber output format.
    pub log_format: LogFormat,
    /// Locale for views when the caller does not pick one.
    pub default_locale: Locale,
    /// Replaces every quiz's own analysis pause when set.
    pub analyze_duration_override: Option<Duration>,
    /// Simulated delay of an inquiry submission.
    pub inquiry_latency: Duration,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_owned(),
            log_format: LogFormat::Json,
            default_locale: Locale::Ko,
            analyze_duration_override: None,
            inquiry_latency: Duration::from_millis(1200),
        }
    }
}

impl StudioConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults
    /// for absent keys.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_filter = lookup("STUDIO_LOG").unwrap_or(defaults.log_filter);
        let log_format = lookup("STUDIO_LOG_FORMAT")
            .map(|value| value.parse::<LogFormat>())
            .transpose()?
            .unwrap_or(defaults.log_format);
        let default_locale = lookup("STUDIO_LOCALE")
            .map(|value| {
                value.parse::<Locale>().map_err(|_| {
                    AppError::Config(format!("STUDIO_LOCALE must be ko or en, got {value:?}"))
                })
            })
            .transpose()?
            .unwrap_or(defaults.default_locale);
        let analyze_duration_override = lookup("STUDIO_ANALYZE_DURATION_MS")
            .map(|value| millis("STUDIO_ANALYZE_DURATION_MS", &value))
            .transpose()?;
        let inquiry_latency = lookup("STUDIO_INQUIRY_LATENCY_MS")
            .map(|value| millis("STUDIO_INQUIRY_LATENCY_MS", &value))
            .transpose()?
            .unwrap_or(defaults.inquiry_latency);

        Ok(Self {
            log_filter,
            log_format,
            default_locale,
            analyze_duration_override,
            inquiry_latency,
        })
    }
}

fn millis(key: &str, value: &str) -> Result<Duration, AppError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| AppError::Config(format!("{key} must be a number of milliseconds: {e}")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        // Act
        let config = StudioConfig::from_lookup(|_| None).unwrap();

        // Assert
        assert_eq!(config, StudioConfig::default());
        assert_eq!(config.inquiry_latency, Duration::from_millis(1200));
    }

    #[test]
    fn test_reads_every_variable() {
        // Arrange
        let lookup = lookup_from(&[
            ("STUDIO_LOG", "studio_demo=debug"),
            ("STUDIO_LOG_FORMAT", "pretty"),
            ("STUDIO_LOCALE", "en"),
            ("STUDIO_ANALYZE_DURATION_MS", "50"),
            ("STUDIO_INQUIRY_LATENCY_MS", "0"),
        ]);

        // Act
        let config = StudioConfig::from_lookup(lookup).unwrap();

        // Assert
        assert_eq!(config.log_filter, "studio_demo=debug");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.analyze_duration_override, Some(Duration::from_millis(50)));
        assert_eq!(config.inquiry_latency, Duration::ZERO);
    }

    #[test]
    fn test_invalid_duration_is_a_config_error() {
        // Arrange
        let lookup = lookup_from(&[("STUDIO_ANALYZE_DURATION_MS", "soon")]);

        // Act
        let result = StudioConfig::from_lookup(lookup);

        // Assert
        assert!(matches!(
            result,
            Err(AppError::Config(msg)) if msg.contains("STUDIO_ANALYZE_DURATION_MS")
        ));
    }

    #[test]
    fn test_unknown_locale_is_a_config_error() {
        // Arrange
        let lookup = lookup_from(&[("STUDIO_LOCALE", "fr")]);

        // Act
        let result = StudioConfig::from_lookup(lookup);

        // Assert
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_unknown_log_format_is_a_config_error() {
        // Arrange
        let lookup = lookup_from(&[("STUDIO_LOG_FORMAT", "xml")]);

        // Act
        let result = StudioConfig::from_lookup(lookup);

        // Assert
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
