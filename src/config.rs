//! Configuration management for the intake library.
//!
//! Configuration is read from environment variables, with an optional
//! `.env` file loaded first. Every setting has a default matching the
//! portal's intake forms, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use crate::models::{ContactField, ParticipationTypes};
use crate::validation::{ValidatorOptions, DEFAULT_COUNTRY};
use std::env;

/// Configuration for contact intake.
#[derive(Debug, Clone)]
pub struct Config {
    /// Country applied when a form leaves it blank (None disables)
    pub default_country: Option<String>,

    /// Whether a participation type must be selected (default: true)
    pub require_participation_type: bool,

    /// Whether to record `emailConsent = false` for contacts without email (default: true)
    pub track_email_consent: bool,

    /// Accepted participation types (default: the portal's standard list)
    pub participation_types: ParticipationTypes,

    /// Additional fields that must be non-blank (default: none)
    pub required_fields: Vec<ContactField>,

    /// Maximum number of directory matches to return (default: 5)
    pub max_match_results: usize,

    /// Match confidence threshold (0-100, default: 30)
    pub match_confidence_threshold: u8,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `INTAKE_DEFAULT_COUNTRY`: default country, empty to disable (default: "United States")
    /// - `INTAKE_REQUIRE_PARTICIPATION_TYPE`: true/false (default: true)
    /// - `INTAKE_TRACK_EMAIL_CONSENT`: true/false (default: true)
    /// - `INTAKE_PARTICIPATION_TYPES`: comma-separated labels
    /// - `INTAKE_REQUIRED_FIELDS`: comma-separated camelCase field names
    /// - `MAX_MATCH_RESULTS`: max directory matches (default: 5)
    /// - `MATCH_CONFIDENCE_THRESHOLD`: min confidence score (default: 30)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let default_country = match env::var("INTAKE_DEFAULT_COUNTRY") {
            Ok(val) if val.trim().is_empty() => None,
            Ok(val) => Some(val.trim().to_string()),
            Err(_) => defaults.default_country,
        };

        let require_participation_type = Self::parse_env_bool(
            "INTAKE_REQUIRE_PARTICIPATION_TYPE",
            defaults.require_participation_type,
        )?;
        let track_email_consent =
            Self::parse_env_bool("INTAKE_TRACK_EMAIL_CONSENT", defaults.track_email_consent)?;

        let participation_types = match env::var("INTAKE_PARTICIPATION_TYPES") {
            Ok(val) => {
                let types = ParticipationTypes::new(val.split(','));
                if types.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "INTAKE_PARTICIPATION_TYPES".to_string(),
                        reason: "Must list at least one participation type".to_string(),
                    });
                }
                types
            }
            Err(_) => defaults.participation_types,
        };

        let required_fields = match env::var("INTAKE_REQUIRED_FIELDS") {
            Ok(val) => Self::parse_fields("INTAKE_REQUIRED_FIELDS", &val)?,
            Err(_) => defaults.required_fields,
        };

        let max_match_results =
            Self::parse_env_usize("MAX_MATCH_RESULTS", defaults.max_match_results)?;
        let match_confidence_threshold =
            Self::parse_env_u8("MATCH_CONFIDENCE_THRESHOLD", defaults.match_confidence_threshold)?;

        // Validate confidence threshold is 0-100
        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "MATCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            default_country,
            require_participation_type,
            track_email_consent,
            participation_types,
            required_fields,
            max_match_results,
            match_confidence_threshold,
            log_level,
        })
    }

    /// Validator options derived from this configuration.
    pub fn validator_options(&self) -> ValidatorOptions {
        ValidatorOptions {
            require_participation_type: self.require_participation_type,
            participation_types: self.participation_types.clone(),
            track_email_consent: self.track_email_consent,
            default_country: self.default_country.clone(),
            required_fields: self.required_fields.clone(),
        }
    }

    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_fields(var_name: &str, val: &str) -> ConfigResult<Vec<ContactField>> {
        val.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<ContactField>()
                    .map_err(|reason| ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason,
                    })
            })
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_country: Some(DEFAULT_COUNTRY.to_string()),
            require_participation_type: true,
            track_email_consent: true,
            participation_types: ParticipationTypes::standard(),
            required_fields: Vec::new(),
            max_match_results: 5,
            match_confidence_threshold: 30,
            log_level: "error".to_string(),
        }
    }
}
