//! Runtime settings loaded from the environment (and an optional `.env`).
//!
//! | variable          | default |
//! |-------------------|---------|
//! | `SCN_LOG_LEVEL`   | `warn`  |
//! | `SCN_FIRST_YEAR`  | `2012`  |
//! | `SCN_LAST_YEAR`   | `2024`  |
//!
//! Command-line flags override these values.

use std::env;

use thiserror::Error;

pub const DEFAULT_FIRST_YEAR: i32 = 2012;
pub const DEFAULT_LAST_YEAR: i32 = 2024;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_level: String,
    pub first_year: i32,
    pub last_year: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            first_year: DEFAULT_FIRST_YEAR,
            last_year: DEFAULT_LAST_YEAR,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let log_level = env::var("SCN_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        let first_year = year_var("SCN_FIRST_YEAR", DEFAULT_FIRST_YEAR)?;
        let last_year = year_var("SCN_LAST_YEAR", DEFAULT_LAST_YEAR)?;

        Ok(Self {
            log_level,
            first_year,
            last_year,
        })
    }
}

fn year_var(name: &'static str, default: i32) -> Result<i32, SettingsError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<i32>()
            .map_err(|_| SettingsError::InvalidYear { name, value: raw }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("{name} must be an integer year (got '{value}')")]
    InvalidYear { name: &'static str, value: String },
}
