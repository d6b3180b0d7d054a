use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::domain::hotness::weights::{parse_weight, SourceWeights, DEFAULT_SOURCE_WEIGHT};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Analysis cache
    pub analysis_cache_enabled: bool,
    pub analysis_cache_ttl_secs: u64,
    // Background hotness refresh, 0 disables it
    pub hotness_refresh_interval_minutes: u64,
    // Scoring
    pub default_source_weight: f64,
    pub source_weight_overrides: Vec<(String, f64)>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup, `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let source_weight_overrides = match lookup("SOURCE_WEIGHTS") {
            Some(raw) => SourceWeights::parse_overrides(&raw)?,
            None => Vec::new(),
        };

        let config = Config {
            database_url: lookup("DATABASE_URL").ok_or("DATABASE_URL must be set")?,
            host: var("HOST", "0.0.0.0"),
            port: var("PORT", "8080").parse()?,
            environment: match var("ENVIRONMENT", "development").as_str() {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match var("LOG_FORMAT", "pretty").as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            analysis_cache_enabled: var("ANALYSIS_CACHE_ENABLED", "false").to_lowercase()
                == "true",
            analysis_cache_ttl_secs: var("ANALYSIS_CACHE_TTL_SECS", "60").parse()?,
            hotness_refresh_interval_minutes: parse_refresh_minutes(&var(
                "HOTNESS_REFRESH_INTERVAL_MINUTES",
                "60",
            ))?,
            default_source_weight: match lookup("DEFAULT_SOURCE_WEIGHT") {
                Some(raw) => parse_weight(raw.trim())?,
                None => DEFAULT_SOURCE_WEIGHT,
            },
            source_weight_overrides,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn analysis_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.analysis_cache_ttl_secs)
    }

    /// `None` when the background refresh is disabled
    pub fn hotness_refresh_interval(&self) -> Option<Duration> {
        match self.hotness_refresh_interval_minutes {
            0 => None,
            minutes => Some(Duration::from_secs(minutes.saturating_mul(60))),
        }
    }

    /// Built-in weight table with the configured overrides applied
    pub fn source_weights(&self) -> SourceWeights {
        self.source_weight_overrides.iter().fold(
            SourceWeights::new(self.default_source_weight),
            |weights, (source, weight)| weights.with_override(source.clone(), *weight),
        )
    }
}

/// Minutes between refresh runs; the interval has to fit in whole seconds
fn parse_refresh_minutes(raw: &str) -> Result<u64, Box<dyn std::error::Error>> {
    let minutes: u64 = raw.trim().parse()?;
    if minutes.checked_mul(60).is_none() {
        return Err(format!("HOTNESS_REFRESH_INTERVAL_MINUTES is too large: {}", minutes).into());
    }
    Ok(minutes)
}
