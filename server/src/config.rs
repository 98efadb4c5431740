//! Server configuration parsed from environment variables.

use std::time::Duration;

use classroom::Tool;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: String },
}

/// Simulated generation delay per tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatencyProfile {
    /// When set, replaces every tool's default latency.
    pub override_ms: Option<u64>,
}

impl LatencyProfile {
    /// No delay at all.
    #[cfg(test)]
    #[must_use]
    pub fn none() -> Self {
        Self { override_ms: Some(0) }
    }

    #[must_use]
    pub fn for_tool(&self, tool: Tool) -> Duration {
        Duration::from_millis(self.override_ms.unwrap_or(tool.default_latency_ms()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub latency: LatencyProfile,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `SIMULATED_LATENCY_MS`: overrides every tool's simulated latency
    ///   (`0` disables the delay)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("SIMULATED_LATENCY_MS").ok().as_deref(),
        )
    }

    fn from_vars(port: Option<&str>, latency_ms: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port {
            None => DEFAULT_PORT,
            Some(raw) => parse_var("PORT", raw)?,
        };
        let override_ms = latency_ms
            .map(|raw| parse_var("SIMULATED_LATENCY_MS", raw))
            .transpose()?;
        Ok(Self { port, latency: LatencyProfile { override_ms } })
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::Invalid { var, value: raw.to_owned(), reason: e.to_string() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
