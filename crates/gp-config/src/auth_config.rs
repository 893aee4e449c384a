use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTH_LATENCY_MS, MAX_AUTH_LATENCY_MS};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Simulated round-trip time of the mock authentication backend
    pub latency_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_AUTH_LATENCY_MS,
        }
    }
}

impl AuthConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.latency_ms > MAX_AUTH_LATENCY_MS {
            return Err(ConfigError::auth(format!(
                "auth.latency_ms must be 0-{}, got {}",
                MAX_AUTH_LATENCY_MS, self.latency_ms
            )));
        }

        Ok(())
    }
}
