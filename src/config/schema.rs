//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every section has defaults, so an empty file starts all five servers.

use serde::{Deserialize, Serialize};

use crate::catalog::Flavor;

/// Root configuration for the demo servers.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// One entry per listener.
    pub servers: Vec<ServerConfig>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request size limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            servers: Flavor::ALL.into_iter().map(ServerConfig::for_flavor).collect(),
            timeouts: TimeoutConfig::default(),
            limits: LimitsConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn enabled_servers(&self) -> impl Iterator<Item = &ServerConfig> {
        self.servers.iter().filter(|s| s.enabled)
    }

    /// Disable every server whose flavor is not listed. An empty list keeps all.
    pub fn restrict_to(&mut self, flavors: &[Flavor]) {
        if flavors.is_empty() {
            return;
        }
        for server in &mut self.servers {
            if !flavors.contains(&server.flavor) {
                server.enabled = false;
            }
        }
    }
}

/// A single listener serving one catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server identifier for logging/metrics.
    pub name: String,

    /// Catalog to serve.
    pub flavor: Flavor,

    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Disabled servers are skipped at startup.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl ServerConfig {
    /// Default server for a flavor: named after it, on its usual port.
    pub fn for_flavor(flavor: Flavor) -> Self {
        Self {
            name: flavor.name().to_string(),
            flavor,
            bind_address: format!("0.0.0.0:{}", flavor.default_port()),
            enabled: true,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// How long shutdown waits for servers to drain, in seconds.
    pub shutdown_grace_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            shutdown_grace_secs: 10,
        }
    }
}

/// Request size limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest request body buffered for dispatch, in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development.
    Pretty,
    /// One JSON object per line, for log shippers.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` overrides it.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists_every_flavor() {
        let config = AppConfig::default();
        assert_eq!(config.servers.len(), 5);
        assert_eq!(config.servers[0].name, "nethttp");
        assert_eq!(config.servers[0].bind_address, "0.0.0.0:8080");
        assert_eq!(config.servers[4].flavor, Flavor::Chi);
        assert_eq!(config.servers[4].bind_address, "0.0.0.0:8084");
        assert_eq!(config.enabled_servers().count(), 5);
    }

    #[test]
    fn test_restrict_to() {
        let mut config = AppConfig::default();
        config.restrict_to(&[Flavor::Gin, Flavor::Chi]);
        let names: Vec<_> = config.enabled_servers().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["gin", "chi"]);

        let mut config = AppConfig::default();
        config.restrict_to(&[]);
        assert_eq!(config.enabled_servers().count(), 5);
    }
}
