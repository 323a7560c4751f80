//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, body limit > 0)
//! - Detect conflicting servers (names, bind addresses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no server is enabled")]
    NoServers,

    #[error("server name {0:?} is used more than once")]
    DuplicateName(String),

    #[error("server {server}: invalid bind address {address:?}")]
    InvalidAddress { server: String, address: String },

    #[error("servers {first} and {second} both bind {address}")]
    AddressConflict {
        first: String,
        second: String,
        address: String,
    },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("limits.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("invalid metrics address {0:?}")]
    InvalidMetricsAddress(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.enabled_servers().next().is_none() {
        errors.push(ValidationError::NoServers);
    }

    let mut names = HashSet::new();
    for server in &config.servers {
        if !names.insert(server.name.as_str()) {
            errors.push(ValidationError::DuplicateName(server.name.clone()));
        }
    }

    // Port 0 asks the OS for a free port, so it never conflicts.
    let mut bound: Vec<(SocketAddr, &str)> = Vec::new();
    for server in config.enabled_servers() {
        let addr: SocketAddr = match server.bind_address.parse() {
            Ok(addr) => addr,
            Err(_) => {
                errors.push(ValidationError::InvalidAddress {
                    server: server.name.clone(),
                    address: server.bind_address.clone(),
                });
                continue;
            }
        };
        if addr.port() != 0 {
            if let Some((_, first)) = bound.iter().find(|(a, _)| *a == addr) {
                errors.push(ValidationError::AddressConflict {
                    first: first.to_string(),
                    second: server.name.clone(),
                    address: addr.to_string(),
                });
            }
        }
        bound.push((addr, &server.name));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
