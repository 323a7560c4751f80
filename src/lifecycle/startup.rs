//! Startup orchestration.
//!
//! # Responsibilities
//! - Build every enabled server's route table
//! - Bind every listener
//! - Spawn one task per server, all sharing one shutdown signal
//! - Drain servers on shutdown, aborting stragglers after the grace period
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, nothing has been spawned yet
//! - Listeners start last (traffic only when every server is ready)

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::Instant;

use crate::catalog::Flavor;
use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::routing::RouteError;

/// Errors raised while starting or stopping servers.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("server {server}: invalid route table: {}", join_route_errors(.errors))]
    Routes {
        server: String,
        errors: Vec<RouteError>,
    },

    #[error("server {server}: failed to bind {address}: {source}")]
    Bind {
        server: String,
        address: String,
        source: std::io::Error,
    },

    #[error("server {server} failed: {source}")]
    Serve {
        server: String,
        source: std::io::Error,
    },

    #[error("server {server} task ended abnormally: {source}")]
    Task { server: String, source: JoinError },
}

fn join_route_errors(errors: &[RouteError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A spawned server task.
#[derive(Debug)]
pub struct RunningServer {
    pub name: String,
    pub flavor: Flavor,
    pub local_addr: SocketAddr,
    handle: JoinHandle<Result<(), std::io::Error>>,
}

/// Every server started by [`launch`].
#[derive(Debug)]
pub struct RunningServers {
    servers: Vec<RunningServer>,
    grace: Duration,
}

impl RunningServers {
    pub fn servers(&self) -> &[RunningServer] {
        &self.servers
    }

    /// Address of the first running server with this flavor.
    pub fn addr_of(&self, flavor: Flavor) -> Option<SocketAddr> {
        self.servers
            .iter()
            .find(|s| s.flavor == flavor)
            .map(|s| s.local_addr)
    }

    /// Broadcast shutdown and wait for every server to drain.
    ///
    /// Servers still running when the grace period ends are aborted.
    /// Returns the first failure; the rest are logged.
    pub async fn shutdown(self, shutdown: &Shutdown) -> Result<(), LaunchError> {
        shutdown.trigger();
        let deadline = Instant::now() + self.grace;
        let mut first_error = None;

        for mut server in self.servers {
            let outcome = match tokio::time::timeout_at(deadline, &mut server.handle).await {
                Ok(Ok(Ok(()))) => Ok(()),
                Ok(Ok(Err(source))) => Err(LaunchError::Serve {
                    server: server.name.clone(),
                    source,
                }),
                Ok(Err(source)) => Err(LaunchError::Task {
                    server: server.name.clone(),
                    source,
                }),
                Err(_) => {
                    tracing::warn!(server = %server.name, "Grace period elapsed, aborting server");
                    server.handle.abort();
                    Ok(())
                }
            };

            if let Err(e) = outcome {
                tracing::error!(error = %e, "Server did not stop cleanly");
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Build, bind and spawn every enabled server in `config`.
pub async fn launch(config: &AppConfig, shutdown: &Shutdown) -> Result<RunningServers, LaunchError> {
    let mut prepared = Vec::new();
    for server_config in config.enabled_servers() {
        let server = HttpServer::new(server_config, &config.limits, &config.timeouts).map_err(
            |errors| LaunchError::Routes {
                server: server_config.name.clone(),
                errors,
            },
        )?;
        prepared.push((server_config, server));
    }

    let mut bound = Vec::with_capacity(prepared.len());
    for (server_config, server) in prepared {
        let bind_error = |source| LaunchError::Bind {
            server: server_config.name.clone(),
            address: server_config.bind_address.clone(),
            source,
        };
        let listener = TcpListener::bind(server_config.bind_address.as_str())
            .await
            .map_err(bind_error)?;
        let local_addr = listener.local_addr().map_err(bind_error)?;
        bound.push((server_config, server, listener, local_addr));
    }

    let servers = bound
        .into_iter()
        .map(|(server_config, server, listener, local_addr)| {
            tracing::info!(
                server = %server_config.name,
                flavor = %server_config.flavor,
                url = %format!("http://{local_addr}{}", server_config.flavor.prefix()),
                "Server ready"
            );
            let handle = tokio::spawn(server.run(listener, shutdown.signalled()));
            RunningServer {
                name: server_config.name.clone(),
                flavor: server_config.flavor,
                local_addr,
                handle,
            }
        })
        .collect();

    Ok(RunningServers {
        servers,
        grace: Duration::from_secs(config.timeouts.shutdown_grace_secs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_config() -> AppConfig {
        let mut config = AppConfig::default();
        for server in &mut config.servers {
            server.bind_address = "127.0.0.1:0".into();
        }
        config
    }

    #[tokio::test]
    async fn test_launch_and_shutdown() {
        let shutdown = Shutdown::new();
        let running = launch(&local_config(), &shutdown).await.unwrap();

        assert_eq!(running.servers().len(), 5);
        for flavor in Flavor::ALL {
            let addr = running.addr_of(flavor).unwrap();
            assert_ne!(addr.port(), 0);
        }

        running.shutdown(&shutdown).await.unwrap();
    }

    #[tokio::test]
    async fn test_only_enabled_servers_start() {
        let mut config = local_config();
        config.restrict_to(&[Flavor::Echo]);

        let shutdown = Shutdown::new();
        let running = launch(&config, &shutdown).await.unwrap();
        assert_eq!(running.servers().len(), 1);
        assert!(running.addr_of(Flavor::Echo).is_some());
        assert!(running.addr_of(Flavor::Gin).is_none());

        running.shutdown(&shutdown).await.unwrap();
    }

    #[tokio::test]
    async fn test_bind_conflict_fails_fast() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();

        let mut config = local_config();
        config.servers[2].bind_address = addr.to_string();

        let shutdown = Shutdown::new();
        let err = launch(&config, &shutdown).await.unwrap_err();
        match err {
            LaunchError::Bind { server, .. } => assert_eq!(server, "echo"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(shutdown.waiter_count(), 0);
    }
}
