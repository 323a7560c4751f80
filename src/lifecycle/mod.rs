//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validated config → Build route tables → Bind listeners → Spawn servers
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Broadcast → Servers stop accepting → Drain → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: every table and listener ready before any server runs
//! - Fail fast: one bad server aborts the whole launch
//! - Shutdown has a grace period: stragglers are aborted after the deadline

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{launch, LaunchError, RunningServer, RunningServers};
