//! Shutdown coordination for the servers.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Every server waits on [`Shutdown::signalled`]. A latched flag backs the
/// broadcast channel, so a waiter created after `trigger` still resolves.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
    triggered: Arc<AtomicBool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            triggered: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Future that resolves once shutdown has been triggered.
    pub fn signalled(&self) -> impl Future<Output = ()> + Send + 'static {
        // Subscribe before reading the flag: `trigger` sets the flag first.
        let mut rx = self.tx.subscribe();
        let triggered = Arc::clone(&self.triggered);
        async move {
            if triggered.load(Ordering::SeqCst) {
                return;
            }
            let _ = rx.recv().await;
        }
    }

    /// Trigger the shutdown signal. Later calls are no-ops.
    pub fn trigger(&self) {
        if !self.triggered.swap(true, Ordering::SeqCst) {
            tracing::debug!(waiters = self.tx.receiver_count(), "Shutdown triggered");
            let _ = self.tx.send(());
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    /// Number of waiters that have not resolved yet.
    pub fn waiter_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_reaches_every_waiter() {
        let shutdown = Shutdown::new();
        let a = tokio::spawn(shutdown.signalled());
        let b = tokio::spawn(shutdown.signalled());
        assert_eq!(shutdown.waiter_count(), 2);

        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), a).await.unwrap().unwrap();
        tokio::time::timeout(Duration::from_secs(1), b).await.unwrap().unwrap();
        assert_eq!(shutdown.waiter_count(), 0);
    }

    #[tokio::test]
    async fn test_late_waiter_resolves() {
        let shutdown = Shutdown::new();
        shutdown.trigger();
        assert!(shutdown.is_triggered());

        tokio::time::timeout(Duration::from_secs(1), shutdown.signalled())
            .await
            .unwrap();
    }

    #[test]
    fn test_trigger_is_idempotent() {
        let shutdown = Shutdown::default();
        shutdown.trigger();
        shutdown.trigger();
        assert!(shutdown.is_triggered());
        assert_eq!(shutdown.waiter_count(), 0);
    }
}
