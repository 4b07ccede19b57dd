//! Shutdown coordination for the monitor.
//!
//! The poll loop holds one receiver; the binary fires the sender when the
//! process is asked to stop.

use std::io;

use tokio::sync::broadcast;

use crate::lifecycle::signals::wait_for_signal;

/// Broadcast stop request for the poll loop.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to hand to `StatsMonitor::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscriber to stop. Returns false if nothing was listening.
    pub fn trigger(&self) -> bool {
        self.tx.send(()).is_ok()
    }

    /// Wait for SIGINT/SIGTERM, then trigger.
    pub async fn trigger_on_signal(&self) -> io::Result<()> {
        wait_for_signal().await?;
        if !self.trigger() {
            tracing::debug!("Shutdown requested but the monitor had already stopped");
        }
        Ok(())
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
