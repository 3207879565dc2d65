//! Shutdown coordination for the proxy.
//!
//! The stop flag is level-triggered: a task that subscribes after the
//! trigger still observes it, so a listener spawned late never hangs.

use tokio::sync::watch;

/// Owner side of the stop flag. Clones share the same flag.
#[derive(Clone)]
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

/// Waiter side of the stop flag, handed to the server.
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Raise the flag. Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    /// Resolve once the flag is raised, immediately if it already is.
    pub async fn recv(&mut self) {
        // Err means every Shutdown handle is gone and no trigger can arrive.
        if self.rx.wait_for(|&stopped| stopped).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
