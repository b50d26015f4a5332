//! Online/offline awareness.
//!
//! Consulted by the presentation shell (offline banner, optimistic-update
//! messaging), never by the progress engine: updates flow through the same
//! callback either way, and the store behind it decides about queueing.

use tokio::sync::watch;

/// Read side of the connectivity flag.
pub trait ConnectivitySignal {
    fn is_online(&self) -> bool;
}

/// Process-local connectivity flag over a watch channel, so shell components
/// can both poll it and await changes.
#[derive(Debug)]
pub struct ConnectivityMonitor {
    tx: watch::Sender<bool>,
}

impl ConnectivityMonitor {
    pub fn new(online: bool) -> Self {
        let (tx, _rx) = watch::channel(online);
        Self { tx }
    }

    pub fn set_online(&self, online: bool) {
        self.tx.send_replace(online);
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConnectivitySignal for ConnectivityMonitor {
    fn is_online(&self) -> bool {
        *self.tx.borrow()
    }
}
