//! Broadcast-once shutdown signal.
//!
//! A [`Closer`] is fired at most once and any number of [`CloseSignal`]
//! watchers observe it, before or after the fact. Long-running tasks hold a
//! signal and select on [`CloseSignal::closed`] next to their work channel.

use tokio::sync::watch;

/// The firing side of a shutdown signal.
#[derive(Debug, Clone)]
pub struct Closer {
    tx: watch::Sender<bool>,
}

impl Closer {
    /// Create an un-fired closer.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Fire the signal. Returns `false` if it had already been fired.
    pub fn close(&self) -> bool {
        !self.tx.send_replace(true)
    }

    /// Whether the signal has fired.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        *self.tx.borrow()
    }

    /// A new watcher on this signal.
    #[must_use]
    pub fn signal(&self) -> CloseSignal {
        CloseSignal {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for Closer {
    fn default() -> Self {
        Self::new()
    }
}

/// The watching side of a shutdown signal.
///
/// Permanently resolved once the paired [`Closer`] fires; a dropped closer
/// counts as fired so orphaned watchers never hang.
#[derive(Debug, Clone)]
pub struct CloseSignal {
    rx: watch::Receiver<bool>,
}

impl CloseSignal {
    /// Wait until the signal fires. Returns immediately if it already has.
    pub async fn closed(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Whether the signal has fired.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        *self.rx.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_close_wakes_watcher() {
        let closer = Closer::new();
        let mut signal = closer.signal();

        let waiter = tokio::spawn(async move {
            signal.closed().await;
        });

        assert!(closer.close());
        timeout(Duration::from_millis(100), waiter)
            .await
            .expect("watcher should wake")
            .expect("watcher task");
    }

    #[tokio::test]
    async fn test_late_watcher_sees_fired_signal() {
        let closer = Closer::new();
        closer.close();

        let mut signal = closer.signal();
        timeout(Duration::from_millis(100), signal.closed())
            .await
            .expect("already-fired signal resolves immediately");
        assert!(signal.is_closed());
    }

    #[tokio::test]
    async fn test_double_close_reports_already_fired() {
        let closer = Closer::new();
        assert!(closer.close());
        assert!(!closer.close());
        assert!(closer.is_closed());
    }

    #[tokio::test]
    async fn test_dropped_closer_resolves_watchers() {
        let closer = Closer::new();
        let mut signal = closer.signal();
        drop(closer);

        timeout(Duration::from_millis(100), signal.closed())
            .await
            .expect("orphaned watcher resolves");
    }
}
