//! Trailing-edge value debouncing.
//!
//! Used to throttle expensive derived work, most visibly the progress
//! slider, where a drag produces a burst of values but only the settled one
//! should reach the update path. Semantics are strictly trailing-edge and
//! last-write-wins: every new value restarts the timer, nothing is emitted
//! early, and there is no maximum-wait cap.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant};

/// Handle to a debounced channel. Values pushed with [`send`](Self::send)
/// reach `sink` only after `delay` has elapsed with no newer value. Dropping
/// the handle cancels any pending emission.
#[derive(Debug)]
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn spawn<F>(delay: Duration, mut sink: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();
        tokio::spawn(async move {
            while let Some(first) = rx.recv().await {
                let mut latest = first;
                let sleep = time::sleep(delay);
                tokio::pin!(sleep);
                loop {
                    tokio::select! {
                        () = &mut sleep => {
                            sink(latest);
                            break;
                        }
                        next = rx.recv() => match next {
                            Some(value) => {
                                latest = value;
                                sleep.as_mut().reset(Instant::now() + delay);
                            }
                            // Handle dropped mid-window: the pending value
                            // is discarded, matching timer-clear semantics.
                            None => return,
                        },
                    }
                }
            }
        });
        Self { tx }
    }

    /// Push a value, restarting the quiet-period timer.
    pub fn send(&self, value: T) {
        let _ = self.tx.send(value);
    }
}
