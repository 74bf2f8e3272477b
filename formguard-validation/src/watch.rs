//! Debounced per-field event watchers.

use crate::registry::FormValidator;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Handle to one spawned watcher, cancelled on registry clear.
pub(crate) struct WatcherHandle {
    field: String,
    handle: JoinHandle<()>,
}

impl WatcherHandle {
    pub(crate) fn cancel(&self) {
        trace!(field = %self.field, "cancelling watcher");
        self.handle.abort();
    }
}

/// Spawn the debounce loop for one watched field.
///
/// Bursts of events collapse into a single validation run once the quiet
/// window elapses; a new event restarts the window. Events for one field are
/// ordered; nothing is guaranteed across fields.
pub(crate) fn spawn(
    validator: FormValidator,
    field: String,
    mut events: UnboundedReceiver<()>,
    debounce: Duration,
) -> WatcherHandle {
    let name = field.clone();
    let handle = tokio::spawn(async move {
        while events.recv().await.is_some() {
            loop {
                tokio::select! {
                    event = events.recv() => {
                        if event.is_none() {
                            return;
                        }
                        // quiet window restarts
                    }
                    _ = tokio::time::sleep(debounce) => {
                        debug!(field = %name, "quiet window elapsed, revalidating");
                        validator.watch_field(&name);
                        break;
                    }
                }
            }
        }
    });

    WatcherHandle { field, handle }
}
