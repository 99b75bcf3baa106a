//! In-process event emitter
//!
//! Ledger client implementations embed an `EventEmitter` to provide their
//! `EventSource` capability: the SDK's event hub feeds `emit`, callers
//! subscribe through the gateway.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde_json::Value;

use crate::traits::{EventSource, Listener, ListenerId};

/// Emitted for every block committed on the channel
pub const BLOCK_EVENT: &str = "block";

struct Registration {
    id: ListenerId,
    listener: Listener,
    once: bool,
}

/// Listener registry keyed by event name
#[derive(Default)]
pub struct EventEmitter {
    listeners: RwLock<HashMap<String, Vec<Registration>>>,
    next_id: AtomicU64,
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listeners = self.listeners.read();
        let counts: HashMap<&str, usize> = listeners
            .iter()
            .map(|(event, regs)| (event.as_str(), regs.len()))
            .collect();
        f.debug_struct("EventEmitter").field("listeners", &counts).finish()
    }
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&self, event: &str, listener: Listener, once: bool, prepend: bool) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let registration = Registration { id, listener, once };

        let mut listeners = self.listeners.write();
        let entries = listeners.entry(event.to_string()).or_default();
        if prepend {
            entries.insert(0, registration);
        } else {
            entries.push(registration);
        }
        id
    }

    /// Dispatch `payload` to every listener of `event`, in registration order.
    ///
    /// Returns the number of listeners called. Listeners run after the
    /// registry lock is released, so they may subscribe or unsubscribe.
    pub fn emit(&self, event: &str, payload: &Value) -> usize {
        let to_call: Vec<Listener> = {
            let mut listeners = self.listeners.write();
            let Some(entries) = listeners.get_mut(event) else {
                return 0;
            };
            let snapshot = entries.iter().map(|r| r.listener.clone()).collect();
            entries.retain(|r| !r.once);
            if entries.is_empty() {
                listeners.remove(event);
            }
            snapshot
        };

        tracing::trace!(event, listeners = to_call.len(), "dispatching ledger event");

        for listener in &to_call {
            listener(payload);
        }
        to_call.len()
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.read().get(event).map_or(0, Vec::len)
    }

    /// Names of events that currently have listeners
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.listeners.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl EventSource for EventEmitter {
    fn on(&self, event: &str, listener: Listener) -> ListenerId {
        self.register(event, listener, false, false)
    }

    fn once(&self, event: &str, listener: Listener) -> ListenerId {
        self.register(event, listener, true, false)
    }

    fn prepend_listener(&self, event: &str, listener: Listener) -> ListenerId {
        self.register(event, listener, false, true)
    }

    fn remove_listener(&self, event: &str, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write();
        let Some(entries) = listeners.get_mut(event) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|r| r.id != id);
        let removed = entries.len() != before;
        if entries.is_empty() {
            listeners.remove(event);
        }
        removed
    }
}
