//! Engine event hub.
//!
//! Single point through which the native controller binding reports
//! lifecycle transitions and unsolicited notifications. Events fan out
//! synchronously, on the delivering thread, to every listener registered at
//! the moment dispatch begins.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, RwLock};

use crate::listener::EngineListener;
use crate::message::EngineMessage;
use crate::state::EngineState;

/// Listener registry and lifecycle state machine for the radio engine.
///
/// The listener set supports concurrent mutation during dispatch: each
/// dispatch iterates a snapshot taken under a short read lock, so a
/// listener added on another thread (or from within a callback) simply
/// misses the in-flight event, and a removed listener stops receiving
/// events from the next dispatch on. No callback ever runs while a lock is
/// held, so callbacks may freely call back into the hub.
///
/// A panic in one listener's callback is caught and logged; delivery to the
/// remaining listeners continues.
pub struct EngineEventHub {
    listeners: RwLock<Vec<Arc<dyn EngineListener>>>,
    state: Mutex<EngineState>,
}

impl Default for EngineEventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineEventHub {
    /// Create a hub with no listeners, in the uninitialized state.
    pub fn new() -> Self {
        EngineEventHub {
            listeners: RwLock::new(Vec::new()),
            state: Mutex::new(EngineState::Uninitialized),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        *self.state.lock().unwrap()
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.read().unwrap().len()
    }

    /// Register a listener. Adding a listener that is already registered is
    /// a no-op; it will not receive duplicate deliveries.
    pub fn add_engine_listener(&self, listener: Arc<dyn EngineListener>) {
        let mut listeners = self.listeners.write().unwrap();
        if !listeners.iter().any(|l| same_listener(l, &listener)) {
            listeners.push(listener);
        }
    }

    /// Unregister a listener. Removing a listener that is not registered is
    /// a no-op.
    pub fn remove_engine_listener(&self, listener: &Arc<dyn EngineListener>) {
        let mut listeners = self.listeners.write().unwrap();
        listeners.retain(|l| !same_listener(l, listener));
    }

    /// Record that a bootstrap attempt has started.
    ///
    /// State-only: the binding reports the outcome later through
    /// [`notify_bootstrap_success`](Self::notify_bootstrap_success) or
    /// [`notify_bootstrap_failure`](Self::notify_bootstrap_failure).
    pub fn begin_bootstrap(&self) {
        self.transition(
            "bootstrap start",
            &[EngineState::Uninitialized, EngineState::Failed],
            EngineState::Bootstrapping,
        );
    }

    /// The binding finished bootstrapping the network.
    pub fn notify_bootstrap_success(&self, home_id: u32) {
        self.transition(
            "bootstrap success",
            &[
                EngineState::Uninitialized,
                EngineState::Bootstrapping,
                EngineState::Failed,
            ],
            EngineState::Ready,
        );
        self.dispatch("on_bootstrap_success", |l| l.on_bootstrap_success(home_id));
    }

    /// The binding failed to bootstrap the network.
    pub fn notify_bootstrap_failure(&self) {
        self.transition(
            "bootstrap failure",
            &[EngineState::Uninitialized, EngineState::Bootstrapping],
            EngineState::Failed,
        );
        self.dispatch("on_bootstrap_failure", |l| l.on_bootstrap_failure());
    }

    /// The binding started a network reset cycle.
    pub fn notify_network_resetting(&self) {
        self.transition(
            "network resetting",
            &[EngineState::Ready],
            EngineState::Resetting,
        );
        self.dispatch("on_network_resetting", |l| l.on_network_resetting());
    }

    /// The binding finished the network reset cycle.
    pub fn notify_network_resetting_finished(&self) {
        self.transition(
            "network reset finished",
            &[EngineState::Resetting],
            EngineState::Ready,
        );
        self.dispatch("on_network_resetting_finished", |l| {
            l.on_network_resetting_finished()
        });
    }

    /// The binding shut the engine down.
    pub fn notify_network_shutdown(&self) {
        self.transition(
            "network shutdown",
            &[
                EngineState::Uninitialized,
                EngineState::Bootstrapping,
                EngineState::Ready,
                EngineState::Failed,
                EngineState::Resetting,
            ],
            EngineState::Shutdown,
        );
        self.dispatch("on_network_shutdown", |l| l.on_network_shutdown());
    }

    /// Deliver an unsolicited node notification to every listener.
    pub fn notify(&self, message: EngineMessage) {
        log::trace!(
            "notification from home 0x{:08X} node {}: {}",
            message.home_id(),
            message.node_id(),
            hex::encode(message.payload())
        );
        self.dispatch("on_notification", |l| l.on_notification(&message));
    }

    /// Apply a binding-reported transition, or log and keep the current
    /// state if the report does not fit where the machine is.
    fn transition(&self, event: &'static str, valid_from: &[EngineState], to: EngineState) {
        let mut state = self.state.lock().unwrap();
        if valid_from.contains(&*state) {
            log::debug!("engine state {} -> {} on {}", state, to, event);
            *state = to;
        } else {
            log::warn!("engine ignoring {} while {}", event, state);
        }
    }

    /// Fan an event out to a snapshot of the listener set.
    fn dispatch<F>(&self, event: &'static str, callback: F)
    where
        F: Fn(&dyn EngineListener),
    {
        let snapshot: Vec<Arc<dyn EngineListener>> = self.listeners.read().unwrap().clone();
        for listener in snapshot {
            if let Err(panic) = catch_unwind(AssertUnwindSafe(|| callback(listener.as_ref()))) {
                log::error!(
                    "engine listener panicked in {}: {}",
                    event,
                    panic_message(&panic)
                );
            }
        }
    }
}

/// Identity comparison for registered listeners.
///
/// Compares the underlying data pointers rather than `Arc::ptr_eq`, which
/// also compares vtable pointers and can report false negatives for trait
/// objects.
fn same_listener(a: &Arc<dyn EngineListener>, b: &Arc<dyn EngineListener>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

fn panic_message(panic: &Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
