//! Engine listener callback interface.

use crate::message::EngineMessage;

/// Callbacks an agent subsystem can register with the
/// [`EngineEventHub`](crate::EngineEventHub).
///
/// All callbacks run synchronously on the thread the native binding
/// delivered the event on; a listener that blocks delays every event behind
/// it. Listeners needing real work must hand off to their own executor.
/// Every method has a no-op default so implementors only write the
/// callbacks they care about.
pub trait EngineListener: Send + Sync {
    /// The network bootstrap completed and the engine is ready.
    fn on_bootstrap_success(&self, home_id: u32) {
        let _ = home_id;
    }

    /// The network bootstrap failed.
    fn on_bootstrap_failure(&self) {}

    /// A network reset cycle has started.
    fn on_network_resetting(&self) {}

    /// The network reset cycle finished and the engine is ready again.
    fn on_network_resetting_finished(&self) {}

    /// The engine has shut down.
    fn on_network_shutdown(&self) {}

    /// An unsolicited notification arrived from a node.
    fn on_notification(&self, message: &EngineMessage) {
        let _ = message;
    }
}
