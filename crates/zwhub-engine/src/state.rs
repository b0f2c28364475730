//! Engine lifecycle state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Externally observable lifecycle state of the radio engine.
///
/// Transitions are driven exclusively by the native binding's calls into
/// the [`EngineEventHub`](crate::EngineEventHub); nothing in this crate
/// invents a transition on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// No bootstrap attempt has been made yet.
    Uninitialized,
    /// A bootstrap attempt is in flight.
    Bootstrapping,
    /// The network is up and accepting commands.
    Ready,
    /// The last bootstrap attempt failed; terminal until a new attempt.
    Failed,
    /// A network reset cycle is in progress.
    Resetting,
    /// The engine has shut down. Terminal.
    Shutdown,
}

impl EngineState {
    /// Whether no further transitions can occur from this state.
    pub fn is_terminal(self) -> bool {
        self == EngineState::Shutdown
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineState::Uninitialized => "uninitialized",
            EngineState::Bootstrapping => "bootstrapping",
            EngineState::Ready => "ready",
            EngineState::Failed => "failed",
            EngineState::Resetting => "resetting",
            EngineState::Shutdown => "shutdown",
        };
        write!(f, "{}", name)
    }
}
