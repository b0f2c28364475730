//! Engine error types.

use thiserror::Error;

use crate::state::EngineState;

/// Errors surfaced by [`Engine`](crate::Engine) calls into the native
/// controller binding.
///
/// The core propagates these untouched; retry and backoff policy, if any,
/// belongs to the calling driver logic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The native binding rejected or failed the call.
    #[error("native {op} call failed with code {code}")]
    Native {
        /// Operation that failed.
        op: &'static str,
        /// Status code reported by the binding.
        code: i32,
    },

    /// A command was issued while the engine was not ready for it.
    #[error("engine not ready: state is {state}")]
    NotReady {
        /// State the engine was in when the call arrived.
        state: EngineState,
    },

    /// The addressed node is not part of the home network.
    #[error("node {node_id} not found in home network 0x{home_id:08X}")]
    NodeNotFound {
        /// Home network the call was scoped to.
        home_id: u32,
        /// Node that could not be resolved.
        node_id: u8,
    },

    /// The native binding did not answer within its own deadline.
    #[error("native {op} call timed out")]
    Timeout {
        /// Operation that timed out.
        op: &'static str,
    },
}
