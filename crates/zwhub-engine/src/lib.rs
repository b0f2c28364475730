//! Z-Wave engine lifecycle and event fan-out for the hub agent.
//!
//! The native radio controller binding reports lifecycle transitions
//! (bootstrap, network reset, shutdown) and unsolicited node notifications
//! into a single [`EngineEventHub`], which fans them out synchronously to
//! every registered [`EngineListener`]. The hub also owns the engine's
//! externally observable state machine:
//!
//! ```text
//! Uninitialized -> Bootstrapping -> Ready <-> Resetting
//!                        |            \         |
//!                        v             v        v
//!                      Failed        Shutdown (terminal)
//! ```
//!
//! Driving the controller goes the other way: agent code calls the
//! [`Engine`] trait (bootstrap, resets, healing, node queries, association
//! management), implemented by the external native binding. This crate
//! defines that contract; it does not implement it.

mod engine;
mod error;
mod hub;
mod listener;
mod message;
mod state;

pub use engine::*;
pub use error::*;
pub use hub::*;
pub use listener::*;
pub use message::*;
pub use state::*;
