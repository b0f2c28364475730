//! Engine notification message.

use serde::{Deserialize, Serialize};

/// One unsolicited notification from the radio network: which home network
/// and node it came from, plus the raw payload bytes.
///
/// The payload is copied at construction, so the binding's delivery buffer
/// can be reused immediately, and the message itself is immutable and
/// freely shareable across threads. Listeners borrow the payload; nothing
/// hands out a mutable view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineMessage {
    home_id: u32,
    node_id: u8,
    payload: Vec<u8>,
}

impl EngineMessage {
    /// Create a message, copying the payload out of the caller's buffer.
    pub fn new(home_id: u32, node_id: u8, payload: &[u8]) -> Self {
        EngineMessage {
            home_id,
            node_id,
            payload: payload.to_vec(),
        }
    }

    /// Home network the notification originated from.
    pub fn home_id(&self) -> u32 {
        self.home_id
    }

    /// Node the notification originated from.
    pub fn node_id(&self) -> u8 {
        self.node_id
    }

    /// The notification payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}
