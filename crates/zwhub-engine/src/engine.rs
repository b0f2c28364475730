//! Engine command surface.
//!
//! The contract the agent uses to drive the native radio controller
//! binding. Everything here is a blocking call into native code; any
//! timeout policy lives in the binding, not in this crate.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Basic/generic/specific device type bytes reported by a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeType {
    /// Basic device class (controller, static controller, slave...).
    pub basic: u8,
    /// Generic device class (binary switch, sensor...).
    pub generic: u8,
    /// Specific device class within the generic class.
    pub specific: u8,
}

/// Library/protocol/application versions reported by a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeVersion {
    /// Z-Wave library type.
    pub library_type: u8,
    /// Protocol version.
    pub protocol_version: u8,
    /// Protocol sub-version.
    pub protocol_sub_version: u8,
    /// Application version.
    pub application_version: u8,
    /// Application sub-version.
    pub application_sub_version: u8,
}

/// Command surface of the native radio controller binding.
///
/// Implemented outside this crate by the native binding; the agent and its
/// drivers consume it. Node-scoped calls are keyed by `(home_id, node_id)`,
/// association calls additionally by a group index. All calls block until
/// the binding answers and surface failures as [`EngineError`] without any
/// retrying here.
pub trait Engine: Send + Sync {
    /// Start the radio controller and bootstrap the network.
    fn bootstrap(&self) -> Result<(), EngineError>;

    /// Shut the radio controller down.
    fn shutdown(&self) -> Result<(), EngineError>;

    /// Factory-reset the controller, abandoning the home network.
    fn hard_reset(&self, home_id: u32) -> Result<(), EngineError>;

    /// Restart the controller without losing network state.
    fn soft_reset(&self, home_id: u32) -> Result<(), EngineError>;

    /// Re-discover routes for the whole network.
    fn heal_network(&self, home_id: u32) -> Result<(), EngineError>;

    /// Re-discover routes for a single node.
    fn heal_network_node(&self, home_id: u32, node_id: u8) -> Result<(), EngineError>;

    /// Device type bytes of a node.
    fn node_type(&self, home_id: u32, node_id: u8) -> Result<NodeType, EngineError>;

    /// Security scheme flags of a node.
    fn security_flags(&self, home_id: u32, node_id: u8) -> Result<u8, EngineError>;

    /// Manufacturer identifier of a node.
    fn manufacturer_id(&self, home_id: u32, node_id: u8) -> Result<u16, EngineError>;

    /// Product type identifier of a node.
    fn product_type(&self, home_id: u32, node_id: u8) -> Result<u16, EngineError>;

    /// Product identifier of a node.
    fn product_id(&self, home_id: u32, node_id: u8) -> Result<u16, EngineError>;

    /// Radio baud rate a node communicates at.
    fn baud_rate(&self, home_id: u32, node_id: u8) -> Result<u32, EngineError>;

    /// Library/protocol/application versions of a node.
    fn node_version(&self, home_id: u32, node_id: u8) -> Result<NodeVersion, EngineError>;

    /// Node ids currently associated in the given group.
    fn associations(&self, home_id: u32, node_id: u8, group: u8) -> Result<Vec<u8>, EngineError>;

    /// Associate `target` into the given group on a node.
    fn add_association(
        &self,
        home_id: u32,
        node_id: u8,
        group: u8,
        target: u8,
    ) -> Result<(), EngineError>;

    /// Remove `target` from the given group on a node.
    fn remove_association(
        &self,
        home_id: u32,
        node_id: u8,
        group: u8,
        target: u8,
    ) -> Result<(), EngineError>;

    /// Maximum number of associations the given group supports.
    fn max_associations(&self, home_id: u32, node_id: u8, group: u8) -> Result<u8, EngineError>;

    /// Human-readable label of the given association group.
    fn group_label(&self, home_id: u32, node_id: u8, group: u8) -> Result<String, EngineError>;
}
