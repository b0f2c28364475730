//! Z-Wave command frame decoding for the hub agent.
//!
//! This crate provides the command-class registry and frame decoder used by
//! the hub agent's Z-Wave device-protocol layer. Command frames arriving from
//! the mesh network are byte arrays whose first two bytes identify the
//! command class and the command within that class:
//!
//! ```text
//! +-------------+---------+-------------------+
//! | class_id    | cmd_id  | body[0..n]        |
//! +-------------+---------+-------------------+
//! ```
//!
//! Decoding is a table dispatch: a [`CommandCatalog`] maps `(class_id,
//! cmd_id)` to a registered decoder function, and [`decode_frame`] invokes it
//! to produce a typed [`DecodedFrame`]. Frames the catalog does not recognize
//! are captured opaquely via the raw fallback rather than rejected, since
//! unknown device traffic is routine on a live mesh network.
//!
//! # Example
//!
//! ```rust
//! use zwhub_protocol::{decode_frame, CommandCatalog, CommandPayload};
//!
//! let catalog = CommandCatalog::with_builtin_classes();
//!
//! // Switch Binary Report, value 0xFF (on)
//! let frame = decode_frame(&catalog, &[0x25, 0x03, 0xFF], 0).unwrap();
//! match frame.payload {
//!     CommandPayload::SwitchBinaryReport(report) => assert_eq!(report.value, 255),
//!     _ => unreachable!(),
//! }
//! ```

mod catalog;
mod classes;
mod constants;
mod decoded;
mod decoder;
mod error;

pub use catalog::*;
pub use classes::*;
pub use constants::*;
pub use decoded::*;
pub use decoder::*;
pub use error::*;
