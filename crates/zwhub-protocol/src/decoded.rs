//! Decoded frame model.
//!
//! A [`DecodedFrame`] is the immutable result of one decode call: the frame
//! kind, the class/command header bytes, how many bytes the decoder consumed
//! from the source buffer, and the typed payload. Payloads own their bytes;
//! a decoded frame never borrows from the source buffer.

use serde::{Deserialize, Serialize};

use crate::classes::{
    BasicReport, BasicSet, BatteryReport, SensorBinaryReport, SensorMultilevelReport,
    SwitchBinaryReport, SwitchBinarySet, VersionReport,
};

/// Kind of protocol frame a decode produced.
///
/// Command frames are the only kind the mesh currently delivers to this
/// layer; the tag exists so future frame kinds extend the model rather than
/// replace it.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameType {
    /// An application-layer command frame.
    Command,
}

/// One fully- or partially-interpreted command frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedFrame {
    /// Kind of frame.
    pub frame_type: FrameType,
    /// Command class identifier (first header byte).
    pub command_class: u8,
    /// Command identifier within the class (second header byte).
    pub command: u8,
    /// Number of bytes consumed from the source buffer, header included.
    /// Always at least 2 and never more than the bytes that were available.
    pub byte_length: usize,
    /// Typed payload produced by the resolved decoder.
    pub payload: CommandPayload,
}

impl DecodedFrame {
    /// Create a command frame result.
    pub fn command(
        command_class: u8,
        command: u8,
        byte_length: usize,
        payload: CommandPayload,
    ) -> Self {
        DecodedFrame {
            frame_type: FrameType::Command,
            command_class,
            command,
            byte_length,
            payload,
        }
    }
}

/// Typed command payload.
///
/// One variant per command body the built-in decoders produce, plus
/// [`CommandPayload::Raw`] for anything the catalog does not recognize.
/// Adding a command class means adding a variant here and a row to the
/// registration table; the dispatch code never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandPayload {
    /// Basic Set.
    BasicSet(BasicSet),
    /// Basic Report.
    BasicReport(BasicReport),
    /// Switch Binary Set.
    SwitchBinarySet(SwitchBinarySet),
    /// Switch Binary Report.
    SwitchBinaryReport(SwitchBinaryReport),
    /// Sensor Binary Report.
    SensorBinaryReport(SensorBinaryReport),
    /// Sensor Multilevel Report.
    SensorMultilevelReport(SensorMultilevelReport),
    /// Battery Report.
    BatteryReport(BatteryReport),
    /// Version Report.
    VersionReport(VersionReport),
    /// A Get-style command with no body.
    Get,
    /// Opaque capture of a frame the catalog does not recognize.
    Raw(RawCommand),
}

/// Opaque capture of an unrecognized frame.
///
/// Carries the header bytes and the unparsed remainder so diagnostics and
/// logs can show exactly what the device sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommand {
    /// Command class identifier from the header.
    pub command_class: u8,
    /// Command identifier from the header.
    pub command: u8,
    /// The body bytes following the header, unmodified.
    pub body: Vec<u8>,
}
