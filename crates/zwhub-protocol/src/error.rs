//! Decode error types.

use thiserror::Error;

/// Errors that can occur while decoding a command frame.
///
/// Note that an unrecognized command class or command is *not* an error;
/// those frames resolve to the raw fallback. Errors here are either caller
/// mistakes (truncated header) or a registered decoder rejecting the body
/// bytes of its own class.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Frame is too short to hold the two-byte class/command header.
    #[error("frame too short: expected at least {expected} bytes, got {actual}")]
    FrameTooShort {
        /// Expected minimum length past the offset.
        expected: usize,
        /// Bytes actually available past the offset.
        actual: usize,
    },

    /// A registered decoder needed more body bytes than the frame carries.
    #[error(
        "truncated body for class 0x{command_class:02X} command 0x{command:02X}: \
         need {needed} bytes, have {available}"
    )]
    TruncatedPayload {
        /// Command class of the offending frame.
        command_class: u8,
        /// Command id of the offending frame.
        command: u8,
        /// Body bytes the decoder required.
        needed: usize,
        /// Body bytes actually present.
        available: usize,
    },

    /// The body bytes are inconsistent with the command's own format rules.
    #[error("invalid frame data: {0}")]
    InvalidData(String),
}

impl DecodeError {
    /// Create an invalid-data error.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        DecodeError::InvalidData(message.into())
    }
}
