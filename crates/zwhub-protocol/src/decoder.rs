//! Frame dispatch.
//!
//! [`decode_frame`] is the single entry point for turning received command
//! bytes into a [`DecodedFrame`]. It is stateless and reentrant: the catalog
//! is read-only, concurrent calls on different buffers never interact, and
//! any thread (typically the transport reader) may call it.
//!
//! The only hard precondition is that the buffer holds the two-byte
//! class/command header past the offset; a frame the catalog does not
//! recognize is not an error and resolves to [`decode_raw`].

use crate::catalog::CommandCatalog;
use crate::constants::MIN_FRAME_SIZE;
use crate::decoded::{CommandPayload, DecodedFrame, RawCommand};
use crate::error::DecodeError;

/// Decode one command frame starting at `offset`.
///
/// Reads the class and command header bytes, resolves the registered
/// decoder through the catalog, and invokes it. Unregistered `(class,
/// command)` pairs fall back to [`decode_raw`]; that path cannot fail, so
/// the only errors out of this function are a truncated header or a
/// registered decoder rejecting the body of its own class.
pub fn decode_frame(
    catalog: &CommandCatalog,
    bytes: &[u8],
    offset: usize,
) -> Result<DecodedFrame, DecodeError> {
    let available = bytes.len().saturating_sub(offset);
    if available < MIN_FRAME_SIZE {
        return Err(DecodeError::FrameTooShort {
            expected: MIN_FRAME_SIZE,
            actual: available,
        });
    }

    let class_id = bytes[offset];
    let command_id = bytes[offset + 1];

    match catalog.lookup_command(class_id, command_id) {
        Some(descriptor) => (descriptor.decoder)(bytes, offset),
        None => {
            log::trace!(
                "no decoder for class 0x{:02X} command 0x{:02X}, capturing raw: {}",
                class_id,
                command_id,
                hex::encode(&bytes[offset..])
            );
            Ok(decode_raw(bytes, offset))
        }
    }
}

/// Capture a frame opaquely, without interpreting its body.
///
/// The universal fallback for unrecognized traffic: the header bytes are
/// preserved for diagnostics and the remainder is copied verbatim. Pure
/// function of its inputs; consumes the entire remaining span.
///
/// The caller must have validated the two-byte header (as [`decode_frame`]
/// does before dispatching here).
pub fn decode_raw(bytes: &[u8], offset: usize) -> DecodedFrame {
    let class_id = bytes[offset];
    let command_id = bytes[offset + 1];
    let body = bytes[offset + 2..].to_vec();
    let byte_length = 2 + body.len();

    DecodedFrame::command(
        class_id,
        command_id,
        byte_length,
        CommandPayload::Raw(RawCommand {
            command_class: class_id,
            command: command_id,
            body,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::SwitchBinaryReport;
    use crate::constants::*;

    #[test]
    fn test_registered_pair_end_to_end() {
        // Switch Binary Report with one trailing value byte.
        let catalog = CommandCatalog::with_builtin_classes();
        let frame = decode_frame(&catalog, &[0x25, 0x03, 0xFF], 0).unwrap();

        assert_eq!(frame.command_class, 0x25);
        assert_eq!(frame.command, 0x03);
        assert_eq!(frame.byte_length, 3);
        assert_eq!(
            frame.payload,
            CommandPayload::SwitchBinaryReport(SwitchBinaryReport { value: 255 })
        );
    }

    #[test]
    fn test_unknown_class_falls_back_to_raw() {
        let catalog = CommandCatalog::with_builtin_classes();
        let frame = decode_frame(&catalog, &[0x99, 0x01], 0).unwrap();

        assert_eq!(frame.command_class, 0x99);
        assert_eq!(frame.command, 0x01);
        assert_eq!(frame.byte_length, 2);
        assert_eq!(
            frame.payload,
            CommandPayload::Raw(RawCommand {
                command_class: 0x99,
                command: 0x01,
                body: vec![],
            })
        );
    }

    #[test]
    fn test_known_class_unknown_command_falls_back_to_raw() {
        let catalog = CommandCatalog::with_builtin_classes();
        // Switch Binary is registered but 0x7F is not one of its commands.
        let frame = decode_frame(&catalog, &[CC_SWITCH_BINARY, 0x7F, 0x01, 0x02], 0).unwrap();

        assert!(matches!(frame.payload, CommandPayload::Raw(_)));
        assert_eq!(frame.byte_length, 4);
    }

    #[test]
    fn test_raw_capture_preserves_body() {
        let frame = decode_raw(&[0x98, 0x81, 0xDE, 0xAD, 0xBE, 0xEF], 0);
        assert_eq!(frame.byte_length, 6);
        if let CommandPayload::Raw(raw) = frame.payload {
            assert_eq!(raw.body, vec![0xDE, 0xAD, 0xBE, 0xEF]);
        } else {
            panic!("Expected Raw payload");
        }
    }

    #[test]
    fn test_truncated_header_is_loud() {
        let catalog = CommandCatalog::with_builtin_classes();

        let err = decode_frame(&catalog, &[0x25], 0).unwrap_err();
        assert_eq!(
            err,
            DecodeError::FrameTooShort {
                expected: 2,
                actual: 1
            }
        );

        // Offset past the end of the buffer.
        let err = decode_frame(&catalog, &[0x25, 0x03], 5).unwrap_err();
        assert_eq!(
            err,
            DecodeError::FrameTooShort {
                expected: 2,
                actual: 0
            }
        );
    }

    #[test]
    fn test_per_decoder_failure_is_scoped_to_the_frame() {
        let catalog = CommandCatalog::with_builtin_classes();

        // Report with the value byte missing: the registered decoder fails...
        let err = decode_frame(&catalog, &[CC_BATTERY, BATTERY_REPORT], 0).unwrap_err();
        assert!(matches!(err, DecodeError::TruncatedPayload { .. }));

        // ...and the catalog keeps decoding other frames.
        let frame = decode_frame(&catalog, &[CC_BATTERY, BATTERY_REPORT, 0x55], 0).unwrap();
        assert_eq!(frame.byte_length, 3);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let catalog = CommandCatalog::with_builtin_classes();
        let bytes = [0x31, 0x05, 0x01, 0x22, 0x00, 0xE6];

        let first = decode_frame(&catalog, &bytes, 0).unwrap();
        let second = decode_frame(&catalog, &bytes, 0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_decode_honors_offset() {
        let catalog = CommandCatalog::with_builtin_classes();
        let bytes = [0x00, 0x00, 0x00, CC_BASIC, BASIC_REPORT, 0x63];

        let frame = decode_frame(&catalog, &bytes, 3).unwrap();
        assert_eq!(frame.command_class, CC_BASIC);
        assert_eq!(frame.command, BASIC_REPORT);
        assert_eq!(frame.byte_length, 3);
    }

    #[test]
    fn test_high_bit_ids_not_sign_extended() {
        // 0x80 (Battery) and 0xFF must compare as unsigned values.
        let catalog = CommandCatalog::with_builtin_classes();
        let frame = decode_frame(&catalog, &[0x80, 0x03, 0x64], 0).unwrap();
        assert_eq!(frame.command_class, 0x80);

        let frame = decode_frame(&catalog, &[0xFF, 0xFF], 0).unwrap();
        assert_eq!(frame.command_class, 0xFF);
        assert_eq!(frame.command, 0xFF);
        assert!(matches!(frame.payload, CommandPayload::Raw(_)));
    }
}
