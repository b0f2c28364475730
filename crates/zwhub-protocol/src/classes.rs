//! Built-in command-class decoders.
//!
//! The decoders the hub agent carries itself, one function per command.
//! Each is a plain [`Decoder`](crate::catalog::Decoder): given the frame
//! bytes and the offset of the class byte, it validates its own body length,
//! produces the typed payload, and reports how many bytes it consumed. The
//! dispatch core in [`decoder`](crate::decoder) has no knowledge of any of
//! these; they reach it only through the registration tables at the bottom
//! of this file.

use serde::{Deserialize, Serialize};

use crate::catalog::{CommandClassDescriptor, CommandSpec};
use crate::constants::*;
use crate::decoded::{CommandPayload, DecodedFrame};
use crate::error::DecodeError;

// ============================================================================
// Command Bodies
// ============================================================================

/// Basic Set: device-agnostic target value (0x00 off, 0xFF on, 1-99 level).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicSet {
    /// Target value.
    pub value: u8,
}

/// Basic Report: device-agnostic current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicReport {
    /// Current value.
    pub value: u8,
}

/// Switch Binary Set: 0x00 off, 0xFF on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchBinarySet {
    /// Target state.
    pub value: u8,
}

/// Switch Binary Report: current switch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchBinaryReport {
    /// Current state (0x00 off, 0xFF on).
    pub value: u8,
}

/// Sensor Binary Report: triggered / idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorBinaryReport {
    /// Sensor state (0x00 idle, 0xFF triggered).
    pub value: u8,
}

/// Sensor Multilevel Report: a scaled sensor reading.
///
/// The wire format packs precision, scale, and value size into one byte
/// followed by a big-endian signed value of that size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorMultilevelReport {
    /// Sensor type (temperature, humidity, luminance...).
    pub sensor_type: u8,
    /// Number of decimal places in `value`.
    pub precision: u8,
    /// Unit scale (sensor-type specific, e.g. 0 = Celsius, 1 = Fahrenheit).
    pub scale: u8,
    /// Sign-extended reading; divide by 10^precision for the actual value.
    pub value: i32,
}

/// Battery Report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryReport {
    /// Battery level 0-100, or 0xFF for a low-battery warning.
    pub level: u8,
}

/// Version Report: library, protocol, and application versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionReport {
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

// ============================================================================
// Decoder Functions
// ============================================================================

/// Slice out the body bytes following the two-byte header, checking that at
/// least `needed` of them are present.
fn body<'a>(bytes: &'a [u8], offset: usize, needed: usize) -> Result<&'a [u8], DecodeError> {
    let body = &bytes[offset + 2..];
    if body.len() < needed {
        return Err(DecodeError::TruncatedPayload {
            command_class: bytes[offset],
            command: bytes[offset + 1],
            needed,
            available: body.len(),
        });
    }
    Ok(body)
}

fn one_byte_value(
    bytes: &[u8],
    offset: usize,
    wrap: fn(u8) -> CommandPayload,
) -> Result<DecodedFrame, DecodeError> {
    let body = body(bytes, offset, 1)?;
    Ok(DecodedFrame::command(
        bytes[offset],
        bytes[offset + 1],
        3,
        wrap(body[0]),
    ))
}

/// Decoder for Get-style commands carrying no body.
fn decode_get(bytes: &[u8], offset: usize) -> Result<DecodedFrame, DecodeError> {
    Ok(DecodedFrame::command(
        bytes[offset],
        bytes[offset + 1],
        2,
        CommandPayload::Get,
    ))
}

fn decode_basic_set(bytes: &[u8], offset: usize) -> Result<DecodedFrame, DecodeError> {
    one_byte_value(bytes, offset, |v| {
        CommandPayload::BasicSet(BasicSet { value: v })
    })
}

fn decode_basic_report(bytes: &[u8], offset: usize) -> Result<DecodedFrame, DecodeError> {
    one_byte_value(bytes, offset, |v| {
        CommandPayload::BasicReport(BasicReport { value: v })
    })
}

fn decode_switch_binary_set(bytes: &[u8], offset: usize) -> Result<DecodedFrame, DecodeError> {
    one_byte_value(bytes, offset, |v| {
        CommandPayload::SwitchBinarySet(SwitchBinarySet { value: v })
    })
}

fn decode_switch_binary_report(bytes: &[u8], offset: usize) -> Result<DecodedFrame, DecodeError> {
    one_byte_value(bytes, offset, |v| {
        CommandPayload::SwitchBinaryReport(SwitchBinaryReport { value: v })
    })
}

fn decode_sensor_binary_report(bytes: &[u8], offset: usize) -> Result<DecodedFrame, DecodeError> {
    one_byte_value(bytes, offset, |v| {
        CommandPayload::SensorBinaryReport(SensorBinaryReport { value: v })
    })
}

fn decode_sensor_multilevel_report(
    bytes: &[u8],
    offset: usize,
) -> Result<DecodedFrame, DecodeError> {
    let head = body(bytes, offset, 2)?;
    let sensor_type = head[0];
    let level = head[1];
    let size = (level & 0x07) as usize;
    let scale = (level >> 3) & 0x03;
    let precision = (level >> 5) & 0x07;

    if !matches!(size, 1 | 2 | 4) {
        return Err(DecodeError::invalid_data(format!(
            "multilevel sensor value size {} not in {{1, 2, 4}}",
            size
        )));
    }
    let full = body(bytes, offset, 2 + size)?;

    // Big-endian, sign-extended to i32.
    let mut raw: u32 = 0;
    for &b in &full[2..2 + size] {
        raw = (raw << 8) | u32::from(b);
    }
    let shift = 32 - 8 * size as u32;
    let value = ((raw << shift) as i32) >> shift;

    Ok(DecodedFrame::command(
        bytes[offset],
        bytes[offset + 1],
        2 + 2 + size,
        CommandPayload::SensorMultilevelReport(SensorMultilevelReport {
            sensor_type,
            precision,
            scale,
            value,
        }),
    ))
}

fn decode_battery_report(bytes: &[u8], offset: usize) -> Result<DecodedFrame, DecodeError> {
    one_byte_value(bytes, offset, |v| {
        CommandPayload::BatteryReport(BatteryReport { level: v })
    })
}

fn decode_version_report(bytes: &[u8], offset: usize) -> Result<DecodedFrame, DecodeError> {
    let body = body(bytes, offset, 5)?;
    Ok(DecodedFrame::command(
        bytes[offset],
        bytes[offset + 1],
        7,
        CommandPayload::VersionReport(VersionReport {
            library_type: body[0],
            protocol_version: body[1],
            protocol_sub_version: body[2],
            application_version: body[3],
            application_sub_version: body[4],
        }),
    ))
}

// ============================================================================
// Registration Tables
// ============================================================================

const BASIC_TABLE: &[CommandSpec] = &[
    CommandSpec {
        id: BASIC_SET,
        name: "Basic Set",
        decoder: decode_basic_set,
        response_id: None,
    },
    CommandSpec {
        id: BASIC_GET,
        name: "Basic Get",
        decoder: decode_get,
        response_id: Some(BASIC_REPORT),
    },
    CommandSpec {
        id: BASIC_REPORT,
        name: "Basic Report",
        decoder: decode_basic_report,
        response_id: None,
    },
];

const SWITCH_BINARY_TABLE: &[CommandSpec] = &[
    CommandSpec {
        id: SWITCH_BINARY_SET,
        name: "Switch Binary Set",
        decoder: decode_switch_binary_set,
        response_id: None,
    },
    CommandSpec {
        id: SWITCH_BINARY_GET,
        name: "Switch Binary Get",
        decoder: decode_get,
        response_id: Some(SWITCH_BINARY_REPORT),
    },
    CommandSpec {
        id: SWITCH_BINARY_REPORT,
        name: "Switch Binary Report",
        decoder: decode_switch_binary_report,
        response_id: None,
    },
];

const SENSOR_BINARY_TABLE: &[CommandSpec] = &[
    CommandSpec {
        id: SENSOR_BINARY_GET,
        name: "Sensor Binary Get",
        decoder: decode_get,
        response_id: Some(SENSOR_BINARY_REPORT),
    },
    CommandSpec {
        id: SENSOR_BINARY_REPORT,
        name: "Sensor Binary Report",
        decoder: decode_sensor_binary_report,
        response_id: None,
    },
];

const SENSOR_MULTILEVEL_TABLE: &[CommandSpec] = &[
    CommandSpec {
        id: SENSOR_MULTILEVEL_GET,
        name: "Sensor Multilevel Get",
        decoder: decode_get,
        response_id: Some(SENSOR_MULTILEVEL_REPORT),
    },
    CommandSpec {
        id: SENSOR_MULTILEVEL_REPORT,
        name: "Sensor Multilevel Report",
        decoder: decode_sensor_multilevel_report,
        response_id: None,
    },
];

const BATTERY_TABLE: &[CommandSpec] = &[
    CommandSpec {
        id: BATTERY_GET,
        name: "Battery Get",
        decoder: decode_get,
        response_id: Some(BATTERY_REPORT),
    },
    CommandSpec {
        id: BATTERY_REPORT,
        name: "Battery Report",
        decoder: decode_battery_report,
        response_id: None,
    },
];

const VERSION_TABLE: &[CommandSpec] = &[
    CommandSpec {
        id: VERSION_GET,
        name: "Version Get",
        decoder: decode_get,
        response_id: Some(VERSION_REPORT),
    },
    CommandSpec {
        id: VERSION_REPORT,
        name: "Version Report",
        decoder: decode_version_report,
        response_id: None,
    },
];

/// Build the descriptors for every built-in command class.
pub fn builtin_classes() -> Vec<CommandClassDescriptor> {
    vec![
        CommandClassDescriptor::from_table(CC_BASIC, "Basic", BASIC_TABLE),
        CommandClassDescriptor::from_table(CC_SWITCH_BINARY, "Switch Binary", SWITCH_BINARY_TABLE),
        CommandClassDescriptor::from_table(CC_SENSOR_BINARY, "Sensor Binary", SENSOR_BINARY_TABLE),
        CommandClassDescriptor::from_table(
            CC_SENSOR_MULTILEVEL,
            "Sensor Multilevel",
            SENSOR_MULTILEVEL_TABLE,
        ),
        CommandClassDescriptor::from_table(CC_BATTERY, "Battery", BATTERY_TABLE),
        CommandClassDescriptor::from_table(CC_VERSION, "Version", VERSION_TABLE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_binary_report() {
        let frame = decode_switch_binary_report(&[CC_SWITCH_BINARY, SWITCH_BINARY_REPORT, 0xFF], 0)
            .unwrap();
        assert_eq!(frame.byte_length, 3);
        assert_eq!(
            frame.payload,
            CommandPayload::SwitchBinaryReport(SwitchBinaryReport { value: 0xFF })
        );
    }

    #[test]
    fn test_switch_binary_report_missing_value() {
        let err = decode_switch_binary_report(&[CC_SWITCH_BINARY, SWITCH_BINARY_REPORT], 0)
            .unwrap_err();
        assert_eq!(
            err,
            crate::DecodeError::TruncatedPayload {
                command_class: CC_SWITCH_BINARY,
                command: SWITCH_BINARY_REPORT,
                needed: 1,
                available: 0,
            }
        );
    }

    #[test]
    fn test_get_has_empty_body() {
        let frame = decode_get(&[CC_BATTERY, BATTERY_GET], 0).unwrap();
        assert_eq!(frame.byte_length, 2);
        assert_eq!(frame.payload, CommandPayload::Get);
    }

    #[test]
    fn test_sensor_multilevel_temperature() {
        // Temperature (0x01), precision 1 / scale 0 / size 2, value 0x00E6 = 23.0
        let bytes = [CC_SENSOR_MULTILEVEL, SENSOR_MULTILEVEL_REPORT, 0x01, 0x22, 0x00, 0xE6];
        let frame = decode_sensor_multilevel_report(&bytes, 0).unwrap();
        assert_eq!(frame.byte_length, 6);
        assert_eq!(
            frame.payload,
            CommandPayload::SensorMultilevelReport(SensorMultilevelReport {
                sensor_type: 0x01,
                precision: 1,
                scale: 0,
                value: 230,
            })
        );
    }

    #[test]
    fn test_sensor_multilevel_negative_value() {
        // Size 1, value 0xF6 = -10
        let bytes = [CC_SENSOR_MULTILEVEL, SENSOR_MULTILEVEL_REPORT, 0x01, 0x21, 0xF6];
        let frame = decode_sensor_multilevel_report(&bytes, 0).unwrap();
        if let CommandPayload::SensorMultilevelReport(report) = frame.payload {
            assert_eq!(report.value, -10);
        } else {
            panic!("Expected SensorMultilevelReport payload");
        }
    }

    #[test]
    fn test_sensor_multilevel_bad_size() {
        // Size field 3 is not a legal value size.
        let bytes = [CC_SENSOR_MULTILEVEL, SENSOR_MULTILEVEL_REPORT, 0x01, 0x23, 0x00, 0x00, 0x00];
        let err = decode_sensor_multilevel_report(&bytes, 0).unwrap_err();
        assert!(matches!(err, crate::DecodeError::InvalidData(_)));
    }

    #[test]
    fn test_version_report() {
        let bytes = [CC_VERSION, VERSION_REPORT, 0x06, 0x04, 0x05, 0x01, 0x02];
        let frame = decode_version_report(&bytes, 0).unwrap();
        assert_eq!(frame.byte_length, 7);
        assert_eq!(
            frame.payload,
            CommandPayload::VersionReport(VersionReport {
                library_type: 0x06,
                protocol_version: 0x04,
                protocol_sub_version: 0x05,
                application_version: 0x01,
                application_sub_version: 0x02,
            })
        );
    }

    #[test]
    fn test_decoder_respects_offset() {
        // Two leading transport bytes before the command frame.
        let bytes = [0xAA, 0xBB, CC_BATTERY, BATTERY_REPORT, 0x64];
        let frame = decode_battery_report(&bytes, 2).unwrap();
        assert_eq!(frame.command_class, CC_BATTERY);
        assert_eq!(
            frame.payload,
            CommandPayload::BatteryReport(BatteryReport { level: 100 })
        );
    }
}
