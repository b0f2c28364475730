//! Protocol constants
//!
//! Command-class identifiers and per-class command identifiers for the
//! command classes the hub agent decodes itself. Identifiers are the
//! one-byte values defined by the Z-Wave application layer; unknown values
//! are expected on a live network and handled by the raw fallback.

/// Minimum well-formed frame: one class byte plus one command byte.
pub const MIN_FRAME_SIZE: usize = 2;

/// Sentinel response id for commands that do not solicit a report.
pub const NO_RESPONSE: u8 = 0x00;

// ============================================================================
// Command Class Identifiers
// ============================================================================

/// Basic command class (device-agnostic on/off/level).
pub const CC_BASIC: u8 = 0x20;
/// Switch Binary command class (on/off switches).
pub const CC_SWITCH_BINARY: u8 = 0x25;
/// Sensor Binary command class (open/closed, motion/no-motion sensors).
pub const CC_SENSOR_BINARY: u8 = 0x30;
/// Sensor Multilevel command class (temperature, humidity, luminance...).
pub const CC_SENSOR_MULTILEVEL: u8 = 0x31;
/// Battery command class.
pub const CC_BATTERY: u8 = 0x80;
/// Version command class (protocol and application versions).
pub const CC_VERSION: u8 = 0x86;

// ============================================================================
// Basic (0x20)
// ============================================================================

/// Set the basic value of a device.
pub const BASIC_SET: u8 = 0x01;
/// Request the basic value of a device.
pub const BASIC_GET: u8 = 0x02;
/// Report the basic value of a device.
pub const BASIC_REPORT: u8 = 0x03;

// ============================================================================
// Switch Binary (0x25)
// ============================================================================

/// Turn a binary switch on or off.
pub const SWITCH_BINARY_SET: u8 = 0x01;
/// Request the state of a binary switch.
pub const SWITCH_BINARY_GET: u8 = 0x02;
/// Report the state of a binary switch.
pub const SWITCH_BINARY_REPORT: u8 = 0x03;

// ============================================================================
// Sensor Binary (0x30)
// ============================================================================

/// Request the state of a binary sensor.
pub const SENSOR_BINARY_GET: u8 = 0x02;
/// Report the state of a binary sensor.
pub const SENSOR_BINARY_REPORT: u8 = 0x03;

// ============================================================================
// Sensor Multilevel (0x31)
// ============================================================================

/// Request a multilevel sensor reading.
pub const SENSOR_MULTILEVEL_GET: u8 = 0x04;
/// Report a multilevel sensor reading.
pub const SENSOR_MULTILEVEL_REPORT: u8 = 0x05;

// ============================================================================
// Battery (0x80)
// ============================================================================

/// Request the battery level of a device.
pub const BATTERY_GET: u8 = 0x02;
/// Report the battery level of a device.
pub const BATTERY_REPORT: u8 = 0x03;

// ============================================================================
// Version (0x86)
// ============================================================================

/// Request library/protocol/application versions.
pub const VERSION_GET: u8 = 0x11;
/// Report library/protocol/application versions.
pub const VERSION_REPORT: u8 = 0x12;
