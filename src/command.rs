//! ST7735S command definitions
//!
//! This module defines the command bytes and fixed register values used to
//! drive the ST7735S LCD controller. Every command is framed by the
//! [`DisplayInterface`](crate::DisplayInterface): the DC line is held low for
//! the opcode byte and raised high for any argument or pixel bytes.
//!
//! ## Command Structure
//!
//! 1. Assert CS (if wired)
//! 2. Set DC low (command mode)
//! 3. Send command byte
//! 4. Set DC high (data mode)
//! 5. Send argument / pixel bytes (if any)
//! 6. Deassert CS
//!
//! The bus is write-only: the controller never acknowledges a command.

// System control commands

/// Software reset command (0x01)
///
/// Used only when no hardware reset line is wired. Wait
/// [`RESET_SETTLE_MS`] before issuing anything else.
pub const SOFT_RESET: u8 = 0x01;

/// Sleep in command (0x10)
///
/// Enters the low-power sleep state. Wait [`SLEEP_SETTLE_MS`] afterwards.
pub const SLEEP_IN: u8 = 0x10;

/// Sleep out command (0x11)
///
/// Leaves the sleep state. Wait [`SLEEP_SETTLE_MS`] before the next command.
pub const SLEEP_OUT: u8 = 0x11;

/// Normal display mode on command (0x13)
pub const NORMAL_DISPLAY_ON: u8 = 0x13;

/// Display inversion off command (0x20)
pub const INVERSION_OFF: u8 = 0x20;

/// Display inversion on command (0x21)
pub const INVERSION_ON: u8 = 0x21;

/// Display off command (0x28)
pub const DISPLAY_OFF: u8 = 0x28;

/// Display on command (0x29)
pub const DISPLAY_ON: u8 = 0x29;

// RAM addressing commands

/// Column address set command (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const COLUMN_ADDRESS_SET: u8 = 0x2A;

/// Row address set command (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const ROW_ADDRESS_SET: u8 = 0x2B;

/// Memory write command (0x2C)
///
/// Followed by pixel data. The controller write pointer auto-increments
/// across the current address window in row-major order.
pub const MEMORY_WRITE: u8 = 0x2C;

// Pixel format and orientation

/// Memory data access control command (0x36)
///
/// Sets the scan direction / pixel order. Requires 1 byte, see
/// [`MADCTL_NORMAL`] and [`MADCTL_FLIPPED`].
pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;

/// Interface pixel format command (0x3A)
///
/// Requires 1 byte, see [`COLMOD_16BIT`].
pub const INTERFACE_PIXEL_FORMAT: u8 = 0x3A;

/// MADCTL pattern for the normal landscape orientation
///
/// Row/column exchange with column address order reversed, BGR panel order.
pub const MADCTL_NORMAL: u8 = 0x68;

/// MADCTL pattern for the orientation rotated by 180 degrees
pub const MADCTL_FLIPPED: u8 = 0xA8;

/// COLMOD value selecting 16 bits per pixel (RGB565)
pub const COLMOD_16BIT: u8 = 0x05;

// Timing contract (milliseconds)

/// Time the hardware reset line is held low
pub const RESET_LOW_MS: u32 = 100;

/// Settle time after releasing hardware reset or issuing [`SOFT_RESET`]
pub const RESET_SETTLE_MS: u32 = 120;

/// Settle time after [`SLEEP_OUT`] or [`SLEEP_IN`]
pub const SLEEP_SETTLE_MS: u32 = 120;
