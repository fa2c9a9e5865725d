//! RGB565 color type
//!
//! The panel runs in 16 bits per pixel mode: 5 bits red, 6 bits green and
//! 5 bits blue packed into one big-endian word on the bus.
//!
//! | Bits    | Channel |
//! |---------|---------|
//! | 15..=11 | Red     |
//! | 10..=5  | Green   |
//! | 4..=0   | Blue    |
//!
//! ## Example
//!
//! ```
//! use st7735s::Color;
//!
//! let orange = Color::rgb(0xFF, 0x80, 0x00);
//! assert_eq!(orange.raw(), 0xFC00);
//!
//! assert_eq!(Color::rgb(0xFF, 0xFF, 0xFF), Color::WHITE);
//! ```

/// A packed RGB565 color
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Color(u16);

impl Color {
    /// All channels off (0x0000)
    pub const BLACK: Self = Self(0x0000);
    /// All channels saturated (0xFFFF)
    pub const WHITE: Self = Self(0xFFFF);
    /// Dark gray (0x38E7)
    pub const GRAY: Self = Self(0x38E7);
    /// Pure red (0xF800)
    pub const RED: Self = Self(0xF800);
    /// Pure green (0x07E0)
    pub const GREEN: Self = Self(0x07E0);
    /// Pure blue (0x001F)
    pub const BLUE: Self = Self(0x001F);
    /// Red + green (0xFFE0)
    pub const YELLOW: Self = Self(0xFFE0);

    /// Pack three 8-bit channels into RGB565
    ///
    /// Each channel is truncated to its bit width: red and blue lose their
    /// 3 low bits, green loses 2.
    ///
    /// ```
    /// use st7735s::Color;
    ///
    /// assert_eq!(Color::rgb(0xFF, 0, 0), Color::RED);
    /// assert_eq!(Color::rgb(0x07, 0x03, 0x07), Color::BLACK);
    /// ```
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r >> 3) as u16) << 11) | (((g >> 2) as u16) << 5) | ((b >> 3) as u16))
    }

    /// Wrap an already packed RGB565 value
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// The packed RGB565 value as sent on the bus
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel, 0..=31
    pub const fn r(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel, 0..=63
    pub const fn g(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel, 0..=31
    pub const fn b(self) -> u8 {
        (self.0 & 0x1F) as u8
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU16;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::raw::{RawData, RawU16};

        Self(RawU16::from(color).into_inner())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::Rgb565 {
    fn from(color: Color) -> Self {
        use embedded_graphics_core::pixelcolor::raw::RawU16;

        Self::from(RawU16::new(color.0))
    }
}
