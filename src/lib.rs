//! ST7735S LCD Driver
//!
//! A framebuffer-less driver for 160x80 ST7735S TFT panels in 16-bit RGB565
//! mode. Every draw call is clipped to the panel and streamed straight into
//! the controller's memory over SPI.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Configurable memory offsets and MADCTL patterns
//! - Rectangle fills, pixel and 1-bit blits, built-in 7x16 text
//! - Sleep, 180 degree flip and color inversion control
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use st7735s::{Builder, Color, Display, Interface, Orientation};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let cs = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, Some(cs), Some(rst));
//! let config = match Builder::new().orientation(Orientation::Normal).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.begin(&mut delay);
//! let _ = display.fill(0, 0, 160, 16, Color::BLUE);
//! let _ = display.draw_string(4, 0, "Hello", Color::WHITE, Color::BLUE);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// RGB565 color type
pub mod color;
/// ST7735S command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in bitmap font
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// Text rendering
pub mod text;
/// Address window geometry
pub mod window;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod testing;

pub use color::Color;
pub use config::{
    Builder, Config, DEFAULT_COLUMN_OFFSET, DEFAULT_ROW_OFFSET, HEIGHT, Orientation,
    PinAssignment, SPI_FREQUENCY_HZ, SPI_MODE, WIDTH,
};
pub use display::{Display, PowerState};
pub use error::{BuilderError, Error, MAX_NATIVE_COLUMNS, MAX_NATIVE_ROWS};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface, REPEAT_CHUNK_WORDS};
pub use window::Window;
