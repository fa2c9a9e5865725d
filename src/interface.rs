//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ST7735S controller over a write-only SPI bus.
//!
//! ## Hardware Requirements
//!
//! - SPI bus (MOSI + SCK), mode 0, MSB first, see [`SPI_MODE`](crate::config::SPI_MODE)
//! - **DC**: Data/Command select (output, low = command)
//! - **CS**: Chip select (output, active low, optional)
//! - **RST**: Hardware reset (output, active low, optional)
//!
//! ## Example
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use st7735s::{DisplayInterface, Interface};
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
//! // DC and CS wired, no reset line
//! let mut interface = Interface::new(MockSpi, MockPin, Some(MockPin), None::<MockPin>);
//!
//! // Sleep out
//! let _ = interface.send_command(0x11, &[]);
//!
//! // Pixel format: 16 bits per pixel
//! let _ = interface.send_command(0x3A, &[0x05]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::command::{RESET_LOW_MS, RESET_SETTLE_MS};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Number of pixel words staged on the stack per SPI write when streaming a
/// repeated value
pub const REPEAT_CHUNK_WORDS: usize = 32;

/// Trait for the hardware interface to an ST7735S controller
///
/// Every method is one self-contained bus transaction: the implementation
/// selects the device, frames `command` with DC low, sends any payload with
/// DC high and deselects the device before returning, on success and failure
/// alike. There is no read-back; the protocol has no acknowledgement.
pub trait DisplayInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Drive the control lines to their idle levels
    ///
    /// Device deselected and reset line released. Called once by
    /// [`Display::begin`](crate::Display::begin).
    fn init(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Send a command byte followed by its argument bytes
    ///
    /// `args` may be empty for commands without parameters.
    fn send_command(&mut self, command: u8, args: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send a command byte followed by 16-bit words, most significant byte first
    fn send_words(&mut self, command: u8, words: &[u16]) -> InterfaceResult<(), Self::Error>;

    /// Send a command byte followed by `count` copies of one 16-bit word
    fn send_repeated_word(
        &mut self,
        command: u8,
        word: u16,
        count: usize,
    ) -> InterfaceResult<(), Self::Error>;

    /// Send a command byte followed by `count` copies of one byte
    fn send_repeated_byte(
        &mut self,
        command: u8,
        byte: u8,
        count: usize,
    ) -> InterfaceResult<(), Self::Error>;

    /// Pulse the hardware reset line
    ///
    /// Drives RST low for [`RESET_LOW_MS`], then high for [`RESET_SETTLE_MS`].
    /// Returns `Ok(false)` without touching the bus when no reset line is
    /// wired, so the caller can fall back to a software reset.
    fn hardware_reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<bool, Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for ST7735S
///
/// Implements [`DisplayInterface`] on top of an embedded-hal v1.0 [`SpiBus`]
/// and [`OutputPin`]s. The interface owns the bus for its whole lifetime;
/// chip select is driven here rather than by an `SpiDevice`, because DC has to
/// toggle between the opcode and its payload inside one CS assertion.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `CS` - Chip select pin implementing [`OutputPin`], may be absent
/// * `RST` - Reset pin implementing [`OutputPin`], may be absent
pub struct Interface<SPI, DC, CS, RST> {
    /// SPI bus for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Chip select pin (active low)
    cs: Option<CS>,
    /// Reset pin (active low)
    rst: Option<RST>,
}

impl<SPI, DC, CS, RST> Interface<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus, already configured for mode 0 at the panel clock
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `cs` - Chip select pin, or `None` when the device is selected by other means
    /// * `rst` - Reset pin, or `None` to use the software reset command
    ///
    /// Control lines are put into their idle levels by
    /// [`DisplayInterface::init`], which [`Display::begin`](crate::Display::begin) calls.
    pub fn new(spi: SPI, dc: DC, cs: Option<CS>, rst: Option<RST>) -> Self {
        Self { spi, dc, cs, rst }
    }

    /// Whether a chip select line is wired
    pub fn has_chip_select(&self) -> bool {
        self.cs.is_some()
    }

    /// Whether a hardware reset line is wired
    pub fn has_reset(&self) -> bool {
        self.rst.is_some()
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, DC, Option<CS>, Option<RST>) {
        (self.spi, self.dc, self.cs, self.rst)
    }
}

impl<SPI, DC, CS, RST, PinErr> Interface<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    /// Run one framed transaction
    ///
    /// CS is deasserted on every path once it has been asserted. The first
    /// error wins.
    fn transaction<F>(
        &mut self,
        command: u8,
        payload: F,
    ) -> InterfaceResult<(), InterfaceError<SPI::Error, PinErr>>
    where
        F: FnOnce(&mut SPI) -> InterfaceResult<(), SPI::Error>,
    {
        if let Some(cs) = self.cs.as_mut() {
            cs.set_low().map_err(InterfaceError::Pin)?;
        }

        let result = Self::frame(&mut self.spi, &mut self.dc, command, payload);

        let deselect = match self.cs.as_mut() {
            Some(cs) => cs.set_high().map_err(InterfaceError::Pin),
            None => Ok(()),
        };

        result.and(deselect)
    }

    fn frame<F>(
        spi: &mut SPI,
        dc: &mut DC,
        command: u8,
        payload: F,
    ) -> InterfaceResult<(), InterfaceError<SPI::Error, PinErr>>
    where
        F: FnOnce(&mut SPI) -> InterfaceResult<(), SPI::Error>,
    {
        dc.set_low().map_err(InterfaceError::Pin)?;
        spi.write(&[command]).map_err(InterfaceError::Spi)?;
        // DC must not change while the opcode is still shifting out
        spi.flush().map_err(InterfaceError::Spi)?;
        dc.set_high().map_err(InterfaceError::Pin)?;
        payload(spi).map_err(InterfaceError::Spi)?;
        spi.flush().map_err(InterfaceError::Spi)
    }
}

impl<SPI, DC, CS, RST, PinErr> DisplayInterface for Interface<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn init(&mut self) -> InterfaceResult<(), Self::Error> {
        if let Some(cs) = self.cs.as_mut() {
            cs.set_high().map_err(InterfaceError::Pin)?;
        }
        if let Some(rst) = self.rst.as_mut() {
            rst.set_high().map_err(InterfaceError::Pin)?;
        }
        Ok(())
    }

    fn send_command(&mut self, command: u8, args: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.transaction(command, |spi| {
            if args.is_empty() {
                Ok(())
            } else {
                spi.write(args)
            }
        })
    }

    fn send_words(&mut self, command: u8, words: &[u16]) -> InterfaceResult<(), Self::Error> {
        self.transaction(command, |spi| {
            let mut chunk = [0u8; REPEAT_CHUNK_WORDS * 2];
            for block in words.chunks(REPEAT_CHUNK_WORDS) {
                for (bytes, word) in chunk.chunks_exact_mut(2).zip(block) {
                    bytes.copy_from_slice(&word.to_be_bytes());
                }
                spi.write(&chunk[..block.len() * 2])?;
            }
            Ok(())
        })
    }

    fn send_repeated_word(
        &mut self,
        command: u8,
        word: u16,
        count: usize,
    ) -> InterfaceResult<(), Self::Error> {
        self.transaction(command, |spi| {
            let [hi, lo] = word.to_be_bytes();
            let mut chunk = [0u8; REPEAT_CHUNK_WORDS * 2];
            for bytes in chunk.chunks_exact_mut(2) {
                bytes[0] = hi;
                bytes[1] = lo;
            }
            let mut remaining = count;
            while remaining > 0 {
                let n = remaining.min(REPEAT_CHUNK_WORDS);
                spi.write(&chunk[..n * 2])?;
                remaining -= n;
            }
            Ok(())
        })
    }

    fn send_repeated_byte(
        &mut self,
        command: u8,
        byte: u8,
        count: usize,
    ) -> InterfaceResult<(), Self::Error> {
        self.transaction(command, |spi| {
            let chunk = [byte; REPEAT_CHUNK_WORDS * 2];
            let mut remaining = count;
            while remaining > 0 {
                let n = remaining.min(chunk.len());
                spi.write(&chunk[..n])?;
                remaining -= n;
            }
            Ok(())
        })
    }

    fn hardware_reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<bool, Self::Error> {
        let Some(rst) = self.rst.as_mut() else {
            return Ok(false);
        };
        rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_LOW_MS);
        rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(true)
    }
}
