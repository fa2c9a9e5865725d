//! Core display operations
//!
//! [`Display`] streams every draw call straight into controller memory; there
//! is no framebuffer. Each primitive clips its rectangle
//! ([`Window::clip`]), programs the address window and writes exactly as many
//! pixels as the clipped window holds.

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::color::Color;
use crate::command::{
    COLMOD_16BIT, COLUMN_ADDRESS_SET, DISPLAY_OFF, DISPLAY_ON, INTERFACE_PIXEL_FORMAT,
    INVERSION_OFF, INVERSION_ON, MEMORY_ACCESS_CONTROL, MEMORY_WRITE, NORMAL_DISPLAY_ON,
    RESET_SETTLE_MS, ROW_ADDRESS_SET, SLEEP_IN, SLEEP_OUT, SLEEP_SETTLE_MS, SOFT_RESET,
};
use crate::config::{Config, HEIGHT, Orientation, WIDTH};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::window::{Window, address_range_bytes};

pub(crate) type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Scratch line length; one row of the widest possible window
pub(crate) const LINE_LEN: usize = WIDTH as usize;

/// Controller power state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerState {
    /// Not yet brought up by [`Display::begin`]
    #[default]
    Uninitialized,
    /// Sleep mode, display output off
    Sleeping,
    /// Awake with display output on
    Awake,
}

/// Core display driver for ST7735S
///
/// Owns the [`DisplayInterface`] for its whole lifetime. All calls block until
/// the bus transfer and any datasheet settle delay are complete. The driver is
/// not reentrant; share it between contexts only behind an external lock.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Last power state set through the driver
    power_state: PowerState,
    /// Orientation currently programmed
    orientation: Orientation,
    /// Whether color inversion is on
    inverted: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`begin`](Self::begin).
    pub fn new(interface: I, config: Config) -> Self {
        let orientation = config.orientation;
        Self {
            interface,
            config,
            power_state: PowerState::Uninitialized,
            orientation,
            inverted: false,
        }
    }

    /// Put the control lines in their idle state and bring the controller up
    pub fn begin<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!("st7735s: begin");
        self.interface.init().map_err(Error::Interface)?;
        self.reset(delay)
    }

    /// Reset the controller and run the bring-up sequence
    ///
    /// Uses the hardware reset line when wired, the software reset command
    /// otherwise. Leaves the panel awake, cleared to black, in the configured
    /// orientation with inversion off.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        let pulsed = self
            .interface
            .hardware_reset(delay)
            .map_err(Error::Interface)?;
        if pulsed {
            debug!("st7735s: hardware reset");
        } else {
            debug!("st7735s: software reset");
            self.send_command(SOFT_RESET)?;
            delay.delay_ms(RESET_SETTLE_MS);
        }
        self.power_state = PowerState::Sleeping;
        self.inverted = false;

        self.send_command(SLEEP_OUT)?;
        delay.delay_ms(SLEEP_SETTLE_MS);

        self.orientation = self.config.orientation;
        self.send_command_arg(MEMORY_ACCESS_CONTROL, self.config.madctl(self.orientation))?;
        self.send_command_arg(INTERFACE_PIXEL_FORMAT, COLMOD_16BIT)?;
        self.send_command(NORMAL_DISPLAY_ON)?;

        self.clear()?;

        self.send_command(DISPLAY_ON)?;
        self.power_state = PowerState::Awake;
        Ok(())
    }

    /// Wake the panel (`true`) or put it to sleep (`false`)
    pub fn power<D: DelayNs>(&mut self, on: bool, delay: &mut D) -> DisplayResult<I> {
        if on {
            debug!("st7735s: wake");
            self.send_command(SLEEP_OUT)?;
            delay.delay_ms(SLEEP_SETTLE_MS);
            self.send_command(DISPLAY_ON)?;
            self.power_state = PowerState::Awake;
        } else {
            debug!("st7735s: sleep");
            self.send_command(DISPLAY_OFF)?;
            self.send_command(SLEEP_IN)?;
            delay.delay_ms(SLEEP_SETTLE_MS);
            self.power_state = PowerState::Sleeping;
        }
        Ok(())
    }

    /// Rotate the picture by 180 degrees (`true`) or restore the normal orientation
    ///
    /// Only affects how subsequent writes map onto the glass; the logical
    /// surface stays 160x80.
    pub fn flip(&mut self, on: bool) -> DisplayResult<I> {
        let orientation = if on {
            Orientation::Flipped
        } else {
            Orientation::Normal
        };
        debug!("st7735s: orientation {:?}", orientation);
        self.send_command_arg(MEMORY_ACCESS_CONTROL, self.config.madctl(orientation))?;
        self.orientation = orientation;
        Ok(())
    }

    /// Turn color inversion on or off
    pub fn inverse(&mut self, on: bool) -> DisplayResult<I> {
        debug!("st7735s: inversion {}", on);
        self.send_command(if on { INVERSION_ON } else { INVERSION_OFF })?;
        self.inverted = on;
        Ok(())
    }

    /// Fill a rectangle with one color
    ///
    /// The rectangle is clipped to the panel. If `x` or `y` is off-panel, or
    /// the rectangle is empty, nothing is sent.
    #[allow(clippy::many_single_char_names)]
    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) -> DisplayResult<I> {
        let Some(window) = Window::clip(x, y, w, h, WIDTH, HEIGHT) else {
            trace!("st7735s: fill ({}, {}, {}, {}) clipped away", x, y, w, h);
            return Ok(());
        };
        self.set_address_window(&window)?;
        self.write_memory_repeated(color, window.area())
    }

    /// Fill the whole panel with black
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.fill(0, 0, WIDTH, HEIGHT, Color::BLACK)
    }

    /// Set a single pixel
    pub fn pixel(&mut self, x: u16, y: u16, color: Color) -> DisplayResult<I> {
        self.fill(x, y, 1, 1, color)
    }

    /// Copy a row-major `w` x `h` pixel array to the panel
    ///
    /// The visible part is written one row at a time, each row with its own
    /// single-row window. The source stride stays `w` when the right side is
    /// clipped, so rows never drift.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `pixels` holds fewer than `w * h`
    /// entries.
    #[allow(clippy::many_single_char_names)]
    pub fn blit(&mut self, x: u16, y: u16, w: u16, h: u16, pixels: &[Color]) -> DisplayResult<I> {
        let required = w as usize * h as usize;
        if pixels.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: pixels.len(),
            });
        }
        let Some(window) = Window::clip(x, y, w, h, WIDTH, HEIGHT) else {
            trace!("st7735s: blit ({}, {}, {}, {}) clipped away", x, y, w, h);
            return Ok(());
        };

        let width = window.w as usize;
        let mut line = [0u16; LINE_LEN];
        for (row, src) in pixels
            .chunks_exact(w as usize)
            .take(window.h as usize)
            .enumerate()
        {
            for (dst, color) in line.iter_mut().zip(&src[..width]) {
                *dst = color.raw();
            }
            self.write_line(window.x, window.y + row as u16, &line[..width])?;
        }
        Ok(())
    }

    /// Expand a 1-bit bitmap into two colors and write it to the panel
    ///
    /// `bits` is column-major in 8-row bands: pixel `(col, row)` is
    /// `foreground` when `bits[(row / 8) * w + col] & (1 << (row % 8)) != 0`
    /// and `background` otherwise. Each visible row is expanded into a
    /// scratch line and written immediately.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `bits` holds fewer than
    /// `w * ceil(h / 8)` bytes.
    #[allow(clippy::many_single_char_names, clippy::too_many_arguments)]
    pub fn draw_mono(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        bits: &[u8],
        foreground: Color,
        background: Color,
    ) -> DisplayResult<I> {
        let stride = w as usize;
        let required = stride * h.div_ceil(8) as usize;
        if bits.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: bits.len(),
            });
        }
        let Some(window) = Window::clip(x, y, w, h, WIDTH, HEIGHT) else {
            trace!("st7735s: mono blit ({}, {}, {}, {}) clipped away", x, y, w, h);
            return Ok(());
        };

        let width = window.w as usize;
        let (fg, bg) = (foreground.raw(), background.raw());
        let mut line = [0u16; LINE_LEN];
        for row in 0..window.h as usize {
            let band = &bits[(row / 8) * stride..];
            let mask = 1u8 << (row % 8);
            for (dst, byte) in line.iter_mut().zip(&band[..width]) {
                *dst = if byte & mask != 0 { fg } else { bg };
            }
            self.write_line(window.x, window.y + row as u16, &line[..width])?;
        }
        Ok(())
    }

    /// Program the column and row address window
    ///
    /// Must be followed directly by a memory write of exactly
    /// `window.area()` pixels. The configured offsets are added here.
    ///
    /// Windows that are empty or reach past the visible panel are ignored
    /// and nothing is sent; use [`Window::clip`] to build a valid one.
    pub fn set_address_window(&mut self, window: &Window) -> DisplayResult<I> {
        if !window.fits(WIDTH, HEIGHT) {
            trace!("st7735s: window {:?} does not fit the panel", window);
            return Ok(());
        }
        let (col_start, col_end) = window.columns(self.config.column_offset);
        let (row_start, row_end) = window.rows(self.config.row_offset);
        self.send_command_args(COLUMN_ADDRESS_SET, &address_range_bytes(col_start, col_end))?;
        self.send_command_args(ROW_ADDRESS_SET, &address_range_bytes(row_start, row_end))
    }

    /// Write pixels into the current address window
    pub fn write_memory(&mut self, pixels: &[u16]) -> DisplayResult<I> {
        self.interface
            .send_words(MEMORY_WRITE, pixels)
            .map_err(Error::Interface)
    }

    /// Write one color `count` times into the current address window
    pub fn write_memory_repeated(&mut self, color: Color, count: usize) -> DisplayResult<I> {
        self.interface
            .send_repeated_word(MEMORY_WRITE, color.raw(), count)
            .map_err(Error::Interface)
    }

    /// Write raw bytes into the current address window
    ///
    /// Two bytes make one RGB565 pixel, high byte first.
    pub fn write_memory_bytes(&mut self, bytes: &[u8]) -> DisplayResult<I> {
        self.send_command_args(MEMORY_WRITE, bytes)
    }

    /// Write one byte `count` times into the current address window
    ///
    /// Useful for colors whose high and low byte are equal, such as black and white.
    pub fn write_memory_byte_repeated(&mut self, byte: u8, count: usize) -> DisplayResult<I> {
        self.interface
            .send_repeated_byte(MEMORY_WRITE, byte, count)
            .map_err(Error::Interface)
    }

    /// Send a command without arguments
    pub fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.send_command_args(cmd, &[])
    }

    /// Send a command with a single argument byte
    pub fn send_command_arg(&mut self, cmd: u8, arg: u8) -> DisplayResult<I> {
        self.send_command_args(cmd, &[arg])
    }

    /// Send a command with argument bytes
    pub fn send_command_args(&mut self, cmd: u8, args: &[u8]) -> DisplayResult<I> {
        self.interface
            .send_command(cmd, args)
            .map_err(Error::Interface)
    }

    /// Visible width in pixels
    pub fn width(&self) -> u16 {
        WIDTH
    }

    /// Visible height in pixels
    pub fn height(&self) -> u16 {
        HEIGHT
    }

    /// Last power state set through the driver
    pub fn power_state(&self) -> PowerState {
        self.power_state
    }

    /// Orientation currently programmed
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the picture is rotated by 180 degrees
    pub fn is_flipped(&self) -> bool {
        self.orientation == Orientation::Flipped
    }

    /// Whether color inversion is on
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the underlying interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// One single-row window plus its pixels
    pub(crate) fn write_line(&mut self, x: u16, y: u16, line: &[u16]) -> DisplayResult<I> {
        let window = Window {
            x,
            y,
            w: line.len() as u16,
            h: 1,
        };
        self.set_address_window(&window)?;
        self.write_memory(line)
    }
}
