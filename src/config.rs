//! Display configuration types and builder
//!
//! The defaults describe the 160x80 panel this driver targets: the visible
//! window sits at column 0, row 24 of the controller's native memory and the
//! two orientations use MADCTL patterns `0x68` / `0xA8`. Other mountings of
//! the same glass only need different offsets.
//!
//! Board wiring ([`PinAssignment`]) and bus timing ([`SPI_MODE`],
//! [`SPI_FREQUENCY_HZ`]) are static data for the HAL that builds the
//! [`Interface`](crate::Interface); the driver itself never reads them.

use embedded_hal::spi::{MODE_0, Mode};

use crate::command::{MADCTL_FLIPPED, MADCTL_NORMAL};
pub use crate::error::{BuilderError, MAX_NATIVE_COLUMNS, MAX_NATIVE_ROWS};

/// Visible panel width in pixels
pub const WIDTH: u16 = 160;

/// Visible panel height in pixels
pub const HEIGHT: u16 = 80;

/// Default column offset of the visible window in controller memory
pub const DEFAULT_COLUMN_OFFSET: u8 = 0;

/// Default row offset of the visible window in controller memory
pub const DEFAULT_ROW_OFFSET: u8 = 24;

/// SPI mode: clock idle low, data sampled on the leading edge
pub const SPI_MODE: Mode = MODE_0;

/// SPI clock for pixel transfers
pub const SPI_FREQUENCY_HZ: u32 = 20_000_000;

/// GPIO numbers of the reference board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinAssignment {
    /// SPI clock
    pub sclk: u8,
    /// SPI MISO (unused by the panel, claimed by the bus)
    pub miso: u8,
    /// SPI MOSI
    pub mosi: u8,
    /// Chip select
    pub cs: u8,
    /// Data/Command select
    pub dc: u8,
    /// Hardware reset
    pub rst: u8,
    /// Backlight enable
    pub backlight: u8,
}

impl PinAssignment {
    /// Wiring of the reference board
    pub const DEFAULT: Self = Self {
        sclk: 2,
        miso: 12,
        mosi: 3,
        cs: 7,
        dc: 6,
        rst: 10,
        backlight: 11,
    };
}

impl Default for PinAssignment {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Panel orientation
///
/// Both orientations expose the same logical 160x80 surface; flipping
/// rotates the picture by 180 degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Native landscape orientation
    #[default]
    Normal,
    /// Rotated by 180 degrees
    Flipped,
}

/// Display configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Column of controller memory that maps to logical x = 0
    pub column_offset: u8,
    /// Row of controller memory that maps to logical y = 0
    pub row_offset: u8,
    /// Orientation applied by reset
    pub orientation: Orientation,
    /// MADCTL value for [`Orientation::Normal`]
    pub madctl_normal: u8,
    /// MADCTL value for [`Orientation::Flipped`]
    pub madctl_flipped: u8,
}

impl Config {
    /// MADCTL register value for an orientation
    pub fn madctl(&self, orientation: Orientation) -> u8 {
        match orientation {
            Orientation::Normal => self.madctl_normal,
            Orientation::Flipped => self.madctl_flipped,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            column_offset: DEFAULT_COLUMN_OFFSET,
            row_offset: DEFAULT_ROW_OFFSET,
            orientation: Orientation::Normal,
            madctl_normal: MADCTL_NORMAL,
            madctl_flipped: MADCTL_FLIPPED,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use st7735s::{Builder, Orientation};
///
/// let config = match Builder::new().orientation(Orientation::Flipped).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.row_offset, 24);
/// ```
#[must_use]
pub struct Builder {
    column_offset: u8,
    row_offset: u8,
    orientation: Orientation,
    madctl_normal: u8,
    madctl_flipped: u8,
}

impl Default for Builder {
    fn default() -> Self {
        let config = Config::default();
        Self {
            column_offset: config.column_offset,
            row_offset: config.row_offset,
            orientation: config.orientation,
            madctl_normal: config.madctl_normal,
            madctl_flipped: config.madctl_flipped,
        }
    }
}

impl Builder {
    /// Create a new Builder with the defaults of the 160x80 panel
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column offset of the visible window
    pub fn column_offset(mut self, value: u8) -> Self {
        self.column_offset = value;
        self
    }

    /// Set the row offset of the visible window
    pub fn row_offset(mut self, value: u8) -> Self {
        self.row_offset = value;
        self
    }

    /// Set the orientation applied on reset
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the MADCTL values used for the normal and flipped orientation
    pub fn madctl(mut self, normal: u8, flipped: u8) -> Self {
        self.madctl_normal = normal;
        self.madctl_flipped = flipped;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::WindowOutOfRange` if the offsets push the
    /// visible window outside the controller's native memory.
    pub fn build(self) -> Result<Config, BuilderError> {
        if u16::from(self.column_offset) + WIDTH > MAX_NATIVE_COLUMNS
            || u16::from(self.row_offset) + HEIGHT > MAX_NATIVE_ROWS
        {
            return Err(BuilderError::WindowOutOfRange {
                column_offset: self.column_offset,
                row_offset: self.row_offset,
            });
        }
        Ok(Config {
            column_offset: self.column_offset,
            row_offset: self.row_offset,
            orientation: self.orientation,
            madctl_normal: self.madctl_normal,
            madctl_flipped: self.madctl_flipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder_matches_default_config() {
        assert_eq!(Builder::new().build().unwrap(), Config::default());
    }

    #[test]
    fn test_default_offsets() {
        let config = Config::default();
        assert_eq!(config.column_offset, 0);
        assert_eq!(config.row_offset, 24);
    }

    #[test]
    fn test_madctl_patterns() {
        let config = Config::default();
        assert_eq!(config.madctl(Orientation::Normal), 0x68);
        assert_eq!(config.madctl(Orientation::Flipped), 0xA8);
    }

    #[test]
    fn test_offsets_at_native_limit_accepted() {
        let config = Builder::new().column_offset(2).row_offset(52).build();
        assert!(config.is_ok());
    }

    #[test]
    fn test_column_offset_out_of_range() {
        let result = Builder::new().column_offset(3).build();
        assert_eq!(
            result,
            Err(BuilderError::WindowOutOfRange {
                column_offset: 3,
                row_offset: 24
            })
        );
    }

    #[test]
    fn test_row_offset_out_of_range() {
        let result = Builder::new().row_offset(53).build();
        assert!(matches!(result, Err(BuilderError::WindowOutOfRange { .. })));
    }

    #[test]
    fn test_reference_board_pins() {
        let pins = PinAssignment::default();
        assert_eq!(pins.dc, 6);
        assert_eq!(pins.cs, 7);
        assert_eq!(pins.rst, 10);
        assert_eq!(pins.backlight, 11);
        assert_eq!(SPI_MODE, MODE_0);
    }
}
