//! Error types for the driver
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus errors
//!
//! Geometry is never an error: rectangles that leave the panel are clipped
//! or dropped silently. See [`Window::clip`](crate::Window::clip).
//!
//! ## Example
//!
//! ```
//! use st7735s::{Builder, BuilderError};
//!
//! // Row offset pushes the 80-row window past the controller's 132 native rows
//! let result = Builder::new().row_offset(60).build();
//! assert!(matches!(result, Err(BuilderError::WindowOutOfRange { .. })));
//! ```

use crate::interface::DisplayInterface;

/// Native column count of the controller memory (landscape addressing)
pub const MAX_NATIVE_COLUMNS: u16 = 162;

/// Native row count of the controller memory (landscape addressing)
pub const MAX_NATIVE_ROWS: u16 = 132;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Source buffer is shorter than the rectangle it describes
    ///
    /// Pixel blits need `w * h` words, monochrome blits need
    /// `w * ceil(h / 8)` bytes.
    BufferTooSmall {
        /// Required buffer length in elements
        required: usize,
        /// Provided buffer length in elements
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Self::BufferTooSmall { required, provided } => f
                .debug_struct("BufferTooSmall")
                .field("required", required)
                .field("provided", provided)
                .finish(),
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} elements, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    /// The visible window does not fit in the controller's native memory
    ///
    /// `column_offset + 160` must not exceed [`MAX_NATIVE_COLUMNS`] and
    /// `row_offset + 80` must not exceed [`MAX_NATIVE_ROWS`].
    WindowOutOfRange {
        /// Requested column offset
        column_offset: u8,
        /// Requested row offset
        row_offset: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WindowOutOfRange {
                column_offset,
                row_offset,
            } => write!(
                f,
                "Window offset ({column_offset}, {row_offset}) exceeds native memory {MAX_NATIVE_COLUMNS}x{MAX_NATIVE_ROWS}"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_builder_error_display() {
        let err = BuilderError::WindowOutOfRange {
            column_offset: 4,
            row_offset: 60,
        };
        assert_eq!(
            err.to_string(),
            "Window offset (4, 60) exceeds native memory 162x132"
        );
    }
}
