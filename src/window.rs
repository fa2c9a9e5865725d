//! Address window geometry
//!
//! A [`Window`] is the rectangle the next memory write lands in. Primitives
//! never program a window that leaves the visible surface: requests are
//! clipped here first, and the clipped window's area is exactly the number of
//! pixels that get streamed.
//!
//! Clipping is silent by contract. A rectangle whose origin lies outside the
//! panel, or that has no area, becomes `None` and the draw call issues no bus
//! traffic at all.
//!
//! ```
//! use st7735s::Window;
//!
//! // Right edge is cut at x = 159
//! let window = Window::clip(150, 0, 20, 80, 160, 80);
//! assert_eq!(window, Some(Window { x: 150, y: 0, w: 10, h: 80 }));
//!
//! // Origin off-panel: nothing to draw
//! assert_eq!(Window::clip(200, 0, 10, 10, 160, 80), None);
//! ```

/// A rectangle in logical panel coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// Left column
    pub x: u16,
    /// Top row
    pub y: u16,
    /// Width in pixels
    pub w: u16,
    /// Height in pixels
    pub h: u16,
}

impl Window {
    /// Clip a requested rectangle to a `width` x `height` surface
    ///
    /// Returns `None` if `x >= width`, `y >= height`, `w == 0` or `h == 0`.
    /// Otherwise `w` and `h` are truncated so the window ends at the panel edge.
    #[allow(clippy::many_single_char_names)]
    pub fn clip(x: u16, y: u16, w: u16, h: u16, width: u16, height: u16) -> Option<Self> {
        if x >= width || y >= height || w == 0 || h == 0 {
            return None;
        }
        Some(Self {
            x,
            y,
            w: w.min(width - x),
            h: h.min(height - y),
        })
    }

    /// Whether the window is non-empty and lies entirely on a `width` x `height` surface
    ///
    /// Holds for every window returned by [`Window::clip`].
    pub fn fits(&self, width: u16, height: u16) -> bool {
        self.w != 0
            && self.h != 0
            && u32::from(self.x) + u32::from(self.w) <= u32::from(width)
            && u32::from(self.y) + u32::from(self.h) <= u32::from(height)
    }

    /// Number of pixels covered by the window
    pub fn area(&self) -> usize {
        self.w as usize * self.h as usize
    }

    /// Start and end column in controller memory, inclusive
    ///
    /// Only meaningful for windows that [`fit`](Self::fits) the panel.
    pub fn columns(&self, offset: u8) -> (u16, u16) {
        let start = self.x.saturating_add(u16::from(offset));
        (start, start.saturating_add(self.w.saturating_sub(1)))
    }

    /// Start and end row in controller memory, inclusive
    ///
    /// Only meaningful for windows that [`fit`](Self::fits) the panel.
    pub fn rows(&self, offset: u8) -> (u16, u16) {
        let start = self.y.saturating_add(u16::from(offset));
        (start, start.saturating_add(self.h.saturating_sub(1)))
    }
}

/// Encode an inclusive address range as the 4-byte CASET/RASET argument
///
/// `[start_MSB, start_LSB, end_MSB, end_LSB]`
pub fn address_range_bytes(start: u16, end: u16) -> [u8; 4] {
    let [start_hi, start_lo] = start.to_be_bytes();
    let [end_hi, end_lo] = end.to_be_bytes();
    [start_hi, start_lo, end_hi, end_lo]
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u16 = 160;
    const H: u16 = 80;

    #[test]
    fn test_clip_inside_unchanged() {
        assert_eq!(
            Window::clip(10, 20, 30, 40, W, H),
            Some(Window {
                x: 10,
                y: 20,
                w: 30,
                h: 40
            })
        );
    }

    #[test]
    fn test_clip_area_matches_min_formula() {
        for &(x, y) in &[(0u16, 0u16), (1, 1), (100, 40), (159, 79), (150, 70)] {
            for &(w, h) in &[(1u16, 1u16), (7, 16), (20, 20), (160, 80), (300, 300)] {
                let window = Window::clip(x, y, w, h, W, H).unwrap();
                let expected = w.min(W - x) as usize * h.min(H - y) as usize;
                assert_eq!(window.area(), expected);
                assert!(window.x + window.w <= W);
                assert!(window.y + window.h <= H);
            }
        }
    }

    #[test]
    fn test_clip_origin_outside_is_none() {
        assert_eq!(Window::clip(160, 0, 1, 1, W, H), None);
        assert_eq!(Window::clip(0, 80, 1, 1, W, H), None);
        assert_eq!(Window::clip(200, 0, 10, 10, W, H), None);
    }

    #[test]
    fn test_clip_empty_is_none() {
        assert_eq!(Window::clip(0, 0, 0, 10, W, H), None);
        assert_eq!(Window::clip(0, 0, 10, 0, W, H), None);
    }

    #[test]
    fn test_clip_does_not_overflow_near_max() {
        let window = Window::clip(159, 79, u16::MAX, u16::MAX, W, H).unwrap();
        assert_eq!(window.w, 1);
        assert_eq!(window.h, 1);
    }

    #[test]
    fn test_columns_and_rows_apply_offsets() {
        let window = Window {
            x: 0,
            y: 0,
            w: 7,
            h: 16,
        };
        assert_eq!(window.columns(0), (0, 6));
        assert_eq!(window.rows(24), (24, 39));
    }

    #[test]
    fn test_clipped_windows_fit() {
        for &(x, y, w, h) in &[(0u16, 0u16, 160u16, 80u16), (159, 79, 9, 9), (3, 4, 5, 6)] {
            assert!(Window::clip(x, y, w, h, W, H).unwrap().fits(W, H));
        }
    }

    #[test]
    fn test_fits_rejects_empty_and_oversized() {
        let empty = Window { x: 0, y: 0, w: 0, h: 1 };
        assert!(!empty.fits(W, H));
        let flat = Window { x: 0, y: 0, w: 1, h: 0 };
        assert!(!flat.fits(W, H));
        let wide = Window { x: 1, y: 0, w: 160, h: 1 };
        assert!(!wide.fits(W, H));
        let tall = Window { x: 0, y: 79, w: 1, h: 2 };
        assert!(!tall.fits(W, H));
        let huge = Window { x: u16::MAX, y: 0, w: u16::MAX, h: 1 };
        assert!(!huge.fits(W, H));
    }

    #[test]
    fn test_empty_window_ranges_do_not_underflow() {
        let empty = Window { x: 0, y: 0, w: 0, h: 0 };
        assert_eq!(empty.columns(0), (0, 0));
        assert_eq!(empty.rows(24), (24, 24));
    }

    #[test]
    fn test_address_range_bytes() {
        assert_eq!(address_range_bytes(24, 103), [0, 24, 0, 103]);
        assert_eq!(address_range_bytes(0x0102, 0x0304), [1, 2, 3, 4]);
    }
}
