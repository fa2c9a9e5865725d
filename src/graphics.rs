//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] directly. There is no framebuffer:
//! every primitive is clipped to the panel and streamed to controller memory
//! as it is drawn.
//!
//! - `fill_solid` becomes one [`Display::fill`] call
//! - `fill_contiguous` is streamed row by row, one window per visible row
//! - `draw_iter` sets pixels one at a time; prefer filled shapes where possible
//!
//! Note that the inherent [`Display::clear`] (black, no argument) shadows
//! `DrawTarget::clear`; call the trait method explicitly to clear to a color.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//! };
//! use st7735s::{Color, Config, Display};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use st7735s::DisplayInterface;
//! # struct NullInterface;
//! # impl DisplayInterface for NullInterface {
//! #     type Error = Infallible;
//! #     fn init(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn send_command(&mut self, _c: u8, _a: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn send_words(&mut self, _c: u8, _w: &[u16]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn send_repeated_word(&mut self, _c: u8, _w: u16, _n: usize) -> Result<(), Self::Error> { Ok(()) }
//! #     fn send_repeated_byte(&mut self, _c: u8, _b: u8, _n: usize) -> Result<(), Self::Error> { Ok(()) }
//! #     fn hardware_reset<D: DelayNs>(&mut self, _d: &mut D) -> Result<bool, Self::Error> { Ok(true) }
//! # }
//! let mut display = Display::new(NullInterface, Config::default());
//!
//! let _ = DrawTarget::clear(&mut display, Color::BLUE);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Color::YELLOW))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(100, 20), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Color::RED, 2))
//!     .draw(&mut display);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    prelude::Pixel,
    primitives::Rectangle,
};

use crate::color::Color;
use crate::config::{HEIGHT, WIDTH};
use crate::display::{Display, LINE_LEN};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::window::Window;

/// Part of `area` that lies on the panel, if any
fn visible(area: &Rectangle) -> Option<Window> {
    let left = i64::from(area.top_left.x);
    let top = i64::from(area.top_left.y);
    let x0 = left.max(0);
    let y0 = top.max(0);
    let x1 = (left + i64::from(area.size.width)).min(i64::from(WIDTH));
    let y1 = (top + i64::from(area.size.height)).min(i64::from(HEIGHT));
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    // Bounded by the panel size above
    Some(Window {
        x: x0 as u16,
        y: y0 as u16,
        w: (x1 - x0) as u16,
        h: (y1 - y0) as u16,
    })
}

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Color;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) else {
                continue;
            };
            self.pixel(x, y, color)?;
        }
        Ok(())
    }

    fn fill_contiguous<Iter>(&mut self, area: &Rectangle, colors: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Self::Color>,
    {
        let Some(window) = visible(area) else {
            return Ok(());
        };

        let stride = area.size.width as usize;
        let skip_left = (i64::from(window.x) - i64::from(area.top_left.x)) as usize;
        let skip_rows = (i64::from(window.y) - i64::from(area.top_left.y)) as usize;
        let len = window.w as usize;

        let mut colors = colors.into_iter();
        // Rows above the panel
        for _ in colors.by_ref().take(skip_rows * stride) {}

        let mut line = [0u16; LINE_LEN];
        for y in window.y..window.y + window.h {
            let mut filled = 0;
            for (col, color) in colors.by_ref().take(stride).enumerate() {
                if (skip_left..skip_left + len).contains(&col) {
                    line[col - skip_left] = color.raw();
                    filled += 1;
                }
            }
            if filled > 0 {
                self.write_line(window.x, y, &line[..filled])?;
            }
            if filled < len {
                // Iterator ran dry
                break;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        match visible(area) {
            Some(window) => self.fill(window.x, window.y, window.w, window.h, color),
            None => Ok(()),
        }
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(0, 0, WIDTH, HEIGHT, color)
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(u32::from(WIDTH), u32::from(HEIGHT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{memory_writes, mock_display, windows};
    use alloc::vec;
    use alloc::vec::Vec;
    use embedded_graphics::Drawable;
    use embedded_graphics::geometry::Point;
    use embedded_graphics::primitives::{Primitive, PrimitiveStyle};

    #[test]
    fn test_size() {
        let display = mock_display(true);
        assert_eq!(display.size(), Size::new(160, 80));
    }

    #[test]
    fn test_filled_rectangle_is_one_window() {
        let mut display = mock_display(true);
        Rectangle::new(Point::new(10, 10), Size::new(5, 3))
            .into_styled(PrimitiveStyle::with_fill(Color::RED))
            .draw(&mut display)
            .unwrap();

        let events = display.interface().events();
        assert_eq!(windows(&events), vec![((10, 14), (34, 36))]);
        assert_eq!(memory_writes(&events), vec![vec![0xF800; 15]]);
    }

    #[test]
    fn test_fill_solid_clips_negative_origin() {
        let mut display = mock_display(true);
        let area = Rectangle::new(Point::new(-5, -5), Size::new(10, 10));
        display.fill_solid(&area, Color::GREEN).unwrap();

        let events = display.interface().events();
        assert_eq!(windows(&events), vec![((0, 4), (24, 28))]);
        assert_eq!(memory_writes(&events)[0].len(), 25);
    }

    #[test]
    fn test_fill_solid_off_panel_is_noop() {
        let mut display = mock_display(true);
        let area = Rectangle::new(Point::new(160, 0), Size::new(10, 10));
        display.fill_solid(&area, Color::GREEN).unwrap();
        let area = Rectangle::new(Point::new(-20, 0), Size::new(10, 10));
        display.fill_solid(&area, Color::GREEN).unwrap();
        assert!(display.interface().events().is_empty());
    }

    #[test]
    fn test_fill_contiguous_clipped_keeps_stride() {
        let mut display = mock_display(true);
        let area = Rectangle::new(Point::new(-1, -1), Size::new(3, 3));
        let colors = (0..9u16).map(Color::from_raw);
        display.fill_contiguous(&area, colors).unwrap();

        let events = display.interface().events();
        assert_eq!(
            windows(&events),
            vec![((0, 1), (24, 24)), ((0, 1), (25, 25))]
        );
        assert_eq!(memory_writes(&events), vec![vec![4, 5], vec![7, 8]]);
    }

    #[test]
    fn test_fill_contiguous_short_iterator_stops() {
        let mut display = mock_display(true);
        let area = Rectangle::new(Point::new(0, 0), Size::new(4, 4));
        let colors = (0..6u16).map(Color::from_raw);
        display.fill_contiguous(&area, colors).unwrap();

        assert_eq!(
            memory_writes(&display.interface().events()),
            vec![vec![0, 1, 2, 3], vec![4, 5]]
        );
    }

    #[test]
    fn test_draw_iter_skips_off_panel_pixels() {
        let mut display = mock_display(true);
        let pixels: Vec<Pixel<Color>> = vec![
            Pixel(Point::new(3, 4), Color::WHITE),
            Pixel(Point::new(-1, 4), Color::WHITE),
            Pixel(Point::new(3, -1), Color::WHITE),
            Pixel(Point::new(160, 0), Color::WHITE),
            Pixel(Point::new(159, 79), Color::BLUE),
        ];
        display.draw_iter(pixels).unwrap();

        let events = display.interface().events();
        assert_eq!(
            windows(&events),
            vec![((3, 3), (28, 28)), ((159, 159), (103, 103))]
        );
        assert_eq!(memory_writes(&events), vec![vec![0xFFFF], vec![0x001F]]);
    }

    #[test]
    fn test_clear_to_color() {
        let mut display = mock_display(true);
        DrawTarget::clear(&mut display, Color::GRAY).unwrap();

        let events = display.interface().events();
        assert_eq!(windows(&events), vec![((0, 159), (24, 103))]);
        let writes = memory_writes(&events);
        assert_eq!(writes[0].len(), 160 * 80);
        assert!(writes[0].iter().all(|p| *p == 0x38E7));
    }
}
