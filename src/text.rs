//! Text rendering with the built-in font
//!
//! Characters are drawn as 7x16 glyphs through
//! [`Display::draw_mono`], followed by a one-pixel background column so that
//! runs of text have a solid background. Strings advance 8 pixels per
//! character and stop at the right edge of the panel: a character is drawn
//! only if its left column is on the panel, and may then be clipped.
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use st7735s::{Color, Config, Display, DisplayInterface};
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
//! let _ = display.draw_string(0, 0, "Hello", Color::WHITE, Color::BLACK);
//! let _ = display.draw_char(0, 16, '!', Color::YELLOW, Color::BLUE);
//! ```

use log::trace;

use crate::color::Color;
use crate::display::{Display, DisplayResult};
use crate::error::Error;
use crate::font::{self, GLYPH_GAP, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::interface::DisplayInterface;

/// Horizontal advance per character, glyph plus gap
pub const CHAR_ADVANCE: u16 = GLYPH_WIDTH + GLYPH_GAP;

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Horizontal advance per character in pixels
    pub fn char_width(&self) -> u16 {
        CHAR_ADVANCE
    }

    /// Character height in pixels
    pub fn char_height(&self) -> u16 {
        GLYPH_HEIGHT
    }

    /// Draw one character with its top-left corner at (x, y)
    ///
    /// Characters without a glyph (see [`font::glyph`]) are skipped without
    /// any bus traffic.
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        ch: char,
        foreground: Color,
        background: Color,
    ) -> DisplayResult<I> {
        let Some(glyph) = font::glyph(ch) else {
            trace!("st7735s: no glyph for {:?}", ch);
            return Ok(());
        };
        self.draw_mono(x, y, GLYPH_WIDTH, GLYPH_HEIGHT, glyph, foreground, background)?;
        self.fill(
            x.saturating_add(GLYPH_WIDTH),
            y,
            GLYPH_GAP,
            GLYPH_HEIGHT,
            background,
        )
    }

    /// Draw a string left to right starting at (x, y)
    ///
    /// Stops once the cursor reaches the panel width; no wrapping. A
    /// character that starts on the panel is drawn even if its glyph is
    /// clipped at the right edge. Returns the cursor position after the last
    /// character drawn.
    pub fn draw_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        foreground: Color,
        background: Color,
    ) -> Result<u16, Error<I>> {
        let mut cursor = x;
        for ch in text.chars() {
            if cursor >= self.width() {
                break;
            }
            self.draw_char(cursor, y, ch, foreground, background)?;
            cursor += CHAR_ADVANCE;
        }
        Ok(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{COLUMN_ADDRESS_SET, MEMORY_WRITE};
    use crate::testing::{Event, memory_writes, mock_display, windows};
    use alloc::vec;
    use alloc::vec::Vec;

    fn column_sets(events: &[Event]) -> Vec<Vec<u8>> {
        events
            .iter()
            .filter_map(|e| match e {
                Event::Command(COLUMN_ADDRESS_SET, args) => Some(args.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_char_metrics() {
        let display = mock_display(true);
        assert_eq!(display.char_width(), 8);
        assert_eq!(display.char_height(), 16);
    }

    #[test]
    fn test_draw_char_window() {
        let mut display = mock_display(true);
        display
            .draw_char(0, 0, 'A', Color::WHITE, Color::BLACK)
            .unwrap();

        let events = display.interface().events();
        let wins = windows(&events);
        // 16 glyph rows plus the gap column
        assert_eq!(wins.len(), 17);
        assert_eq!(wins[0], ((0, 6), (24, 24)));
        assert_eq!(wins[15], ((0, 6), (39, 39)));
        assert_eq!(wins[16], ((7, 7), (24, 39)));

        // Glyph column range spans 0..=6 in controller memory
        assert_eq!(column_sets(&events)[0], vec![0, 0, 0, 6]);
    }

    #[test]
    fn test_draw_char_pixels_match_glyph_bits() {
        let mut display = mock_display(true);
        let fg = Color::YELLOW;
        let bg = Color::BLUE;
        display.draw_char(20, 10, 'A', fg, bg).unwrap();

        let glyph = font::glyph('A').unwrap();
        let writes = memory_writes(&display.interface().events());
        assert_eq!(writes.len(), 17);
        for row in 0..16usize {
            for col in 0..7usize {
                let set = glyph[(row / 8) * 7 + col] & (1 << (row % 8)) != 0;
                let expected = if set { fg.raw() } else { bg.raw() };
                assert_eq!(writes[row][col], expected, "row {row} col {col}");
            }
        }
        assert_eq!(writes[16], vec![bg.raw(); 16]);
    }

    #[test]
    fn test_draw_char_unsupported_is_noop() {
        let mut display = mock_display(true);
        display
            .draw_char(0, 0, '\x7F', Color::WHITE, Color::BLACK)
            .unwrap();
        display
            .draw_char(0, 0, '\u{263A}', Color::WHITE, Color::BLACK)
            .unwrap();
        assert!(display.interface().events().is_empty());
    }

    #[test]
    fn test_draw_char_tilde() {
        let mut display = mock_display(true);
        display
            .draw_char(0, 0, '~', Color::WHITE, Color::BLACK)
            .unwrap();

        let writes = memory_writes(&display.interface().events());
        assert_eq!(writes.len(), 17);
        assert_eq!(writes[0], vec![0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0]);
        assert!(writes[1..16].iter().all(|line| line == &vec![0; 7]));
    }

    #[test]
    fn test_draw_char_at_right_edge_is_clipped() {
        let mut display = mock_display(true);
        display
            .draw_char(156, 0, 'H', Color::WHITE, Color::BLACK)
            .unwrap();

        let events = display.interface().events();
        let writes = memory_writes(&events);
        // Glyph rows clipped to 4 columns, gap column at x = 163 dropped
        assert_eq!(writes.len(), 16);
        assert!(writes.iter().all(|line| line.len() == 4));
    }

    #[test]
    fn test_draw_string_advances_cursor() {
        let mut display = mock_display(true);
        let end = display
            .draw_string(10, 0, "abc", Color::WHITE, Color::BLACK)
            .unwrap();
        assert_eq!(end, 10 + 3 * 8);

        let events = display.interface().events();
        let glyph_starts: Vec<u16> = windows(&events)
            .iter()
            .filter(|(cols, _)| cols.1 - cols.0 == 6)
            .map(|(cols, _)| cols.0)
            .collect();
        let mut starts = glyph_starts.clone();
        starts.dedup();
        assert_eq!(starts, vec![10, 18, 26]);
    }

    #[test]
    fn test_draw_string_stops_at_right_edge() {
        let mut display = mock_display(true);
        // 25 characters from x = 0: only 20 start before x = 160
        let text = "ABCDEFGHIJKLMNOPQRSTUVWXY";
        let end = display
            .draw_string(0, 0, text, Color::WHITE, Color::BLACK)
            .unwrap();
        assert_eq!(end, 160);

        let events = display.interface().events();
        let memory_commands = events
            .iter()
            .filter(|e| matches!(e, Event::Words(MEMORY_WRITE, _)))
            .count();
        assert_eq!(memory_commands, 20 * 17);
    }

    #[test]
    fn test_draw_string_starting_off_panel_draws_nothing() {
        let mut display = mock_display(true);
        let end = display
            .draw_string(160, 0, "x", Color::WHITE, Color::BLACK)
            .unwrap();
        assert_eq!(end, 160);
        assert!(display.interface().events().is_empty());
    }

    #[test]
    fn test_draw_string_partial_last_character() {
        let mut display = mock_display(true);
        // Second character starts at x = 157 and is clipped to 3 columns
        display
            .draw_string(149, 0, "ab", Color::WHITE, Color::BLACK)
            .unwrap();

        let writes = memory_writes(&display.interface().events());
        assert_eq!(writes.len(), 17 + 16);
        assert!(writes[17..].iter().all(|line| line.len() == 3));
    }

    #[test]
    fn test_draw_string_skips_unsupported_but_advances() {
        let mut display = mock_display(true);
        let end = display
            .draw_string(0, 0, "a\x7Fb", Color::WHITE, Color::BLACK)
            .unwrap();
        assert_eq!(end, 24);

        let wins = windows(&display.interface().events());
        assert!(wins.iter().any(|(cols, _)| cols.0 == 16));
        assert!(!wins.iter().any(|(cols, _)| cols.0 == 8));
    }
}
