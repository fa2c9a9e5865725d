//! Recording mocks shared by the unit tests

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use embedded_hal::delay::DelayNs;

use crate::command::{COLUMN_ADDRESS_SET, MEMORY_WRITE, ROW_ADDRESS_SET};
use crate::config::Config;
use crate::display::Display;
use crate::interface::DisplayInterface;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Init,
    HardwareReset,
    Command(u8, Vec<u8>),
    Words(u8, Vec<u16>),
    Delay(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

#[derive(Debug)]
pub struct MockInterface {
    log: Log,
    has_reset: bool,
}

impl MockInterface {
    pub fn new(has_reset: bool) -> Self {
        Self {
            log: Rc::default(),
            has_reset,
        }
    }

    pub fn log(&self) -> Log {
        Rc::clone(&self.log)
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    fn push(&self, event: Event) {
        self.log.borrow_mut().push(event);
    }
}

impl DisplayInterface for MockInterface {
    type Error = core::convert::Infallible;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.push(Event::Init);
        Ok(())
    }

    fn send_command(&mut self, command: u8, args: &[u8]) -> Result<(), Self::Error> {
        self.push(Event::Command(command, args.to_vec()));
        Ok(())
    }

    fn send_words(&mut self, command: u8, words: &[u16]) -> Result<(), Self::Error> {
        self.push(Event::Words(command, words.to_vec()));
        Ok(())
    }

    fn send_repeated_word(
        &mut self,
        command: u8,
        word: u16,
        count: usize,
    ) -> Result<(), Self::Error> {
        self.push(Event::Words(command, vec![word; count]));
        Ok(())
    }

    fn send_repeated_byte(
        &mut self,
        command: u8,
        byte: u8,
        count: usize,
    ) -> Result<(), Self::Error> {
        self.push(Event::Command(command, vec![byte; count]));
        Ok(())
    }

    fn hardware_reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<bool, Self::Error> {
        if self.has_reset {
            self.push(Event::HardwareReset);
        }
        Ok(self.has_reset)
    }
}

/// Delay that records requested milliseconds into the interface log
pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: Log) -> Self {
        Self { log }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Delay(ms));
    }
}

pub fn mock_display(has_reset: bool) -> Display<MockInterface> {
    Display::new(MockInterface::new(has_reset), Config::default())
}

fn range(args: &[u8]) -> (u16, u16) {
    (
        u16::from_be_bytes([args[0], args[1]]),
        u16::from_be_bytes([args[2], args[3]]),
    )
}

/// Programmed windows as ((col_start, col_end), (row_start, row_end))
pub fn windows(events: &[Event]) -> Vec<((u16, u16), (u16, u16))> {
    let mut out = Vec::new();
    let mut columns = None;
    for event in events {
        match event {
            Event::Command(COLUMN_ADDRESS_SET, args) => columns = Some(range(args)),
            Event::Command(ROW_ADDRESS_SET, args) => {
                if let Some(cols) = columns.take() {
                    out.push((cols, range(args)));
                }
            }
            _ => {}
        }
    }
    out
}

/// Pixel payload of every memory write, in order
pub fn memory_writes(events: &[Event]) -> Vec<Vec<u16>> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Words(MEMORY_WRITE, words) => Some(words.clone()),
            _ => None,
        })
        .collect()
}
