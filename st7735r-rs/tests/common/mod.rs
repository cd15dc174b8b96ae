//! Recording mocks for the embedded-hal traits used by the display
//!
//! All mocks share one [`Bus`], which logs every command byte, data byte,
//! reset line edge and delay in the order they happen.

#![allow(dead_code)]

use std::cell::Cell;
use std::cell::RefCell;
use std::convert::Infallible;
use std::future::Future;
use std::pin::pin;
use std::rc::Rc;
use std::sync::Arc;
use std::task::Context;
use std::task::Poll;
use std::task::Wake;
use std::task::Waker;

use embedded_hal::spi::ErrorKind;
use embedded_hal::spi::Operation;

/// Something observable on the display lines
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// A byte written while DC was low
    Command(u8),

    /// A byte written while DC was high
    Data(u8),

    /// The reset line was driven high (`true`) or low (`false`)
    Reset(bool),

    /// A delay in milliseconds
    Delay(u32),
}

/// Shared state of all mocks
#[derive(Clone, Default)]
pub struct Bus {
    events: Rc<RefCell<Vec<Event>>>,
    dc_high: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
    failing_write: Rc<Cell<Option<usize>>>,
}

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the SPI write with the given index (starting from 0) and all
    /// later ones fail
    pub fn fail_from_write(&self, index: usize) {
        self.failing_write.set(Some(index));
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn commands(&self) -> Vec<u8> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match *event {
                Event::Command(command) => Some(command),
                _ => None,
            })
            .collect()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match *event {
                Event::Delay(delay) => Some(delay),
                _ => None,
            })
            .collect()
    }

    /// Group the logged bytes into commands followed by their data
    pub fn transactions(&self) -> Vec<(u8, Vec<u8>)> {
        let mut transactions: Vec<(u8, Vec<u8>)> = Vec::new();
        for event in self.events.borrow().iter() {
            match *event {
                Event::Command(command) => transactions.push((command, Vec::new())),
                Event::Data(datum) => {
                    if let Some(last) = transactions.last_mut() {
                        last.1.push(datum);
                    }
                }
                Event::Reset(_) | Event::Delay(_) => {}
            }
        }
        transactions
    }

    fn write(&self, bytes: &[u8]) -> Result<(), SpiFailure> {
        let index = self.writes.get();
        self.writes.set(index + 1);
        if self.failing_write.get().is_some_and(|failing| index >= failing) {
            return Err(SpiFailure);
        }

        let dc_high = self.dc_high.get();
        self.events.borrow_mut().extend(bytes.iter().map(|&byte| {
            if dc_high {
                Event::Data(byte)
            } else {
                Event::Command(byte)
            }
        }));
        Ok(())
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

/// Error returned by a failing SPI write
#[derive(Debug)]
pub struct SpiFailure;

impl embedded_hal::spi::Error for SpiFailure {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// SPI device logging written bytes
pub struct Spi(pub Bus);

impl embedded_hal::spi::ErrorType for Spi {
    type Error = SpiFailure;
}

impl embedded_hal::spi::SpiDevice for Spi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        for operation in operations.iter() {
            if let Operation::Write(bytes) = *operation {
                self.0.write(bytes)?;
            }
        }
        Ok(())
    }
}

impl embedded_hal_async::spi::SpiDevice for Spi {
    async fn transaction(
        &mut self,
        operations: &mut [Operation<'_, u8>],
    ) -> Result<(), Self::Error> {
        embedded_hal::spi::SpiDevice::transaction(self, operations)
    }
}

/// Data/command pin
pub struct DcPin(pub Bus);

impl embedded_hal::digital::ErrorType for DcPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for DcPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.dc_high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.dc_high.set(true);
        Ok(())
    }
}

/// Reset pin logging its edges
pub struct ResetPin(pub Bus);

impl embedded_hal::digital::ErrorType for ResetPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for ResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::Reset(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::Reset(true));
        Ok(())
    }
}

/// Delay logging its duration instead of waiting
pub struct Delay(pub Bus);

impl embedded_hal::delay::DelayNs for Delay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.0.push(Event::Delay(ms));
    }
}

impl embedded_hal_async::delay::DelayNs for Delay {
    async fn delay_ns(&mut self, _ns: u32) {}

    async fn delay_ms(&mut self, ms: u32) {
        self.0.push(Event::Delay(ms));
    }
}

/// Waker doing nothing, all mock futures complete on first poll
struct NoopWake;

impl Wake for NoopWake {
    fn wake(self: Arc<Self>) {}
}

/// Run a future to completion on the current thread
pub fn block_on<F: Future>(future: F) -> F::Output {
    let mut future = pin!(future);
    let waker = Waker::from(Arc::new(NoopWake));
    let mut context = Context::from_waker(&waker);
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut context) {
            return output;
        }
    }
}

/// Expected column and row address set transactions for a window
pub fn window_transactions(x0: u8, y0: u8, x1: u8, y1: u8) -> Vec<(u8, Vec<u8>)> {
    vec![(0x2A, vec![0, x0, 0, x1]), (0x2B, vec![0, y0, 0, y1])]
}

/// Color bytes of `count` pixels of the same color
pub fn repeated(color: u16, count: usize) -> Vec<u8> {
    color.to_be_bytes().repeat(count)
}
