// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Command tables
//!
//! A command table is an ordered list of [`Entry`] records, each one a
//! command byte, up to [`MAX_ARGUMENTS`] argument bytes and an optional
//! delay to wait after the arguments were sent.
//!
//! The tables used during initialization are compiled in as typed
//! constants.
//! Tables can also be supplied in a compact byte encoding:
//!
//! ```text
//! count
//! opcode length argument* delay?   (repeated count times)
//! ```
//!
//! The high bit of `length` ([`DELAY_FLAG`]) signals that one delay byte
//! follows the arguments, the low seven bits are the number of arguments.
//! A delay byte of [`LONG_DELAY_SENTINEL`] stands for [`LONG_DELAY_MS`]
//! milliseconds, any other value is taken literally.
//!
//! ```
//! use st7735r_rs::table::decode;
//!
//! let mut entries = decode(&[1, 0xCD, 0x80, 255])?;
//! let entry = entries.next().transpose()?;
//! assert_eq!(entry.map(|entry| entry.delay_ms()), Some(Some(500)));
//! # Ok::<(), st7735r_rs::TableError>(())
//! ```

use crate::command;
use crate::TableError;

/// Flag in the length byte signalling that a delay byte follows
pub const DELAY_FLAG: u8 = 0x80;

/// Mask extracting the number of arguments from the length byte
pub const ARGUMENT_COUNT_MASK: u8 = 0x7F;

/// Delay byte value standing for a long delay
pub const LONG_DELAY_SENTINEL: u8 = 255;

/// Duration of a long delay in milliseconds
pub const LONG_DELAY_MS: u32 = 500;

/// Maximal number of arguments of a single command
pub const MAX_ARGUMENTS: usize = 16;

/// A command with its arguments and an optional delay
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Entry<'data> {
    /// Command byte
    opcode: u8,

    /// Argument bytes, sent in order after the command
    arguments: &'data [u8],

    /// Delay in milliseconds after the arguments were sent
    delay_ms: Option<u32>,
}

impl<'data> Entry<'data> {
    /// Create an entry without delay
    #[must_use]
    pub const fn new(opcode: u8, arguments: &'data [u8]) -> Self {
        Self {
            opcode,
            arguments,
            delay_ms: None,
        }
    }

    /// Add a delay in milliseconds after the entry
    #[must_use]
    pub const fn with_delay(self, delay_ms: u32) -> Self {
        Self {
            delay_ms: Some(delay_ms),
            ..self
        }
    }

    /// Get the command byte
    #[must_use]
    pub const fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Get the argument bytes
    #[must_use]
    pub const fn arguments(&self) -> &'data [u8] {
        self.arguments
    }

    /// Get the delay in milliseconds after the entry, if any
    #[must_use]
    pub const fn delay_ms(&self) -> Option<u32> {
        self.delay_ms
    }
}

/// Power, frame rate, inversion and color mode setup, common to all panels
pub const COMMON: &[Entry<'static>] = &[
    Entry::new(command::SOFTWARE_RESET, &[]).with_delay(150),
    Entry::new(command::SLEEP_OUT, &[]).with_delay(LONG_DELAY_MS),
    // Rate = fosc / (1 × 2 + 40) × (LINE + 2C + 2D)
    Entry::new(command::FRAME_RATE_CONTROL_1, &[0x01, 0x2C, 0x2D]),
    Entry::new(command::FRAME_RATE_CONTROL_2, &[0x01, 0x2C, 0x2D]),
    // Dot inversion, then line inversion
    Entry::new(
        command::FRAME_RATE_CONTROL_3,
        &[0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D],
    ),
    Entry::new(command::INVERSION_CONTROL, &[0x07]),
    // -4.6 V, auto mode
    Entry::new(command::POWER_CONTROL_1, &[0xA2, 0x02, 0x84]),
    // VGH25 = 2.4C, VGSEL = -10, VGH = 3 × AVDD
    Entry::new(command::POWER_CONTROL_2, &[0xC5]),
    // Opamp current small, boost frequency
    Entry::new(command::POWER_CONTROL_3, &[0x0A, 0x00]),
    // BCLK / 2, opamp current small and medium low
    Entry::new(command::POWER_CONTROL_4, &[0x8A, 0x2A]),
    Entry::new(command::POWER_CONTROL_5, &[0x8A, 0xEE]),
    Entry::new(command::VCOM_CONTROL_1, &[0x0E]),
    Entry::new(command::INVERSION_OFF, &[]),
    // Row and column address order, bottom to top refresh, RGB
    Entry::new(command::MEMORY_DATA_ACCESS_CONTROL, &[0xC0]),
    // 16 bits per pixel, 5-6-5
    Entry::new(command::INTERFACE_PIXEL_FORMAT, &[0x05]).with_delay(10),
];

/// Addressing window defaults for green tab panels (columns 2–129, rows 1–160)
pub const WINDOW_GREEN_TAB: &[Entry<'static>] = &[
    Entry::new(command::COLUMN_ADDRESS_SET, &[0x00, 0x02, 0x00, 0x7F + 0x02]),
    Entry::new(command::ROW_ADDRESS_SET, &[0x00, 0x01, 0x00, 0x9F + 0x01]),
];

/// Addressing window defaults for red and black tab panels (columns 0–127, rows 0–159)
pub const WINDOW_RED_TAB: &[Entry<'static>] = &[
    Entry::new(command::COLUMN_ADDRESS_SET, &[0x00, 0x00, 0x00, 0x7F]),
    Entry::new(command::ROW_ADDRESS_SET, &[0x00, 0x00, 0x00, 0x9F]),
];

/// Gamma curves, then normal mode and display on
pub const GAMMA_DISPLAY_ON: &[Entry<'static>] = &[
    Entry::new(
        command::GAMMA_POSITIVE_CORRECTION,
        &[
            0x02, 0x1c, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2d, 0x29, 0x25, 0x2B, 0x39, 0x00, 0x01,
            0x03, 0x10,
        ],
    ),
    Entry::new(
        command::GAMMA_NEGATIVE_CORRECTION,
        &[
            0x03, 0x1d, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D, 0x2E, 0x2E, 0x37, 0x3F, 0x00, 0x00,
            0x02, 0x10,
        ],
    ),
    Entry::new(command::NORMAL_DISPLAY_ON, &[]).with_delay(10),
    Entry::new(command::DISPLAY_ON, &[]).with_delay(100),
];

/// Decode a delay byte into milliseconds
#[must_use]
#[allow(clippy::cast_lossless, reason = "From is not const")]
pub const fn decode_delay(delay: u8) -> u32 {
    if delay == LONG_DELAY_SENTINEL {
        LONG_DELAY_MS
    } else {
        delay as u32
    }
}

/// Start decoding a table in compact byte encoding
///
/// # Errors
///
/// Returns an error if the table does not even contain the command count.
pub fn decode(bytes: &[u8]) -> Result<Entries<'_>, TableError> {
    let (&count, bytes) = bytes.split_first().ok_or(TableError::Truncated)?;
    Ok(Entries {
        bytes,
        remaining: count,
        done: false,
    })
}

/// Check that a table in compact byte encoding is well-formed
///
/// Returns the number of entries in the table.
///
/// # Errors
///
/// Returns the first decoding error found in the table.
pub fn validate(bytes: &[u8]) -> Result<usize, TableError> {
    decode(bytes)?.try_fold(0, |count, entry| entry.map(|_| count + 1))
}

/// Iterator over the entries of a table in compact byte encoding
///
/// Decoding stops after the first error.
#[derive(Clone, Debug)]
pub struct Entries<'data> {
    /// Bytes not decoded yet
    bytes: &'data [u8],

    /// Number of entries not decoded yet
    remaining: u8,

    /// Flag set once the table is exhausted or broken
    done: bool,
}

impl<'data> Entries<'data> {
    /// Decode the next entry from the remaining bytes
    fn decode_entry(&mut self) -> Result<Entry<'data>, TableError> {
        let (&opcode, rest) = self.bytes.split_first().ok_or(TableError::Truncated)?;
        let (&length, rest) = rest.split_first().ok_or(TableError::Truncated)?;

        let count = usize::from(length & ARGUMENT_COUNT_MASK);
        if count > MAX_ARGUMENTS {
            return Err(TableError::TooManyArguments(count));
        }
        if rest.len() < count {
            return Err(TableError::Truncated);
        }
        let (arguments, rest) = rest.split_at(count);

        let (delay_ms, rest) = if length & DELAY_FLAG == 0 {
            (None, rest)
        } else {
            let (&delay, rest) = rest.split_first().ok_or(TableError::Truncated)?;
            (Some(decode_delay(delay)), rest)
        };

        self.bytes = rest;
        Ok(Entry {
            opcode,
            arguments,
            delay_ms,
        })
    }
}

impl<'data> Iterator for Entries<'data> {
    type Item = Result<Entry<'data>, TableError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.remaining == 0 {
            self.done = true;
            return (!self.bytes.is_empty()).then_some(Err(TableError::TrailingBytes));
        }

        self.remaining -= 1;
        let entry = self.decode_entry();
        if entry.is_err() {
            self.done = true;
        }
        Some(entry)
    }
}
