// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files License-MIT.txt and License-Apache-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Data structures and functions for error handling

#[cfg(any(feature = "async", feature = "blocking"))]
use embedded_hal::digital::Error as DigitalError;
#[cfg(any(feature = "async", feature = "blocking"))]
use embedded_hal::digital::ErrorKind as DigitalErrorKind;
#[cfg(any(feature = "async", feature = "blocking"))]
use embedded_hal::spi::Error as SpiError;
#[cfg(any(feature = "async", feature = "blocking"))]
use embedded_hal::spi::ErrorKind as SpiErrorKind;

/// An error
///
/// Any error during initialization leaves the controller in an undefined
/// configuration, and the display must be initialized again.
#[derive(Debug, PartialEq)]
pub enum Error {
    #[cfg(any(feature = "async", feature = "blocking"))]
    /// An error in the underlying SPI bus
    Spi(SpiErrorKind),

    #[cfg(any(feature = "async", feature = "blocking"))]
    /// An error in the underlying digital system
    Digital(DigitalErrorKind),

    /// A malformed command table
    Table(TableError),
}

#[cfg(any(feature = "async", feature = "blocking"))]
impl<E> From<E> for Error
where
    E: SpiError,
{
    fn from(error: E) -> Self {
        Self::Spi(error.kind())
    }
}

#[cfg(any(feature = "async", feature = "blocking"))]
impl Error {
    /// Convert a digital error to an error
    #[allow(clippy::needless_pass_by_value, reason = "Used as argument to map_err")]
    pub fn from_digital<E>(error: E) -> Self
    where
        E: DigitalError,
    {
        Self::Digital(error.kind())
    }
}

/// An error in a command table in compact byte encoding
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TableError {
    /// The table ended in the middle of an entry
    Truncated,

    /// An entry declared more arguments than a command accepts
    TooManyArguments(usize),

    /// The table continued after its last entry
    TrailingBytes,
}

/// An error in a display configuration
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The width or the height is zero
    EmptyDimension,

    /// A window on the panel, offset by its variant, would end past address 255
    OutOfAddressRange,

    /// The panel variant name was not recognized
    UnknownVariant,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TableError {}

#[cfg(feature = "std")]
impl core::fmt::Display for TableError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Self::Truncated => write!(f, "command table is truncated"),
            Self::TooManyArguments(count) => {
                write!(f, "command table entry has {count} arguments")
            }
            Self::TrailingBytes => write!(f, "command table has trailing bytes"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Self::EmptyDimension => write!(f, "display size is empty"),
            Self::OutOfAddressRange => write!(f, "display does not fit the frame buffer"),
            Self::UnknownVariant => write!(f, "unknown display variant"),
        }
    }
}
