// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! A placeholder for unconnected pins

use core::convert::Infallible;

use embedded_hal::digital::ErrorType;
use embedded_hal::digital::OutputPin;

/// An output pin that is not connected
///
/// Boards without a reset line pass this as reset pin, together with
/// [`ResetStrategy::Software`](crate::ResetStrategy::Software).
#[derive(Copy, Clone, Debug, Default)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
