// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files License-MIT.txt and License-Apache-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! A 16 bits RGB565 color

#[cfg(feature = "draw-target")]
use embedded_graphics_core::pixelcolor::raw::RawU16;
#[cfg(feature = "draw-target")]
use embedded_graphics_core::pixelcolor::Rgb565;
#[cfg(feature = "draw-target")]
use embedded_graphics_core::prelude::RawData;

/// A color packed as 5 bits red, 6 bits green and 5 bits blue
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Color(u16);

impl Color {
    /// Black
    pub const BLACK: Self = Self(0x0000);

    /// Blue
    pub const BLUE: Self = Self(0x001F);

    /// Red
    pub const RED: Self = Self(0xF800);

    /// Green
    pub const GREEN: Self = Self(0x07E0);

    /// Cyan
    pub const CYAN: Self = Self(0x07FF);

    /// Magenta
    pub const MAGENTA: Self = Self(0xF81F);

    /// Yellow
    pub const YELLOW: Self = Self(0xFFE0);

    /// White
    pub const WHITE: Self = Self(0xFFFF);

    /// Create a color from its packed representation
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Create a color from 8 bits channels, dropping their lowest bits
    #[must_use]
    #[allow(clippy::cast_lossless, reason = "From is not usable in const functions")]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        let red = (red as u16 & 0xF8) << 8;
        let green = (green as u16 & 0xFC) << 3;
        let blue = blue as u16 >> 3;
        Self(red | green | blue)
    }

    /// Get the packed representation
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Get the two bytes sent to the display, high byte first
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(feature = "draw-target")]
impl From<Rgb565> for Color {
    fn from(color: Rgb565) -> Self {
        Self(RawU16::from(color).into_inner())
    }
}

#[cfg(feature = "draw-target")]
impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        RawU16::new(color.0).into()
    }
}
