// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Screen orientation

/// Memory data access control flag for mirrored rows
const MIRROR_Y: u8 = 0x80;

/// Memory data access control flag for mirrored columns
const MIRROR_X: u8 = 0x40;

/// Memory data access control flag for exchanged rows and columns
const SWAP_XY: u8 = 0x20;

/// Memory data access control flag for RGB color order
const RGB: u8 = 0x00;

/// A screen rotation
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Rotation {
    /// Portrait
    #[default]
    Rotate0,

    /// Landscape
    Rotate90,

    /// Portrait, upside down
    Rotate180,

    /// Landscape, upside down
    Rotate270,
}

impl Rotation {
    /// Create a rotation from any integer, taken modulo 4
    #[must_use]
    pub const fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Self::Rotate0,
            1 => Self::Rotate90,
            2 => Self::Rotate180,
            _ => Self::Rotate270,
        }
    }

    /// Get the index of this rotation, between 0 and 3
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Rotate0 => 0,
            Self::Rotate90 => 1,
            Self::Rotate180 => 2,
            Self::Rotate270 => 3,
        }
    }

    /// Get the memory data access control byte for this rotation
    #[must_use]
    pub const fn memory_access_control(self) -> u8 {
        match self {
            Self::Rotate0 => MIRROR_X | MIRROR_Y | RGB,
            Self::Rotate90 => MIRROR_Y | SWAP_XY | RGB,
            Self::Rotate180 => RGB,
            Self::Rotate270 => MIRROR_X | SWAP_XY | RGB,
        }
    }

    /// Check whether this rotation exchanges width and height
    #[must_use]
    pub const fn is_swapped(self) -> bool {
        self.memory_access_control() & SWAP_XY != 0
    }

    /// Get the logical size for a panel of the given native size
    #[must_use]
    pub const fn logical_size(self, native_width: u16, native_height: u16) -> (u16, u16) {
        if self.is_swapped() {
            (native_height, native_width)
        } else {
            (native_width, native_height)
        }
    }
}

impl From<u8> for Rotation {
    fn from(index: u8) -> Self {
        Self::from_index(i32::from(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_access_control_bytes() {
        assert_eq!(Rotation::Rotate0.memory_access_control(), 0xC0);
        assert_eq!(Rotation::Rotate90.memory_access_control(), 0xA0);
        assert_eq!(Rotation::Rotate180.memory_access_control(), 0x00);
        assert_eq!(Rotation::Rotate270.memory_access_control(), 0x60);
    }

    #[test]
    fn index_is_taken_modulo_four() {
        for index in -12..12 {
            let rotation = Rotation::from_index(index);
            let shifted = Rotation::from_index(index + 4);
            assert_eq!(rotation, shifted);
            assert_eq!(
                rotation.memory_access_control(),
                shifted.memory_access_control()
            );
            assert_eq!(
                rotation.logical_size(128, 160),
                shifted.logical_size(128, 160)
            );
        }
        assert_eq!(Rotation::from_index(-1), Rotation::Rotate270);
        assert_eq!(Rotation::from(7), Rotation::Rotate270);
        assert_eq!(Rotation::from(u8::MAX), Rotation::Rotate270);
    }

    #[test]
    fn index_round_trip() {
        for index in 0..4 {
            assert_eq!(i32::from(Rotation::from_index(index).index()), index);
        }
    }

    #[test]
    fn landscape_swaps_size() {
        assert_eq!(Rotation::Rotate0.logical_size(128, 160), (128, 160));
        assert_eq!(Rotation::Rotate90.logical_size(128, 160), (160, 128));
        assert_eq!(Rotation::Rotate180.logical_size(128, 160), (128, 160));
        assert_eq!(Rotation::Rotate270.logical_size(128, 160), (160, 128));
    }
}
