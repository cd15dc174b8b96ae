// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files License-MIT.txt and License-Apache-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Commands

/// Command for software reset
pub const SOFTWARE_RESET: u8 = 0x01;

/// Command for entering sleep mode
pub const SLEEP_IN: u8 = 0x10;

/// Command for leaving sleep mode
pub const SLEEP_OUT: u8 = 0x11;

/// Command for normal display mode on
pub const NORMAL_DISPLAY_ON: u8 = 0x13;

/// Command for display inversion off
pub const INVERSION_OFF: u8 = 0x20;

/// Command for display inversion on
pub const INVERSION_ON: u8 = 0x21;

/// Command for display off
pub const DISPLAY_OFF: u8 = 0x28;

/// Command for display on
pub const DISPLAY_ON: u8 = 0x29;

/// Command for column address set
pub const COLUMN_ADDRESS_SET: u8 = 0x2A;

/// Command for row address set
pub const ROW_ADDRESS_SET: u8 = 0x2B;

/// Command for memory write
pub const MEMORY_WRITE: u8 = 0x2C;

/// Command for memory data access control
pub const MEMORY_DATA_ACCESS_CONTROL: u8 = 0x36;

/// Command for interface pixel format
pub const INTERFACE_PIXEL_FORMAT: u8 = 0x3A;

/// Command for frame rate control in normal mode
pub const FRAME_RATE_CONTROL_1: u8 = 0xB1;

/// Command for frame rate control in idle mode
pub const FRAME_RATE_CONTROL_2: u8 = 0xB2;

/// Command for frame rate control in partial mode
pub const FRAME_RATE_CONTROL_3: u8 = 0xB3;

/// Command for display inversion control
pub const INVERSION_CONTROL: u8 = 0xB4;

/// Command for power control 1
pub const POWER_CONTROL_1: u8 = 0xC0;

/// Command for power control 2
pub const POWER_CONTROL_2: u8 = 0xC1;

/// Command for power control 3 (normal mode)
pub const POWER_CONTROL_3: u8 = 0xC2;

/// Command for power control 4 (idle mode)
pub const POWER_CONTROL_4: u8 = 0xC3;

/// Command for power control 5 (partial mode)
pub const POWER_CONTROL_5: u8 = 0xC4;

/// Command for VCOM control 1
pub const VCOM_CONTROL_1: u8 = 0xC5;

/// Command for positive gamma correction
pub const GAMMA_POSITIVE_CORRECTION: u8 = 0xE0;

/// Command for negative gamma correction
pub const GAMMA_NEGATIVE_CORRECTION: u8 = 0xE1;
