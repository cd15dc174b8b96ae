// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Display configuration

use crate::ConfigError;
use crate::DisplayState;
use crate::Variant;

/// Native width of 1.8 inches panels
pub const DEFAULT_WIDTH: u16 = 128;

/// Native height of 1.8 inches panels
pub const DEFAULT_HEIGHT: u16 = 160;

/// Highest address the column and row address set commands can carry
///
/// A single pixel window ends one address past the pixel, so the last
/// pixel of a panel must lie strictly before this address.
const LAST_ADDRESS: u16 = 255;

/// Procedure bringing the controller to its post-reset state
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ResetStrategy {
    /// Toggle the reset line
    #[default]
    Hardware,

    /// Send a software reset command, for boards without a reset line
    Software,
}

/// Display configuration
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Panel variant
    variant: Variant,

    /// Reset procedure
    reset: ResetStrategy,

    /// Native width
    width: u16,

    /// Native height
    height: u16,
}

impl Config {
    /// Start building a configuration
    #[must_use]
    pub const fn builder() -> Builder {
        Builder::new()
    }

    /// Get the panel variant
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Get the reset procedure
    #[must_use]
    pub const fn reset(&self) -> ResetStrategy {
        self.reset
    }

    /// Get the native width
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the native height
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the display state right after initialization
    #[must_use]
    pub const fn initial_state(&self) -> DisplayState {
        DisplayState::new(self.variant, self.width, self.height)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            reset: ResetStrategy::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Builder for [`Config`]
#[derive(Copy, Clone, Debug)]
pub struct Builder {
    /// Panel variant
    variant: Variant,

    /// Reset procedure
    reset: ResetStrategy,

    /// Native width
    width: u16,

    /// Native height
    height: u16,
}

impl Builder {
    /// Create a builder with the defaults of a red tab 128×160 panel reset through its reset line
    #[must_use]
    pub const fn new() -> Self {
        Self {
            variant: Variant::RedTab,
            reset: ResetStrategy::Hardware,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Set the panel variant
    #[must_use]
    pub const fn variant(self, variant: Variant) -> Self {
        Self { variant, ..self }
    }

    /// Set the reset procedure
    #[must_use]
    pub const fn reset(self, reset: ResetStrategy) -> Self {
        Self { reset, ..self }
    }

    /// Set the native size
    #[must_use]
    pub const fn size(self, width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the size is empty, or if any window on the panel
    /// offset by the variant would end past address 255.
    pub fn build(self) -> Result<Config, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyDimension);
        }

        let columns = u32::from(self.width) + u32::from(self.variant.col_start());
        let rows = u32::from(self.height) + u32::from(self.variant.row_start());
        let last = u32::from(LAST_ADDRESS);
        if columns > last || rows > last {
            return Err(ConfigError::OutOfAddressRange);
        }

        Ok(Config {
            variant: self.variant,
            reset: self.reset,
            width: self.width,
            height: self.height,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
