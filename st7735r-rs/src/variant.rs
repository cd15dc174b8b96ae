// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Panel variants

use core::str::FromStr;

use crate::table;
use crate::ConfigError;
use crate::Entry;

/// Memory data access control byte selecting the color filter of black tab panels
const BLACK_TAB_COLOR_ORDER: u8 = 0xC0;

/// A panel variant, named after the color of the tab on its protective film
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Variant {
    /// Green tab, frame buffer shifted by two columns and one row
    GreenTab,

    /// Red tab
    #[default]
    RedTab,

    /// Black tab, red tab addressing with a color filter override
    BlackTab,
}

impl Variant {
    /// Get the column offset added to every addressing window
    #[must_use]
    pub const fn col_start(self) -> u16 {
        match self {
            Self::GreenTab => 2,
            Self::RedTab | Self::BlackTab => 0,
        }
    }

    /// Get the row offset added to every addressing window
    #[must_use]
    pub const fn row_start(self) -> u16 {
        match self {
            Self::GreenTab => 1,
            Self::RedTab | Self::BlackTab => 0,
        }
    }

    /// Get the table setting the default addressing window
    #[must_use]
    pub const fn window_table(self) -> &'static [Entry<'static>] {
        match self {
            Self::GreenTab => table::WINDOW_GREEN_TAB,
            Self::RedTab | Self::BlackTab => table::WINDOW_RED_TAB,
        }
    }

    /// Get the memory data access control byte to send after initialization, if any
    #[must_use]
    pub const fn color_order_override(self) -> Option<u8> {
        match self {
            Self::BlackTab => Some(BLACK_TAB_COLOR_ORDER),
            Self::GreenTab | Self::RedTab => None,
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    /// Parse a variant from `green`, `red` or `black`, optionally followed by
    /// `tab`, `-tab` or `_tab`, ignoring case
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let color = text
            .len()
            .checked_sub(3)
            .and_then(|split| text.split_at_checked(split))
            .filter(|&(_, suffix)| suffix.eq_ignore_ascii_case("tab"))
            .map_or(text, |(color, _)| color.trim_end_matches(['-', '_']));

        if color.eq_ignore_ascii_case("green") {
            Ok(Self::GreenTab)
        } else if color.eq_ignore_ascii_case("red") {
            Ok(Self::RedTab)
        } else if color.eq_ignore_ascii_case("black") {
            Ok(Self::BlackTab)
        } else {
            Err(ConfigError::UnknownVariant)
        }
    }
}
