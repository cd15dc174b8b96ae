// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Interface to ST7735R TFT displays (1.8 inches, 128×160 pixels)
//!
//! The controller is brought up by replaying three command tables (power
//! and timing setup, panel specific addressing window defaults, gamma and
//! display on).
//! Afterwards pixels are written by setting an addressing window and
//! streaming RGB565 colors into it.
//!
//! Two front-ends are available, [`Display`] for blocking buses and
//! [`AsyncDisplay`] for async buses.
//! Both implement the same operations on top of the same pure window and
//! table logic.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "async")]
mod r#async;
#[cfg(feature = "async")]
pub use self::r#async::Display as AsyncDisplay;

#[cfg(feature = "blocking")]
mod blocking;
#[cfg(feature = "blocking")]
pub use self::blocking::Display;

#[cfg(any(feature = "async", feature = "blocking"))]
mod pin;
#[cfg(any(feature = "async", feature = "blocking"))]
pub use self::pin::NoPin;

pub mod command;

pub mod table;
pub use self::table::Entry;

mod variant;
pub use self::variant::Variant;

mod orientation;
pub use self::orientation::Rotation;

mod window;
pub use self::window::DisplayState;
pub use self::window::Window;

mod color;
pub use self::color::Color;

mod config;
pub use self::config::Builder;
pub use self::config::Config;
pub use self::config::ResetStrategy;

mod error;
pub use self::error::ConfigError;
pub use self::error::Error;
pub use self::error::TableError;

#[cfg(feature = "draw-target")]
mod graphics;
