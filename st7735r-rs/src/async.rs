// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Async display

use log::debug;
use log::log_enabled;
use log::trace;
use log::Level::Trace;

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::spi::SpiDevice;

use embedded_hal::digital::OutputPin;

use crate::command;
use crate::table;
use crate::Color;
use crate::Config;
use crate::DisplayState;
use crate::Entry;
use crate::Error;
use crate::ResetStrategy;
use crate::Rotation;
use crate::Window;

/// Delay before talking to the controller after power on
const POWER_ON_DELAY_MS: u32 = 50;

/// Delay after each edge of the reset line
const HARDWARE_RESET_DELAY_MS: u32 = 500;

/// Delay after a software reset
const SOFTWARE_RESET_DELAY_MS: u32 = 500;

/// Delay after entering sleep mode
const SLEEP_IN_DELAY_MS: u32 = 120;

/// Number of pixels sent in a single SPI write
const PIXELS_PER_WRITE: usize = 32;

/// An ST7735R TFT screen
pub struct Display<SPI: SpiDevice, RST: OutputPin, DC: OutputPin, DELAY: DelayNs> {
    /// SPI interface
    spi: SPI,

    /// Reset pin
    rst: RST,

    /// DC pin
    dc: DC,

    /// Delay
    delay: DELAY,

    /// Configuration
    config: Config,

    /// Current geometry
    state: DisplayState,

    /// Flag to force writing one byte at the time
    individual_writes: bool,
}

impl<SPI, RST, DC, DELAY> Display<SPI, RST, DC, DELAY>
where
    SPI: SpiDevice,
    RST: OutputPin,
    DC: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new display
    #[must_use]
    pub fn new(spi: SPI, rst: RST, dc: DC, delay: DELAY, config: Config) -> Self {
        Self {
            spi,
            rst,
            dc,
            delay,
            config,
            state: config.initial_state(),
            individual_writes: false,
        }
    }

    /// Create a new display, writing individual bytes to SPI
    #[must_use]
    pub fn new_with_individual_writes(
        spi: SPI,
        rst: RST,
        dc: DC,
        delay: DELAY,
        config: Config,
    ) -> Self {
        Self {
            individual_writes: true,
            ..Self::new(spi, rst, dc, delay, config)
        }
    }

    /// Initialize display
    ///
    /// Reset the controller and replay the common, addressing window and
    /// display on tables.
    /// Afterwards the display shows whatever its frame buffer contains, in
    /// portrait orientation.
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails, in which case
    /// the display must be initialized again
    pub async fn initialize(&mut self) -> Result<(), Error> {
        let variant = self.config.variant();
        debug!("Initialize display ({variant:?})");

        self.delay.delay_ms(POWER_ON_DELAY_MS).await;

        match self.config.reset() {
            ResetStrategy::Hardware => self.hardware_reset().await?,
            ResetStrategy::Software => self.software_reset().await?,
        }

        debug!("Run common initialization table");
        self.run_table(table::COMMON).await?;

        debug!("Run addressing window table");
        self.run_table(variant.window_table()).await?;
        self.state = self.config.initial_state();

        debug!("Run gamma and display on table");
        self.run_table(table::GAMMA_DISPLAY_ON).await?;

        if let Some(color_order) = variant.color_order_override() {
            debug!("Override color filter");
            self.send_command(command::MEMORY_DATA_ACCESS_CONTROL).await?;
            self.send_data(&[color_order]).await?;
        }

        debug!("Initialize display / Done");

        Ok(())
    }

    /// Replay a command table
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails, remaining
    /// entries are not sent
    pub async fn run_table(&mut self, entries: &[Entry<'_>]) -> Result<(), Error> {
        for entry in entries {
            self.run_entry(entry).await?;
        }

        Ok(())
    }

    /// Replay a command table in compact byte encoding
    ///
    /// The whole table is validated before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is malformed or if any commands to the
    /// display fails
    pub async fn run_encoded_table(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let count = table::validate(bytes).map_err(Error::Table)?;
        trace!("Run encoded table of {count} entries");

        for entry in table::decode(bytes).map_err(Error::Table)? {
            self.run_entry(&entry.map_err(Error::Table)?).await?;
        }

        Ok(())
    }

    /// Send a single table entry
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    async fn run_entry(&mut self, entry: &Entry<'_>) -> Result<(), Error> {
        trace!("Run command {:#04x}", entry.opcode());
        self.send_command(entry.opcode()).await?;

        if !entry.arguments().is_empty() {
            self.send_data(entry.arguments()).await?;
        }

        if let Some(delay_ms) = entry.delay_ms() {
            trace!("Wait {delay_ms} ms");
            self.delay.delay_ms(delay_ms).await;
        }

        Ok(())
    }

    /// Get the current geometry
    #[must_use]
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Get the width after rotation
    #[must_use]
    pub fn width(&self) -> u16 {
        self.state.width()
    }

    /// Get the height after rotation
    #[must_use]
    pub fn height(&self) -> u16 {
        self.state.height()
    }

    /// Get the current rotation
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.state.rotation()
    }

    /// Set screen rotation
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    pub async fn set_rotation(&mut self, rotation: Rotation) -> Result<(), Error> {
        debug!("Set rotation to {rotation:?}");
        self.send_command(command::MEMORY_DATA_ACCESS_CONTROL).await?;
        self.send_data(&[rotation.memory_access_control()]).await?;
        self.state.rotate(rotation);

        Ok(())
    }

    /// Turn color inversion on or off
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    pub async fn set_inverted(&mut self, inverted: bool) -> Result<(), Error> {
        debug!("Set inversion to {inverted}");
        if inverted {
            self.send_command(command::INVERSION_ON).await
        } else {
            self.send_command(command::INVERSION_OFF).await
        }
    }

    /// Set the addressing window and start a memory write
    ///
    /// Exactly `(x1 - x0 + 1) × (y1 - y0 + 1)` colors must be pushed next,
    /// in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    pub async fn set_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<(), Error> {
        self.write_window(&Window::new(x0, y0, x1, y1)).await
    }

    /// Push one color into the addressing window
    ///
    /// # Errors
    ///
    /// Returns an error if writing to SPI bus fails.
    pub async fn push_color(&mut self, color: Color) -> Result<(), Error> {
        self.send_data(&color.to_be_bytes()).await
    }

    /// Push a sequence of colors into the addressing window
    ///
    /// # Errors
    ///
    /// Returns an error if writing to SPI bus fails.
    pub async fn push_colors<I>(&mut self, colors: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Color>,
    {
        let mut buffer = [0; PIXELS_PER_WRITE * 2];
        let mut length = 0;

        for color in colors {
            buffer[length..length + 2].copy_from_slice(&color.to_be_bytes());
            length += 2;

            if length == buffer.len() {
                self.send_data(&buffer).await?;
                length = 0;
            }
        }

        if length > 0 {
            self.send_data(&buffer[..length]).await?;
        }

        Ok(())
    }

    /// Draw a single pixel, if it lies on the screen
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    pub async fn draw_pixel(&mut self, x: u16, y: u16, color: Color) -> Result<(), Error> {
        let Some(window) = self.state.pixel_window(x, y) else {
            return Ok(());
        };

        self.write_window(&window).await?;
        self.push_color(color).await
    }

    /// Draw a horizontal line, clipped to the screen
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    pub async fn draw_h_line(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        color: Color,
    ) -> Result<(), Error> {
        self.fill_rect(x, y, width, 1, color).await
    }

    /// Draw a vertical line, clipped to the screen
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    pub async fn draw_v_line(
        &mut self,
        x: u16,
        y: u16,
        height: u16,
        color: Color,
    ) -> Result<(), Error> {
        self.fill_rect(x, y, 1, height, color).await
    }

    /// Fill a rectangle, clipped to the screen
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    pub async fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), Error> {
        let Some(window) = self.state.clip(x, y, width, height) else {
            trace!("Skip rectangle outside screen");
            return Ok(());
        };

        self.write_window(&window).await?;
        self.push_repeated(color, window.pixel_count()).await
    }

    /// Fill the whole screen
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    pub async fn fill_screen(&mut self, color: Color) -> Result<(), Error> {
        debug!("Fill screen");
        let (width, height) = (self.state.width(), self.state.height());
        self.fill_rect(0, 0, width, height, color).await
    }

    /// Release display and return inner hardware
    ///
    /// The display is turned off and put to sleep.
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    pub async fn release(mut self) -> Result<(SPI, RST, DC), Error> {
        debug!("Release display");
        self.send_command(command::DISPLAY_OFF).await?;
        self.send_command(command::SLEEP_IN).await?;

        self.delay.delay_ms(SLEEP_IN_DELAY_MS).await;
        debug!("Release display / Done");

        Ok((self.spi, self.rst, self.dc))
    }

    /// Send the column and row address ranges and start a memory write
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    async fn write_window(&mut self, window: &Window) -> Result<(), Error> {
        trace!("Set window to {window:?}");
        let columns = self.state.column_arguments(window);
        let rows = self.state.row_arguments(window);

        self.send_command(command::COLUMN_ADDRESS_SET).await?;
        self.send_data(&columns).await?;
        self.send_command(command::ROW_ADDRESS_SET).await?;
        self.send_data(&rows).await?;
        self.send_command(command::MEMORY_WRITE).await
    }

    /// Push the same color many times
    ///
    /// # Errors
    ///
    /// Returns an error if writing to SPI bus fails.
    async fn push_repeated(&mut self, color: Color, count: u32) -> Result<(), Error> {
        let mut buffer = [0; PIXELS_PER_WRITE * 2];
        for pixel in buffer.chunks_exact_mut(2) {
            pixel.copy_from_slice(&color.to_be_bytes());
        }

        let mut remaining = count;
        while remaining > 0 {
            #[allow(clippy::cast_possible_truncation, reason = "Bounded by the buffer size")]
            let pixels = remaining.min(PIXELS_PER_WRITE as u32) as usize;
            self.send_data(&buffer[..pixels * 2]).await?;
            #[allow(clippy::cast_possible_truncation, reason = "Bounded by the buffer size")]
            let sent = pixels as u32;
            remaining -= sent;
        }

        Ok(())
    }

    /// Send a software reset command to the display
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    async fn software_reset(&mut self) -> Result<(), Error> {
        debug!("Software reset");
        self.send_command(command::SOFTWARE_RESET).await?;
        self.delay.delay_ms(SOFTWARE_RESET_DELAY_MS).await;
        debug!("Software reset / done");

        Ok(())
    }

    /// Reset the display
    ///
    /// # Errors
    ///
    /// Returns an error if setting any pin fails.
    async fn hardware_reset(&mut self) -> Result<(), Error> {
        debug!("Hardware reset");
        trace!("Set RST high");
        self.rst.set_high().map_err(Error::from_digital)?;
        self.delay.delay_ms(HARDWARE_RESET_DELAY_MS).await;

        trace!("Set RST low");
        self.rst.set_low().map_err(Error::from_digital)?;
        self.delay.delay_ms(HARDWARE_RESET_DELAY_MS).await;

        trace!("Set RST high");
        self.rst.set_high().map_err(Error::from_digital)?;
        self.delay.delay_ms(HARDWARE_RESET_DELAY_MS).await;
        debug!("Hardware reset / done");

        Ok(())
    }

    /// Send command over SPI bus
    ///
    /// # Errors
    ///
    /// Returns an error if writing to SPI bus fails.
    async fn send_command(&mut self, command: u8) -> Result<(), Error> {
        trace!("Set DC to low for transferring commands");
        self.dc.set_low().map_err(Error::from_digital)?;

        self.write(&[command]).await
    }

    /// Send data over SPI bus
    ///
    /// # Errors
    ///
    /// Returns an error if writing to SPI bus fails.
    async fn send_data(&mut self, data: &[u8]) -> Result<(), Error> {
        self.dc.set_high().map_err(Error::from_digital)?;

        self.write(data).await
    }

    /// Write data to SPI bus
    ///
    /// # Errors
    ///
    /// Returns an error if writing to SPI bus fails.
    async fn write(&mut self, data: &[u8]) -> Result<(), Error> {
        if log_enabled!(Trace) {
            trace!("Write {} bytes to SPI", data.len());
        }

        if self.individual_writes {
            for datum in data {
                self.spi.write(&[*datum]).await?;
            }
        } else {
            self.spi.write(data).await?;
        }

        Ok(())
    }
}
