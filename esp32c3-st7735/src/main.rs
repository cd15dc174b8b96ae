// Copyright Claudio Mattera 2024-2025.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Main crate

#![no_std]
#![no_main]

use core::convert::Infallible;

use log::error;
use log::info;

use embassy_executor::Spawner;

use embassy_time::Delay;
use embassy_time::Duration;

use esp_hal::clock::CpuClock;
use esp_hal::gpio::Level;
use esp_hal::gpio::Output;
use esp_hal::gpio::OutputConfig;
use esp_hal::init as initialize_esp_hal;
use esp_hal::spi::master::Config as SpiConfig;
use esp_hal::spi::master::ConfigError as SpiConfigError;
use esp_hal::spi::master::Spi;
use esp_hal::spi::Mode as SpiMode;
use esp_hal::time::Rate;
use esp_hal::timer::systimer::SystemTimer;
use esp_hal::Config as EspConfig;

use esp_hal_embassy::init as initialize_embassy;

use embedded_hal_bus::spi::ExclusiveDevice;

use esp_backtrace as _;

mod logging;
use self::logging::setup as setup_logging;

mod display;
use self::display::demo_task as display_demo_task;

/// Period to wait between demo screens
const DEMO_PERIOD: Duration = Duration::from_secs(3);

/// SPI clock frequency in MHz
///
/// The controller accepts a serial clock cycle of 66 ns for writes.
const SPI_FREQUENCY_MHZ: u32 = 15;

/// Main task
#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    setup_logging();

    if let Err(error) = main_fallible(&spawner) {
        error!("Error while running firmware: {error:?}");
    }
}

/// Main task that can return an error
fn main_fallible(spawner: &Spawner) -> Result<(), Error> {
    let peripherals = initialize_esp_hal(EspConfig::default().with_cpu_clock(CpuClock::max()));

    let systimer = SystemTimer::new(peripherals.SYSTIMER);
    initialize_embassy(systimer.alarm0);

    info!("Create SPI bus");
    let spi_config = SpiConfig::default()
        .with_frequency(Rate::from_mhz(SPI_FREQUENCY_MHZ))
        .with_mode(SpiMode::_0);
    let spi_bus = Spi::new(peripherals.SPI2, spi_config)?
        .with_sck(peripherals.GPIO6)
        .with_mosi(peripherals.GPIO7)
        .into_async();

    info!("Create PIN for SPI Chip Select");
    let cs = Output::new(peripherals.GPIO8, Level::High, OutputConfig::default());

    info!("Create additional PINs");
    let rst = Output::new(peripherals.GPIO10, Level::High, OutputConfig::default());
    let dc = Output::new(peripherals.GPIO19, Level::Low, OutputConfig::default());

    info!("Create SPI device");
    let spi_device = ExclusiveDevice::new(spi_bus, cs, Delay)?;

    info!("Spawn tasks");
    spawner.must_spawn(display_demo_task(spi_device, rst, dc, DEMO_PERIOD));

    Ok(())
}

/// An error
#[derive(Debug)]
enum Error {
    /// An impossible error existing only to satisfy the type system
    Impossible(Infallible),

    /// An error within SPI bus configuration
    #[expect(unused, reason = "Never read directly")]
    SpiConfig(SpiConfigError),
}

impl From<Infallible> for Error {
    fn from(error: Infallible) -> Self {
        Self::Impossible(error)
    }
}

impl From<SpiConfigError> for Error {
    fn from(error: SpiConfigError) -> Self {
        Self::SpiConfig(error)
    }
}
