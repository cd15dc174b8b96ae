// Copyright Claudio Mattera 2024-2025.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Task for cycling demo screens on an ST7735R TFT display

use log::error;
use log::info;
use log::warn;

use embassy_time::Delay;
use embassy_time::Duration;
use embassy_time::Timer;

use embedded_hal_bus::spi::ExclusiveDevice;

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::spi::SpiDevice;

use embedded_hal::digital::OutputPin;

use esp_hal::gpio::Output;
use esp_hal::spi::master::Spi;
use esp_hal::Async;

use st7735r_rs::AsyncDisplay;
use st7735r_rs::Color;
use st7735r_rs::Config;
use st7735r_rs::Error as DisplayError;
use st7735r_rs::Rotation;
use st7735r_rs::Variant;

/// Panel variant, as printed on the tab of the screen protector
const VARIANT: Option<&'static str> = option_env!("ST7735_VARIANT");

/// Spacing between grid lines
const GRID_STEP: u16 = 16;

/// Side of the color swatches
const SWATCH_SIDE: u16 = 24;

/// Colors shown in the swatches
const SWATCHES: [Color; 6] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::CYAN,
    Color::MAGENTA,
    Color::YELLOW,
];

/// Task for drawing demo screens
#[embassy_executor::task]
pub async fn demo_task(
    spi_device: ExclusiveDevice<Spi<'static, Async>, Output<'static>, Delay>,
    rst: Output<'static>,
    dc: Output<'static>,
    period: Duration,
) {
    let variant = parse_variant(VARIANT);

    info!("Create display ({variant:?})");
    let config = match Config::builder().variant(variant).build() {
        Ok(config) => config,
        Err(error) => {
            error!("Invalid display configuration: {error:?}");
            return;
        }
    };
    let mut display = AsyncDisplay::new(spi_device, rst, dc, Delay, config);

    info!("Initialize display");
    if let Err(error) = display.initialize().await {
        error!("Cannot initialize display: {error:?}");
        return;
    }

    let mut index: i32 = 0;
    loop {
        let rotation = Rotation::from_index(index);
        info!("Draw demo screen in rotation {rotation:?}");

        if let Err(error) = draw(&mut display, rotation).await {
            error!("Could not draw demo screen: {error:?}");
        }

        Timer::after(period).await;
        index = index.wrapping_add(1);
    }
}

/// Parse the panel variant, falling back to the red tab
fn parse_variant(name: Option<&str>) -> Variant {
    match name.map(str::parse::<Variant>) {
        Some(Ok(variant)) => variant,
        Some(Err(error)) => {
            warn!("Unknown variant {name:?} ({error:?}), using red tab");
            Variant::RedTab
        }
        None => Variant::default(),
    }
}

/// Draw a demo screen: grid, swatches and a white frame
async fn draw<SPI, RST, DC, DELAY>(
    display: &mut AsyncDisplay<SPI, RST, DC, DELAY>,
    rotation: Rotation,
) -> Result<(), DisplayError>
where
    SPI: SpiDevice,
    RST: OutputPin,
    DC: OutputPin,
    DELAY: DelayNs,
{
    display.set_rotation(rotation).await?;
    display.fill_screen(Color::BLACK).await?;

    let (width, height) = (display.width(), display.height());

    let gray = Color::from_rgb(0x40, 0x40, 0x40);
    for x in (0..width).step_by(usize::from(GRID_STEP)) {
        display.draw_v_line(x, 0, height, gray).await?;
    }
    for y in (0..height).step_by(usize::from(GRID_STEP)) {
        display.draw_h_line(0, y, width, gray).await?;
    }

    let mut x = GRID_STEP / 2;
    for color in SWATCHES {
        // Swatches past the right edge are truncated by the display
        display
            .fill_rect(x, GRID_STEP / 2, SWATCH_SIDE, SWATCH_SIDE, color)
            .await?;
        x = x.saturating_add(SWATCH_SIDE + GRID_STEP / 2);
    }

    let last_x = width.saturating_sub(1);
    let last_y = height.saturating_sub(1);
    display.draw_h_line(0, 0, width, Color::WHITE).await?;
    display.draw_h_line(0, last_y, width, Color::WHITE).await?;
    display.draw_v_line(0, 0, height, Color::WHITE).await?;
    display.draw_v_line(last_x, 0, height, Color::WHITE).await?;

    // Marks the logical origin, to tell rotations apart
    for offset in 1..4 {
        display.draw_pixel(offset, offset, Color::RED).await?;
    }

    Ok(())
}
