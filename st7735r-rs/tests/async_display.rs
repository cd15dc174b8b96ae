//! Byte-level behaviour of the async display

#![allow(clippy::unwrap_used, reason = "Unexpected errors must fail the test")]

mod common;

use embedded_hal::spi::ErrorKind;

use st7735r_rs::table;
use st7735r_rs::AsyncDisplay;
use st7735r_rs::Color;
use st7735r_rs::Config;
use st7735r_rs::Entry;
use st7735r_rs::Error;
use st7735r_rs::NoPin;
use st7735r_rs::ResetStrategy;
use st7735r_rs::Rotation;
use st7735r_rs::TableError;
use st7735r_rs::Variant;

use common::block_on;
use common::repeated;
use common::window_transactions;
use common::Bus;
use common::DcPin;
use common::Delay;
use common::Event;
use common::ResetPin;
use common::Spi;

type TestDisplay = AsyncDisplay<Spi, ResetPin, DcPin, Delay>;

fn config(variant: Variant) -> Config {
    Config::builder().variant(variant).build().unwrap()
}

fn display(bus: &Bus, variant: Variant) -> TestDisplay {
    AsyncDisplay::new(
        Spi(bus.clone()),
        ResetPin(bus.clone()),
        DcPin(bus.clone()),
        Delay(bus.clone()),
        config(variant),
    )
}

fn initialized(bus: &Bus, variant: Variant) -> TestDisplay {
    let mut display = display(bus, variant);
    block_on(display.initialize()).unwrap();
    bus.clear();
    display
}

#[test]
fn initialize_matches_tables() {
    let bus = Bus::new();
    let mut display = display(&bus, Variant::GreenTab);

    block_on(display.initialize()).unwrap();

    let expected_commands: Vec<u8> = table::COMMON
        .iter()
        .chain(table::WINDOW_GREEN_TAB)
        .chain(table::GAMMA_DISPLAY_ON)
        .map(|entry| entry.opcode())
        .collect();
    assert_eq!(bus.commands(), expected_commands);
    assert_eq!(
        bus.events()[..7],
        [
            Event::Delay(50),
            Event::Reset(true),
            Event::Delay(500),
            Event::Reset(false),
            Event::Delay(500),
            Event::Reset(true),
            Event::Delay(500),
        ]
    );
    assert_eq!((display.width(), display.height()), (128, 160));
}

#[test]
fn initialize_black_tab_with_software_reset() {
    let bus = Bus::new();
    let config = Config::builder()
        .variant(Variant::BlackTab)
        .reset(ResetStrategy::Software)
        .build()
        .unwrap();
    let mut display = AsyncDisplay::new(
        Spi(bus.clone()),
        NoPin,
        DcPin(bus.clone()),
        Delay(bus.clone()),
        config,
    );

    block_on(display.initialize()).unwrap();

    assert_eq!(bus.events()[..3], [Event::Delay(50), Event::Command(0x01), Event::Delay(500)]);
    assert_eq!(bus.transactions().last(), Some(&(0x36, vec![0xC0])));
}

#[test]
fn initialize_aborts_on_first_failure() {
    let bus = Bus::new();
    let config = Config::builder()
        .reset(ResetStrategy::Software)
        .build()
        .unwrap();
    let mut display = AsyncDisplay::new(
        Spi(bus.clone()),
        NoPin,
        DcPin(bus.clone()),
        Delay(bus.clone()),
        config,
    );
    bus.fail_from_write(2);

    let result = block_on(display.initialize());

    assert_eq!(result, Err(Error::Spi(ErrorKind::Other)));
    assert_eq!(bus.commands(), vec![0x01, 0x01]);
    assert_eq!(bus.delays(), vec![50, 500, 150]);
}

#[test]
fn run_table_aborts_on_first_failure() {
    let bus = Bus::new();
    let mut display = display(&bus, Variant::RedTab);
    bus.fail_from_write(1);

    let result = block_on(display.run_table(&[
        Entry::new(0x01, &[]).with_delay(10),
        Entry::new(0x02, &[0x03]),
        Entry::new(0x04, &[]),
    ]));

    assert_eq!(result, Err(Error::Spi(ErrorKind::Other)));
    assert_eq!(bus.events(), vec![Event::Command(0x01), Event::Delay(10)]);
}

#[test]
fn rotation_changes_size() {
    let bus = Bus::new();
    let mut display = initialized(&bus, Variant::RedTab);

    block_on(display.set_rotation(Rotation::from_index(-1))).unwrap();

    assert_eq!(display.rotation(), Rotation::Rotate270);
    assert_eq!((display.width(), display.height()), (160, 128));
    assert_eq!(bus.transactions(), vec![(0x36, vec![0x60])]);
}

#[test]
fn draw_pixel() {
    let bus = Bus::new();
    let mut display = initialized(&bus, Variant::RedTab);

    block_on(display.draw_pixel(3, 4, Color::MAGENTA)).unwrap();
    block_on(display.draw_pixel(3, 400, Color::MAGENTA)).unwrap();

    let mut expected = window_transactions(3, 4, 4, 5);
    expected.push((0x2C, vec![0xF8, 0x1F]));
    assert_eq!(bus.transactions(), expected);
}

#[test]
fn fill_rect_is_truncated() {
    let bus = Bus::new();
    let mut display = initialized(&bus, Variant::RedTab);

    block_on(display.fill_rect(120, 0, 100, 3, Color::CYAN)).unwrap();

    let mut expected = window_transactions(120, 0, 127, 2);
    expected.push((0x2C, repeated(0x07FF, 8 * 3)));
    assert_eq!(bus.transactions(), expected);
}

#[test]
fn lines_and_screen() {
    let bus = Bus::new();
    let mut display = initialized(&bus, Variant::RedTab);

    block_on(display.draw_h_line(0, 0, 200, Color::WHITE)).unwrap();
    block_on(display.draw_v_line(0, 0, 200, Color::WHITE)).unwrap();
    block_on(display.fill_screen(Color::BLACK)).unwrap();

    let transactions = bus.transactions();
    assert_eq!(transactions.len(), 9);
    assert_eq!(transactions[..2], window_transactions(0, 0, 127, 0)[..]);
    assert_eq!(transactions[2].1.len(), 2 * 128);
    assert_eq!(transactions[3..5], window_transactions(0, 0, 0, 159)[..]);
    assert_eq!(transactions[5].1.len(), 2 * 160);
    assert_eq!(transactions[6..8], window_transactions(0, 0, 127, 159)[..]);
    assert_eq!(transactions[8], (0x2C, repeated(0x0000, 128 * 160)));
}

#[test]
fn push_colors_into_window() {
    let bus = Bus::new();
    let mut display = initialized(&bus, Variant::RedTab);

    block_on(display.set_window(0, 0, 1, 1)).unwrap();
    block_on(display.push_colors([Color::RED, Color::GREEN, Color::BLUE, Color::WHITE]))
        .unwrap();

    let mut expected = window_transactions(0, 0, 1, 1);
    expected.push((0x2C, vec![0xF8, 0x00, 0x07, 0xE0, 0x00, 0x1F, 0xFF, 0xFF]));
    assert_eq!(bus.transactions(), expected);
}

#[test]
fn encoded_table() {
    let bus = Bus::new();
    let mut display = display(&bus, Variant::RedTab);

    block_on(display.run_encoded_table(&[1, 0xCD, 0x80, 255])).unwrap();
    assert_eq!(bus.events(), vec![Event::Command(0xCD), Event::Delay(500)]);

    bus.clear();
    let result = block_on(display.run_encoded_table(&[1, 0xAB, 0, 0xCD]));
    assert_eq!(result, Err(Error::Table(TableError::TrailingBytes)));
    assert_eq!(bus.events(), vec![]);
}

#[test]
fn whole_writes_send_data_at_once() {
    let bus = Bus::new();
    let mut display = display(&bus, Variant::RedTab);
    bus.fail_from_write(2);

    block_on(display.run_encoded_table(&[2, 0xAB, 3, 0x01, 0x02, 0x03, 0xCD, 0])).unwrap_err();

    assert_eq!(
        bus.events(),
        vec![
            Event::Command(0xAB),
            Event::Data(0x01),
            Event::Data(0x02),
            Event::Data(0x03),
        ]
    );
}

#[test]
fn individual_writes_send_one_byte_at_a_time() {
    let bus = Bus::new();
    let mut display = AsyncDisplay::new_with_individual_writes(
        Spi(bus.clone()),
        ResetPin(bus.clone()),
        DcPin(bus.clone()),
        Delay(bus.clone()),
        config(Variant::RedTab),
    );
    bus.fail_from_write(3);

    let result = block_on(display.run_encoded_table(&[1, 0xAB, 3, 0x01, 0x02, 0x03]));

    assert_eq!(result, Err(Error::Spi(ErrorKind::Other)));
    assert_eq!(
        bus.events(),
        vec![Event::Command(0xAB), Event::Data(0x01), Event::Data(0x02)]
    );
}

#[test]
fn release_puts_display_to_sleep() {
    let bus = Bus::new();
    let display = initialized(&bus, Variant::RedTab);

    block_on(display.release()).unwrap();

    assert_eq!(bus.commands(), vec![0x28, 0x10]);
    assert_eq!(bus.delays(), vec![120]);
}
