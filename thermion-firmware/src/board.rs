//! Board wiring
//!
//! | Signal         | Pin    |
//! |----------------|--------|
//! | I2C SCL        | GPIO0  |
//! | I2C SDA        | GPIO1  |
//! | 595 shift clk  | GPIO2  |
//! | 595 data       | GPIO3  |
//! | 595 latch      | GPIO4  |
//!
//! Both bus lines need external pull-ups.

use embassy_rp::gpio::Level;
use embassy_rp::Peripherals;
use embassy_time::Delay;

use thermion_core::config::ThermometerConfig;
use thermion_drivers::bus::BitBangI2c;
use thermion_drivers::display::ShiftRegisterDisplay;
use thermion_drivers::sensor::Ds1621;
use thermion_drivers::Thermometer;
use thermion_hal_rp2040::{OpenDrainLine, PushPullPin};

/// DS1621 on the bit-banged bus
pub type BoardSensor = Ds1621<BitBangI2c<OpenDrainLine<'static>, OpenDrainLine<'static>, Delay>>;

/// Display behind the 74HC595 pair
pub type BoardDisplay =
    ShiftRegisterDisplay<PushPullPin<'static>, PushPullPin<'static>, PushPullPin<'static>>;

/// The assembled thermometer
pub type BoardThermometer = Thermometer<BoardSensor, BoardDisplay>;

/// Claim the pins and assemble the thermometer
pub fn thermometer(p: Peripherals, config: &ThermometerConfig) -> BoardThermometer {
    let scl = OpenDrainLine::new(p.PIN_0);
    let sda = OpenDrainLine::new(p.PIN_1);
    let bus = BitBangI2c::new(scl, sda, Delay, config.settle_us);
    let sensor = Ds1621::new(bus, config.address_pins);

    let clock = PushPullPin::new(p.PIN_2, Level::Low);
    let data = PushPullPin::new(p.PIN_3, Level::Low);
    let latch = PushPullPin::new(p.PIN_4, Level::Low);
    let display = ShiftRegisterDisplay::new(data, clock, latch);

    Thermometer::new(sensor, display, config.power_on_value)
}
