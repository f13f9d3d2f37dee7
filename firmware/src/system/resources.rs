//! Hardware Resource Management
//!
//! Manages and allocates hardware resources (pins, peripherals) to the
//! firmware tasks:
//! - Range sensor: HC-SR04 trigger/echo pins
//! - RGB LED: status indicator pins
//! - Display: SSD1306 on the shared I2C bus
//!
//! # Shared Resources
//! The I2C bus is protected by a mutex so the display (and any future
//! bus peripheral) can access it safely. Tasks acquire the lock through
//! `embassy_embedded_hal::shared_bus` devices.

use assign_resources::assign_resources;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{Async as I2cAsync, Config, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::{self, I2C1, PIN_2, PIN_3};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;

/// Global I2C bus instance protected by a mutex.
static I2C_BUS: Mutex<CriticalSectionRawMutex, I2c<'static, I2C1, I2cAsync>> = Mutex::new(unsafe {
    core::mem::zeroed() // This is safe because we initialize before use
});

/// Initializes the I2C peripheral.
///
/// This should only be called once during system initialization in
/// main.rs, before any tasks are spawned. Configures the bus at 400kHz
/// for fast mode operation.
pub fn init_i2c(i2c: I2C1, scl: PIN_3, sda: PIN_2) {
    let mut config = Config::default();
    config.frequency = 400_000;
    let i2c = I2c::new_async(i2c, scl, sda, Irqs, config);
    critical_section::with(|_| {
        *I2C_BUS.try_lock().unwrap() = i2c;
    });
}

/// Returns a reference to the protected I2C bus instance.
pub fn get_i2c() -> &'static Mutex<CriticalSectionRawMutex, I2c<'static, I2C1, I2cAsync>> {
    &I2C_BUS
}

assign_resources! {
    /// HC-SR04 ultrasonic distance sensor pins
    range_sensor: RangeSensorResources {
        trigger_pin: PIN_12,
        echo_pin: PIN_13,
    },
    /// RGB status LED pins
    rgb_led: RgbLedResources {
        red_pin: PIN_6,
        green_pin: PIN_7,
        blue_pin: PIN_8,
    },
}

bind_interrupts!(pub struct Irqs {
    I2C1_IRQ => I2cInterruptHandler<I2C1>;
});
