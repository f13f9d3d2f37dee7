//! Range readout firmware entry point
//!
//! Initializes peripherals and spawns the measurement, display and
//! indicator tasks.

#![no_std]
#![no_main]

use crate::task::{
    display::display, range_monitor::range_monitor, rgb_led_indicate::rgb_led_indicate,
};
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use system::resources::{self, AssignedResources, RangeSensorResources, RgbLedResources};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// System core modules
mod system;
/// Task implementations
mod task;

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // The shared I2C bus must exist before the display task starts.
    resources::init_i2c(p.I2C1, p.PIN_3, p.PIN_2);

    // Split the remaining pins into per-task resource groups.
    let r = split_resources!(p);

    spawner.spawn(display()).unwrap();
    spawner.spawn(rgb_led_indicate(r.rgb_led)).unwrap();
    spawner.spawn(range_monitor(r.range_sensor)).unwrap();
}
