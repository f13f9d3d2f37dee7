//! RGB LED indicator task
//!
//! Maps the pipeline's indicator state onto the status LED:
//! Normal -> green, Caution -> yellow (red+green), Fail -> red.

use crate::system::{indicator, resources::RgbLedResources};
use embassy_rp::gpio::{Level, Output};
use range_sense::IndicatorColor;

/// The LED module is wired common-anode: a channel switches on at low
/// level.
const LED_ACTIVE_LOW: bool = true;

fn drive(pin: &mut Output<'_>, on: bool) {
    let level = match (on, LED_ACTIVE_LOW) {
        (true, true) | (false, false) => Level::Low,
        _ => Level::High,
    };
    pin.set_level(level);
}

/// Applies each published indicator color to the LED pins.
#[embassy_executor::task]
pub async fn rgb_led_indicate(r: RgbLedResources) {
    let off = if LED_ACTIVE_LOW {
        Level::High
    } else {
        Level::Low
    };
    let mut red = Output::new(r.red_pin, off);
    let mut green = Output::new(r.green_pin, off);
    let mut blue = Output::new(r.blue_pin, off);

    loop {
        let color = indicator::wait().await;
        let (red_on, green_on) = match color {
            IndicatorColor::Normal => (false, true),
            IndicatorColor::Caution => (true, true),
            IndicatorColor::Fail => (true, false),
        };
        drive(&mut red, red_on);
        drive(&mut green, green_on);
        drive(&mut blue, false);
    }
}
