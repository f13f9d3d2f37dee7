//! Measurement control loop
//!
//! Runs one measurement cycle per period against the HC-SR04 sensor
//! and publishes the rendered result.
//!
//! # Sensor Operation
//! - Async trigger/echo driver with per-phase timeouts
//! - Measurements taken every 100ms
//! - Distance reported in whole centimeters
//!
//! # Signal Processing
//! - Median filter over 7 samples suppresses single-sample glitches
//! - Hysteresis detector classifies the filtered distance as Near/Far
//!
//! # Error Handling
//! - A failed measurement renders the fail frame and clears the filter
//!   warm-up so the next success re-seeds the window
//! - Failure is never fatal; the next periodic cycle is the retry

use crate::system::{event, indicator, resources::RangeSensorResources};
use defmt::{info, warn};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{Delay, Duration, Instant, Timer};
use range_sense::{Now, RangePipeline, RangeSensor};

/// Time between measurement cycles
const MEASUREMENT_INTERVAL: Duration = Duration::from_millis(100);

/// Diagnostic line shown on sensor failure; matches the pin assignment
/// in `system::resources`.
const FAIL_HINT: &str = "TRIG GP12  ECHO GP13";

/// Microsecond clock for echo edge timestamps
struct EmbassyClock;

impl Now for EmbassyClock {
    fn now_micros(&self) -> u64 {
        Instant::now().as_micros()
    }
}

/// Main measurement task: sensor -> pipeline -> display/indicator
/// signals, one cycle per period.
#[embassy_executor::task]
pub async fn range_monitor(r: RangeSensorResources) {
    let trigger = Output::new(r.trigger_pin, Level::Low);
    let echo = Input::new(r.echo_pin, Pull::None);
    let mut sensor = RangeSensor::new(trigger, echo, EmbassyClock, Delay);
    let mut pipeline = RangePipeline::new(FAIL_HINT);

    info!("range monitor started");

    loop {
        let reading = sensor.measure().await;
        if let Err(e) = reading {
            warn!("measurement failed: {}", e);
        }

        let frame = pipeline.on_reading(reading);
        indicator::send(frame.indicator);
        event::send(frame);

        Timer::after(MEASUREMENT_INTERVAL).await;
    }
}
