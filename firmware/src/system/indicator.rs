//! Indicator color handoff to the RGB LED task.
//!
//! Same single-slot overwrite semantics as the frame signal: the LED
//! only ever needs the newest color.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use range_sense::IndicatorColor;

/// Signal for indicator color changes
pub static INDICATOR: Signal<CriticalSectionRawMutex, IndicatorColor> = Signal::new();

/// Publishes a new indicator color
pub fn send(color: IndicatorColor) {
    INDICATOR.signal(color);
}

/// Waits for the next indicator color
pub async fn wait() -> IndicatorColor {
    INDICATOR.wait().await
}
