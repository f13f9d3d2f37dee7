//! Frame handoff between the measurement loop and the display task.
//!
//! A Signal is a single-slot channel with overwrite semantics: if the
//! display lags a cycle, it draws the newest frame and the stale one
//! is dropped rather than queued.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use range_sense::Frame;

/// Latest rendered frame awaiting the display task
pub static FRAME: Signal<CriticalSectionRawMutex, Frame> = Signal::new();

/// Publishes the frame rendered by the current measurement cycle
pub fn send(frame: Frame) {
    FRAME.signal(frame);
}

/// Waits for the next rendered frame
pub async fn wait() -> Frame {
    FRAME.wait().await
}
