//! One-cycle pipeline orchestration
//!
//! Wires filter, detector and formatter together for a single
//! measurement result. The hardware-facing loop (trigger the sensor,
//! publish the frame, sleep one period) lives in the firmware; this
//! half is pure state so the whole failure/recovery policy can be
//! exercised on the host.

use crate::filter::MedianFilter;
use crate::format::{self, Frame, DISPLAY_MAX_CM};
use crate::presence::PresenceDetector;
use crate::sensor::SensorError;

/// Samples in the median window (7 balances glitch rejection against
/// response latency)
pub const FILTER_WINDOW: usize = 7;

/// Per-cycle measurement pipeline: median filter, presence hysteresis
/// and frame rendering, including the failure path.
pub struct RangePipeline {
    filter: MedianFilter<FILTER_WINDOW>,
    detector: PresenceDetector,
    fail_hint: &'static str,
}

impl RangePipeline {
    /// `fail_hint` is the diagnostic line shown under "Sensor FAIL",
    /// typically the board's trigger/echo wiring.
    pub fn new(fail_hint: &'static str) -> Self {
        Self {
            filter: MedianFilter::new(),
            detector: PresenceDetector::default(),
            fail_hint,
        }
    }

    /// Advances the pipeline by one measurement cycle.
    ///
    /// On failure the filter warm-up is cleared so the next success
    /// re-seeds the window instead of blending with stale readings;
    /// the hysteresis state is left untouched, so a transient timeout
    /// does not toggle the presence indicator.
    pub fn on_reading(&mut self, reading: Result<u32, SensorError>) -> Frame {
        match reading {
            Ok(cm) => {
                self.filter.push(cm);
                let median = self.filter.median();
                let presence = self.detector.update(median);
                format::render(median.min(DISPLAY_MAX_CM), presence)
            }
            Err(_) => {
                self.filter.reset();
                format::render_failure(self.fail_hint)
            }
        }
    }
}
