//! Sliding-window median filter
//!
//! Keeps a fixed-size circular history of recent readings and reports
//! their median, so a single glitched sample can at most move to one
//! end of the sorted order without reaching the output.
//!
//! # Warm-up
//! The first reading after construction or [`MedianFilter::reset`]
//! floods every slot of the window. The median then converges in one
//! sample instead of blending with stale history, which matters after
//! a sensor dropout: old readings say nothing about the current scene.

/// Median filter over the last `N` readings.
///
/// `N` should be odd so the median is a single stored sample.
pub struct MedianFilter<const N: usize> {
    window: [u32; N],
    cursor: usize,
    warm: bool,
}

impl<const N: usize> MedianFilter<N> {
    pub const fn new() -> Self {
        Self {
            window: [0; N],
            cursor: 0,
            warm: false,
        }
    }

    /// Inserts a reading at the current circular position, overwriting
    /// the oldest one. The first push after a reset seeds the whole
    /// window with this value.
    pub fn push(&mut self, cm: u32) {
        self.window[self.cursor] = cm;
        self.cursor = (self.cursor + 1) % N;
        if !self.warm {
            self.window = [cm; N];
            self.warm = true;
        }
    }

    /// Returns the middle order statistic of the window. Always one of
    /// the stored samples, never interpolated.
    pub fn median(&self) -> u32 {
        let mut sorted = self.window;
        sorted.sort_unstable();
        sorted[N / 2]
    }

    /// Clears the warm flag so the next push re-seeds the window.
    /// Callers invoke this whenever acquisition has failed.
    pub fn reset(&mut self) {
        self.warm = false;
    }

    /// Whether the window has been seeded since the last reset.
    pub fn is_warm(&self) -> bool {
        self.warm
    }
}

impl<const N: usize> Default for MedianFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}
