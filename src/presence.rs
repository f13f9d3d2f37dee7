//! Near/far presence detection with hysteresis
//!
//! A two-threshold state machine over the filtered distance. The gap
//! between the thresholds forms a dead band in which no transition
//! happens, so a target hovering around a single boundary cannot make
//! the classification flap.

/// Distance above which the target is classified as away (cm)
pub const THR_ON_CM: u32 = 110;

/// Distance below which the target is classified as present again (cm)
pub const THR_OFF_CM: u32 = 90;

/// Stable classification of the filtered distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Presence {
    Near,
    Far,
}

/// Hysteresis state machine driven by one filtered distance per cycle.
///
/// Starts in [`Presence::Near`]. State persists across measurement
/// failures by design of the caller; `update` itself is pure and
/// infallible.
pub struct PresenceDetector {
    state: Presence,
    thr_on: u32,
    thr_off: u32,
}

impl PresenceDetector {
    /// `thr_on` must be strictly greater than `thr_off`, otherwise the
    /// dead band is empty and the detector chatters at one boundary.
    pub fn new(thr_on: u32, thr_off: u32) -> Self {
        debug_assert!(thr_on > thr_off, "hysteresis band must be non-empty");
        Self {
            state: Presence::Near,
            thr_on,
            thr_off,
        }
    }

    /// Feeds one filtered distance and returns the (possibly updated)
    /// classification. No transition occurs inside `[thr_off, thr_on]`.
    pub fn update(&mut self, cm: u32) -> Presence {
        match self.state {
            Presence::Near if cm > self.thr_on => self.state = Presence::Far,
            Presence::Far if cm < self.thr_off => self.state = Presence::Near,
            _ => {}
        }
        self.state
    }

    pub fn state(&self) -> Presence {
        self.state
    }
}

impl Default for PresenceDetector {
    fn default() -> Self {
        Self::new(THR_ON_CM, THR_OFF_CM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xorshift(state: &mut u32) -> u32 {
        let mut x = *state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        *state = x;
        x
    }

    #[test]
    fn boundary_walk() {
        let mut detector = PresenceDetector::default();
        assert_eq!(detector.state(), Presence::Near);
        assert_eq!(detector.update(95), Presence::Near);
        assert_eq!(detector.update(111), Presence::Far);
        assert_eq!(detector.update(95), Presence::Far);
        assert_eq!(detector.update(89), Presence::Near);
    }

    #[test]
    fn thresholds_themselves_are_inside_the_dead_band() {
        let mut detector = PresenceDetector::default();
        assert_eq!(detector.update(THR_ON_CM), Presence::Near);
        detector.update(THR_ON_CM + 1);
        assert_eq!(detector.update(THR_OFF_CM), Presence::Far);
    }

    #[test]
    fn constant_in_band_input_never_transitions() {
        let mut detector = PresenceDetector::default();
        for _ in 0..1_000 {
            assert_eq!(detector.update(100), Presence::Near);
        }
        detector.update(150);
        for _ in 0..1_000 {
            assert_eq!(detector.update(100), Presence::Far);
        }
    }

    #[test]
    fn random_inputs_only_transition_outside_the_band() {
        let mut seed = 0x9e37_79b9;
        let mut detector = PresenceDetector::default();
        let mut previous = detector.state();
        for _ in 0..10_000 {
            let cm = xorshift(&mut seed) % 200;
            let next = detector.update(cm);
            if next != previous {
                match next {
                    Presence::Far => assert!(cm > THR_ON_CM),
                    Presence::Near => assert!(cm < THR_OFF_CM),
                }
            }
            previous = next;
        }
    }
}
