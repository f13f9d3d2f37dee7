//! HC-SR04 ultrasonic sensor driver
//!
//! Generates the trigger pulse and times the echo pulse whose high
//! duration encodes the round-trip time of flight.
//!
//! # Suspension model
//! Edge waits are async (`embedded_hal_async::digital::Wait`) and each
//! is raced against a delay, so a disconnected or silent sensor cannot
//! stall the control loop beyond the phase bound. One measurement is
//! in flight at a time: `measure` takes `&mut self` and refuses to
//! re-trigger while the echo line is still high from a previous pulse.
//!
//! # Timing
//! The trigger pulse uses blocking microsecond delays; async delays add
//! scheduling jitter of a few microseconds, which is significant at a
//! 10µs pulse width.

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};
use embedded_hal_async::{delay::DelayNs as DelayNsAsync, digital::Wait};
use futures::{select_biased, FutureExt};

/// Round-trip microseconds of sound per centimeter of target distance
const US_PER_CM: u64 = 58;

/// Settle time on the trigger line before the pulse
const TRIGGER_SETTLE_US: u32 = 2;

/// Trigger pulse width required by the sensor
const TRIGGER_PULSE_US: u32 = 10;

/// Bound on waiting for the echo rising edge; generous enough for
/// maximum range and no-target conditions
const ECHO_START_TIMEOUT_MS: u32 = 20;

/// Bound on the echo pulse width itself
const ECHO_END_TIMEOUT_MS: u32 = 40;

/// Microsecond-resolution monotonic clock capability.
pub trait Now {
    /// Time elapsed since startup in microseconds
    fn now_micros(&self) -> u64;
}

/// Everything that can go wrong in one measurement. None of these are
/// fatal; the caller's next cycle is the retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// The echo line never rose within the start bound
    EchoStartTimeout,
    /// The echo pulse never ended within the end bound, had zero
    /// width, or was still high from a previous cycle
    EchoEndTimeout,
    /// A trigger or echo pin operation failed at the HAL level
    Gpio,
}

/// Driver over a trigger output, an echo input with edge waits, a
/// microsecond clock and a delay provider.
pub struct RangeSensor<TRIG, ECHO, CLOCK, DELAY> {
    trigger: TRIG,
    echo: ECHO,
    clock: CLOCK,
    delay: DELAY,
}

impl<TRIG, ECHO, CLOCK, DELAY> RangeSensor<TRIG, ECHO, CLOCK, DELAY>
where
    TRIG: OutputPin,
    ECHO: InputPin + Wait,
    CLOCK: Now,
    DELAY: DelayNs + DelayNsAsync,
{
    pub fn new(trigger: TRIG, echo: ECHO, clock: CLOCK, delay: DELAY) -> Self {
        Self {
            trigger,
            echo,
            clock,
            delay,
        }
    }

    /// Fires one trigger pulse and returns the measured distance in
    /// whole centimeters, or the reason the echo never produced one.
    pub async fn measure(&mut self) -> Result<u32, SensorError> {
        // A high echo line here is a stale pulse from a previous
        // cycle; discard it instead of timing against it.
        if self.echo.is_high().map_err(|_| SensorError::Gpio)? {
            return Err(SensorError::EchoEndTimeout);
        }

        self.trigger.set_low().map_err(|_| SensorError::Gpio)?;
        DelayNs::delay_us(&mut self.delay, TRIGGER_SETTLE_US);
        self.trigger.set_high().map_err(|_| SensorError::Gpio)?;
        DelayNs::delay_us(&mut self.delay, TRIGGER_PULSE_US);
        self.trigger.set_low().map_err(|_| SensorError::Gpio)?;

        let rise = select_biased! {
            edge = self.echo.wait_for_high().fuse() => match edge {
                Ok(()) => self.clock.now_micros(),
                Err(_) => return Err(SensorError::Gpio),
            },
            _ = DelayNsAsync::delay_ms(&mut self.delay, ECHO_START_TIMEOUT_MS).fuse() => {
                return Err(SensorError::EchoStartTimeout);
            }
        };

        let fall = select_biased! {
            edge = self.echo.wait_for_low().fuse() => match edge {
                Ok(()) => self.clock.now_micros(),
                Err(_) => return Err(SensorError::Gpio),
            },
            _ = DelayNsAsync::delay_ms(&mut self.delay, ECHO_END_TIMEOUT_MS).fuse() => {
                return Err(SensorError::EchoEndTimeout);
            }
        };

        let elapsed_us = fall.saturating_sub(rise);
        // A zero-width pulse means the edges were not a real echo
        if elapsed_us == 0 {
            return Err(SensorError::EchoEndTimeout);
        }

        Ok((elapsed_us / US_PER_CM) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use futures::executor::block_on;

    struct TriggerMock;

    impl ErrorType for TriggerMock {
        type Error = Infallible;
    }

    impl OutputPin for TriggerMock {
        fn set_high(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[derive(Clone, Copy)]
    enum EchoBehavior {
        Respond,
        NeverRise,
        NeverFall,
        StuckHigh,
    }

    struct EchoMock(EchoBehavior);

    impl ErrorType for EchoMock {
        type Error = Infallible;
    }

    impl InputPin for EchoMock {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(matches!(self.0, EchoBehavior::StuckHigh))
        }
        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!matches!(self.0, EchoBehavior::StuckHigh))
        }
    }

    impl Wait for EchoMock {
        async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
            match self.0 {
                EchoBehavior::NeverRise => core::future::pending().await,
                _ => Ok(()),
            }
        }
        async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
            match self.0 {
                EchoBehavior::NeverFall => core::future::pending().await,
                _ => Ok(()),
            }
        }
        async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
        async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
        async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    /// Advances a fixed step per query, so rise and fall timestamps of
    /// one measurement are exactly one step apart.
    struct StepClock {
        t: Cell<u64>,
        step: u64,
    }

    impl StepClock {
        fn new(step: u64) -> Self {
            Self {
                t: Cell::new(0),
                step,
            }
        }
    }

    impl Now for StepClock {
        fn now_micros(&self) -> u64 {
            let t = self.t.get() + self.step;
            self.t.set(t);
            t
        }
    }

    struct DelayMock;

    impl DelayNs for DelayMock {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    impl DelayNsAsync for DelayMock {
        async fn delay_ns(&mut self, _ns: u32) {}
    }

    fn sensor(
        behavior: EchoBehavior,
        pulse_us: u64,
    ) -> RangeSensor<TriggerMock, EchoMock, StepClock, DelayMock> {
        RangeSensor::new(
            TriggerMock,
            EchoMock(behavior),
            StepClock::new(pulse_us),
            DelayMock,
        )
    }

    #[test]
    fn echo_pulse_converts_to_centimeters() {
        // 1160us round trip / 58 = 20cm
        let mut sensor = sensor(EchoBehavior::Respond, 1160);
        assert_eq!(block_on(sensor.measure()), Ok(20));
    }

    #[test]
    fn sub_centimeter_pulse_truncates_to_zero() {
        let mut sensor = sensor(EchoBehavior::Respond, 57);
        assert_eq!(block_on(sensor.measure()), Ok(0));
    }

    #[test]
    fn missing_rising_edge_is_a_start_timeout() {
        let mut sensor = sensor(EchoBehavior::NeverRise, 1160);
        assert_eq!(
            block_on(sensor.measure()),
            Err(SensorError::EchoStartTimeout)
        );
    }

    #[test]
    fn missing_falling_edge_is_an_end_timeout() {
        let mut sensor = sensor(EchoBehavior::NeverFall, 1160);
        assert_eq!(block_on(sensor.measure()), Err(SensorError::EchoEndTimeout));
    }

    #[test]
    fn zero_width_pulse_is_rejected() {
        let mut sensor = sensor(EchoBehavior::Respond, 0);
        assert_eq!(block_on(sensor.measure()), Err(SensorError::EchoEndTimeout));
    }

    #[test]
    fn stale_high_echo_line_is_not_retriggered() {
        let mut sensor = sensor(EchoBehavior::StuckHigh, 1160);
        assert_eq!(block_on(sensor.measure()), Err(SensorError::EchoEndTimeout));
    }
}
