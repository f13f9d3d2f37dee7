//! # range-sense
//!
//! A `no_std` measurement pipeline for HC-SR04 class ultrasonic distance
//! sensors: trigger/echo pulse timing, a sliding-window median filter to
//! suppress single-sample glitches, a two-threshold hysteresis detector
//! for a stable near/far classification, and text rendering for a small
//! character display plus a tri-state color indicator.
//!
//! The crate is hardware-agnostic. The sensor driver is generic over
//! `embedded-hal` pins, an async edge-wait capability and a microsecond
//! clock, so the pipeline runs unchanged on real GPIO or on mocks in
//! host tests.
//!
//! # Example
//!
//! ```rust, ignore
//! use range_sense::{RangePipeline, RangeSensor};
//!
//! let mut sensor = RangeSensor::new(trigger, echo, clock, delay);
//! let mut pipeline = RangePipeline::new("TRIG GP12  ECHO GP13");
//!
//! loop {
//!     let frame = pipeline.on_reading(sensor.measure().await);
//!     // hand frame.headline / frame.detail to the display sink and
//!     // frame.indicator to the LED sink, then sleep one period
//! }
//! ```

#![no_std]

pub mod filter;
pub mod format;
pub mod pipeline;
pub mod presence;
pub mod sensor;

pub use filter::MedianFilter;
pub use format::{Frame, IndicatorColor};
pub use pipeline::RangePipeline;
pub use presence::{Presence, PresenceDetector};
pub use sensor::{Now, RangeSensor, SensorError};
