pub mod display;
pub mod range_monitor;
pub mod rgb_led_indicate;
