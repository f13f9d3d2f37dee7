//! SSD1306 display task
//!
//! Draws the latest rendered frame: distance headline in a large font,
//! bar gauge (or failure hint) in a small one below it. Pixel geometry
//! is decided here; the pipeline only produces text.

use crate::system::{event, resources};
use embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice;
use embedded_graphics::{
    mono_font::{
        ascii::{FONT_6X10, FONT_9X18_BOLD},
        MonoTextStyleBuilder,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use ssd1306_async::{prelude::*, I2CDisplayInterface, Ssd1306};

#[embassy_executor::task]
pub async fn display() {
    let i2c_bus = resources::get_i2c();
    let display_i2c = I2cDevice::new(i2c_bus);
    let interface = I2CDisplayInterface::new(display_i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().await.unwrap();

    let headline_style = MonoTextStyleBuilder::new()
        .font(&FONT_9X18_BOLD)
        .text_color(BinaryColor::On)
        .build();
    let detail_style = MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build();

    loop {
        let frame = event::wait().await;

        display.clear();
        Text::with_baseline(&frame.headline, Point::zero(), headline_style, Baseline::Top)
            .draw(&mut display)
            .unwrap();
        Text::with_baseline(&frame.detail, Point::new(0, 24), detail_style, Baseline::Top)
            .draw(&mut display)
            .unwrap();
        display.flush().await.unwrap();
    }
}
