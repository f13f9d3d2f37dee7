//! Text rendering for the display and indicator sinks
//!
//! Produces a [`Frame`]: a headline, a detail line (bar gauge or
//! wiring hint) and an indicator color. No I/O happens here; the
//! firmware display task decides fonts and pixel geometry.

use core::fmt::Write;

use heapless::String;

use crate::presence::Presence;

/// Printable slots in the bar gauge
pub const BAR_SLOTS: usize = 20;

/// Distance that renders a fully filled bar (cm). Anything beyond
/// full scale still renders a full bar.
pub const BAR_FULL_SCALE_CM: u32 = 100;

/// Ceiling for the numeric readout (cm)
pub const DISPLAY_MAX_CM: u32 = 9999;

/// Capacity of one rendered text line
pub const LINE_CHARS: usize = 24;

/// Tri-state command for the indicator sink. Drive polarity is the
/// sink's concern, not part of the rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorColor {
    /// Target present (green on the reference board)
    Normal,
    /// Target away (yellow)
    Caution,
    /// Sensor failure (red)
    Fail,
}

/// One rendered measurement cycle, ready for the sinks to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub headline: String<LINE_CHARS>,
    pub detail: String<LINE_CHARS>,
    pub indicator: IndicatorColor,
}

/// Renders a successful cycle: distance headline, bar gauge and the
/// presence color mapping (Near is the normal condition, Far the
/// cautionary one).
pub fn render(cm: u32, presence: Presence) -> Frame {
    let cm = cm.min(DISPLAY_MAX_CM);
    let mut headline = String::new();
    // "Dist: 9999 cm" always fits LINE_CHARS
    let _ = write!(headline, "Dist: {cm} cm");

    let mut detail = String::new();
    let _ = detail.push_str(&make_bar(cm));

    let indicator = match presence {
        Presence::Near => IndicatorColor::Normal,
        Presence::Far => IndicatorColor::Caution,
    };

    Frame {
        headline,
        detail,
        indicator,
    }
}

/// Renders the fail state: headline plus a diagnostic line (typically
/// the sensor wiring hint). Hints longer than one line are dropped.
pub fn render_failure(hint: &str) -> Frame {
    let mut headline = String::new();
    let _ = headline.push_str("Sensor FAIL");
    let mut detail = String::new();
    let _ = detail.push_str(hint);

    Frame {
        headline,
        detail,
        indicator: IndicatorColor::Fail,
    }
}

/// Proportional bar gauge: `filled = clamp(cm, 0, 100) * 20 / 100`
/// slots of `#`, the rest `-`. Full scale is fixed at 100cm no matter
/// the sensor's actual range.
pub fn make_bar(cm: u32) -> String<BAR_SLOTS> {
    let filled = (cm.min(BAR_FULL_SCALE_CM) as usize * BAR_SLOTS) / BAR_FULL_SCALE_CM as usize;
    let mut bar = String::new();
    for slot in 0..BAR_SLOTS {
        let _ = bar.push(if slot < filled { '#' } else { '-' });
    }
    bar
}
