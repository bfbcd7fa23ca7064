//! Frame building and drawing
//!
//! One frame per animation step. The frame layout matches the 128x32
//! panel: reading text in the top row, a horizontal bar near the
//! bottom whose length is proportional to the displayed value.

use core::fmt::Write;

use heapless::String;

use crate::ranging::DistanceReading;
use crate::traits::{DisplayDriver, DisplayError};

/// Baseline y position of the distance bar
pub const BAR_Y: u8 = 27;
/// Left end of the distance bar
pub const BAR_X0: u8 = 15;
/// Right end of the bar in the error frame (clipped by the panel)
pub const BAR_ERROR_X1: u8 = 200;
/// The bar extends from `BAR_X0` to `BAR_VALUE_X1 + value`
pub const BAR_VALUE_X1: u8 = 20;

/// Content of one rendered frame
///
/// Whether a frame is the error frame depends on the *target* of the
/// sweep, not the interpolated value: once a cycle fails, every frame
/// of that pass shows the error display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    /// Fixed error frame: text label plus full-width baseline mark
    Error,
    /// Numeric frame at the interpolated value
    Distance(i16),
}

impl Frame {
    /// Build the frame for one step of a sweep
    ///
    /// - `target`: raw value the sweep is animating toward
    /// - `value`: interpolated value for this step
    pub fn for_sweep(target: DistanceReading, value: i16) -> Self {
        if target.is_error() {
            Frame::Error
        } else {
            Frame::Distance(value)
        }
    }

    /// Repaint the full frame and flush it to the panel
    pub fn draw<D: DisplayDriver>(&self, display: &mut D) -> Result<(), DisplayError> {
        display.clear_buffer()?;

        match *self {
            Frame::Error => {
                display.draw_string(0, 10, 1, "Erro")?;
                display.draw_line(BAR_X0, BAR_Y, BAR_ERROR_X1, BAR_Y)?;
            }
            Frame::Distance(value) => {
                let mut text: String<20> = String::new();
                let _ = write!(text, "Distance: {} cm", value);
                display.draw_string(0, 0, 1, &text)?;

                let x1 = (BAR_VALUE_X1 as i16 + value).clamp(0, u8::MAX as i16) as u8;
                display.draw_line(BAR_X0, BAR_Y, x1, BAR_Y)?;
            }
        }

        display.show()
    }
}

/// Recording display for host tests (mirrors the hardware driver ops)
#[cfg(test)]
pub struct RecordingDisplay {
    pub ops: heapless::Vec<Op, 16>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Clear,
    Text { x: u8, y: u8, text: String<20> },
    Line { x0: u8, y0: u8, x1: u8, y1: u8 },
    Show,
}

#[cfg(test)]
impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            ops: heapless::Vec::new(),
        }
    }
}

#[cfg(test)]
impl DisplayDriver for RecordingDisplay {
    fn clear_buffer(&mut self) -> Result<(), DisplayError> {
        self.ops.push(Op::Clear).unwrap();
        Ok(())
    }

    fn draw_string(&mut self, x: u8, y: u8, _scale: u8, text: &str) -> Result<(), DisplayError> {
        let mut owned: String<20> = String::new();
        let _ = owned.push_str(text);
        self.ops.push(Op::Text { x, y, text: owned }).unwrap();
        Ok(())
    }

    fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), DisplayError> {
        self.ops.push(Op::Line { x0, y0, x1, y1 }).unwrap();
        Ok(())
    }

    fn show(&mut self) -> Result<(), DisplayError> {
        self.ops.push(Op::Show).unwrap();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_frame_layout() {
        let mut display = RecordingDisplay::new();
        Frame::Distance(8).draw(&mut display).unwrap();

        assert_eq!(display.ops.len(), 4);
        assert_eq!(display.ops[0], Op::Clear);
        assert!(matches!(
            &display.ops[1],
            Op::Text { x: 0, y: 0, text } if text.as_str() == "Distance: 8 cm"
        ));
        assert_eq!(
            display.ops[2],
            Op::Line { x0: 15, y0: 27, x1: 28, y1: 27 }
        );
        assert_eq!(display.ops[3], Op::Show);
    }

    #[test]
    fn test_error_frame_layout() {
        let mut display = RecordingDisplay::new();
        Frame::Error.draw(&mut display).unwrap();

        assert_eq!(display.ops.len(), 4);
        assert!(matches!(
            &display.ops[1],
            Op::Text { x: 0, y: 10, text } if text.as_str() == "Erro"
        ));
        assert_eq!(
            display.ops[2],
            Op::Line { x0: 15, y0: 27, x1: 200, y1: 27 }
        );
    }

    #[test]
    fn test_no_echo_target_selects_error_frame() {
        // Every step of a sweep toward the sentinel is the error frame,
        // whatever the interpolated value says
        assert_eq!(Frame::for_sweep(DistanceReading::NoEcho, 42), Frame::Error);
    }

    #[test]
    fn test_clamped_target_selects_error_frame() {
        assert_eq!(
            Frame::for_sweep(DistanceReading::Distance(200), 150),
            Frame::Error
        );
        assert_eq!(
            Frame::for_sweep(DistanceReading::Distance(199), 150),
            Frame::Distance(150)
        );
    }

    #[test]
    fn test_bar_length_tracks_value() {
        let mut display = RecordingDisplay::new();
        Frame::Distance(0).draw(&mut display).unwrap();
        assert_eq!(
            display.ops[2],
            Op::Line { x0: 15, y0: 27, x1: 20, y1: 27 }
        );

        let mut display = RecordingDisplay::new();
        Frame::Distance(200).draw(&mut display).unwrap();
        assert_eq!(
            display.ops[2],
            Op::Line { x0: 15, y0: 27, x1: 220, y1: 27 }
        );
    }
}
