//! Paint recording.

use crate::widget::Canvas;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// One paint call, as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled pill or rounded box
    FillRoundedRect {
        /// Box
        bounds: Rect,
        /// Corner radius
        radius: f32,
        /// Fill
        color: Color,
    },
    /// Outlined pill or rounded box
    StrokeRoundedRect {
        /// Box
        bounds: Rect,
        /// Corner radius
        radius: f32,
        /// Stroke
        color: Color,
        /// Line width
        width: f32,
    },
    /// Filled circle
    FillCircle {
        /// Middle
        center: Point,
        /// Radius
        radius: f32,
        /// Fill
        color: Color,
    },
}

/// [`Canvas`] that keeps every call in order instead of drawing.
///
/// Tests inspect the list; a real backend can replay it.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of calls.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// True before the first call.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded circles as `(center, radius, color)`.
    pub fn circles(&self) -> impl Iterator<Item = (Point, f32, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rounded_rect(&mut self, bounds: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillRoundedRect {
            bounds,
            radius,
            color,
        });
    }

    fn stroke_rounded_rect(&mut self, bounds: Rect, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokeRoundedRect {
            bounds,
            radius,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_keeps_call_order() {
        let pill = Rect::new(0.0, 0.0, 10.0, 5.0);
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rounded_rect(pill, 2.5, Color::WHITE);
        canvas.fill_circle(Point::new(2.0, 2.0), 1.0, Color::BLACK);
        canvas.stroke_rounded_rect(pill, 2.5, Color::BLACK, 1.0);

        let kinds: Vec<_> = canvas
            .commands()
            .iter()
            .map(|cmd| match cmd {
                DrawCommand::FillRoundedRect { .. } => "fill",
                DrawCommand::FillCircle { .. } => "circle",
                DrawCommand::StrokeRoundedRect { .. } => "stroke",
            })
            .collect();
        assert_eq!(kinds, ["fill", "circle", "stroke"]);
    }

    #[test]
    fn test_circles_skips_other_shapes() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rounded_rect(Rect::default(), 0.0, Color::WHITE);
        canvas.fill_circle(Point::new(4.0, 5.0), 3.0, Color::BLACK);

        let circles: Vec<_> = canvas.circles().collect();
        assert_eq!(circles, vec![(Point::new(4.0, 5.0), 3.0, Color::BLACK)]);
    }
}
