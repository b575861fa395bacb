//! Recording viewport
//!
//! Keeps the primitives of the latest frame instead of rasterising them. The
//! headless host and the tests render into this.

use super::color::{Color, colors};
use super::viewport::{TextStyle, Viewport};
use crate::sim::geometry::{Point, Shape};

/// One recorded primitive, in viewport pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FilledShape {
        origin: Point,
        points: Vec<Point>,
        color: Color,
    },
    Point {
        position: Point,
        color: Color,
    },
    Outline {
        origin: Point,
        points: Vec<Point>,
        color: Color,
    },
    Text {
        position: Point,
        text: String,
        style: TextStyle,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the current frame, in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of resets seen, i.e. frames started
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every text label of the current frame
    pub fn texts(&self) -> impl Iterator<Item = (&str, TextStyle)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, style, .. } => Some((text.as_str(), *style)),
            _ => None,
        })
    }

    pub fn point_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Point { .. }))
            .count()
    }

    pub fn outline_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Outline { .. }))
            .count()
    }
}

impl Viewport for DrawList {
    fn render_filled_shape(&mut self, origin: Point, shape: &Shape, color: Color) {
        self.commands.push(DrawCommand::FilledShape {
            origin,
            points: shape.to_vec(),
            color,
        });
    }

    fn render_point(&mut self, position: Point, color: Color) {
        self.commands.push(DrawCommand::Point { position, color });
    }

    fn render_outline(&mut self, origin: Point, shape: &Shape) {
        self.commands.push(DrawCommand::Outline {
            origin,
            points: shape.to_vec(),
            color: colors::HITBOX,
        });
    }

    fn render_text(&mut self, position: Point, text: &str, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_owned(),
            style,
        });
    }

    fn reset(&mut self) {
        self.commands.clear();
        self.frames += 1;
    }
}
