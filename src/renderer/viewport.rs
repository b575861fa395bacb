//! Draw-primitive boundary
//!
//! The render pass only ever pushes primitives through [`Viewport`]; it never
//! reads anything back. Coordinates arriving here are already in viewport
//! pixels.

use super::color::Color;
use crate::sim::geometry::{Point, Shape};

/// Fixed text presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Status bar labels
    Title,
    /// Status bar numbers
    Value,
    /// Large centered message
    Banner,
}

/// A surface that turns draw primitives into pixels
pub trait Viewport {
    /// Filled polygon, `shape` relative to `origin`
    fn render_filled_shape(&mut self, origin: Point, shape: &Shape, color: Color);

    /// A single cell
    fn render_point(&mut self, position: Point, color: Color);

    /// Polygon outline in the debug colour, `shape` relative to `origin`
    fn render_outline(&mut self, origin: Point, shape: &Shape);

    fn render_text(&mut self, position: Point, text: &str, style: TextStyle);

    /// Clear the surface for a new frame
    fn reset(&mut self);
}
