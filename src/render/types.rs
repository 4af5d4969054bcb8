//! Style attributes shared by every shape, and the chained setters over them

use crate::types::{Color, NONE_COLOR};

use super::defaults;

/// Fill, stroke and line style of a shape.
///
/// Fields are only reachable through [`Styled`] setters; read access goes
/// through the getters below.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleAttributes {
    fill: Color,
    stroke: Color,
    stroke_width: f64,
    stroke_line_cap: Option<String>,
    stroke_line_join: Option<String>,
}

impl Default for StyleAttributes {
    fn default() -> Self {
        Self {
            fill: NONE_COLOR,
            stroke: NONE_COLOR,
            stroke_width: defaults::STROKE_WIDTH,
            stroke_line_cap: None,
            stroke_line_join: None,
        }
    }
}

impl StyleAttributes {
    pub fn fill(&self) -> &Color {
        &self.fill
    }

    pub fn stroke(&self) -> &Color {
        &self.stroke
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn stroke_line_cap(&self) -> Option<&str> {
        self.stroke_line_cap.as_deref()
    }

    pub fn stroke_line_join(&self) -> Option<&str> {
        self.stroke_line_join.as_deref()
    }
}

/// Chained style setters shared by all shapes.
///
/// Each setter mutates the shape in place and hands back `&mut Self` typed as
/// the concrete shape, so shared and shape-specific setters mix freely:
///
/// ```
/// use svgdoc::{Circle, Styled};
///
/// let mut dot = Circle::new();
/// dot.set_fill_color("white").set_radius(6.0).set_stroke_width(2.0);
/// assert_eq!(dot.radius(), 6.0);
/// ```
pub trait Styled {
    fn style_mut(&mut self) -> &mut StyleAttributes;

    fn set_fill_color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.style_mut().fill = color.into();
        self
    }

    fn set_stroke_color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.style_mut().stroke = color.into();
        self
    }

    fn set_stroke_width(&mut self, width: f64) -> &mut Self {
        self.style_mut().stroke_width = width;
        self
    }

    fn set_stroke_line_cap(&mut self, line_cap: impl Into<String>) -> &mut Self {
        self.style_mut().stroke_line_cap = Some(line_cap.into());
        self
    }

    fn set_stroke_line_join(&mut self, line_join: impl Into<String>) -> &mut Self {
        self.style_mut().stroke_line_join = Some(line_join.into());
        self
    }
}
