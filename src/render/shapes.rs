//! Shape types for SVG documents
//!
//! Each shape owns its geometry plus a [`StyleAttributes`] block and knows how
//! to write itself as a single SVG element. The attribute order of every
//! element is fixed, trailing spaces included.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::types::Point;

use super::defaults;
use super::svg::{Num, write_attr, write_line_style, write_paint, write_stroke_width};
use super::types::{StyleAttributes, Styled};

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Figure {
    /// The SVG element name
    fn kind(&self) -> &'static str;

    /// The style properties (stroke, fill, etc.)
    fn style(&self) -> &StyleAttributes;

    /// Write this shape as one SVG element
    fn write_svg(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

// ============================================================================
// Shape Types
// ============================================================================

/// A circle shape
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    style: StyleAttributes,
    center: Point,
    radius: f64,
}

impl Circle {
    /// Create a circle of radius 0 at the origin with default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the center point (`cx`/`cy`)
    pub fn set_center(&mut self, center: impl Into<Point>) -> &mut Self {
        self.center = center.into();
        self
    }

    /// Negative radii are kept as given.
    pub fn set_radius(&mut self, radius: f64) -> &mut Self {
        self.radius = radius;
        self
    }

    /// The center point
    pub fn center(&self) -> Point {
        self.center
    }

    /// The radius, as given
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Figure for Circle {
    fn kind(&self) -> &'static str {
        "circle"
    }

    fn style(&self) -> &StyleAttributes {
        &self.style
    }

    fn write_svg(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str("<circle ")?;
        write_attr(out, "cx", Num(self.center.x))?;
        write_attr(out, "cy", Num(self.center.y))?;
        write_attr(out, "r", Num(self.radius))?;
        write_paint(out, &self.style)?;
        write_stroke_width(out, &self.style)?;
        write_line_style(out, &self.style)?;
        out.write_str("/>")
    }
}

/// An open sequence of connected points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    style: StyleAttributes,
    points: Vec<Point>,
}

impl Polyline {
    /// Create an empty polyline with default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex. Duplicates are kept.
    pub fn add_point(&mut self, point: impl Into<Point>) -> &mut Self {
        self.points.push(point.into());
        self
    }

    /// Vertices in insertion order
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Figure for Polyline {
    fn kind(&self) -> &'static str {
        "polyline"
    }

    fn style(&self) -> &StyleAttributes {
        &self.style
    }

    fn write_svg(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str("<polyline points=\"")?;
        // every vertex is followed by a space, the last one included
        for point in &self.points {
            write!(out, "{},{} ", Num(point.x), Num(point.y))?;
        }
        out.write_str("\" ")?;
        write_paint(out, &self.style)?;
        write_stroke_width(out, &self.style)?;
        write_line_style(out, &self.style)?;
        out.write_str("/>")
    }
}

/// A text label anchored at a point
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    style: StyleAttributes,
    anchor: Point,
    offset: Point,
    font_size: u32,
    font_family: Option<String>,
    data: String,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            style: StyleAttributes::default(),
            anchor: Point::ORIGIN,
            offset: Point::ORIGIN,
            font_size: defaults::FONT_SIZE,
            font_family: None,
            data: String::new(),
        }
    }
}

impl Text {
    /// Create an empty label at the origin with font size 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the anchor point (`x`/`y`)
    pub fn set_point(&mut self, point: impl Into<Point>) -> &mut Self {
        self.anchor = point.into();
        self
    }

    /// Set the offset from the anchor (`dx`/`dy`)
    pub fn set_offset(&mut self, offset: impl Into<Point>) -> &mut Self {
        self.offset = offset.into();
        self
    }

    /// Set the font size (`font-size`)
    pub fn set_font_size(&mut self, size: u32) -> &mut Self {
        self.font_size = size;
        self
    }

    /// Set the font family
    pub fn set_font_family(&mut self, family: impl Into<String>) -> &mut Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set the text content. It is written without escaping.
    pub fn set_data(&mut self, data: impl Into<String>) -> &mut Self {
        self.data = data.into();
        self
    }

    /// The anchor point
    pub fn point(&self) -> Point {
        self.anchor
    }

    /// The offset from the anchor
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// The font size
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// The font family, if set
    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    /// The text content
    pub fn data(&self) -> &str {
        &self.data
    }
}

impl Figure for Text {
    fn kind(&self) -> &'static str {
        "text"
    }

    fn style(&self) -> &StyleAttributes {
        &self.style
    }

    fn write_svg(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str("<text ")?;
        write_attr(out, "x", Num(self.anchor.x))?;
        write_attr(out, "y", Num(self.anchor.y))?;
        write_attr(out, "dx", Num(self.offset.x))?;
        write_attr(out, "dy", Num(self.offset.y))?;
        write_paint(out, &self.style)?;
        write_attr(out, "font-size", self.font_size)?;
        write_stroke_width(out, &self.style)?;
        // Existing consumers read the family from `stroke-linejoin`; keep it there
        // even though a real line join then repeats the attribute name.
        if let Some(family) = &self.font_family {
            write_attr(out, "stroke-linejoin", family)?;
        }
        write_line_style(out, &self.style)?;
        write!(out, ">{}</text>", self.data)
    }
}

macro_rules! impl_shape_common {
    ($($ty:ident),*) => {
        $(
            impl Styled for $ty {
                fn style_mut(&mut self) -> &mut StyleAttributes {
                    &mut self.style
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.write_svg(f)
                }
            }

            /// A setter chain ends in `&mut` of the shape; the document keeps a copy.
            impl From<&mut $ty> for Shape {
                fn from(shape: &mut $ty) -> Self {
                    Shape::$ty(shape.clone())
                }
            }
        )*
    };
}

impl_shape_common!(Circle, Polyline, Text);

// ============================================================================
// Shape Enum
// ============================================================================

/// Any shape a document can hold
#[enum_dispatch(Figure)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle,
    Polyline,
    Text,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_svg(f)
    }
}
