//! SVG document rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Default style values and the document envelope
//! - `types`: Shared style attributes and the chained setters
//! - `shapes`: Circle, Polyline, Text and the `Shape` enum
//! - `svg`: Attribute and number formatting

pub mod defaults;
pub mod shapes;
pub(crate) mod svg;
pub mod types;

use std::fmt;
use std::io;

use crate::errors::RenderError;
use crate::log::{debug, trace};
use svg::SvgOpen;

pub use shapes::{Circle, Figure, Polyline, Shape, Text};
pub use types::{StyleAttributes, Styled};

/// An ordered collection of shapes, rendered as one SVG document.
///
/// Shapes are owned by the document and rendered in insertion order. Once
/// added they are never changed or removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape. Accepts a shape value or the `&mut` a setter chain
    /// ends in; in the latter case the document stores a copy.
    pub fn add(&mut self, shape: impl Into<Shape>) {
        let shape: Shape = shape.into();
        debug!(kind = shape.kind(), index = self.shapes.len(), "adding shape");
        self.shapes.push(shape);
    }

    /// Number of shapes added so far
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True when no shape has been added
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in rendering order
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Write the whole document to `sink`.
    ///
    /// A failed write is returned as is; the sink keeps whatever was written
    /// before it, and the document can be rendered again.
    pub fn render<W: io::Write>(&self, mut sink: W) -> Result<(), RenderError> {
        debug!(shapes = self.shapes.len(), "rendering document");

        sink.write_all(defaults::XML_DECLARATION.as_bytes())?;
        write!(sink, "{SvgOpen}")?;
        for shape in &self.shapes {
            trace!(kind = shape.kind(), "writing shape");
            write!(sink, "{shape}")?;
        }
        sink.write_all(defaults::SVG_CLOSE.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Render into a `String`. Cannot fail.
    pub fn render_to_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(defaults::XML_DECLARATION)?;
        write!(f, "{SvgOpen}")?;
        for shape in &self.shapes {
            shape.write_svg(f)?;
        }
        f.write_str(defaults::SVG_CLOSE)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

impl Extend<Shape> for Document {
    fn extend<I: IntoIterator<Item = Shape>>(&mut self, iter: I) {
        for shape in iter {
            self.add(shape);
        }
    }
}

impl FromIterator<Shape> for Document {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        let mut doc = Document::new();
        doc.extend(iter);
        doc
    }
}
