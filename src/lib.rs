//! Build SVG documents in memory and write them out as markup.
//!
//! Shapes ([`Circle`], [`Polyline`], [`Text`]) are configured through chained
//! setters, added to a [`Document`], and rendered to any [`std::io::Write`]
//! sink as a single line of SVG.
//!
//! ```
//! use svgdoc::prelude::*;
//!
//! let mut doc = Document::new();
//! doc.add(
//!     Polyline::new()
//!         .set_stroke_color(Rgb::new(255, 198, 63))
//!         .set_stroke_width(16.0)
//!         .add_point((50.0, 50.0))
//!         .add_point((250.0, 250.0)),
//! );
//! doc.add(Circle::new().set_fill_color("white").set_radius(6.0).set_center((50.0, 50.0)));
//!
//! let mut out = Vec::new();
//! doc.render(&mut out)?;
//! assert!(out.starts_with(b"<?xml"));
//! # Ok::<(), svgdoc::RenderError>(())
//! ```

pub mod errors;
pub(crate) mod log;
pub mod render;
pub mod types;

pub use errors::RenderError;
pub use render::{Circle, Document, Figure, Polyline, Shape, StyleAttributes, Styled, Text};
pub use types::{Color, NONE_COLOR, Point, Rgb};

/// Everything needed to build and render a document.
pub mod prelude {
    pub use crate::{Circle, Color, Document, Figure, Point, Polyline, Rgb, Shape, Styled, Text};
}
