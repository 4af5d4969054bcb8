//! Default style values and the fixed pieces of the document envelope

pub const STROKE_WIDTH: f64 = 1.0;
pub const FONT_SIZE: u32 = 1;

/// SVG namespace URI, written into the root element
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
/// SVG version, written into the root element
pub const SVG_VERSION: &str = "1.1";

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;
pub const SVG_CLOSE: &str = "</svg>";
