//! Value types shared by every shape: points and colors.

use std::fmt;

use glam::DVec2;

/// A point in user space. No unit, no validation.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// Explicit red/green/blue triple.
///
/// Channels are meant to be 0-255 but are stored wider and never clamped:
/// whatever goes in comes out in the `rgb(...)` text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl Rgb {
    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Rgb { red, green, blue }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

/// Paint for fill and stroke.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// No paint, rendered as `none`.
    #[default]
    None,
    /// Any color text, written out verbatim (`white`, `#fc0`, `currentColor`...).
    Named(String),
    Rgb(Rgb),
}

/// The shared "no color" default.
pub const NONE_COLOR: Color = Color::None;

impl Color {
    pub fn is_none(&self) -> bool {
        matches!(self, Color::None)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Named(s) => f.write_str(s),
            Color::Rgb(rgb) => rgb.fmt(f),
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Color::Named(name)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<(u16, u16, u16)> for Color {
    fn from((red, green, blue): (u16, u16, u16)) -> Self {
        Color::Rgb(Rgb { red, green, blue })
    }
}

impl From<&Color> for Color {
    fn from(color: &Color) -> Self {
        color.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_color_is_none() {
        assert_eq!(Color::default(), NONE_COLOR);
        assert_eq!(Color::default().to_string(), "none");
        assert!(NONE_COLOR.is_none());
    }

    #[test]
    fn named_color_is_verbatim() {
        assert_eq!(Color::from("white").to_string(), "white");
        // No validation and no escaping
        assert_eq!(Color::from("not a \"color\"").to_string(), "not a \"color\"");
        assert_eq!(Color::from(String::new()).to_string(), "");
    }

    #[test]
    fn rgb_renders_without_spaces() {
        assert_eq!(Color::from(Rgb::new(255, 198, 63)).to_string(), "rgb(255,198,63)");
        assert_eq!(Color::from((0, 7, 10)).to_string(), "rgb(0,7,10)");
    }

    #[test]
    fn rgb_channels_are_not_clamped() {
        let color = Color::from(Rgb::new(300, 0, 1000));
        assert_eq!(color.to_string(), "rgb(300,0,1000)");
    }

    #[test]
    fn point_conversions() {
        let p = Point::from((1.5, -2.0));
        assert_eq!(p, Point::new(1.5, -2.0));

        let v: DVec2 = p.into();
        assert_eq!(v, DVec2::new(1.5, -2.0));
        assert_eq!(Point::from(v * 2.0), Point::new(3.0, -4.0));
        assert_eq!(Point::default(), Point::ORIGIN);
    }
}
