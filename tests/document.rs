//! End-to-end rendering of whole documents.

use std::io::{self, Write};

use regex_lite::Regex;
use svgdoc::prelude::*;
use svgdoc::RenderError;
use svgdoc::render::defaults::SVG_NS;

/// The C/C++ logo: a thick line with a dot and a label at each end.
fn logo() -> Document {
    let mut svg = Document::new();

    svg.add(
        Polyline::new()
            .set_stroke_color(Rgb::new(255, 198, 63))
            .set_stroke_width(16.0)
            .set_stroke_line_cap("round")
            .add_point((50.0, 50.0))
            .add_point((250.0, 250.0)),
    );

    for point in [Point::new(50.0, 50.0), Point::new(250.0, 250.0)] {
        svg.add(Circle::new().set_fill_color("white").set_radius(6.0).set_center(point));
    }

    for (point, label) in [((50.0, 50.0), "C"), ((250.0, 250.0), "C++")] {
        svg.add(
            Text::new()
                .set_point(point)
                .set_offset((10.0, -10.0))
                .set_font_size(20)
                .set_font_family("Verdana")
                .set_fill_color("black")
                .set_data(label),
        );
    }

    svg
}

fn element_names(svg: &str) -> Vec<String> {
    let re = Regex::new(r"<([a-z]+)[ >]").unwrap();
    re.captures_iter(svg).map(|c| c[1].to_string()).collect()
}

#[test]
fn logo_snapshot() {
    insta::assert_snapshot!(
        logo().render_to_string(),
        @r#"<?xml version="1.0" encoding="UTF-8" ?><svg xmlns="http://www.w3.org/2000/svg" version="1.1"><polyline points="50,50 250,250 " fill="none" stroke="rgb(255,198,63)" stroke-width="16" stroke-linecap="round" /><circle cx="50" cy="50" r="6" fill="white" stroke="none" stroke-width="1" /><circle cx="250" cy="250" r="6" fill="white" stroke="none" stroke-width="1" /><text x="50" y="50" dx="10" dy="-10" fill="black" stroke="none" font-size="20" stroke-width="1" stroke-linejoin="Verdana" >C</text><text x="250" y="250" dx="10" dy="-10" fill="black" stroke="none" font-size="20" stroke-width="1" stroke-linejoin="Verdana" >C++</text></svg>"#
    );
}

#[test]
fn logo_element_order() {
    let svg = logo().render_to_string();
    assert_eq!(
        element_names(&svg),
        ["svg", "polyline", "circle", "circle", "text", "text"]
    );
}

#[test]
fn logo_is_well_formed_xml() {
    let svg = logo().render_to_string();
    let doc = roxmltree::Document::parse(&svg).unwrap();

    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.tag_name().namespace(), Some(SVG_NS));
    assert_eq!(root.attribute("version"), Some("1.1"));

    let children: Vec<_> = root.children().filter(|n| n.is_element()).collect();
    assert_eq!(children.len(), 5);
    assert_eq!(children[3].text(), Some("C"));
    assert_eq!(children[4].attribute("font-size"), Some("20"));
}

#[test]
fn font_family_and_line_join_repeat_the_attribute() {
    let mut doc = Document::new();
    doc.add(
        Text::new()
            .set_font_family("Verdana")
            .set_stroke_line_join("round")
            .set_data("x"),
    );

    let svg = doc.render_to_string();
    assert_eq!(svg.matches("stroke-linejoin=").count(), 2);
    assert!(svg.contains(r#"stroke-linejoin="Verdana" stroke-linejoin="round" >x</text>"#));
    // XML parsers reject the repeated name
    assert!(roxmltree::Document::parse(&svg).is_err());
}

#[test]
fn every_shape_has_default_style_block() {
    let mut doc = Document::new();
    doc.add(Circle::new());
    doc.add(Polyline::new());
    doc.add(Text::new());

    let svg = doc.render_to_string();
    let block = r#"fill="none" stroke="none" "#;
    assert_eq!(svg.matches(block).count(), 3);
    assert_eq!(svg.matches(r#"stroke-width="1" "#).count(), 3);
}

#[test]
fn render_is_repeatable() {
    let doc = logo();

    let mut first = Vec::new();
    let mut second = Vec::new();
    doc.render(&mut first).unwrap();
    doc.render(&mut second).unwrap();
    assert_eq!(first, second);
}

/// Accepts `budget` bytes, then fails every write.
struct FailingSink {
    written: Vec<u8>,
    budget: usize,
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.budget == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        let n = buf.len().min(self.budget);
        self.written.extend_from_slice(&buf[..n]);
        self.budget -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failure_propagates_and_document_survives() {
    let doc = logo();
    let mut sink = FailingSink { written: Vec::new(), budget: 100 };

    let err = doc.render(&mut sink).unwrap_err();
    let RenderError::Io(io_err) = err;
    assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(sink.written.len(), 100);

    let mut out = Vec::new();
    doc.render(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), doc.render_to_string());
}
