//! Render the C/C++ logo to stdout.
//!
//! Run with: RUST_LOG=debug cargo run --example logo --features tracing

use svgdoc::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

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

    svg.add(
        Text::new()
            .set_point((50.0, 50.0))
            .set_offset((10.0, -10.0))
            .set_font_size(20)
            .set_font_family("Verdana")
            .set_fill_color("black")
            .set_data("C"),
    );
    svg.add(
        Text::new()
            .set_point((250.0, 250.0))
            .set_offset((10.0, -10.0))
            .set_font_size(20)
            .set_font_family("Verdana")
            .set_fill_color("black")
            .set_data("C++"),
    );

    tracing::info!(shapes = svg.len(), "logo built");
    svg.render(std::io::stdout().lock())?;
    Ok(())
}
