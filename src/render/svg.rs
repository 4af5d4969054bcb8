//! SVG attribute writing
//!
//! Every attribute is written as `name="value" ` with the trailing space, and
//! numbers go through [`fmt_num`] so output matches C stream formatting.

use std::fmt::{self, Write};

use super::defaults;
use super::types::StyleAttributes;

/// The root `<svg>` start tag, built from the namespace and version constants
#[derive(Clone, Copy, Debug)]
pub(crate) struct SvgOpen;

impl fmt::Display for SvgOpen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<svg xmlns=\"{}\" version=\"{}\">",
            defaults::SVG_NS,
            defaults::SVG_VERSION
        )
    }
}

/// Format a number matching C's %g format (6 significant figures, trailing zeros trimmed).
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with `sig_figs` significant figures the way `%.<sig_figs>g` does:
/// plain notation for exponents in `-4..sig_figs`, scientific otherwise.
fn fmt_num_precision(value: f64, sig_figs: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to significant figures first decides the exponent, so 999999.5
    // becomes 1e+06 rather than 999999 or 1000000.
    let sci = format!("{:.*e}", sig_figs.saturating_sub(1), value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= sig_figs as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.unsigned_abs())
    } else {
        let decimals = (sig_figs as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Display adapter for a number in attribute position
#[derive(Clone, Copy, Debug)]
pub(crate) struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_num(self.0))
    }
}

pub(crate) fn write_attr(out: &mut dyn Write, name: &str, value: impl fmt::Display) -> fmt::Result {
    write!(out, "{name}=\"{value}\" ")
}

/// `fill` then `stroke`
pub(crate) fn write_paint(out: &mut dyn Write, style: &StyleAttributes) -> fmt::Result {
    write_attr(out, "fill", style.fill())?;
    write_attr(out, "stroke", style.stroke())
}

pub(crate) fn write_stroke_width(out: &mut dyn Write, style: &StyleAttributes) -> fmt::Result {
    write_attr(out, "stroke-width", Num(style.stroke_width()))
}

/// The optional `stroke-linecap` then `stroke-linejoin`
pub(crate) fn write_line_style(out: &mut dyn Write, style: &StyleAttributes) -> fmt::Result {
    if let Some(cap) = style.stroke_line_cap() {
        write_attr(out, "stroke-linecap", cap)?;
    }
    if let Some(join) = style.stroke_line_join() {
        write_attr(out, "stroke-linejoin", join)?;
    }
    Ok(())
}
