//! SVG file rendering

use crate::resource::IconResource;
use std::fmt::Write as _;

/// Render a standalone SVG file for an icon
///
/// The container is sized `1em` and its `viewBox` is `0 0 width height`.
#[must_use]
pub fn render_svg(icon: &IconResource) -> String {
    let mut out = String::with_capacity(icon.body().len() + 192);
    out.push_str(r#"<svg  xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" aria-hidden="true" role="img" width="1em" height="1em" viewBox="0 0 "#);
    push_number(&mut out, icon.width());
    out.push(' ');
    push_number(&mut out, icon.height());
    out.push_str("\">");
    out.push_str(icon.body());
    out.push_str("</svg>");
    out
}

/// Integral values print without a fractional part
#[allow(clippy::cast_possible_truncation)]
fn push_number(out: &mut String, value: f64) {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        let _ = write!(out, "{}", value as i64);
    } else {
        let _ = write!(out, "{value}");
    }
}
