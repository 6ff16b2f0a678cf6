//! SVG preview of an arrangement.
//!
//! Draws the canvas as a single scaled panel with the margin box dashed and
//! every placement outlined and labelled with its image id. A header line
//! names the strategy that ran and whether the grid fallback replaced it.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use zencollage::{CanvasBounds, ImageDescriptor, ImageId, LayoutConfig, LayoutEngine, Strategy};
//! use zencollage::svg::render_arrangement_svg;
//!
//! let config = LayoutConfig::default();
//! let engine = LayoutEngine::new(config).unwrap();
//! let images = [
//!     ImageDescriptor::new(ImageId(1), 1600, 900).unwrap(),
//!     ImageDescriptor::new(ImageId(2), 900, 1600).unwrap(),
//! ];
//! let bounds = CanvasBounds::new(1920.0, 1080.0).unwrap();
//! let out = engine
//!     .apply(Strategy::Masonry, &images, bounds, &mut StdRng::seed_from_u64(1))
//!     .unwrap();
//!
//! let svg = render_arrangement_svg(&out, bounds, config.margin);
//! assert!(svg.contains("#2"));
//! ```

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::engine::Arrangement;
use crate::image::CanvasBounds;

/// Maximum pixel width of the canvas panel.
const MAX_PANEL_W: f64 = 600.0;
/// Maximum pixel height of the canvas panel.
const MAX_PANEL_H: f64 = 400.0;
/// Horizontal margin around the panel.
const MARGIN_X: f64 = 30.0;
/// Top margin above the header.
const MARGIN_TOP: f64 = 24.0;
/// Height of the header text area above the panel.
const LABEL_H: f64 = 26.0;
/// Space below the panel for the footer annotation.
const FOOTER_H: f64 = 30.0;

/// Render a complete SVG document previewing `arrangement` on `bounds`.
///
/// `margin` is the configured canvas margin; it is drawn as a dashed box.
/// Placements outside the canvas are drawn as-is and may be clipped.
pub fn render_arrangement_svg(arrangement: &Arrangement, bounds: CanvasBounds, margin: f64) -> String {
    let (pw, ph, scale) = panel_scale(bounds);
    let total_w = pw.max(MAX_PANEL_W / 2.0) + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + LABEL_H + ph + FOOTER_H;
    let panel_x = (total_w - pw) / 2.0;
    let panel_y = MARGIN_TOP + LABEL_H;

    let mut svg = String::with_capacity(1024 + arrangement.placements.len() * 192);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {:.1} {:.1}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Style: light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .id { font-size: 10px; fill: #fff; }
  .canvas { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .margin { fill: none; stroke: #999; stroke-width: 1; stroke-dasharray: 4,2; }
  .placement { fill: #6ba3d6; fill-opacity: 0.85; stroke: #2c6faa; stroke-width: 1.5; }
  .fallback .placement { fill: #d6a36b; stroke: #aa6f2c; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .canvas { fill: #2d2d2d; stroke: #555; }
    .margin { stroke: #777; }
    .placement { fill: #3a72a4; stroke: #5a9fd4; }
    .fallback .placement { fill: #a4723a; stroke: #d49f5a; }
  }
</style>
"##,
    );

    let center_x = total_w / 2.0;
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + 14.0,
        escape_xml(&header(arrangement, bounds))
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="canvas" rx="2"/>"#,
        panel_x, panel_y, pw, ph
    ));
    svg.push('\n');

    let mw = (bounds.width - 2.0 * margin) * scale;
    let mh = (bounds.height - 2.0 * margin) * scale;
    if margin > 0.0 && mw > 0.0 && mh > 0.0 {
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="margin"/>"#,
            panel_x + margin * scale,
            panel_y + margin * scale,
            mw,
            mh
        ));
        svg.push('\n');
    }

    let group_class = if arrangement.fell_back { "fallback" } else { "placements" };
    svg.push_str(&format!(r#"<g class="{group_class}">"#));
    svg.push('\n');
    for p in &arrangement.placements {
        let x = panel_x + p.x * scale;
        let y = panel_y + p.y * scale;
        let w = p.width * scale;
        let h = p.height * scale;
        svg.push_str(&format!(
            r#"  <rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="placement" rx="1"/>"#
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <text x="{:.1}" y="{:.1}" class="id" text-anchor="middle">{}</text>"#,
            x + w / 2.0,
            y + h / 2.0 + 4.0,
            escape_xml(&format!("{}", p.image_id))
        ));
        svg.push('\n');
    }
    svg.push_str("</g>\n");

    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
        center_x,
        panel_y + ph + 18.0,
        escape_xml(&footer(arrangement, margin))
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

fn header(arrangement: &Arrangement, bounds: CanvasBounds) -> String {
    let size = format!("{}×{}", bounds.width, bounds.height);
    if arrangement.fell_back {
        format!(
            "{}  {size}  ({} fell back to {})",
            arrangement.used, arrangement.requested, arrangement.used
        )
    } else {
        format!("{}  {size}", arrangement.used)
    }
}

fn footer(arrangement: &Arrangement, margin: f64) -> String {
    match arrangement.content_bounds() {
        Some((l, t, r, b)) => format!(
            "{} images, content {:.0}×{:.0} at ({:.0}, {:.0}), margin {margin}",
            arrangement.placements.len(),
            r - l,
            b - t,
            l,
            t
        ),
        None => format!("no images, margin {margin}"),
    }
}

/// Scale `bounds` to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn panel_scale(bounds: CanvasBounds) -> (f64, f64, f64) {
    let (w, h) = (bounds.width, bounds.height);
    if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
