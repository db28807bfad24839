//! Vector icon glyphs used in card titles.
//!
//! Icons are drawn as fixed stroke patterns scaled by the requested size; no
//! raster assets are involved.  The enum is closed, so an unsupported kind is
//! unrepresentable rather than a runtime condition.

use crate::canvas::{Align, Canvas, Rgb8};
use crate::metrics::Face;

/// The icon vocabulary of the brief.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Users,
    Heart,
    Brain,
    AlertTriangle,
    Globe,
    TrendingUp,
    TrendingDown,
    Shield,
    Dollar,
}

/// Draws `icon` into the square with top-left `(x, y)` and side `size`.
pub fn draw(canvas: &Canvas<'_>, icon: Icon, x: f64, y: f64, size: f64, color: Rgb8) {
    let s = size;
    let cx = x + s / 2.0;
    let cy = y + s / 2.0;
    let stroke = |x1: f64, y1: f64, x2: f64, y2: f64, w: f64| {
        canvas.line(x1, y1, x2, y2, color, w);
    };

    match icon {
        Icon::Users => {
            canvas.stroke_circle(cx - s * 0.15, cy - s * 0.2, s * 0.14, color, 0.4);
            canvas.stroke_circle(cx + s * 0.25, cy - s * 0.2, s * 0.12, color, 0.4);
            let base = cy + s * 0.15;
            stroke(cx - s * 0.4, base + s * 0.2, cx - s * 0.4, base, 0.4);
            stroke(cx - s * 0.4, base, cx - s * 0.15, base - s * 0.15, 0.4);
            stroke(cx - s * 0.15, base - s * 0.15, cx + s * 0.1, base, 0.4);
            stroke(cx + s * 0.1, base, cx + s * 0.1, base + s * 0.2, 0.4);
            stroke(cx + s * 0.1, base, cx + s * 0.25, base - s * 0.12, 0.4);
            stroke(cx + s * 0.25, base - s * 0.12, cx + s * 0.45, base, 0.4);
            stroke(cx + s * 0.45, base, cx + s * 0.45, base + s * 0.2, 0.4);
        }
        Icon::Heart => {
            let hx = cx;
            let hy = cy + s * 0.05;
            stroke(hx, hy + s * 0.3, hx - s * 0.35, hy - s * 0.05, 0.5);
            stroke(hx - s * 0.35, hy - s * 0.05, hx - s * 0.35, hy - s * 0.25, 0.5);
            stroke(hx - s * 0.35, hy - s * 0.25, hx - s * 0.15, hy - s * 0.35, 0.5);
            stroke(hx - s * 0.15, hy - s * 0.35, hx, hy - s * 0.15, 0.5);
            stroke(hx, hy - s * 0.15, hx + s * 0.15, hy - s * 0.35, 0.5);
            stroke(hx + s * 0.15, hy - s * 0.35, hx + s * 0.35, hy - s * 0.25, 0.5);
            stroke(hx + s * 0.35, hy - s * 0.25, hx + s * 0.35, hy - s * 0.05, 0.5);
            stroke(hx + s * 0.35, hy - s * 0.05, hx, hy + s * 0.3, 0.5);
        }
        Icon::Brain => {
            canvas.stroke_circle(cx, cy, s * 0.35, color, 0.4);
            stroke(cx, cy - s * 0.35, cx, cy + s * 0.35, 0.3);
            stroke(cx - s * 0.2, cy - s * 0.1, cx + s * 0.15, cy - s * 0.15, 0.3);
            stroke(cx - s * 0.15, cy + s * 0.1, cx + s * 0.2, cy + s * 0.12, 0.3);
        }
        Icon::AlertTriangle => {
            stroke(cx, cy - s * 0.35, cx - s * 0.38, cy + s * 0.3, 0.5);
            stroke(cx - s * 0.38, cy + s * 0.3, cx + s * 0.38, cy + s * 0.3, 0.5);
            stroke(cx + s * 0.38, cy + s * 0.3, cx, cy - s * 0.35, 0.5);
            canvas.text("!", Face::Bold, s * 2.0, cx, cy + s * 0.15, color, Align::Center);
        }
        Icon::Globe => {
            canvas.stroke_circle(cx, cy, s * 0.35, color, 0.4);
            stroke(cx - s * 0.35, cy, cx + s * 0.35, cy, 0.25);
            stroke(cx, cy - s * 0.35, cx, cy + s * 0.35, 0.25);
            canvas.stroke_ellipse(cx, cy, s * 0.18, s * 0.35, color, 0.25);
        }
        Icon::TrendingUp => {
            stroke(cx - s * 0.35, cy + s * 0.2, cx, cy - s * 0.1, 0.5);
            stroke(cx, cy - s * 0.1, cx + s * 0.1, cy + s * 0.05, 0.5);
            stroke(cx + s * 0.1, cy + s * 0.05, cx + s * 0.35, cy - s * 0.25, 0.5);
            stroke(cx + s * 0.35, cy - s * 0.25, cx + s * 0.2, cy - s * 0.25, 0.5);
            stroke(cx + s * 0.35, cy - s * 0.25, cx + s * 0.35, cy - s * 0.1, 0.5);
        }
        Icon::TrendingDown => {
            stroke(cx - s * 0.35, cy - s * 0.2, cx, cy + s * 0.1, 0.5);
            stroke(cx, cy + s * 0.1, cx + s * 0.1, cy - s * 0.05, 0.5);
            stroke(cx + s * 0.1, cy - s * 0.05, cx + s * 0.35, cy + s * 0.25, 0.5);
            stroke(cx + s * 0.35, cy + s * 0.25, cx + s * 0.2, cy + s * 0.25, 0.5);
            stroke(cx + s * 0.35, cy + s * 0.25, cx + s * 0.35, cy + s * 0.1, 0.5);
        }
        Icon::Shield => {
            stroke(cx, cy - s * 0.38, cx - s * 0.32, cy - s * 0.18, 0.5);
            stroke(cx - s * 0.32, cy - s * 0.18, cx - s * 0.32, cy + s * 0.05, 0.5);
            stroke(cx - s * 0.32, cy + s * 0.05, cx, cy + s * 0.38, 0.5);
            stroke(cx, cy + s * 0.38, cx + s * 0.32, cy + s * 0.05, 0.5);
            stroke(cx + s * 0.32, cy + s * 0.05, cx + s * 0.32, cy - s * 0.18, 0.5);
            stroke(cx + s * 0.32, cy - s * 0.18, cx, cy - s * 0.38, 0.5);
        }
        Icon::Dollar => {
            canvas.stroke_circle(cx, cy, s * 0.35, color, 0.4);
            canvas.text("$", Face::Bold, s * 2.2, cx, cy + s * 0.12, color, Align::Center);
        }
    }
}
