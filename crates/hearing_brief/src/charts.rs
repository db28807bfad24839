//! Chart primitives shared by the page renderers.
//!
//! Both charts take already-computed series data and scale it linearly
//! against a fixed numeric domain; they never transform the data.  Geometry
//! is the plot area only, labels hang outside it.

use crate::canvas::{palette, Align, Canvas, Rgb8};
use crate::metrics::Face;

const GRID_WIDTH: f64 = 0.15;
const TICK_GAP: f64 = 2.0;
const LABEL_DROP: f64 = 3.5;
const BAR_GAP: f64 = 2.0;
const BAR_CORNER: f64 = 1.0;

/// A point/line chart: horizontal gridlines with tick labels, a polyline
/// through the series, a filled marker per point, and an x label per point.
pub struct LineChart<'a> {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Upper bound of the value domain; the baseline is zero.
    pub max: f64,
    /// Gridline values, labelled through `tick_label`.
    pub ticks: &'a [f64],
    pub tick_label: fn(f64) -> String,
    /// Series as (x label, value) pairs, evenly spaced.
    pub points: &'a [(&'a str, f64)],
    pub color: Rgb8,
    pub line_width: f64,
    pub marker_radius: f64,
    pub label_size: f64,
}

impl LineChart<'_> {
    pub fn draw(&self, canvas: &Canvas<'_>) {
        debug_assert!(self.points.len() >= 2, "a line chart needs two points");
        debug_assert!(self.max > 0.0, "empty value domain");

        for &tick in self.ticks {
            let ly = self.y + self.h - tick / self.max * self.h;
            canvas.line(self.x, ly, self.x + self.w, ly, palette::GRIDLINE, GRID_WIDTH);
            canvas.text(
                &(self.tick_label)(tick),
                Face::Regular,
                self.label_size,
                self.x - TICK_GAP,
                ly + 1.0,
                palette::MUTED,
                Align::Right,
            );
        }

        let span = (self.points.len() - 1) as f64;
        let position = |i: usize, value: f64| {
            let px = self.x + i as f64 / span * self.w;
            let py = self.y + self.h - value / self.max * self.h;
            (px, py)
        };

        for (i, &(label, value)) in self.points.iter().enumerate() {
            let (px, _) = position(i, value);
            canvas.text(
                label,
                Face::Regular,
                self.label_size,
                px,
                self.y + self.h + LABEL_DROP,
                palette::MUTED,
                Align::Center,
            );
        }
        for (i, pair) in self.points.windows(2).enumerate() {
            let (x1, y1) = position(i, pair[0].1);
            let (x2, y2) = position(i + 1, pair[1].1);
            canvas.line(x1, y1, x2, y2, self.color, self.line_width);
        }
        for (i, &(_, value)) in self.points.iter().enumerate() {
            let (px, py) = position(i, value);
            canvas.fill_circle(px, py, self.marker_radius, self.color);
        }
    }
}

/// One cluster of bars in a [`GroupedBarChart`].
pub struct BarGroup<'a> {
    pub label: &'a str,
    /// Bars as (value, color) pairs, drawn left to right.
    pub bars: &'a [(f64, Rgb8)],
}

/// A grouped bar chart: gridlines with tick labels, clusters of rounded bars
/// centered within equal-width group slots, and a label per group.
pub struct GroupedBarChart<'a> {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub max: f64,
    pub ticks: &'a [f64],
    pub tick_label: fn(f64) -> String,
    pub groups: &'a [BarGroup<'a>],
    pub bar_width: f64,
    pub label_size: f64,
}

impl GroupedBarChart<'_> {
    pub fn draw(&self, canvas: &Canvas<'_>) {
        debug_assert!(!self.groups.is_empty(), "a bar chart needs groups");
        debug_assert!(self.max > 0.0, "empty value domain");

        for &tick in self.ticks {
            let ly = self.y + self.h - tick / self.max * self.h;
            canvas.line(self.x, ly, self.x + self.w, ly, palette::GRIDLINE, GRID_WIDTH);
            canvas.text(
                &(self.tick_label)(tick),
                Face::Regular,
                self.label_size,
                self.x - TICK_GAP,
                ly + 1.0,
                palette::MUTED,
                Align::Right,
            );
        }

        let group_w = self.w / self.groups.len() as f64;
        for (g, group) in self.groups.iter().enumerate() {
            let center = self.x + g as f64 * group_w + group_w / 2.0;
            let cluster_w = group.bars.len() as f64 * self.bar_width
                + (group.bars.len().saturating_sub(1)) as f64 * BAR_GAP;
            let mut bx = center - cluster_w / 2.0;
            for &(value, color) in group.bars {
                let bh = value / self.max * self.h;
                canvas.fill_rounded_rect(bx, self.y + self.h - bh, self.bar_width, bh, BAR_CORNER, color);
                bx += self.bar_width + BAR_GAP;
            }
            canvas.text(
                group.label,
                Face::Regular,
                self.label_size,
                center,
                self.y + self.h + LABEL_DROP,
                palette::MUTED,
                Align::Center,
            );
        }
    }
}
