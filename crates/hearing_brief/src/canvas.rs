//! Drawing surface for one brief page.
//!
//! All layout code works in millimetres from the top-left page corner, the
//! coordinate system the layout constants were tuned in.  [`Canvas`] owns the
//! conversion to the PDF backend's bottom-left system and the plumbing of
//! fill/stroke state, so the page renderers only ever talk in page geometry.
//!
//! Every primitive expects well-formed, already-validated coordinates.  A
//! malformed rectangle is a caller bug and trips a debug assertion; there is
//! no recoverable-error path out of a draw call.

use printpdf::{Color, IndirectFontRef, Line, Mm, PdfLayerReference, Point, Pt, Rgb};

use crate::metrics::{self, Face};

/// Segments used to flatten a quarter-circle corner arc.
const CORNER_SEGMENTS: usize = 6;
/// Segments used to flatten a full circle or ellipse.
const CIRCLE_SEGMENTS: usize = 24;

/// An sRGB color with 8-bit channels, the form the palette is specified in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Shorthand constructor used by the palette tables.
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb8 {
    Rgb8 { r, g, b }
}

impl Rgb8 {
    fn to_pdf(self) -> Color {
        Color::Rgb(Rgb::new(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
            None,
        ))
    }
}

/// The brief's color palette.
pub mod palette {
    use super::{rgb, Rgb8};

    pub const ROSE: Rgb8 = rgb(172, 57, 84);
    pub const INK: Rgb8 = rgb(59, 43, 48);
    pub const MUTED: Rgb8 = rgb(112, 92, 97);
    pub const WHITE: Rgb8 = rgb(255, 255, 255);
    pub const ROSE_TINT: Rgb8 = rgb(250, 238, 241);
    pub const GRAY_TINT: Rgb8 = rgb(247, 244, 245);
    pub const GREEN: Rgb8 = rgb(90, 156, 120);
    pub const GREEN_TINT: Rgb8 = rgb(237, 248, 241);
    pub const BADGE_GREEN: Rgb8 = rgb(70, 148, 90);
    pub const BADGE_AMBER: Rgb8 = rgb(200, 130, 60);
    pub const CARD: Rgb8 = rgb(255, 253, 253);
    pub const PEACH_TINT: Rgb8 = rgb(249, 243, 237);
    pub const LAVENDER_TINT: Rgb8 = rgb(237, 232, 245);
    pub const MALE_BLUE: Rgb8 = rgb(140, 175, 210);
    pub const FEMALE_ROSE: Rgb8 = rgb(198, 94, 122);
    pub const BAR_RED: Rgb8 = rgb(185, 110, 120);
    pub const BAR_GREEN: Rgb8 = rgb(120, 180, 145);
    pub const BAR_NEUTRAL: Rgb8 = rgb(200, 190, 195);
    pub const SERIES_ROSE: Rgb8 = rgb(198, 94, 122);
    pub const SERIES_VIOLET: Rgb8 = rgb(153, 122, 191);
    pub const SERIES_BLUE: Rgb8 = rgb(115, 165, 210);
    pub const SERIES_GREEN: Rgb8 = rgb(120, 180, 145);
    pub const HAIRLINE: Rgb8 = rgb(230, 225, 228);
    pub const GRIDLINE: Rgb8 = rgb(220, 218, 220);
    pub const PILLAR_MET: Rgb8 = rgb(220, 245, 228);
    pub const PILLAR_OPEN: Rgb8 = rgb(255, 248, 235);
    pub const SUMMARY_GREEN: Rgb8 = rgb(230, 248, 235);
    pub const SUMMARY_RED: Rgb8 = rgb(255, 240, 240);
}

/// Horizontal anchoring of a text draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// The typefaces registered on a brief document.
pub struct FontSet {
    pub regular: IndirectFontRef,
    pub bold: IndirectFontRef,
    pub oblique: IndirectFontRef,
    pub bold_oblique: IndirectFontRef,
    pub serif_bold: IndirectFontRef,
}

impl FontSet {
    fn get(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Regular => &self.regular,
            Face::Bold => &self.bold,
            Face::Oblique => &self.oblique,
            Face::BoldOblique => &self.bold_oblique,
            Face::SerifBold => &self.serif_bold,
        }
    }
}

/// A single page of the brief, addressed top-down in millimetres.
pub struct Canvas<'a> {
    pub(crate) layer: PdfLayerReference,
    fonts: &'a FontSet,
    pub(crate) page_height: f64,
}

impl<'a> Canvas<'a> {
    pub fn new(layer: PdfLayerReference, fonts: &'a FontSet, page_height: f64) -> Self {
        Canvas {
            layer,
            fonts,
            page_height,
        }
    }

    /// Converts a top-down y coordinate to the backend's bottom-up system.
    fn flip(&self, y: f64) -> f64 {
        self.page_height - y
    }

    fn check_rect(x: f64, y: f64, w: f64, h: f64) {
        debug_assert!(
            x.is_finite() && y.is_finite() && w.is_finite() && h.is_finite(),
            "non-finite rectangle {x} {y} {w} {h}"
        );
        debug_assert!(w >= 0.0 && h >= 0.0, "negative extent {w}x{h}");
    }

    fn paint(
        &self,
        points: Vec<(Point, bool)>,
        is_closed: bool,
        fill: Option<Rgb8>,
        stroke: Option<(Rgb8, f64)>,
    ) {
        if let Some(color) = fill {
            self.layer.set_fill_color(color.to_pdf());
        }
        if let Some((color, width_mm)) = stroke {
            self.layer.set_outline_color(color.to_pdf());
            let thickness: Pt = Mm(width_mm).into();
            self.layer.set_outline_thickness(thickness.0);
        }
        self.layer.add_shape(Line {
            points,
            is_closed,
            has_fill: fill.is_some(),
            has_stroke: stroke.is_some(),
            is_clipping_path: false,
        });
    }

    /// Appends a flattened arc around `(cx, cy)` to `points`, in PDF coords.
    fn push_arc(
        points: &mut Vec<(Point, bool)>,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        start_deg: f64,
        end_deg: f64,
        segments: usize,
    ) {
        for i in 0..=segments {
            let t = start_deg + (end_deg - start_deg) * (i as f64 / segments as f64);
            let rad = t.to_radians();
            points.push((
                Point::new(Mm(cx + rx * rad.cos()), Mm(cy + ry * rad.sin())),
                false,
            ));
        }
    }

    /// Outline of a rounded rectangle in PDF coordinates, corner arcs
    /// flattened to short polylines.
    fn rounded_rect_points(&self, x: f64, y: f64, w: f64, h: f64, r: f64) -> Vec<(Point, bool)> {
        let y0 = self.flip(y + h);
        let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
        if r == 0.0 {
            return vec![
                (Point::new(Mm(x), Mm(y0)), false),
                (Point::new(Mm(x + w), Mm(y0)), false),
                (Point::new(Mm(x + w), Mm(y0 + h)), false),
                (Point::new(Mm(x), Mm(y0 + h)), false),
            ];
        }
        let mut points = Vec::with_capacity(4 * (CORNER_SEGMENTS + 1));
        Self::push_arc(&mut points, x + w - r, y0 + r, r, r, -90.0, 0.0, CORNER_SEGMENTS);
        Self::push_arc(&mut points, x + w - r, y0 + h - r, r, r, 0.0, 90.0, CORNER_SEGMENTS);
        Self::push_arc(&mut points, x + r, y0 + h - r, r, r, 90.0, 180.0, CORNER_SEGMENTS);
        Self::push_arc(&mut points, x + r, y0 + r, r, r, 180.0, 270.0, CORNER_SEGMENTS);
        points
    }

    /// Fills a rounded rectangle given by its top-left corner.
    pub fn fill_rounded_rect(&self, x: f64, y: f64, w: f64, h: f64, r: f64, color: Rgb8) {
        Self::check_rect(x, y, w, h);
        let points = self.rounded_rect_points(x, y, w, h, r);
        self.paint(points, true, Some(color), None);
    }

    /// Strokes a rounded rectangle outline.
    pub fn stroke_rounded_rect(
        &self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        r: f64,
        color: Rgb8,
        width_mm: f64,
    ) {
        Self::check_rect(x, y, w, h);
        let points = self.rounded_rect_points(x, y, w, h, r);
        self.paint(points, true, None, Some((color, width_mm)));
    }

    /// Fills an axis-aligned rectangle.
    pub fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Rgb8) {
        self.fill_rounded_rect(x, y, w, h, 0.0, color);
    }

    /// Strokes a straight line segment.
    pub fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb8, width_mm: f64) {
        debug_assert!(
            [x1, y1, x2, y2].iter().all(|v| v.is_finite()),
            "non-finite line"
        );
        let points = vec![
            (Point::new(Mm(x1), Mm(self.flip(y1))), false),
            (Point::new(Mm(x2), Mm(self.flip(y2))), false),
        ];
        self.paint(points, false, None, Some((color, width_mm)));
    }

    fn ellipse_points(&self, cx: f64, cy: f64, rx: f64, ry: f64) -> Vec<(Point, bool)> {
        let mut points = Vec::with_capacity(CIRCLE_SEGMENTS + 1);
        Self::push_arc(&mut points, cx, self.flip(cy), rx, ry, 0.0, 360.0, CIRCLE_SEGMENTS);
        points
    }

    /// Fills a circle centered at `(cx, cy)`.
    pub fn fill_circle(&self, cx: f64, cy: f64, r: f64, color: Rgb8) {
        debug_assert!(r >= 0.0, "negative radius {r}");
        let points = self.ellipse_points(cx, cy, r, r);
        self.paint(points, true, Some(color), None);
    }

    /// Strokes a circle outline.
    pub fn stroke_circle(&self, cx: f64, cy: f64, r: f64, color: Rgb8, width_mm: f64) {
        debug_assert!(r >= 0.0, "negative radius {r}");
        let points = self.ellipse_points(cx, cy, r, r);
        self.paint(points, true, None, Some((color, width_mm)));
    }

    /// Strokes an axis-aligned ellipse outline.
    pub fn stroke_ellipse(&self, cx: f64, cy: f64, rx: f64, ry: f64, color: Rgb8, width_mm: f64) {
        debug_assert!(rx >= 0.0 && ry >= 0.0, "negative radii {rx} {ry}");
        let points = self.ellipse_points(cx, cy, rx, ry);
        self.paint(points, true, None, Some((color, width_mm)));
    }

    /// Draws a single line of text with its baseline at `y`.
    pub fn text(
        &self,
        text: &str,
        face: Face,
        size_pt: f64,
        x: f64,
        y: f64,
        color: Rgb8,
        align: Align,
    ) {
        debug_assert!(x.is_finite() && y.is_finite(), "non-finite text origin");
        let anchor = match align {
            Align::Left => x,
            Align::Center => x - metrics::text_width(text, face, size_pt) / 2.0,
            Align::Right => x - metrics::text_width(text, face, size_pt),
        };
        self.layer.set_fill_color(color.to_pdf());
        self.layer.use_text(
            text,
            size_pt,
            Mm(anchor),
            Mm(self.flip(y)),
            self.fonts.get(face),
        );
    }

    /// Measured width of a single line, in millimetres.
    pub fn text_width(&self, text: &str, face: Face, size_pt: f64) -> f64 {
        metrics::text_width(text, face, size_pt)
    }
}
