//! Page geometry and the furniture shared by both pages.

use crate::assets::Logo;
use crate::canvas::{palette, Align, Canvas, Rgb8};
use crate::content;
use crate::icons::{self, Icon};
use crate::metrics::{self, Face};

/// US Letter, portrait, in millimetres.
pub const PAGE_WIDTH: f64 = 215.9;
pub const PAGE_HEIGHT: f64 = 279.4;
pub const MARGIN: f64 = 14.0;
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;

const HEADER_HEIGHT: f64 = 22.0;
const REF_SIZE: f64 = 7.0;
const REF_LINE_HEIGHT: f64 = 2.8;

/// Draws the branded header band: logo, wordmark, byline, contact column.
pub fn draw_header(canvas: &Canvas<'_>, logo: Option<&Logo>) {
    canvas.fill_rect(0.0, 0.0, PAGE_WIDTH, HEADER_HEIGHT, palette::WHITE);

    if let Some(logo) = logo {
        logo.place(canvas, MARGIN, 3.0, 14.0, 14.0);
    }

    canvas.text(
        content::WORDMARK,
        Face::SerifBold,
        16.0,
        MARGIN + 17.0,
        11.0,
        palette::MUTED,
        Align::Left,
    );

    let [lead, heart, tail] = content::BYLINE;
    let mut x = MARGIN + 17.0;
    canvas.text(lead, Face::Oblique, 8.0, x, 16.0, palette::MUTED, Align::Left);
    x += metrics::text_width(lead, Face::Oblique, 8.0);
    canvas.text(heart, Face::Oblique, 8.0, x, 16.0, palette::ROSE, Align::Left);
    x += metrics::text_width(heart, Face::Oblique, 8.0);
    canvas.text(tail, Face::Oblique, 8.0, x, 16.0, palette::MUTED, Align::Left);

    canvas.text(
        content::SITE,
        Face::Regular,
        9.0,
        PAGE_WIDTH - MARGIN,
        9.0,
        palette::MUTED,
        Align::Right,
    );
    canvas.text(
        content::CONTACT,
        Face::Regular,
        9.0,
        PAGE_WIDTH - MARGIN,
        14.0,
        palette::MUTED,
        Align::Right,
    );
}

/// Draws the accent stripe directly under the header band.
pub fn draw_accent_stripe(canvas: &Canvas<'_>, color: Rgb8) {
    canvas.fill_rect(0.0, HEADER_HEIGHT, PAGE_WIDTH, 2.0, color);
}

/// Draws an icon followed by a card title, baseline at `y`.
pub fn draw_card_title(canvas: &Canvas<'_>, icon: Icon, title: &str, x: f64, y: f64, color: Rgb8) {
    icons::draw(canvas, icon, x, y - 3.5, 4.0, color);
    canvas.text(title, Face::Bold, 11.0, x + 6.0, y, palette::INK, Align::Left);
}

/// Height the full reference list occupies at `max_width`, heading included.
pub fn measure_references(max_width: f64) -> f64 {
    content::REFERENCES.iter().fold(3.0, |h, reference| {
        let lines = metrics::wrap_lines(reference, Face::Regular, REF_SIZE, max_width);
        h + lines.len() as f64 * REF_LINE_HEIGHT
    })
}

/// Draws the reference list starting at `y`, truncating reference by
/// reference once the next entry would cross `max_y`.
pub fn draw_references(canvas: &Canvas<'_>, x: f64, y: f64, max_width: f64, max_y: f64) {
    canvas.text("References", Face::Bold, REF_SIZE, x, y, palette::MUTED, Align::Left);
    let mut ry = y + 3.0;
    for reference in &content::REFERENCES {
        let lines = metrics::wrap_lines(reference, Face::Regular, REF_SIZE, max_width);
        if ry + lines.len() as f64 * REF_LINE_HEIGHT > max_y {
            break;
        }
        for line in &lines {
            canvas.text(line, Face::Regular, REF_SIZE, x, ry, palette::MUTED, Align::Left);
            ry += REF_LINE_HEIGHT;
        }
    }
}
