//! Page 1: the fixed advocacy layout, identical for every country.

use crate::assets::Logo;
use crate::canvas::{palette, Align, Canvas, Rgb8};
use crate::charts::{BarGroup, GroupedBarChart, LineChart};
use crate::chrome::{self, CONTENT_WIDTH, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
use crate::content;
use crate::icons::Icon;
use crate::metrics::{self, Face};

fn percent_tick(v: f64) -> String {
    format!("{}%", v as i64)
}

fn multiplier_tick(v: f64) -> String {
    format!("{}x", v as i64)
}

fn money_tick(v: f64) -> String {
    format!("${}K", v as i64)
}

/// Grey caption under a card title.
fn draw_subtitle(canvas: &Canvas<'_>, text: &str, size: f64, x: f64, y: f64) {
    canvas.text(text, Face::Regular, size, x, y, palette::MUTED, Align::Left);
}

/// "Key insight" box: bold lead-in, wrapped muted body.
fn draw_insight(canvas: &Canvas<'_>, x: f64, y: f64, w: f64, bg: Rgb8, lead_color: Rgb8, body: &str) {
    canvas.fill_rounded_rect(x + 4.0, y, w - 8.0, 12.0, 2.0, bg);
    let lead = "Key insight: ";
    canvas.text(lead, Face::Bold, 8.0, x + 7.0, y + 4.0, lead_color, Align::Left);
    let lead_w = metrics::text_width(lead, Face::Bold, 8.0);
    let lines = metrics::wrap_lines(body, Face::Regular, 8.0, w - 14.0 - lead_w);
    for (i, line) in lines.iter().enumerate() {
        let (lx, ly) = if i == 0 {
            (x + 7.0 + lead_w, y + 4.0)
        } else {
            (x + 7.0, y + 4.0 + i as f64 * 3.2)
        };
        canvas.text(line, Face::Regular, 8.0, lx, ly, palette::MUTED, Align::Left);
    }
}

/// Muted wrapped note inside a card, 7 pt.
fn draw_note(canvas: &Canvas<'_>, text: &str, x: f64, y: f64, max_w: f64) {
    let lines = metrics::wrap_lines(text, Face::Regular, 7.0, max_w);
    for (i, line) in lines.iter().enumerate() {
        canvas.text(
            line,
            Face::Regular,
            7.0,
            x,
            y + i as f64 * 2.8,
            palette::MUTED,
            Align::Left,
        );
    }
}

pub fn draw_page1(canvas: &Canvas<'_>, logo: Option<&Logo>) {
    chrome::draw_header(canvas, logo);
    chrome::draw_accent_stripe(canvas, palette::ROSE);

    let mut y = 27.0;
    let card_gap = 4.0;
    let card_w = (CONTENT_WIDTH - card_gap) / 2.0;
    let left_x = MARGIN;
    let right_x = MARGIN + card_w + card_gap;

    // Row 1: hearing loss by age, treatment gap.
    let row1_h = 64.0;

    canvas.fill_rounded_rect(left_x, y, card_w, row1_h, 3.0, palette::CARD);
    canvas.stroke_rounded_rect(left_x, y, card_w, row1_h, 3.0, palette::HAIRLINE, 0.3);
    chrome::draw_card_title(canvas, Icon::TrendingUp, "Hearing Loss by Age", left_x + 5.0, y + 6.0, palette::SERIES_ROSE);
    draw_subtitle(canvas, "Percentage of women affected [3]", 8.0, left_x + 5.0, y + 11.0);

    LineChart {
        x: left_x + 14.0,
        y: y + 14.0,
        w: card_w - 22.0,
        h: 24.0,
        max: 70.0,
        ticks: &[0.0, 20.0, 40.0, 60.0],
        tick_label: percent_tick,
        points: &content::AGE_CURVE,
        color: palette::ROSE,
        line_width: 0.8,
        marker_radius: 0.9,
        label_size: 7.0,
    }
    .draw(canvas);

    draw_insight(
        canvas,
        left_x,
        y + 44.0,
        card_w,
        palette::GRAY_TINT,
        palette::INK,
        "Hearing loss doubles between ages 50-59 and 60-69.",
    );

    canvas.fill_rounded_rect(right_x, y, card_w, row1_h, 3.0, palette::CARD);
    canvas.stroke_rounded_rect(right_x, y, card_w, row1_h, 3.0, palette::HAIRLINE, 0.3);
    chrome::draw_card_title(canvas, Icon::AlertTriangle, "The Treatment Gap", right_x + 5.0, y + 6.0, palette::SERIES_VIOLET);
    draw_subtitle(canvas, "Women are less likely to seek help [3]", 8.0, right_x + 5.0, y + 11.0);

    canvas.fill_rect(right_x + 5.0, y + 13.0, 3.0, 2.5, palette::MALE_BLUE);
    canvas.text("Men", Face::Regular, 7.0, right_x + 9.0, y + 15.0, palette::MUTED, Align::Left);
    canvas.fill_rect(right_x + 20.0, y + 13.0, 3.0, 2.5, palette::FEMALE_ROSE);
    canvas.text("Women", Face::Regular, 7.0, right_x + 24.0, y + 15.0, palette::MUTED, Align::Left);

    let gap_bars: Vec<[(f64, Rgb8); 2]> = content::TREATMENT_GAP
        .iter()
        .map(|&(_, men, women)| [(men, palette::MALE_BLUE), (women, palette::FEMALE_ROSE)])
        .collect();
    let gap_groups: Vec<BarGroup<'_>> = content::TREATMENT_GAP
        .iter()
        .zip(&gap_bars)
        .map(|(&(label, _, _), bars)| BarGroup { label, bars })
        .collect();
    GroupedBarChart {
        x: right_x + 14.0,
        y: y + 18.0,
        w: card_w - 22.0,
        h: 22.0,
        max: 30.0,
        ticks: &[0.0, 10.0, 20.0, 30.0],
        tick_label: percent_tick,
        groups: &gap_groups,
        bar_width: 9.0,
        label_size: 7.0,
    }
    .draw(canvas);

    draw_insight(
        canvas,
        right_x,
        y + 46.0,
        card_w,
        palette::ROSE_TINT,
        palette::ROSE,
        "Men 75-84 are 2x as likely to use hearing aids as women.",
    );

    y += row1_h + 3.0;

    // Row 2: global overview, the path forward.
    let row2_h = 44.0;

    canvas.fill_rounded_rect(left_x, y, card_w, row2_h, 3.0, palette::CARD);
    canvas.stroke_rounded_rect(left_x, y, card_w, row2_h, 3.0, palette::HAIRLINE, 0.3);
    chrome::draw_card_title(canvas, Icon::Globe, "Global Overview", left_x + 5.0, y + 6.0, palette::SERIES_BLUE);
    draw_subtitle(canvas, "The scale of the challenge [5]", 8.0, left_x + 5.0, y + 11.0);

    let mut go_y = y + 14.0;
    for &(label, value, highlight) in &content::GLOBAL_OVERVIEW {
        let bg = if highlight { palette::ROSE_TINT } else { palette::GRAY_TINT };
        canvas.fill_rounded_rect(left_x + 5.0, go_y, card_w - 10.0, 7.0, 1.5, bg);
        let label_color = if highlight { palette::INK } else { palette::MUTED };
        canvas.text(label, Face::Regular, 8.0, left_x + 8.0, go_y + 4.8, label_color, Align::Left);
        let value_color = if highlight { palette::ROSE } else { palette::INK };
        canvas.text(value, Face::Bold, 8.0, left_x + card_w - 8.0, go_y + 4.8, value_color, Align::Right);
        go_y += 8.0;
    }

    canvas.fill_rounded_rect(right_x, y, card_w, row2_h, 3.0, palette::LAVENDER_TINT);
    canvas.stroke_rounded_rect(right_x, y, card_w, row2_h, 3.0, palette::HAIRLINE, 0.3);
    chrome::draw_card_title(canvas, Icon::Shield, "The Path Forward", right_x + 5.0, y + 6.0, palette::SERIES_GREEN);
    draw_subtitle(canvas, "Hope & action [4]", 8.0, right_x + 5.0, y + 11.0);

    let mut pf_y = y + 14.0;
    for (i, &(number, caption)) in content::PATH_FORWARD.iter().enumerate() {
        let bg = if i == 0 { palette::ROSE_TINT } else { palette::GRAY_TINT };
        canvas.fill_rounded_rect(right_x + 5.0, pf_y, card_w - 10.0, 14.0, 2.0, bg);
        canvas.text(number, Face::Bold, 16.0, right_x + 8.0, pf_y + 6.0, palette::ROSE, Align::Left);
        canvas.text(caption, Face::Regular, 8.0, right_x + 8.0, pf_y + 11.0, palette::MUTED, Align::Left);
        pf_y += 15.5;
    }

    y += row2_h + 3.0;

    // Row 3: three brain-health cards.
    let col_w = (CONTENT_WIDTH - 8.0) / 3.0;
    let row3_h = 62.0;

    let risk_x = MARGIN;
    canvas.fill_rounded_rect(risk_x, y, col_w, row3_h, 3.0, palette::CARD);
    canvas.stroke_rounded_rect(risk_x, y, col_w, row3_h, 3.0, palette::HAIRLINE, 0.3);
    chrome::draw_card_title(canvas, Icon::Shield, "#1 Risk Factor", risk_x + 4.0, y + 6.0, palette::SERIES_ROSE);
    draw_subtitle(canvas, "For dementia prevention [6]", 7.5, risk_x + 4.0, y + 11.0);

    let bar_max_w = col_w - 32.0;
    let mut fy = y + 14.0;
    for &(name, pct) in &content::RISK_FACTORS {
        let leading = name == "Hearing Loss";
        canvas.text(name, Face::Regular, 7.0, risk_x + 4.0, fy + 2.5, palette::MUTED, Align::Left);
        let bar_w = pct / 8.0 * bar_max_w;
        let bar_color = if leading { palette::ROSE } else { palette::BAR_NEUTRAL };
        canvas.fill_rounded_rect(risk_x + 26.0, fy, bar_w, 3.5, 1.0, bar_color);
        let pct_color = if leading { palette::ROSE } else { palette::MUTED };
        canvas.text(
            &format!("{}%", pct as i64),
            Face::Bold,
            6.5,
            risk_x + 26.0 + bar_w + 1.5,
            fy + 2.5,
            pct_color,
            Align::Left,
        );
        fy += 5.0;
    }
    canvas.fill_rounded_rect(risk_x + 3.0, fy + 1.0, col_w - 6.0, 12.0, 1.5, palette::GRAY_TINT);
    draw_note(
        canvas,
        "Hearing loss is the #1 modifiable risk factor, accounting for 7% of preventable dementia cases.",
        risk_x + 5.0,
        fy + 4.5,
        col_w - 12.0,
    );

    let mult_x = MARGIN + col_w + 4.0;
    canvas.fill_rounded_rect(mult_x, y, col_w, row3_h, 3.0, palette::CARD);
    canvas.stroke_rounded_rect(mult_x, y, col_w, row3_h, 3.0, palette::HAIRLINE, 0.3);
    chrome::draw_card_title(canvas, Icon::TrendingDown, "Risk Multiplier", mult_x + 4.0, y + 6.0, palette::SERIES_VIOLET);
    draw_subtitle(canvas, "Hearing loss & dementia risk [7]", 7.5, mult_x + 4.0, y + 11.0);

    LineChart {
        x: mult_x + 10.0,
        y: y + 14.0,
        w: col_w - 16.0,
        h: 22.0,
        max: 6.0,
        ticks: &[0.0, 2.0, 4.0, 6.0],
        tick_label: multiplier_tick,
        points: &content::RISK_MULTIPLIER,
        color: palette::ROSE,
        line_width: 0.6,
        marker_radius: 0.9,
        label_size: 6.5,
    }
    .draw(canvas);

    canvas.fill_rounded_rect(mult_x + 3.0, y + 42.0, col_w - 6.0, 10.0, 1.5, palette::GRAY_TINT);
    draw_note(
        canvas,
        "Severe hearing loss increases dementia risk by 5x.",
        mult_x + 5.0,
        y + 45.5,
        col_w - 12.0,
    );

    let invest_x = MARGIN + (col_w + 4.0) * 2.0;
    canvas.fill_rounded_rect(invest_x, y, col_w, row3_h, 3.0, palette::CARD);
    canvas.stroke_rounded_rect(invest_x, y, col_w, row3_h, 3.0, palette::HAIRLINE, 0.3);
    chrome::draw_card_title(canvas, Icon::Dollar, "Investment", invest_x + 4.0, y + 6.0, palette::SERIES_GREEN);
    draw_subtitle(canvas, "Prevention vs. crisis care [8]", 7.5, invest_x + 4.0, y + 11.0);

    let invest_groups = [
        BarGroup { label: "Hearing Aids", bars: &[(5.0, palette::BAR_GREEN)] },
        BarGroup { label: "Memory Care", bars: &[(50.0, palette::BAR_RED)] },
    ];
    GroupedBarChart {
        x: invest_x + 10.0,
        y: y + 14.0,
        w: col_w - 16.0,
        h: 20.0,
        max: 60.0,
        ticks: &[0.0, 20.0, 40.0, 60.0],
        tick_label: money_tick,
        groups: &invest_groups,
        bar_width: 12.0,
        label_size: 6.5,
    }
    .draw(canvas);

    let summary_y = y + 40.0;
    canvas.fill_rounded_rect(invest_x + 3.0, summary_y, col_w - 6.0, 6.0, 1.5, palette::SUMMARY_GREEN);
    canvas.text("Hearing Aids", Face::Regular, 7.0, invest_x + 5.0, summary_y + 4.0, palette::INK, Align::Left);
    canvas.text("$2K-$8K", Face::Bold, 7.0, invest_x + col_w - 5.0, summary_y + 4.0, palette::GREEN, Align::Right);

    canvas.fill_rounded_rect(invest_x + 3.0, summary_y + 7.0, col_w - 6.0, 6.0, 1.5, palette::SUMMARY_RED);
    canvas.text("Memory Care", Face::Regular, 7.0, invest_x + 5.0, summary_y + 11.0, palette::INK, Align::Left);
    canvas.text("$50K+/yr", Face::Bold, 7.0, invest_x + col_w - 5.0, summary_y + 11.0, palette::BAR_RED, Align::Right);

    y += row3_h + 3.0;

    // The dementia connection: full-width stat grid.
    let grid_card_h = 50.0;
    canvas.fill_rounded_rect(MARGIN, y, CONTENT_WIDTH, grid_card_h, 3.0, palette::PEACH_TINT);
    canvas.stroke_rounded_rect(MARGIN, y, CONTENT_WIDTH, grid_card_h, 3.0, palette::HAIRLINE, 0.3);
    chrome::draw_card_title(canvas, Icon::Brain, "The Dementia Connection", MARGIN + 5.0, y + 6.0, palette::ROSE);
    draw_subtitle(
        canvas,
        "Hearing loss, cognitive decline & dementia [6][7][8][9]",
        8.0,
        MARGIN + 5.0,
        y + 11.0,
    );

    let box_w = (CONTENT_WIDTH - 20.0) / 3.0;
    let box_h = 15.0;
    for (row, stats) in content::DEMENTIA_GRID.iter().enumerate() {
        let box_y = y + 14.0 + row as f64 * 17.0;
        for (i, stat) in stats.iter().enumerate() {
            let bx = MARGIN + 5.0 + (box_w + 2.5) * i as f64;
            canvas.fill_rounded_rect(bx, box_y, box_w, box_h, 2.0, palette::GRAY_TINT);
            let (value_size, value_y, label_y) = if stat.text_value {
                (8.0, 5.0, 8.5)
            } else {
                (12.0, 6.0, 9.5)
            };
            canvas.text(stat.value, Face::Bold, value_size, bx + box_w / 2.0, box_y + value_y, palette::ROSE, Align::Center);
            for (li, line) in stat.label.iter().enumerate() {
                canvas.text(
                    line,
                    Face::Regular,
                    7.5,
                    bx + box_w / 2.0,
                    box_y + label_y + li as f64 * 3.2,
                    palette::MUTED,
                    Align::Center,
                );
            }
        }
    }

    canvas.text(
        "Page 1 of 2",
        Face::Regular,
        8.0,
        PAGE_WIDTH / 2.0,
        PAGE_HEIGHT - 6.0,
        palette::MUTED,
        Align::Center,
    );
}
