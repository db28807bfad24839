//! Page 2: the country-specific layout.
//!
//! The drawing surface has no flow layout, so every section is measured
//! before anything is drawn.  [`plan_page2`] runs the whole decision
//! sequence as a pure function and returns a [`Page2Plan`]; [`draw_page2`]
//! then executes the plan verbatim.  Wrapped lines are computed once, in the
//! plan, and drawn as-is.
//!
//! Section priority when space runs out: the overview row and the framework
//! card are must-have content, the findings card yields first, and the
//! reference list truncates entry by entry above the footer.

use crate::assets::Logo;
use crate::canvas::{palette, Align, Canvas};
use crate::chrome::{self, CONTENT_WIDTH, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
use crate::content;
use crate::icons::Icon;
use crate::metrics::{self, Face};
use crate::model::{CountryRecord, FrameworkStatus, PillarFlags};
use crate::stats::{format_number, format_rate, DerivedStats, TrendBand};

/// Baseline of the country-name title.
const TITLE_BASELINE: f64 = 30.0;
/// Top edge of the two-card overview row.
const ROW_TOP: f64 = 37.0;
const CARD_GAP: f64 = 4.0;
const SECTION_GAP: f64 = 3.0;
/// The findings card is only considered while the cursor is above this.
const FINDINGS_GATE: f64 = 200.0;
/// Projected findings bottom must stay above this.
const FINDINGS_LIMIT: f64 = 240.0;
/// Projected scorecard bottom must stay above this.
const SCORECARD_LIMIT: f64 = 250.0;
/// Latest allowed top of the reference block; no card may end below it.
const CONTENT_FLOOR: f64 = PAGE_HEIGHT - 55.0;
/// Hard stop for reference lines.
const FOOTER_TOP: f64 = PAGE_HEIGHT - 16.0;
const FOOTER_RULE_Y: f64 = PAGE_HEIGHT - 14.0;

const SCORECARD_HEIGHT: f64 = 46.0;
const GUIDANCE_ROW_HEIGHT: f64 = 18.0;
const GUIDANCE_ROWS: f64 = 4.0;
const GUIDANCE_HEIGHT: f64 = 14.0 + GUIDANCE_ROWS * (GUIDANCE_ROW_HEIGHT + 1.0) + 5.0;

/// At most this many findings are ever rendered.
const MAX_FINDINGS: usize = 2;

const BULLET_LINE_HEIGHT: f64 = 3.2;

/// One measured bullet of the "Women & Girls" card.
pub struct WomenBullet {
    pub lead: String,
    pub lines: Vec<String>,
    pub box_height: f64,
}

/// One measured entry of the findings card.
pub struct FindingLayout {
    pub lines: Vec<String>,
    pub source: String,
    pub box_height: f64,
}

/// The findings card, measured and positioned.
pub struct FindingsCard {
    pub y: f64,
    pub height: f64,
    pub entries: Vec<FindingLayout>,
}

/// Which framework variant page 2 carries.  `Omitted` exists so the
/// never-neither invariant can be asserted; it must not occur for any
/// country in the bundled table.
pub enum FrameworkSection {
    Scorecard { y: f64, flags: PillarFlags },
    Guidance { y: f64 },
    Omitted,
}

/// Complete measured layout of page 2 for one country.
pub struct Page2Plan {
    pub stats: DerivedStats,
    pub card_height: f64,
    pub overview_content_height: f64,
    pub women_content_height: f64,
    /// Whether the overview card carries the hearing-aid adoption row.
    pub adoption_row: bool,
    pub bullets: Vec<WomenBullet>,
    pub findings: Option<FindingsCard>,
    pub framework: FrameworkSection,
    pub refs_y: f64,
}

fn card_width() -> f64 {
    (CONTENT_WIDTH - CARD_GAP) / 2.0
}

/// Runs the full measure pass for one country.  Pure: same record and table
/// always produce the same plan.
pub fn plan_page2(country: &CountryRecord, table: &[CountryRecord]) -> Page2Plan {
    let stats = DerivedStats::for_country(country, table);
    let inner_w = card_width() - 14.0;

    let bullet_copy = [
        (
            content::TREATMENT_GAP_BULLET.0.to_string(),
            content::TREATMENT_GAP_BULLET.1,
        ),
        (
            format!("~{}", format_number(stats.youth_at_risk)),
            content::YOUTH_BULLET_REST,
        ),
        (
            content::MENOPAUSE_BULLET.0.to_string(),
            content::MENOPAUSE_BULLET.1,
        ),
    ];
    let bullets: Vec<WomenBullet> = bullet_copy
        .into_iter()
        .map(|(lead, rest)| {
            let lines = metrics::wrap_lines(rest, Face::Regular, 8.0, inner_w - 4.0);
            let box_height = 4.5 + lines.len() as f64 * BULLET_LINE_HEIGHT + 3.0;
            WomenBullet {
                lead,
                lines,
                box_height,
            }
        })
        .collect();

    let women_content_height =
        28.0 + bullets.iter().map(|b| b.box_height + 1.5).sum::<f64>() + 6.0;
    let adoption_row = country.hearing_aid_adoption.is_some();
    let overview_content_height =
        28.0 + 3.0 * 9.0 + if adoption_row { 9.0 } else { 0.0 } + 6.0;
    // Both cards share the taller height; asymmetric rows are a defect.
    let card_height = women_content_height.max(overview_content_height);

    let mut y = ROW_TOP + card_height + 4.0;

    let framework_height = match country.hearing_adoption {
        FrameworkStatus::Assessed(_) => SCORECARD_HEIGHT,
        FrameworkStatus::NotAssessed => GUIDANCE_HEIGHT,
    };

    let findings = if !country.findings().is_empty() && y < FINDINGS_GATE {
        let entries: Vec<FindingLayout> = country
            .findings()
            .iter()
            .take(MAX_FINDINGS)
            .map(|finding| {
                let lines =
                    metrics::wrap_lines(&finding.text, Face::Regular, 8.0, CONTENT_WIDTH - 20.0);
                let box_height = lines.len() as f64 * BULLET_LINE_HEIGHT + 5.0;
                FindingLayout {
                    lines,
                    source: finding.source.clone(),
                    box_height,
                }
            })
            .collect();
        let height = 9.0
            + entries
                .iter()
                .map(|e| e.lines.len() as f64 * BULLET_LINE_HEIGHT + 8.0)
                .sum::<f64>()
            + 3.0;
        // Findings are droppable content: they must fit their own limit and
        // still leave room for the framework card above the content floor.
        let fits = y + height < FINDINGS_LIMIT
            && y + height + SECTION_GAP + framework_height <= CONTENT_FLOOR;
        if fits {
            let card = FindingsCard { y, height, entries };
            y += height + SECTION_GAP;
            Some(card)
        } else {
            None
        }
    } else {
        None
    };

    let framework = match country.hearing_adoption {
        FrameworkStatus::Assessed(flags) if y + SCORECARD_HEIGHT < SCORECARD_LIMIT => {
            let section = FrameworkSection::Scorecard { y, flags };
            y += SCORECARD_HEIGHT + SECTION_GAP;
            section
        }
        FrameworkStatus::NotAssessed if y + GUIDANCE_HEIGHT <= CONTENT_FLOOR => {
            let section = FrameworkSection::Guidance { y };
            y += GUIDANCE_HEIGHT + SECTION_GAP;
            section
        }
        _ => FrameworkSection::Omitted,
    };

    let refs_height = chrome::measure_references(CONTENT_WIDTH);
    let refs_y = (y + 2.0)
        .max(CONTENT_FLOOR)
        .min(FOOTER_TOP - refs_height - 3.0);

    Page2Plan {
        stats,
        card_height,
        overview_content_height,
        women_content_height,
        adoption_row,
        bullets,
        findings,
        framework,
        refs_y,
    }
}

/// Executes a plan onto the page.
pub fn draw_page2(
    canvas: &Canvas<'_>,
    country: &CountryRecord,
    plan: &Page2Plan,
    logo: Option<&Logo>,
) {
    chrome::draw_header(canvas, logo);
    chrome::draw_accent_stripe(canvas, palette::ROSE);

    canvas.text(
        &country.name,
        Face::Bold,
        20.0,
        MARGIN,
        TITLE_BASELINE,
        palette::INK,
        Align::Left,
    );

    draw_overview_card(canvas, country, plan);
    draw_women_card(canvas, plan);

    if let Some(card) = &plan.findings {
        draw_findings_card(canvas, country, card);
    }

    match &plan.framework {
        FrameworkSection::Scorecard { y, flags } => draw_scorecard(canvas, *y, flags),
        FrameworkSection::Guidance { y } => draw_guidance(canvas, *y),
        FrameworkSection::Omitted => {}
    }

    canvas.line(
        MARGIN,
        plan.refs_y,
        PAGE_WIDTH - MARGIN,
        plan.refs_y,
        palette::HAIRLINE,
        0.2,
    );
    chrome::draw_references(canvas, MARGIN, plan.refs_y + 2.0, CONTENT_WIDTH, FOOTER_TOP);

    canvas.line(
        MARGIN,
        FOOTER_RULE_Y,
        PAGE_WIDTH - MARGIN,
        FOOTER_RULE_Y,
        palette::HAIRLINE,
        0.3,
    );
    if let Some(logo) = logo {
        logo.place(canvas, MARGIN, FOOTER_RULE_Y + 1.5, 6.0, 6.0);
    }
    canvas.text(
        content::FOOTER_LINE,
        Face::Regular,
        8.0,
        MARGIN + 9.0,
        FOOTER_RULE_Y + 5.0,
        palette::MUTED,
        Align::Left,
    );
    canvas.text(
        "Page 2 of 2",
        Face::Regular,
        8.0,
        PAGE_WIDTH / 2.0,
        PAGE_HEIGHT - 6.0,
        palette::MUTED,
        Align::Center,
    );
}

fn draw_overview_card(canvas: &Canvas<'_>, country: &CountryRecord, plan: &Page2Plan) {
    let x = MARGIN;
    let w = card_width();
    canvas.fill_rounded_rect(x, ROW_TOP, w, plan.card_height, 3.0, palette::CARD);
    canvas.stroke_rounded_rect(x, ROW_TOP, w, plan.card_height, 3.0, palette::HAIRLINE, 0.3);

    let mut cy = ROW_TOP + 7.0;
    chrome::draw_card_title(canvas, Icon::Users, "Hearing Loss Overview", x + 5.0, cy, palette::ROSE);
    cy += 6.0;

    canvas.text(
        &format_number(country.estimated_affected),
        Face::Bold,
        18.0,
        x + 7.0,
        cy + 5.0,
        palette::INK,
        Align::Left,
    );
    cy += 8.0;
    let caption = if plan.adoption_row {
        "people affected [1][2]"
    } else {
        "people affected [1]"
    };
    canvas.text(caption, Face::Regular, 9.0, x + 7.0, cy, palette::MUTED, Align::Left);
    cy += 5.0;

    let row_w = w - 14.0;
    let rank_value = format!("{} of {} countries", plan.stats.rank, plan.stats.total);
    let trend_value = TrendBand::from_eapc(country.trend).label();
    let rows = [
        ("Prevalence Rate", format_rate(country.prevalence_rate)),
        ("Prevalence Rank", rank_value),
        ("30-Year Trend", trend_value.to_string()),
    ];
    for (label, value) in &rows {
        canvas.fill_rounded_rect(x + 7.0, cy, row_w, 8.0, 2.0, palette::GRAY_TINT);
        canvas.text(label, Face::Regular, 8.5, x + 10.0, cy + 5.5, palette::MUTED, Align::Left);
        canvas.text(value, Face::Bold, 8.5, x + 7.0 + row_w - 4.0, cy + 5.5, palette::INK, Align::Right);
        cy += 9.0;
    }

    if let Some(adoption) = country.hearing_aid_adoption {
        canvas.fill_rounded_rect(x + 7.0, cy, row_w, 8.0, 2.0, palette::ROSE_TINT);
        canvas.text("Hearing Aid Adoption", Face::Bold, 8.5, x + 10.0, cy + 5.5, palette::INK, Align::Left);
        canvas.text(
            &format!("{adoption}%"),
            Face::Bold,
            8.5,
            x + 7.0 + row_w - 4.0,
            cy + 5.5,
            palette::ROSE,
            Align::Right,
        );
    }
}

fn draw_women_card(canvas: &Canvas<'_>, plan: &Page2Plan) {
    let w = card_width();
    let x = MARGIN + w + CARD_GAP;
    canvas.fill_rounded_rect(x, ROW_TOP, w, plan.card_height, 3.0, palette::LAVENDER_TINT);
    canvas.stroke_rounded_rect(x, ROW_TOP, w, plan.card_height, 3.0, palette::HAIRLINE, 0.3);

    let mut cy = ROW_TOP + 7.0;
    chrome::draw_card_title(canvas, Icon::Heart, "Women & Girls", x + 5.0, cy, palette::ROSE);
    cy += 6.0;

    canvas.text(
        &format!("~{}", format_number(plan.stats.estimated_women)),
        Face::Bold,
        18.0,
        x + 7.0,
        cy + 5.0,
        palette::INK,
        Align::Left,
    );
    cy += 8.0;
    canvas.text(
        "women & girls affected [1][3][4]",
        Face::Regular,
        9.0,
        x + 7.0,
        cy,
        palette::MUTED,
        Align::Left,
    );
    cy += 5.0;

    let inner_w = w - 14.0;
    for bullet in &plan.bullets {
        canvas.fill_rounded_rect(x + 7.0, cy, inner_w, bullet.box_height, 2.0, palette::GRAY_TINT);
        canvas.text(&bullet.lead, Face::Bold, 8.5, x + 10.0, cy + 4.0, palette::INK, Align::Left);
        for (li, line) in bullet.lines.iter().enumerate() {
            canvas.text(
                line,
                Face::Regular,
                8.0,
                x + 10.0,
                cy + 4.0 + (li + 1) as f64 * BULLET_LINE_HEIGHT,
                palette::MUTED,
                Align::Left,
            );
        }
        cy += bullet.box_height + 1.5;
    }
}

fn draw_findings_card(canvas: &Canvas<'_>, country: &CountryRecord, card: &FindingsCard) {
    canvas.fill_rounded_rect(MARGIN, card.y, CONTENT_WIDTH, card.height, 3.0, palette::PEACH_TINT);
    canvas.stroke_rounded_rect(MARGIN, card.y, CONTENT_WIDTH, card.height, 3.0, palette::HAIRLINE, 0.3);

    chrome::draw_card_title(
        canvas,
        Icon::AlertTriangle,
        &format!("Notable Findings for {}", country.name),
        MARGIN + 5.0,
        card.y + 6.0,
        palette::ROSE,
    );

    let mut fy = card.y + 10.0;
    for entry in &card.entries {
        canvas.fill_rounded_rect(
            MARGIN + 5.0,
            fy,
            CONTENT_WIDTH - 10.0,
            entry.box_height,
            1.5,
            palette::WHITE,
        );
        for (li, line) in entry.lines.iter().enumerate() {
            canvas.text(
                line,
                Face::Regular,
                8.0,
                MARGIN + 8.0,
                fy + 3.5 + li as f64 * BULLET_LINE_HEIGHT,
                palette::INK,
                Align::Left,
            );
        }
        canvas.text(
            &entry.source,
            Face::Oblique,
            7.0,
            MARGIN + 8.0,
            fy + entry.box_height - 1.5,
            palette::MUTED,
            Align::Left,
        );
        fy += entry.box_height + 1.5;
    }
}

fn draw_scorecard(canvas: &Canvas<'_>, y: f64, flags: &PillarFlags) {
    canvas.fill_rounded_rect(MARGIN, y, CONTENT_WIDTH, SCORECARD_HEIGHT, 3.0, palette::GREEN_TINT);
    canvas.stroke_rounded_rect(MARGIN, y, CONTENT_WIDTH, SCORECARD_HEIGHT, 3.0, palette::HAIRLINE, 0.3);

    chrome::draw_card_title(
        canvas,
        Icon::Globe,
        "H.E.A.R.I.N.G. Framework Progress",
        MARGIN + 5.0,
        y + 6.0,
        palette::GREEN,
    );

    let col_w = (CONTENT_WIDTH - 14.0) / 2.0;
    let pillar_h = 7.5;
    let top = y + 10.0;
    let adopted = flags.in_order();

    for (i, &(letter, name)) in content::PILLARS.iter().enumerate() {
        let col = (i % 2) as f64;
        let row = (i / 2) as f64;
        let px = MARGIN + 5.0 + col * (col_w + 4.0);
        let py = top + row * (pillar_h + 1.0);
        let is_adopted = adopted[i];

        let bg = if is_adopted { palette::PILLAR_MET } else { palette::PILLAR_OPEN };
        canvas.fill_rounded_rect(px, py, col_w, pillar_h, 1.5, bg);

        let letter_color = if is_adopted { palette::GREEN } else { palette::MUTED };
        canvas.text(letter, Face::Bold, 8.0, px + 3.0, py + 5.0, letter_color, Align::Left);
        canvas.text(name, Face::Regular, 7.5, px + 9.0, py + 5.0, palette::INK, Align::Left);

        let (badge_text, badge_color) = if is_adopted {
            ("Adopted", palette::BADGE_GREEN)
        } else {
            ("Opportunity", palette::BADGE_AMBER)
        };
        let badge_w = metrics::text_width(badge_text, Face::Bold, 7.0) + 4.0;
        let badge_x = px + col_w - badge_w - 2.0;
        canvas.fill_rounded_rect(badge_x, py + 1.2, badge_w, pillar_h - 2.4, 1.5, badge_color);
        canvas.text(
            badge_text,
            Face::Bold,
            7.0,
            badge_x + badge_w / 2.0,
            py + 5.0,
            palette::WHITE,
            Align::Center,
        );
    }

    canvas.text(
        "Source: WHO World Report on Hearing, 2021 [4]",
        Face::Oblique,
        7.5,
        MARGIN + 5.0,
        y + SCORECARD_HEIGHT - 2.0,
        palette::MUTED,
        Align::Left,
    );
}

fn draw_guidance(canvas: &Canvas<'_>, y: f64) {
    canvas.fill_rounded_rect(MARGIN, y, CONTENT_WIDTH, GUIDANCE_HEIGHT, 3.0, palette::ROSE_TINT);
    canvas.stroke_rounded_rect(MARGIN, y, CONTENT_WIDTH, GUIDANCE_HEIGHT, 3.0, palette::HAIRLINE, 0.3);

    chrome::draw_card_title(
        canvas,
        Icon::Globe,
        "H.E.A.R.I.N.G. Framework",
        MARGIN + 5.0,
        y + 6.0,
        palette::ROSE,
    );
    canvas.text(
        "WHO recommended actions for ear and hearing care [4]",
        Face::Oblique,
        7.0,
        MARGIN + 5.0,
        y + 11.0,
        palette::MUTED,
        Align::Left,
    );

    let col_w = (CONTENT_WIDTH - 16.0) / 2.0;
    let top = y + 14.0;

    for (i, pillar) in content::PILLAR_GUIDANCE.iter().enumerate() {
        let col = (i % 2) as f64;
        let row = (i / 2) as f64;
        let px = MARGIN + 5.0 + col * (col_w + 6.0);
        let py = top + row * (GUIDANCE_ROW_HEIGHT + 1.0);

        canvas.fill_rounded_rect(px, py, col_w, GUIDANCE_ROW_HEIGHT, 2.0, palette::WHITE);

        canvas.text(pillar.letter, Face::Bold, 9.0, px + 3.0, py + 4.5, palette::ROSE, Align::Left);
        canvas.text(pillar.title, Face::Bold, 8.0, px + 9.0, py + 4.5, palette::INK, Align::Left);

        let fact_lines = metrics::wrap_lines(pillar.fact, Face::Regular, 6.5, col_w - 12.0);
        if let Some(first) = fact_lines.first() {
            canvas.text(first, Face::Regular, 6.5, px + 9.0, py + 8.5, palette::MUTED, Align::Left);
        }

        let action_lines = metrics::wrap_lines(pillar.action, Face::Oblique, 6.5, col_w - 12.0);
        for (al, line) in action_lines.iter().take(2).enumerate() {
            canvas.text(
                line,
                Face::Oblique,
                6.5,
                px + 9.0,
                py + 11.7 + al as f64 * 2.8,
                palette::ROSE,
                Align::Left,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn card_heights_are_symmetric_for_every_country() {
        for country in dataset::countries() {
            let plan = plan_page2(country, dataset::countries());
            let expected = plan
                .overview_content_height
                .max(plan.women_content_height);
            assert_eq!(
                plan.card_height, expected,
                "row height must match the taller card for {}",
                country.name
            );
            assert!(plan.card_height >= plan.overview_content_height);
            assert!(plan.card_height >= plan.women_content_height);
        }
    }

    #[test]
    fn exactly_one_framework_variant_for_every_country() {
        for country in dataset::countries() {
            let plan = plan_page2(country, dataset::countries());
            match (&plan.framework, &country.hearing_adoption) {
                (FrameworkSection::Scorecard { .. }, FrameworkStatus::Assessed(_)) => {}
                (FrameworkSection::Guidance { .. }, FrameworkStatus::NotAssessed) => {}
                (FrameworkSection::Omitted, _) => {
                    panic!("framework section suppressed for {}", country.name)
                }
                _ => panic!("framework variant does not match the data for {}", country.name),
            }
        }
    }

    #[test]
    fn findings_are_capped_at_two() {
        let table = dataset::countries();
        for name in ["Greece", "United States"] {
            let country = dataset::find(name).unwrap();
            assert!(country.findings().len() > 2, "test premise for {name}");
            let plan = plan_page2(country, table);
            let card = plan.findings.expect("findings card should fit");
            assert_eq!(card.entries.len(), 2, "{name} must render exactly 2 findings");
        }
    }

    #[test]
    fn missing_adoption_data_omits_the_row_entirely() {
        let table = dataset::countries();
        let without = dataset::find("Afghanistan").unwrap();
        assert!(without.hearing_aid_adoption.is_none());
        assert!(!plan_page2(without, table).adoption_row);

        let with = dataset::find("Switzerland").unwrap();
        assert!(with.hearing_aid_adoption.is_some());
        assert!(plan_page2(with, table).adoption_row);
    }

    #[test]
    fn plan_reuses_the_shared_derived_stats() {
        let table = dataset::countries();
        for country in table {
            let plan = plan_page2(country, table);
            assert_eq!(plan.stats, DerivedStats::for_country(country, table));
        }
    }

    #[test]
    fn sections_never_cross_the_reference_block() {
        let table = dataset::countries();
        for country in table {
            let plan = plan_page2(country, table);
            let last_bottom = match &plan.framework {
                FrameworkSection::Scorecard { y, .. } => y + SCORECARD_HEIGHT,
                FrameworkSection::Guidance { y } => y + GUIDANCE_HEIGHT,
                FrameworkSection::Omitted => unreachable!(),
            };
            assert!(
                last_bottom <= plan.refs_y,
                "cards overlap references for {}",
                country.name
            );
            let refs_height = chrome::measure_references(CONTENT_WIDTH);
            assert!(plan.refs_y + 2.0 + refs_height <= FOOTER_TOP + 1e-9);
        }
    }

    #[test]
    fn findings_yield_to_the_guidance_card() {
        // Not-assessed countries with findings cannot fit both cards; the
        // framework card wins and the findings are dropped.
        let table = dataset::countries();
        let madagascar = dataset::find("Madagascar").unwrap();
        assert!(!madagascar.findings().is_empty());
        let plan = plan_page2(madagascar, table);
        assert!(plan.findings.is_none());
        assert!(matches!(plan.framework, FrameworkSection::Guidance { .. }));
    }

    #[test]
    fn planning_twice_yields_the_same_layout() {
        let table = dataset::countries();
        let china = dataset::find("China").unwrap();
        let a = plan_page2(china, table);
        let b = plan_page2(china, table);
        assert_eq!(a.card_height, b.card_height);
        assert_eq!(a.refs_y, b.refs_y);
        assert_eq!(
            a.findings.as_ref().map(|f| (f.y, f.height, f.entries.len())),
            b.findings.as_ref().map(|f| (f.y, f.height, f.entries.len()))
        );
    }
}
