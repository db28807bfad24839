//! Static copy shared by the page renderers.
//!
//! These tables never change within a process lifetime; they are the
//! configuration data of the brief.  Citation indices in the copy refer to
//! positions in [`REFERENCES`].

/// The wordmark shown in the page header.
pub const WORDMARK: &str = "Listen Up, Mom!";
/// Byline fragments; the middle one is printed in the accent color.
pub const BYLINE: [&str; 3] = ["because every \"", "I love you", "\" deserves to be heard"];
pub const SITE: &str = "listenupmom.org";
pub const CONTACT: &str = "hello@listenupmom.org";
pub const FOOTER_LINE: &str =
    "listenupmom.org  |  hello@listenupmom.org  |  A Girl Scout Gold Award Project";

/// Full citation list printed on page 2, in APA style.
pub const REFERENCES: [&str; 9] = [
    "[1] GBD 2021 Hearing Loss Collaborators. (2024). Hearing loss prevalence, 1990-2019. The Lancet Public Health.",
    "[2] European Hearing Instrument Manufacturers Association. (2024). EuroTrak survey data.",
    "[3] National Institute on Deafness and Other Communication Disorders. (2023). Quick statistics about hearing.",
    "[4] World Health Organization. (2021). World report on hearing.",
    "[5] World Health Organization. (2024). Deafness and hearing loss fact sheet.",
    "[6] Livingston, G., et al. (2024). Dementia prevention, intervention, and care. The Lancet, 404, 572-628.",
    "[7] Lin, F. R., et al. (2011). Hearing loss and incident dementia. Archives of Neurology, 68(2), 214-220.",
    "[8] Reed, N. S., et al. (2019). Trends in health care costs and untreated hearing loss. JAMA Otolaryngology, 145(1), 27-34.",
    "[9] Lin, F. R., et al. (2023). Hearing intervention to reduce cognitive decline. The Lancet, 402(10404), 786-797.",
];

/// Share of women affected per age decade, page 1 line chart.
pub const AGE_CURVE: [(&str, f64); 5] = [
    ("30s", 5.0),
    ("40s", 10.0),
    ("50s", 20.0),
    ("60s", 39.0),
    ("70+", 65.0),
];

/// Hearing-aid use by sex, page 1 grouped bars: (label, men %, women %).
pub const TREATMENT_GAP: [(&str, f64, f64); 2] =
    [("Ages 45+", 9.0, 5.0), ("Ages 75-84", 26.7, 13.7)];

/// Global overview rows: (label, value, highlighted).
pub const GLOBAL_OVERVIEW: [(&str, &str, bool); 4] = [
    ("People with hearing loss", "1.5 billion", false),
    ("Annual economic cost", "$980 billion", false),
    ("Need rehabilitation", "430 million", false),
    ("Projected by 2050", "1 in 4", true),
];

/// "The Path Forward" stat cards: (big number, caption).
pub const PATH_FORWARD: [(&str, &str); 2] = [
    ("60%", "of childhood hearing loss is preventable"),
    ("$16", "return for every $1 invested in hearing care"),
];

/// Modifiable dementia risk factors: (name, attributable %).
pub const RISK_FACTORS: [(&str, f64); 6] = [
    ("Hearing Loss", 7.0),
    ("Less Education", 5.0),
    ("Smoking", 5.0),
    ("Depression", 3.0),
    ("Social Isolation", 3.0),
    ("Inactivity", 2.0),
];

/// Dementia risk multiplier by hearing-loss severity.
pub const RISK_MULTIPLIER: [(&str, f64); 4] = [
    ("Normal", 1.0),
    ("Mild", 2.0),
    ("Moderate", 3.0),
    ("Severe", 5.0),
];

/// One box of the dementia-connection stat grid.
pub struct StatBox {
    pub value: &'static str,
    /// Caption, always two lines.
    pub label: [&'static str; 2],
    /// Long textual values drop to a smaller font.
    pub text_value: bool,
}

/// The 2x3 dementia-connection grid, row by row.
pub const DEMENTIA_GRID: [[StatBox; 3]; 2] = [
    [
        StatBox {
            value: "#1",
            label: ["modifiable dementia", "risk factor"],
            text_value: false,
        },
        StatBox {
            value: "2-5x",
            label: ["increased dementia risk", "with untreated hearing loss"],
            text_value: false,
        },
        StatBox {
            value: "Stronger in women",
            label: ["untreated hearing loss linked", "more to cognitive decline"],
            text_value: true,
        },
    ],
    [
        StatBox {
            value: "48%",
            label: ["slower cognitive decline", "with hearing aids"],
            text_value: false,
        },
        StatBox {
            value: "$30",
            label: ["saved in dementia care", "per $1 on hearing"],
            text_value: false,
        },
        StatBox {
            value: "45%",
            label: ["of dementia cases", "potentially preventable"],
            text_value: false,
        },
    ],
];

/// Fixed parts of the "Women & Girls" card bullets.  The lead of the second
/// bullet is the country's youth-at-risk estimate, formatted at plan time.
pub const TREATMENT_GAP_BULLET: (&str, &str) = (
    "Treatment gap:",
    "Women use hearing aids at roughly half the rate of men",
);
pub const YOUTH_BULLET_REST: &str =
    "young people at risk from unsafe listening (earbuds, concerts)";
pub const MENOPAUSE_BULLET: (&str, &str) = (
    "After menopause:",
    "hearing decline accelerates due to reduced estrogen",
);

/// The seven H.E.A.R.I.N.G. pillars: (letter, name), in acronym order.
/// Must stay aligned with [`crate::model::PillarFlags::in_order`].
pub const PILLARS: [(&str, &str); 7] = [
    ("H", "Hearing Screening"),
    ("E", "Ear Disease Prevention"),
    ("A", "Access to Technology"),
    ("R", "Rehabilitation Services"),
    ("I", "Improved Communication"),
    ("N", "Noise Reduction"),
    ("G", "Community Engagement"),
];

/// Generic recommended action for one pillar, shown when a country's
/// adoption has not been assessed.
pub struct PillarGuidance {
    pub letter: &'static str,
    pub title: &'static str,
    pub fact: &'static str,
    pub action: &'static str,
}

pub const PILLAR_GUIDANCE: [PillarGuidance; 7] = [
    PillarGuidance {
        letter: "H",
        title: "Hearing Screening",
        fact: "Only 17% of those who need hearing aids have access.",
        action: "Mandate universal newborn screening and hearing checks for adults over 50.",
    },
    PillarGuidance {
        letter: "E",
        title: "Ear Disease Prevention",
        fact: "60% of childhood hearing loss is preventable.",
        action: "Fund campaigns on ear infections and expand immunization programs.",
    },
    PillarGuidance {
        letter: "A",
        title: "Access to Technology",
        fact: "Only 17% who could benefit from hearing aids use them.",
        action: "Include hearing aids in insurance/subsidy programs.",
    },
    PillarGuidance {
        letter: "R",
        title: "Rehabilitation Services",
        fact: "Most countries have <1 audiologist per million people.",
        action: "Train primary care workers; integrate audiology into community health.",
    },
    PillarGuidance {
        letter: "I",
        title: "Improved Communication",
        fact: "430 million people have disabling hearing loss.",
        action: "Require captioning and fund sign language programs.",
    },
    PillarGuidance {
        letter: "N",
        title: "Noise Reduction",
        fact: "1.1 billion young people at risk from unsafe listening.",
        action: "Legislate venue sound levels and regulate device output.",
    },
    PillarGuidance {
        letter: "G",
        title: "Community Engagement",
        fact: "Stigma is the biggest barrier to hearing aid adoption.",
        action: "Normalize hearing checks; reframe as preventive care.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn citation_indices_cover_one_through_nine() {
        for (i, reference) in REFERENCES.iter().enumerate() {
            assert!(reference.starts_with(&format!("[{}]", i + 1)));
        }
    }

    #[test]
    fn pillar_tables_agree_on_the_acronym() {
        for (pillar, guidance) in PILLARS.iter().zip(PILLAR_GUIDANCE.iter()) {
            assert_eq!(pillar.0, guidance.letter);
        }
        let acronym: String = PILLARS.iter().map(|p| p.0).collect();
        assert_eq!(acronym, "HEARING");
    }
}
