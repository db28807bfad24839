//! Derived statistics and display formatting.
//!
//! Everything in this module is a pure function of a country record and the
//! full table.  The page renderers and the CLI listing both go through these
//! functions, so the numbers printed next to a country can never drift from
//! the numbers inside its brief.

use crate::model::CountryRecord;

/// Share of the affected population estimated to be women and girls.
const FEMALE_SHARE: f64 = 0.445;
/// Share of the population aged roughly 12 to 35.
const YOUTH_SHARE: f64 = 0.24;
/// Share of young people exposed to unsafe listening levels.
const UNSAFE_LISTENING_SHARE: f64 = 0.35;

/// Classification of a country's prevalence trajectory by its EAPC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendBand {
    RisingSignificantly,
    Rising,
    Stable,
    Declining,
    DecliningSignificantly,
}

/// Direction shown next to a trend label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendBand {
    /// Buckets an estimated annual percentage change into one of five bands.
    pub fn from_eapc(eapc: f64) -> Self {
        if eapc > 0.1 {
            TrendBand::RisingSignificantly
        } else if eapc > 0.02 {
            TrendBand::Rising
        } else if eapc > -0.02 {
            TrendBand::Stable
        } else if eapc > -0.1 {
            TrendBand::Declining
        } else {
            TrendBand::DecliningSignificantly
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrendBand::RisingSignificantly => "Rising significantly",
            TrendBand::Rising => "Rising",
            TrendBand::Stable => "Stable",
            TrendBand::Declining => "Declining",
            TrendBand::DecliningSignificantly => "Declining significantly",
        }
    }

    pub fn direction(self) -> TrendDirection {
        match self {
            TrendBand::RisingSignificantly | TrendBand::Rising => TrendDirection::Up,
            TrendBand::Stable => TrendDirection::Flat,
            TrendBand::Declining | TrendBand::DecliningSignificantly => TrendDirection::Down,
        }
    }
}

/// Per-country values computed at render time and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedStats {
    /// 1-based position when the table is sorted by descending prevalence.
    /// Ties keep their table order.  0 if the record is not a row
    /// of `table` (a caller bug, mirrored rather than validated).
    pub rank: usize,
    /// Number of countries ranked against.
    pub total: usize,
    /// Estimated women and girls affected.
    pub estimated_women: u64,
    /// Estimated young people at risk from unsafe listening.
    pub youth_at_risk: u64,
}

impl DerivedStats {
    pub fn for_country(country: &CountryRecord, table: &[CountryRecord]) -> Self {
        let mut order: Vec<usize> = (0..table.len()).collect();
        // Stable sort: equal prevalence rates keep table order, which makes
        // the rank of tied countries deterministic.
        order.sort_by(|&a, &b| table[b].prevalence_rate.cmp(&table[a].prevalence_rate));

        let rank = order
            .iter()
            .position(|&i| table[i].name == country.name)
            .map_or(0, |pos| pos + 1);

        DerivedStats {
            rank,
            total: table.len(),
            estimated_women: (country.estimated_affected as f64 * FEMALE_SHARE).round() as u64,
            youth_at_risk: (country.population * 1e6 * YOUTH_SHARE * UNSAFE_LISTENING_SHARE).round()
                as u64,
        }
    }
}

/// Formats a count the way the brief prints it: "1.5 billion",
/// "3.2 million", "4.7K", or the plain number below a thousand.
pub fn format_number(n: u64) -> String {
    let v = n as f64;
    if v >= 1e9 {
        format!("{:.1} billion", v / 1e9)
    } else if v >= 1e6 {
        format!("{:.1} million", v / 1e6)
    } else if v >= 1e3 {
        format!("{:.1}K", v / 1e3)
    } else {
        n.to_string()
    }
}

/// Formats a per-100,000 prevalence rate as a percentage.
pub fn format_rate(rate_per_100k: u32) -> String {
    format!("{:.1}%", rate_per_100k as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn derived_stats_are_idempotent() {
        let table = dataset::countries();
        let japan = dataset::find("Japan").unwrap();
        let first = DerivedStats::for_country(japan, table);
        let second = DerivedStats::for_country(japan, table);
        assert_eq!(first, second);
    }

    #[test]
    fn highest_prevalence_rate_ranks_first() {
        let table = dataset::countries();
        let top = table
            .iter()
            .max_by_key(|c| c.prevalence_rate)
            .expect("table is non-empty");
        let stats = DerivedStats::for_country(top, table);
        assert_eq!(stats.rank, 1);
        assert_eq!(stats.total, table.len());
    }

    #[test]
    fn prevalence_ties_resolve_by_table_order() {
        let table = dataset::countries();
        let el_salvador = dataset::find("El Salvador").unwrap();
        let eswatini = dataset::find("Eswatini").unwrap();
        assert_eq!(el_salvador.prevalence_rate, eswatini.prevalence_rate);

        let first = DerivedStats::for_country(el_salvador, table);
        let second = DerivedStats::for_country(eswatini, table);
        // El Salvador precedes Eswatini in the table, so it wins the tie.
        assert_eq!(first.rank + 1, second.rank);
    }

    #[test]
    fn estimates_use_the_published_multipliers() {
        let table = dataset::countries();
        let japan = dataset::find("Japan").unwrap();
        let stats = DerivedStats::for_country(japan, table);
        assert_eq!(
            stats.estimated_women,
            (japan.estimated_affected as f64 * 0.445).round() as u64
        );
        assert_eq!(
            stats.youth_at_risk,
            (japan.population * 1e6 * 0.24 * 0.35).round() as u64
        );
    }

    #[test]
    fn trend_bands_split_at_the_published_thresholds() {
        assert_eq!(TrendBand::from_eapc(0.2), TrendBand::RisingSignificantly);
        assert_eq!(TrendBand::from_eapc(0.05), TrendBand::Rising);
        assert_eq!(TrendBand::from_eapc(0.013), TrendBand::Stable);
        assert_eq!(TrendBand::from_eapc(-0.013), TrendBand::Stable);
        assert_eq!(TrendBand::from_eapc(-0.05), TrendBand::Declining);
        assert_eq!(TrendBand::from_eapc(-0.155), TrendBand::DecliningSignificantly);
    }

    #[test]
    fn trend_direction_follows_the_band() {
        assert_eq!(TrendBand::Rising.direction(), TrendDirection::Up);
        assert_eq!(TrendBand::Stable.direction(), TrendDirection::Flat);
        assert_eq!(
            TrendBand::DecliningSignificantly.direction(),
            TrendDirection::Down
        );
    }

    #[test]
    fn number_formatting_picks_the_right_scale() {
        assert_eq!(format_number(1_500_000_000), "1.5 billion");
        assert_eq!(format_number(3_200_000), "3.2 million");
        assert_eq!(format_number(4_700), "4.7K");
        assert_eq!(format_number(286), "286");
    }

    #[test]
    fn rate_formatting_converts_per_100k_to_percent() {
        assert_eq!(format_rate(13_787), "13.8%");
        assert_eq!(format_rate(22_034), "22.0%");
    }
}
