//! Data structures describing one country's hearing-health record.
//!
//! The types in this module form a serialization-friendly model that mirrors
//! the rows of the bundled dataset.  They intentionally avoid referencing the
//! rendering crate so the values can be inspected, listed, or exchanged
//! without pulling in the PDF backend.

use std::fmt;

use serde::Deserialize;

/// The six WHO regions represented in the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum Region {
    Africa,
    Americas,
    #[serde(rename = "Eastern Mediterranean")]
    EasternMediterranean,
    Europe,
    #[serde(rename = "South-East Asia")]
    SouthEastAsia,
    #[serde(rename = "Western Pacific")]
    WesternPacific,
}

impl Region {
    /// Returns the region name as published by the WHO.
    pub fn name(self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::EasternMediterranean => "Eastern Mediterranean",
            Region::Europe => "Europe",
            Region::SouthEastAsia => "South-East Asia",
            Region::WesternPacific => "Western Pacific",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A country-specific research citation surfaced on the brief.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Finding {
    pub text: String,
    pub source: String,
    pub url: String,
}

/// Adoption flags for the seven H.E.A.R.I.N.G. framework pillars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarFlags {
    pub hearing_screening: bool,
    pub ear_disease_prevention: bool,
    pub access_technology: bool,
    pub rehabilitation: bool,
    pub improved_communication: bool,
    pub noise_reduction: bool,
    pub community_engagement: bool,
}

impl PillarFlags {
    /// Flags in pillar order (H, E, A, R, I, N, G).
    pub fn in_order(&self) -> [bool; 7] {
        [
            self.hearing_screening,
            self.ear_disease_prevention,
            self.access_technology,
            self.rehabilitation,
            self.improved_communication,
            self.noise_reduction,
            self.community_engagement,
        ]
    }
}

/// Whether a country's framework adoption has been assessed.
///
/// "Not assessed" is materially different from "assessed with every pillar
/// still open": the first renders the generic guidance card, the second a
/// scorecard full of "Opportunity" badges.  Keeping the distinction in the
/// type makes it impossible to conflate the two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<PillarFlags>")]
pub enum FrameworkStatus {
    #[default]
    NotAssessed,
    Assessed(PillarFlags),
}

impl From<Option<PillarFlags>> for FrameworkStatus {
    fn from(value: Option<PillarFlags>) -> Self {
        match value {
            Some(flags) => FrameworkStatus::Assessed(flags),
            None => FrameworkStatus::NotAssessed,
        }
    }
}

impl FrameworkStatus {
    /// Returns the pillar flags if adoption has been assessed.
    pub fn assessed(&self) -> Option<&PillarFlags> {
        match self {
            FrameworkStatus::Assessed(flags) => Some(flags),
            FrameworkStatus::NotAssessed => None,
        }
    }
}

/// One row of the country table.
///
/// Records are immutable once the dataset is loaded; the generator borrows a
/// reference per invocation and owns no state across invocations.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// Unique country name, the table key.
    pub name: String,
    pub region: Region,
    /// Population in millions.
    pub population: f64,
    /// Age-standardized prevalence per 100,000.
    pub prevalence_rate: u32,
    /// The same rate three decades earlier.
    #[serde(rename = "prevalenceRate1990")]
    pub prevalence_rate_1990: u32,
    /// Absolute number of people affected.
    pub estimated_affected: u64,
    /// Estimated annual percentage change of the prevalence rate.
    pub trend: f64,
    /// Hearing-aid adoption percentage; `None` means no published data.
    pub hearing_aid_adoption: Option<u8>,
    enriched_findings: Option<Vec<Finding>>,
    pub hearing_adoption: FrameworkStatus,
}

impl CountryRecord {
    /// Returns the country-specific findings, empty when none are published.
    pub fn findings(&self) -> &[Finding] {
        self.enriched_findings.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_status_distinguishes_absent_from_all_false() {
        let not_assessed: FrameworkStatus = serde_json::from_str("null").unwrap();
        assert_eq!(not_assessed, FrameworkStatus::NotAssessed);

        let all_false: FrameworkStatus = serde_json::from_str(
            r#"{
                "hearingScreening": false,
                "earDiseasePrevention": false,
                "accessTechnology": false,
                "rehabilitation": false,
                "improvedCommunication": false,
                "noiseReduction": false,
                "communityEngagement": false
            }"#,
        )
        .unwrap();
        assert_eq!(all_false, FrameworkStatus::Assessed(PillarFlags::default()));
        assert_ne!(not_assessed, all_false);
    }

    #[test]
    fn record_deserializes_from_dataset_row() {
        let record: CountryRecord = serde_json::from_str(
            r#"{
                "name": "Testland",
                "region": "Europe",
                "population": 10.5,
                "prevalenceRate": 15000,
                "prevalenceRate1990": 14800,
                "estimatedAffected": 1500000,
                "trend": 0.05,
                "hearingAidAdoption": null,
                "enrichedFindings": null,
                "hearingAdoption": null
            }"#,
        )
        .unwrap();

        assert_eq!(record.region, Region::Europe);
        assert_eq!(record.hearing_aid_adoption, None);
        assert!(record.findings().is_empty());
        assert_eq!(record.hearing_adoption, FrameworkStatus::NotAssessed);
    }

    #[test]
    fn pillar_order_matches_acronym() {
        let flags = PillarFlags {
            hearing_screening: true,
            community_engagement: true,
            ..PillarFlags::default()
        };
        let ordered = flags.in_order();
        assert!(ordered[0]);
        assert!(ordered[6]);
        assert!(!ordered[1]);
    }
}
