//! Reference Soil Catalog
//!
//! Typical bulk unit weight and effective friction angle for common soils,
//! graded by density index I_D (cohesionless) or liquidity index I_L
//! (cohesive). All entries are normally consolidated (OCR = 1).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{SoilCategory, SoilProperties};
use crate::errors::{CalcError, CalcResult};

/// Soils available for quick layer definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceSoil {
    #[serde(rename = "FS-L")]
    FineSandLoose,
    #[serde(rename = "FS-MD")]
    FineSandMediumDense,
    #[serde(rename = "FS-D")]
    FineSandDense,
    #[serde(rename = "MS-L")]
    MediumSandLoose,
    #[serde(rename = "MS-MD")]
    MediumSandMediumDense,
    #[serde(rename = "MS-D")]
    MediumSandDense,
    #[serde(rename = "CS-L")]
    CoarseSandLoose,
    #[serde(rename = "CS-MD")]
    CoarseSandMediumDense,
    #[serde(rename = "CS-D")]
    CoarseSandDense,
    #[serde(rename = "GS-MD")]
    GravellySandMediumDense,
    #[serde(rename = "GS-D")]
    GravellySandDense,
    #[serde(rename = "SI-S")]
    SiltSoft,
    #[serde(rename = "SI-ST")]
    SiltStiff,
    #[serde(rename = "SACL-S")]
    SandyClaySoft,
    #[serde(rename = "SACL-ST")]
    SandyClayStiff,
    #[serde(rename = "SACL-SH")]
    SandyClaySemiHard,
    #[serde(rename = "SICL-S")]
    SiltyClaySoft,
    #[serde(rename = "SICL-ST")]
    SiltyClayStiff,
    #[serde(rename = "CL-S")]
    ClaySoft,
    #[serde(rename = "CL-ST")]
    ClayStiff,
    #[serde(rename = "CL-SH")]
    ClaySemiHard,
}

/// Normalized name -> soil, covering codes, short names and display names
static LOOKUP: Lazy<HashMap<String, ReferenceSoil>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for soil in ReferenceSoil::ALL {
        map.insert(normalize(soil.code()), soil);
        map.insert(normalize(soil.short_name()), soil);
        map.insert(normalize(&soil.display_name()), soil);
    }
    map
});

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl ReferenceSoil {
    /// All catalog soils for UI selection, cohesionless first
    pub const ALL: [ReferenceSoil; 21] = [
        ReferenceSoil::FineSandLoose,
        ReferenceSoil::FineSandMediumDense,
        ReferenceSoil::FineSandDense,
        ReferenceSoil::MediumSandLoose,
        ReferenceSoil::MediumSandMediumDense,
        ReferenceSoil::MediumSandDense,
        ReferenceSoil::CoarseSandLoose,
        ReferenceSoil::CoarseSandMediumDense,
        ReferenceSoil::CoarseSandDense,
        ReferenceSoil::GravellySandMediumDense,
        ReferenceSoil::GravellySandDense,
        ReferenceSoil::SiltSoft,
        ReferenceSoil::SiltStiff,
        ReferenceSoil::SandyClaySoft,
        ReferenceSoil::SandyClayStiff,
        ReferenceSoil::SandyClaySemiHard,
        ReferenceSoil::SiltyClaySoft,
        ReferenceSoil::SiltyClayStiff,
        ReferenceSoil::ClaySoft,
        ReferenceSoil::ClayStiff,
        ReferenceSoil::ClaySemiHard,
    ];

    /// Get the short code (e.g., "MS-MD")
    pub fn code(&self) -> &'static str {
        match self {
            ReferenceSoil::FineSandLoose => "FS-L",
            ReferenceSoil::FineSandMediumDense => "FS-MD",
            ReferenceSoil::FineSandDense => "FS-D",
            ReferenceSoil::MediumSandLoose => "MS-L",
            ReferenceSoil::MediumSandMediumDense => "MS-MD",
            ReferenceSoil::MediumSandDense => "MS-D",
            ReferenceSoil::CoarseSandLoose => "CS-L",
            ReferenceSoil::CoarseSandMediumDense => "CS-MD",
            ReferenceSoil::CoarseSandDense => "CS-D",
            ReferenceSoil::GravellySandMediumDense => "GS-MD",
            ReferenceSoil::GravellySandDense => "GS-D",
            ReferenceSoil::SiltSoft => "SI-S",
            ReferenceSoil::SiltStiff => "SI-ST",
            ReferenceSoil::SandyClaySoft => "SACL-S",
            ReferenceSoil::SandyClayStiff => "SACL-ST",
            ReferenceSoil::SandyClaySemiHard => "SACL-SH",
            ReferenceSoil::SiltyClaySoft => "SICL-S",
            ReferenceSoil::SiltyClayStiff => "SICL-ST",
            ReferenceSoil::ClaySoft => "CL-S",
            ReferenceSoil::ClayStiff => "CL-ST",
            ReferenceSoil::ClaySemiHard => "CL-SH",
        }
    }

    /// Name without the consistency index, used as a layer name
    pub fn short_name(&self) -> &'static str {
        match self {
            ReferenceSoil::FineSandLoose => "Fine sand (loose)",
            ReferenceSoil::FineSandMediumDense => "Fine sand (medium dense)",
            ReferenceSoil::FineSandDense => "Fine sand (dense)",
            ReferenceSoil::MediumSandLoose => "Medium sand (loose)",
            ReferenceSoil::MediumSandMediumDense => "Medium sand (medium dense)",
            ReferenceSoil::MediumSandDense => "Medium sand (dense)",
            ReferenceSoil::CoarseSandLoose => "Coarse sand (loose)",
            ReferenceSoil::CoarseSandMediumDense => "Coarse sand (medium dense)",
            ReferenceSoil::CoarseSandDense => "Coarse sand (dense)",
            ReferenceSoil::GravellySandMediumDense => "Gravelly sand (medium dense)",
            ReferenceSoil::GravellySandDense => "Gravelly sand (dense)",
            ReferenceSoil::SiltSoft => "Silt (soft)",
            ReferenceSoil::SiltStiff => "Silt (stiff)",
            ReferenceSoil::SandyClaySoft => "Sandy clay (soft)",
            ReferenceSoil::SandyClayStiff => "Sandy clay (stiff)",
            ReferenceSoil::SandyClaySemiHard => "Sandy clay (semi-hard)",
            ReferenceSoil::SiltyClaySoft => "Silty clay (soft)",
            ReferenceSoil::SiltyClayStiff => "Silty clay (stiff)",
            ReferenceSoil::ClaySoft => "Clay (soft)",
            ReferenceSoil::ClayStiff => "Clay (stiff)",
            ReferenceSoil::ClaySemiHard => "Clay (semi-hard)",
        }
    }

    /// Consistency index label: I_D for sands, I_L for silts and clays
    pub fn index_label(&self) -> &'static str {
        use ReferenceSoil::*;
        match self {
            FineSandLoose | MediumSandLoose | CoarseSandLoose => "I_D=0.3",
            FineSandMediumDense | MediumSandMediumDense | CoarseSandMediumDense
            | GravellySandMediumDense => "I_D=0.5",
            FineSandDense | MediumSandDense | CoarseSandDense | GravellySandDense => "I_D=0.7",
            SiltSoft | SandyClaySoft | SiltyClaySoft | ClaySoft => "I_L=0.4",
            SiltStiff | SandyClayStiff | SiltyClayStiff | ClayStiff => "I_L=0.1",
            SandyClaySemiHard | ClaySemiHard => "I_L=0.0",
        }
    }

    /// Get display name, e.g. "Fine sand (loose) I_D=0.3"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.short_name(), self.index_label())
    }

    /// Soil group
    pub fn category(&self) -> SoilCategory {
        use ReferenceSoil::*;
        match self {
            SiltSoft | SiltStiff | SandyClaySoft | SandyClayStiff | SandyClaySemiHard
            | SiltyClaySoft | SiltyClayStiff | ClaySoft | ClayStiff | ClaySemiHard => {
                SoilCategory::Cohesive
            }
            _ => SoilCategory::Cohesionless,
        }
    }

    /// Get indicative parameters (γ, φ', OCR)
    pub fn properties(&self) -> SoilProperties {
        let (unit_weight_kn_m3, friction_angle_deg) = match self {
            ReferenceSoil::FineSandLoose => (17.0, 29.0),
            ReferenceSoil::FineSandMediumDense => (18.0, 32.0),
            ReferenceSoil::FineSandDense => (19.0, 35.0),
            ReferenceSoil::MediumSandLoose => (17.5, 31.0),
            ReferenceSoil::MediumSandMediumDense => (18.5, 34.0),
            ReferenceSoil::MediumSandDense => (19.5, 37.0),
            ReferenceSoil::CoarseSandLoose => (18.0, 32.0),
            ReferenceSoil::CoarseSandMediumDense => (19.0, 36.0),
            ReferenceSoil::CoarseSandDense => (20.0, 39.0),
            ReferenceSoil::GravellySandMediumDense => (19.5, 38.0),
            ReferenceSoil::GravellySandDense => (21.0, 41.0),
            ReferenceSoil::SiltSoft => (19.0, 18.0),
            ReferenceSoil::SiltStiff => (20.0, 23.0),
            ReferenceSoil::SandyClaySoft => (19.5, 16.0),
            ReferenceSoil::SandyClayStiff => (21.0, 24.0),
            ReferenceSoil::SandyClaySemiHard => (22.0, 28.0),
            ReferenceSoil::SiltyClaySoft => (19.0, 15.0),
            ReferenceSoil::SiltyClayStiff => (20.5, 21.0),
            ReferenceSoil::ClaySoft => (19.0, 10.0),
            ReferenceSoil::ClayStiff => (20.0, 16.0),
            ReferenceSoil::ClaySemiHard => (21.0, 20.0),
        };
        SoilProperties {
            unit_weight_kn_m3,
            friction_angle_deg,
            ocr: 1.0,
        }
    }

    /// Soils in one group, in catalog order
    pub fn in_category(category: SoilCategory) -> impl Iterator<Item = ReferenceSoil> {
        Self::ALL.into_iter().filter(move |s| s.category() == category)
    }

    /// Parse from a code, short name or display name (case and spacing insensitive)
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        LOOKUP
            .get(&normalize(s))
            .copied()
            .ok_or_else(|| CalcError::soil_not_found(s))
    }
}

impl std::fmt::Display for ReferenceSoil {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_code_and_names() {
        assert_eq!(
            ReferenceSoil::from_str_flexible("ms-md").unwrap(),
            ReferenceSoil::MediumSandMediumDense
        );
        assert_eq!(
            ReferenceSoil::from_str_flexible("  Clay   (stiff) ").unwrap(),
            ReferenceSoil::ClayStiff
        );
        assert_eq!(
            ReferenceSoil::from_str_flexible("Gravelly sand (dense) I_D=0.7").unwrap(),
            ReferenceSoil::GravellySandDense
        );
    }

    #[test]
    fn test_unknown_soil() {
        let err = ReferenceSoil::from_str_flexible("peat").unwrap_err();
        assert_eq!(err.error_code(), "SOIL_NOT_FOUND");
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = ReferenceSoil::ALL.iter().map(|s| s.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ReferenceSoil::ALL.len());
    }

    #[test]
    fn test_categories() {
        assert_eq!(ReferenceSoil::in_category(SoilCategory::Cohesionless).count(), 11);
        assert_eq!(ReferenceSoil::in_category(SoilCategory::Cohesive).count(), 10);
        assert_eq!(ReferenceSoil::SiltStiff.category(), SoilCategory::Cohesive);
    }

    #[test]
    fn test_all_normally_consolidated() {
        for soil in ReferenceSoil::ALL {
            let props = soil.properties();
            assert_eq!(props.ocr, 1.0, "{}", soil);
            assert!(props.unit_weight_kn_m3 > 10.0, "{}", soil);
        }
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&ReferenceSoil::SandyClaySemiHard).unwrap();
        assert_eq!(json, "\"SACL-SH\"");
        let parsed: ReferenceSoil = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ReferenceSoil::SandyClaySemiHard);
    }
}
