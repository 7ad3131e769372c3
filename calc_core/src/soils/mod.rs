//! # Soils Database
//!
//! Reference soil parameters for earth pressure calculations.
//!
//! ## Soil Groups
//!
//! - **Cohesionless**: sands and gravelly sands, graded by density index I_D
//! - **Cohesive**: silts and clays, graded by liquidity index I_L
//!
//! The values are indicative, taken from technical literature. Design
//! values must come from a geotechnical investigation of the site.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::soils::ReferenceSoil;
//!
//! let sand = ReferenceSoil::from_str_flexible("medium sand (medium dense)").unwrap();
//! let props = sand.properties();
//! assert_eq!(props.unit_weight_kn_m3, 18.5);
//! assert_eq!(props.friction_angle_deg, 34.0);
//! ```

pub mod catalog;

pub use catalog::ReferenceSoil;

use serde::{Deserialize, Serialize};

/// Broad soil behaviour group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilCategory {
    /// Sands and gravels
    Cohesionless,
    /// Silts and clays
    Cohesive,
}

impl SoilCategory {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SoilCategory::Cohesionless => "Cohesionless",
            SoilCategory::Cohesive => "Cohesive",
        }
    }
}

impl std::fmt::Display for SoilCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Parameters needed to place a soil in a layer stack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilProperties {
    /// Bulk unit weight γ (kN/m³)
    pub unit_weight_kn_m3: f64,
    /// Effective friction angle φ' (degrees)
    pub friction_angle_deg: f64,
    /// Over-consolidation ratio
    pub ocr: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(SoilCategory::Cohesive.to_string(), "Cohesive");
    }

    #[test]
    fn test_properties_serialization() {
        let props = ReferenceSoil::ClayStiff.properties();
        let json = serde_json::to_string(&props).unwrap();
        let roundtrip: SoilProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(props, roundtrip);
    }
}
