//! # Soil Stress Formulas
//!
//! Formulas for vertical and horizontal stresses in a laterally confined
//! soil mass.
//!
//! ## Notation
//!
//! - `φ'` = Effective angle of internal friction (degrees at the API)
//! - `OCR` = Over-consolidation ratio (1.0 = normally consolidated)
//! - `K0` = At-rest lateral earth pressure coefficient
//! - `γ` = Bulk unit weight of soil (kN/m³)
//! - `γ'` = Buoyant (submerged) unit weight (kN/m³)
//! - `γw` = Unit weight of water (kN/m³)
//! - `u` = Pore water pressure (kPa)

use crate::units::{Degrees, KiloPascals, KnPerCubicMeter, Meters, Radians};

/// Unit weight of water used for pore pressure and buoyancy (kN/m³).
///
/// Rounded to 10 kN/m³ as is customary for earth pressure on walls.
pub const GAMMA_WATER_KN_M3: f64 = 10.0;

/// Calculate the at-rest earth pressure coefficient
///
/// # Formula
/// K0 = (1 − sin φ') × √OCR
///
/// With OCR = 1 this is Jaky's coefficient for normally consolidated soil.
///
/// No range check is applied: friction angles ≥ 90° or OCR < 1 are
/// evaluated as given.
///
/// # Arguments
/// * `phi_deg` - Effective friction angle φ' in degrees
/// * `ocr` - Over-consolidation ratio
///
/// # Example
/// ```rust
/// use calc_core::equations::soil::at_rest_coefficient;
///
/// // Medium dense sand, φ' = 30°, normally consolidated
/// let k0 = at_rest_coefficient(30.0, 1.0);
/// assert!((k0 - 0.5).abs() < 1e-9);
/// ```
///
/// # Reference
/// - Jaky (1944); Mayne & Kulhawy (1982)
#[inline]
pub fn at_rest_coefficient(phi_deg: f64, ocr: f64) -> f64 {
    let phi: Radians = Degrees(phi_deg).into();
    (1.0 - phi.0.sin()) * ocr.sqrt()
}

/// Calculate the buoyant unit weight of a submerged soil
///
/// # Formula
/// γ' = max(γ − γw, 0)
///
/// The floor at zero keeps very light fills from producing a negative
/// stress increment below the water table.
///
/// # Example
/// ```rust
/// use calc_core::equations::soil::buoyant_unit_weight;
///
/// assert_eq!(buoyant_unit_weight(18.0), 8.0);
/// assert_eq!(buoyant_unit_weight(9.0), 0.0);
/// ```
#[inline]
pub fn buoyant_unit_weight(gamma_kn_m3: f64) -> f64 {
    (KnPerCubicMeter(gamma_kn_m3) - KnPerCubicMeter(GAMMA_WATER_KN_M3))
        .value()
        .max(0.0)
}

/// Calculate hydrostatic pore pressure at a head below the water surface
///
/// # Formula
/// u = γw × hw
///
/// # Arguments
/// * `head_m` - Depth below the water surface (m); non-positive heads give zero
///
/// # Example
/// ```rust
/// use calc_core::equations::soil::hydrostatic_pressure;
///
/// assert_eq!(hydrostatic_pressure(3.0), 30.0);
/// assert_eq!(hydrostatic_pressure(-1.0), 0.0);
/// ```
#[inline]
pub fn hydrostatic_pressure(head_m: f64) -> f64 {
    if head_m <= 0.0 {
        return 0.0;
    }
    let u: KiloPascals = KnPerCubicMeter(GAMMA_WATER_KN_M3) * Meters(head_m);
    u.value()
}
