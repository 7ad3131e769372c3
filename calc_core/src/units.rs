//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Geotechnical calculations use a consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units
//!
//! Earth pressure work is done per metre run of wall:
//! - Length: metres (m)
//! - Unit weight: kilonewtons per cubic metre (kN/m³)
//! - Stress / pressure: kilopascals (kPa = kN/m²)
//! - Line force: kilonewtons per metre of wall (kN/m)
//! - Moment: kilonewton-metres per metre of wall (kNm/m)
//! - Angles: degrees at the API, radians for trigonometry
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{KiloPascals, KnPerCubicMeter, Meters};
//!
//! // 3 m of soil at 18 kN/m³ adds 54 kPa of overburden
//! let increment: KiloPascals = KnPerCubicMeter(18.0) * Meters(3.0);
//! assert_eq!(increment.0, 54.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

// ============================================================================
// Unit Weight and Pressure
// ============================================================================

/// Unit weight in kN/m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerCubicMeter(pub f64);

/// Stress or pressure in kPa
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloPascals(pub f64);

/// γ·h
impl Mul<Meters> for KnPerCubicMeter {
    type Output = KiloPascals;
    fn mul(self, rhs: Meters) -> Self::Output {
        KiloPascals(self.0 * rhs.0)
    }
}

// ============================================================================
// Force and Moment per Metre of Wall
// ============================================================================

/// Line force in kN per metre of wall
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerMeter(pub f64);

/// Moment in kNm per metre of wall
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnMPerMeter(pub f64);

impl Mul<Meters> for KiloPascals {
    type Output = KnPerMeter;
    fn mul(self, rhs: Meters) -> Self::Output {
        KnPerMeter(self.0 * rhs.0)
    }
}

impl Mul<Meters> for KnPerMeter {
    type Output = KnMPerMeter;
    fn mul(self, rhs: Meters) -> Self::Output {
        KnMPerMeter(self.0 * rhs.0)
    }
}

// ============================================================================
// Angles
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(KnPerCubicMeter);
impl_arithmetic!(KiloPascals);
impl_arithmetic!(KnPerMeter);
impl_arithmetic!(KnMPerMeter);
impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);
