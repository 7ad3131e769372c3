//! # Geotechnical Equations
//!
//! This module contains the closed-form formulas used by the earth pressure
//! calculation. Having equations in one place enables:
//! - Easy verification against code references (PN-EN 1997-1)
//! - Documentation of assumptions and sign conventions
//! - Consistent implementation across calculation types
//!
//! ## Modules
//!
//! - [`soil`] - At-rest coefficient, buoyant unit weight, hydrostatic pressure
//! - [`diagram`] - Trapezoidal pressure diagram area and centroid
//!
//! ## Sign Conventions
//!
//! - **Depth z**: Positive downward from the ground surface (z = 0 at grade)
//! - **Pressures**: Positive in compression, acting horizontally on the wall
//! - **Moment**: Taken about the wall base, positive overturning
//!
//! ## References
//!
//! - PN-EN 1997-1 (Eurocode 7): Geotechnical design
//! - Jaky, J. (1944): The coefficient of earth pressure at rest
//! - Mayne & Kulhawy (1982): K0-OCR relationships in soil

pub mod diagram;
pub mod soil;

// Re-export commonly used items
pub use diagram::{trapezoid_area, trapezoid_centroid_from_bottom};
pub use soil::{at_rest_coefficient, buoyant_unit_weight, hydrostatic_pressure, GAMMA_WATER_KN_M3};
