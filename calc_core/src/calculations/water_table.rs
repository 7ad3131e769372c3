//! # Groundwater
//!
//! The water table is entered the way it is surveyed on site: as a height
//! `h_w` above the wall base. The solver works in depths below grade, so
//! [`WaterTableModel`] converts it once into the boundary depth
//! `z_w = H − h_w`.
//!
//! ```text
//!  z = 0   ─┬──────────── ground surface
//!           │
//!  z = z_w  ├ ─ ─ ▽ ─ ─ ─ water table     u = 0
//!           │        ↑
//!           │        h_w                   u = γw (z − z_w)
//!  z = H   ─┴────────┴─── wall base
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::hydrostatic_pressure;
use crate::errors::SolveError;

/// Groundwater input.
///
/// ## JSON Example
///
/// ```json
/// { "present": true, "height_above_base_m": 1.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WaterTable {
    /// Whether the water table is above the foundation level
    pub present: bool,

    /// Height of the water surface above the wall base (m); only
    /// meaningful when `present`
    #[serde(default)]
    pub height_above_base_m: f64,
}

impl WaterTable {
    /// No groundwater behind the wall
    pub fn none() -> Self {
        WaterTable {
            present: false,
            height_above_base_m: 0.0,
        }
    }

    /// Water surface at `height_above_base_m` above the base
    pub fn at_height(height_above_base_m: f64) -> Self {
        WaterTable {
            present: true,
            height_above_base_m,
        }
    }

    /// Depth of the water surface below grade for a wall of the given height
    pub fn depth_from_surface_m(&self, total_height_m: f64) -> f64 {
        total_height_m - self.height_above_base_m
    }
}

/// Pore pressure as a function of depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterTableModel {
    /// Depth of the water surface below grade; `None` when dry
    boundary_depth_m: Option<f64>,
}

impl WaterTableModel {
    /// Model without groundwater
    pub fn dry() -> Self {
        WaterTableModel { boundary_depth_m: None }
    }

    /// Model with the water surface at a given depth below grade.
    ///
    /// Any depth is accepted, including depths below the wall base.
    pub fn from_depth(depth_from_surface_m: f64) -> Self {
        WaterTableModel {
            boundary_depth_m: Some(depth_from_surface_m),
        }
    }

    /// Build the model for a wall, rejecting water tables outside the wall.
    ///
    /// # Errors
    ///
    /// `SolveError::InvalidWaterTable` when a present water table is not
    /// within `[0, total_height_m]` above the base.
    pub fn for_wall(water_table: &WaterTable, total_height_m: f64) -> Result<Self, SolveError> {
        if !water_table.present {
            return Ok(Self::dry());
        }
        let h_w = water_table.height_above_base_m;
        if !(0.0..=total_height_m).contains(&h_w) {
            return Err(SolveError::InvalidWaterTable {
                height_above_base_m: h_w,
                total_height_m,
            });
        }
        Ok(Self::from_depth(water_table.depth_from_surface_m(total_height_m)))
    }

    /// Depth of the dry/submerged boundary; +∞ without groundwater
    pub fn boundary_depth_m(&self) -> f64 {
        self.boundary_depth_m.unwrap_or(f64::INFINITY)
    }

    pub fn is_present(&self) -> bool {
        self.boundary_depth_m.is_some()
    }

    /// Hydrostatic pore pressure at depth `z_m` below grade (kPa).
    ///
    /// Zero at or above the water surface and everywhere when dry.
    pub fn pore_pressure(&self, z_m: f64) -> f64 {
        match self.boundary_depth_m {
            Some(z_w) if z_m > z_w => hydrostatic_pressure(z_m - z_w),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_dry_model_has_no_pressure() {
        let model = WaterTableModel::for_wall(&WaterTable::none(), 3.0).unwrap();
        assert!(!model.is_present());
        assert_eq!(model.boundary_depth_m(), f64::INFINITY);
        assert_eq!(model.pore_pressure(100.0), 0.0);
    }

    #[test]
    fn test_pore_pressure_below_table() {
        // 5 m wall, water 1 m above the base -> z_w = 4 m
        let model = WaterTableModel::for_wall(&WaterTable::at_height(1.0), 5.0).unwrap();
        assert!(approx_eq(model.boundary_depth_m(), 4.0));
        assert_eq!(model.pore_pressure(2.0), 0.0);
        assert_eq!(model.pore_pressure(4.0), 0.0);
        assert!(approx_eq(model.pore_pressure(5.0), 10.0));
    }

    #[test]
    fn test_water_at_surface() {
        let model = WaterTableModel::for_wall(&WaterTable::at_height(3.0), 3.0).unwrap();
        assert!(approx_eq(model.boundary_depth_m(), 0.0));
        assert!(approx_eq(model.pore_pressure(3.0), 30.0));
    }

    #[test]
    fn test_water_outside_wall_rejected() {
        let err = WaterTableModel::for_wall(&WaterTable::at_height(3.5), 3.0).unwrap_err();
        assert_eq!(
            err,
            SolveError::InvalidWaterTable {
                height_above_base_m: 3.5,
                total_height_m: 3.0
            }
        );
        assert!(WaterTableModel::for_wall(&WaterTable::at_height(-0.1), 3.0).is_err());
        assert!(WaterTableModel::for_wall(&WaterTable::at_height(f64::NAN), 3.0).is_err());

        // An absent water table is never checked
        let ignored = WaterTable {
            present: false,
            height_above_base_m: -7.0,
        };
        assert!(WaterTableModel::for_wall(&ignored, 3.0).is_ok());
    }

    #[test]
    fn test_serialization_defaults() {
        let wt: WaterTable = serde_json::from_str(r#"{ "present": false }"#).unwrap();
        assert_eq!(wt, WaterTable::none());
    }
}
