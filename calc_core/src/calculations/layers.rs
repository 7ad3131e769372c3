//! # Layer Stack
//!
//! The soil profile retained by a wall, described top-down as an ordered
//! list of layers plus a uniform surcharge on the ground surface.
//!
//! Only the layers above the last one carry an explicit thickness. The last
//! layer always reaches down to the wall base, so its thickness is the
//! remainder `total_height − Σ(thicknesses above)`.
//!
//! ```text
//!        q  ↓ ↓ ↓ ↓ ↓ ↓
//!  z = 0 ─┬────────────────
//!         │  Layer 1   h1
//!         ├────────────────
//!         │  Layer 2   h2
//!         ├────────────────
//!         │  Layer n   H − (h1 + h2)
//!  z = H ─┴────────────────  wall base
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::layers::{Layer, LayerStack};
//!
//! let stack = LayerStack::new(5.0, 5.0)
//!     .with_layer(Layer::new("Fill", 2.0, 18.0, 30.0, 1.0))
//!     .with_layer(Layer::bottom("Clay", 20.0, 16.0, 1.0));
//!
//! let resolved = stack.resolve().unwrap();
//! assert_eq!(resolved.layers()[1].thickness_m(), 3.0);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::equations::at_rest_coefficient;
use crate::errors::ValidationError;
use crate::soils::ReferenceSoil;

/// Tolerance (m) when comparing the layer sum against the wall height
pub const THICKNESS_TOLERANCE_M: f64 = 0.001;

fn default_ocr() -> f64 {
    1.0
}

/// One soil layer as entered by the user.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Medium sand",
///   "thickness_m": 1.5,
///   "unit_weight_kn_m3": 18.5,
///   "friction_angle_deg": 34.0,
///   "ocr": 1.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Layer name shown on the pressure diagram
    pub name: String,

    /// Thickness in metres. Required for every layer except the last,
    /// where it is ignored and derived from the wall height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness_m: Option<f64>,

    /// Bulk unit weight γ (kN/m³)
    pub unit_weight_kn_m3: f64,

    /// Effective friction angle φ' (degrees)
    pub friction_angle_deg: f64,

    /// Over-consolidation ratio (1.0 = normally consolidated)
    #[serde(default = "default_ocr")]
    pub ocr: f64,
}

impl Layer {
    /// Create a layer with an explicit thickness
    pub fn new(
        name: impl Into<String>,
        thickness_m: f64,
        unit_weight_kn_m3: f64,
        friction_angle_deg: f64,
        ocr: f64,
    ) -> Self {
        Layer {
            name: name.into(),
            thickness_m: Some(thickness_m),
            unit_weight_kn_m3,
            friction_angle_deg,
            ocr,
        }
    }

    /// Create the bottom layer, whose thickness is derived
    pub fn bottom(name: impl Into<String>, unit_weight_kn_m3: f64, friction_angle_deg: f64, ocr: f64) -> Self {
        Layer {
            name: name.into(),
            thickness_m: None,
            unit_weight_kn_m3,
            friction_angle_deg,
            ocr,
        }
    }

    /// Create a layer from a catalog soil, named after the soil
    pub fn from_soil(soil: ReferenceSoil, thickness_m: Option<f64>) -> Self {
        let props = soil.properties();
        Layer {
            name: soil.short_name().to_string(),
            thickness_m,
            unit_weight_kn_m3: props.unit_weight_kn_m3,
            friction_angle_deg: props.friction_angle_deg,
            ocr: props.ocr,
        }
    }

    /// At-rest coefficient K0 for this layer
    pub fn k0(&self) -> f64 {
        at_rest_coefficient(self.friction_angle_deg, self.ocr)
    }
}

/// Ordered soil profile behind the wall.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_height_m": 5.0,
///   "surcharge_kpa": 5.0,
///   "layers": [
///     { "name": "Fill", "thickness_m": 2.0, "unit_weight_kn_m3": 18.0, "friction_angle_deg": 30.0 },
///     { "name": "Clay", "unit_weight_kn_m3": 20.0, "friction_angle_deg": 16.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerStack {
    /// Layers from the ground surface down
    pub layers: Vec<Layer>,

    /// Uniform surcharge on the ground surface q (kPa)
    #[serde(default)]
    pub surcharge_kpa: f64,

    /// Wall height from ground surface to the underside of the foundation (m)
    pub total_height_m: f64,
}

impl LayerStack {
    /// Create an empty stack
    pub fn new(total_height_m: f64, surcharge_kpa: f64) -> Self {
        LayerStack {
            layers: Vec::new(),
            surcharge_kpa,
            total_height_m,
        }
    }

    /// Builder: append a layer below the existing ones
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Sum of the explicit thicknesses above the last layer (m)
    pub fn explicit_thickness_sum_m(&self) -> f64 {
        let above = self.layers.len().saturating_sub(1);
        self.layers[..above]
            .iter()
            .filter_map(|l| l.thickness_m)
            .sum()
    }

    /// Thickness the last layer would receive (m); may be negative
    pub fn remaining_thickness_m(&self) -> f64 {
        self.total_height_m - self.explicit_thickness_sum_m()
    }

    /// Check the stack without keeping the resolved geometry.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.resolve().map(|_| ())
    }

    /// Validate the stack and complete the last layer's thickness.
    ///
    /// # Errors
    ///
    /// * `InvalidStack` - non-positive wall height or negative surcharge
    /// * `NoLayers` - empty stack
    /// * `MissingThickness` / `InvalidLayer` - bad per-layer values
    /// * `HeightExceeded` - explicit thicknesses sum past the wall height
    /// * `DegenerateLastLayer` - nothing left for the last layer
    pub fn resolve(&self) -> Result<ResolvedStack, ValidationError> {
        if !self.total_height_m.is_finite() || self.total_height_m <= 0.0 {
            return Err(ValidationError::invalid_stack(
                "total_height_m",
                self.total_height_m,
                "Wall height must be positive",
            ));
        }
        if !self.surcharge_kpa.is_finite() || self.surcharge_kpa < 0.0 {
            return Err(ValidationError::invalid_stack(
                "surcharge_kpa",
                self.surcharge_kpa,
                "Surcharge cannot be negative",
            ));
        }
        if self.layers.is_empty() {
            return Err(ValidationError::NoLayers);
        }

        let last_index = self.layers.len() - 1;
        for (index, layer) in self.layers.iter().enumerate() {
            validate_layer(index + 1, layer, index == last_index)?;
        }

        let sum_m = self.explicit_thickness_sum_m();
        let remainder = self.total_height_m - sum_m;
        if remainder < -THICKNESS_TOLERANCE_M {
            return Err(ValidationError::HeightExceeded {
                sum_m,
                total_height_m: self.total_height_m,
            });
        }
        if remainder.abs() <= THICKNESS_TOLERANCE_M {
            return Err(ValidationError::DegenerateLastLayer {
                sum_m,
                total_height_m: self.total_height_m,
            });
        }

        let mut z_top_m = 0.0;
        let mut layers = Vec::with_capacity(self.layers.len());
        for (index, layer) in self.layers.iter().enumerate() {
            // The last layer ends exactly at the base, free of summation drift
            let z_bot_m = match layer.thickness_m {
                Some(h) if index < last_index => z_top_m + h,
                _ => self.total_height_m,
            };
            layers.push(ResolvedLayer {
                id: index + 1,
                name: layer.name.clone(),
                z_top_m,
                z_bot_m,
                unit_weight_kn_m3: layer.unit_weight_kn_m3,
                friction_angle_deg: layer.friction_angle_deg,
                ocr: layer.ocr,
            });
            z_top_m = z_bot_m;
        }

        debug!(
            "resolved {} layer(s) over {:.3} m, last layer {:.3} m thick",
            layers.len(),
            self.total_height_m,
            remainder
        );

        Ok(ResolvedStack {
            layers,
            surcharge_kpa: self.surcharge_kpa,
            total_height_m: self.total_height_m,
        })
    }
}

fn validate_layer(id: usize, layer: &Layer, is_last: bool) -> Result<(), ValidationError> {
    if !is_last {
        match layer.thickness_m {
            None => return Err(ValidationError::MissingThickness { layer: id }),
            Some(h) if !h.is_finite() || h <= 0.0 => {
                return Err(ValidationError::invalid_layer(
                    id,
                    "thickness_m",
                    h,
                    "Thickness must be positive",
                ));
            }
            Some(_) => {}
        }
    }
    if !layer.unit_weight_kn_m3.is_finite() || layer.unit_weight_kn_m3 <= 0.0 {
        return Err(ValidationError::invalid_layer(
            id,
            "unit_weight_kn_m3",
            layer.unit_weight_kn_m3,
            "Unit weight must be positive",
        ));
    }
    if !layer.friction_angle_deg.is_finite() {
        return Err(ValidationError::invalid_layer(
            id,
            "friction_angle_deg",
            layer.friction_angle_deg,
            "Friction angle must be a number",
        ));
    }
    if !layer.ocr.is_finite() || layer.ocr < 0.0 {
        return Err(ValidationError::invalid_layer(
            id,
            "ocr",
            layer.ocr,
            "OCR must be a non-negative number",
        ));
    }
    Ok(())
}

/// A layer placed at its depth range, produced by [`LayerStack::resolve`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLayer {
    /// 1-based position in the stack
    pub id: usize,
    pub name: String,
    /// Depth of the layer top below grade (m)
    pub z_top_m: f64,
    /// Depth of the layer bottom below grade (m)
    pub z_bot_m: f64,
    pub unit_weight_kn_m3: f64,
    pub friction_angle_deg: f64,
    pub ocr: f64,
}

impl ResolvedLayer {
    /// Layer height (m)
    pub fn thickness_m(&self) -> f64 {
        self.z_bot_m - self.z_top_m
    }

    /// At-rest coefficient K0
    pub fn k0(&self) -> f64 {
        at_rest_coefficient(self.friction_angle_deg, self.ocr)
    }
}

/// A validated stack with every layer's depth range known.
///
/// Only [`LayerStack::resolve`] builds one, so holding a `ResolvedStack`
/// proves the geometry is consistent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStack {
    layers: Vec<ResolvedLayer>,
    surcharge_kpa: f64,
    total_height_m: f64,
}

impl ResolvedStack {
    pub fn layers(&self) -> &[ResolvedLayer] {
        &self.layers
    }

    pub fn surcharge_kpa(&self) -> f64 {
        self.surcharge_kpa
    }

    pub fn total_height_m(&self) -> f64 {
        self.total_height_m
    }
}
