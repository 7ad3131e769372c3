//! # At-Rest Earth Pressure on a Basement Wall
//!
//! Computes the horizontal at-rest pressure diagram on a rigid wall retaining
//! a layered soil profile, with optional groundwater, per PN-EN 1997-1.
//!
//! ## Method
//!
//! The stack is walked top-down, carrying the effective vertical stress σ'v
//! from layer to layer (starting at the surcharge q). Each layer is
//! classified against the water table:
//!
//! - **Dry** - γ is used, no pore pressure
//! - **Submerged** - buoyant γ' = max(γ − γw, 0), hydrostatic u added
//! - **Straddling** - split at the water table into a dry and a submerged part
//!
//! At every segment end the total horizontal pressure is `e0 = K0·σ'v + u`.
//! The diagram is then integrated into a resultant thrust E0 and its
//! overturning moment M0 about the wall base.
//!
//! ## Assumptions
//!
//! - Rigid wall, no lateral strain (at-rest state)
//! - Horizontal ground surface, uniform surcharge
//! - Hydrostatic groundwater, γw = 10 kN/m³
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use calc_core::calculations::earth_pressure::solve;
//! use calc_core::calculations::layers::{Layer, LayerStack};
//! use calc_core::calculations::water_table::WaterTable;
//!
//! let stack = LayerStack::new(3.0, 5.0)
//!     .with_layer(Layer::bottom("Sand", 18.0, 30.0, 1.0));
//!
//! let result = solve(&stack, &WaterTable::none()).unwrap();
//!
//! assert_eq!(result.segments.len(), 1);
//! assert!((result.resultant_force_kn_per_m - 48.0).abs() < 1e-9);
//! println!("E0 = {:.2} kN/m, M0 = {:.2} kNm/m",
//!     result.resultant_force_kn_per_m,
//!     result.overturning_moment_knm_per_m);
//! ```

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::layers::{LayerStack, ResolvedLayer, ResolvedStack};
use super::resultant::integrate;
use super::water_table::{WaterTable, WaterTableModel};
use crate::equations::{buoyant_unit_weight, GAMMA_WATER_KN_M3};
use crate::errors::{CalcResult, SolveError, ValidationError};
use crate::units::{KiloPascals, KnMPerMeter, KnPerCubicMeter, KnPerMeter, Meters};

/// Depth tolerance (m) when comparing a layer boundary with the water table
const BOUNDARY_TOLERANCE_M: f64 = 1e-9;

/// One linear piece of the pressure diagram.
///
/// A layer yields one segment, or two when the water table cuts through it.
///
/// ## JSON Example
///
/// ```json
/// {
///   "source_layer_id": 2,
///   "name": "Clay (below water)",
///   "z_top_m": 4.0,
///   "z_bot_m": 5.0,
///   "unit_weight_kn_m3": 20.0,
///   "friction_angle_deg": 16.0,
///   "ocr": 1.0,
///   "k0": 0.7244,
///   "sigma_v_top_kpa": 81.0,
///   "sigma_v_bot_kpa": 91.0,
///   "u_top_kpa": 0.0,
///   "u_bot_kpa": 10.0,
///   "e0_top_kpa": 58.68,
///   "e0_bot_kpa": 75.92,
///   "is_submerged": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureSegment {
    /// 1-based index of the layer this segment belongs to
    pub source_layer_id: usize,

    /// Layer name, qualified with "(above water)" / "(below water)" when split
    pub name: String,

    /// Depth of the segment top below grade (m)
    pub z_top_m: f64,

    /// Depth of the segment bottom below grade (m)
    pub z_bot_m: f64,

    /// Bulk unit weight γ of the source layer (kN/m³)
    pub unit_weight_kn_m3: f64,

    /// Friction angle φ' of the source layer (degrees)
    pub friction_angle_deg: f64,

    /// OCR of the source layer
    pub ocr: f64,

    /// At-rest coefficient K0
    pub k0: f64,

    /// Effective vertical stress at the top σ'v (kPa)
    pub sigma_v_top_kpa: f64,

    /// Effective vertical stress at the bottom σ'v (kPa)
    pub sigma_v_bot_kpa: f64,

    /// Pore pressure at the top u (kPa)
    pub u_top_kpa: f64,

    /// Pore pressure at the bottom u (kPa)
    pub u_bot_kpa: f64,

    /// Total horizontal pressure at the top e0 = K0·σ'v + u (kPa)
    pub e0_top_kpa: f64,

    /// Total horizontal pressure at the bottom (kPa)
    pub e0_bot_kpa: f64,

    /// Whether the segment lies below the water table
    pub is_submerged: bool,
}

impl PressureSegment {
    /// Segment height (m)
    pub fn thickness_m(&self) -> f64 {
        self.z_bot_m - self.z_top_m
    }
}

/// Output of [`solve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Diagram segments, top-down
    pub segments: Vec<PressureSegment>,

    /// Wall height the diagram spans (m)
    pub total_height_m: f64,

    /// Resultant horizontal thrust E0 (kN per metre of wall)
    pub resultant_force_kn_per_m: f64,

    /// Overturning moment M0 about the wall base (kNm per metre of wall)
    pub overturning_moment_knm_per_m: f64,
}

impl SolveResult {
    /// Resultant thrust E0 as a typed line force
    pub fn resultant_force(&self) -> KnPerMeter {
        KnPerMeter(self.resultant_force_kn_per_m)
    }

    /// Overturning moment M0 about the base as a typed moment
    pub fn overturning_moment(&self) -> KnMPerMeter {
        KnMPerMeter(self.overturning_moment_knm_per_m)
    }

    /// Height of the resultant's line of action above the base (m)
    ///
    /// `None` when the wall carries no thrust.
    pub fn resultant_height_m(&self) -> Option<f64> {
        if self.resultant_force_kn_per_m > 0.0 {
            Some(self.overturning_moment_knm_per_m / self.resultant_force_kn_per_m)
        } else {
            None
        }
    }

    /// Largest ordinate of the diagram (kPa), for scaling plots
    pub fn max_pressure_kpa(&self) -> f64 {
        self.segments
            .iter()
            .flat_map(|s| [s.e0_top_kpa, s.e0_bot_kpa])
            .fold(0.0, f64::max)
    }

    /// Closed outline of the diagram as `(e0_kpa, z_m)` points.
    ///
    /// Starts at the wall top with zero pressure, visits the top and bottom
    /// of every segment, and ends at the wall base with zero pressure.
    pub fn pressure_outline(&self) -> Vec<(f64, f64)> {
        let mut points = Vec::with_capacity(2 * self.segments.len() + 2);
        points.push((0.0, 0.0));
        for s in &self.segments {
            points.push((s.e0_top_kpa, s.z_top_m));
            points.push((s.e0_bot_kpa, s.z_bot_m));
        }
        points.push((0.0, self.total_height_m));
        points
    }

    /// Segments below the water table, top-down
    pub fn submerged_segments(&self) -> impl Iterator<Item = &PressureSegment> {
        self.segments.iter().filter(|s| s.is_submerged)
    }
}

/// Where a layer sits relative to the water table
#[derive(Debug, Clone, Copy, PartialEq)]
enum Exposure {
    Dry,
    Submerged,
    Straddling { boundary_m: f64 },
}

fn classify(layer: &ResolvedLayer, water: &WaterTableModel) -> Exposure {
    let z_w = water.boundary_depth_m();
    if layer.z_bot_m <= z_w + BOUNDARY_TOLERANCE_M {
        Exposure::Dry
    } else if layer.z_top_m >= z_w - BOUNDARY_TOLERANCE_M {
        Exposure::Submerged
    } else {
        Exposure::Straddling { boundary_m: z_w }
    }
}

/// Segments produced by one layer
#[derive(Debug, Clone, PartialEq)]
enum LayerSplit {
    /// The layer lies entirely on one side of the water table
    NotSplit(PressureSegment),
    /// The water table cuts the layer in two
    SplitAtWaterTable {
        above: PressureSegment,
        below: PressureSegment,
    },
}

impl LayerSplit {
    /// The segment whose bottom closes the layer
    fn last(&self) -> &PressureSegment {
        match self {
            LayerSplit::NotSplit(segment) => segment,
            LayerSplit::SplitAtWaterTable { below, .. } => below,
        }
    }

    fn push_into(self, segments: &mut Vec<PressureSegment>) {
        match self {
            LayerSplit::NotSplit(segment) => segments.push(segment),
            LayerSplit::SplitAtWaterTable { above, below } => {
                segments.push(above);
                segments.push(below);
            }
        }
    }
}

/// Running state carried down the stack
#[derive(Debug, Clone, Copy)]
struct ColumnState {
    depth_m: Meters,
    sigma_v: KiloPascals,
}

impl ColumnState {
    fn after(segment: &PressureSegment) -> Self {
        ColumnState {
            depth_m: Meters(segment.z_bot_m),
            sigma_v: KiloPascals(segment.sigma_v_bot_kpa),
        }
    }
}

/// Build one segment between two depths, starting from `sigma_v_top`.
fn build_segment(
    layer: &ResolvedLayer,
    name: String,
    z_top_m: f64,
    z_bot_m: f64,
    sigma_v_top: KiloPascals,
    submerged: bool,
    water: &WaterTableModel,
) -> PressureSegment {
    let k0 = layer.k0();
    let gamma = if submerged {
        KnPerCubicMeter(buoyant_unit_weight(layer.unit_weight_kn_m3))
    } else {
        KnPerCubicMeter(layer.unit_weight_kn_m3)
    };
    let sigma_v_bot = sigma_v_top + gamma * Meters(z_bot_m - z_top_m);

    let (u_top_kpa, u_bot_kpa) = if submerged {
        (water.pore_pressure(z_top_m), water.pore_pressure(z_bot_m))
    } else {
        (0.0, 0.0)
    };

    trace!(
        "{}: z {:.3}..{:.3} m, γ = {:.2}, σ'v {:.3} -> {:.3} kPa",
        name,
        z_top_m,
        z_bot_m,
        gamma.value(),
        sigma_v_top.value(),
        sigma_v_bot.value()
    );

    PressureSegment {
        source_layer_id: layer.id,
        name,
        z_top_m,
        z_bot_m,
        unit_weight_kn_m3: layer.unit_weight_kn_m3,
        friction_angle_deg: layer.friction_angle_deg,
        ocr: layer.ocr,
        k0,
        sigma_v_top_kpa: sigma_v_top.value(),
        sigma_v_bot_kpa: sigma_v_bot.value(),
        u_top_kpa,
        u_bot_kpa,
        e0_top_kpa: k0 * sigma_v_top.value() + u_top_kpa,
        e0_bot_kpa: k0 * sigma_v_bot.value() + u_bot_kpa,
        is_submerged: submerged,
    }
}

/// Turn one layer into its segment(s), entering with `state`.
fn split_layer(layer: &ResolvedLayer, state: ColumnState, water: &WaterTableModel) -> LayerSplit {
    let z_top_m = state.depth_m.value();
    let z_bot_m = layer.z_bot_m;
    let exposure = classify(layer, water);
    debug!("layer {} '{}' is {:?}", layer.id, layer.name, exposure);

    if exposure != Exposure::Dry && layer.unit_weight_kn_m3 <= GAMMA_WATER_KN_M3 {
        warn!(
            "layer {} '{}': γ = {} kN/m³ is not heavier than water, buoyant weight taken as zero",
            layer.id, layer.name, layer.unit_weight_kn_m3
        );
    }

    match exposure {
        Exposure::Dry => LayerSplit::NotSplit(build_segment(
            layer,
            layer.name.clone(),
            z_top_m,
            z_bot_m,
            state.sigma_v,
            false,
            water,
        )),
        Exposure::Submerged => LayerSplit::NotSplit(build_segment(
            layer,
            layer.name.clone(),
            z_top_m,
            z_bot_m,
            state.sigma_v,
            true,
            water,
        )),
        Exposure::Straddling { boundary_m } => {
            let above = build_segment(
                layer,
                format!("{} (above water)", layer.name),
                z_top_m,
                boundary_m,
                state.sigma_v,
                false,
                water,
            );
            let below = build_segment(
                layer,
                format!("{} (below water)", layer.name),
                boundary_m,
                z_bot_m,
                KiloPascals(above.sigma_v_bot_kpa),
                true,
                water,
            );
            LayerSplit::SplitAtWaterTable { above, below }
        }
    }
}

/// Walk a resolved stack top-down and produce the pressure segments.
///
/// The effective vertical stress starts at the surcharge and each
/// segment's exit stress is the next segment's entry stress.
pub fn pressure_segments(stack: &ResolvedStack, water: &WaterTableModel) -> Vec<PressureSegment> {
    let start = ColumnState {
        depth_m: Meters(0.0),
        sigma_v: KiloPascals(stack.surcharge_kpa()),
    };

    let (segments, _) = stack.layers().iter().fold(
        (Vec::with_capacity(stack.layers().len() + 1), start),
        |(mut segments, state), layer| {
            let split = split_layer(layer, state, water);
            let next = ColumnState::after(split.last());
            split.push_into(&mut segments);
            (segments, next)
        },
    );
    segments
}

/// Check a layer stack before solving.
pub fn validate(stack: &LayerStack) -> Result<(), ValidationError> {
    stack.validate()
}

/// Solve the at-rest pressure diagram and its resultant.
///
/// # Arguments
///
/// * `stack` - Soil layers, surcharge and wall height
/// * `water_table` - Groundwater position
///
/// # Returns
///
/// * `Ok(SolveResult)` - Segments top-down, resultant force and moment about the base
/// * `Err(SolveError)` - Invalid stack or a water table outside the wall
pub fn solve(stack: &LayerStack, water_table: &WaterTable) -> Result<SolveResult, SolveError> {
    let resolved = stack.resolve()?;
    let water = WaterTableModel::for_wall(water_table, resolved.total_height_m())?;
    Ok(solve_resolved(&resolved, &water))
}

/// Solve an already validated stack against any water table model.
pub fn solve_resolved(stack: &ResolvedStack, water: &WaterTableModel) -> SolveResult {
    let segments = pressure_segments(stack, water);
    let resultant = integrate(&segments, stack.total_height_m());

    debug!(
        "{} segment(s): E0 = {:.3} kN/m, M0 = {:.3} kNm/m",
        segments.len(),
        resultant.force.value(),
        resultant.moment.value()
    );

    SolveResult {
        segments,
        total_height_m: stack.total_height_m(),
        resultant_force_kn_per_m: resultant.force.value(),
        overturning_moment_knm_per_m: resultant.moment.value(),
    }
}

/// Serializable earth pressure request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Basement wall W-1",
///   "stack": {
///     "total_height_m": 5.0,
///     "surcharge_kpa": 5.0,
///     "layers": [
///       { "name": "Fill", "thickness_m": 2.0, "unit_weight_kn_m3": 18.0, "friction_angle_deg": 30.0 },
///       { "name": "Clay", "unit_weight_kn_m3": 20.0, "friction_angle_deg": 16.0 }
///     ]
///   },
///   "water_table": { "present": true, "height_above_base_m": 1.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthPressureInput {
    /// User label (e.g., "W-1", "North basement wall")
    pub label: String,

    /// Soil profile
    pub stack: LayerStack,

    /// Groundwater; absent when omitted
    #[serde(default)]
    pub water_table: WaterTable,
}

impl EarthPressureInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate(&self.stack)?;
        WaterTableModel::for_wall(&self.water_table, self.stack.total_height_m)?;
        Ok(())
    }
}

/// Calculate the at-rest earth pressure for a request.
pub fn calculate(input: &EarthPressureInput) -> CalcResult<SolveResult> {
    Ok(solve(&input.stack, &input.water_table)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::layers::Layer;
    use crate::soils::ReferenceSoil;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn sand_3m() -> LayerStack {
        LayerStack::new(3.0, 5.0).with_layer(Layer::bottom("Sand", 18.0, 30.0, 1.0))
    }

    fn two_layer_5m() -> LayerStack {
        LayerStack::new(5.0, 5.0)
            .with_layer(Layer::new("Fill", 2.0, 18.0, 30.0, 1.0))
            .with_layer(Layer::bottom("Clay", 20.0, 16.0, 1.0))
    }

    fn assert_monotonic(result: &SolveResult) {
        for pair in result.segments.windows(2) {
            assert!(
                approx_eq(pair[0].sigma_v_bot_kpa, pair[1].sigma_v_top_kpa),
                "stress jump between '{}' and '{}'",
                pair[0].name,
                pair[1].name
            );
            assert!(approx_eq(pair[0].z_bot_m, pair[1].z_top_m));
        }
        for s in &result.segments {
            assert!(s.sigma_v_bot_kpa >= s.sigma_v_top_kpa, "'{}' decreases", s.name);
            assert!(s.z_top_m < s.z_bot_m, "'{}' is empty", s.name);
            assert!(s.z_top_m >= 0.0 && s.z_bot_m <= result.total_height_m);
        }
    }

    #[test]
    fn test_single_dry_layer() {
        let result = solve(&sand_3m(), &WaterTable::none()).unwrap();
        assert_eq!(result.segments.len(), 1);

        let s = &result.segments[0];
        assert!(approx_eq(s.k0, 0.5), "K0 = {}", s.k0);
        assert!(approx_eq(s.sigma_v_top_kpa, 5.0));
        assert!(approx_eq(s.sigma_v_bot_kpa, 59.0));
        assert!(approx_eq(s.e0_top_kpa, 2.5));
        assert!(approx_eq(s.e0_bot_kpa, 29.5));
        assert!(!s.is_submerged);

        // E0 = 0.5 * (2.5 + 29.5) * 3 = 48
        assert!(approx_eq(result.resultant_force_kn_per_m, 48.0));
        // ȳ = 1 * (5 + 29.5) / 32 = 1.078125 -> M0 = 51.75
        assert!(approx_eq(result.overturning_moment_knm_per_m, 51.75));
    }

    #[test]
    fn test_water_table_at_surface() {
        let result = solve(&sand_3m(), &WaterTable::at_height(3.0)).unwrap();
        assert_eq!(result.segments.len(), 1);

        let s = &result.segments[0];
        assert!(s.is_submerged);
        assert_eq!(s.name, "Sand");
        assert!(approx_eq(s.sigma_v_bot_kpa, 29.0));
        assert!(approx_eq(s.u_top_kpa, 0.0));
        assert!(approx_eq(s.u_bot_kpa, 30.0));
        assert!(approx_eq(s.e0_top_kpa, 2.5));
        assert!(approx_eq(s.e0_bot_kpa, 44.5));
    }

    #[test]
    fn test_straddling_layer_is_split() {
        let result = solve(&two_layer_5m(), &WaterTable::at_height(1.0)).unwrap();
        assert_eq!(result.segments.len(), 3);

        let names: Vec<_> = result.segments.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Fill", "Clay (above water)", "Clay (below water)"]);

        let ids: Vec<_> = result.segments.iter().map(|s| s.source_layer_id).collect();
        assert_eq!(ids, [1, 2, 2]);

        let above = &result.segments[1];
        let below = &result.segments[2];
        assert!(approx_eq(above.z_bot_m, 5.0 - 1.0));
        assert!(!above.is_submerged);
        assert!(below.is_submerged);
        assert!(approx_eq(below.u_top_kpa, 0.0));
        assert!(approx_eq(below.u_bot_kpa, 10.0));

        // σ'v: 5 -> 41 (fill) -> 81 (clay dry, 2 m) -> 91 (clay buoyant, 1 m)
        assert!(approx_eq(above.sigma_v_top_kpa, 41.0));
        assert!(approx_eq(above.sigma_v_bot_kpa, 81.0));
        assert!(approx_eq(below.sigma_v_bot_kpa, 91.0));
        assert_monotonic(&result);
    }

    #[test]
    fn test_stress_continuity() {
        let stack = LayerStack::new(8.0, 10.0)
            .with_layer(Layer::from_soil(ReferenceSoil::MediumSandLoose, Some(1.2)))
            .with_layer(Layer::new("Light fill", 1.8, 8.0, 28.0, 1.0))
            .with_layer(Layer::new("Silt", 2.5, 19.0, 18.0, 2.0))
            .with_layer(Layer::from_soil(ReferenceSoil::ClaySemiHard, None));

        for h_w in [0.0, 1.0, 3.5, 5.0, 6.8, 8.0] {
            let result = solve(&stack, &WaterTable::at_height(h_w)).unwrap();
            assert_monotonic(&result);
            let last = result.segments.last().unwrap();
            assert_eq!(last.z_bot_m, 8.0);
        }
        assert_monotonic(&solve(&stack, &WaterTable::none()).unwrap());
    }

    #[test]
    fn test_light_fill_has_no_buoyant_weight() {
        let stack = LayerStack::new(2.0, 0.0).with_layer(Layer::bottom("Foam fill", 6.0, 30.0, 1.0));
        let result = solve(&stack, &WaterTable::at_height(2.0)).unwrap();
        let s = &result.segments[0];
        assert!(approx_eq(s.sigma_v_top_kpa, 0.0));
        assert!(approx_eq(s.sigma_v_bot_kpa, 0.0));
        assert!(approx_eq(s.e0_bot_kpa, 20.0));
    }

    #[test]
    fn test_split_invariance() {
        // One homogeneous layer cut by the water table 3 m down...
        let single = LayerStack::new(5.0, 5.0).with_layer(Layer::bottom("Sand", 18.0, 30.0, 1.0));
        // ...and the same soil as two layers meeting at the water table
        let pre_split = LayerStack::new(5.0, 5.0)
            .with_layer(Layer::new("Sand", 3.0, 18.0, 30.0, 1.0))
            .with_layer(Layer::bottom("Sand", 18.0, 30.0, 1.0));

        let water = WaterTable::at_height(2.0);
        let a = solve(&single, &water).unwrap();
        let b = solve(&pre_split, &water).unwrap();

        assert_eq!(a.segments.len(), 2);
        assert_eq!(b.segments.len(), 2);
        assert!(approx_eq(a.resultant_force_kn_per_m, b.resultant_force_kn_per_m));
        assert!(approx_eq(a.overturning_moment_knm_per_m, b.overturning_moment_knm_per_m));
    }

    #[test]
    fn test_no_water_matches_water_below_base() {
        let resolved = two_layer_5m().resolve().unwrap();
        let dry = solve_resolved(&resolved, &WaterTableModel::dry());
        let deep = solve_resolved(&resolved, &WaterTableModel::from_depth(5.0 + 1.0));
        assert_eq!(dry, deep);
    }

    #[test]
    fn test_water_at_base_is_dry() {
        let dry = solve(&two_layer_5m(), &WaterTable::none()).unwrap();
        let at_base = solve(&two_layer_5m(), &WaterTable::at_height(0.0)).unwrap();
        assert_eq!(dry.segments, at_base.segments);
    }

    #[test]
    fn test_water_on_layer_boundary_does_not_split() {
        // z_w = 2 m coincides with the fill/clay interface
        let result = solve(&two_layer_5m(), &WaterTable::at_height(3.0)).unwrap();
        assert_eq!(result.segments.len(), 2);
        assert!(!result.segments[0].is_submerged);
        assert!(result.segments[1].is_submerged);
        assert!(approx_eq(result.segments[1].u_top_kpa, 0.0));
        assert!(approx_eq(result.segments[1].u_bot_kpa, 30.0));
    }

    #[test]
    fn test_pore_pressure_continues_through_submerged_layers() {
        // z_w = 1 m cuts A; B and C lie wholly below the water table
        let stack = LayerStack::new(6.0, 0.0)
            .with_layer(Layer::new("A", 2.0, 20.0, 30.0, 1.0))
            .with_layer(Layer::new("B", 2.0, 20.0, 30.0, 1.0))
            .with_layer(Layer::bottom("C", 20.0, 30.0, 4.0));
        let result = solve(&stack, &WaterTable::at_height(5.0)).unwrap();

        let names: Vec<_> = result.segments.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A (above water)", "A (below water)", "B", "C"]);
        for pair in result.segments.windows(2) {
            assert!(
                approx_eq(pair[0].u_bot_kpa, pair[1].u_top_kpa),
                "pore pressure jump between '{}' and '{}'",
                pair[0].name,
                pair[1].name
            );
        }

        let b = &result.segments[2];
        assert!(b.is_submerged);
        assert!(approx_eq(b.sigma_v_top_kpa, 30.0));
        assert!(approx_eq(b.sigma_v_bot_kpa, 50.0));
        assert!(approx_eq(b.u_top_kpa, 10.0));
        assert!(approx_eq(b.u_bot_kpa, 30.0));
        assert!(approx_eq(b.e0_top_kpa, 25.0));
        assert!(approx_eq(b.e0_bot_kpa, 55.0));

        // OCR = 4 doubles K0 to 1.0
        let c = &result.segments[3];
        assert!(approx_eq(c.k0, 1.0), "K0 = {}", c.k0);
        assert!(approx_eq(c.u_top_kpa, 30.0));
        assert!(approx_eq(c.u_bot_kpa, 50.0));
        assert!(approx_eq(c.e0_top_kpa, 80.0));
        assert!(approx_eq(c.e0_bot_kpa, 120.0));

        assert!(approx_eq(result.resultant_force_kn_per_m, 302.5));
        assert!(approx_eq(result.overturning_moment_knm_per_m, 3125.0 / 6.0));
        assert!(approx_eq(
            result.overturning_moment().value(),
            result.overturning_moment_knm_per_m
        ));
    }

    #[test]
    fn test_degenerate_last_layer_rejected() {
        let stack = LayerStack::new(3.0, 0.0)
            .with_layer(Layer::new("A", 3.0, 18.0, 30.0, 1.0))
            .with_layer(Layer::bottom("B", 18.0, 30.0, 1.0));
        let err = solve(&stack, &WaterTable::none()).unwrap_err();
        assert!(matches!(
            err,
            SolveError::Validation(ValidationError::DegenerateLastLayer { .. })
        ));
        assert!(validate(&stack).is_err());
    }

    #[test]
    fn test_invalid_water_table() {
        let err = solve(&sand_3m(), &WaterTable::at_height(4.0)).unwrap_err();
        assert!(matches!(err, SolveError::InvalidWaterTable { .. }));
    }

    #[test]
    fn test_result_helpers() {
        let result = solve(&two_layer_5m(), &WaterTable::at_height(1.0)).unwrap();

        let max = result.max_pressure_kpa();
        assert!(approx_eq(max, result.segments[2].e0_bot_kpa));

        let outline = result.pressure_outline();
        assert_eq!(outline.len(), 2 * 3 + 2);
        assert_eq!(outline[0], (0.0, 0.0));
        assert_eq!(outline[outline.len() - 1], (0.0, 5.0));

        assert_eq!(result.submerged_segments().count(), 1);

        let arm = result.resultant_height_m().unwrap();
        assert!(arm > 0.0 && arm < 5.0 / 2.0, "lever arm {}", arm);
        assert!(approx_eq(result.resultant_force().value(), result.resultant_force_kn_per_m));
    }

    #[test]
    fn test_calculate_from_json() {
        let json = r#"{
            "label": "W-1",
            "stack": {
                "total_height_m": 5.0,
                "surcharge_kpa": 5.0,
                "layers": [
                    { "name": "Fill", "thickness_m": 2.0, "unit_weight_kn_m3": 18.0, "friction_angle_deg": 30.0 },
                    { "name": "Clay", "unit_weight_kn_m3": 20.0, "friction_angle_deg": 16.0 }
                ]
            },
            "water_table": { "present": true, "height_above_base_m": 1.0 }
        }"#;
        let input: EarthPressureInput = serde_json::from_str(json).unwrap();
        assert!(input.validate().is_ok());

        let result = calculate(&input).unwrap();
        assert_eq!(result.segments.len(), 3);

        let out = serde_json::to_string(&result).unwrap();
        let roundtrip: SolveResult = serde_json::from_str(&out).unwrap();
        assert_eq!(result, roundtrip);
    }

    #[test]
    fn test_calculate_reports_calc_error() {
        let input = EarthPressureInput {
            label: "Bad".to_string(),
            stack: LayerStack::new(3.0, 0.0),
            water_table: WaterTable::none(),
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
