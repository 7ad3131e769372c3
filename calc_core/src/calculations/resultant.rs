//! # Resultant Thrust and Overturning Moment
//!
//! Integrates a piecewise-linear pressure diagram into its resultant per
//! metre of wall and the moment of that resultant about the wall base.
//!
//! Each segment is a trapezoid. Its lever arm is the distance from the wall
//! base up to the trapezoid's centroid:
//!
//! ```text
//!  arm = (H − z_bot) + ȳ,    ȳ = h/3 × (2·e_top + e_bot) / (e_top + e_bot)
//! ```
//!
//! The moment is always taken about the base; callers wanting another
//! reference point must re-base it themselves.

use serde::{Deserialize, Serialize};

use super::earth_pressure::PressureSegment;
use crate::equations::{trapezoid_area, trapezoid_centroid_from_bottom};
use crate::units::{KnMPerMeter, KnPerMeter, Meters};

/// Resultant of a pressure diagram
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Resultant {
    /// Horizontal thrust E0 (kN/m)
    pub force: KnPerMeter,
    /// Overturning moment about the wall base M0 (kNm/m)
    pub moment: KnMPerMeter,
}

/// Contribution of a single segment to the resultant
pub fn segment_resultant(segment: &PressureSegment, total_height_m: f64) -> Resultant {
    let h = segment.thickness_m();
    let force = KnPerMeter(trapezoid_area(segment.e0_top_kpa, segment.e0_bot_kpa, h));
    let centroid = trapezoid_centroid_from_bottom(segment.e0_top_kpa, segment.e0_bot_kpa, h);
    let arm = Meters(total_height_m - segment.z_bot_m) + Meters(centroid);
    Resultant {
        force,
        moment: force * arm,
    }
}

/// Sum the resultant over all segments of a diagram.
pub fn integrate(segments: &[PressureSegment], total_height_m: f64) -> Resultant {
    segments
        .iter()
        .map(|s| segment_resultant(s, total_height_m))
        .fold(Resultant::default(), |acc, r| Resultant {
            force: acc.force + r.force,
            moment: acc.moment + r.moment,
        })
}
