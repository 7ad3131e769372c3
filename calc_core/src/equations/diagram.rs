//! # Pressure Diagram Formulas
//!
//! A layered earth pressure diagram is piecewise linear: each segment is a
//! trapezoid with pressure `a` at its top and `b` at its bottom.
//!
//! ```text
//!   top   ├── a ──┐
//!         │        ╲
//!       h │         ╲      ← centroid at ȳ above the bottom edge
//!         │          ╲
//!  bottom ├──── b ────┘
//! ```

/// Resultant of a trapezoidal pressure block per unit wall length
///
/// # Formula
/// E = ½ (a + b) h
///
/// # Example
/// ```rust
/// use calc_core::equations::diagram::trapezoid_area;
///
/// let e = trapezoid_area(2.5, 29.5, 3.0);
/// assert!((e - 48.0).abs() < 1e-9);
/// ```
#[inline]
pub fn trapezoid_area(a: f64, b: f64, h: f64) -> f64 {
    0.5 * (a + b) * h
}

/// Height of a trapezoid's centroid above its bottom edge
///
/// # Formula
/// ȳ = h/3 × (2a + b) / (a + b)
///
/// where `a` is the pressure at the top edge and `b` at the bottom edge.
/// A triangle growing from zero at the top (a = 0) gives ȳ = h/3.
///
/// Returns 0 when a + b ≤ 0: a block without pressure has no resultant,
/// so its lever arm is irrelevant and must not divide by zero.
///
/// # Example
/// ```rust
/// use calc_core::equations::diagram::trapezoid_centroid_from_bottom;
///
/// // Triangle: centroid at h/3 above the base
/// let y = trapezoid_centroid_from_bottom(0.0, 30.0, 3.0);
/// assert!((y - 1.0).abs() < 1e-9);
///
/// // Rectangle: centroid at mid-height
/// let y = trapezoid_centroid_from_bottom(10.0, 10.0, 3.0);
/// assert!((y - 1.5).abs() < 1e-9);
/// ```
#[inline]
pub fn trapezoid_centroid_from_bottom(a: f64, b: f64, h: f64) -> f64 {
    let sum = a + b;
    if sum > 0.0 {
        h / 3.0 * (2.0 * a + b) / sum
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_inverted_triangle() {
        // Pressure only at the top: centroid at 2h/3 above the bottom
        let y = trapezoid_centroid_from_bottom(30.0, 0.0, 3.0);
        assert!(approx_eq(y, 2.0), "ȳ = {} (expected 2.0)", y);
    }

    #[test]
    fn test_zero_pressure_block() {
        assert!(approx_eq(trapezoid_area(0.0, 0.0, 2.0), 0.0));
        assert!(approx_eq(trapezoid_centroid_from_bottom(0.0, 0.0, 2.0), 0.0));
    }

    #[test]
    fn test_split_block_moment_matches_whole() {
        // A linear diagram 0 → 40 over 4 m, split at 1 m from the top.
        // Moment about the base is the same either way.
        let whole = trapezoid_area(0.0, 40.0, 4.0) * trapezoid_centroid_from_bottom(0.0, 40.0, 4.0);

        let upper = trapezoid_area(0.0, 10.0, 1.0) * (3.0 + trapezoid_centroid_from_bottom(0.0, 10.0, 1.0));
        let lower = trapezoid_area(10.0, 40.0, 3.0) * trapezoid_centroid_from_bottom(10.0, 40.0, 3.0);

        assert!(approx_eq(whole, upper + lower), "{} vs {}", whole, upper + lower);
    }
}
