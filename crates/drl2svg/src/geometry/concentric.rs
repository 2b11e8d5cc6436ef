//! Concentric toolpath generation for clearing a hole with a narrower bit.
//!
//! A hole whose cut radius exceeds zero is cleared by a family of circles
//! sharing the hole center. Consecutive circles are `0.45 × bit` apart, so
//! each pass overlaps the previous one by more than half the bit width and no
//! annulus of material is left standing.

/// Fraction of the bit diameter between consecutive concentric passes.
pub const STEP_FRACTION: f64 = 0.45;

/// Upper bound on the passes generated for one hole.
pub const MAX_PASSES: usize = 10_000;

/// Radial distance between consecutive passes for a bit of `bit_diameter`.
pub fn step_size(bit_diameter: f64) -> f64 {
    STEP_FRACTION * bit_diameter
}

/// Number of passes needed to clear `cut_radius`, as a float so absurd or
/// non-finite radii compare against [`MAX_PASSES`] without overflowing.
pub fn pass_count(cut_radius: f64, bit_diameter: f64) -> f64 {
    (cut_radius / step_size(bit_diameter)).ceil()
}

/// Computes the concentric pass radii for a hole of the given cut radius.
///
/// Radii start at `cut_radius` and step inward by [`step_size`] while they
/// stay strictly positive. The result is ordered innermost first, outermost
/// last. A `cut_radius <= 0` yields no passes. At most [`MAX_PASSES`] radii
/// are produced, and generation stops once subtracting a step no longer
/// changes the radius.
///
/// `bit_diameter` must be strictly positive; see
/// [`crate::config::ConvertOptions::validate`].
pub fn concentric_radii(cut_radius: f64, bit_diameter: f64) -> Vec<f64> {
    let step = step_size(bit_diameter);
    if !step.is_finite() || step <= 0.0 || !cut_radius.is_finite() {
        return Vec::new();
    }

    let mut radii: Vec<f64> = std::iter::successors(Some(cut_radius), |r| {
        let next = r - step;
        (next < *r).then_some(next)
    })
    .take_while(|r| *r > 0.0)
    .take(MAX_PASSES)
    .collect();
    radii.reverse();
    radii
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn zero_radius_has_no_passes() {
        assert!(concentric_radii(0.0, 0.7).is_empty());
    }

    #[test]
    fn negative_radius_has_no_passes() {
        assert!(concentric_radii(-0.2, 0.7).is_empty());
    }

    #[test]
    fn radius_below_step_is_a_single_pass() {
        let radii = concentric_radii(0.05, 0.7);
        assert_eq!(radii.len(), 1);
        assert!(radii.first().is_some_and(|r| (r - 0.05).abs() < EPSILON));
    }

    #[test]
    fn passes_are_innermost_first() {
        // 0.92 mm cut radius, 0.7 mm bit: step 0.315 → 0.92, 0.605, 0.29
        let radii = concentric_radii(0.92, 0.7);
        let expected = [0.29, 0.605, 0.92];
        assert_eq!(radii.len(), expected.len());
        for (got, want) in radii.iter().zip(expected) {
            assert!((got - want).abs() < EPSILON, "got {got}, want {want}");
        }
    }

    #[test]
    fn consecutive_passes_differ_by_one_step() {
        let bit = 0.8;
        let radii = concentric_radii(5.0, bit);
        assert!(radii.len() > 2);
        for pair in radii.windows(2) {
            if let [inner, outer] = pair {
                assert!(outer > inner, "radii must increase");
                assert!((outer - inner - step_size(bit)).abs() < EPSILON);
            }
        }
        assert!(radii.last().is_some_and(|r| (r - 5.0).abs() < EPSILON));
        assert!(radii.first().is_some_and(|r| *r > 0.0 && *r <= step_size(bit)));
    }

    #[test]
    fn exact_multiple_of_step_excludes_zero() {
        let step = step_size(1.0);
        let radii = concentric_radii(2.0 * step, 1.0);
        assert_eq!(radii.len(), 2, "zero radius must not be emitted");
        assert!(radii.iter().all(|r| *r > 0.0));
    }

    #[test]
    fn non_positive_bit_yields_no_passes() {
        assert!(concentric_radii(1.0, 0.0).is_empty());
        assert!(concentric_radii(1.0, f64::NAN).is_empty());
    }

    #[test]
    fn radius_too_large_to_step_stops_after_one_pass() {
        // 1e20 - 0.315 rounds back to 1e20
        let radii = concentric_radii(1e20, 0.7);
        assert_eq!(radii.len(), 1);
    }

    #[test]
    fn pass_count_is_capped() {
        let radii = concentric_radii(1e6, 0.7);
        assert_eq!(radii.len(), MAX_PASSES);
        assert!(radii.last().is_some_and(|r| (r - 1e6).abs() < EPSILON));
    }

    #[test]
    fn pass_count_matches_generated_radii() {
        assert!((pass_count(0.92, 0.7) - 3.0).abs() < EPSILON);
        assert!(pass_count(f64::INFINITY, 0.7).is_infinite());
    }
}
