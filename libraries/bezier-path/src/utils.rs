use crate::consts::{MAX_ABSOLUTE_DIFFERENCE, STRICT_MAX_ABSOLUTE_DIFFERENCE};

use glam::{BVec2, DVec2};

/// Compare two `f64` numbers with a provided max absolute value difference.
pub fn f64_compare(a: f64, b: f64, max_abs_diff: f64) -> bool {
	(a - b).abs() < max_abs_diff
}

/// Compare the two values in a `DVec2` independently with a provided max absolute value difference.
pub fn dvec2_compare(a: DVec2, b: DVec2, max_abs_diff: f64) -> BVec2 {
	BVec2::new((a.x - b.x).abs() < max_abs_diff, (a.y - b.y).abs() < max_abs_diff)
}

/// Return the index and the squared distance of the closest point in the LUT compared to the provided point.
pub(crate) fn get_closest_point_in_lut(lut: &[DVec2], point: DVec2) -> (usize, f64) {
	lut.iter()
		.enumerate()
		.map(|(i, p)| (i, point.distance_squared(*p)))
		.min_by(|x, y| (x.1).total_cmp(&(y.1)))
		.unwrap_or((0, 0.))
}

/// Find the roots of the linear equation `ax + b`.
pub fn solve_linear(a: f64, b: f64) -> [Option<f64>; 2] {
	// There exist roots when `a` is not 0
	if a.abs() > MAX_ABSOLUTE_DIFFERENCE {
		[Some(-b / a), None]
	} else {
		[None; 2]
	}
}

/// Find the roots of the quadratic equation `ax^2 + bx + c`.
/// Precompute the `discriminant` (`b^2 - 4ac`) and `two_times_a` arguments prior to calling this function for efficiency purposes.
pub fn solve_quadratic(discriminant: f64, two_times_a: f64, b: f64, c: f64) -> [Option<f64>; 2] {
	if two_times_a.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		return solve_linear(b, c);
	}
	if discriminant.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		return [Some(-b / two_times_a), None];
	}
	if discriminant < 0. {
		return [None; 2];
	}
	let root_discriminant = discriminant.sqrt();
	[Some((-b + root_discriminant) / two_times_a), Some((-b - root_discriminant) / two_times_a)]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn collect_roots(mut roots: [Option<f64>; 2]) -> Vec<f64> {
		roots.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
		roots.into_iter().flatten().collect()
	}

	#[test]
	fn test_solve_linear() {
		// Line that is on the x-axis
		assert!(collect_roots(solve_linear(0., 0.)).is_empty());
		// Line that is parallel to but not on the x-axis
		assert!(collect_roots(solve_linear(0., 1.)).is_empty());
		// Line with a non-zero slope
		assert!(collect_roots(solve_linear(2., -8.)) == vec![4.]);
	}

	#[test]
	fn test_solve_quadratic() {
		// Parabola with two real roots
		let roots = collect_roots(solve_quadratic(9., 2., 1., -2.));
		assert!(roots == vec![-2., 1.]);
		// Parabola with a double root
		let roots = collect_roots(solve_quadratic(0., 2., -2., 1.));
		assert!(roots == vec![1.]);
		// Parabola with no real roots
		assert!(collect_roots(solve_quadratic(-4., 2., 0., 1.)).is_empty());
		// Degenerate case that is a line
		assert!(collect_roots(solve_quadratic(1., 0., 2., -8.)) == vec![4.]);
	}

	#[test]
	fn test_f64_compare() {
		assert!(f64_compare(1., 1. + 1e-6, 1e-3));
		assert!(!f64_compare(1., 1.1, 1e-3));
	}
}
