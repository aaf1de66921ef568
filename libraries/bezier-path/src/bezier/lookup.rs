use super::*;
use crate::consts::DEFAULT_LUT_STEP_SIZE;
use crate::utils::get_closest_point_in_lut;

/// Struct to represent optional parameters that can be passed to the `project` function.
#[derive(Copy, Clone)]
pub struct ProjectionOptions {
	/// Size of the lookup table for the initial passthrough. The default value is `20`.
	pub lut_size: usize,
	/// Difference used between floating point numbers to be considered as equal. The default value is `0.0001`.
	pub convergence_epsilon: f64,
	/// Controls the number of iterations needed to consider that minimum distance to have converged. The default value is `3`.
	pub convergence_limit: usize,
	/// Controls the maximum total number of iterations to be used. The default value is `10`.
	pub iteration_limit: usize,
}

impl Default for ProjectionOptions {
	fn default() -> Self {
		Self {
			lut_size: DEFAULT_LUT_STEP_SIZE,
			convergence_epsilon: 1e-4,
			convergence_limit: 3,
			iteration_limit: 10,
		}
	}
}

/// Functionality for looking up points along a `Bezier`.
impl Bezier {
	/// Calculate the point on the curve at the parametric position `t`, which must lie in the range `[0, 1]`.
	pub fn evaluate(&self, t: f64) -> DVec2 {
		let one_minus_t = 1. - t;
		match self.handles {
			BezierHandles::Linear => self.start.lerp(self.end, t),
			BezierHandles::Quadratic { handle } => one_minus_t * one_minus_t * self.start + 2. * one_minus_t * t * handle + t * t * self.end,
			BezierHandles::Cubic { handle_start, handle_end } => {
				let one_minus_t_squared = one_minus_t * one_minus_t;
				let t_squared = t * t;
				one_minus_t_squared * one_minus_t * self.start + 3. * one_minus_t_squared * t * handle_start + 3. * one_minus_t * t_squared * handle_end + t_squared * t * self.end
			}
		}
	}

	/// Return a selection of equidistant (in parametric space) points on the curve.
	/// If no value is provided for `steps`, the default value is 20.
	pub fn compute_lookup_table(&self, steps: Option<usize>) -> Vec<DVec2> {
		let steps = steps.unwrap_or(DEFAULT_LUT_STEP_SIZE);
		(0..=steps).map(|step| self.evaluate(step as f64 / steps as f64)).collect()
	}

	/// Returns the parametric `t`-value of the closest point on the curve to the provided point.
	/// Runs a coarse pass over a lookup table, then repeatedly rescans a shrinking window around the
	/// best candidate until the distance converges or the iteration budget runs out.
	pub fn project(&self, point: DVec2, options: Option<ProjectionOptions>) -> f64 {
		let ProjectionOptions {
			lut_size,
			convergence_epsilon,
			convergence_limit,
			iteration_limit,
		} = options.unwrap_or_default();

		let lut = self.compute_lookup_table(Some(lut_size));
		let (lut_index, distance_squared) = get_closest_point_in_lut(&lut, point);
		let mut minimum_distance = distance_squared.sqrt();

		let mut final_t = lut_index as f64 / lut_size as f64;
		let mut left_t = lut_index.saturating_sub(1) as f64 / lut_size as f64;
		let mut right_t = (lut_index + 1).min(lut_size) as f64 / lut_size as f64;

		let mut iteration_count = 0;
		let mut convergence_count = 0;
		while iteration_count < iteration_limit && convergence_count < convergence_limit {
			let mut best_t = final_t;
			let mut improved = false;
			for step in 0..=lut_size {
				let t = left_t + (right_t - left_t) * (step as f64 / lut_size as f64);
				let distance = self.evaluate(t).distance(point);
				if distance < minimum_distance {
					improved = minimum_distance - distance > convergence_epsilon;
					minimum_distance = distance;
					best_t = t;
				}
			}
			convergence_count = if improved { 0 } else { convergence_count + 1 };

			// Narrow the scan window around the best candidate found so far.
			let window = (right_t - left_t) / 4.;
			left_t = (best_t - window).max(0.);
			right_t = (best_t + window).min(1.);
			final_t = best_t;
			iteration_count += 1;
		}

		final_t
	}
}
