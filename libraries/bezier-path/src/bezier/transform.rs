use super::*;

/// Functionality that transforms Beziers, such as split and point-wise mapping.
impl Bezier {
	/// Returns the pair of Bezier curves that result from splitting the original curve at the parametric point `t` along the curve.
	/// The two halves are a de Casteljau subdivision: their union traces exactly the original curve.
	pub fn split(&self, t: f64) -> [Bezier; 2] {
		let split_point = self.evaluate(t);

		match self.handles {
			BezierHandles::Linear => [Bezier::from_linear_dvec2(self.start, split_point), Bezier::from_linear_dvec2(split_point, self.end)],
			BezierHandles::Quadratic { handle } => {
				let t_minus_one = t - 1.;
				[
					Bezier::from_quadratic_dvec2(self.start, t * handle - t_minus_one * self.start, split_point),
					Bezier::from_quadratic_dvec2(split_point, t * self.end - t_minus_one * handle, self.end),
				]
			}
			BezierHandles::Cubic { handle_start, handle_end } => {
				let t_minus_one = t - 1.;
				[
					Bezier::from_cubic_dvec2(
						self.start,
						t * handle_start - t_minus_one * self.start,
						(t * t) * handle_end - 2. * t * t_minus_one * handle_start + (t_minus_one * t_minus_one) * self.start,
						split_point,
					),
					Bezier::from_cubic_dvec2(
						split_point,
						(t * t) * self.end - 2. * t * t_minus_one * handle_end + (t_minus_one * t_minus_one) * handle_start,
						t * self.end - t_minus_one * handle_end,
						self.end,
					),
				]
			}
		}
	}

	/// Returns a Bezier curve that results from applying the transformation function to each point in the Bezier.
	#[must_use]
	pub fn apply_transformation(&self, transformation_function: impl Fn(DVec2) -> DVec2) -> Bezier {
		Bezier {
			start: transformation_function(self.start),
			end: transformation_function(self.end),
			handles: self.handles.apply_transformation(transformation_function),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::consts::MAX_ABSOLUTE_DIFFERENCE;

	#[test]
	fn split_linear_at_midpoint() {
		let bezier = Bezier::from_linear_dvec2(DVec2::new(0., 0.), DVec2::new(100., 100.));
		let [first, second] = bezier.split(0.5);
		assert_eq!(first.end, DVec2::new(50., 50.));
		assert_eq!(second.start, DVec2::new(50., 50.));
		assert_eq!(second.end, DVec2::new(100., 100.));
	}

	#[test]
	fn split_halves_trace_the_original_curve() {
		let bezier = Bezier::from_cubic_dvec2(DVec2::new(20., 30.), DVec2::new(75., 85.), DVec2::new(40., 30.), DVec2::new(60., 45.));
		let [first, second] = bezier.split(0.4);

		assert!(first.start.abs_diff_eq(bezier.start, MAX_ABSOLUTE_DIFFERENCE));
		assert!(second.end.abs_diff_eq(bezier.end, MAX_ABSOLUTE_DIFFERENCE));
		assert!(first.end.abs_diff_eq(second.start, MAX_ABSOLUTE_DIFFERENCE));

		// A point at `t` on either half must land on the original curve at the remapped parameter.
		for step in 0..=10 {
			let t = step as f64 / 10.;
			assert!(first.evaluate(t).abs_diff_eq(bezier.evaluate(t * 0.4), MAX_ABSOLUTE_DIFFERENCE));
			assert!(second.evaluate(t).abs_diff_eq(bezier.evaluate(0.4 + t * 0.6), MAX_ABSOLUTE_DIFFERENCE));
		}
	}

	#[test]
	fn split_quadratic_preserves_shape() {
		let bezier = Bezier::from_quadratic_dvec2(DVec2::new(0., 0.), DVec2::new(50., 100.), DVec2::new(100., 0.));
		let [first, second] = bezier.split(0.25);
		for step in 0..=10 {
			let t = step as f64 / 10.;
			assert!(first.evaluate(t).abs_diff_eq(bezier.evaluate(t * 0.25), MAX_ABSOLUTE_DIFFERENCE));
			assert!(second.evaluate(t).abs_diff_eq(bezier.evaluate(0.25 + t * 0.75), MAX_ABSOLUTE_DIFFERENCE));
		}
	}

	#[test]
	fn apply_transformation_maps_every_point() {
		let bezier = Bezier::from_cubic_dvec2(DVec2::new(0., 0.), DVec2::new(10., 60.), DVec2::new(90., 60.), DVec2::new(100., 0.));
		let translated = bezier.apply_transformation(|point| point + DVec2::new(5., -5.));
		assert_eq!(translated.start, DVec2::new(5., -5.));
		assert_eq!(translated.handle_start(), Some(DVec2::new(15., 55.)));
		assert_eq!(translated.handle_end(), Some(DVec2::new(95., 55.)));
		assert_eq!(translated.end, DVec2::new(105., -5.));
	}
}
