use super::*;
use crate::consts::MAX_ABSOLUTE_DIFFERENCE;

use glam::{DAffine2, DVec2};

/// Functionality relating to core `BezierPath` operations, such as constructors, iteration, and derived geometry.
impl BezierPath {
	/// Create a new `BezierPath` using a list of [PathNode]s.
	/// A `BezierPath` with less than 2 [PathNode]s may not be closed.
	pub fn new(nodes: Vec<PathNode>, closed: bool) -> Self {
		assert!(!closed || nodes.len() > 1, "A closed BezierPath must contain more than 1 PathNode.");
		Self { nodes, closed }
	}

	/// Construct a `BezierPath` from an iterator of anchor positions, creating plain vertices.
	pub fn from_anchors(anchor_positions: impl IntoIterator<Item = DVec2>, closed: bool) -> Self {
		Self::new(anchor_positions.into_iter().map(PathNode::new).collect(), closed)
	}

	/// Returns true if the `BezierPath` contains no [PathNode].
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Returns the number of [PathNode]s contained within the `BezierPath`.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Returns the number of segments contained within the `BezierPath`.
	pub fn len_segments(&self) -> usize {
		let mut number_of_curves = self.len();
		if !self.closed && number_of_curves > 0 {
			number_of_curves -= 1
		}
		number_of_curves
	}

	/// Returns a copy of the bezier segment at the given segment index, if this segment exists.
	pub fn get_segment(&self, segment_index: usize) -> Option<Bezier> {
		if segment_index >= self.len_segments() {
			return None;
		}
		Some(self[segment_index].to_bezier(&self[(segment_index + 1) % self.len()]))
	}

	/// Returns an iterator of the [Bezier]s along the `BezierPath`.
	pub fn iter(&self) -> PathIter<'_> {
		PathIter { path: self, index: 0 }
	}

	/// Returns a slice of the [PathNode]s in the `BezierPath`.
	pub fn nodes(&self) -> &[PathNode] {
		&self.nodes
	}

	/// Returns a mutable reference to the [PathNode]s in the `BezierPath`.
	pub fn nodes_mut(&mut self) -> &mut Vec<PathNode> {
		&mut self.nodes
	}

	/// Returns a vector of all the anchor positions of this `BezierPath`.
	pub fn anchors(&self) -> Vec<DVec2> {
		self.nodes.iter().map(|node| node.anchor).collect()
	}

	/// Returns whether the path is equivalent to a single point.
	pub fn is_point(&self) -> bool {
		if self.is_empty() {
			return false;
		}
		let point = self.nodes[0].anchor;
		self.nodes.iter().all(|node| node.anchor.abs_diff_eq(point, MAX_ABSOLUTE_DIFFERENCE))
	}

	/// The first node's anchor, if any.
	pub fn start_point(&self) -> Option<DVec2> {
		self.nodes.first().map(|node| node.anchor)
	}

	/// The last node's anchor, if any.
	pub fn end_point(&self) -> Option<DVec2> {
		self.nodes.last().map(|node| node.anchor)
	}

	/// Move the first node's anchor. Does nothing on an empty path.
	pub fn set_start_point(&mut self, position: DVec2) {
		if let Some(node) = self.nodes.first_mut() {
			node.anchor = position;
		}
	}

	/// Move the last node's anchor. Does nothing on an empty path.
	pub fn set_end_point(&mut self, position: DVec2) {
		if let Some(node) = self.nodes.last_mut() {
			node.anchor = position;
		}
	}

	/// Return the min and max corners that represent the curve-true bounding box of the path, or `None` for an empty path.
	pub fn bounding_box(&self) -> Option<[DVec2; 2]> {
		if self.len() == 1 {
			let anchor = self.nodes[0].anchor;
			return Some([anchor, anchor]);
		}
		self.iter().map(|bezier| bezier.bounding_box()).reduce(|bbox1, bbox2| [bbox1[0].min(bbox2[0]), bbox1[1].max(bbox2[1])])
	}

	/// The midpoint of the bounding box. An empty path reports the origin rather than failing,
	/// so downstream angle and distance math can fall back gracefully.
	pub fn center(&self) -> DVec2 {
		self.bounding_box().map(|[min_corner, max_corner]| (min_corner + max_corner) / 2.).unwrap_or(DVec2::ZERO)
	}

	/// The anchor farthest from the path's center, or `None` for an empty path.
	pub fn outermost_point(&self) -> Option<DVec2> {
		let center = self.center();
		self.nodes
			.iter()
			.map(|node| node.anchor)
			.max_by(|a, b| a.distance_squared(center).total_cmp(&b.distance_squared(center)))
	}

	/// Apply an affine transform to every node: anchors as points, handle offsets as vectors.
	pub fn apply_transformation(&mut self, transform: DAffine2) {
		for node in &mut self.nodes {
			node.anchor = transform.transform_point2(node.anchor);
			node.handle_in = node.handle_in.map(|offset| transform.transform_vector2(offset));
			node.handle_out = node.handle_out.map(|offset| transform.transform_vector2(offset));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn set_up_square_path() -> BezierPath {
		BezierPath::from_anchors([DVec2::new(0., 0.), DVec2::new(100., 0.), DVec2::new(100., 100.), DVec2::new(0., 100.)], true)
	}

	#[test]
	fn segment_counts_for_open_and_closed_paths() {
		let mut path = set_up_square_path();
		assert_eq!(path.len(), 4);
		assert_eq!(path.len_segments(), 4);

		path.closed = false;
		assert_eq!(path.len_segments(), 3);
	}

	#[test]
	fn iter_wraps_around_closed_paths() {
		let path = set_up_square_path();
		let last = path.iter().last().unwrap();
		assert_eq!(last.start, DVec2::new(0., 100.));
		assert_eq!(last.end, DVec2::new(0., 0.));
	}

	#[test]
	fn center_of_square_is_its_midpoint() {
		let path = set_up_square_path();
		assert_eq!(path.center(), DVec2::new(50., 50.));
	}

	#[test]
	fn center_of_single_node_is_that_node() {
		let path = BezierPath::from_anchors([DVec2::new(13., -7.)], false);
		assert_eq!(path.center(), DVec2::new(13., -7.));
		assert_eq!(path.outermost_point(), Some(DVec2::new(13., -7.)));
	}

	#[test]
	fn center_of_empty_path_falls_back_to_origin() {
		let path = BezierPath::new(Vec::new(), false);
		assert_eq!(path.center(), DVec2::ZERO);
		assert_eq!(path.outermost_point(), None);
	}

	#[test]
	fn bounding_box_includes_curve_extrema() {
		// An open arch: the curve rises above both anchors.
		let nodes = vec![
			PathNode::with_handles(DVec2::new(0., 0.), None, Some(DVec2::new(50., 100.))),
			PathNode::new(DVec2::new(100., 0.)),
		];
		let path = BezierPath::new(nodes, false);
		let [min_corner, max_corner] = path.bounding_box().unwrap();
		assert_eq!(min_corner, DVec2::new(0., 0.));
		assert_eq!(max_corner, DVec2::new(100., 50.));
	}

	#[test]
	fn outermost_point_of_rectangle() {
		let path = BezierPath::from_anchors([DVec2::new(0., 0.), DVec2::new(200., 0.), DVec2::new(200., 100.), DVec2::new(0., 100.)], true);
		let outermost = path.outermost_point().unwrap();
		// Every corner is equidistant from the center; any of them is a valid answer.
		assert_eq!(outermost.distance(path.center()), DVec2::new(100., 50.).length());
	}

	#[test]
	fn transform_moves_anchors_and_rotates_offsets() {
		let nodes = vec![PathNode::with_handles(DVec2::new(10., 0.), Some(DVec2::new(-5., 0.)), Some(DVec2::new(5., 0.)))];
		let mut path = BezierPath::new(nodes, false);
		path.apply_transformation(DAffine2::from_translation(DVec2::new(0., 20.)));

		// Translation moves the anchor but leaves relative handle offsets untouched.
		assert_eq!(path[0].anchor, DVec2::new(10., 20.));
		assert_eq!(path[0].handle_in, Some(DVec2::new(-5., 0.)));
		assert_eq!(path[0].handle_out, Some(DVec2::new(5., 0.)));
	}

	#[test]
	fn start_and_end_points_are_editable() {
		let mut path = BezierPath::from_anchors([DVec2::new(0., 0.), DVec2::new(100., 100.)], false);
		path.set_start_point(DVec2::new(-10., 0.));
		path.set_end_point(DVec2::new(110., 100.));
		assert_eq!(path.start_point(), Some(DVec2::new(-10., 0.)));
		assert_eq!(path.end_point(), Some(DVec2::new(110., 100.)));
	}
}
