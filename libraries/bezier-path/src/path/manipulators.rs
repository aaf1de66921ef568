use super::*;
use crate::BezierHandles;

use glam::DVec2;

/// Functionality for structural edits: appending, removing, hit-testing, and splitting.
impl BezierPath {
	/// Get whether the path is closed.
	pub fn closed(&self) -> bool {
		self.closed
	}

	/// Set whether the path is closed.
	pub fn set_closed(&mut self, new_closed: bool) {
		self.closed = new_closed;
	}

	/// Append a node to the end of the path. Always succeeds.
	pub fn add_node(&mut self, node: PathNode) {
		self.nodes.push(node);
	}

	/// Insert a node before `index`, shifting subsequent nodes up by one.
	/// `index` may equal the node count, which appends.
	pub fn insert_node(&mut self, index: usize, node: PathNode) -> Result<(), PathError> {
		if index > self.len() {
			return Err(PathError::IndexOutOfRange { index, len: self.len() });
		}
		self.nodes.insert(index, node);
		Ok(())
	}

	/// Remove and return the node at `index`, shifting subsequent nodes down by one.
	pub fn remove_node(&mut self, index: usize) -> Result<PathNode, PathError> {
		if index >= self.len() {
			return Err(PathError::IndexOutOfRange { index, len: self.len() });
		}
		Ok(self.nodes.remove(index))
	}

	/// Find the lowest-indexed segment whose curve passes within `tolerance` of `point`, scanning
	/// consecutive node pairs and the closing pair of a closed path. The distance test evaluates
	/// the true Bezier curve, not merely the chord between the anchors.
	pub fn find_segment(&self, point: DVec2, tolerance: f64) -> Option<usize> {
		self.hit_segment(point, tolerance).map(|(segment_index, _)| segment_index)
	}

	/// Locate the first segment within `tolerance` of `point` along with the parametric position of
	/// the projection of `point` onto that segment.
	fn hit_segment(&self, point: DVec2, tolerance: f64) -> Option<(usize, f64)> {
		for (segment_index, bezier) in self.iter().enumerate() {
			let t = bezier.project(point, None);
			if bezier.evaluate(t).distance(point) <= tolerance {
				return Some((segment_index, t));
			}
		}
		None
	}

	/// Split the segment within `tolerance` of `point` into two sub-curves that together trace the
	/// original curve, inserting a new node at the projection of `point`. Returns the new node's
	/// index, which is always the hit segment's index plus one. The path is left untouched when no
	/// segment qualifies.
	pub fn split_segment(&mut self, point: DVec2, tolerance: f64) -> Result<usize, PathError> {
		let (segment_index, t) = self.hit_segment(point, tolerance).ok_or(PathError::NotFound)?;

		// The segment index came from the hit test above, so the lookup cannot fail.
		let curve = self.get_segment(segment_index).unwrap();
		let [first, second] = curve.split(t);
		let end_index = (segment_index + 1) % self.len();

		// Rewrite the facing handles of the flanking nodes from the two sub-curves before inserting,
		// while the original indices are still valid.
		let start_anchor = self.nodes[segment_index].anchor;
		let end_anchor = self.nodes[end_index].anchor;
		self.nodes[segment_index].handle_out = first.handle_start().map(|position| position - start_anchor);
		self.nodes[end_index].handle_in = second.handle_end().map(|position| position - end_anchor);

		// Splitting a curved segment yields a smooth node; splitting a line yields a plain vertex.
		let colinear = !matches!(curve.handles, BezierHandles::Linear);
		let new_node = PathNode::with_handle_positions(first.end, first.handle_end(), second.handle_start(), colinear);
		self.nodes.insert(segment_index + 1, new_node);

		Ok(segment_index + 1)
	}
}
