use super::Bezier;

use glam::DVec2;
use std::fmt::{Debug, Formatter, Result};

/// A single anchor along a [`BezierPath`](super::BezierPath) with up to two optional control handles.
///
/// Handle offsets are stored relative to the anchor, so moving the anchor carries its tangents along.
/// A node with both handles inactive behaves as a straight-line vertex.
#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
	pub anchor: DVec2,
	/// Offset of the incoming tangent handle, relative to the anchor. `None` when inactive.
	pub handle_in: Option<DVec2>,
	/// Offset of the outgoing tangent handle, relative to the anchor. `None` when inactive.
	pub handle_out: Option<DVec2>,
	/// Whether the two handles are kept mirrored through the anchor (a smooth node).
	pub colinear: bool,
}

impl Debug for PathNode {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		match (self.handle_in, self.handle_out) {
			(Some(handle_in), Some(handle_out)) => write!(f, "anchor: {}, in: {}, out: {}", self.anchor, handle_in, handle_out),
			(Some(handle_in), None) => write!(f, "anchor: {}, in: {}, out: n/a", self.anchor, handle_in),
			(None, Some(handle_out)) => write!(f, "anchor: {}, in: n/a, out: {}", self.anchor, handle_out),
			(None, None) => write!(f, "anchor: {}, in: n/a, out: n/a", self.anchor),
		}
	}
}

impl PathNode {
	/// Create a plain vertex with no active control handles.
	pub fn new(anchor: DVec2) -> Self {
		Self {
			anchor,
			handle_in: None,
			handle_out: None,
			colinear: false,
		}
	}

	/// Create a node from handle offsets relative to the anchor.
	pub fn with_handles(anchor: DVec2, handle_in: Option<DVec2>, handle_out: Option<DVec2>) -> Self {
		Self {
			anchor,
			handle_in,
			handle_out,
			colinear: false,
		}
	}

	/// Create a node from absolute handle positions, converting them to anchor-relative offsets.
	pub fn with_handle_positions(anchor: DVec2, in_position: Option<DVec2>, out_position: Option<DVec2>, colinear: bool) -> Self {
		Self {
			anchor,
			handle_in: in_position.map(|position| position - anchor),
			handle_out: out_position.map(|position| position - anchor),
			colinear,
		}
	}

	/// The absolute position of the incoming handle, if active.
	pub fn in_position(&self) -> Option<DVec2> {
		self.handle_in.map(|offset| self.anchor + offset)
	}

	/// The absolute position of the outgoing handle, if active.
	pub fn out_position(&self) -> Option<DVec2> {
		self.handle_out.map(|offset| self.anchor + offset)
	}

	/// Build the [Bezier] segment running from this node to `end_node`.
	/// Both facing handles active produces a cubic, one produces a quadratic, and none produces a line.
	pub fn to_bezier(&self, end_node: &PathNode) -> Bezier {
		let start = self.anchor;
		let end = end_node.anchor;

		match (self.out_position(), end_node.in_position()) {
			(Some(handle1), Some(handle2)) => Bezier::from_cubic_dvec2(start, handle1, handle2, end),
			(Some(handle), None) | (None, Some(handle)) => Bezier::from_quadratic_dvec2(start, handle, end),
			(None, None) => Bezier::from_linear_dvec2(start, end),
		}
	}
}
