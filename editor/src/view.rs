use glam::{DAffine2, DVec2};

/// Maps display coordinates into the drawing's coordinate space.
///
/// Handles consult the active view at gesture start and at every step, so panning or zooming
/// mid-gesture is reflected immediately. Implementations must be pure: the same input point
/// always maps to the same drawing point for an unchanged view.
pub trait DrawingView {
	fn view_to_drawing(&self, point: DVec2) -> DVec2;
}

/// A [`DrawingView`] whose mapping is a single affine navigation transform (pan, zoom, rotation).
#[derive(Clone, Copy, Debug)]
pub struct ViewTransform {
	view_to_drawing: DAffine2,
}

impl ViewTransform {
	pub fn new(view_to_drawing: DAffine2) -> Self {
		Self { view_to_drawing }
	}
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self { view_to_drawing: DAffine2::IDENTITY }
	}
}

impl DrawingView for ViewTransform {
	fn view_to_drawing(&self, point: DVec2) -> DVec2 {
		self.view_to_drawing.transform_point2(point)
	}
}
