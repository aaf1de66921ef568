use crate::consts::{HANDLE_INSET_MAX_FRACTION, HANDLE_SIZE};
use crate::figure::{BezierFigure, TransformRestoreData};
use crate::history::{EditHistory, TransformEdit};
use crate::input::ModifierKeys;
use crate::view::DrawingView;

use glam::{DAffine2, DVec2};
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;

/// The interactive manipulation contract shared by all handle types.
///
/// A gesture is delivered as exactly one `track_start`, any number of `track_step`s (possibly
/// zero), and exactly one `track_end`. Even an abandoned gesture must be ended with the last
/// known lead point so the undo stack stays consistent.
pub trait Handle {
	fn track_start(&mut self, anchor: DVec2, modifiers: ModifierKeys, view: &dyn DrawingView);
	fn track_step(&mut self, lead: DVec2, modifiers: ModifierKeys, view: &dyn DrawingView);
	fn track_end(&mut self, lead: DVec2, modifiers: ModifierKeys, view: &dyn DrawingView, history: &mut dyn EditHistory);
	/// Whether this handle merges its gesture with `other`'s.
	fn is_combinable_with(&self, other: &dyn Handle) -> bool;
	/// Where the handle sits, in drawing coordinates.
	fn drawing_location(&self) -> DVec2;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum ScaleRotateFsmState {
	#[default]
	Ready,
	Tracking,
}

#[derive(Clone, Debug, Default)]
struct GestureData {
	restore_data: TransformRestoreData,
	transform: DAffine2,
	center: DVec2,
	start_angle: f64,
	start_distance: f64,
}

/// A handle that interactively scales and rotates a figure about its center.
///
/// Holding Shift or Alt restricts the gesture to rotation only. Every step recomposes the full
/// transform from the gesture-start snapshot, so repeating a step is idempotent and rounding
/// error never accumulates across steps. Releasing the pointer commits a single undoable edit.
pub struct ScaleRotateHandle {
	owner: Rc<RefCell<BezierFigure>>,
	fsm_state: ScaleRotateFsmState,
	gesture_data: GestureData,
}

impl ScaleRotateHandle {
	pub fn new(owner: Rc<RefCell<BezierFigure>>) -> Self {
		Self {
			owner,
			fsm_state: ScaleRotateFsmState::default(),
			gesture_data: GestureData::default(),
		}
	}

	pub fn owner(&self) -> Rc<RefCell<BezierFigure>> {
		self.owner.clone()
	}
}

impl Handle for ScaleRotateHandle {
	fn track_start(&mut self, anchor: DVec2, _modifiers: ModifierKeys, view: &dyn DrawingView) {
		if self.fsm_state == ScaleRotateFsmState::Tracking {
			warn!("Scale/rotate gesture restarted without a matching track_end; starting fresh");
		}

		let figure = self.owner.borrow();
		let center = figure.center();
		let restore_data = figure.transform_restore_data();
		drop(figure);

		let anchor = view.view_to_drawing(anchor);
		self.gesture_data = GestureData {
			restore_data,
			transform: DAffine2::IDENTITY,
			center,
			start_angle: (anchor - center).to_angle(),
			start_distance: anchor.distance(center),
		};
		self.fsm_state = ScaleRotateFsmState::Tracking;
	}

	fn track_step(&mut self, lead: DVec2, modifiers: ModifierKeys, view: &dyn DrawingView) {
		if self.fsm_state != ScaleRotateFsmState::Tracking {
			warn!("Ignoring scale/rotate step without a tracked gesture");
			return;
		}

		let data = &mut self.gesture_data;
		let lead = view.view_to_drawing(lead);
		let step_angle = (lead - data.center).to_angle();
		let step_distance = lead.distance(data.center);

		// A zero start distance would blow the scale factor up to infinity; treat it as rotate-only.
		let rotate_only = modifiers.intersects(ModifierKeys::SHIFT | ModifierKeys::ALT);
		let scale_factor = if rotate_only || data.start_distance == 0. { 1. } else { step_distance / data.start_distance };

		// Uniform scale then rotation, both about the gesture center.
		data.transform = DAffine2::from_translation(data.center)
			* DAffine2::from_angle(step_angle - data.start_angle)
			* DAffine2::from_scale(DVec2::splat(scale_factor))
			* DAffine2::from_translation(-data.center);

		let mut figure = self.owner.borrow_mut();
		figure.will_change();
		// Replaying the freshly composed transform onto the pristine snapshot keeps every step
		// relative to the gesture start instead of compounding error step over step.
		figure.restore_transform_to(&data.restore_data);
		figure.transform(data.transform);
		figure.changed();
	}

	fn track_end(&mut self, _lead: DVec2, _modifiers: ModifierKeys, _view: &dyn DrawingView, history: &mut dyn EditHistory) {
		if self.fsm_state != ScaleRotateFsmState::Tracking {
			warn!("Ignoring scale/rotate end without a tracked gesture");
			return;
		}

		let before = std::mem::take(&mut self.gesture_data).restore_data;
		let after = self.owner.borrow().transform_restore_data();
		history.push_edit(Box::new(TransformEdit::new(self.owner.clone(), before, after)));
		self.fsm_state = ScaleRotateFsmState::Ready;
	}

	fn is_combinable_with(&self, _other: &dyn Handle) -> bool {
		false
	}

	// Find a nice place to put the handle: one that will not overlap the point handle sitting on
	// the outermost node, and that stays inside the figure.
	fn drawing_location(&self) -> DVec2 {
		let figure = self.owner.borrow();
		let center = figure.center();
		let Some(outermost) = figure.outermost_point() else { return center };

		let length = outermost.distance(center);
		if length == 0. {
			// Outermost and center coincide; fall back to a fixed offset so the handle stays visible.
			return outermost + DVec2::new(-HANDLE_SIZE / 2., HANDLE_SIZE / 2.);
		}

		// One handle-size step inward from the outermost point toward the center, clamped so the
		// handle never crosses the 3/4 point between them.
		let step_fraction = (HANDLE_SIZE / length).min(HANDLE_INSET_MAX_FRACTION);
		outermost.lerp(center, step_fraction)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::history::History;
	use crate::view::ViewTransform;

	use bezier_path::BezierPath;
	use std::f64::consts::FRAC_PI_2;

	const EPSILON: f64 = 1e-9;

	fn init_logger() {
		let _ = env_logger::builder().is_test(true).try_init();
	}

	/// A closed square centered on (50, 50).
	fn set_up_square_figure() -> Rc<RefCell<BezierFigure>> {
		let path = BezierPath::from_anchors([DVec2::new(0., 0.), DVec2::new(100., 0.), DVec2::new(100., 100.), DVec2::new(0., 100.)], true);
		Rc::new(RefCell::new(BezierFigure::new(path)))
	}

	fn anchors_of(figure: &Rc<RefCell<BezierFigure>>) -> Vec<DVec2> {
		figure.borrow().path().anchors()
	}

	#[test]
	fn pure_rotation_step_spins_the_figure_about_its_center() {
		init_logger();
		let figure = set_up_square_figure();
		let mut handle = ScaleRotateHandle::new(figure.clone());
		let view = ViewTransform::default();

		handle.track_start(DVec2::new(100., 50.), ModifierKeys::empty(), &view);
		// Same distance from the center, a quarter turn around it.
		handle.track_step(DVec2::new(50., 100.), ModifierKeys::empty(), &view);

		let rotated = anchors_of(&figure);
		let expected = [DVec2::new(100., 0.), DVec2::new(100., 100.), DVec2::new(0., 100.), DVec2::new(0., 0.)];
		for (anchor, expected) in rotated.iter().zip(expected) {
			assert!(anchor.abs_diff_eq(expected, EPSILON), "got {anchor}, expected {expected}");
		}
	}

	#[test]
	fn pure_scale_step_grows_the_figure_about_its_center() {
		let figure = set_up_square_figure();
		let mut handle = ScaleRotateHandle::new(figure.clone());
		let view = ViewTransform::default();

		handle.track_start(DVec2::new(100., 50.), ModifierKeys::empty(), &view);
		// Same direction from the center, three times the distance.
		handle.track_step(DVec2::new(200., 50.), ModifierKeys::empty(), &view);

		let scaled = anchors_of(&figure);
		let expected = [DVec2::new(-100., -100.), DVec2::new(200., -100.), DVec2::new(200., 200.), DVec2::new(-100., 200.)];
		for (anchor, expected) in scaled.iter().zip(expected) {
			assert!(anchor.abs_diff_eq(expected, EPSILON), "got {anchor}, expected {expected}");
		}
	}

	#[test]
	fn shift_restricts_the_gesture_to_rotation() {
		let figure = set_up_square_figure();
		let mut handle = ScaleRotateHandle::new(figure.clone());
		let view = ViewTransform::default();

		handle.track_start(DVec2::new(100., 50.), ModifierKeys::empty(), &view);
		// Double the distance and a quarter turn, but Shift pins the scale factor to one.
		handle.track_step(DVec2::new(50., 150.), ModifierKeys::SHIFT, &view);

		let center = DVec2::new(50., 50.);
		for anchor in anchors_of(&figure) {
			assert!(f64_eq(anchor.distance(center), 50. * std::f64::consts::SQRT_2), "distance to center changed under rotate-only mode");
		}
	}

	fn f64_eq(a: f64, b: f64) -> bool {
		(a - b).abs() < EPSILON
	}

	#[test]
	fn repeating_a_step_is_idempotent() {
		let figure = set_up_square_figure();
		let mut handle = ScaleRotateHandle::new(figure.clone());
		let view = ViewTransform::default();

		handle.track_start(DVec2::new(100., 50.), ModifierKeys::empty(), &view);
		handle.track_step(DVec2::new(120., 80.), ModifierKeys::empty(), &view);
		let after_first = anchors_of(&figure);
		handle.track_step(DVec2::new(120., 80.), ModifierKeys::empty(), &view);
		let after_second = anchors_of(&figure);

		assert_eq!(after_first, after_second);
	}

	#[test]
	fn steps_compose_from_the_start_snapshot_not_each_other() {
		let figure = set_up_square_figure();
		let mut handle = ScaleRotateHandle::new(figure.clone());
		let view = ViewTransform::default();

		handle.track_start(DVec2::new(100., 50.), ModifierKeys::empty(), &view);
		// Wander, then come back to the anchor: the figure must return to its start state.
		handle.track_step(DVec2::new(200., 50.), ModifierKeys::empty(), &view);
		handle.track_step(DVec2::new(50., 100.), ModifierKeys::empty(), &view);
		handle.track_step(DVec2::new(100., 50.), ModifierKeys::empty(), &view);

		let expected = [DVec2::new(0., 0.), DVec2::new(100., 0.), DVec2::new(100., 100.), DVec2::new(0., 100.)];
		for (anchor, expected) in anchors_of(&figure).iter().zip(expected) {
			assert!(anchor.abs_diff_eq(expected, EPSILON), "got {anchor}, expected {expected}");
		}
	}

	#[test]
	fn view_mapping_is_applied_to_both_anchor_and_lead() {
		let figure = set_up_square_figure();
		let mut handle = ScaleRotateHandle::new(figure.clone());
		// The view is zoomed 2x: drawing coordinates are half the view coordinates.
		let view = ViewTransform::new(DAffine2::from_scale(DVec2::splat(0.5)));

		handle.track_start(DVec2::new(200., 100.), ModifierKeys::empty(), &view);
		handle.track_step(DVec2::new(400., 100.), ModifierKeys::empty(), &view);

		// In drawing space that is (100, 50) -> (200, 50): a 3x scale about (50, 50).
		assert!(anchors_of(&figure)[2].abs_diff_eq(DVec2::new(200., 200.), EPSILON));
	}

	#[test]
	fn gesture_commits_one_undoable_edit() {
		let figure = set_up_square_figure();
		let original = anchors_of(&figure);
		let mut handle = ScaleRotateHandle::new(figure.clone());
		let view = ViewTransform::default();
		let mut history = History::new();

		handle.track_start(DVec2::new(100., 50.), ModifierKeys::empty(), &view);
		handle.track_step(DVec2::new(200., 50.), ModifierKeys::empty(), &view);
		handle.track_end(DVec2::new(200., 50.), ModifierKeys::empty(), &view, &mut history);
		assert_eq!(history.undo_len(), 1);

		let transformed = anchors_of(&figure);
		history.undo().unwrap();
		assert_eq!(anchors_of(&figure), original);
		history.redo().unwrap();
		assert_eq!(anchors_of(&figure), transformed);
	}

	#[test]
	fn degenerate_gesture_produces_an_identity_edit() {
		let figure = set_up_square_figure();
		let original = anchors_of(&figure);
		let mut handle = ScaleRotateHandle::new(figure.clone());
		let view = ViewTransform::default();
		let mut history = History::new();

		handle.track_start(DVec2::new(100., 50.), ModifierKeys::empty(), &view);
		handle.track_end(DVec2::new(100., 50.), ModifierKeys::empty(), &view, &mut history);

		assert_eq!(anchors_of(&figure), original);
		assert_eq!(history.undo_len(), 1);
		history.undo().unwrap();
		assert_eq!(anchors_of(&figure), original);
	}

	#[test]
	fn zero_start_distance_does_not_explode_the_scale() {
		let figure = set_up_square_figure();
		let mut handle = ScaleRotateHandle::new(figure.clone());
		let view = ViewTransform::default();

		// Anchor exactly on the center: the scale factor must stay pinned at one.
		handle.track_start(DVec2::new(50., 50.), ModifierKeys::empty(), &view);
		handle.track_step(DVec2::new(50., 100.), ModifierKeys::empty(), &view);

		let center = DVec2::new(50., 50.);
		for anchor in anchors_of(&figure) {
			assert!(f64_eq(anchor.distance(center), 50. * std::f64::consts::SQRT_2));
		}
	}

	#[test]
	fn step_without_start_is_ignored() {
		init_logger();
		let figure = set_up_square_figure();
		let original = anchors_of(&figure);
		let mut handle = ScaleRotateHandle::new(figure.clone());
		let view = ViewTransform::default();

		handle.track_step(DVec2::new(200., 50.), ModifierKeys::empty(), &view);
		assert_eq!(anchors_of(&figure), original);
	}

	#[test]
	fn handles_never_combine() {
		let figure = set_up_square_figure();
		let handle = ScaleRotateHandle::new(figure.clone());
		let other = ScaleRotateHandle::new(figure);
		assert!(!handle.is_combinable_with(&other));
	}

	#[test]
	fn rotation_angle_matches_the_pointer_sweep() {
		let figure = set_up_square_figure();
		let mut handle = ScaleRotateHandle::new(figure.clone());
		let view = ViewTransform::default();

		handle.track_start(DVec2::new(100., 50.), ModifierKeys::empty(), &view);
		handle.track_step(DVec2::new(50., 100.), ModifierKeys::empty(), &view);

		// The corner (100, 100) sits a quarter turn ahead of where (100, 0) started.
		let moved = anchors_of(&figure)[0];
		let start = DVec2::new(0., 0.) - DVec2::new(50., 50.);
		let swept = (moved - DVec2::new(50., 50.)).to_angle() - start.to_angle();
		assert!(f64_eq(swept.rem_euclid(std::f64::consts::TAU), FRAC_PI_2));
	}

	#[test]
	fn placement_steps_inward_from_the_outermost_point() {
		let figure = set_up_square_figure();
		let handle = ScaleRotateHandle::new(figure.clone());

		let location = handle.drawing_location();
		let outermost = figure.borrow().outermost_point().unwrap();
		let center = figure.borrow().center();

		assert!(f64_eq(location.distance(outermost), HANDLE_SIZE));
		// The location lies on the straight line between the two.
		let to_center = (center - outermost).normalize();
		let to_location = (location - outermost).normalize();
		assert!(to_center.abs_diff_eq(to_location, EPSILON));
	}

	#[test]
	fn placement_clamps_on_tiny_figures() {
		let path = BezierPath::from_anchors([DVec2::new(0., 0.), DVec2::new(4., 0.), DVec2::new(4., 4.), DVec2::new(0., 4.)], true);
		let figure = Rc::new(RefCell::new(BezierFigure::new(path)));
		let handle = ScaleRotateHandle::new(figure.clone());

		let location = handle.drawing_location();
		let outermost = figure.borrow().outermost_point().unwrap();
		let center = figure.borrow().center();

		// A full handle-size step would overshoot; the location clamps to 3/4 of the way in.
		assert!(f64_eq(location.distance(outermost), HANDLE_INSET_MAX_FRACTION * outermost.distance(center)));
	}

	#[test]
	fn placement_falls_back_on_a_point_figure() {
		let path = BezierPath::from_anchors([DVec2::new(10., 10.)], false);
		let figure = Rc::new(RefCell::new(BezierFigure::new(path)));
		let handle = ScaleRotateHandle::new(figure);

		assert_eq!(handle.drawing_location(), DVec2::new(10. - HANDLE_SIZE / 2., 10. + HANDLE_SIZE / 2.));
	}
}
