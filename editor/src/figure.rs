use crate::attribute::{AttributeKey, AttributeStore, AttributeValue, RestoreData};
use crate::error::EditorError;

use bezier_path::{BezierPath, PathError, PathNode};
use glam::{DAffine2, DVec2};
use std::cell::RefCell;
use std::rc::Rc;

/// Observer notified around figure mutations.
///
/// `will_change` fires before a mutation so a view can suspend incremental repaint bookkeeping;
/// `changed` fires after it. Observers must not mutate the figure from inside a callback.
pub trait FigureObserver {
	fn will_change(&self);
	fn changed(&self);
}

/// Opaque snapshot of a figure's pre-transform geometry.
///
/// Produced by [`BezierFigure::transform_restore_data`] and only meaningfully replayable on the
/// figure that produced it (or a structural clone of it).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformRestoreData(BezierPath);

/// A figure composed of one editable [`BezierPath`] and one [`AttributeStore`].
///
/// The figure is the unit of undo: its geometry and attributes are only mutated through methods
/// here, which bracket each change with will-change/changed notifications (or, for the raw
/// transform operations, leave the bracketing to the gesture driving them).
pub struct BezierFigure {
	path: BezierPath,
	attributes: Rc<RefCell<AttributeStore>>,
	observer: Option<Rc<dyn FigureObserver>>,
}

impl BezierFigure {
	pub fn new(path: BezierPath) -> Self {
		Self {
			path,
			attributes: Rc::new(RefCell::new(AttributeStore::new())),
			observer: None,
		}
	}

	/// Compose a figure with an existing attribute store, e.g. one wired with a listener and
	/// dependents before the figure is built.
	pub fn with_attributes(path: BezierPath, attributes: Rc<RefCell<AttributeStore>>) -> Self {
		Self {
			path,
			attributes,
			observer: None,
		}
	}

	pub fn set_observer(&mut self, observer: Option<Rc<dyn FigureObserver>>) {
		self.observer = observer;
	}

	/// Read access to the figure's geometry.
	pub fn path(&self) -> &BezierPath {
		&self.path
	}

	/// Shared handle to the figure's attribute store.
	pub fn attr(&self) -> Rc<RefCell<AttributeStore>> {
		self.attributes.clone()
	}

	/// Signal that a mutation is about to happen.
	pub fn will_change(&self) {
		if let Some(observer) = &self.observer {
			observer.will_change();
		}
	}

	/// Signal that a mutation finished.
	pub fn changed(&self) {
		if let Some(observer) = &self.observer {
			observer.changed();
		}
	}

	pub fn node_count(&self) -> usize {
		self.path.len()
	}

	/// Append a node to the end of the figure's path.
	pub fn add_node(&mut self, node: PathNode) {
		self.will_change();
		self.path.add_node(node);
		self.changed();
	}

	/// Remove and return the node at `index`.
	pub fn remove_node(&mut self, index: usize) -> Result<PathNode, EditorError> {
		// Check before mutating so a failed call neither changes the path nor notifies.
		if index >= self.path.len() {
			return Err(PathError::IndexOutOfRange { index, len: self.path.len() }.into());
		}
		self.will_change();
		let node = self.path.remove_node(index)?;
		self.changed();
		Ok(node)
	}

	/// Index of the first segment passing within `tolerance` of `point`, if any.
	pub fn find_segment(&self, point: DVec2, tolerance: f64) -> Option<usize> {
		self.path.find_segment(point, tolerance)
	}

	/// Split the segment near `point`, inserting a new node at the projection of `point`.
	/// Returns the new node's index.
	pub fn split_segment(&mut self, point: DVec2, tolerance: f64) -> Result<usize, EditorError> {
		if self.path.find_segment(point, tolerance).is_none() {
			return Err(PathError::NotFound.into());
		}
		self.will_change();
		let new_index = self.path.split_segment(point, tolerance)?;
		self.changed();
		Ok(new_index)
	}

	pub fn start_point(&self) -> Option<DVec2> {
		self.path.start_point()
	}

	pub fn end_point(&self) -> Option<DVec2> {
		self.path.end_point()
	}

	pub fn set_start_point(&mut self, position: DVec2) {
		self.will_change();
		self.path.set_start_point(position);
		self.changed();
	}

	pub fn set_end_point(&mut self, position: DVec2) {
		self.will_change();
		self.path.set_end_point(position);
		self.changed();
	}

	/// The center of the figure's geometry. A single-point figure reports that point; an empty
	/// figure reports the origin.
	pub fn center(&self) -> DVec2 {
		self.path.center()
	}

	/// The anchor farthest from the figure's center, if the figure has any nodes.
	pub fn outermost_point(&self) -> Option<DVec2> {
		self.path.outermost_point()
	}

	/// Apply an affine transform to the figure's geometry.
	///
	/// Not bracketed: a gesture composes the will-change/restore/transform/changed sequence
	/// itself, so each step replays from the pristine snapshot inside a single notification pair.
	pub fn transform(&mut self, transform: DAffine2) {
		self.path.apply_transformation(transform);
	}

	/// Capture the geometry state a later [`restore_transform_to`](Self::restore_transform_to)
	/// can return to.
	pub fn transform_restore_data(&self) -> TransformRestoreData {
		TransformRestoreData(self.path.clone())
	}

	/// Return the geometry to a previously captured state. Unbracketed, like
	/// [`transform`](Self::transform).
	pub fn restore_transform_to(&mut self, data: &TransformRestoreData) {
		self.path = data.0.clone();
	}

	/// Write one attribute, bracketed with change notifications.
	pub fn set_attribute(&mut self, key: &AttributeKey, value: AttributeValue) {
		self.will_change();
		self.attributes.borrow_mut().set(key, value);
		self.changed();
	}

	/// Read one attribute, falling back to the key's default.
	pub fn get_attribute(&self, key: &AttributeKey) -> AttributeValue {
		self.attributes.borrow().get(key)
	}

	/// Capture the attribute state, including dependents, for undo.
	pub fn attributes_restore_data(&self) -> RestoreData {
		self.attributes.borrow().snapshot()
	}

	/// Return the attribute state, including dependents, to a previously captured snapshot.
	pub fn restore_attributes_to(&mut self, data: &RestoreData) -> Result<(), EditorError> {
		self.will_change();
		let result = self.attributes.borrow_mut().restore(data);
		self.changed();
		result
	}
}
