use crate::attribute::{AttributeStore, RestoreData};
use crate::consts::MAX_UNDO_HISTORY_LEN;
use crate::error::EditorError;
use crate::figure::{BezierFigure, TransformRestoreData};

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A committed, replayable edit.
///
/// Edits capture before/after restore data rather than the operation that produced them, so
/// replaying is a pure state swap on the target figure or store.
pub trait UndoableEdit {
	fn undo(&mut self) -> Result<(), EditorError>;
	fn redo(&mut self) -> Result<(), EditorError>;
}

/// The sink a completed gesture pushes its edit record into.
pub trait EditHistory {
	fn push_edit(&mut self, edit: Box<dyn UndoableEdit>);
}

/// Replays a figure's geometry between its pre- and post-gesture snapshots.
pub struct TransformEdit {
	figure: Rc<RefCell<BezierFigure>>,
	before: TransformRestoreData,
	after: TransformRestoreData,
}

impl TransformEdit {
	pub fn new(figure: Rc<RefCell<BezierFigure>>, before: TransformRestoreData, after: TransformRestoreData) -> Self {
		Self { figure, before, after }
	}

	/// Whether the edit's two snapshots are identical, i.e. the gesture ended where it started.
	pub fn is_identity(&self) -> bool {
		self.before == self.after
	}

	fn restore(&self, data: &TransformRestoreData) {
		let mut figure = self.figure.borrow_mut();
		figure.will_change();
		figure.restore_transform_to(data);
		figure.changed();
	}
}

impl UndoableEdit for TransformEdit {
	fn undo(&mut self) -> Result<(), EditorError> {
		self.restore(&self.before);
		Ok(())
	}

	fn redo(&mut self) -> Result<(), EditorError> {
		self.restore(&self.after);
		Ok(())
	}
}

/// Replays a store's attributes (and its dependents') between snapshots.
pub struct AttributesEdit {
	store: Rc<RefCell<AttributeStore>>,
	before: RestoreData,
	after: RestoreData,
}

impl AttributesEdit {
	pub fn new(store: Rc<RefCell<AttributeStore>>, before: RestoreData, after: RestoreData) -> Self {
		Self { store, before, after }
	}
}

impl UndoableEdit for AttributesEdit {
	fn undo(&mut self) -> Result<(), EditorError> {
		self.store.borrow_mut().restore(&self.before)
	}

	fn redo(&mut self) -> Result<(), EditorError> {
		self.store.borrow_mut().restore(&self.after)
	}
}

/// Bounded undo/redo stacks of committed edits.
///
/// Pushing a fresh edit clears the redo stack; overflowing the undo stack silently drops the
/// oldest edit.
#[derive(Default)]
pub struct History {
	undo_stack: VecDeque<Box<dyn UndoableEdit>>,
	redo_stack: VecDeque<Box<dyn UndoableEdit>>,
}

impl History {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn undo_len(&self) -> usize {
		self.undo_stack.len()
	}

	pub fn redo_len(&self) -> usize {
		self.redo_stack.len()
	}

	/// Replay the most recent edit backwards. Returns `Ok(false)` when there is nothing to undo.
	pub fn undo(&mut self) -> Result<bool, EditorError> {
		let Some(mut edit) = self.undo_stack.pop_back() else { return Ok(false) };
		edit.undo()?;
		self.redo_stack.push_back(edit);
		Ok(true)
	}

	/// Replay the most recently undone edit forwards. Returns `Ok(false)` when there is nothing to redo.
	pub fn redo(&mut self) -> Result<bool, EditorError> {
		let Some(mut edit) = self.redo_stack.pop_back() else { return Ok(false) };
		edit.redo()?;
		self.undo_stack.push_back(edit);
		Ok(true)
	}
}

impl EditHistory for History {
	fn push_edit(&mut self, edit: Box<dyn UndoableEdit>) {
		self.redo_stack.clear();
		self.undo_stack.push_back(edit);
		if self.undo_stack.len() > MAX_UNDO_HISTORY_LEN {
			self.undo_stack.pop_front();
		}
	}
}
