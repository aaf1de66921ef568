use super::{AttributeKey, AttributeValue, attribute_key};
use crate::error::EditorError;

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

/// Synchronous observer invoked with `(key, old value, new value)` whenever a stored value changes.
pub type AttributeListener = Rc<dyn Fn(&AttributeKey, &AttributeValue, &AttributeValue)>;

/// Resolves the stores that mirror writes applied to an owner.
///
/// Evaluated lazily at each propagating call rather than cached, so group membership may change
/// between calls without leaving a stale list behind. Each call's result is held for the duration
/// of that call, which keeps a single fan-out consistent even if the supplier's answer changes
/// underneath it.
pub type DependentSupplier = Rc<dyn Fn() -> Vec<Rc<RefCell<AttributeStore>>>>;

/// Restorable snapshot of a store's attributes, shaped after the dependent structure at capture time.
#[derive(Debug, Clone, PartialEq)]
pub enum RestoreData {
	/// The attributes of a store that had no dependents.
	Flat(HashMap<AttributeKey, AttributeValue>),
	/// The owner's attributes first, followed by one snapshot per dependent in enumeration order.
	Composite(Vec<RestoreData>),
}

/// A key-to-value attribute mapping with an enable mask, change notification, and dependent fan-out.
///
/// Writes to a key in the forbidden set are silently dropped on this store but still propagate to
/// dependents, which carry their own masks. Restoring is the one privileged path that bypasses the
/// mask, since it must reproduce exact prior state.
#[derive(Default)]
pub struct AttributeStore {
	attributes: HashMap<AttributeKey, AttributeValue>,
	forbidden: HashSet<AttributeKey>,
	listener: Option<AttributeListener>,
	dependents: Option<DependentSupplier>,
}

impl Debug for AttributeStore {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.debug_struct("AttributeStore")
			.field("attributes", &self.attributes)
			.field("forbidden", &self.forbidden)
			.field("has_listener", &self.listener.is_some())
			.field("has_dependents", &self.dependents.is_some())
			.finish()
	}
}

impl AttributeStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_listener(listener: AttributeListener) -> Self {
		Self {
			listener: Some(listener),
			..Self::default()
		}
	}

	/// Build a new store copying `source`'s attributes and forbidden set, with fresh listener and
	/// dependent wiring. Used to clone figures without carrying over old notification targets.
	pub fn from_store(source: &AttributeStore, listener: Option<AttributeListener>, dependents: Option<DependentSupplier>) -> Self {
		Self {
			attributes: source.attributes.clone(),
			forbidden: source.forbidden.clone(),
			listener,
			dependents,
		}
	}

	pub fn set_listener(&mut self, listener: Option<AttributeListener>) {
		self.listener = listener;
	}

	pub fn set_dependents(&mut self, dependents: Option<DependentSupplier>) {
		self.dependents = dependents;
	}

	/// Materialize the current dependent list. Called once at the top of every propagating
	/// operation so the fan-out is unaffected by mid-flight changes to the supplier's answer.
	fn resolved_dependents(&self) -> Vec<Rc<RefCell<AttributeStore>>> {
		self.dependents.as_ref().map(|supplier| supplier()).unwrap_or_default()
	}

	/// Write `value` under `key` and fan the same value out to every dependent store.
	///
	/// The write is dropped on this store when the key is forbidden, but propagation still happens.
	/// The listener is invoked with the resolved old value only when the value actually changed,
	/// before any dependent is touched; each dependent compares against its own prior value in turn.
	pub fn set(&mut self, key: &AttributeKey, value: AttributeValue) {
		let dependents = self.resolved_dependents();

		if !self.forbidden.contains(key) {
			let old = self.get(key);
			self.attributes.insert(key.clone(), value.clone());
			if old != value {
				self.fire_attribute_changed(key, &old, &value);
			}
		}

		for dependent in dependents {
			dependent.borrow_mut().set(key, value.clone());
		}
	}

	/// The stored value for `key`, or the key's default when absent. Never fails.
	pub fn get(&self, key: &AttributeKey) -> AttributeValue {
		self.attributes.get(key).cloned().unwrap_or_else(|| key.default_value().clone())
	}

	/// Toggle whether `key` accepts direct writes on this store. Disabling is idempotent.
	pub fn set_enabled(&mut self, key: &AttributeKey, enabled: bool) {
		if enabled {
			self.forbidden.remove(key);
		} else {
			self.forbidden.insert(key.clone());
		}
	}

	/// Whether `key` currently accepts direct writes on this store.
	pub fn is_enabled(&self, key: &AttributeKey) -> bool {
		!self.forbidden.contains(key)
	}

	/// Whether an explicit value is stored under `key`.
	pub fn has_attribute(&self, key: &AttributeKey) -> bool {
		self.attributes.contains_key(key)
	}

	/// Remove the explicit value stored under `key`, if any. An absent key is a silent no-op.
	/// The listener observes the value reverting to the key's default, matching what `get` will
	/// report afterwards.
	pub fn remove_attribute(&mut self, key: &AttributeKey) {
		if let Some(old) = self.attributes.remove(key) {
			let default = key.default_value().clone();
			if old != default {
				self.fire_attribute_changed(key, &old, &default);
			}
		}
	}

	/// Read access to the stored key/value pairs.
	pub fn attributes(&self) -> &HashMap<AttributeKey, AttributeValue> {
		&self.attributes
	}

	/// Apply a batch of writes through the normal `set` path.
	pub fn set_attributes(&mut self, entries: impl IntoIterator<Item = (AttributeKey, AttributeValue)>) {
		for (key, value) in entries {
			self.set(&key, value);
		}
	}

	/// Write an attribute resolved by name through the process-wide catalog.
	pub fn set_by_name(&mut self, name: &str, value: AttributeValue) -> Result<(), EditorError> {
		let key = attribute_key(name).ok_or_else(|| EditorError::UnknownAttribute(name.to_string()))?;
		self.set(key, value);
		Ok(())
	}

	/// Capture a snapshot suitable for [`restore`](Self::restore): this store's attributes plus,
	/// when dependents exist, each dependent's own snapshot in enumeration order.
	pub fn snapshot(&self) -> RestoreData {
		let dependents = self.resolved_dependents();
		if dependents.is_empty() {
			return RestoreData::Flat(self.attributes.clone());
		}

		let mut parts = Vec::with_capacity(dependents.len() + 1);
		parts.push(RestoreData::Flat(self.attributes.clone()));
		parts.extend(dependents.iter().map(|dependent| dependent.borrow().snapshot()));
		RestoreData::Composite(parts)
	}

	/// Re-apply a snapshot produced by [`snapshot`](Self::snapshot) on this store or a structural
	/// clone. Fails with [`EditorError::ShapeMismatch`] before any mutation when the snapshot's
	/// dependent structure no longer matches the live one. Restoring bypasses the forbidden set:
	/// it is a privileged undo path, not a normal mutation.
	pub fn restore(&mut self, data: &RestoreData) -> Result<(), EditorError> {
		self.check_shape(data)?;
		self.apply_restore(data);
		Ok(())
	}

	/// Validate that `data`'s nesting matches the live dependent structure, recursively, without
	/// mutating anything.
	fn check_shape(&self, data: &RestoreData) -> Result<(), EditorError> {
		let dependents = self.resolved_dependents();
		match data {
			RestoreData::Flat(_) => {
				if dependents.is_empty() {
					Ok(())
				} else {
					Err(EditorError::ShapeMismatch(format!("flat restore data applied to a store with {} dependents", dependents.len())))
				}
			}
			RestoreData::Composite(parts) => {
				let Some((first, rest)) = parts.split_first() else {
					return Err(EditorError::ShapeMismatch("empty composite restore data".into()));
				};
				if !matches!(first, RestoreData::Flat(_)) {
					return Err(EditorError::ShapeMismatch("composite restore data must lead with the owner's attributes".into()));
				}
				if rest.len() != dependents.len() {
					return Err(EditorError::ShapeMismatch(format!("restore data captured {} dependents but the store now has {}", rest.len(), dependents.len())));
				}
				for (dependent, part) in dependents.iter().zip(rest) {
					dependent.borrow().check_shape(part)?;
				}
				Ok(())
			}
		}
	}

	// Shape has been validated by `check_shape`; the non-matching arms below are unreachable.
	fn apply_restore(&mut self, data: &RestoreData) {
		match data {
			RestoreData::Flat(map) => self.restore_own(map),
			RestoreData::Composite(parts) => {
				let dependents = self.resolved_dependents();
				let Some((RestoreData::Flat(own), rest)) = parts.split_first() else { return };
				self.restore_own(own);
				for (dependent, part) in dependents.iter().zip(rest) {
					dependent.borrow_mut().apply_restore(part);
				}
			}
		}
	}

	/// Replace this store's attributes with `map`, ignoring the forbidden mask, and notify the
	/// listener of every value that differs from the pre-restore state.
	fn restore_own(&mut self, map: &HashMap<AttributeKey, AttributeValue>) {
		let previous = std::mem::replace(&mut self.attributes, map.clone());

		for (key, value) in map {
			let old = previous.get(key).cloned().unwrap_or_else(|| key.default_value().clone());
			if old != *value {
				self.fire_attribute_changed(key, &old, value);
			}
		}
		// Keys that vanished revert to their defaults.
		for (key, old) in &previous {
			if !map.contains_key(key) {
				let default = key.default_value().clone();
				if *old != default {
					self.fire_attribute_changed(key, old, &default);
				}
			}
		}
	}

	fn fire_attribute_changed(&self, key: &AttributeKey, old: &AttributeValue, new: &AttributeValue) {
		if let Some(listener) = &self.listener {
			listener(key, old, new);
		}
	}
}
