use super::AttributeValue;
use crate::color::Color;
use crate::consts::DEFAULT_STROKE_WIDTH;

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_KEY_ID: AtomicU64 = AtomicU64::new(0);

/// Unique identity of an [`AttributeKey`], allocated once per constructed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeKeyId(u64);

impl AttributeKeyId {
	fn next() -> Self {
		Self(NEXT_KEY_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// An attribute identifier bundled with its default value.
///
/// Equality and hashing use the key's identity, never its name: two keys constructed with the
/// same name are distinct. The one place where names matter is [`attribute_key`], the by-name
/// lookup into the process-wide catalog used by bulk attribute application.
#[derive(Clone)]
pub struct AttributeKey {
	id: AttributeKeyId,
	name: &'static str,
	default: AttributeValue,
}

impl AttributeKey {
	pub fn new(name: &'static str, default: AttributeValue) -> Self {
		Self {
			id: AttributeKeyId::next(),
			name,
			default,
		}
	}

	pub fn id(&self) -> AttributeKeyId {
		self.id
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// The value reported for this key when a store has no explicit entry for it.
	pub fn default_value(&self) -> &AttributeValue {
		&self.default
	}
}

impl PartialEq for AttributeKey {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for AttributeKey {}

impl Hash for AttributeKey {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl Debug for AttributeKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		write!(f, "AttributeKey({}, id: {})", self.name, self.id.0)
	}
}

// The built-in attribute catalog. Initialized on first use and read-only afterwards.
pub static FILL_COLOR: Lazy<AttributeKey> = Lazy::new(|| AttributeKey::new("fill-color", AttributeValue::Color(Color::WHITE)));
pub static STROKE_COLOR: Lazy<AttributeKey> = Lazy::new(|| AttributeKey::new("stroke-color", AttributeValue::Color(Color::BLACK)));
pub static STROKE_WIDTH: Lazy<AttributeKey> = Lazy::new(|| AttributeKey::new("stroke-width", AttributeValue::F64(DEFAULT_STROKE_WIDTH)));
pub static OPACITY: Lazy<AttributeKey> = Lazy::new(|| AttributeKey::new("opacity", AttributeValue::F64(1.)));

/// Name lookup table over the built-in catalog.
pub static SUPPORTED_ATTRIBUTES_MAP: Lazy<HashMap<&'static str, AttributeKey>> = Lazy::new(|| {
	[&*FILL_COLOR, &*STROKE_COLOR, &*STROKE_WIDTH, &*OPACITY]
		.into_iter()
		.map(|key| (key.name(), key.clone()))
		.collect()
});

/// Look up a catalog key by name, the merge point between by-name and by-identity attribute access.
pub fn attribute_key(name: &str) -> Option<&'static AttributeKey> {
	SUPPORTED_ATTRIBUTES_MAP.get(name)
}
