use crate::color::Color;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The payload carried by one attribute.
///
/// Equality between two values is what decides whether a write counts as a change and
/// notifies the store's listener.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
	Bool(bool),
	F64(f64),
	DVec2(DVec2),
	String(String),
	Color(Color),
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> Self {
		AttributeValue::Bool(value)
	}
}

impl From<f64> for AttributeValue {
	fn from(value: f64) -> Self {
		AttributeValue::F64(value)
	}
}

impl From<DVec2> for AttributeValue {
	fn from(value: DVec2) -> Self {
		AttributeValue::DVec2(value)
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		AttributeValue::String(value)
	}
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		AttributeValue::String(value.to_string())
	}
}

impl From<Color> for AttributeValue {
	fn from(value: Color) -> Self {
		AttributeValue::Color(value)
	}
}

impl AttributeValue {
	/// The `f64` payload, if this value carries one.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			AttributeValue::F64(value) => Some(*value),
			_ => None,
		}
	}

	/// The [`Color`] payload, if this value carries one.
	pub fn as_color(&self) -> Option<Color> {
		match self {
			AttributeValue::Color(value) => Some(*value),
			_ => None,
		}
	}
}
