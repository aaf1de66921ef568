use bezier_path::PathError;

use thiserror::Error;

/// The error type used by the Vellum editor core.
#[derive(Clone, Debug, Error)]
pub enum EditorError {
	#[error("The operation caused a path error:\n{0}")]
	Path(String),

	#[error("No attribute named \"{0}\" is registered")]
	UnknownAttribute(String),

	#[error("Restore data does not match the store's live dependent structure:\n{0}")]
	ShapeMismatch(String),

	#[error("{0}")]
	Misc(String),
}

macro_rules! derive_from {
	($type:ty, $kind:ident) => {
		impl From<$type> for EditorError {
			fn from(error: $type) -> Self {
				EditorError::$kind(format!("{error:?}"))
			}
		}
	};
}

derive_from!(&str, Misc);
derive_from!(String, Misc);
derive_from!(PathError, Path);
