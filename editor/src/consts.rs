// HANDLES
/// Footprint of an interactive handle, in drawing units.
pub const HANDLE_SIZE: f64 = 7.;
/// How far (as a fraction of the outermost-to-center distance) a handle may step inward from the
/// outermost point before being clamped, so it cannot crowd the center.
pub const HANDLE_INSET_MAX_FRACTION: f64 = 0.75;

// HIT TESTING
/// Default distance within which a probe point counts as touching a curve.
pub const FIND_SEGMENT_TOLERANCE: f64 = 5.;

// ATTRIBUTES
pub const DEFAULT_STROKE_WIDTH: f64 = 2.;

// HISTORY
pub const MAX_UNDO_HISTORY_LEN: usize = 100;
