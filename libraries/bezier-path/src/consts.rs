// Comparison bounds:
pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-3;
pub const STRICT_MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-6;

// Method argument defaults:
pub const DEFAULT_LUT_STEP_SIZE: usize = 20;
