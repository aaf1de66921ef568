//! Bezier-path: the editable curve model underneath the Vellum editor core.
//!
//! The crate is split into two layers: [`Bezier`], a single parametric segment with
//! evaluation, projection, and subdivision, and [`BezierPath`], an ordered sequence of
//! [`PathNode`]s with the structural editing operations (append, remove, hit-test, split)
//! an interactive editor needs.

mod bezier;
mod consts;
mod path;
mod utils;

pub use bezier::*;
pub use path::*;
pub use utils::{dvec2_compare, f64_compare};
