use serde::{Deserialize, Serialize};

/// Structure that represents a color.
/// Components are stored as `f32` values that range from `0.0` up to `1.0`, alpha included.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
	red: f32,
	green: f32,
	blue: f32,
	alpha: f32,
}

impl Color {
	pub const BLACK: Color = Color::from_unsafe(0., 0., 0.);
	pub const WHITE: Color = Color::from_unsafe(1., 1., 1.);
	pub const RED: Color = Color::from_unsafe(1., 0., 0.);
	pub const GREEN: Color = Color::from_unsafe(0., 1., 0.);
	pub const BLUE: Color = Color::from_unsafe(0., 0., 1.);
	pub const TRANSPARENT: Color = Color {
		red: 0.,
		green: 0.,
		blue: 0.,
		alpha: 0.,
	};

	/// Return `Some(Color)` if `red`, `green`, `blue` and `alpha` all lie within `[0.0, 1.0]`.
	/// Negative numbers (including `-0.0`), `f32::NAN` and infinity are not valid values and return `None`.
	///
	/// # Examples
	/// ```
	/// use vellum_editor::Color;
	/// let color = Color::from_rgbaf32(0.3, 0.14, 0.15, 0.92).unwrap();
	/// assert!(color.components() == (0.3, 0.14, 0.15, 0.92));
	///
	/// let color = Color::from_rgbaf32(1., 1., 1., f32::NAN);
	/// assert!(color == None);
	/// ```
	pub fn from_rgbaf32(red: f32, green: f32, blue: f32, alpha: f32) -> Option<Color> {
		if [red, green, blue, alpha].iter().any(|c| c.is_sign_negative() || !c.is_finite() || *c > 1.) {
			return None;
		}
		Some(Color { red, green, blue, alpha })
	}

	// Return a Color without checking the component ranges and without transparency (alpha = 1.0)
	const fn from_unsafe(red: f32, green: f32, blue: f32) -> Color {
		Color { red, green, blue, alpha: 1. }
	}

	/// Return a fully opaque color from 8-bit components.
	pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Color {
		Color::from_rgba8(red, green, blue, 255)
	}

	/// Return a color initialized by its 8-bit components.
	///
	/// # Examples
	/// ```
	/// use vellum_editor::Color;
	/// let color = Color::from_rgba8(0x72, 0x67, 0x62, 0xFF);
	/// assert!(color == Color::from_rgb8(0x72, 0x67, 0x62));
	/// ```
	pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Color {
		let map = |int_color| int_color as f32 / 255.;
		Color {
			red: map(red),
			green: map(green),
			blue: map(blue),
			alpha: map(alpha),
		}
	}

	/// Return the red component.
	pub fn r(&self) -> f32 {
		self.red
	}

	/// Return the green component.
	pub fn g(&self) -> f32 {
		self.green
	}

	/// Return the blue component.
	pub fn b(&self) -> f32 {
		self.blue
	}

	/// Return the alpha component.
	pub fn a(&self) -> f32 {
		self.alpha
	}

	/// Return the all four components as a tuple.
	pub fn components(&self) -> (f32, f32, f32, f32) {
		(self.red, self.green, self.blue, self.alpha)
	}
}
