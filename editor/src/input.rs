use bitflags::bitflags;

bitflags! {
	/// The set of modifier keys held down during a pointer event.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
	#[repr(transparent)]
	pub struct ModifierKeys: u8 {
		const SHIFT           = 0b0000_0001;
		const ALT             = 0b0000_0010;
		const CONTROL         = 0b0000_0100;
		const META_OR_COMMAND = 0b0000_1000;
	}
}
