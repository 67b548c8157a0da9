//! Togglable per-frame behaviors.

/// A unit of per-frame logic attached to a body that can be switched on and
/// off. The two variants are [`crate::GravityField`] and
/// [`crate::TouchAttraction`]; they share nothing beyond the switch.
pub trait Behavior {
    fn is_active(&self) -> bool;

    /// Flip the switch. Any cleanup tied to deactivation (such as a gravity
    /// field clearing its force slot) happens on the behavior's next
    /// per-frame evaluation.
    fn set_active(&mut self, active: bool);
}
