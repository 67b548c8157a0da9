//! Live-adjustable named parameters.
//!
//! A control surface (slider panel, console, test harness) adjusts values at
//! any time; behaviors read the current value every frame rather than caching
//! it, so adjustments take effect immediately.

use std::collections::HashMap;

use log::warn;

/// Gravity coefficient read by [`crate::GravityField`].
pub const GRAVITY: &str = "gravity";
/// Friction coefficient read by [`crate::GravityField`].
pub const FRICTION: &str = "friction";
/// Body diameter; the scene also derives mass from it.
pub const SIZE: &str = "size";

/// One named parameter: current value plus its declared range and default.
#[derive(Debug, Clone, Copy)]
pub struct Tunable {
    pub value: f32,
    pub default: f32,
    pub min: f32,
    pub max: f32,
}

/// Registry of named tunables.
#[derive(Debug, Default)]
pub struct Tunables {
    entries: HashMap<String, Tunable>,
}

impl Tunables {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Declare a parameter with its default and allowed range. Redeclaring a
    /// name resets it.
    pub fn define(&mut self, name: impl Into<String>, default: f32, min: f32, max: f32) {
        let default = default.clamp(min, max);
        self.entries.insert(
            name.into(),
            Tunable {
                value: default,
                default,
                min,
                max,
            },
        );
    }

    /// Set a parameter, clamped into its declared range. Setting an
    /// undeclared name is ignored.
    pub fn set(&mut self, name: &str, value: f32) {
        match self.entries.get_mut(name) {
            Some(entry) => entry.value = value.clamp(entry.min, entry.max),
            None => warn!("ignoring set for undefined tunable {:?}", name),
        }
    }

    /// Restore a parameter to its default.
    pub fn reset(&mut self, name: &str) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.value = entry.default;
        }
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.entries.get(name).map(|entry| entry.value)
    }

    /// Current value, or `fallback` when the name was never declared.
    pub fn get_or(&self, name: &str, fallback: f32) -> f32 {
        self.get(name).unwrap_or(fallback)
    }

    /// Full entry, for control surfaces that need the range and default.
    pub fn entry(&self, name: &str) -> Option<&Tunable> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tunable)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}
