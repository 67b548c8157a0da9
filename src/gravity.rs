use glam::Vec2;

use crate::behavior::Behavior;
use crate::body::DynamicBody;
use crate::tunable::{Tunables, FRICTION, GRAVITY};

/// Pulls a body toward a target point under a named force slot.
///
/// The pull is spring-like, scaling linearly with distance instead of
/// inverse-square, so it stays finite as the body closes on the target and
/// gives a stable touch-follow feel. A velocity-proportional friction term
/// is folded into the same slot. Coefficients come from the `gravity` and
/// `friction` tunables, read fresh every frame.
#[derive(Debug, Clone)]
pub struct GravityField {
    force_id: String,
    target: Vec2,
    active: bool,
}

impl GravityField {
    pub fn new(force_id: impl Into<String>, target: Vec2) -> Self {
        Self {
            force_id: force_id.into(),
            target,
            active: true,
        }
    }

    /// The slot this field owns in its body's force map. Must be unique
    /// among fields concurrently active on the same body.
    pub fn force_id(&self) -> &str {
        &self.force_id
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Switch off and clear this field's slot on the body immediately, so no
    /// stale pull survives even if the field is discarded before its next
    /// evaluation.
    pub fn deactivate(&mut self, body: &mut DynamicBody) {
        self.active = false;
        body.remove_force(&self.force_id);
    }

    /// Per-frame evaluation: while active, write the current pull into the
    /// body's slot; while inactive, make sure the slot is absent.
    pub fn step(&mut self, body: &mut DynamicBody, params: &Tunables) {
        if self.active {
            let g = params.get_or(GRAVITY, 0.0);
            let f = params.get_or(FRICTION, 0.0);
            let pull = (self.target - body.position()) * g;
            let drag = -body.velocity() * f;
            body.apply_force(self.force_id.clone(), pull + drag);
        } else {
            body.remove_force(&self.force_id);
        }
    }
}

impl Behavior for GravityField {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
