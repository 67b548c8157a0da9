use std::collections::HashMap;

use glam::Vec2;

use crate::bounds::Bounds;
use crate::error::PhysicsError;

/// Minimum mass the setter will accept; prevents division by zero when the
/// mass is driven live from a control surface.
const MIN_MASS: f32 = 0.001;

/// A positioned, massed entity whose motion is integrated from named forces.
///
/// Forces are keyed by string id so any number of behaviors can set and clear
/// their own contribution without clobbering the others; each id is replaced
/// wholesale on update, never accumulated across frames. An impulse
/// accumulates between ticks and is consumed by exactly the next integration
/// step. The net force is always derived by summing the map, never stored.
#[derive(Debug, Clone)]
pub struct DynamicBody {
    position: Vec2,
    velocity: Vec2,
    mass: f32,
    size: Vec2,
    forces: HashMap<String, Vec2>,
    impulse: Vec2,
    last_tick: Option<f64>,
    max_step: Option<f32>,
}

impl DynamicBody {
    /// Create a body at rest. Rejects non-positive or non-finite mass and
    /// size rather than letting NaN acceleration leak into the integrator.
    pub fn new(position: Vec2, size: Vec2, mass: f32) -> Result<Self, PhysicsError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(PhysicsError::InvalidMass(mass));
        }
        if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(PhysicsError::InvalidSize(size));
        }
        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            mass,
            size,
            forces: HashMap::new(),
            impulse: Vec2::ZERO,
            last_tick: None,
            max_step: None,
        })
    }

    /// Cap the elapsed time a single integration step may cover. Off by
    /// default: a host that pauses and resumes gets one correspondingly large
    /// step unless it opts into the clamp.
    pub fn with_max_step(mut self, max_step: f32) -> Self {
        self.max_step = Some(max_step);
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Set the mass, clamped to a small positive minimum. The clamp (rather
    /// than an error) suits the live path where mass is derived from an
    /// already-range-checked tunable.
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = if mass.is_finite() { mass.max(MIN_MASS) } else { self.mass };
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn set_size(&mut self, size: Vec2) {
        if size.is_finite() && size.x > 0.0 && size.y > 0.0 {
            self.size = size;
        }
    }

    /// Current bounds rectangle, centered on the position.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_center_size(self.position, self.size)
    }

    /// Hit test used for drag-claim eligibility.
    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds().contains(point)
    }

    /// Sum of all named forces. Derived on demand.
    pub fn net_force(&self) -> Vec2 {
        self.forces.values().fold(Vec2::ZERO, |acc, force| acc + *force)
    }

    /// Insert or overwrite the named force slot.
    pub fn apply_force(&mut self, id: impl Into<String>, force: Vec2) {
        self.forces.insert(id.into(), force);
    }

    /// Remove the named force slot; removing an absent id is a no-op.
    pub fn remove_force(&mut self, id: &str) {
        self.forces.remove(id);
    }

    /// Current value of a named force slot, if present.
    pub fn force(&self, id: &str) -> Option<Vec2> {
        self.forces.get(id).copied()
    }

    /// Add to the pending one-shot impulse; consumed by the next tick.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.impulse += impulse;
    }

    /// Hard reset: clear the impulse, clear all force slots, zero velocity.
    pub fn stop(&mut self) {
        self.impulse = Vec2::ZERO;
        self.forces.clear();
        self.velocity = Vec2::ZERO;
    }

    /// Integrate one frame at the given timestamp (seconds).
    ///
    /// Semi-implicit Euler: acceleration from the summed forces plus the
    /// impulse divided by mass, velocity first, then position with the new
    /// velocity. The first tick only records the timestamp (`dt = 0`), and a
    /// timestamp earlier than the last one is treated as `dt = 0` rather
    /// than rewinding.
    pub fn tick(&mut self, timestamp: f64) {
        let mut dt = match self.last_tick {
            Some(last) => (timestamp - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_tick = Some(timestamp);
        if let Some(max_step) = self.max_step {
            dt = dt.min(max_step);
        }

        let acceleration = (self.net_force() + self.impulse) / self.mass;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;

        self.impulse = Vec2::ZERO;
    }
}
