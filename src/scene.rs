use glam::Vec2;
use log::debug;

use crate::attraction::TouchAttraction;
use crate::body::DynamicBody;
use crate::bounds::Bounds;
use crate::error::PhysicsError;
use crate::gravity::GravityField;
use crate::input::TouchEvent;
use crate::tunable::{Tunables, FRICTION, GRAVITY, SIZE};

/// Force slot owned by the scene's long-lived ambient field.
pub const AMBIENT_FORCE_ID: &str = "ambient";

const DEFAULT_GRAVITY: f32 = 100.0;
const DEFAULT_FRICTION: f32 = 10.0;
const DEFAULT_SIZE: f32 = 100.0;
/// A body `1 / MASS_PER_SIZE` units across weighs one unit, so the big
/// circle is the heavy, slow one.
const MASS_PER_SIZE: f32 = 1.0 / 100.0;

/// Wires one body, the ambient gravity field, and touch attraction together
/// and drives them through a single ordered pass per frame.
///
/// The ambient field lives here; [`TouchAttraction`] only flips its activity
/// and never owns it. Frame order matters: arbitration first, then every
/// field writes its force, then the body integrates, so no force write is
/// missed or double-counted within a frame.
pub struct Scene {
    bounds: Bounds,
    tunables: Tunables,
    body: DynamicBody,
    ambient: GravityField,
    attraction: TouchAttraction,
}

impl Scene {
    /// Build the default scene: one body resting at the center of `bounds`,
    /// pulled back there by the ambient field whenever nothing is touching.
    pub fn new(bounds: Bounds) -> Result<Self, PhysicsError> {
        let mut tunables = Tunables::new();
        tunables.define(GRAVITY, DEFAULT_GRAVITY, 0.0, 10_000.0);
        tunables.define(FRICTION, DEFAULT_FRICTION, 0.0, 10_000.0);
        tunables.define(SIZE, DEFAULT_SIZE, 44.0, 512.0);

        let center = bounds.center();
        let body = DynamicBody::new(
            center,
            Vec2::splat(DEFAULT_SIZE),
            DEFAULT_SIZE * MASS_PER_SIZE,
        )?;
        let ambient = GravityField::new(AMBIENT_FORCE_ID, center);

        debug!("scene assembled, rest point {}", center);
        Ok(Self {
            bounds,
            tunables,
            body,
            ambient,
            attraction: TouchAttraction::new(),
        })
    }

    /// Route one host touch callback into the attraction behavior.
    pub fn handle_touch(&mut self, event: TouchEvent) {
        self.attraction
            .handle_event(event, &mut self.body, &mut self.ambient);
    }

    /// One frame at the given timestamp (seconds): refresh the tunable-driven
    /// body size and mass, re-run arbitration so fields track current finger
    /// positions, evaluate every field, then integrate the body.
    pub fn tick(&mut self, timestamp: f64) {
        let size = self.tunables.get_or(SIZE, DEFAULT_SIZE);
        self.body.set_size(Vec2::splat(size));
        self.body.set_mass(size * MASS_PER_SIZE);

        self.attraction.update(&mut self.body, &mut self.ambient);
        self.ambient.step(&mut self.body, &self.tunables);
        self.attraction.step_fields(&mut self.body, &self.tunables);
        self.body.tick(timestamp);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn body(&self) -> &DynamicBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut DynamicBody {
        &mut self.body
    }

    pub fn ambient(&self) -> &GravityField {
        &self.ambient
    }

    pub fn attraction(&self) -> &TouchAttraction {
        &self.attraction
    }

    pub fn attraction_mut(&mut self) -> &mut TouchAttraction {
        &mut self.attraction
    }

    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    pub fn tunables_mut(&mut self) -> &mut Tunables {
        &mut self.tunables
    }
}
