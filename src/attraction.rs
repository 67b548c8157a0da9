use std::collections::HashMap;

use log::debug;

use crate::behavior::Behavior;
use crate::body::DynamicBody;
use crate::gravity::GravityField;
use crate::input::{TouchEvent, TouchId, TouchSequence};
use crate::tunable::Tunables;

fn touch_force_id(id: TouchId) -> String {
    format!("touch-{}", id.0)
}

/// Multi-touch interaction over one body.
///
/// Every live touch spawns an ephemeral [`GravityField`] keyed by its id. At
/// most one touch, the first to land inside the body's bounds, becomes the
/// drag: it repositions the body directly, bypassing the force system, and
/// hands its release velocity to the body as a throw when it lifts. The
/// scene's ambient field is switched off while any touch or drag is live.
///
/// Touch delivery is externally driven and may race with detachment, so a
/// move or end for an unknown id is silently ignored.
pub struct TouchAttraction {
    active: bool,
    drag_touch: Option<TouchId>,
    touches: HashMap<TouchId, TouchSequence>,
    fields: HashMap<TouchId, GravityField>,
}

impl TouchAttraction {
    pub fn new() -> Self {
        Self {
            active: true,
            drag_touch: None,
            touches: HashMap::new(),
            fields: HashMap::new(),
        }
    }

    /// The touch currently dragging the body, if any.
    pub fn drag_touch(&self) -> Option<TouchId> {
        self.drag_touch
    }

    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// Route one host touch callback.
    pub fn handle_event(
        &mut self,
        event: TouchEvent,
        body: &mut DynamicBody,
        ambient: &mut GravityField,
    ) {
        match event {
            TouchEvent::Began(sequence) => self.touch_began(sequence, body, ambient),
            TouchEvent::Moved(sequence) => self.touch_moved(sequence, body, ambient),
            TouchEvent::Ended(sequence) => self.touch_ended(sequence, body, ambient),
        }
    }

    /// A new touch landed: spawn its gravity field at the touch position and
    /// claim the drag if none is held and the touch is on the body.
    pub fn touch_began(
        &mut self,
        sequence: TouchSequence,
        body: &mut DynamicBody,
        ambient: &mut GravityField,
    ) {
        if !self.active {
            return;
        }
        let id = sequence.id;
        let position = sequence.current.position;

        self.fields
            .insert(id, GravityField::new(touch_force_id(id), position));
        self.touches.insert(id, sequence);

        if self.drag_touch.is_none() && body.contains(position) {
            debug!("touch {:?} claims drag at {}", id, position);
            self.drag_touch = Some(id);
        }

        self.update(body, ambient);
    }

    /// A known touch moved. The drag touch repositions the body by the
    /// sample delta directly; every other touch just refreshes its sequence.
    pub fn touch_moved(
        &mut self,
        sequence: TouchSequence,
        body: &mut DynamicBody,
        ambient: &mut GravityField,
    ) {
        if !self.active {
            return;
        }
        let id = sequence.id;
        if !self.touches.contains_key(&id) {
            return;
        }

        if self.drag_touch == Some(id) {
            // Repositions instead of forcing: the user is holding the body.
            body.set_position(body.position() + sequence.delta());
        }
        self.touches.insert(id, sequence);

        self.update(body, ambient);
    }

    /// A touch lifted: discard its field (clearing its force slot at once)
    /// and, if it was the drag, throw the body with its release velocity.
    ///
    /// Processed even while the behavior is switched off, so a mid-gesture
    /// deactivation never leaks live touch state.
    pub fn touch_ended(
        &mut self,
        sequence: TouchSequence,
        body: &mut DynamicBody,
        ambient: &mut GravityField,
    ) {
        let id = sequence.id;

        if let Some(mut field) = self.fields.remove(&id) {
            field.deactivate(body);
        }
        self.touches.remove(&id);

        if self.drag_touch == Some(id) {
            let velocity = sequence.release_velocity();
            debug!("touch {:?} throws at {}", id, velocity);
            body.set_velocity(velocity);
            self.drag_touch = None;
        }

        self.update(body, ambient);
    }

    /// Arbitration pass: recompute which fields pull from the full current
    /// state. Idempotent, so it is re-run after every event and once per
    /// frame; the per-frame run keeps fields tracking fingers that are down
    /// but not firing move events.
    pub fn update(&mut self, body: &mut DynamicBody, ambient: &mut GravityField) {
        if self.drag_touch.is_some() {
            ambient.deactivate(body);
            for field in self.fields.values_mut() {
                field.deactivate(body);
            }
        } else if self.touches.is_empty() {
            ambient.set_active(true);
        } else {
            ambient.deactivate(body);
            for (id, sequence) in &self.touches {
                if let Some(field) = self.fields.get_mut(id) {
                    field.set_active(true);
                    field.set_target(sequence.current.position);
                }
            }
        }
    }

    /// Per-frame evaluation of every ephemeral field.
    pub fn step_fields(&mut self, body: &mut DynamicBody, params: &Tunables) {
        for field in self.fields.values_mut() {
            field.step(body, params);
        }
    }
}

impl Behavior for TouchAttraction {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl Default for TouchAttraction {
    fn default() -> Self {
        Self::new()
    }
}
