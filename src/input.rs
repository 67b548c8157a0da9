//! Touch-source interface types.
//!
//! The host's event dispatch owns hit testing and delivery; this crate only
//! consumes the sequences it hands over. A sequence is one finger's
//! continuous contact: a stable id, the current sample, and the previous one.

use glam::Vec2;

/// Stable identifier for one finger's contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TouchId(pub u64);

/// One sample of a touch: where it is and, when the platform provides it,
/// how fast it is moving.
#[derive(Debug, Clone, Copy)]
pub struct TouchSample {
    pub position: Vec2,
    /// Seconds, on the same clock as frame ticks.
    pub timestamp: f64,
    pub velocity: Option<Vec2>,
}

impl TouchSample {
    pub fn new(position: Vec2, timestamp: f64) -> Self {
        Self {
            position,
            timestamp,
            velocity: None,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = Some(velocity);
        self
    }
}

/// One finger's continuous contact.
#[derive(Debug, Clone)]
pub struct TouchSequence {
    pub id: TouchId,
    pub current: TouchSample,
    pub previous: Option<TouchSample>,
}

impl TouchSequence {
    pub fn new(id: TouchId, sample: TouchSample) -> Self {
        Self {
            id,
            current: sample,
            previous: None,
        }
    }

    /// Shift the current sample into history and adopt a new one.
    pub fn advanced(mut self, sample: TouchSample) -> Self {
        self.previous = Some(self.current);
        self.current = sample;
        self
    }

    /// Displacement since the previous sample; zero when there is none.
    pub fn delta(&self) -> Vec2 {
        match self.previous {
            Some(previous) => self.current.position - previous.position,
            None => Vec2::ZERO,
        }
    }

    /// Instantaneous velocity at release: the platform-reported value when
    /// present, otherwise a finite difference over the last two samples,
    /// otherwise zero.
    pub fn release_velocity(&self) -> Vec2 {
        if let Some(velocity) = self.current.velocity {
            return velocity;
        }
        match self.previous {
            Some(previous) => {
                let dt = (self.current.timestamp - previous.timestamp) as f32;
                if dt > 0.0 {
                    (self.current.position - previous.position) / dt
                } else {
                    Vec2::ZERO
                }
            }
            None => Vec2::ZERO,
        }
    }
}

/// Touch callbacks delivered by the host's event dispatch.
#[derive(Debug, Clone)]
pub enum TouchEvent {
    Began(TouchSequence),
    Moved(TouchSequence),
    Ended(TouchSequence),
}
