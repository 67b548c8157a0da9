//! Touch-driven 2D attraction physics.
//!
//! Bodies accumulate named forces and integrate velocity and position every
//! frame. Behaviors steer them: a [`GravityField`] pulls a body toward a
//! point with a spring-like force plus velocity-proportional friction, and
//! [`TouchAttraction`] turns every finger into a transient field, lets the
//! first finger landing on the body drag it directly, and throws it with the
//! finger's release velocity.
//!
//! The crate is pure simulation. The host supplies the frame clock (calling
//! [`Scene::tick`] with a timestamp), the touch events (feeding
//! [`Scene::handle_touch`]), any live parameter controls (through
//! [`Tunables`]), and all rendering.
//!
//! ```
//! use glam::Vec2;
//! use touchpull::{Bounds, Scene, TouchEvent, TouchId, TouchSample, TouchSequence};
//!
//! let mut scene = Scene::new(Bounds::new(Vec2::ZERO, Vec2::new(800.0, 600.0))).unwrap();
//!
//! // A finger lands away from the body; its gravity field starts pulling.
//! let touch = TouchSequence::new(TouchId(1), TouchSample::new(Vec2::new(700.0, 100.0), 0.0));
//! scene.handle_touch(TouchEvent::Began(touch));
//!
//! for frame in 0..60 {
//!     scene.tick(frame as f64 / 60.0);
//! }
//! ```

pub mod attraction;
pub mod behavior;
pub mod body;
pub mod bounds;
pub mod error;
pub mod gravity;
pub mod input;
pub mod scene;
pub mod tunable;

pub use attraction::TouchAttraction;
pub use behavior::Behavior;
pub use body::DynamicBody;
pub use bounds::Bounds;
pub use error::PhysicsError;
pub use gravity::GravityField;
pub use input::{TouchEvent, TouchId, TouchSample, TouchSequence};
pub use scene::{Scene, AMBIENT_FORCE_ID};
pub use tunable::{Tunable, Tunables, FRICTION, GRAVITY, SIZE};
