//! Direct N-body gravity with a synchronized explicit integrator.
//!
//! A [`BodySystem`] owns an ordered list of [`Body`] values. Each tick first
//! accumulates every velocity change from the positions at the start of the
//! tick, then moves every body. Because no body moves until all forces are
//! known, the result does not depend on iteration order.
//!
//! # Example
//!
//! ```
//! use orrery::orbits::{Body, BodySystem};
//! use glam::DVec3;
//!
//! let mut system = BodySystem::new();
//! system.add_body(Body::new(1.989e30, 6.95e5, DVec3::ZERO, DVec3::ZERO)).unwrap();
//! system
//!     .add_body(Body::new(5.974e24, 6.371e3, DVec3::new(1.496e11, 0.0, 0.0), DVec3::new(0.0, 1.49e4, 0.0)))
//!     .unwrap();
//!
//! system.tick(2500.0);
//! assert!(system.bodies()[1].position.y > 0.0);
//! ```

mod body;
pub mod presets;
mod system;

pub use body::Body;
pub use system::{BodySystem, DEFAULT_DISPLAY_SCALE, DEFAULT_MAX_BODIES, DEFAULT_TIME_STEP};

use glam::DVec3;

/// Gravitational constant in m³ kg⁻¹ s⁻².
pub const G: f64 = 6.67e-11;

/// Gravitational force exerted on `body` by `other`, in newtons.
///
/// Points from `body` towards `other` with magnitude `G·m₁·m₂/d²`.
/// Coincident bodies exert no force on each other.
pub fn compute_force(body: &Body, other: &Body) -> DVec3 {
    let offset = other.position - body.position;
    let d2 = offset.length_squared();
    if d2 == 0.0 {
        return DVec3::ZERO;
    }
    let magnitude = G * body.mass * other.mass / d2;
    offset * (magnitude / d2.sqrt())
}
