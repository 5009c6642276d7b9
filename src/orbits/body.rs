use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A gravitating point mass.
///
/// Physical state is kept in SI units. `radius` is only used for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Optional label used in logs and configs.
    #[serde(default)]
    pub name: String,
    /// Mass in kilograms. Must be positive.
    pub mass: f64,
    /// Display radius in kilometres.
    #[serde(default)]
    pub radius: f64,
    /// Position in metres.
    pub position: DVec3,
    /// Velocity in metres per second.
    pub velocity: DVec3,
}

impl Body {
    /// Create an unnamed body.
    pub fn new(mass: f64, radius: f64, position: DVec3, velocity: DVec3) -> Self {
        Self {
            name: String::new(),
            mass,
            radius,
            position,
            velocity,
        }
    }

    /// Attach a label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn momentum(&self) -> DVec3 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        self.position.distance(other.position)
    }
}
