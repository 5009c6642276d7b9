//! Scene configuration loaded from JSON.
//!
//! A scene bundles everything needed to produce one planet view:
//!
//! - [`ReactionConfig`] – reaction-diffusion texture parameters
//! - [`PlanetSurface`]  – surface and cloud appearance
//! - [`OrbitConfig`]    – the body system driving the orbit view
//!
//! Every field has a default, so a partial document only overrides what it
//! names:
//!
//! ```json
//! {
//!   "reaction": { "width": 128, "height": 128, "iterations": 400 },
//!   "orbits": {
//!     "time_step": 1000.0,
//!     "bodies": [
//!       { "name": "sun",   "mass": 1.989e30, "radius": 6.95e5,
//!         "position": [0.0, 0.0, 0.0], "velocity": [0.0, 0.0, 0.0] },
//!       { "name": "earth", "mass": 5.974e24, "radius": 6.371e3,
//!         "position": [1.496e11, 0.0, 0.0], "velocity": [0.0, 1.49e4, 0.0] }
//!     ]
//!   }
//! }
//! ```

use crate::error::{ConfigError, SystemError};
use crate::orbits::{presets, Body, BodySystem, DEFAULT_DISPLAY_SCALE, DEFAULT_MAX_BODIES, DEFAULT_TIME_STEP};
use crate::planet::PlanetSurface;
use crate::reaction::ReactionConfig;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial state of one body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: String,
    /// kg
    pub mass: f64,
    /// km, display only
    #[serde(default)]
    pub radius: f64,
    /// m
    pub position: [f64; 3],
    /// m/s
    #[serde(default)]
    pub velocity: [f64; 3],
}

impl From<&BodyConfig> for Body {
    fn from(c: &BodyConfig) -> Self {
        Body::new(c.mass, c.radius, DVec3::from_array(c.position), DVec3::from_array(c.velocity))
            .with_name(c.name.clone())
    }
}

impl From<&Body> for BodyConfig {
    fn from(b: &Body) -> Self {
        Self {
            name: b.name.clone(),
            mass: b.mass,
            radius: b.radius,
            position: b.position.to_array(),
            velocity: b.velocity.to_array(),
        }
    }
}

/// Parameters of the gravitational body system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Seconds per tick.
    pub time_step: f64,
    /// Metres per render unit.
    pub display_scale: f64,
    pub max_bodies: usize,
    pub bodies: Vec<BodyConfig>,
}

impl OrbitConfig {
    /// Build a ready-to-tick system.
    ///
    /// Fails if there are no bodies, too many bodies, or a non-positive mass.
    pub fn build(&self) -> Result<BodySystem, SystemError> {
        if self.bodies.is_empty() {
            return Err(SystemError::Empty);
        }
        let mut system = BodySystem::new()
            .with_time_step(self.time_step)
            .with_display_scale(self.display_scale)
            .with_max_bodies(self.max_bodies);
        for body in &self.bodies {
            system.add_body(body.into())?;
        }
        log::info!("Built body system with {} bodies", system.len());
        Ok(system)
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            display_scale: DEFAULT_DISPLAY_SCALE,
            max_bodies: DEFAULT_MAX_BODIES,
            bodies: presets::inner_planets().iter().map(BodyConfig::from).collect(),
        }
    }
}

/// Top-level scene document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub reaction: ReactionConfig,
    pub planet: PlanetSurface,
    pub orbits: OrbitConfig,
}

impl SceneConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded scene config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Validate the reaction and planet sections.
    ///
    /// Orbit problems surface from [`OrbitConfig::build`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reaction.validate()?;
        self.planet.validate()?;
        Ok(())
    }
}
