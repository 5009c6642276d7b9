//! # Orrery - Planet textures and orbital motion
//!
//! CPU-side simulation core for a procedural planet viewer: a Gray-Scott
//! reaction-diffusion generator for surface textures, and a direct N-body
//! gravity system for the orbit view.
//!
//! Orrery owns the numbers. Meshes, shaders and windows belong to whatever
//! renderer consumes the textures, uniforms and positions produced here.
//!
//! ## Quick Start
//!
//! ```
//! use orrery::prelude::*;
//!
//! // Surface texture
//! let config = ReactionConfig::new(32, 32).with_iterations(20);
//! let texture = orrery::reaction::generate(&config).unwrap();
//! assert_eq!(texture.data.len(), 3 * 32 * 32);
//!
//! // Orbits
//! let mut system = orrery::orbits::presets::solar_system();
//! system.advance(10);
//! let positions = system.display_positions();
//! assert_eq!(positions.len(), 5);
//! ```
//!
//! ## Core Concepts
//!
//! ### Reaction-diffusion
//!
//! [`ReactionDiffusion`] runs two chemical concentrations `a` and `b` on a
//! fixed grid for a configured number of steps. Each step may seed a
//! random disc of reagent, then applies the Gray-Scott update using a
//! nine-point Laplacian. Border cells never diffuse. The result is an RGB
//! buffer where each channel is `floor((a - b) * 255)`.
//!
//! ### Body systems
//!
//! [`BodySystem`] holds point masses in SI units. A tick computes every
//! velocity change from the positions at the start of the tick, then moves
//! every body, so the result is independent of body order. Positions are
//! divided by a display scale before they reach the renderer.
//!
//! ### Planet surfaces
//!
//! [`PlanetSurface`] holds appearance parameters and implements
//! [`Tunable`] so a UI can drive any body's controls from descriptors.
//! [`Gradient`] builds the elevation color ramp.
//!
//! ### Scenes
//!
//! [`SceneConfig`] bundles everything above into one JSON document with
//! defaults for every field.

pub mod config;
pub mod error;
pub mod gradient;
pub mod orbits;
pub mod planet;
pub mod reaction;
pub mod textures;
pub mod time;
pub mod uniforms;

pub use bytemuck;
pub use config::{BodyConfig, OrbitConfig, SceneConfig};
pub use error::{ConfigError, SystemError, TextureError};
pub use glam::{DVec3, Vec2, Vec3};
pub use gradient::Gradient;
pub use orbits::{compute_force, Body, BodySystem};
pub use planet::{ParameterSpec, PlanetSurface, Tunable};
pub use reaction::{ReactionConfig, ReactionDiffusion};
pub use textures::{PixelFormat, TextureData};
pub use time::Clock;
pub use uniforms::{MaterialUniforms, UniformValue};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```
/// use orrery::prelude::*;
/// ```
///
/// This imports:
/// - [`ReactionDiffusion`] and [`ReactionConfig`] - texture generation
/// - [`Body`] and [`BodySystem`] - orbital simulation
/// - [`PlanetSurface`], [`Tunable`] and [`Gradient`] - appearance
/// - [`SceneConfig`] - JSON scene documents
/// - [`Clock`] - frame timing
/// - [`DVec3`], [`Vec2`], [`Vec3`] - glam vector types
pub mod prelude {
    pub use crate::config::{BodyConfig, OrbitConfig, SceneConfig};
    pub use crate::error::{ConfigError, SystemError, TextureError};
    pub use crate::gradient::Gradient;
    pub use crate::orbits::{compute_force, Body, BodySystem};
    pub use crate::planet::{PlanetSurface, Tunable};
    pub use crate::reaction::{ReactionConfig, ReactionDiffusion};
    pub use crate::textures::TextureData;
    pub use crate::time::Clock;
    pub use crate::{DVec3, Vec2, Vec3};
}
