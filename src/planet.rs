//! Planet surface and cloud appearance parameters.
//!
//! A [`PlanetSurface`] holds the values a user tweaks with sliders and the
//! quantities derived from them. It exposes its tunable values through the
//! [`Tunable`] trait so a UI layer can build controls from the descriptors
//! instead of hard-coding them per planet.
//!
//! # Example
//!
//! ```
//! use orrery::planet::{PlanetSurface, Tunable};
//!
//! let mut surface = PlanetSurface::default();
//! surface.set("amplitude", 30.0).unwrap();
//! surface.set("radius", 40.0).unwrap();
//!
//! // Terrain never rises more than half the radius
//! assert_eq!(surface.effective_amplitude(), 20.0);
//! assert!((surface.cloud_radius() - 53.0).abs() < 1e-4);
//! ```

use crate::error::ConfigError;
use crate::gradient::{self, Gradient};
use crate::uniforms::MaterialUniforms;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Name and inclusive range of one tunable value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
}

impl ParameterSpec {
    pub const fn new(name: &'static str, min: f32, max: f32) -> Self {
        Self { name, min, max }
    }

    /// Clamp `value` into this parameter's range.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Something that exposes named, range-limited numeric parameters.
pub trait Tunable {
    /// Descriptors for every tunable value, in display order.
    fn parameters(&self) -> &'static [ParameterSpec];

    /// Current value of a parameter.
    fn get(&self, name: &str) -> Option<f32>;

    /// Set a parameter, clamping into its range.
    ///
    /// Returns [`ConfigError::UnknownParameter`] for names not listed in
    /// [`parameters`](Self::parameters), and [`ConfigError::InvalidParameter`]
    /// for NaN.
    fn set(&mut self, name: &str, value: f32) -> Result<(), ConfigError>;

    /// Descriptor for `name`, if exposed.
    fn spec(&self, name: &str) -> Option<&'static ParameterSpec> {
        self.parameters().iter().find(|p| p.name == name)
    }
}

const PLANET_PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec::new("radius", 20.0, 100.0),
    ParameterSpec::new("noise_reaction_balance", 0.0, 1.0),
    ParameterSpec::new("amplitude", 0.0, 30.0),
    ParameterSpec::new("cloud_density", 0.0, 1.0),
    ParameterSpec::new("cloud_speed", 0.0, 2.0),
];

/// Appearance of one planet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetSurface {
    /// Sphere radius in render units.
    pub radius: f32,
    /// Requested terrain displacement. See [`effective_amplitude`](Self::effective_amplitude).
    pub amplitude: f32,
    /// Blend between procedural noise (0.0) and the reaction texture (1.0).
    pub noise_reaction_balance: f32,
    pub cloud_visibility: bool,
    pub cloud_density: f32,
    pub cloud_speed: f32,
    /// `#rrggbb`
    pub cloud_color: String,
    /// Elevation gradient stops as `#rrggbb`, lowest first.
    pub colors: Vec<String>,
}

impl PlanetSurface {
    /// Terrain displacement, capped at half the radius.
    pub fn effective_amplitude(&self) -> f32 {
        self.amplitude.min(self.radius * 0.5)
    }

    /// Radius of the cloud shell, just above the highest terrain.
    pub fn cloud_radius(&self) -> f32 {
        self.radius + self.effective_amplitude() * 0.65
    }

    /// Elevation gradient built from [`colors`](Self::colors).
    pub fn gradient(&self) -> Result<Gradient, ConfigError> {
        Gradient::from_hex(&self.colors)
    }

    /// Cloud color as linear 0-1 RGB.
    pub fn cloud_rgb(&self) -> Result<Vec3, ConfigError> {
        let [r, g, b] = gradient::parse_hex(&self.cloud_color)?;
        Ok(Vec3::new(r as f32, g as f32, b as f32) / 255.0)
    }

    /// Uniforms for the planet surface material.
    pub fn planet_uniforms(&self) -> MaterialUniforms {
        MaterialUniforms::new("planet")
            .with("amplitude", self.effective_amplitude())
            .with("noise_reaction_balance", self.noise_reaction_balance)
    }

    /// Uniforms for the cloud material at animation time `time`.
    ///
    /// Only `time` changes between frames; update it with
    /// [`MaterialUniforms::set`].
    pub fn cloud_uniforms(&self, time: f32) -> Result<MaterialUniforms, ConfigError> {
        Ok(MaterialUniforms::new("clouds")
            .with("time", time)
            .with("cloud_density", self.cloud_density)
            .with("cloud_speed", self.cloud_speed)
            .with("cloud_color", self.cloud_rgb()?))
    }

    /// Check color strings and numeric ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gradient()?;
        self.cloud_rgb()?;
        for spec in PLANET_PARAMETERS {
            if let Some(value) = self.get(spec.name) {
                if !(spec.min..=spec.max).contains(&value) {
                    return Err(ConfigError::InvalidParameter {
                        name: spec.name,
                        value: value as f64,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for PlanetSurface {
    fn default() -> Self {
        Self {
            radius: 50.0,
            amplitude: 20.0,
            noise_reaction_balance: 0.45,
            cloud_visibility: true,
            cloud_density: 0.5,
            cloud_speed: 0.3,
            cloud_color: "#ffffff".to_string(),
            colors: gradient::PLANET_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Tunable for PlanetSurface {
    fn parameters(&self) -> &'static [ParameterSpec] {
        PLANET_PARAMETERS
    }

    fn get(&self, name: &str) -> Option<f32> {
        match name {
            "radius" => Some(self.radius),
            "noise_reaction_balance" => Some(self.noise_reaction_balance),
            "amplitude" => Some(self.amplitude),
            "cloud_density" => Some(self.cloud_density),
            "cloud_speed" => Some(self.cloud_speed),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: f32) -> Result<(), ConfigError> {
        let spec = self
            .spec(name)
            .ok_or_else(|| ConfigError::UnknownParameter(name.to_string()))?;
        if value.is_nan() {
            return Err(ConfigError::InvalidParameter {
                name: spec.name,
                value: value as f64,
            });
        }
        let value = spec.clamp(value);
        let slot = match spec.name {
            "radius" => &mut self.radius,
            "noise_reaction_balance" => &mut self.noise_reaction_balance,
            "amplitude" => &mut self.amplitude,
            "cloud_density" => &mut self.cloud_density,
            _ => &mut self.cloud_speed,
        };
        *slot = value;
        log::trace!("Planet parameter {} = {}", spec.name, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniforms::UniformValue;

    #[test]
    fn test_defaults() {
        let surface = PlanetSurface::default();
        assert_eq!(surface.radius, 50.0);
        assert_eq!(surface.effective_amplitude(), 20.0);
        assert!((surface.cloud_radius() - 63.0).abs() < 1e-4);
        assert!(surface.validate().is_ok());
        assert_eq!(surface.gradient().unwrap(), Gradient::planet_default());
    }

    #[test]
    fn test_amplitude_capped_at_half_radius() {
        let surface = PlanetSurface {
            radius: 20.0,
            amplitude: 30.0,
            ..Default::default()
        };
        assert_eq!(surface.effective_amplitude(), 10.0);
        assert!((surface.cloud_radius() - 26.5).abs() < 1e-4);
    }

    #[test]
    fn test_set_clamps_to_range() {
        let mut surface = PlanetSurface::default();
        surface.set("radius", 500.0).unwrap();
        assert_eq!(surface.radius, 100.0);
        surface.set("cloud_speed", -1.0).unwrap();
        assert_eq!(surface.cloud_speed, 0.0);
        assert_eq!(surface.get("cloud_speed"), Some(0.0));
    }

    #[test]
    fn test_set_rejects_unknown_and_nan() {
        let mut surface = PlanetSurface::default();
        assert!(matches!(
            surface.set("gravity", 1.0),
            Err(ConfigError::UnknownParameter(name)) if name == "gravity"
        ));
        assert!(surface.set("amplitude", f32::NAN).is_err());
        assert_eq!(surface.amplitude, 20.0);
    }

    #[test]
    fn test_every_parameter_is_readable() {
        let surface = PlanetSurface::default();
        for spec in surface.parameters() {
            assert!(surface.get(spec.name).is_some(), "{} not readable", spec.name);
        }
    }

    #[test]
    fn test_uniforms() {
        let surface = PlanetSurface::default();
        let planet = surface.planet_uniforms();
        assert_eq!(planet.get("amplitude"), Some(UniformValue::F32(20.0)));
        assert_eq!(planet.to_std140().len(), 16);

        let clouds = surface.cloud_uniforms(1.5).unwrap();
        assert_eq!(clouds.get("time"), Some(UniformValue::F32(1.5)));
        assert_eq!(clouds.get("cloud_color"), Some(UniformValue::Vec3(Vec3::ONE)));
        // time, density, speed share the first 16 bytes; color starts a new slot
        assert_eq!(clouds.to_std140().len(), 32);
    }

    #[test]
    fn test_validate_rejects_bad_color() {
        let surface = PlanetSurface {
            cloud_color: "white".into(),
            ..Default::default()
        };
        assert!(matches!(surface.validate(), Err(ConfigError::InvalidColor(_))));
    }
}
