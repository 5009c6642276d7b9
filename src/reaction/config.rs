//! Reaction-diffusion parameters.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration for a [`ReactionDiffusion`](super::ReactionDiffusion) run.
///
/// Everything is fixed once the engine is constructed. Defaults produce the
/// mottled "continent" pattern used for planet surfaces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Diffusion rate of the substrate `a`.
    pub diffusion_a: f64,
    /// Diffusion rate of the reagent `b`. Usually smaller than `diffusion_a`.
    pub diffusion_b: f64,
    /// Rate at which substrate is replenished.
    pub feed: f64,
    /// Rate at which reagent is removed.
    pub kill: f64,
    /// Number of discrete update steps.
    pub iterations: u32,
    /// Probability (0.0-1.0) that a reagent blob is seeded on a step.
    pub seed_probability: f64,
    /// Exclusive upper bound for a seeded blob's radius, in cells.
    /// 0 disables seeding.
    pub max_blob_radius: u32,
}

impl ReactionConfig {
    /// Create a configuration for a `width x height` grid with default
    /// reaction parameters.
    ///
    /// Default values:
    /// - `diffusion_a`: 0.8
    /// - `diffusion_b`: 0.2
    /// - `feed`: 0.055
    /// - `kill`: 0.065
    /// - `iterations`: 300
    /// - `seed_probability`: 0.2
    /// - `max_blob_radius`: 20
    ///
    /// Dimensions are checked by [`validate`](Self::validate), not here.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            diffusion_a: 0.8,
            diffusion_b: 0.2,
            feed: 0.055,
            kill: 0.065,
            iterations: 300,
            seed_probability: 0.2,
            max_blob_radius: 20,
        }
    }

    /// Set both diffusion rates.
    pub fn with_diffusion(mut self, a: f64, b: f64) -> Self {
        self.diffusion_a = a;
        self.diffusion_b = b;
        self
    }

    /// Set the feed and kill rates.
    pub fn with_feed_kill(mut self, feed: f64, kill: f64) -> Self {
        self.feed = feed;
        self.kill = kill;
        self
    }

    /// Set the number of update steps.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the blob seeding probability and maximum radius.
    ///
    /// # Example
    ///
    /// ```
    /// use orrery::ReactionConfig;
    ///
    /// // Deterministic run: no stochastic seeding at all
    /// let config = ReactionConfig::new(64, 64).with_seeding(0.0, 0);
    /// assert!(!config.seeding_enabled());
    /// ```
    pub fn with_seeding(mut self, probability: f64, max_radius: u32) -> Self {
        self.seed_probability = probability;
        self.max_blob_radius = max_radius;
        self
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Length in bytes of the RGB output buffer.
    pub fn buffer_len(&self) -> usize {
        3 * self.cell_count()
    }

    /// Whether any step can seed a blob.
    pub fn seeding_enabled(&self) -> bool {
        self.seed_probability > 0.0 && self.max_blob_radius > 0
    }

    /// Check the configuration, rejecting values the engine cannot run with.
    ///
    /// Zero iterations is allowed and yields the initial state.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let rates = [
            ("diffusion_a", self.diffusion_a),
            ("diffusion_b", self.diffusion_b),
            ("feed", self.feed),
            ("kill", self.kill),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }

        if !(0.0..=1.0).contains(&self.seed_probability) {
            return Err(ConfigError::InvalidParameter {
                name: "seed_probability",
                value: self.seed_probability,
            });
        }

        Ok(())
    }
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self::new(200, 200)
    }
}
