//! Gray-Scott reaction-diffusion on a 2D grid.
//!
//! The engine produces a grayscale texture by simulating two chemicals:
//! a substrate `a` that is fed into the grid and a reagent `b` that consumes
//! it. Random "blobs" of reagent are injected while the simulation runs, so
//! repeated runs give structurally similar but never identical fields.
//!
//! # Example
//!
//! ```
//! use orrery::reaction::{ReactionConfig, ReactionDiffusion};
//!
//! let config = ReactionConfig::new(32, 32).with_iterations(10);
//! let buffer = ReactionDiffusion::new(config).unwrap().run();
//! assert_eq!(buffer.len(), 3 * 32 * 32);
//! ```
//!
//! # Boundary Policy
//!
//! The Laplacian of a cell is exactly zero whenever its 3x3 stencil leaves
//! the grid. Border cells still react, but they never diffuse.

mod config;
mod grid;

pub use config::ReactionConfig;
pub use grid::{Cell, Grid, Species};

use crate::error::ConfigError;
use crate::textures::TextureData;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};

/// Double-buffered Gray-Scott simulator.
///
/// Construct with [`new`](Self::new), then either drive it step by step or
/// consume it with one of the `run` methods.
#[derive(Debug, Clone)]
pub struct ReactionDiffusion {
    config: ReactionConfig,
    current: Grid,
    scratch: Grid,
    steps: u32,
}

impl ReactionDiffusion {
    /// Create an engine with every cell at `a = 1, b = 0`.
    ///
    /// Fails if the configuration does not [`validate`](ReactionConfig::validate).
    pub fn new(config: ReactionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let current = Grid::new(config.width, config.height);
        let scratch = current.clone();
        Ok(Self {
            config,
            current,
            scratch,
            steps: 0,
        })
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &ReactionConfig {
        &self.config
    }

    /// The current concentration grid.
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Number of steps applied so far.
    pub fn steps_taken(&self) -> u32 {
        self.steps
    }

    /// Discrete Laplacian of `species` at `(x, y)` on the current grid.
    pub fn laplacian(&self, x: u32, y: u32, species: Species) -> f64 {
        self.current.laplacian(x, y, species)
    }

    /// Inject reagent (`b = 1`) in a disc around `(px, py)`.
    ///
    /// Returns the number of cells touched.
    pub fn seed_blob(&mut self, px: u32, py: u32, radius: u32) -> usize {
        let seeded = self.current.seed_blob(px, py, radius);
        log::trace!("Seeded blob at ({}, {}) r={} covering {} cells", px, py, radius, seeded);
        seeded
    }

    /// Run one full step: maybe seed a blob, then react and diffuse.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.config.seeding_enabled() && rng.gen_bool(self.config.seed_probability) {
            let px = rng.gen_range(0..self.config.width);
            let py = rng.gen_range(0..self.config.height);
            let r = rng.gen_range(0..self.config.max_blob_radius);
            self.seed_blob(px, py, r);
        }
        self.react();
    }

    /// Apply one Gray-Scott update from `current` into `scratch`, then swap.
    ///
    /// No blob seeding happens here.
    pub fn react(&mut self) {
        let ReactionConfig {
            diffusion_a: da,
            diffusion_b: db,
            feed,
            kill,
            ..
        } = self.config;

        let width = self.current.width();
        let height = self.current.height();
        let source = &self.current;
        let target = self.scratch.cells_mut();

        let mut i = 0;
        for x in 0..width {
            for y in 0..height {
                let Cell { a, b } = source.cells()[i];
                let reaction = a * b * b;
                target[i] = Cell {
                    a: (a + da * source.laplacian(x, y, Species::A) - reaction + feed * (1.0 - a))
                        .clamp(0.0, 1.0),
                    b: (b + db * source.laplacian(x, y, Species::B) + reaction - (kill + feed) * b)
                        .clamp(0.0, 1.0),
                };
                i += 1;
            }
        }

        std::mem::swap(&mut self.current, &mut self.scratch);
        self.steps += 1;
    }

    /// Grayscale RGB bytes for the current grid.
    pub fn to_buffer(&self) -> Vec<u8> {
        self.current.to_rgb()
    }

    /// Wrap the current grid as an RGB [`TextureData`].
    ///
    /// The buffer is column-major, so each grid column becomes one image
    /// row: the texture is `height` pixels wide and `width` pixels tall.
    pub fn into_texture(self) -> TextureData {
        TextureData {
            data: self.current.to_rgb(),
            width: self.config.height,
            height: self.config.width,
            format: crate::textures::PixelFormat::Rgb8,
        }
    }

    /// Run all configured iterations with the thread-local RNG and return
    /// the output buffer.
    pub fn run(self) -> Vec<u8> {
        self.run_with_rng(&mut rand::thread_rng())
    }

    /// Run all configured iterations with the given RNG.
    ///
    /// Use a seeded RNG for reproducible output.
    pub fn run_with_rng<R: Rng + ?Sized>(mut self, rng: &mut R) -> Vec<u8> {
        self.run_steps(rng, None);
        self.to_buffer()
    }

    /// Run all configured iterations, checking `cancel` between steps.
    ///
    /// The flag is read before each step starts. Returns `None` if it is set
    /// at one of those checks; a flag raised during the final step, or a run
    /// with zero iterations, still yields `Some`.
    ///
    /// # Example
    ///
    /// ```
    /// use orrery::reaction::{ReactionConfig, ReactionDiffusion};
    /// use std::sync::atomic::AtomicBool;
    ///
    /// let cancel = AtomicBool::new(true);
    /// let engine = ReactionDiffusion::new(ReactionConfig::new(8, 8)).unwrap();
    /// assert!(engine.run_cancellable(&mut rand::thread_rng(), &cancel).is_none());
    /// ```
    pub fn run_cancellable<R: Rng + ?Sized>(mut self, rng: &mut R, cancel: &AtomicBool) -> Option<Vec<u8>> {
        if self.run_steps(rng, Some(cancel)) {
            Some(self.to_buffer())
        } else {
            None
        }
    }

    /// Returns `false` if cancelled.
    fn run_steps<R: Rng + ?Sized>(&mut self, rng: &mut R, cancel: Option<&AtomicBool>) -> bool {
        log::debug!(
            "Reaction-diffusion: {}x{} grid, {} iterations",
            self.config.width,
            self.config.height,
            self.config.iterations
        );

        for _ in 0..self.config.iterations {
            if cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
                log::debug!("Reaction-diffusion cancelled after {} steps", self.steps);
                return false;
            }
            self.step(rng);
        }

        log::debug!("Reaction-diffusion finished after {} steps", self.steps);
        true
    }
}

/// Validate `config`, run it to completion and return the texture.
pub fn generate(config: &ReactionConfig) -> Result<TextureData, ConfigError> {
    let mut engine = ReactionDiffusion::new(config.clone())?;
    engine.run_steps(&mut rand::thread_rng(), None);
    Ok(engine.into_texture())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_config() -> ReactionConfig {
        ReactionConfig::new(12, 10).with_iterations(25).with_seeding(0.5, 5)
    }

    #[test]
    fn test_new_rejects_zero_width() {
        let result = ReactionDiffusion::new(ReactionConfig::new(0, 4));
        assert!(matches!(result, Err(ConfigError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_buffer_shape() {
        for iterations in [0, 1, 7] {
            let config = small_config().with_iterations(iterations);
            let buffer = ReactionDiffusion::new(config).unwrap().run();
            assert_eq!(buffer.len(), 3 * 12 * 10);
        }
    }

    #[test]
    fn test_grid_stays_in_unit_square() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut engine = ReactionDiffusion::new(small_config().with_seeding(1.0, 6)).unwrap();
        for _ in 0..40 {
            engine.step(&mut rng);
            for cell in engine.grid().cells() {
                assert!((0.0..=1.0).contains(&cell.a));
                assert!((0.0..=1.0).contains(&cell.b));
            }
        }
        assert_eq!(engine.steps_taken(), 40);
    }

    #[test]
    fn test_no_seeding_is_deterministic() {
        let config = ReactionConfig::new(9, 9).with_iterations(30).with_seeding(0.0, 20);
        let first = ReactionDiffusion::new(config.clone()).unwrap().run();
        let second = ReactionDiffusion::new(config).unwrap().run();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = small_config();
        let first = ReactionDiffusion::new(config.clone())
            .unwrap()
            .run_with_rng(&mut StdRng::seed_from_u64(42));
        let second = ReactionDiffusion::new(config)
            .unwrap()
            .run_with_rng(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_corner_does_not_diffuse() {
        let config = ReactionConfig::new(4, 4).with_iterations(1).with_seeding(0.0, 0);
        let mut engine = ReactionDiffusion::new(config.clone()).unwrap();
        // Reagent everywhere near the corner so a real Laplacian would be non-zero
        engine.seed_blob(1, 1, 2);
        assert_eq!(engine.laplacian(0, 0, Species::B), 0.0);
        assert_eq!(engine.laplacian(0, 0, Species::A), 0.0);

        let Cell { a, b } = engine.grid().get(0, 0).unwrap();
        engine.react();

        let reaction = a * b * b;
        let expected_a = (a - reaction + config.feed * (1.0 - a)).clamp(0.0, 1.0);
        let expected_b = (b + reaction - (config.kill + config.feed) * b).clamp(0.0, 1.0);
        let corner = engine.grid().get(0, 0).unwrap();
        assert!((corner.a - expected_a).abs() < 1e-12);
        assert!((corner.b - expected_b).abs() < 1e-12);
    }

    #[test]
    fn test_interior_diffuses() {
        let config = ReactionConfig::new(7, 7).with_seeding(0.0, 0);
        let mut engine = ReactionDiffusion::new(config).unwrap();
        engine.seed_blob(3, 3, 1);
        engine.react();
        // Reagent spread from the center into its neighbour
        assert!(engine.grid().get(3, 4).unwrap().b > 0.0);
        assert!(engine.grid().get(3, 3).unwrap().a < 1.0);
    }

    #[test]
    fn test_react_swaps_buffers() {
        let config = ReactionConfig::new(5, 5).with_seeding(0.0, 0);
        let mut engine = ReactionDiffusion::new(config).unwrap();
        engine.seed_blob(2, 2, 1);
        let before = engine.grid().clone();
        engine.react();
        assert_ne!(engine.grid(), &before);
        // Scratch holds the previous state until it is overwritten
        assert_eq!(engine.scratch, before);
    }

    #[test]
    fn test_run_cancellable_completes() {
        let cancel = AtomicBool::new(false);
        let engine = ReactionDiffusion::new(small_config()).unwrap();
        let buffer = engine.run_cancellable(&mut StdRng::seed_from_u64(1), &cancel);
        assert_eq!(buffer.map(|b| b.len()), Some(360));
    }

    #[test]
    fn test_run_cancellable_zero_iterations_ignores_flag() {
        let cancel = AtomicBool::new(true);
        let engine = ReactionDiffusion::new(ReactionConfig::new(4, 4).with_iterations(0)).unwrap();
        let buffer = engine.run_cancellable(&mut StdRng::seed_from_u64(1), &cancel);
        assert_eq!(buffer, Some(vec![255; 48]));
    }

    #[test]
    fn test_generate_texture() {
        let tex = generate(&ReactionConfig::new(6, 3).with_iterations(2)).unwrap();
        assert_eq!(tex.width, 3);
        assert_eq!(tex.height, 6);
        assert_eq!(tex.data.len(), 54);
        assert!(generate(&ReactionConfig::new(6, 0)).is_err());
    }
}
