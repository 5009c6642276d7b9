use super::{compute_force, Body};
use crate::error::SystemError;
use glam::{DVec3, Vec3};

/// Default tick length in seconds.
pub const DEFAULT_TIME_STEP: f64 = 2500.0;

/// Default divisor from metres to render units.
pub const DEFAULT_DISPLAY_SCALE: f64 = 2.5e7;

/// Default maximum number of bodies.
pub const DEFAULT_MAX_BODIES: usize = 16;

/// An ordered collection of bodies advanced under mutual gravity.
///
/// Index 0 is conventionally the central body, but the integrator treats all
/// bodies alike. Bodies can be appended between ticks and are never removed.
#[derive(Debug, Clone)]
pub struct BodySystem {
    bodies: Vec<Body>,
    time_step: f64,
    display_scale: f64,
    max_bodies: usize,
    elapsed: f64,
    ticks: u64,
}

impl BodySystem {
    /// Create an empty system with default time step, display scale and cap.
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            time_step: DEFAULT_TIME_STEP,
            display_scale: DEFAULT_DISPLAY_SCALE,
            max_bodies: DEFAULT_MAX_BODIES,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    /// Create a system from an initial body list.
    ///
    /// Fails on an empty list or an invalid mass. The body cap is raised to
    /// fit the list if needed.
    pub fn with_bodies(bodies: Vec<Body>) -> Result<Self, SystemError> {
        if bodies.is_empty() {
            return Err(SystemError::Empty);
        }
        let mut system = Self::new();
        system.max_bodies = system.max_bodies.max(bodies.len());
        for body in bodies {
            system.add_body(body)?;
        }
        Ok(system)
    }

    /// Build from bodies whose masses are known to be valid, such as the
    /// presets. The cap is raised to fit.
    pub(crate) fn from_trusted(bodies: Vec<Body>) -> Self {
        debug_assert!(bodies.iter().all(|b| b.mass.is_finite() && b.mass > 0.0));
        let mut system = Self::new();
        system.max_bodies = system.max_bodies.max(bodies.len());
        system.bodies = bodies;
        system
    }

    /// Set the tick length used by [`step`](Self::step), in seconds.
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Set the divisor applied to positions handed to the renderer.
    pub fn with_display_scale(mut self, scale: f64) -> Self {
        self.display_scale = scale;
        self
    }

    /// Set the maximum number of bodies. Never drops existing bodies.
    pub fn with_max_bodies(mut self, max: usize) -> Self {
        self.max_bodies = max.max(self.bodies.len());
        self
    }

    /// Append a body and return its index.
    ///
    /// Mass must be finite and positive. Appending never changes the
    /// trajectories already computed.
    pub fn add_body(&mut self, body: Body) -> Result<usize, SystemError> {
        let index = self.bodies.len();
        if index >= self.max_bodies {
            log::warn!("Rejected body '{}': system is full ({} bodies)", body.name, self.max_bodies);
            return Err(SystemError::CapacityReached(self.max_bodies));
        }
        if !body.mass.is_finite() || body.mass <= 0.0 {
            return Err(SystemError::InvalidMass {
                index,
                mass: body.mass,
            });
        }
        log::debug!("Added body {} '{}' (mass {:e} kg)", index, body.name, body.mass);
        self.bodies.push(body);
        Ok(index)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Configured tick length in seconds.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn display_scale(&self) -> f64 {
        self.display_scale
    }

    pub fn max_bodies(&self) -> usize {
        self.max_bodies
    }

    /// Simulated seconds since creation.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of ticks run.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance the system by `dt` seconds.
    ///
    /// Every velocity change is computed from the positions at the start of
    /// the tick before any position moves.
    pub fn tick(&mut self, dt: f64) {
        if self.bodies.is_empty() {
            return;
        }

        let deltas: Vec<DVec3> = self
            .bodies
            .iter()
            .enumerate()
            .map(|(i, body)| {
                self.bodies
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, other)| compute_force(body, other) / body.mass * dt)
                    .sum::<DVec3>()
            })
            .collect();

        for (body, dv) in self.bodies.iter_mut().zip(deltas) {
            body.velocity += dv;
        }
        for body in &mut self.bodies {
            body.position += body.velocity * dt;
        }

        self.elapsed += dt;
        self.ticks += 1;
    }

    /// Advance by one configured time step.
    pub fn step(&mut self) {
        self.tick(self.time_step);
    }

    /// Advance by `n` configured time steps.
    pub fn advance(&mut self, n: u32) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Position of body `index` in render units.
    pub fn display_position(&self, index: usize) -> Option<Vec3> {
        self.bodies
            .get(index)
            .map(|b| (b.position / self.display_scale).as_vec3())
    }

    /// Positions of all bodies in render units, in index order.
    pub fn display_positions(&self) -> Vec<Vec3> {
        self.bodies
            .iter()
            .map(|b| (b.position / self.display_scale).as_vec3())
            .collect()
    }

    /// Display positions packed as native-endian `f32` triples for upload.
    pub fn display_bytes(&self) -> Vec<u8> {
        let positions = self.display_positions();
        bytemuck::cast_slice::<Vec3, u8>(&positions).to_vec()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Sum of all momenta. Stays near its initial value for an isolated system.
    pub fn total_momentum(&self) -> DVec3 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Mass-weighted mean position, or `None` for an empty system.
    pub fn center_of_mass(&self) -> Option<DVec3> {
        let total = self.total_mass();
        if total <= 0.0 {
            return None;
        }
        let weighted: DVec3 = self.bodies.iter().map(|b| b.position * b.mass).sum();
        Some(weighted / total)
    }
}

impl Default for BodySystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbits::G;

    fn at_rest(mass: f64, x: f64) -> Body {
        Body::new(mass, 1.0, DVec3::new(x, 0.0, 0.0), DVec3::ZERO)
    }

    #[test]
    fn test_empty_tick_is_noop() {
        let mut system = BodySystem::new();
        system.tick(10.0);
        assert!(system.is_empty());
        assert_eq!(system.ticks(), 0);
    }

    #[test]
    fn test_with_bodies_rejects_empty() {
        assert_eq!(BodySystem::with_bodies(Vec::new()).unwrap_err(), SystemError::Empty);
    }

    #[test]
    fn test_add_body_validates_mass() {
        let mut system = BodySystem::new();
        assert_eq!(
            system.add_body(at_rest(0.0, 1.0)).unwrap_err(),
            SystemError::InvalidMass { index: 0, mass: 0.0 }
        );
        assert!(system.add_body(at_rest(f64::NAN, 1.0)).is_err());
        assert_eq!(system.add_body(at_rest(1.0, 1.0)), Ok(0));
    }

    #[test]
    fn test_add_body_capacity() {
        let mut system = BodySystem::new().with_max_bodies(2);
        system.add_body(at_rest(1.0, 0.0)).unwrap();
        system.add_body(at_rest(1.0, 1.0)).unwrap();
        assert_eq!(
            system.add_body(at_rest(1.0, 2.0)).unwrap_err(),
            SystemError::CapacityReached(2)
        );
        assert_eq!(system.len(), 2);
    }

    #[test]
    fn test_equal_masses_symmetric() {
        let m = 1.0e20;
        let d = 1.0e6;
        let mut system = BodySystem::with_bodies(vec![at_rest(m, 0.0), at_rest(m, d)]).unwrap();
        system.tick(10.0);

        let v0 = system.bodies()[0].velocity;
        let v1 = system.bodies()[1].velocity;
        assert!(v0.x > 0.0);
        assert!(v1.x < 0.0);
        assert!((v0 + v1).length() < v0.length() * 1e-12);
        assert_eq!(v0.y, 0.0);
        assert_eq!(v0.z, 0.0);

        let expected = G * m / (d * d) * 10.0;
        assert!((v0.length() - expected).abs() < expected * 1e-12);
    }

    #[test]
    fn test_positions_use_updated_velocity() {
        let m = 1.0e20;
        let mut system = BodySystem::with_bodies(vec![at_rest(m, 0.0), at_rest(m, 1.0e6)]).unwrap();
        system.tick(10.0);
        let b = &system.bodies()[0];
        assert!((b.position.x - b.velocity.x * 10.0).abs() < 1e-18);
    }

    #[test]
    fn test_order_independent() {
        let bodies = vec![
            Body::new(3.0e22, 1.0, DVec3::new(0.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0)),
            Body::new(5.0e22, 1.0, DVec3::new(4.0e7, 1.0e7, 0.0), DVec3::new(0.0, -2.0, 0.0)),
            Body::new(7.0e22, 1.0, DVec3::new(-3.0e7, 2.0e7, 5.0e6), DVec3::new(0.0, 0.0, 3.0)),
        ];
        let mut forward = BodySystem::with_bodies(bodies.clone()).unwrap();
        let mut reversed = BodySystem::with_bodies(bodies.into_iter().rev().collect()).unwrap();

        for _ in 0..5 {
            forward.tick(60.0);
            reversed.tick(60.0);
        }

        for (a, b) in forward.bodies().iter().zip(reversed.bodies().iter().rev()) {
            assert!(a.position.distance(b.position) < 1e-6);
            assert!(a.velocity.distance(b.velocity) < 1e-12);
        }
    }

    #[test]
    fn test_momentum_conserved() {
        let mut system = BodySystem::with_bodies(vec![
            Body::new(2.0e24, 1.0, DVec3::ZERO, DVec3::new(0.0, -10.0, 0.0)),
            Body::new(1.0e24, 1.0, DVec3::new(1.0e8, 0.0, 0.0), DVec3::new(0.0, 20.0, 0.0)),
        ])
        .unwrap();
        let before = system.total_momentum();
        system.advance(100);
        let after = system.total_momentum();
        assert!((after - before).length() < 1e16);
        assert_eq!(system.ticks(), 100);
        assert!((system.elapsed() - 100.0 * DEFAULT_TIME_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_display_scale_does_not_mutate() {
        let system = BodySystem::with_bodies(vec![at_rest(1.0, 5.0e7)])
            .unwrap()
            .with_display_scale(2.5e7);
        assert_eq!(system.display_position(0), Some(Vec3::new(2.0, 0.0, 0.0)));
        assert_eq!(system.display_position(1), None);
        assert_eq!(system.bodies()[0].position.x, 5.0e7);

        let bytes = system.display_bytes();
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[0..4], &2.0f32.to_ne_bytes());
    }

    #[test]
    fn test_center_of_mass() {
        let system = BodySystem::with_bodies(vec![at_rest(3.0, 0.0), at_rest(1.0, 4.0)]).unwrap();
        let com = system.center_of_mass().unwrap();
        assert!((com.x - 1.0).abs() < 1e-12);
        assert!(BodySystem::new().center_of_mass().is_none());
    }
}
