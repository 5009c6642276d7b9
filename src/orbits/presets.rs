//! Ready-made body systems.

use super::{Body, BodySystem, DEFAULT_DISPLAY_SCALE, DEFAULT_TIME_STEP};
use glam::DVec3;

/// The Sun and the four inner planets, all starting on the +x axis and
/// moving along +y.
///
/// Masses in kg, radii in km, distances in m, speeds in m/s.
pub fn inner_planets() -> Vec<Body> {
    //          name        mass      radius    x          vy
    let table = [
        ("sun", 1.989e30, 6.950e5, 0.000e00, 0.000e00),
        ("mercury", 3.302e23, 2.440e3, 5.790e10, 2.395e04),
        ("venus", 4.869e24, 6.052e3, 1.082e11, 1.750e04),
        ("earth", 5.974e24, 6.371e3, 1.496e11, 1.490e04),
        ("mars", 6.419e23, 3.390e3, 2.279e11, 1.205e04),
    ];

    table
        .iter()
        .map(|&(name, mass, radius, x, vy)| {
            Body::new(mass, radius, DVec3::new(x, 0.0, 0.0), DVec3::new(0.0, vy, 0.0)).with_name(name)
        })
        .collect()
}

/// [`inner_planets`] as a ready-to-tick system with a 2500 s step and a
/// display scale of 2.5e7 m per render unit.
pub fn solar_system() -> BodySystem {
    BodySystem::from_trusted(inner_planets())
        .with_time_step(DEFAULT_TIME_STEP)
        .with_display_scale(DEFAULT_DISPLAY_SCALE)
}
