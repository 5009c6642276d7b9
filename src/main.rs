//! Headless driver: renders the planet textures to PNG and runs the orbit
//! simulation for a number of ticks.
//!
//! ```text
//! orrery [config.json] [--out DIR] [--ticks N] [--seed S]
//! ```

use clap::Parser;
use orrery::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::path::PathBuf;

/// Frame length used to drive the clock, in seconds.
const FRAME_SECS: f64 = 1.0 / 60.0;

/// Render planet textures and advance the orbit simulation.
#[derive(Parser, Debug)]
#[command(name = "orrery", version)]
struct Args {
    /// Scene config (JSON). Defaults are used when omitted.
    config: Option<PathBuf>,

    /// Output directory for textures and the effective scene
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Number of orbit ticks to simulate
    #[arg(long, default_value_t = 1000)]
    ticks: u32,

    /// Seed for reproducible reaction textures
    #[arg(long)]
    seed: Option<u64>,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let scene = match &args.config {
        Some(path) => SceneConfig::load(path)?,
        None => {
            log::info!("No config given, using defaults");
            SceneConfig::default()
        }
    };

    let out = args.out;
    std::fs::create_dir_all(&out)?;

    // Surface texture
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let reaction = &scene.reaction;
    log::info!(
        "Generating {}x{} reaction texture ({} iterations)",
        reaction.width,
        reaction.height,
        reaction.iterations
    );
    let engine = ReactionDiffusion::new(reaction.clone())?;
    let buffer = engine.run_with_rng(&mut rng);
    // Column-major buffer: each grid column is one image row
    let texture = TextureData::from_rgb(buffer, reaction.height, reaction.width)?;
    texture.save(out.join("reaction.png"))?;

    scene.planet.gradient()?.texture().save(out.join("gradient.png"))?;
    scene.save(out.join("scene.json"))?;

    let planet = scene.planet.planet_uniforms();
    let mut clouds = scene.planet.cloud_uniforms(0.0)?;

    // Orbits
    let mut system = scene.orbits.build()?;
    let ticks = args.ticks;
    let mut clock = Clock::new(FRAME_SECS);
    let mut remaining = ticks;
    while remaining > 0 {
        let due = clock.update(FRAME_SECS).min(remaining);
        system.advance(due);
        remaining -= due;
    }
    clouds.set("time", clock.elapsed() as f32);
    for block in [&planet, &clouds] {
        log::debug!("{} uniforms: {} bytes", block.label(), block.to_std140().len());
    }

    log::info!(
        "Simulated {} ticks ({:.1} days) over {} frames",
        system.ticks(),
        system.elapsed() / 86_400.0,
        clock.frame()
    );
    for (body, pos) in system.bodies().iter().zip(system.display_positions()) {
        log::info!("  {:<8} ({:>9.3}, {:>9.3}, {:>9.3})", body.name, pos.x, pos.y, pos.z);
    }
    log::info!("Wrote textures to {}", out.display());

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
