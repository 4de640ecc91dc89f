use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use gol_variants::{
    Simulation, Variant, World,
    application::{DisplayMode, Options},
    rendering,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gol_variants=info,gol=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let options = Options::parse();

    println!(
        "Game of Life!\n\nParams... Width={} Height={} NumGenerations={} File={} Compare={} Variant={}\n",
        options.width,
        options.height,
        options.count,
        options.file.as_ref().map_or("N/A".into(), |p| p.display().to_string()),
        options.compare,
        options.variant,
    );

    // Both worlds start from the same seed so they can be compared
    let create = |variant: Variant| match &options.file {
        Some(path) => World::from_file(variant, options.width, options.height, path),
        None => World::new(variant, options.width, options.height, true),
    };

    let world = create(options.variant).context("failed to create world")?;
    let mut simulation = Simulation::new(world);
    if options.compare {
        let reference = create(Variant::Reference).context("failed to create reference world")?;
        simulation = simulation.with_reference(reference);
    }

    let delay = Duration::from_millis(options.delay_ms);
    let start = Instant::now();
    simulation
        .run(options.count, |world, _| {
            if options.display == DisplayMode::Animate {
                if let Err(err) = rendering::draw_frame(world) {
                    warn!(%err, "failed to draw frame");
                }
                thread::sleep(delay);
            }
        })
        .context("engine diverged from the reference")?;
    let elapsed = start.elapsed();

    if options.display == DisplayMode::Final {
        print!("{}", simulation.world);
    }

    if options.file.is_some() {
        simulation
            .world
            .save(&options.save)
            .context("failed to save final world")?;
        info!(path = %options.save.display(), "saved final world");
    }

    println!(
        "Done! Made {} evolutions in {:.6} seconds",
        simulation.generation,
        elapsed.as_secs_f64()
    );
    Ok(())
}
