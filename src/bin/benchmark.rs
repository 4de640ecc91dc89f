//! Performance benchmark comparing the three engines

use std::time::Instant;

use gol_variants::domain::Pattern;
use gol_variants::{Engine, Variant, World, presets};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SEED: u64 = 0x5EED;
const DENSITY: f64 = 0.3;
const PATTERN_SIZE: usize = 200;
const PATTERN_GENERATIONS: u32 = 500;

fn random_world(variant: Variant, size: usize) -> anyhow::Result<World> {
    let mut world = World::new(variant, size, size, false)?;
    world.randomize(&mut StdRng::seed_from_u64(SEED), DENSITY)?;
    Ok(world)
}

/// Milliseconds per generation
fn benchmark(variant: Variant, size: usize, iterations: u32) -> anyhow::Result<f64> {
    let mut world = random_world(variant, size)?;

    let start = Instant::now();
    for _ in 0..iterations {
        world.evolve();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

/// Milliseconds per generation and final population of a centered pattern
fn pattern_run(variant: Variant, pattern: &Pattern) -> anyhow::Result<(f64, usize)> {
    let mut world = World::new(variant, PATTERN_SIZE, PATTERN_SIZE, false)?;
    pattern.place_centered(&mut world)?;

    let start = Instant::now();
    for _ in 0..PATTERN_GENERATIONS {
        world.evolve();
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / PATTERN_GENERATIONS as f64;
    Ok((ms, world.population()))
}

fn memory_bytes(world: &World) -> usize {
    match world {
        World::Reference(grid) => grid.memory_bytes(),
        World::PackedByte(grid) => grid.memory_bytes(),
        World::BitPacked(grid) => grid.memory_bytes(),
    }
}

fn main() -> anyhow::Result<()> {
    println!("=== Game of Life Engine Benchmark ===\n");

    let sizes = [39, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!(
        "{:>10} {:>12} {:>12} {:>12} {:>10}",
        "Size", "Reference", "Array", "Bits", "Speedup"
    );
    println!("{:-<62}", "");

    for size in sizes {
        let reference_ms = benchmark(Variant::Reference, size, iterations)?;
        let array_ms = benchmark(Variant::PackedByte, size, iterations)?;
        let bits_ms = benchmark(Variant::BitPacked, size, iterations)?;

        let fastest = array_ms.min(bits_ms);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            reference_ms,
            array_ms,
            bits_ms,
            reference_ms / fastest
        );
    }

    println!("\n=== Memory Usage (2000x2000, both buffers) ===\n");

    for variant in Variant::all() {
        let world = World::new(variant, 2000, 2000, false)?;
        let bytes = memory_bytes(&world);
        println!(
            "{:<10} {:>10} bytes ({:.1} MB)  {}",
            variant.name(),
            bytes,
            bytes as f64 / 1_000_000.0,
            variant.description()
        );
    }

    println!(
        "\n=== Pattern Runs ({PATTERN_SIZE}x{PATTERN_SIZE}, {PATTERN_GENERATIONS} generations) ===\n"
    );
    println!(
        "{:<12} {:>12} {:>12} {:>12} {:>10}  {}",
        "Pattern", "Reference", "Array", "Bits", "Alive", "Notes"
    );
    println!("{:-<62}", "");

    for pattern in presets::all_patterns() {
        let mut timings = Vec::with_capacity(3);
        let mut population = 0;
        for variant in Variant::all() {
            let (ms, alive) = pattern_run(variant, &pattern)?;
            timings.push(ms);
            population = alive;
        }

        println!(
            "{:<12} {:>12.3} {:>12.3} {:>12.3} {:>10}  {}",
            pattern.name, timings[0], timings[1], timings[2], population, pattern.description
        );
    }

    Ok(())
}
