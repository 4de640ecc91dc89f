use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::domain::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Variant};

/// Default number of generations to run
pub const DEFAULT_GENERATIONS: u64 = 50;

/// What to print while the simulation runs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum DisplayMode {
    /// Print nothing but the summary
    None,
    /// Redraw the world after every generation
    #[default]
    Animate,
    /// Draw the world once after the last generation
    Final,
}

/// Game of Life storage-variant comparison
#[derive(Clone, Debug, Parser)]
#[command(name = "gol", version, about)]
pub struct Options {
    /// World width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// World height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Number of generations to evolve
    #[arg(long, default_value_t = DEFAULT_GENERATIONS)]
    pub count: u64,

    /// World file to start from instead of the glider pattern
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Where the final world is written when started from a file
    #[arg(long, default_value = "final_world.txt")]
    pub save: PathBuf,

    /// Also run the reference engine and compare after every generation
    #[arg(long)]
    pub compare: bool,

    /// Engine: 0|reference, 1|array, 2|bits
    #[arg(long, default_value = "reference")]
    pub variant: Variant,

    #[arg(long, value_enum, default_value_t = DisplayMode::Animate)]
    pub display: DisplayMode,

    /// Pause between animation frames in milliseconds
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,
}
