// Domain layer - engines, cell rule, patterns
pub mod domain;

// Application layer - dispatcher, comparison, simulation driver, options
pub mod application;

// Infrastructure layer - console output and world files
pub mod persistence;
pub mod rendering;

// Re-exports for convenience
pub use application::{Simulation, World, compare_worlds};
pub use domain::{Cell, Engine, LifeError, Variant, presets};
