mod compare;
mod config;
mod simulation;
mod world;

pub use compare::compare_worlds;
pub use config::{DEFAULT_GENERATIONS, DisplayMode, Options};
pub use simulation::Simulation;
pub use world::World;
