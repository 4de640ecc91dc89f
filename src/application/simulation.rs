use tracing::debug;

use crate::application::{World, compare_worlds};
use crate::domain::{Engine, LifeError};

/// Simulation orchestrates a run.
/// It owns the world under test and, when comparing, a reference world
/// evolved in lockstep and checked after every generation.
pub struct Simulation {
    pub world: World,
    pub reference: Option<World>,
    pub generation: u64,
}

impl Simulation {
    pub fn new(world: World) -> Self {
        Self {
            world,
            reference: None,
            generation: 0,
        }
    }

    /// Compare against `reference` after every generation (builder pattern)
    pub fn with_reference(mut self, reference: World) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Advance one generation; fails if the worlds diverge
    pub fn step(&mut self) -> Result<(), LifeError> {
        self.advance();
        self.check()
    }

    fn advance(&mut self) {
        self.world.evolve();
        if let Some(reference) = self.reference.as_mut() {
            reference.evolve();
        }
        self.generation += 1;
    }

    /// Compare the two worlds without evolving
    pub fn check(&self) -> Result<(), LifeError> {
        match &self.reference {
            Some(reference) => compare_worlds(&self.world, reference),
            None => Ok(()),
        }
    }

    /// Run `generations` steps, handing the world to `on_generation` after
    /// each evolve and before the comparison
    pub fn run<F>(&mut self, generations: u64, mut on_generation: F) -> Result<(), LifeError>
    where
        F: FnMut(&World, u64),
    {
        for _ in 0..generations {
            self.advance();
            on_generation(&self.world, self.generation);
            self.check()?;
        }
        debug!(generation = self.generation, population = self.world.population(), "run finished");
        Ok(())
    }
}
