use std::fmt;
use std::path::Path;

use rand::Rng;
use tracing::{error, info};

use crate::domain::{BitGrid, ByteGrid, Cell, Engine, LifeError, ReferenceGrid, Variant};
use crate::{persistence, rendering};

/// World is the single entry point every caller uses.
/// It owns exactly one engine, chosen at creation time, and forwards
/// every operation to it. Dropping the world releases the engine's buffers.
#[derive(Clone, Debug)]
pub enum World {
    Reference(ReferenceGrid),
    PackedByte(ByteGrid),
    BitPacked(BitGrid),
}

impl World {
    /// Create a world of the given variant, optionally seeded with the glider
    pub fn new(
        variant: Variant,
        width: usize,
        height: usize,
        seed_glider: bool,
    ) -> Result<Self, LifeError> {
        let world = match (variant, seed_glider) {
            (Variant::Reference, false) => World::Reference(ReferenceGrid::new(width, height)),
            (Variant::Reference, true) => {
                World::Reference(ReferenceGrid::with_glider(width, height)?)
            }
            (Variant::PackedByte, false) => World::PackedByte(ByteGrid::new(width, height)),
            (Variant::PackedByte, true) => World::PackedByte(ByteGrid::with_glider(width, height)?),
            (Variant::BitPacked, false) => World::BitPacked(BitGrid::new(width, height)),
            (Variant::BitPacked, true) => World::BitPacked(BitGrid::with_glider(width, height)?),
        };

        info!("Initialized **{}** world ({}x{})", variant, width, height);
        Ok(world)
    }

    /// Create a world from a variant tag (name or number).
    /// An unknown tag is reported and no world is created.
    pub fn initialize(
        tag: &str,
        width: usize,
        height: usize,
        seed_glider: bool,
    ) -> Result<Self, LifeError> {
        let variant = tag.parse::<Variant>().inspect_err(|err| error!("{err}"))?;
        Self::new(variant, width, height, seed_glider)
    }

    /// Create an unseeded world and fill it from a world file
    pub fn from_file(
        variant: Variant,
        width: usize,
        height: usize,
        path: impl AsRef<Path>,
    ) -> Result<Self, LifeError> {
        let mut world = Self::new(variant, width, height, false)?;
        persistence::load_into(&mut world, path.as_ref())?;
        Ok(world)
    }

    /// Write the current generation to a world file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LifeError> {
        persistence::save(self, path.as_ref())
    }

    /// Which engine backs this world
    pub const fn variant(&self) -> Variant {
        match self {
            World::Reference(_) => Variant::Reference,
            World::PackedByte(_) => Variant::PackedByte,
            World::BitPacked(_) => Variant::BitPacked,
        }
    }

    /// Replace every cell with a random state; `density` is the chance of
    /// life, clamped to [0, 1] with NaN treated as 0
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        density: f64,
    ) -> Result<(), LifeError> {
        let density = if density.is_nan() { 0.0 } else { density }.clamp(0.0, 1.0);
        let (width, height) = self.dimensions();
        for y in 0..height {
            for x in 0..width {
                self.set(x, y, Cell::from_alive(rng.random_bool(density)))?;
            }
        }
        Ok(())
    }
}

impl Engine for World {
    fn width(&self) -> usize {
        match self {
            World::Reference(grid) => grid.width(),
            World::PackedByte(grid) => grid.width(),
            World::BitPacked(grid) => grid.width(),
        }
    }

    fn height(&self) -> usize {
        match self {
            World::Reference(grid) => grid.height(),
            World::PackedByte(grid) => grid.height(),
            World::BitPacked(grid) => grid.height(),
        }
    }

    fn get(&self, x: usize, y: usize) -> Cell {
        match self {
            World::Reference(grid) => grid.get(x, y),
            World::PackedByte(grid) => grid.get(x, y),
            World::BitPacked(grid) => grid.get(x, y),
        }
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), LifeError> {
        match self {
            World::Reference(grid) => grid.set(x, y, cell),
            World::PackedByte(grid) => grid.set(x, y, cell),
            World::BitPacked(grid) => grid.set(x, y, cell),
        }
    }

    fn evolve(&mut self) {
        match self {
            World::Reference(grid) => grid.evolve(),
            World::PackedByte(grid) => grid.evolve(),
            World::BitPacked(grid) => grid.evolve(),
        }
    }

    fn clear(&mut self) {
        match self {
            World::Reference(grid) => grid.clear(),
            World::PackedByte(grid) => grid.clear(),
            World::BitPacked(grid) => grid.clear(),
        }
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&rendering::render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_reports_variant_and_size() {
        for variant in Variant::all() {
            let world = World::new(variant, 50, 30, true).unwrap();
            assert_eq!(world.variant(), variant);
            assert_eq!(world.dimensions(), (50, 30));
            assert_eq!(world.population(), 5);
        }
    }

    #[test]
    fn test_unseeded_world_is_empty() {
        let world = World::new(Variant::BitPacked, 40, 10, false).unwrap();
        assert_eq!(world.population(), 0);
    }

    #[test]
    fn test_initialize_rejects_unknown_tag() {
        let result = World::initialize("3", 10, 10, true);
        assert!(matches!(result, Err(LifeError::UnknownVariant(tag)) if tag == "3"));
        assert!(World::initialize("bits", 10, 10, true).is_ok());
    }

    #[test]
    fn test_glider_needs_room() {
        assert!(matches!(
            World::new(Variant::PackedByte, 3, 10, true),
            Err(LifeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_forwarding() {
        let mut world = World::new(Variant::PackedByte, 6, 6, false).unwrap();
        world.set(1, 1, Cell::Alive).unwrap();
        assert_eq!(world.get(1, 1), Cell::Alive);
        assert_eq!(world.get(6, 6), Cell::Dead);
        assert!(world.set(6, 0, Cell::Alive).is_err());
        world.evolve();
        assert_eq!(world.population(), 0);
    }

    #[test]
    fn test_randomize_is_deterministic_per_seed() {
        let mut a = World::new(Variant::Reference, 20, 20, false).unwrap();
        let mut b = World::new(Variant::BitPacked, 20, 20, false).unwrap();
        a.randomize(&mut StdRng::seed_from_u64(7), 0.4).unwrap();
        b.randomize(&mut StdRng::seed_from_u64(7), 0.4).unwrap();

        assert!(a.population() > 0);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_randomize_density_is_clamped() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut world = World::new(Variant::PackedByte, 16, 9, true).unwrap();

        world.randomize(&mut rng, f64::NAN).unwrap();
        assert_eq!(world.population(), 0);

        world.randomize(&mut rng, 2.5).unwrap();
        assert_eq!(world.population(), 16 * 9);

        world.randomize(&mut rng, -1.0).unwrap();
        assert_eq!(world.population(), 0);
    }

    #[test]
    fn test_display_matches_render() {
        let world = World::new(Variant::Reference, 5, 5, true).unwrap();
        assert_eq!(world.to_string(), rendering::render(&world));
    }
}
