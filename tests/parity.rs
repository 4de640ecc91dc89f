use gol_variants::{Cell, Engine, LifeError, Variant, World, compare_worlds, presets};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn worlds(width: usize, height: usize, seed_glider: bool) -> Vec<World> {
    Variant::all()
        .into_iter()
        .map(|variant| World::new(variant, width, height, seed_glider).unwrap())
        .collect()
}

fn assert_all_equal(worlds: &[World], context: &str) {
    for other in &worlds[1..] {
        if let Err(err) = compare_worlds(&worlds[0], other) {
            panic!("{context}: {} vs {}: {err}", worlds[0].variant(), other.variant());
        }
    }
}

#[test]
fn glider_generations_match_across_engines() {
    let mut worlds = worlds(39, 20, true);
    for generation in 0..=8 {
        assert_all_equal(&worlds, &format!("generation {generation}"));
        worlds.iter_mut().for_each(|w| w.evolve());
    }
}

#[test]
fn glider_returns_to_shape_shifted_after_period() {
    for mut world in worlds(39, 20, true) {
        let before: Vec<_> = (0..20)
            .flat_map(|y| (0..39).map(move |x| (x, y)))
            .filter(|&(x, y)| world.get(x, y).is_alive())
            .collect();

        for _ in 0..4 {
            world.evolve();
        }

        for (x, y) in before {
            assert_eq!(world.get(x + 1, y + 1), Cell::Alive, "{} at ({x}, {y})", world.variant());
        }
        assert_eq!(world.population(), 5);
    }
}

#[test]
fn extinction_is_fixed_point() {
    for mut world in worlds(45, 11, false) {
        world.evolve();
        assert_eq!(world.population(), 0, "{}", world.variant());
    }
}

#[test]
fn lonely_cells_die() {
    for mut world in worlds(40, 8, false) {
        world.set(5, 4, Cell::Alive).unwrap();
        world.set(20, 3, Cell::Alive).unwrap();
        world.set(21, 3, Cell::Alive).unwrap();
        world.evolve();
        assert_eq!(world.population(), 0, "{}", world.variant());
    }
}

#[test]
fn survival_birth_and_overpopulation() {
    for mut world in worlds(40, 8, false) {
        // Column at x = 31 (first bit of the second word in the bit grid)
        presets::blinker().place_on(&mut world, 30, 2).unwrap();
        // Rotate: (30,3) (31,3) (32,3) -> (31,2) (31,3) (31,4)
        world.evolve();
        assert_eq!(world.get(31, 3), Cell::Alive, "{} survival", world.variant());
        assert_eq!(world.get(31, 2), Cell::Alive, "{} birth", world.variant());
        assert_eq!(world.get(30, 3), Cell::Dead, "{} underpopulation", world.variant());

        world.clear();
        for (x, y) in [(10, 3), (9, 3), (11, 3), (10, 2), (10, 4)] {
            world.set(x, y, Cell::Alive).unwrap();
        }
        world.evolve();
        assert_eq!(world.get(10, 3), Cell::Dead, "{} overpopulation", world.variant());
    }
}

#[test]
fn random_soups_match_across_engines() {
    let cases = [(39, 20, 1u64), (61, 33, 2), (94, 17, 3), (32, 32, 4), (63, 5, 5)];
    for (width, height, seed) in cases {
        let mut worlds = worlds(width, height, false);
        for world in &mut worlds {
            world.randomize(&mut StdRng::seed_from_u64(seed), 0.35).unwrap();
        }

        for generation in 0..16 {
            let context = format!("{width}x{height} seed {seed} generation {generation}");
            assert_all_equal(&worlds, &context);
            worlds.iter_mut().for_each(|w| w.evolve());
        }
    }
}

#[test]
fn oscillators_across_word_boundary_have_period_two() {
    for pattern in [presets::toad(), presets::beacon()] {
        // Column 31 is the last bit of a row's first word, 60..=63 the row end
        for x in [29, 30, 31, 60] {
            let mut worlds = worlds(64, 10, false);
            for world in &mut worlds {
                pattern.place_on(world, x, 3).unwrap();
            }
            let start = worlds[0].to_string();

            worlds.iter_mut().for_each(|w| w.evolve());
            assert_all_equal(&worlds, &format!("{} at x={x} phase 1", pattern.name));
            assert_ne!(worlds[0].to_string(), start, "{} at x={x} is static", pattern.name);

            worlds.iter_mut().for_each(|w| w.evolve());
            assert_all_equal(&worlds, &format!("{} at x={x} phase 2", pattern.name));
            for world in &worlds {
                assert_eq!(
                    world.to_string(),
                    start,
                    "{} at x={x} on {}",
                    pattern.name,
                    world.variant()
                );
            }
        }
    }
}

#[test]
fn bit_packed_neighbor_counts_match_reference_on_every_row_edge() {
    let (width, height) = (71, 9);
    let mut rng = StdRng::seed_from_u64(0xB175);
    let mut reference = World::new(Variant::Reference, width, height, false).unwrap();
    reference.randomize(&mut rng, 0.5).unwrap();

    let mut bits = gol_variants::domain::BitGrid::new(width, height);
    let mut grid = gol_variants::domain::ReferenceGrid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            bits.set(x, y, reference.get(x, y)).unwrap();
            grid.set(x, y, reference.get(x, y)).unwrap();
        }
    }

    for y in 0..height {
        // Row start, both sides of each word boundary, row end
        for x in [0, 1, 29, 30, 31, 32, 61, 62, 63, 69, 70] {
            assert_eq!(
                bits.count_neighbors(x, y),
                grid.count_live_neighbors(x, y),
                "neighbor mismatch at ({x}, {y})"
            );
        }
    }
}

#[test]
fn mismatch_is_fatal_error() {
    let mut worlds = worlds(39, 20, true);
    worlds[2].set(38, 19, Cell::Alive).unwrap();
    let err = compare_worlds(&worlds[0], &worlds[2]).unwrap_err();
    assert!(matches!(err, LifeError::WorldsDiverged { x: 38, y: 19, .. }));
    assert!(err.to_string().contains("x=38 y=19"));
}
