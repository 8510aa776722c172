//! Property-based tests for combat resolution and purge.

use glam::Vec2;
use hecs::World;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tankarena_core::components::{Projectile, Tank};
use tankarena_core::constants::{PROJECTILE_DAMAGE, TANK_MAX_HEALTH};
use tankarena_core::enums::{Direction, Faction};
use tankarena_grid::{parse_map, TileGrid};
use tankarena_sim::systems::{cleanup, is_destroyed, projectile_hits};
use tankarena_sim::world_setup;
use tankarena_sim::{SimConfig, SimulationEngine};

/// Open floor from x 40..440, y 40..280.
const ROOM: &str = "\
############
#P.........#
#..........#
#..........#
#..........#
#..........#
#..........#
############
";

fn room() -> TileGrid {
    parse_map(ROOM).unwrap()
}

fn faction() -> impl Strategy<Value = Faction> {
    prop_oneof![Just(Faction::Player), Just(Faction::Enemy)]
}

/// A point well inside the room.
fn point() -> impl Strategy<Value = Vec2> {
    (60.0f32..380.0, 60.0f32..220.0).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    /// Tanks sharing the shooters' faction are never damaged, however the
    /// tanks and projectiles are scattered.
    #[test]
    fn prop_no_friendly_fire(
        shooter in faction(),
        tanks in prop::collection::vec((faction(), point()), 1..8),
        shots in prop::collection::vec(point(), 1..12),
        seed in any::<u64>(),
    ) {
        let grid = room();
        let mut world = World::new();
        let mut roster = Vec::new();
        let tank_entities: Vec<_> = tanks
            .iter()
            .map(|&(faction, origin)| {
                world_setup::spawn_tank(&mut world, &mut roster, origin, Direction::Up, faction)
            })
            .collect();
        for &center in &shots {
            world_setup::spawn_projectile(&mut world, &mut roster, center, Direction::Up, shooter);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut score = 0;
        let mut events = Vec::new();
        projectile_hits::run(&mut world, &mut roster, &grid, &mut rng, &mut score, &mut events);

        for (&(faction, _), &entity) in tanks.iter().zip(&tank_entities) {
            let tank = world.get::<&Tank>(entity).unwrap();
            if faction == shooter {
                prop_assert_eq!(tank.health, TANK_MAX_HEALTH);
            } else {
                prop_assert!(tank.health >= 0);
                prop_assert_eq!((TANK_MAX_HEALTH - tank.health) % PROJECTILE_DAMAGE, 0);
            }
        }
    }

    /// Health stays non-negative under any damage sequence, and a tank is
    /// destroyed exactly when its health is zero.
    #[test]
    fn prop_health_never_negative(damages in prop::collection::vec(0i32..80, 1..10)) {
        let mut engine = SimulationEngine::new(room(), SimConfig::default());
        let enemy = engine.spawn_enemy(Vec2::new(200.0, 120.0), Direction::Left);

        for damage in damages {
            engine.damage_tank(enemy, damage);
            let tank = engine.world().get::<&Tank>(enemy).unwrap();
            prop_assert!(tank.health >= 0);
            prop_assert_eq!(tank.is_destroyed(), tank.health == 0);
        }
    }

    /// Purge removes exactly the destroyed entities.
    #[test]
    fn prop_purge_removes_exactly_destroyed(
        entities in prop::collection::vec((any::<bool>(), any::<bool>()), 0..20),
    ) {
        let mut world = World::new();
        let mut roster = Vec::new();
        for &(is_tank, destroyed) in &entities {
            if is_tank {
                let entity = world_setup::spawn_tank(&mut world, &mut roster, Vec2::ZERO, Direction::Up, Faction::Enemy);
                if destroyed {
                    world.get::<&mut Tank>(entity).unwrap().take_damage(TANK_MAX_HEALTH);
                }
            } else {
                let entity = world_setup::spawn_projectile(&mut world, &mut roster, Vec2::ZERO, Direction::Up, Faction::Player);
                if destroyed {
                    world.get::<&mut Projectile>(entity).unwrap().destroy();
                }
            }
        }
        let before = roster.len();
        let doomed = entities.iter().filter(|(_, destroyed)| *destroyed).count();

        let mut buffer = Vec::new();
        let removed = cleanup::run(&mut world, &mut roster, &mut buffer);

        prop_assert_eq!(removed, doomed);
        prop_assert_eq!(roster.len(), before - doomed);
        prop_assert!(roster.iter().all(|&entity| !is_destroyed(&world, entity)));
        prop_assert_eq!(world.len() as usize, roster.len());
    }

    /// No destroyed entity survives an update, whatever the player does.
    #[test]
    fn prop_no_destroyed_entity_after_update(
        moves in prop::collection::vec(0usize..5, 1..120),
        seed in any::<u64>(),
    ) {
        let grid = parse_map("\
############
#P....E....#
#..........#
#...##.....#
#E.........#
#.........E#
############
").unwrap();
        let mut engine = SimulationEngine::new(grid, SimConfig { seed });
        for choice in moves {
            match choice {
                4 => {
                    engine.player_fire();
                }
                n => {
                    engine.player_move(Direction::ALL[n]);
                }
            }
            engine.update(1.0 / 60.0);
            for &entity in engine.roster() {
                prop_assert!(!is_destroyed(engine.world(), entity));
            }
        }
    }
}
