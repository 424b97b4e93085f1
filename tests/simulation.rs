use glam::Vec3;
use invaders::sim::{Simulation, SimulationConfig};

fn full_game(seed: u64) -> Simulation {
    Simulation::with_seed(SimulationConfig::default(), seed)
}

// ── tick order ────────────────────────────────────────────────────────────────

#[test]
fn bullets_move_before_collision_resolves() {
    // One enemy at (28, 452), the player parked 28 below it
    let config = SimulationConfig::default()
        .with_grid(1, 1)
        .with_player_start(Vec3::new(28.0, 424.0, 0.0));
    let mut simulation = Simulation::with_seed(config, 1);

    simulation.try_fire();

    // The bullet spawns 28 away, outside the radius. One tick moves it up
    // by 4 to exactly 24 away, and the same tick's collision pass scores.
    // Resolving before the move, or after the enemy drifted, would miss.
    simulation.tick();

    assert_eq!(simulation.formation().active_count(), 0);
    assert_eq!(simulation.player().bullets().active_count(), 0);
}

#[test]
fn the_player_moves_before_bullets_spawned_this_tick() {
    let mut simulation = full_game(1);

    // Firing happens between ticks, at the current player position
    simulation.set_move_intent(false, true);
    simulation.tick();
    simulation.try_fire();

    let bullet = simulation.player().bullets().get(0).unwrap();
    assert_eq!(bullet.position().x, 324.0); // 320 + 4
}

#[test]
fn player_bullets_rise_by_their_speed_each_tick() {
    let mut simulation = full_game(1);
    simulation.try_fire();

    let before = simulation.player().bullets().get(0).unwrap().position().y;
    simulation.tick();
    let after = simulation.player().bullets().get(0).unwrap().position().y;

    assert_eq!(after - before, 4.0);
}

// ── redraw signal ─────────────────────────────────────────────────────────────

#[test]
fn a_fresh_playfield_wants_one_redraw() {
    let mut simulation = full_game(1);

    assert!(simulation.take_redraw());
    // Nothing ticked since, nothing to redraw
    assert!(!simulation.take_redraw());
}

#[test]
fn every_tick_raises_the_redraw_flag() {
    let mut simulation = full_game(1);
    simulation.take_redraw();

    simulation.tick();

    assert!(simulation.take_redraw());
    assert!(!simulation.take_redraw());
}

// ── determinism ───────────────────────────────────────────────────────────────

#[test]
fn equal_seeds_give_equal_trajectories() {
    let mut first = full_game(1234);
    let mut second = full_game(1234);

    for tick in 0..600 {
        // Wiggle back and forth, firing in bursts
        let left = tick % 7 < 3;
        let fire = tick % 11 < 5;

        for simulation in [&mut first, &mut second] {
            simulation.set_move_intent(left, !left);
            if fire {
                simulation.try_fire();
            } else {
                simulation.release_fire();
            }
            simulation.tick();
        }
    }

    assert_eq!(first.player().position(), second.player().position());
    assert_eq!(
        first.formation().active_count(),
        second.formation().active_count()
    );
    assert_eq!(first.formation().drift(), second.formation().drift());
    assert_eq!(
        first.formation().bullets().active_count(),
        second.formation().bullets().active_count()
    );
    assert_eq!(
        first.player().bullets().active_count(),
        second.player().bullets().active_count()
    );
}

// ── invariants over a long run ────────────────────────────────────────────────

#[test]
fn invariants_hold_over_a_long_seeded_run() {
    let mut simulation = full_game(99);
    let mut rng = fastrand::Rng::with_seed(5);
    let mut enemies_alive = simulation.formation().active_count();

    for _ in 0..3000 {
        simulation.set_move_intent(rng.bool(), rng.bool());
        if rng.bool() {
            simulation.try_fire();
        } else {
            simulation.release_fire();
        }

        simulation.tick();

        // The ship never leaves the screen
        let x = simulation.player().position().x;
        assert!((0.0..=640.0).contains(&x));

        // Downed enemies never come back
        let now_alive = simulation.formation().active_count();
        assert!(now_alive <= enemies_alive);
        enemies_alive = now_alive;

        // The pools never overflow their capacity
        assert!(simulation.player().bullets().active_count() <= 7);
        assert!(simulation.formation().bullets().active_count() <= 20);
    }
}

#[test]
fn idle_ticks_only_move_the_formation() {
    let mut simulation = full_game(77);
    let start = simulation.player().position();

    for _ in 0..200 {
        simulation.tick();
    }

    // No intents, no movement, and nothing to collide with the formation
    assert_eq!(simulation.player().position(), start);
    assert_eq!(simulation.formation().active_count(), 30);
}
