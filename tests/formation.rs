use invaders::sim::{Formation, SimulationConfig};

/// Screen width used by the full-size tests.
const SCREEN_WIDTH: f32 = 640.0;

fn default_grid() -> Formation {
    // 3 rows of 10 enemies, radius 24, padding 4, on a 640x480 screen
    Formation::spawn_grid(&SimulationConfig::default())
}

/// A single enemy on a screen so narrow it bounces on the first drift.
fn cornered_enemy() -> (Formation, SimulationConfig) {
    let config = SimulationConfig::default()
        .with_grid(1, 1)
        .with_screen_size(60.0, 480.0)
        .with_formation_drift(10.0);

    (Formation::spawn_grid(&config), config)
}

// ── grid layout ───────────────────────────────────────────────────────────────

#[test]
fn spawn_grid_places_row_zero_at_the_top() {
    let formation = default_grid();

    // First enemy: x = 4 + 24 = 28, y mirrored to 480 - 28 = 452
    let first = formation.get(0).unwrap();
    assert_eq!(first.position().x, 28.0);
    assert_eq!(first.position().y, 452.0);
    assert_eq!(first.row(), 0);
}

#[test]
fn spawn_grid_steps_by_diameter_plus_padding() {
    let formation = default_grid();

    // Index 12 is row 1, column 2 with a step of 2 * 24 + 4 = 52
    let enemy = formation.get(12).unwrap();
    assert_eq!(enemy.position().x, 132.0); // 28 + 52 * 2
    assert_eq!(enemy.position().y, 400.0); // 480 - (28 + 52)
    assert_eq!(enemy.row(), 1);
}

#[test]
fn spawn_grid_activates_every_enemy() {
    let formation = default_grid();

    assert_eq!(formation.len(), 30);
    assert_eq!(formation.active_count(), 30);
}

// ── drift and bounce ──────────────────────────────────────────────────────────

#[test]
fn advance_drifts_every_living_enemy() {
    let mut formation = default_grid();

    formation.advance(SCREEN_WIDTH);

    // Far away from both edges, everything moved one drift to the right
    assert_eq!(formation.get(0).unwrap().position().x, 29.0);
    assert_eq!(formation.get(29).unwrap().position().x, 497.0);
    assert_eq!(formation.drift(), 1.0);
}

#[test]
fn bounce_flips_the_drift_and_descends_in_the_same_tick() {
    let (mut formation, config) = cornered_enemy();

    // 28 + 10 = 38, extent 38 + 24 = 62 crosses the 60 unit screen
    formation.advance(config.screen_width);

    let enemy = formation.get(0).unwrap();
    assert_eq!(formation.drift(), -10.0);
    assert_eq!(enemy.position().x, 38.0); // the drift is not undone
    assert_eq!(enemy.position().y, 450.0); // 452 - 2
}

#[test]
fn bounce_does_not_repeat_while_moving_back_in() {
    let (mut formation, config) = cornered_enemy();

    formation.advance(config.screen_width);
    // Drifting back inward, extent 28 + 24 = 52 is inside again
    formation.advance(config.screen_width);

    let enemy = formation.get(0).unwrap();
    assert_eq!(formation.drift(), -10.0);
    assert_eq!(enemy.position().y, 450.0); // no second descent
}

#[test]
fn dead_enemies_neither_drift_nor_descend() {
    let config = SimulationConfig::default()
        .with_grid(1, 2)
        .with_screen_size(120.0, 480.0)
        .with_formation_drift(10.0);
    let mut formation = Formation::spawn_grid(&config);

    formation.deactivate(0);
    let resting_place = formation.get(0).unwrap().position();

    // Enemy 1 at 80 + 10 + 24 = 114 stays inside, keep going until it bounces
    for _ in 0..10 {
        formation.advance(config.screen_width);
    }

    assert!(formation.drift() < 0.0);
    assert_eq!(formation.get(0).unwrap().position(), resting_place);
}

#[test]
fn deactivation_is_permanent() {
    let mut formation = default_grid();

    formation.deactivate(5);
    for _ in 0..500 {
        formation.advance(SCREEN_WIDTH);
    }

    assert!(!formation.is_active(5));
    assert_eq!(formation.active_count(), 29);
}

// ── return fire ───────────────────────────────────────────────────────────────

#[test]
fn roll_fire_spawns_into_the_shared_pool() {
    let mut formation = default_grid();
    let mut rng = fastrand::Rng::with_seed(42);

    // 30 enemies rolling 4 in 1000 for 2000 ticks practically always fire
    for _ in 0..2000 {
        formation.roll_fire(&mut rng);
    }

    assert!(formation.bullets().active_count() > 0);
    assert!(formation.bullets().active_count() <= 20);
}

#[test]
fn roll_fire_on_an_exhausted_pool_is_silent() {
    let mut formation = default_grid();
    let mut rng = fastrand::Rng::with_seed(42);

    // Fill all twenty slots by hand
    for slot in 0..20 {
        let position = formation.get(0).unwrap().position();
        assert_eq!(formation.bullets_mut().spawn(position), Some(slot));
    }

    // Nothing advances, so no slot frees up and no roll can spawn
    for _ in 0..1000 {
        formation.roll_fire(&mut rng);
    }

    assert_eq!(formation.bullets().active_count(), 20);
}

#[test]
fn dead_enemies_do_not_roll() {
    let mut formation = default_grid();
    let mut rng = fastrand::Rng::with_seed(42);

    for index in 0..formation.len() {
        formation.deactivate(index);
    }

    for _ in 0..2000 {
        formation.roll_fire(&mut rng);
    }

    assert_eq!(formation.bullets().active_count(), 0);
}

#[test]
fn enemy_bullets_fall_at_the_descent_velocity() {
    let mut formation = default_grid();
    let position = formation.get(0).unwrap().position();
    formation.bullets_mut().spawn(position);

    formation.advance_bullets(480.0);

    let bullet = formation.bullets().get(0).unwrap();
    assert_eq!(bullet.position().y, position.y - 2.0);
}

// ── end to end ────────────────────────────────────────────────────────────────

#[test]
fn a_thousand_idle_ticks_keep_the_formation_whole() {
    // The normative scenario: 30 enemies in a 10x3 grid, radius 24, padding 4
    let mut formation = default_grid();
    let mut reversed = false;

    for _ in 0..1000 {
        formation.advance(SCREEN_WIDTH);

        if formation.drift() < 0.0 {
            reversed = true;
        }
    }

    // Nobody fired, nobody died, and the drift flipped at least once
    assert_eq!(formation.active_count(), 30);
    assert!(reversed);
}
