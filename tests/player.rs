use glam::Vec3;
use invaders::sim::{FireOutcome, Player, SimulationConfig};

/// Screen width used by every test.
const SCREEN_WIDTH: f32 = 640.0;

fn make_player() -> Player {
    // Default tuning: start (320, 24), speed 4, seven bullet slots
    Player::new(&SimulationConfig::default())
}

// ── movement ──────────────────────────────────────────────────────────────────

#[test]
fn advance_moves_left_by_the_speed() {
    let mut player = make_player();

    player.set_move_intent(true, false);
    player.advance(SCREEN_WIDTH);

    assert_eq!(player.position().x, 316.0); // 320 - 4
}

#[test]
fn advance_moves_right_by_the_speed() {
    let mut player = make_player();

    player.set_move_intent(false, true);
    player.advance(SCREEN_WIDTH);

    assert_eq!(player.position().x, 324.0); // 320 + 4
}

#[test]
fn advance_with_both_intents_is_net_zero() {
    let mut player = make_player();

    // Left applies first, right undoes it
    player.set_move_intent(true, true);
    player.advance(SCREEN_WIDTH);

    assert_eq!(player.position().x, 320.0);
}

#[test]
fn advance_clamps_at_the_left_edge() {
    let mut player = make_player();
    player.set_move_intent(true, false);

    // 320 / 4 = 80 ticks reach the edge, then it sticks
    for _ in 0..100 {
        player.advance(SCREEN_WIDTH);
    }

    assert_eq!(player.position().x, 0.0);
}

#[test]
fn advance_clamps_at_the_right_edge() {
    let mut player = make_player();
    player.set_move_intent(false, true);

    for _ in 0..100 {
        player.advance(SCREEN_WIDTH);
    }

    assert_eq!(player.position().x, SCREEN_WIDTH);
}

#[test]
fn position_stays_in_bounds_for_any_intent_sequence() {
    let mut player = make_player();
    let mut rng = fastrand::Rng::with_seed(7);

    for _ in 0..1000 {
        player.set_move_intent(rng.bool(), rng.bool());
        player.advance(SCREEN_WIDTH);

        let x = player.position().x;
        assert!((0.0..=SCREEN_WIDTH).contains(&x));
    }
}

// ── firing ────────────────────────────────────────────────────────────────────

#[test]
fn try_fire_spawns_at_the_player_position() {
    let mut player = make_player();

    assert_eq!(player.try_fire(), FireOutcome::Fired(0));

    let bullet = player.bullets().get(0).unwrap();
    assert_eq!(bullet.position(), Vec3::new(320.0, 24.0, 0.0));
    assert_eq!(player.bullets().active_count(), 1);
}

#[test]
fn try_fire_is_edge_triggered() {
    let mut player = make_player();

    assert_eq!(player.try_fire(), FireOutcome::Fired(0));

    // Holding the button does not repeat fire
    assert_eq!(player.try_fire(), FireOutcome::AlreadyFiring);
    assert_eq!(player.try_fire(), FireOutcome::AlreadyFiring);
    assert_eq!(player.bullets().active_count(), 1);

    // Releasing arms the next press
    player.release_fire();
    assert_eq!(player.try_fire(), FireOutcome::Fired(1));
}

#[test]
fn try_fire_on_a_full_pool_is_a_no_op() {
    let mut player = make_player();

    // Drain all seven slots
    for slot in 0..7 {
        assert_eq!(player.try_fire(), FireOutcome::Fired(slot));
        player.release_fire();
    }

    // The eighth press before any slot frees does nothing
    assert_eq!(player.try_fire(), FireOutcome::Full);
    assert_eq!(player.bullets().active_count(), 7);
}

#[test]
fn a_full_outcome_still_counts_as_holding_the_button() {
    let mut player = make_player();
    for _ in 0..7 {
        player.try_fire();
        player.release_fire();
    }

    assert_eq!(player.try_fire(), FireOutcome::Full);

    // The button is held even though nothing spawned
    assert!(player.is_firing());
    assert_eq!(player.try_fire(), FireOutcome::AlreadyFiring);
}

#[test]
fn fired_bullets_reuse_freed_slots_in_order() {
    let mut player = make_player();
    assert_eq!(player.try_fire(), FireOutcome::Fired(0));
    player.release_fire();

    // Fire the remaining six slots
    for slot in 1..7 {
        assert_eq!(player.try_fire(), FireOutcome::Fired(slot));
        player.release_fire();
    }

    // Freeing one slot makes exactly that one available again
    player.bullets_mut().deactivate(3);
    assert_eq!(player.try_fire(), FireOutcome::Fired(3));
}

// ── animation ─────────────────────────────────────────────────────────────────

#[test]
fn animation_oscillates_between_two_frames() {
    let mut player = make_player();

    // Cycle of 6: counter 5, 4, 3 show frame 1, then 2, 1, 0 show frame 0
    assert_eq!(player.frame(), 1);

    player.advance_animations();
    player.advance_animations();
    player.advance_animations();
    assert_eq!(player.frame(), 0);

    player.advance_animations();
    player.advance_animations();
    player.advance_animations();
    // Wrapped back to the start of the cycle
    assert_eq!(player.frame(), 1);
}

#[test]
fn bullet_animations_advance_with_the_player() {
    let mut player = make_player();
    player.try_fire();

    player.advance_animations();
    player.advance_animations();
    player.advance_animations();

    assert_eq!(player.bullets().get(0).unwrap().frame(), 0);
}
