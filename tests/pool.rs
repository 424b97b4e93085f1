use glam::Vec3;
use invaders::sim::BulletPool;

/// Screen height used by every test.
const SCREEN_HEIGHT: f32 = 480.0;

fn make_pool(capacity: usize) -> BulletPool {
    // Radius 5 and a six tick animation cycle, the stage 07 tuning
    BulletPool::new(capacity, 5.0, 6)
}

fn origin(x: f32, y: f32) -> Vec3 {
    Vec3::new(x, y, 0.0)
}

// ── spawn ─────────────────────────────────────────────────────────────────────

#[test]
fn spawn_hands_out_slots_in_index_order() {
    let mut pool = make_pool(3);

    assert_eq!(pool.spawn(origin(10.0, 20.0)), Some(0));
    assert_eq!(pool.spawn(origin(11.0, 20.0)), Some(1));
    assert_eq!(pool.spawn(origin(12.0, 20.0)), Some(2));
}

#[test]
fn spawn_places_the_bullet_at_the_origin() {
    let mut pool = make_pool(3);

    pool.spawn(origin(123.0, 45.0));

    let bullet = pool.get(0).unwrap();
    assert_eq!(bullet.position(), origin(123.0, 45.0));
    assert!(bullet.is_active());
}

#[test]
fn spawn_on_a_full_pool_is_a_silent_no_op() {
    let mut pool = make_pool(2);
    pool.spawn(origin(0.0, 0.0));
    pool.spawn(origin(1.0, 0.0));

    // The pool is full, the request is dropped
    assert_eq!(pool.spawn(origin(2.0, 0.0)), None);
    assert_eq!(pool.active_count(), 2);
}

#[test]
fn spawn_reuses_the_first_freed_slot() {
    let mut pool = make_pool(3);
    pool.spawn(origin(0.0, 0.0));
    pool.spawn(origin(1.0, 0.0));
    pool.spawn(origin(2.0, 0.0));

    pool.deactivate(1);

    assert_eq!(pool.spawn(origin(9.0, 9.0)), Some(1));
    assert_eq!(pool.active_count(), 3);
}

#[test]
fn spawn_restarts_the_animation_cycle() {
    let mut pool = make_pool(1);
    pool.spawn(origin(0.0, 0.0));

    // Counter 5 / half cycle 3 shows frame 1, three advances reach frame 0
    assert_eq!(pool.get(0).unwrap().frame(), 1);
    pool.advance_animations();
    pool.advance_animations();
    pool.advance_animations();
    assert_eq!(pool.get(0).unwrap().frame(), 0);

    // Recycling the slot starts the cycle over
    pool.deactivate(0);
    pool.spawn(origin(0.0, 0.0));
    assert_eq!(pool.get(0).unwrap().frame(), 1);
}

// ── advance ───────────────────────────────────────────────────────────────────

#[test]
fn advance_moves_by_exactly_the_velocity() {
    let mut pool = make_pool(1);
    pool.spawn(origin(100.0, 50.0));

    pool.advance(4.0, SCREEN_HEIGHT);

    assert_eq!(pool.get(0).unwrap().position(), origin(100.0, 54.0));
}

#[test]
fn advance_culls_above_the_top_bound_in_the_same_tick() {
    let mut pool = make_pool(1);
    // 476 + 10 = 486, 486 - 5 = 481 > 480, gone the same tick it crossed
    pool.spawn(origin(100.0, 476.0));

    pool.advance(10.0, SCREEN_HEIGHT);

    assert!(!pool.is_active(0));
}

#[test]
fn advance_keeps_a_bullet_touching_the_top_bound() {
    let mut pool = make_pool(1);
    // 475 + 10 = 485, 485 - 5 = 480 is not above the bound
    pool.spawn(origin(100.0, 475.0));

    pool.advance(10.0, SCREEN_HEIGHT);

    assert!(pool.is_active(0));
}

#[test]
fn advance_culls_below_the_bottom_bound_in_the_same_tick() {
    let mut pool = make_pool(1);
    // 4 - 10 = -6, -6 + 5 = -1 < 0, enemy bullets fall off the bottom
    pool.spawn(origin(100.0, 4.0));

    pool.advance(-10.0, SCREEN_HEIGHT);

    assert!(!pool.is_active(0));
}

#[test]
fn advance_never_moves_an_inactive_bullet() {
    let mut pool = make_pool(1);
    pool.spawn(origin(100.0, 476.0));

    // Culled on the first advance
    pool.advance(10.0, SCREEN_HEIGHT);
    let resting_place = pool.get(0).unwrap().position();

    // Every following advance leaves it untouched
    pool.advance(10.0, SCREEN_HEIGHT);
    pool.advance(10.0, SCREEN_HEIGHT);

    assert_eq!(pool.get(0).unwrap().position(), resting_place);
    assert!(!pool.is_active(0));
}

// ── deactivate ────────────────────────────────────────────────────────────────

#[test]
fn deactivate_takes_effect_immediately() {
    let mut pool = make_pool(2);
    pool.spawn(origin(0.0, 0.0));
    pool.spawn(origin(1.0, 0.0));

    pool.deactivate(0);

    assert!(!pool.is_active(0));
    assert!(pool.is_active(1));
    assert_eq!(pool.active_count(), 1);
}

#[test]
fn deactivate_ignores_unknown_slots() {
    let mut pool = make_pool(2);
    pool.spawn(origin(0.0, 0.0));

    pool.deactivate(100);

    assert_eq!(pool.active_count(), 1);
}

// ── iteration ─────────────────────────────────────────────────────────────────

#[test]
fn iter_active_skips_inactive_slots() {
    let mut pool = make_pool(4);
    pool.spawn(origin(0.0, 0.0));
    pool.spawn(origin(1.0, 0.0));
    pool.spawn(origin(2.0, 0.0));
    pool.deactivate(1);

    let slots: Vec<usize> = pool.iter_active().map(|(slot, _)| slot).collect();

    assert_eq!(slots, vec![0, 2]);
}

#[test]
fn capacity_is_fixed_at_creation() {
    let pool = make_pool(7);

    assert_eq!(pool.capacity(), 7);
    assert_eq!(pool.active_count(), 0);
}
