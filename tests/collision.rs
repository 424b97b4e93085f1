use glam::Vec3;
use invaders::sim::{resolve, BulletPool, Formation, Hit, SimulationConfig};

fn make_bullets() -> BulletPool {
    BulletPool::new(7, 5.0, 6)
}

/// A single enemy at (28, 452), the top left grid slot.
fn single_enemy() -> Formation {
    Formation::spawn_grid(&SimulationConfig::default().with_grid(1, 1))
}

// ── hit test ──────────────────────────────────────────────────────────────────

#[test]
fn a_bullet_exactly_on_the_radius_hits() {
    let mut bullets = make_bullets();
    let mut formation = single_enemy();

    // 24 to the right of the center, squared distance 576 = 24^2
    bullets.spawn(Vec3::new(52.0, 452.0, 0.0));

    let hits = resolve(&mut bullets, &mut formation);

    assert_eq!(hits.as_slice(), &[Hit { bullet: 0, enemy: 0 }]);
    assert!(!bullets.is_active(0));
    assert!(!formation.is_active(0));
}

#[test]
fn a_bullet_outside_the_radius_misses() {
    let mut bullets = make_bullets();
    let mut formation = single_enemy();

    // 25 away, just past the enemy radius
    bullets.spawn(Vec3::new(53.0, 452.0, 0.0));

    let hits = resolve(&mut bullets, &mut formation);

    assert!(hits.is_empty());
    assert!(bullets.is_active(0));
    assert!(formation.is_active(0));
}

#[test]
fn the_distance_is_measured_in_both_axes() {
    let mut bullets = make_bullets();
    let mut formation = single_enemy();

    // Same x, 30 below the center, outside the radius
    bullets.spawn(Vec3::new(28.0, 422.0, 0.0));

    assert!(resolve(&mut bullets, &mut formation).is_empty());

    // 20 below the center is inside
    let mut formation = single_enemy();
    bullets.deactivate(0);
    bullets.spawn(Vec3::new(28.0, 432.0, 0.0));

    assert_eq!(resolve(&mut bullets, &mut formation).len(), 1);
}

#[test]
fn the_bullet_radius_plays_no_part() {
    // A pool with a huge bullet radius behaves exactly like a small one
    let mut bullets = BulletPool::new(7, 100.0, 6);
    let mut formation = single_enemy();

    bullets.spawn(Vec3::new(53.0, 452.0, 0.0));

    assert!(resolve(&mut bullets, &mut formation).is_empty());
}

// ── matching order ────────────────────────────────────────────────────────────

#[test]
fn the_earlier_slot_wins_a_shared_enemy() {
    let mut bullets = make_bullets();
    let mut formation = single_enemy();

    // Both bullets are within the radius of the same enemy
    bullets.spawn(Vec3::new(20.0, 452.0, 0.0));
    bullets.spawn(Vec3::new(36.0, 452.0, 0.0));

    let hits = resolve(&mut bullets, &mut formation);

    // Only the earlier slot scores, the later one keeps flying
    assert_eq!(hits.as_slice(), &[Hit { bullet: 0, enemy: 0 }]);
    assert!(!bullets.is_active(0));
    assert!(bullets.is_active(1));
    assert!(!formation.is_active(0));
}

#[test]
fn a_bullet_downs_at_most_one_enemy() {
    // Zero padding packs two enemies 48 apart, centers at 24 and 72
    let config = SimulationConfig::default()
        .with_grid(1, 2)
        .with_grid_padding(0.0);
    let mut formation = Formation::spawn_grid(&config);
    let mut bullets = make_bullets();

    // Dead center between the two, 24 from both
    let y = formation.get(0).unwrap().position().y;
    bullets.spawn(Vec3::new(48.0, y, 0.0));

    let hits = resolve(&mut bullets, &mut formation);

    assert_eq!(hits.as_slice(), &[Hit { bullet: 0, enemy: 0 }]);
    assert!(formation.is_active(1));
}

#[test]
fn dead_enemies_are_invisible_to_bullets() {
    let mut bullets = make_bullets();
    let mut formation = single_enemy();
    formation.deactivate(0);

    // Right on top of the corpse
    bullets.spawn(Vec3::new(28.0, 452.0, 0.0));

    assert!(resolve(&mut bullets, &mut formation).is_empty());
    assert!(bullets.is_active(0));
}

#[test]
fn hits_are_reported_in_bullet_slot_order() {
    let config = SimulationConfig::default().with_grid(1, 2);
    let mut formation = Formation::spawn_grid(&config);
    let mut bullets = make_bullets();

    let first = formation.get(0).unwrap().position();
    let second = formation.get(1).unwrap().position();

    // Bullet 0 sits on the second enemy, bullet 1 on the first
    bullets.spawn(second);
    bullets.spawn(first);

    let hits = resolve(&mut bullets, &mut formation);

    assert_eq!(
        hits.as_slice(),
        &[Hit { bullet: 0, enemy: 1 }, Hit { bullet: 1, enemy: 0 }]
    );
}

#[test]
fn inactive_bullets_do_not_scan() {
    let mut bullets = make_bullets();
    let mut formation = single_enemy();

    bullets.spawn(Vec3::new(28.0, 452.0, 0.0));
    bullets.deactivate(0);

    assert!(resolve(&mut bullets, &mut formation).is_empty());
    assert!(formation.is_active(0));
}
