//! Bullet to enemy collision resolution.

use smallvec::SmallVec;

use crate::sim::{bullet::BulletPool, enemy::Formation};

/// A bullet downing an enemy, by slot and grid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// Pool slot of the bullet that scored.
    pub bullet: usize,
    /// Grid index of the enemy that was downed.
    pub enemy: usize,
}

/// Match every bullet in flight against every living enemy.
///
/// Bullets scan in slot order, enemies in grid order. A hit counts when the
/// squared distance between the two centers is at most the squared enemy
/// radius, the bullet's own radius plays no part. On a hit both are
/// deactivated on the spot and the bullet stops scanning, so one bullet
/// downs at most one enemy per tick and an enemy downed by an earlier slot
/// is invisible to later ones.
///
/// # Returns
///
/// - Every hit scored this tick, in bullet slot order.
pub fn resolve(bullets: &mut BulletPool, formation: &mut Formation) -> SmallVec<[Hit; 8]> {
    let mut hits = SmallVec::new();
    let radius_squared = formation.radius() * formation.radius();

    for bullet_slot in 0..bullets.capacity() {
        let bullet_position = match bullets.get(bullet_slot) {
            Some(bullet) if bullet.is_active() => bullet.position(),
            _ => continue,
        };

        for enemy_index in 0..formation.len() {
            let enemy_position = match formation.get(enemy_index) {
                Some(enemy) if enemy.is_active() => enemy.position(),
                _ => continue,
            };

            let distance_squared = (bullet_position - enemy_position)
                .truncate()
                .length_squared();
            if distance_squared <= radius_squared {
                bullets.deactivate(bullet_slot);
                formation.deactivate(enemy_index);
                hits.push(Hit {
                    bullet: bullet_slot,
                    enemy: enemy_index,
                });

                break;
            }
        }
    }

    hits
}
