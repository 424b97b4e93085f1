//! Enemy grid drifting across the screen and firing back.

use glam::Vec3;

use crate::sim::{animation::AnimationTicker, bullet::BulletPool, SimulationConfig};

/// Single enemy in the formation.
#[derive(Debug, Clone)]
pub struct Enemy {
    /// World position of the enemy center.
    position: Vec3,
    /// Whether the enemy is still alive.
    active: bool,
    /// Grid row the enemy spawned in, row zero is the top row.
    row: usize,
    /// Sprite frame counter.
    animation: AnimationTicker,
}

impl Enemy {
    /// World position of the enemy center.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Whether the enemy is still alive.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Grid row the enemy spawned in, row zero is the top row.
    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Sprite frame to draw the enemy with.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> usize {
        self.animation.frame()
    }
}

/// Grid of enemies moving as one, with a shared pool of return fire.
///
/// The whole formation drifts horizontally at a shared velocity. When any
/// living enemy pokes over a screen edge the drift direction flips and every
/// living enemy drops down a fixed distance, in the same tick.
#[derive(Debug, Clone)]
pub struct Formation {
    /// All enemies in row-major order, dead ones keep their index.
    enemies: Vec<Enemy>,
    /// Signed horizontal distance every living enemy travels per tick.
    drift: f32,
    /// Vertical drop applied on a bounce, also the per-tick velocity of enemy bullets.
    descent: f32,
    /// Enemy radius, used for edge bouncing and as the collision radius.
    radius: f32,
    /// Return fire shared by the whole formation.
    bullets: BulletPool,
}

impl Formation {
    /// Lay out the grid along the top of the screen.
    ///
    /// Enemies are placed in row-major order. With index `i`,
    /// `col = i % cols` and `row = i / cols`, each position steps by a full
    /// enemy diameter plus the padding, and the vertical axis is mirrored so
    /// row zero sits at the top of the screen.
    #[must_use]
    pub fn spawn_grid(config: &SimulationConfig) -> Self {
        let step = 2.0 * config.enemy_radius + config.grid_padding;
        let offset = config.grid_padding + config.enemy_radius;

        let enemies = (0..config.enemy_rows * config.enemy_cols)
            .map(|index| {
                let col = index % config.enemy_cols;
                let row = index / config.enemy_cols;

                let x = offset + step * col as f32;
                let y = config.screen_height - (offset + step * row as f32);

                Enemy {
                    position: Vec3::new(x, y, 0.0),
                    active: true,
                    row,
                    animation: AnimationTicker::new(config.tick_time),
                }
            })
            .collect();

        Self {
            enemies,
            drift: config.formation_drift,
            descent: config.formation_descent,
            radius: config.enemy_radius,
            bullets: BulletPool::new(
                config.enemy_bullet_capacity,
                config.enemy_bullet_radius,
                config.tick_time,
            ),
        }
    }

    /// Drift every living enemy and bounce the formation off the screen edges.
    ///
    /// After drifting, if any living enemy's horizontal extent crossed either
    /// edge the drift direction flips and every living enemy descends in the
    /// same tick. Dead enemies never move.
    pub fn advance(&mut self, screen_width: f32) {
        for enemy in self.enemies.iter_mut().filter(|enemy| enemy.active) {
            enemy.position.x += self.drift;
        }

        let crossed_edge = self.enemies.iter().any(|enemy| {
            enemy.active
                && (enemy.position.x - self.radius < 0.0
                    || enemy.position.x + self.radius > screen_width)
        });
        if crossed_edge {
            self.drift = -self.drift;

            for enemy in self.enemies.iter_mut().filter(|enemy| enemy.active) {
                enemy.position.y += self.descent;
            }

            log::debug!("Formation bounced, now drifting at {}", self.drift);
        }
    }

    /// Let every living enemy roll a fire chance, spawning return fire on success.
    ///
    /// Each living enemy rolls independently with a 4 in 1000 chance per
    /// tick. A successful roll spawns one bullet at the enemy's position,
    /// silently dropped when the shared pool is exhausted.
    pub fn roll_fire(&mut self, rng: &mut fastrand::Rng) {
        for enemy in &self.enemies {
            if enemy.active && rng.u16(..1000) > 995 {
                let _ = self.bullets.spawn(enemy.position);
            }
        }
    }

    /// Move all return fire downward and cull bullets leaving the screen.
    #[inline]
    pub fn advance_bullets(&mut self, screen_height: f32) {
        self.bullets.advance(self.descent, screen_height);
    }

    /// Count down the animation of every living enemy and every bullet in flight.
    pub fn advance_animations(&mut self) {
        for enemy in self.enemies.iter_mut().filter(|enemy| enemy.active) {
            enemy.animation.advance();
        }
        self.bullets.advance_animations();
    }

    /// Kill an enemy, its grid slot is never refilled.
    ///
    /// Takes effect immediately. Unknown indices are ignored.
    #[inline]
    pub fn deactivate(&mut self, index: usize) {
        if let Some(enemy) = self.enemies.get_mut(index) {
            enemy.active = false;
        }
    }

    /// Whether the enemy exists and is still alive.
    #[inline]
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.enemies.get(index).is_some_and(Enemy::is_active)
    }

    /// Look at a single enemy.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Enemy> {
        self.enemies.get(index)
    }

    /// Iterate over all living enemies with their grid index.
    #[inline]
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Enemy)> {
        self.enemies
            .iter()
            .enumerate()
            .filter(|(_, enemy)| enemy.active)
    }

    /// Amount of living enemies.
    #[inline]
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.enemies.iter().filter(|enemy| enemy.active).count()
    }

    /// Total amount of grid slots, dead enemies included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    /// Whether the grid was spawned without any enemies.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Current signed drift velocity.
    #[inline]
    #[must_use]
    pub const fn drift(&self) -> f32 {
        self.drift
    }

    /// Enemy radius, also the radius bullets collide against.
    #[inline]
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// The formation's return fire pool.
    #[inline]
    #[must_use]
    pub const fn bullets(&self) -> &BulletPool {
        &self.bullets
    }

    /// The formation's return fire pool for direct spawning.
    #[inline]
    pub fn bullets_mut(&mut self) -> &mut BulletPool {
        &mut self.bullets
    }
}
