//! Fixed-tick playfield simulation.
//!
//! Everything in this module is headless. The simulation advances in whole
//! ticks, positions move by exact per-tick velocities and the host decides
//! when a tick happens. Rendering reads the exported state and never writes
//! back.

pub mod animation;
pub mod bullet;
pub mod collision;
pub mod enemy;
pub mod player;

use glam::Vec3;

pub use self::{
    animation::AnimationTicker,
    bullet::{Bullet, BulletPool},
    collision::{resolve, Hit},
    enemy::{Enemy, Formation},
    player::{FireOutcome, Player},
};

/// Tunables for a playfield, defaulting to the full game.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Horizontal world size in units.
    ///
    /// Defaults to `640.0`.
    pub screen_width: f32,
    /// Vertical world size in units.
    ///
    /// Defaults to `480.0`.
    pub screen_height: f32,
    /// Starting position of the player ship.
    ///
    /// Defaults to `(320.0, 24.0, 0.0)`.
    pub player_start: Vec3,
    /// Horizontal distance the ship travels per tick while moving.
    ///
    /// Defaults to `4.0`.
    pub player_speed: f32,
    /// Vertical distance the ship's bullets travel per tick, upward.
    ///
    /// Defaults to `4.0`.
    pub player_bullet_speed: f32,
    /// Maximum amount of player bullets in flight.
    ///
    /// Defaults to `7`.
    pub player_bullet_capacity: usize,
    /// Culling radius of player bullets.
    ///
    /// Defaults to `10.0`.
    pub player_bullet_radius: f32,
    /// Amount of enemy rows, row zero is the top row.
    ///
    /// Defaults to `3`.
    pub enemy_rows: usize,
    /// Amount of enemies in a row.
    ///
    /// Defaults to `10`.
    pub enemy_cols: usize,
    /// Enemy radius, used for grid spacing, edge bouncing and collision.
    ///
    /// Defaults to `24.0`.
    pub enemy_radius: f32,
    /// Space between grid neighbors and to the screen edges.
    ///
    /// Defaults to `4.0`.
    pub grid_padding: f32,
    /// Starting horizontal velocity of the formation, positive is rightward.
    ///
    /// Defaults to `1.0`.
    pub formation_drift: f32,
    /// Vertical drop on a formation bounce, also the velocity of enemy bullets.
    ///
    /// Defaults to `-2.0`.
    pub formation_descent: f32,
    /// Maximum amount of enemy bullets in flight.
    ///
    /// Defaults to `20`.
    pub enemy_bullet_capacity: usize,
    /// Culling radius of enemy bullets.
    ///
    /// Defaults to `8.0`.
    pub enemy_bullet_radius: f32,
    /// Amount of ticks a full two-frame animation cycle takes.
    ///
    /// Defaults to `6`.
    pub tick_time: u32,
}

impl SimulationConfig {
    /// Set the world size in units.
    #[inline(always)]
    #[must_use]
    pub const fn with_screen_size(mut self, width: f32, height: f32) -> Self {
        self.screen_width = width;
        self.screen_height = height;

        self
    }

    /// Set the starting position of the player ship.
    #[inline(always)]
    #[must_use]
    pub const fn with_player_start(mut self, position: Vec3) -> Self {
        self.player_start = position;

        self
    }

    /// Set the per-tick speed of the player ship.
    #[inline(always)]
    #[must_use]
    pub const fn with_player_speed(mut self, speed: f32) -> Self {
        self.player_speed = speed;

        self
    }

    /// Set the per-tick upward speed of player bullets.
    #[inline(always)]
    #[must_use]
    pub const fn with_player_bullet_speed(mut self, speed: f32) -> Self {
        self.player_bullet_speed = speed;

        self
    }

    /// Set the capacity and radius of the player bullet pool.
    #[inline(always)]
    #[must_use]
    pub const fn with_player_bullets(mut self, capacity: usize, radius: f32) -> Self {
        self.player_bullet_capacity = capacity;
        self.player_bullet_radius = radius;

        self
    }

    /// Set the enemy grid dimensions, row zero is the top row.
    #[inline(always)]
    #[must_use]
    pub const fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.enemy_rows = rows;
        self.enemy_cols = cols;

        self
    }

    /// Set the enemy radius.
    #[inline(always)]
    #[must_use]
    pub const fn with_enemy_radius(mut self, radius: f32) -> Self {
        self.enemy_radius = radius;

        self
    }

    /// Set the space between grid neighbors and to the screen edges.
    #[inline(always)]
    #[must_use]
    pub const fn with_grid_padding(mut self, padding: f32) -> Self {
        self.grid_padding = padding;

        self
    }

    /// Set the starting horizontal velocity of the formation.
    #[inline(always)]
    #[must_use]
    pub const fn with_formation_drift(mut self, drift: f32) -> Self {
        self.formation_drift = drift;

        self
    }

    /// Set the vertical drop on a formation bounce.
    #[inline(always)]
    #[must_use]
    pub const fn with_formation_descent(mut self, descent: f32) -> Self {
        self.formation_descent = descent;

        self
    }

    /// Set the capacity and radius of the enemy bullet pool.
    #[inline(always)]
    #[must_use]
    pub const fn with_enemy_bullets(mut self, capacity: usize, radius: f32) -> Self {
        self.enemy_bullet_capacity = capacity;
        self.enemy_bullet_radius = radius;

        self
    }

    /// Set the animation cycle length in ticks.
    #[inline(always)]
    #[must_use]
    pub const fn with_tick_time(mut self, tick_time: u32) -> Self {
        self.tick_time = tick_time;

        self
    }
}

impl Default for SimulationConfig {
    #[inline]
    fn default() -> Self {
        Self {
            screen_width: 640.0,
            screen_height: 480.0,
            player_start: Vec3::new(320.0, 24.0, 0.0),
            player_speed: 4.0,
            player_bullet_speed: 4.0,
            player_bullet_capacity: 7,
            player_bullet_radius: 10.0,
            enemy_rows: 3,
            enemy_cols: 10,
            enemy_radius: 24.0,
            grid_padding: 4.0,
            formation_drift: 1.0,
            formation_descent: -2.0,
            enemy_bullet_capacity: 20,
            enemy_bullet_radius: 8.0,
            tick_time: 6,
        }
    }
}

/// Complete playfield state, advanced one tick at a time.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Tunables the playfield was created with.
    config: SimulationConfig,
    /// Player ship with its bullets.
    player: Player,
    /// Enemy grid with its return fire.
    formation: Formation,
    /// Randomness source for enemy fire rolls.
    rng: fastrand::Rng,
    /// Whether the state changed since the last [`Self::take_redraw`].
    needs_redraw: bool,
}

impl Simulation {
    /// Create a playfield with a randomly seeded fire roll.
    #[inline]
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_rng(config, fastrand::Rng::new())
    }

    /// Create a playfield rolling enemy fire from a fixed seed.
    ///
    /// Two playfields with the same configuration and seed, fed the same
    /// inputs, stay identical tick for tick.
    #[inline]
    #[must_use]
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Self {
        Self::with_rng(config, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(config: SimulationConfig, rng: fastrand::Rng) -> Self {
        let player = Player::new(&config);
        let formation = Formation::spawn_grid(&config);

        Self {
            config,
            player,
            formation,
            rng,
            needs_redraw: true,
        }
    }

    /// Advance the playfield by exactly one tick.
    ///
    /// The step order is fixed:
    ///
    /// 1. The player ship applies its movement intents and clamps.
    /// 2. Player bullets move and cull.
    /// 3. Collision downs enemies hit by player bullets.
    /// 4. The formation drifts, bouncing and descending at the edges.
    /// 5. Living enemies roll their fire chance.
    /// 6. Enemy bullets move and cull.
    /// 7. Every animation counter advances.
    /// 8. The redraw flag is raised.
    pub fn tick(&mut self) {
        self.player.advance(self.config.screen_width);
        self.player.advance_bullets(self.config.screen_height);

        let hits = collision::resolve(self.player.bullets_mut(), &mut self.formation);
        for hit in &hits {
            log::debug!("Bullet {} downed enemy {}", hit.bullet, hit.enemy);
        }

        self.formation.advance(self.config.screen_width);
        self.formation.roll_fire(&mut self.rng);
        self.formation.advance_bullets(self.config.screen_height);

        self.player.advance_animations();
        self.formation.advance_animations();

        self.needs_redraw = true;
    }

    /// Store the held movement intents for the next tick.
    #[inline]
    pub fn set_move_intent(&mut self, left: bool, right: bool) {
        self.player.set_move_intent(left, right);
    }

    /// Request a player bullet, see [`Player::try_fire`].
    #[inline]
    pub fn try_fire(&mut self) -> FireOutcome {
        self.player.try_fire()
    }

    /// Release the fire button, see [`Player::release_fire`].
    #[inline]
    pub fn release_fire(&mut self) {
        self.player.release_fire();
    }

    /// Whether the state changed since the last call, clearing the flag.
    ///
    /// Renderers use this to rebatch their instance data only when a tick
    /// actually happened.
    #[inline]
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Tunables the playfield was created with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The player ship.
    #[inline]
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// The player ship for direct control.
    #[inline]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// The enemy grid.
    #[inline]
    #[must_use]
    pub const fn formation(&self) -> &Formation {
        &self.formation
    }

    /// The enemy grid for direct control.
    #[inline]
    pub fn formation_mut(&mut self) -> &mut Formation {
        &mut self.formation
    }
}
