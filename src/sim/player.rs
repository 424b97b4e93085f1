//! Player ship movement and edge-triggered firing.

use glam::Vec3;

use crate::sim::{animation::AnimationTicker, bullet::BulletPool, SimulationConfig};

/// Result of a fire request.
///
/// None of the variants are errors, the caller may ignore the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// A bullet was activated in the given slot.
    Fired(usize),
    /// Every bullet slot is already in flight, nothing was spawned.
    Full,
    /// The fire button is still held from a previous request.
    ///
    /// A new bullet needs [`Player::release_fire`] first.
    AlreadyFiring,
}

/// Player ship with its own bullet pool.
#[derive(Debug, Clone)]
pub struct Player {
    /// World position of the ship center.
    position: Vec3,
    /// Horizontal distance traveled per tick while a move intent is held.
    speed: f32,
    /// Vertical distance the ship's bullets travel per tick, upward.
    bullet_speed: f32,
    /// Whether the leftward intent is held this tick.
    move_left: bool,
    /// Whether the rightward intent is held this tick.
    move_right: bool,
    /// Whether the fire button is held, blocks repeated fire requests.
    firing: bool,
    /// Sprite frame counter.
    animation: AnimationTicker,
    /// Bullets owned by the ship.
    bullets: BulletPool,
}

impl Player {
    /// Create the ship at its starting position with an idle bullet pool.
    #[must_use]
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            position: config.player_start,
            speed: config.player_speed,
            bullet_speed: config.player_bullet_speed,
            move_left: false,
            move_right: false,
            firing: false,
            animation: AnimationTicker::new(config.tick_time),
            bullets: BulletPool::new(
                config.player_bullet_capacity,
                config.player_bullet_radius,
                config.tick_time,
            ),
        }
    }

    /// Store the held movement intents for the next [`Self::advance`] call.
    #[inline]
    pub fn set_move_intent(&mut self, left: bool, right: bool) {
        self.move_left = left;
        self.move_right = right;
    }

    /// Apply the stored movement intents and clamp the ship to the screen.
    ///
    /// Left is applied before right, holding both cancels out. The clamp
    /// keeps the ship center inside `0 ..= screen_width`.
    pub fn advance(&mut self, screen_width: f32) {
        if self.move_left {
            self.position.x -= self.speed;
        }
        if self.move_right {
            self.position.x += self.speed;
        }

        self.position.x = self.position.x.clamp(0.0, screen_width);
    }

    /// Request a new bullet at the ship's current position.
    ///
    /// Firing is edge triggered. The first request while the button is down
    /// claims a slot, every following request reports
    /// [`FireOutcome::AlreadyFiring`] until [`Self::release_fire`]. The
    /// button counts as held even when the pool had no free slot.
    pub fn try_fire(&mut self) -> FireOutcome {
        if self.firing {
            return FireOutcome::AlreadyFiring;
        }
        self.firing = true;

        match self.bullets.spawn(self.position) {
            Some(slot) => FireOutcome::Fired(slot),
            None => FireOutcome::Full,
        }
    }

    /// Release the fire button so the next request can claim a slot again.
    #[inline]
    pub fn release_fire(&mut self) {
        self.firing = false;
    }

    /// Move all bullets in flight upward and cull the ones leaving the screen.
    #[inline]
    pub fn advance_bullets(&mut self, screen_height: f32) {
        self.bullets.advance(self.bullet_speed, screen_height);
    }

    /// Count down the ship's animation and the animation of every bullet in flight.
    #[inline]
    pub fn advance_animations(&mut self) {
        self.animation.advance();
        self.bullets.advance_animations();
    }

    /// World position of the ship center.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Sprite frame to draw the ship with.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> usize {
        self.animation.frame()
    }

    /// Whether the fire button is currently held.
    #[inline]
    #[must_use]
    pub const fn is_firing(&self) -> bool {
        self.firing
    }

    /// The ship's bullet pool.
    #[inline]
    #[must_use]
    pub const fn bullets(&self) -> &BulletPool {
        &self.bullets
    }

    /// The ship's bullet pool for collision resolution.
    #[inline]
    pub fn bullets_mut(&mut self) -> &mut BulletPool {
        &mut self.bullets
    }
}
