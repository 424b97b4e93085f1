//! Fixed-capacity projectile pool with slot recycling.

use glam::Vec3;

use crate::sim::animation::AnimationTicker;

/// Single projectile slot.
#[derive(Debug, Clone)]
pub struct Bullet {
    /// World position of the center.
    position: Vec3,
    /// Whether this slot is currently live.
    active: bool,
    /// Sprite frame counter.
    animation: AnimationTicker,
}

impl Bullet {
    /// World position of the bullet center.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Whether this slot is currently live.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Sprite frame to draw the bullet with.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> usize {
        self.animation.frame()
    }
}

/// Pool of projectile slots with a capacity fixed at creation.
///
/// Slots are handed out in index order and recycled when a bullet leaves the
/// screen or hits something. Requests on a full pool are dropped without an
/// error, an arcade shooter allows only so many shots in flight.
#[derive(Debug, Clone)]
pub struct BulletPool {
    /// All slots, active and inactive.
    slots: Vec<Bullet>,
    /// Collision and culling radius shared by all bullets of this pool.
    radius: f32,
}

impl BulletPool {
    /// Create a pool with all slots inactive.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum amount of bullets in flight at the same time.
    /// * `radius` - Radius shared by all bullets, used for culling at the screen bounds.
    /// * `tick_time` - Animation cycle length in simulation ticks.
    #[must_use]
    pub fn new(capacity: usize, radius: f32, tick_time: u32) -> Self {
        let slots = vec![
            Bullet {
                position: Vec3::ZERO,
                active: false,
                animation: AnimationTicker::new(tick_time),
            };
            capacity
        ];

        Self { slots, radius }
    }

    /// Activate the first free slot at the given position.
    ///
    /// The slot's animation restarts from the beginning of its cycle.
    ///
    /// # Returns
    ///
    /// - Index of the activated slot.
    /// - `None` when every slot is in flight, the request is dropped.
    pub fn spawn(&mut self, origin: Vec3) -> Option<usize> {
        let Some(index) = self.slots.iter().position(|bullet| !bullet.active) else {
            log::debug!("Bullet pool exhausted, dropping spawn request");

            return None;
        };

        let bullet = &mut self.slots[index];
        bullet.position = origin;
        bullet.active = true;
        bullet.animation.reset();

        Some(index)
    }

    /// Move every active bullet along the vertical axis and cull it when it leaves the screen.
    ///
    /// Movement and culling happen in the same tick, a bullet crossing the
    /// bound this tick is deactivated immediately. Inactive bullets never
    /// move.
    ///
    /// # Arguments
    ///
    /// * `velocity` - Exact vertical distance to travel this tick, negative is downward.
    /// * `screen_height` - Upper screen bound, the lower bound is zero.
    pub fn advance(&mut self, velocity: f32, screen_height: f32) {
        for bullet in self.slots.iter_mut().filter(|bullet| bullet.active) {
            bullet.position.y += velocity;

            let above = bullet.position.y - self.radius > screen_height;
            let below = bullet.position.y + self.radius < 0.0;
            if above || below {
                bullet.active = false;
            }
        }
    }

    /// Count down the animation of every active bullet.
    pub fn advance_animations(&mut self) {
        for bullet in self.slots.iter_mut().filter(|bullet| bullet.active) {
            bullet.animation.advance();
        }
    }

    /// Free a slot so it can be recycled.
    ///
    /// Takes effect immediately, the slot is invisible to everything running
    /// later in the same tick. Unknown slots are ignored.
    #[inline]
    pub fn deactivate(&mut self, slot: usize) {
        if let Some(bullet) = self.slots.get_mut(slot) {
            bullet.active = false;
        }
    }

    /// Whether the slot exists and is currently in flight.
    #[inline]
    #[must_use]
    pub fn is_active(&self, slot: usize) -> bool {
        self.slots.get(slot).is_some_and(Bullet::is_active)
    }

    /// Look at a single slot.
    #[inline]
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Bullet> {
        self.slots.get(slot)
    }

    /// Iterate over all bullets in flight with their slot index.
    #[inline]
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Bullet)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, bullet)| bullet.active)
    }

    /// Amount of bullets currently in flight.
    #[inline]
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|bullet| bullet.active).count()
    }

    /// Total amount of slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Radius shared by all bullets of this pool.
    #[inline]
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }
}
