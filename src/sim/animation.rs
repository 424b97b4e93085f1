//! Frame timing for two-frame entity animations.

/// Countdown timer cycling an entity through its sprite frames.
///
/// The counter starts at `tick_time - 1`, decreases by one every simulation
/// tick and wraps back to `tick_time - 1` after reaching zero.
/// The visible frame is the counter divided by half the cycle, so a cycle of
/// 6 ticks shows frame 1 for 3 ticks and then frame 0 for 3 ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTicker {
    /// Current counter value, `tick_time - 1 ..= 0`.
    tick: u32,
    /// Amount of ticks a full animation cycle takes.
    tick_time: u32,
    /// Amount of ticks a single frame is shown, half the cycle.
    tick_len: u32,
}

impl AnimationTicker {
    /// Create a ticker at the start of its cycle.
    ///
    /// # Arguments
    ///
    /// * `tick_time` - Amount of simulation ticks a full animation cycle takes, must be at least 2.
    ///
    /// # Panics
    ///
    /// - When the cycle is shorter than two ticks.
    #[inline]
    #[must_use]
    pub fn new(tick_time: u32) -> Self {
        assert!(tick_time >= 2, "animation cycle must take at least two ticks");

        Self {
            tick: tick_time - 1,
            tick_time,
            tick_len: tick_time / 2,
        }
    }

    /// Count down a single simulation tick, wrapping around at the end of the cycle.
    #[inline]
    pub fn advance(&mut self) {
        if self.tick == 0 {
            self.tick = self.tick_time - 1;
        } else {
            self.tick -= 1;
        }
    }

    /// Restart the cycle from the beginning.
    #[inline]
    pub fn reset(&mut self) {
        self.tick = self.tick_time - 1;
    }

    /// Sprite frame to show for the current counter value.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> usize {
        (self.tick / self.tick_len) as usize
    }
}
