//! Host configuration for the window and the tick scheduler.

/// Initial configuration passed to [`crate::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Width of the world projection in units.
    ///
    /// Defaults to `640.0`.
    pub buffer_width: f32,
    /// Height of the world projection in units.
    ///
    /// Defaults to `480.0`.
    pub buffer_height: f32,
    /// Name in the title bar.
    ///
    /// Defaults to `"invaders"`.
    pub title: String,
    /// Amount of simulation ticks per second.
    ///
    /// Defaults to `50`.
    pub updates_per_second: u32,
    /// Color the frame is cleared with, in `0xAARRGGBB` format.
    ///
    /// Defaults to opaque black, `0xFF000000`.
    pub background_color: u32,
    /// Whether to wait for the vertical blank before presenting.
    ///
    /// Defaults to `true`.
    pub vsync: bool,
}

impl GameConfig {
    /// Set the size of the world projection in units.
    #[inline(always)]
    #[must_use]
    pub const fn with_buffer_size(mut self, width: f32, height: f32) -> Self {
        self.buffer_width = width;
        self.buffer_height = height;

        self
    }

    /// Set the name in the title bar.
    #[inline(always)]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();

        self
    }

    /// Set the amount of simulation ticks per second.
    #[inline(always)]
    #[must_use]
    pub const fn with_updates_per_second(mut self, updates_per_second: u32) -> Self {
        self.updates_per_second = updates_per_second;

        self
    }

    /// Set the clear color, in `0xAARRGGBB` format.
    #[inline(always)]
    #[must_use]
    pub const fn with_background_color(mut self, background_color: u32) -> Self {
        self.background_color = background_color;

        self
    }

    /// Set whether to wait for the vertical blank before presenting.
    #[inline(always)]
    #[must_use]
    pub const fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;

        self
    }

    /// Seconds between two simulation ticks.
    #[inline]
    #[must_use]
    pub fn update_delta_time(&self) -> f32 {
        1.0 / self.updates_per_second as f32
    }
}

impl Default for GameConfig {
    #[inline]
    fn default() -> Self {
        Self {
            buffer_width: 640.0,
            buffer_height: 480.0,
            title: String::from("invaders"),
            updates_per_second: 50,
            background_color: 0xFF00_0000,
            vsync: true,
        }
    }
}
