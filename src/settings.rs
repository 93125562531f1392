//! Static gameplay parameters, read-only once a session starts.
//!
//! World units are continuous "pixels"; the renderer decides how they map
//! onto whatever surface it draws on.
use crate::error::SettingsError;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub screen_width: f32,
    pub screen_height: f32,

    // Player plane
    pub plane_speed: f32,
    pub plane_width: f32,
    pub plane_height: f32,

    // Bullets
    pub bullet_speed: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    /// Max bullets alive at once. Firing at the cap is a no-op.
    pub bullets_allowed: usize,

    // Enemies
    pub enemy_speed: f32,
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub fleet_min: u32,
    pub fleet_max: u32,
    /// Milliseconds between formations, redrawn after every spawn.
    pub spawn_interval_min_ms: u64,
    pub spawn_interval_max_ms: u64,

    // Power-ups
    pub powerup_speed: f32,
    pub powerup_width: f32,
    pub powerup_height: f32,
    /// Probability in [0, 1] that a destroyed enemy drops an extra life.
    pub powerup_drop_chance: f64,

    // Background trees
    pub tree_count: usize,
    pub tree_speed: f32,
    pub tree_size: f32,

    pub initial_lives: u32,
    pub score_per_kill: u32,

    /// Target ticks per second for the frame limiter.
    pub tick_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1400.0,
            screen_height: 1000.0,

            plane_speed: 5.0,
            plane_width: 90.0,
            plane_height: 60.0,

            bullet_speed: 15.0,
            bullet_width: 15.0,
            bullet_height: 6.0,
            bullets_allowed: 10,

            enemy_speed: 2.0,
            enemy_width: 60.0,
            enemy_height: 40.0,
            fleet_min: 5,
            fleet_max: 12,
            spawn_interval_min_ms: 1500,
            spawn_interval_max_ms: 5000,

            powerup_speed: 1.5,
            powerup_width: 24.0,
            powerup_height: 32.0,
            powerup_drop_chance: 0.1,

            tree_count: 40,
            tree_speed: 1.2,
            tree_size: 7.0,

            initial_lives: 3,
            score_per_kill: 10,

            tick_rate: 120,
        }
    }
}

impl Settings {
    /// Check that the simulation can honor these parameters.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.screen_width >= 1.0 && self.screen_height >= 1.0) {
            return Err(SettingsError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        let sizes = [
            ("plane", self.plane_width, self.plane_height),
            ("bullet", self.bullet_width, self.bullet_height),
            ("enemy", self.enemy_width, self.enemy_height),
            ("power-up", self.powerup_width, self.powerup_height),
            ("tree", self.tree_size, self.tree_size),
        ];
        for (what, width, height) in sizes {
            let fits = width > 0.0
                && height > 0.0
                && width <= self.screen_width
                && height <= self.screen_height;
            if !fits {
                return Err(SettingsError::BadEntitySize {
                    what,
                    width,
                    height,
                    screen_width: self.screen_width,
                    screen_height: self.screen_height,
                });
            }
        }

        let speeds = [
            ("plane", self.plane_speed),
            ("bullet", self.bullet_speed),
            ("enemy", self.enemy_speed),
            ("power-up", self.powerup_speed),
            ("tree", self.tree_speed),
        ];
        for (what, value) in speeds {
            if !(value > 0.0) {
                return Err(SettingsError::NonPositiveSpeed { what, value });
            }
        }

        if !(0.0..=1.0).contains(&self.powerup_drop_chance) {
            return Err(SettingsError::DropChanceOutOfRange(self.powerup_drop_chance));
        }

        if self.fleet_min == 0 || self.fleet_min > self.fleet_max {
            return Err(SettingsError::EmptyRange {
                what: "fleet size",
                min: self.fleet_min as u64,
                max: self.fleet_max as u64,
            });
        }
        if self.spawn_interval_min_ms > self.spawn_interval_max_ms {
            return Err(SettingsError::EmptyRange {
                what: "spawn interval",
                min: self.spawn_interval_min_ms,
                max: self.spawn_interval_max_ms,
            });
        }

        if self.initial_lives == 0 {
            return Err(SettingsError::NoLives);
        }
        if self.tick_rate == 0 {
            return Err(SettingsError::ZeroTickRate);
        }
        Ok(())
    }
}
