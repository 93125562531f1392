//! Spawn timing and the factories that populate the registry.
//!
//! All randomness comes through an injected `Rng` so seeded tests can pin
//! formations and intervals down exactly.

use rand::Rng;
use tracing::info;

use crate::entities::{Enemy, Tree, TreeVariant};
use crate::registry::EntityRegistry;
use crate::settings::Settings;

// ── Formation timer ───────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct SpawnTimer {
    pub last_spawn_ms: u64,
    pub next_interval_ms: u64,
}

impl SpawnTimer {
    /// Start counting from `now_ms` with a freshly drawn interval.
    pub fn new(now_ms: u64, settings: &Settings, rng: &mut impl Rng) -> Self {
        Self {
            last_spawn_ms: now_ms,
            next_interval_ms: draw_interval(settings, rng),
        }
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_spawn_ms) >= self.next_interval_ms
    }

    /// Restart the countdown from `now_ms` and redraw the interval.
    pub fn rearm(&mut self, now_ms: u64, settings: &Settings, rng: &mut impl Rng) {
        self.last_spawn_ms = now_ms;
        self.next_interval_ms = draw_interval(settings, rng);
    }

    /// Once-per-tick decision. Returns true if the caller should create a
    /// fleet now; the timer has already been rearmed in that case.
    pub fn poll(&mut self, now_ms: u64, settings: &Settings, rng: &mut impl Rng) -> bool {
        if !self.is_due(now_ms) {
            return false;
        }
        self.rearm(now_ms, settings, rng);
        true
    }
}

fn draw_interval(settings: &Settings, rng: &mut impl Rng) -> u64 {
    rng.gen_range(settings.spawn_interval_min_ms..=settings.spawn_interval_max_ms)
}

// ── Enemy formations ──────────────────────────────────────────────────────────

/// Lay out up to `count` enemies in one column at the right edge, starting
/// one enemy-height from the top and stepping 1.5 heights down. The column
/// ends early once the next slot would pass `screen_height - enemy_height`.
pub fn plan_fleet(settings: &Settings, count: u32, direction: f32) -> Vec<Enemy> {
    let x = settings.screen_width - settings.enemy_width;
    let limit = settings.screen_height - settings.enemy_height;
    let step = 1.5 * settings.enemy_height;

    let mut fleet = Vec::new();
    let mut y = settings.enemy_height;
    while (fleet.len() as u32) < count && y <= limit {
        fleet.push(Enemy {
            x,
            y,
            width: settings.enemy_width,
            height: settings.enemy_height,
            direction,
        });
        y += step;
    }
    fleet
}

/// Pick a size and shared heading, then add the formation to the registry.
/// Returns how many enemies were actually placed.
pub fn create_fleet(
    registry: &mut EntityRegistry,
    settings: &Settings,
    rng: &mut impl Rng,
) -> usize {
    let count = rng.gen_range(settings.fleet_min..=settings.fleet_max);
    let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };

    let fleet = plan_fleet(settings, count, direction);
    let placed = fleet.len();
    for enemy in fleet {
        registry.enemies.insert(enemy);
    }
    info!(requested = count, placed = placed as u64, direction, "spawning fleet");
    placed
}

// ── Background trees ──────────────────────────────────────────────────────────

/// A new tree. `initial` scatters it across the whole screen; otherwise it
/// appears at the right edge.
pub fn plant_tree(settings: &Settings, rng: &mut impl Rng, initial: bool) -> Tree {
    let x = if initial {
        rng.gen_range(0.0..=settings.screen_width)
    } else {
        settings.screen_width
    };
    let y = rng.gen_range(0.0..=settings.screen_height - settings.tree_size);
    let variant = match rng.gen_range(0..3) {
        0 => TreeVariant::Oak,
        1 => TreeVariant::Pine,
        _ => TreeVariant::Shrub,
    };
    Tree {
        x,
        y,
        size: settings.tree_size,
        variant,
    }
}

/// Fill the background up to `tree_count` trees.
pub fn populate_trees(registry: &mut EntityRegistry, settings: &Settings, rng: &mut impl Rng) {
    while registry.trees.len() < settings.tree_count {
        registry.trees.insert(plant_tree(settings, rng, true));
    }
}
