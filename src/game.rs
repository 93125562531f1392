//! The fixed-order tick driver.
//!
//! `Game` owns one session: settings, every entity, the phase/score state and
//! the spawn timer. Randomness and time are passed in on each call so callers
//! control determinism.

use rand::Rng;
use tracing::info;

use crate::collision;
use crate::entities::{Body, Bullet};
use crate::input::InputSnapshot;
use crate::kinematics::{advance_all, new_plane, recenter_plane, step_plane};
use crate::registry::EntityRegistry;
use crate::settings::Settings;
use crate::spawn::{create_fleet, plant_tree, populate_trees, SpawnTimer};
use crate::state::{GameState, Transition};

/// What happened during one call to `Game::tick`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// False when the session was over and the simulation did not run.
    pub simulated: bool,
    pub fired: bool,
    pub spawned: usize,
    pub kills: u32,
    pub drops: u32,
    pub pickups: u32,
    pub transition: Transition,
    pub culled: usize,
    pub trees_replaced: usize,
}

impl Default for TickReport {
    fn default() -> Self {
        Self {
            simulated: false,
            fired: false,
            spawned: 0,
            kills: 0,
            drops: 0,
            pickups: 0,
            transition: Transition::None,
            culled: 0,
            trees_replaced: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    pub settings: Settings,
    pub registry: EntityRegistry,
    pub state: GameState,
    pub spawn: SpawnTimer,
}

impl Game {
    /// Fresh session at `now_ms`: plane at its start, a full background and
    /// no enemies until the first spawn interval elapses.
    pub fn new(settings: Settings, now_ms: u64, rng: &mut impl Rng) -> Self {
        let mut registry = EntityRegistry::new(new_plane(&settings));
        populate_trees(&mut registry, &settings, rng);
        let spawn = SpawnTimer::new(now_ms, &settings, rng);
        let state = GameState::new(&settings);
        Self {
            settings,
            registry,
            state,
            spawn,
        }
    }

    /// Launch a bullet from the plane's nose. At the cap this does nothing.
    pub fn fire_bullet(&mut self) -> bool {
        if self.registry.bullets.len() >= self.settings.bullets_allowed {
            return false;
        }
        let nose = self.registry.plane.rect();
        let bullet = Bullet {
            x: nose.right() as f32,
            y: nose.centery() as f32 - self.settings.bullet_height / 2.0,
            width: self.settings.bullet_width,
            height: self.settings.bullet_height,
        };
        self.registry.bullets.insert(bullet);
        true
    }

    /// Advance one tick. While the session is over only a restart request
    /// is honoured and nothing moves.
    pub fn tick(&mut self, input: &InputSnapshot, now_ms: u64, rng: &mut impl Rng) -> TickReport {
        let mut report = TickReport::default();

        if !self.state.is_active() {
            if input.restart {
                report.transition = self.restart(now_ms, rng);
            }
            return report;
        }
        report.simulated = true;

        // ── 1. Player ────────────────────────────────────────────────────────
        self.registry.plane.intent = input.intent;
        if input.fire {
            report.fired = self.fire_bullet();
        }
        step_plane(&mut self.registry.plane, &self.settings);

        // ── 2. Spawning ──────────────────────────────────────────────────────
        if self.spawn.poll(now_ms, &self.settings, rng) {
            report.spawned = create_fleet(&mut self.registry, &self.settings, rng);
        }

        // ── 3. Everything else moves ─────────────────────────────────────────
        advance_all(&mut self.registry, &self.settings);

        // ── 4. Collisions ────────────────────────────────────────────────────
        let collisions =
            collision::resolve(&mut self.registry, &mut self.state, &self.settings, rng);
        report.kills = collisions.kills;
        report.drops = collisions.drops;
        report.pickups = collisions.pickups;
        report.transition = collisions.transition;

        if let Transition::LifeLost { .. } = collisions.transition {
            report.spawned += self.reset_round(now_ms, rng);
        }

        // ── 5. Off-screen cleanup ────────────────────────────────────────────
        let (culled, trees_replaced) = self.cull(rng);
        report.culled = culled;
        report.trees_replaced = trees_replaced;

        report
    }

    /// Start over after a game over: counters back to their initial values
    /// and the round reset. Does nothing while a session is running.
    pub fn restart(&mut self, now_ms: u64, rng: &mut impl Rng) -> Transition {
        let transition = self.state.restart();
        if transition == Transition::Restarted {
            self.reset_round(now_ms, rng);
        }
        transition
    }

    /// Wipe hostiles, recenter the plane and send in a fresh formation.
    fn reset_round(&mut self, now_ms: u64, rng: &mut impl Rng) -> usize {
        self.registry.clear_hostiles();
        recenter_plane(&mut self.registry.plane, &self.settings);
        self.spawn.rearm(now_ms, &self.settings, rng);
        let spawned = create_fleet(&mut self.registry, &self.settings, rng);
        info!(spawned = spawned as u64, "round reset");
        spawned
    }

    /// Drop everything that has fully left the play area. Bullets leave on
    /// the right; enemies, power-ups and trees on the left. Each departing
    /// tree is replaced at the right edge. Returns (culled, trees_replaced).
    fn cull(&mut self, rng: &mut impl Rng) -> (usize, usize) {
        let width = self.settings.screen_width as i32;
        let registry = &mut self.registry;

        for handle in registry.bullets.handles() {
            if registry.bullets.get(handle).is_some_and(|b| b.rect().left() >= width) {
                registry.bullets.mark_removed(handle);
            }
        }
        for handle in registry.enemies.handles() {
            if registry.enemies.get(handle).is_some_and(|e| e.rect().right() <= 0) {
                registry.enemies.mark_removed(handle);
            }
        }
        for handle in registry.powerups.handles() {
            if registry.powerups.get(handle).is_some_and(|p| p.rect().right() <= 0) {
                registry.powerups.mark_removed(handle);
            }
        }
        for handle in registry.trees.handles() {
            if registry.trees.get(handle).is_some_and(|t| t.rect().right() <= 0) {
                registry.trees.mark_removed(handle);
            }
        }

        let culled = registry.bullets.apply_removals()
            + registry.enemies.apply_removals()
            + registry.powerups.apply_removals();
        let trees_replaced = registry.trees.apply_removals();
        for _ in 0..trees_replaced {
            registry.trees.insert(plant_tree(&self.settings, rng, false));
        }
        (culled, trees_replaced)
    }
}
