//! Per-tick position integration.
//!
//! Explicit Euler with a fixed step: every call moves an entity by its
//! per-kind speed exactly once. There is no delta-time; the loop runs at a
//! fixed rate.

use crate::entities::{Bullet, Enemy, MoveIntent, Plane, PowerUp, Tree};
use crate::registry::EntityRegistry;
use crate::settings::Settings;

// ── Player ────────────────────────────────────────────────────────────────────

/// Mid-left of the screen, where every round starts.
pub fn plane_start(settings: &Settings) -> (f32, f32) {
    (0.0, (settings.screen_height - settings.plane_height) / 2.0)
}

pub fn new_plane(settings: &Settings) -> Plane {
    let (x, y) = plane_start(settings);
    Plane {
        x,
        y,
        width: settings.plane_width,
        height: settings.plane_height,
        intent: MoveIntent::default(),
    }
}

/// Put the plane back at its start position and drop held intents.
pub fn recenter_plane(plane: &mut Plane, settings: &Settings) {
    let (x, y) = plane_start(settings);
    plane.x = x;
    plane.y = y;
    plane.intent = MoveIntent::default();
}

/// Move each axis independently. A step that would carry the box past a
/// screen edge is skipped rather than clamped afterwards.
pub fn step_plane(plane: &mut Plane, settings: &Settings) {
    let speed = settings.plane_speed;
    let intent = plane.intent;

    if intent.right && plane.x + plane.width + speed <= settings.screen_width {
        plane.x += speed;
    }
    if intent.left && plane.x - speed >= 0.0 {
        plane.x -= speed;
    }
    if intent.up && plane.y - speed >= 0.0 {
        plane.y -= speed;
    }
    if intent.down && plane.y + plane.height + speed <= settings.screen_height {
        plane.y += speed;
    }
}

// ── Everything else ───────────────────────────────────────────────────────────

pub fn step_bullet(bullet: &mut Bullet, settings: &Settings) {
    bullet.x += settings.bullet_speed;
}

/// Leftward drift plus vertical travel along the enemy's own heading.
/// Heading flips happen in the collision pass, not here.
pub fn step_enemy(enemy: &mut Enemy, settings: &Settings) {
    enemy.x -= settings.enemy_speed;
    enemy.y += enemy.direction * settings.enemy_speed;
}

pub fn step_powerup(powerup: &mut PowerUp, settings: &Settings) {
    powerup.x -= settings.powerup_speed;
}

pub fn step_tree(tree: &mut Tree, settings: &Settings) {
    tree.x -= settings.tree_speed;
}

/// Advance every non-player entity by one tick.
pub fn advance_all(registry: &mut EntityRegistry, settings: &Settings) {
    for (_, enemy) in registry.enemies.iter_mut() {
        step_enemy(enemy, settings);
    }
    for (_, bullet) in registry.bullets.iter_mut() {
        step_bullet(bullet, settings);
    }
    for (_, powerup) in registry.powerups.iter_mut() {
        step_powerup(powerup, settings);
    }
    for (_, tree) in registry.trees.iter_mut() {
        step_tree(tree, settings);
    }
}
