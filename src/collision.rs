//! Collision passes, run once per tick after every entity has moved.
//!
//! Order is fixed: edge bounces, bullets against enemies, plane against
//! enemies, plane against power-ups. Each pass marks its victims and applies
//! the removals before the next pass starts, so nothing removed in one pass
//! can take part in a later one.

use rand::Rng;
use tracing::debug;

use crate::entities::{Body, PowerUp, PowerUpKind};
use crate::registry::EntityRegistry;
use crate::settings::Settings;
use crate::state::{GameState, Transition};

/// What the passes did this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionReport {
    pub kills: u32,
    pub drops: u32,
    pub pickups: u32,
    pub transition: Transition,
}

/// Turn enemies around when they touch the top or bottom edge while still
/// heading into it.
pub fn bounce_enemies(registry: &mut EntityRegistry, settings: &Settings) {
    for (_, enemy) in registry.enemies.iter_mut() {
        let rect = enemy.rect();
        let heading_down = enemy.direction > 0.0;
        if heading_down && rect.bottom() as f32 >= settings.screen_height {
            enemy.direction = -1.0;
        } else if !heading_down && rect.top() <= 0 {
            enemy.direction = 1.0;
        }
    }
}

/// Each bullet destroys at most one enemy and each enemy absorbs at most one
/// bullet. Every kill scores and may leave an extra life behind where the
/// enemy was. Returns (kills, drops).
pub fn resolve_bullet_hits(
    registry: &mut EntityRegistry,
    state: &mut GameState,
    settings: &Settings,
    rng: &mut impl Rng,
) -> (u32, u32) {
    let mut kills = 0;
    let mut drops = Vec::new();

    for bullet_handle in registry.bullets.handles() {
        let Some(bullet) = registry.bullets.get(bullet_handle) else {
            continue;
        };
        let bullet_rect = bullet.rect();

        let hit = registry
            .enemies
            .live()
            .find(|(_, enemy)| enemy.rect().intersects(&bullet_rect))
            .map(|(handle, enemy)| (handle, enemy.x, enemy.y));

        let Some((enemy_handle, x, y)) = hit else {
            continue;
        };

        registry.bullets.mark_removed(bullet_handle);
        registry.enemies.mark_removed(enemy_handle);
        state.board.add_score(settings.score_per_kill);
        kills += 1;
        debug!(x, y, score = state.score(), "enemy destroyed");

        if rng.gen_bool(settings.powerup_drop_chance) {
            drops.push(PowerUp {
                x,
                y,
                width: settings.powerup_width,
                height: settings.powerup_height,
                kind: PowerUpKind::ExtraLife,
            });
        }
    }

    registry.bullets.apply_removals();
    registry.enemies.apply_removals();

    let dropped = drops.len() as u32;
    for powerup in drops {
        registry.powerups.insert(powerup);
    }
    (kills, dropped)
}

/// Any enemy touching the plane costs a life. Only checked while active.
pub fn resolve_plane_hit(registry: &EntityRegistry, state: &mut GameState) -> Transition {
    if !state.is_active() {
        return Transition::None;
    }
    let plane_rect = registry.plane.rect();
    let hit = registry
        .enemies
        .live()
        .any(|(_, enemy)| enemy.rect().intersects(&plane_rect));
    if hit {
        state.lose_life()
    } else {
        Transition::None
    }
}

/// Consume every power-up the plane is touching and apply its effect.
pub fn resolve_pickups(registry: &mut EntityRegistry, state: &mut GameState) -> u32 {
    let plane_rect = registry.plane.rect();
    let touched: Vec<_> = registry
        .powerups
        .live()
        .filter(|(_, p)| p.rect().intersects(&plane_rect))
        .map(|(handle, p)| (handle, p.kind))
        .collect();

    for (handle, kind) in &touched {
        registry.powerups.mark_removed(*handle);
        match kind {
            PowerUpKind::ExtraLife => state.board.add_lives(1),
        }
    }
    registry.powerups.apply_removals();
    touched.len() as u32
}

/// Run every pass in order. Pickups are skipped on a tick where the plane
/// was hit, since the round is about to be wiped anyway.
pub fn resolve(
    registry: &mut EntityRegistry,
    state: &mut GameState,
    settings: &Settings,
    rng: &mut impl Rng,
) -> CollisionReport {
    bounce_enemies(registry, settings);
    let (kills, drops) = resolve_bullet_hits(registry, state, settings, rng);
    let transition = resolve_plane_hit(registry, state);
    let pickups = if transition == Transition::None {
        resolve_pickups(registry, state)
    } else {
        0
    };

    CollisionReport {
        kills,
        drops,
        pickups,
        transition,
    }
}
