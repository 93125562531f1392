use fighter_game::collision::*;
use fighter_game::entities::*;
use fighter_game::kinematics::new_plane;
use fighter_game::registry::EntityRegistry;
use fighter_game::settings::Settings;
use fighter_game::state::{GameState, Transition};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn setup(settings: &Settings) -> (EntityRegistry, GameState) {
    (EntityRegistry::new(new_plane(settings)), GameState::new(settings))
}

fn enemy_at(x: f32, y: f32, direction: f32) -> Enemy {
    Enemy { x, y, width: 60.0, height: 40.0, direction }
}

fn bullet_at(x: f32, y: f32) -> Bullet {
    Bullet { x, y, width: 15.0, height: 6.0 }
}

fn extra_life_at(x: f32, y: f32) -> PowerUp {
    PowerUp { x, y, width: 24.0, height: 32.0, kind: PowerUpKind::ExtraLife }
}

// ── Edge bounces ──────────────────────────────────────────────────────────────

#[test]
fn enemy_turns_up_at_bottom_edge() {
    let settings = Settings::default();
    let (mut reg, _) = setup(&settings);
    let h = reg.enemies.insert(enemy_at(700.0, 960.0, 1.0));
    bounce_enemies(&mut reg, &settings);
    assert_eq!(reg.enemies.get(h).map(|e| e.direction), Some(-1.0));
}

#[test]
fn enemy_turns_down_at_top_edge() {
    let settings = Settings::default();
    let (mut reg, _) = setup(&settings);
    let h = reg.enemies.insert(enemy_at(700.0, 0.0, -1.0));
    bounce_enemies(&mut reg, &settings);
    assert_eq!(reg.enemies.get(h).map(|e| e.direction), Some(1.0));
}

#[test]
fn enemies_turn_independently() {
    let settings = Settings::default();
    let (mut reg, _) = setup(&settings);
    let top = reg.enemies.insert(enemy_at(700.0, -1.0, -1.0));
    let mid = reg.enemies.insert(enemy_at(700.0, 400.0, -1.0));
    bounce_enemies(&mut reg, &settings);
    assert_eq!(reg.enemies.get(top).map(|e| e.direction), Some(1.0));
    assert_eq!(reg.enemies.get(mid).map(|e| e.direction), Some(-1.0));
}

#[test]
fn enemy_moving_away_from_edge_keeps_heading() {
    let settings = Settings::default();
    let (mut reg, _) = setup(&settings);
    let h = reg.enemies.insert(enemy_at(700.0, 0.0, 1.0));
    bounce_enemies(&mut reg, &settings);
    assert_eq!(reg.enemies.get(h).map(|e| e.direction), Some(1.0));
}

// ── Bullets × enemies ─────────────────────────────────────────────────────────

#[test]
fn single_hit_removes_one_of_each_and_scores_ten() {
    let settings = Settings { powerup_drop_chance: 0.0, ..Settings::default() };
    let (mut reg, mut state) = setup(&settings);
    reg.enemies.insert(enemy_at(700.0, 500.0, 1.0));
    reg.enemies.insert(enemy_at(700.0, 100.0, 1.0));
    reg.bullets.insert(bullet_at(690.0, 510.0));
    reg.bullets.insert(bullet_at(100.0, 800.0));

    let (kills, drops) = resolve_bullet_hits(&mut reg, &mut state, &settings, &mut seeded_rng());

    assert_eq!((kills, drops), (1, 0));
    assert_eq!(reg.enemies.len(), 1);
    assert_eq!(reg.bullets.len(), 1);
    assert_eq!(state.score(), 10);
    assert_eq!(state.board.score_text, "10");
    assert!(reg.powerups.is_empty());
}

#[test]
fn one_bullet_cannot_kill_two_enemies() {
    let settings = Settings { powerup_drop_chance: 0.0, ..Settings::default() };
    let (mut reg, mut state) = setup(&settings);
    reg.enemies.insert(enemy_at(700.0, 500.0, 1.0));
    reg.enemies.insert(enemy_at(700.0, 480.0, 1.0));
    reg.bullets.insert(bullet_at(700.0, 510.0));

    let (kills, _) = resolve_bullet_hits(&mut reg, &mut state, &settings, &mut seeded_rng());
    assert_eq!(kills, 1);
    assert_eq!(reg.enemies.len(), 1);
    assert!(reg.bullets.is_empty());
    assert_eq!(state.score(), 10);
}

#[test]
fn one_enemy_cannot_absorb_two_bullets() {
    let settings = Settings { powerup_drop_chance: 0.0, ..Settings::default() };
    let (mut reg, mut state) = setup(&settings);
    reg.enemies.insert(enemy_at(700.0, 500.0, 1.0));
    reg.bullets.insert(bullet_at(700.0, 505.0));
    reg.bullets.insert(bullet_at(710.0, 520.0));

    let (kills, _) = resolve_bullet_hits(&mut reg, &mut state, &settings, &mut seeded_rng());
    assert_eq!(kills, 1);
    assert!(reg.enemies.is_empty());
    assert_eq!(reg.bullets.len(), 1);
    assert_eq!(state.score(), 10);
}

#[test]
fn guaranteed_drop_leaves_extra_life_at_each_kill() {
    let settings = Settings { powerup_drop_chance: 1.0, ..Settings::default() };
    let (mut reg, mut state) = setup(&settings);
    reg.enemies.insert(enemy_at(700.0, 500.0, 1.0));
    reg.enemies.insert(enemy_at(300.0, 200.0, -1.0));
    reg.bullets.insert(bullet_at(700.0, 510.0));
    reg.bullets.insert(bullet_at(300.0, 210.0));

    let (kills, drops) = resolve_bullet_hits(&mut reg, &mut state, &settings, &mut seeded_rng());
    assert_eq!((kills, drops), (2, 2));
    assert_eq!(reg.powerups.len(), 2);

    let mut spots: Vec<(f32, f32)> = reg.powerups.iter().map(|(_, p)| (p.x, p.y)).collect();
    spots.sort_by(|a, b| a.0.total_cmp(&b.0));
    assert_eq!(spots, vec![(300.0, 200.0), (700.0, 500.0)]);
    assert!(reg.powerups.iter().all(|(_, p)| p.kind == PowerUpKind::ExtraLife));
}

#[test]
fn zero_drop_chance_never_drops() {
    let settings = Settings { powerup_drop_chance: 0.0, ..Settings::default() };
    let (mut reg, mut state) = setup(&settings);
    let mut rng = seeded_rng();
    for i in 0..50 {
        let y = (i % 20) as f32 * 45.0;
        reg.enemies.insert(enemy_at(700.0, y, 1.0));
        reg.bullets.insert(bullet_at(700.0, y + 5.0));
        resolve_bullet_hits(&mut reg, &mut state, &settings, &mut rng);
    }
    assert!(reg.powerups.is_empty());
    assert_eq!(state.score(), 500);
}

// ── Plane × enemies ───────────────────────────────────────────────────────────

#[test]
fn enemy_touching_plane_costs_a_life() {
    let settings = Settings::default();
    let (mut reg, mut state) = setup(&settings);
    reg.enemies.insert(enemy_at(40.0, 480.0, 1.0));
    let t = resolve_plane_hit(&reg, &mut state);
    assert_eq!(t, Transition::LifeLost { lives_left: 2 });
    assert_eq!(state.lives(), 2);
}

#[test]
fn distant_enemy_is_harmless() {
    let settings = Settings::default();
    let (mut reg, mut state) = setup(&settings);
    reg.enemies.insert(enemy_at(700.0, 480.0, 1.0));
    assert_eq!(resolve_plane_hit(&reg, &mut state), Transition::None);
    assert_eq!(state.lives(), 3);
}

#[test]
fn shot_down_enemy_cannot_hit_plane_same_tick() {
    let settings = Settings { powerup_drop_chance: 0.0, ..Settings::default() };
    let (mut reg, mut state) = setup(&settings);
    reg.enemies.insert(enemy_at(40.0, 480.0, 1.0));
    reg.bullets.insert(bullet_at(50.0, 490.0));

    let report = resolve(&mut reg, &mut state, &settings, &mut seeded_rng());
    assert_eq!(report.kills, 1);
    assert_eq!(report.transition, Transition::None);
    assert_eq!(state.lives(), 3);
}

// ── Plane × power-ups ─────────────────────────────────────────────────────────

#[test]
fn pickup_adds_life_and_consumes_powerup() {
    let settings = Settings::default();
    let (mut reg, mut state) = setup(&settings);
    reg.powerups.insert(extra_life_at(30.0, 480.0));
    reg.powerups.insert(extra_life_at(900.0, 100.0));
    let before = state.board.revision();

    assert_eq!(resolve_pickups(&mut reg, &mut state), 1);
    assert_eq!(state.lives(), 4);
    assert_eq!(state.board.lives_text, "Lives: 4");
    assert!(state.board.revision() > before);
    assert_eq!(reg.powerups.len(), 1);
}

#[test]
fn pickups_skipped_on_a_hit_tick() {
    let settings = Settings::default();
    let (mut reg, mut state) = setup(&settings);
    reg.enemies.insert(enemy_at(40.0, 480.0, 1.0));
    reg.powerups.insert(extra_life_at(30.0, 480.0));

    let report = resolve(&mut reg, &mut state, &settings, &mut seeded_rng());
    assert_eq!(report.transition, Transition::LifeLost { lives_left: 2 });
    assert_eq!(report.pickups, 0);
    assert_eq!(state.lives(), 2);
}
