use fighter_game::error::SettingsError;
use fighter_game::settings::Settings;

#[test]
fn defaults_are_valid() {
    let s = Settings::default();
    assert_eq!(s.validate(), Ok(()));
    assert_eq!((s.screen_width, s.screen_height), (1400.0, 1000.0));
    assert_eq!(s.bullets_allowed, 10);
    assert_eq!(s.initial_lives, 3);
    assert_eq!(s.score_per_kill, 10);
    assert_eq!(s.tick_rate, 120);
}

#[test]
fn drop_chance_must_be_a_probability() {
    for chance in [-0.1, 1.5, f64::NAN] {
        let s = Settings { powerup_drop_chance: chance, ..Settings::default() };
        assert!(matches!(s.validate(), Err(SettingsError::DropChanceOutOfRange(_))));
    }
    for chance in [0.0, 1.0] {
        let s = Settings { powerup_drop_chance: chance, ..Settings::default() };
        assert_eq!(s.validate(), Ok(()));
    }
}

#[test]
fn entities_must_fit_on_screen() {
    let s = Settings { enemy_height: 2000.0, ..Settings::default() };
    assert!(matches!(s.validate(), Err(SettingsError::BadEntitySize { what: "enemy", .. })));

    let s = Settings { bullet_width: 0.0, ..Settings::default() };
    assert!(matches!(s.validate(), Err(SettingsError::BadEntitySize { what: "bullet", .. })));
}

#[test]
fn empty_screen_rejected() {
    let s = Settings { screen_width: 0.0, ..Settings::default() };
    assert!(matches!(s.validate(), Err(SettingsError::EmptyScreen { .. })));
}

#[test]
fn speeds_must_be_positive() {
    let s = Settings { plane_speed: 0.0, ..Settings::default() };
    assert!(matches!(s.validate(), Err(SettingsError::NonPositiveSpeed { what: "plane", .. })));
}

#[test]
fn ranges_must_not_be_inverted() {
    let s = Settings { fleet_min: 13, ..Settings::default() };
    assert!(matches!(s.validate(), Err(SettingsError::EmptyRange { what: "fleet size", .. })));

    let s = Settings { spawn_interval_min_ms: 6000, ..Settings::default() };
    assert!(matches!(s.validate(), Err(SettingsError::EmptyRange { what: "spawn interval", .. })));
}

#[test]
fn lives_and_tick_rate_required() {
    let s = Settings { initial_lives: 0, ..Settings::default() };
    assert_eq!(s.validate(), Err(SettingsError::NoLives));
    let s = Settings { tick_rate: 0, ..Settings::default() };
    assert_eq!(s.validate(), Err(SettingsError::ZeroTickRate));
}

#[test]
fn errors_render_readably() {
    let msg = SettingsError::DropChanceOutOfRange(2.0).to_string();
    assert_eq!(msg, "power-up drop chance must be within [0, 1], got 2");
}
