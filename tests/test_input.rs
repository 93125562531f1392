use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use fighter_game::input::*;

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn release(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn next_frame(tracker: &mut KeyTracker, events: &[Event]) -> InputSnapshot {
    tracker.begin_frame();
    for ev in events {
        tracker.handle_event(ev);
    }
    tracker.snapshot()
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[test]
fn wasd_and_arrows_map_to_intents() {
    let mut t = KeyTracker::new();
    let s = next_frame(&mut t, &[press(KeyCode::Char('a')), press(KeyCode::Up)]);
    assert!(s.intent.left && s.intent.up);
    assert!(!s.intent.right && !s.intent.down);

    let mut t = KeyTracker::new();
    let s = next_frame(&mut t, &[press(KeyCode::Right), press(KeyCode::Char('s'))]);
    assert!(s.intent.right && s.intent.down);
}

#[test]
fn held_key_expires_without_repeats() {
    let mut t = KeyTracker::new();
    assert!(next_frame(&mut t, &[press(KeyCode::Char('d'))]).intent.right);
    for _ in 0..HOLD_WINDOW {
        assert!(next_frame(&mut t, &[]).intent.right);
    }
    assert!(!next_frame(&mut t, &[]).intent.right);
}

#[test]
fn release_drops_key_immediately() {
    let mut t = KeyTracker::new();
    assert!(next_frame(&mut t, &[press(KeyCode::Char('w'))]).intent.up);
    assert!(!next_frame(&mut t, &[release(KeyCode::Char('w'))]).intent.up);
}

// ── Fire ──────────────────────────────────────────────────────────────────────

#[test]
fn space_fires_once_per_press() {
    let mut t = KeyTracker::new();
    assert!(next_frame(&mut t, &[press(KeyCode::Char(' '))]).fire);
    // No new press: no new shot
    assert!(!next_frame(&mut t, &[]).fire);
}

#[test]
fn rapid_presses_are_throttled() {
    let mut t = KeyTracker::new();
    let space = [press(KeyCode::Char(' '))];
    let shots = (0..FIRE_COOLDOWN * 3)
        .filter(|_| next_frame(&mut t, &space).fire)
        .count();
    assert_eq!(shots, 3);
}

// ── Quit & restart ────────────────────────────────────────────────────────────

#[test]
fn quit_keys() {
    for ev in [
        press(KeyCode::Char('q')),
        press(KeyCode::Esc),
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
    ] {
        let mut t = KeyTracker::new();
        assert!(next_frame(&mut t, &[ev]).quit);
    }
    let mut t = KeyTracker::new();
    assert!(!next_frame(&mut t, &[press(KeyCode::Char('c'))]).quit);
}

#[test]
fn restart_key_is_edge_triggered() {
    let mut t = KeyTracker::new();
    assert!(next_frame(&mut t, &[press(KeyCode::Char('r'))]).restart);
    assert!(!next_frame(&mut t, &[]).restart);
}

#[test]
fn click_on_play_again_restarts() {
    let mut t = KeyTracker::new();
    t.set_restart_button(Some(ScreenArea { col: 10, row: 5, width: 14, height: 1 }));
    assert!(!next_frame(&mut t, &[click(9, 5)]).restart);
    assert!(!next_frame(&mut t, &[click(10, 6)]).restart);
    assert!(next_frame(&mut t, &[click(23, 5)]).restart);
}

#[test]
fn click_without_button_does_nothing() {
    let mut t = KeyTracker::new();
    assert!(!next_frame(&mut t, &[click(0, 0)]).restart);
}
