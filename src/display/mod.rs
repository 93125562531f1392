//! Rendering layer — all terminal output lives here.
//!
//! The world is measured in continuous units; this module squeezes it onto
//! whatever grid the terminal currently has. No game logic happens here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use fighter_game::entities::{Body, Rect, TreeVariant};
use fighter_game::game::Game;
use fighter_game::input::ScreenArea;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::Rgb { r: 0, g: 150, b: 50 };
const C_HUD: Color = Color::Rgb { r: 30, g: 30, b: 30 };
const C_PLANE: Color = Color::White;
const C_ENEMY: Color = Color::DarkRed;
const C_BULLET: Color = Color::Rgb { r: 60, g: 60, b: 60 };
const C_POWERUP: Color = Color::Red;
const C_TREE: Color = Color::Rgb { r: 139, g: 69, b: 19 };
const C_HINT: Color = Color::DarkGrey;

const PLAY_AGAIN: &str = "[ Play Again ]";

// ── Projection ────────────────────────────────────────────────────────────────

/// Maps world rectangles onto terminal cells. The bottom row is kept free
/// for the controls hint.
struct Viewport {
    cols: u16,
    rows: u16,
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    fn new(cols: u16, rows: u16, world_w: f32, world_h: f32) -> Self {
        let rows = rows.saturating_sub(1).max(1);
        Self {
            cols: cols.max(1),
            rows,
            scale_x: cols.max(1) as f32 / world_w,
            scale_y: rows as f32 / world_h,
        }
    }

    /// Visible cell span of `rect` as (col, row, width, height), at least one
    /// cell in each direction. `None` when it is entirely off screen.
    fn project(&self, rect: Rect) -> Option<(u16, u16, u16, u16)> {
        let left = (rect.left() as f32 * self.scale_x).floor() as i32;
        let top = (rect.top() as f32 * self.scale_y).floor() as i32;
        let w = ((rect.w as f32 * self.scale_x).round() as i32).max(1);
        let h = ((rect.h as f32 * self.scale_y).round() as i32).max(1);

        let col0 = left.max(0);
        let row0 = top.max(0);
        let col1 = (left + w).min(self.cols as i32);
        let row1 = (top + h).min(self.rows as i32);
        if col0 >= col1 || row0 >= row1 {
            return None;
        }
        Some((
            col0 as u16,
            row0 as u16,
            (col1 - col0) as u16,
            (row1 - row0) as u16,
        ))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame. Returns where the "Play Again" button is when
/// the game-over screen is up, so clicks can be matched against it.
pub fn render<W: Write>(out: &mut W, game: &Game) -> std::io::Result<Option<ScreenArea>> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(
        cols,
        rows,
        game.settings.screen_width,
        game.settings.screen_height,
    );

    out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let registry = &game.registry;
    for (_, tree) in registry.trees.iter() {
        let glyph = match tree.variant {
            TreeVariant::Oak => "♣",
            TreeVariant::Pine => "♠",
            TreeVariant::Shrub => "•",
        };
        draw_box(out, &view, tree.rect(), glyph, C_TREE)?;
    }
    for (_, powerup) in registry.powerups.iter() {
        draw_box(out, &view, powerup.rect(), "L", C_POWERUP)?;
    }
    for (_, bullet) in registry.bullets.iter() {
        draw_box(out, &view, bullet.rect(), "─", C_BULLET)?;
    }
    for (_, enemy) in registry.enemies.iter() {
        draw_box(out, &view, enemy.rect(), "◄", C_ENEMY)?;
    }
    draw_box(out, &view, registry.plane.rect(), "►", C_PLANE)?;

    draw_hud(out, game)?;
    draw_controls_hint(out, rows)?;

    let button = match &game.state.board.final_score_text {
        Some(text) if !game.state.is_active() => Some(draw_game_over(out, cols, rows, text)?),
        _ => None,
    };

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(button)
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_box<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: Rect,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    let Some((col, row, w, h)) = view.project(rect) else {
        return Ok(());
    };
    let line = glyph.repeat(w as usize);
    out.queue(style::SetForegroundColor(color))?;
    for r in row..row + h {
        out.queue(cursor::MoveTo(col, r))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── HUD (top-left) ────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    let board = &game.state.board;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(cursor::MoveTo(2, 0))?;
    out.queue(Print(&board.score_text))?;
    out.queue(cursor::MoveTo(2, 1))?;
    out.queue(Print(&board.lives_text))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("WASD / ARROWS : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    cols: u16,
    rows: u16,
    final_score: &str,
) -> std::io::Result<ScreenArea> {
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (final_score, C_HUD),
        (PLAY_AGAIN, Color::White),
        ("R - Play Again  Q - Quit", C_HINT),
    ];

    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);
    let mut button = ScreenArea {
        col: 0,
        row: 0,
        width: 0,
        height: 1,
    };

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let width = msg.chars().count() as u16;
        let col = cx.saturating_sub(width / 2);
        if *msg == PLAY_AGAIN {
            button = ScreenArea {
                col,
                row,
                width,
                height: 1,
            };
        }
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(button)
}
