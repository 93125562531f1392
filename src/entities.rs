//! All game entity types: plain data plus the bounding-box capability.
//!
//! Positions are continuous and authoritative. Integer boxes are derived from
//! them on demand and never written back.

// ── Bounding boxes ────────────────────────────────────────────────────────────

/// Axis-aligned integer rectangle, `x`/`y` at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn centery(&self) -> i32 {
        self.y + self.h / 2
    }

    /// True when the two rectangles share a non-empty area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Anything with a continuous position and a fixed size.
pub trait Body {
    fn position(&self) -> (f32, f32);
    fn size(&self) -> (f32, f32);

    /// Integer box derived from the current position (truncated toward zero).
    fn rect(&self) -> Rect {
        let (x, y) = self.position();
        let (w, h) = self.size();
        Rect {
            x: x as i32,
            y: y as i32,
            w: w as i32,
            h: h as i32,
        }
    }
}

// ── Session phase ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Active,
    GameOver,
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Held movement keys for the current tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

#[derive(Clone, Debug)]
pub struct Plane {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub intent: MoveIntent,
}

impl Body for Plane {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Body for Bullet {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical heading: +1 moves down the screen, -1 moves up.
    pub direction: f32,
}

impl Body for Enemy {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Adds one life on pickup.
    ExtraLife,
}

#[derive(Clone, Debug)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: PowerUpKind,
}

impl Body for PowerUp {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

// ── Background ────────────────────────────────────────────────────────────────

/// Purely cosmetic; picked once when the tree is planted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeVariant {
    Oak,
    Pine,
    Shrub,
}

#[derive(Clone, Debug)]
pub struct Tree {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub variant: TreeVariant,
}

impl Body for Tree {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn size(&self) -> (f32, f32) {
        (self.size, self.size)
    }
}
