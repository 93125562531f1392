/// Score and lives, plus the display strings prepared from them.
///
/// Every mutation re-prepares the text and bumps `revision`, which is how the
/// renderer learns that the HUD changed.

#[derive(Clone, Debug, PartialEq)]
pub struct Scoreboard {
    score: u32,
    lives: u32,
    revision: u64,
    pub score_text: String,
    pub lives_text: String,
    /// Set only once the session is over.
    pub final_score_text: Option<String>,
}

impl Scoreboard {
    pub fn new(initial_lives: u32) -> Self {
        let mut board = Self {
            score: 0,
            lives: initial_lives,
            revision: 0,
            score_text: String::new(),
            lives_text: String::new(),
            final_score_text: None,
        };
        board.prep_score();
        board.prep_lives();
        board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Score never goes down within a session.
    pub fn add_score(&mut self, delta: u32) {
        self.score = self.score.saturating_add(delta);
        self.prep_score();
    }

    /// Apply a signed change to lives. Lives bottom out at zero.
    pub fn add_lives(&mut self, delta: i32) {
        self.lives = self.lives.saturating_add_signed(delta);
        self.prep_lives();
    }

    pub fn prep_final_score(&mut self) {
        self.final_score_text = Some(format!("Final Score: {}", self.score));
        self.revision += 1;
    }

    /// Back to a fresh session.
    pub fn reset(&mut self, initial_lives: u32) {
        self.score = 0;
        self.lives = initial_lives;
        self.final_score_text = None;
        self.prep_score();
        self.prep_lives();
    }

    fn prep_score(&mut self) {
        self.score_text = self.score.to_string();
        self.revision += 1;
    }

    fn prep_lives(&mut self) {
        self.lives_text = format!("Lives: {}", self.lives);
        self.revision += 1;
    }
}
