use crate::stats::GameStats;

/// Display strings for the status bar. Nothing here recomputes on its own:
/// whoever changes a stat calls the matching `prep_*`, which keeps the
/// formatting work out of the frames where nothing changed.
pub struct Scoreboard {
    pub score_text: String,
    pub high_score_text: String,
    pub level_text: String,
    pub ships_text: String,
}

impl Scoreboard {
    pub fn new(stats: &GameStats) -> Self {
        let mut scoreboard = Scoreboard {
            score_text: String::new(),
            high_score_text: String::new(),
            level_text: String::new(),
            ships_text: String::new(),
        };
        scoreboard.prep_score(stats);
        scoreboard.prep_high_score(stats);
        scoreboard.prep_level(stats);
        scoreboard.prep_ships(stats);
        scoreboard
    }

    pub fn prep_score(&mut self, stats: &GameStats) {
        self.score_text = format_score(stats.score);
    }

    pub fn prep_high_score(&mut self, stats: &GameStats) {
        self.high_score_text = format_score(stats.high_score);
    }

    pub fn prep_level(&mut self, stats: &GameStats) {
        self.level_text = stats.level.to_string();
    }

    /// One glyph per remaining ship.
    pub fn prep_ships(&mut self, stats: &GameStats) {
        self.ships_text = "▲ ".repeat(stats.ships_left as usize);
    }

    /// Promote a beaten high score and refresh its display string.
    pub fn check_high_score(&mut self, stats: &mut GameStats) {
        if stats.score > stats.high_score {
            stats.high_score = stats.score;
            self.prep_high_score(stats);
        }
    }
}

/// Scores read floored to a multiple of ten, with thousands separators:
/// 1_234_567 renders as "1,234,560".
pub fn format_score(score: u32) -> String {
    group_thousands(score / 10 * 10)
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
