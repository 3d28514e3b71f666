/// Round bookkeeping. `high_score` survives every reset and is only lost
/// when the process exits; everything else is per-game.
#[derive(Clone, Debug)]
pub struct GameStats {
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub ships_left: u32,
    pub game_active: bool,
}

impl GameStats {
    pub fn new(ship_limit: u32) -> Self {
        let mut stats = GameStats {
            score: 0,
            high_score: 0,
            level: 1,
            ships_left: 0,
            game_active: false,
        };
        stats.reset(ship_limit);
        stats
    }

    /// Start-of-game reset. Leaves `high_score` and `game_active` alone.
    pub fn reset(&mut self, ship_limit: u32) {
        self.ships_left = ship_limit;
        self.score = 0;
        self.level = 1;
    }
}
