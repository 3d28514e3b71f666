use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use rand::Rng;
use ratatui::layout::{Position, Rect as UiRect};

use crate::clock::{Sleeper, ThreadSleeper};
use crate::entities::{Alien, Bullet, Direction, Ship};
use crate::fleet;
use crate::scoreboard::Scoreboard;
use crate::settings::Settings;
use crate::stats::GameStats;

/// How long the game freezes after the player loses a ship.
pub const RESPAWN_PAUSE: Duration = Duration::from_millis(500);

/// The whole game. Owns every collaborator and runs one frame of play per
/// tick; the binary feeds it events and draws it, nothing more.
pub struct Invasion<S: Sleeper = ThreadSleeper> {
    pub settings: Settings,
    pub stats: GameStats,
    pub scoreboard: Scoreboard,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub fleet: Vec<Alien>,
    /// Cell bounds of the play control, recorded by the renderer whenever
    /// the control is on screen. None while a game is running.
    pub play_button: Option<UiRect>,
    /// Fixed backdrop, in logical pixels.
    pub stars: Vec<(i32, i32)>,
    pub tick: u64,
    sleeper: S,
    should_quit: bool,
    paused_for_respawn: bool,
}

impl Invasion<ThreadSleeper> {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        Self::with_sleeper(screen_width, screen_height, ThreadSleeper)
    }
}

impl<S: Sleeper> Invasion<S> {
    pub fn with_sleeper(screen_width: i32, screen_height: i32, sleeper: S) -> Self {
        let settings = Settings::new(screen_width, screen_height);
        let stats = GameStats::new(settings.ship_limit);
        let scoreboard = Scoreboard::new(&stats);
        let ship = Ship::new(&settings);
        let fleet = fleet::build_fleet(&settings);

        let mut rng = rand::thread_rng();
        let star_count = (screen_width * screen_height / 420).clamp(16, 96) as usize;
        let stars = (0..star_count)
            .map(|_| {
                (
                    rng.gen_range(0..screen_width.max(1)),
                    rng.gen_range(0..screen_height.max(1)),
                )
            })
            .collect();

        Invasion {
            settings,
            stats,
            scoreboard,
            ship,
            bullets: Vec::new(),
            fleet,
            play_button: None,
            stars,
            tick: 0,
            sleeper,
            should_quit: false,
            paused_for_respawn: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The terminal cursor stands in for the pointer: shown only while the
    /// play control is waiting for a click.
    pub fn cursor_visible(&self) -> bool {
        !self.stats.game_active
    }

    /// True once after each respawn pause. The main loop uses it to flush
    /// the events that queued up while the game was frozen.
    pub fn take_respawn_pause(&mut self) -> bool {
        std::mem::take(&mut self.paused_for_respawn)
    }

    // ── Input ──

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Press => self.on_key_press(key.code),
            // Releases always land, active game or not, so a held arrow
            // can never stick across a game-over screen.
            KeyEventKind::Release => match key.code {
                KeyCode::Right => self.ship.set_moving(Direction::Right, false),
                KeyCode::Left => self.ship.set_moving(Direction::Left, false),
                _ => {}
            },
            KeyEventKind::Repeat => {}
        }
    }

    fn on_key_press(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Right if self.stats.game_active => {
                self.ship.set_moving(Direction::Right, true);
            }
            KeyCode::Left if self.stats.game_active => {
                self.ship.set_moving(Direction::Left, true);
            }
            KeyCode::Char(' ') if self.stats.game_active => self.fire_bullet(),
            _ => {}
        }
    }

    /// A left click starts a game, but only inside the play control and
    /// only while it is showing.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if self.stats.game_active {
            return;
        }
        let clicked = self
            .play_button
            .is_some_and(|button| button.contains(Position::new(mouse.column, mouse.row)));
        if clicked {
            self.start_game();
        }
    }

    /// Begin a fresh round: tunables and stats back to base, projections
    /// refreshed, battlefield rebuilt around a centered ship.
    pub fn start_game(&mut self) {
        self.settings.reset_dynamic();
        self.stats.reset(self.settings.ship_limit);
        self.stats.game_active = true;
        self.scoreboard.prep_score(&self.stats);
        self.scoreboard.prep_level(&self.stats);
        self.scoreboard.prep_ships(&self.stats);

        self.bullets.clear();
        self.fleet = fleet::build_fleet(&self.settings);
        self.ship.recenter(&self.settings);
    }

    fn fire_bullet(&mut self) {
        if self.bullets.len() < self.settings.bullets_allowed {
            self.bullets
                .push(Bullet::fire_from(&self.ship, &self.settings));
        }
    }

    // ── Frame pipeline ──

    /// One frame of play. Outside an active game nothing moves; input
    /// keeps flowing so the play control and quit still work.
    pub fn on_tick(&mut self) {
        if !self.stats.game_active {
            return;
        }
        self.tick = self.tick.wrapping_add(1);
        self.ship.advance(&self.settings);
        self.update_bullets();
        self.update_fleet();
    }

    fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.advance(&self.settings);
        }
        self.bullets.retain(|bullet| bullet.rect.bottom() > 0);

        self.resolve_collisions();

        if self.fleet.is_empty() {
            // Screen cleared: new fleet, faster everything, next level.
            self.bullets.clear();
            self.fleet = fleet::build_fleet(&self.settings);
            self.settings.escalate();
            self.stats.level += 1;
            self.scoreboard.prep_level(&self.stats);
        }
    }

    /// One pairwise pass marks every hit before anything is removed, so an
    /// alien claimed by one bullet cannot also be claimed by a later one.
    /// A bullet overlapping several aliens takes them all and scores each.
    fn resolve_collisions(&mut self) {
        let mut bullet_hit = vec![false; self.bullets.len()];
        let mut alien_hit = vec![false; self.fleet.len()];
        let mut points = 0u32;

        for (b, bullet) in self.bullets.iter().enumerate() {
            let mut destroyed = 0u32;
            for (a, alien) in self.fleet.iter().enumerate() {
                if alien_hit[a] {
                    continue;
                }
                if bullet.rect.intersects(&alien.rect) {
                    alien_hit[a] = true;
                    destroyed += 1;
                }
            }
            if destroyed > 0 {
                bullet_hit[b] = true;
                points += self.settings.alien_points * destroyed;
            }
        }

        if bullet_hit.iter().any(|&hit| hit) {
            let mut b = 0;
            self.bullets.retain(|_| {
                let keep = !bullet_hit[b];
                b += 1;
                keep
            });
            let mut a = 0;
            self.fleet.retain(|_| {
                let keep = !alien_hit[a];
                a += 1;
                keep
            });

            self.stats.score += points;
            self.scoreboard.prep_score(&self.stats);
            self.scoreboard.check_high_score(&mut self.stats);
        }
    }

    fn update_fleet(&mut self) {
        fleet::update_fleet(&mut self.fleet, &mut self.settings);

        let ship_rect = self.ship.rect;
        if self
            .fleet
            .iter()
            .any(|alien| alien.rect.intersects(&ship_rect))
        {
            self.ship_hit();
        }
        // An alien reaching the bottom costs a ship just like a collision.
        let bottom = self.settings.screen_height;
        if self
            .fleet
            .iter()
            .any(|alien| alien.rect.bottom() >= bottom)
        {
            self.ship_hit();
        }
    }

    /// The ship was hit or the fleet broke through. Spends a life and
    /// resets the battlefield while a ship remains; the hit taken with
    /// none in reserve ends the game.
    fn ship_hit(&mut self) {
        if self.stats.ships_left > 0 {
            self.stats.ships_left -= 1;
            self.scoreboard.prep_ships(&self.stats);

            self.bullets.clear();
            self.fleet = fleet::build_fleet(&self.settings);
            self.ship.recenter(&self.settings);

            // Blocking pause: nothing advances until it returns.
            self.sleeper.sleep(RESPAWN_PAUSE);
            self.paused_for_respawn = true;
        } else {
            self.stats.game_active = false;
        }
    }
}
