use ratatui::style::Color;

// Values the per-game tunables return to on every new game.
const BASE_SHIP_SPEED: f32 = 1.5;
const BASE_BULLET_SPEED: f32 = 3.0;
const BASE_ALIEN_SPEED: f32 = 0.5;
const BASE_ALIEN_POINTS: u32 = 50;

/// Every tunable in one place. The static block is fixed for the life of
/// the process; the dynamic block resets on `reset_dynamic` and ramps up
/// through `escalate` as fleets are cleared.
pub struct Settings {
    // Screen, in logical pixels. Captured once at startup.
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Color,
    // Ship
    pub ship_limit: u32,
    // Bullets
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Color,
    pub bullets_allowed: usize,
    // Fleet
    pub fleet_drop_speed: i32,
    // Difficulty ramp
    pub speedup_scale: f32,
    pub score_scale: f32,
    // Dynamic
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    /// 1 marching right, -1 marching left.
    pub fleet_direction: i32,
    pub alien_points: u32,
}

impl Settings {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        let mut settings = Settings {
            screen_width,
            screen_height,
            bg_color: Color::Rgb(4, 6, 18),
            ship_limit: 3,
            bullet_width: 2,
            bullet_height: 6,
            bullet_color: Color::Rgb(255, 240, 160),
            bullets_allowed: 3,
            fleet_drop_speed: 3,
            speedup_scale: 1.25,
            score_scale: 1.5,
            ship_speed: 0.0,
            bullet_speed: 0.0,
            alien_speed: 0.0,
            fleet_direction: 1,
            alien_points: 0,
        };
        settings.reset_dynamic();
        settings
    }

    /// Restore the per-game tunables to their base values.
    pub fn reset_dynamic(&mut self) {
        self.ship_speed = BASE_SHIP_SPEED;
        self.bullet_speed = BASE_BULLET_SPEED;
        self.alien_speed = BASE_ALIEN_SPEED;
        self.fleet_direction = 1;
        self.alien_points = BASE_ALIEN_POINTS;
    }

    /// Raise the pace and the kill reward after a cleared fleet. Points
    /// grow by `score_scale`, truncated to whole points.
    pub fn escalate(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }
}
