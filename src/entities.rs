use crate::settings::Settings;
use crate::sprites::{ALIEN_HEIGHT, ALIEN_WIDTH, SHIP_HEIGHT, SHIP_WIDTH};

/// Axis-aligned bounds in logical pixels. Overlap tests and rendering both
/// work off these; movement happens on the owners' f32 positions and is
/// copied in here once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict overlap: rects that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

// ── Ship ──

#[derive(Clone, Debug)]
pub struct Ship {
    /// Horizontal position as a float so sub-pixel speeds accumulate.
    pub x: f32,
    pub rect: Rect,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Ship {
            x: 0.0,
            rect: Rect::new(0, 0, SHIP_WIDTH, SHIP_HEIGHT),
            moving_left: false,
            moving_right: false,
        };
        ship.recenter(settings);
        ship
    }

    pub fn set_moving(&mut self, direction: Direction, active: bool) {
        match direction {
            Direction::Left => self.moving_left = active,
            Direction::Right => self.moving_right = active,
        }
    }

    /// Apply the held movement intent for one frame. Both flags may be set
    /// at once; each contributes independently. The hull never leaves the
    /// screen no matter how large the speed step is.
    pub fn advance(&mut self, settings: &Settings) {
        if self.moving_right && self.rect.right() < settings.screen_width {
            self.x += settings.ship_speed;
        }
        if self.moving_left && self.rect.x > 0 {
            self.x -= settings.ship_speed;
        }
        let max_x = (settings.screen_width - self.rect.w).max(0) as f32;
        self.x = self.x.clamp(0.0, max_x);
        self.rect.x = self.x as i32;
    }

    /// Park at the bottom center of the screen.
    pub fn recenter(&mut self, settings: &Settings) {
        self.rect.x = (settings.screen_width - self.rect.w) / 2;
        self.rect.y = settings.screen_height - self.rect.h;
        self.x = self.rect.x as f32;
    }
}

// ── Bullet ──

#[derive(Clone, Debug)]
pub struct Bullet {
    pub y: f32,
    pub rect: Rect,
}

impl Bullet {
    /// Spawn at the ship's top center, aligned with the nose.
    pub fn fire_from(ship: &Ship, settings: &Settings) -> Self {
        let rect = Rect::new(
            ship.rect.x + (ship.rect.w - settings.bullet_width) / 2,
            ship.rect.y,
            settings.bullet_width,
            settings.bullet_height,
        );
        Bullet {
            y: rect.y as f32,
            rect,
        }
    }

    pub fn advance(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
        self.rect.y = self.y as i32;
    }
}

// ── Alien ──

#[derive(Clone, Debug)]
pub struct Alien {
    pub x: f32,
    pub rect: Rect,
}

impl Alien {
    pub fn new(x: i32, y: i32) -> Self {
        Alien {
            x: x as f32,
            rect: Rect::new(x, y, ALIEN_WIDTH, ALIEN_HEIGHT),
        }
    }

    /// March one step in the fleet's current direction.
    pub fn advance(&mut self, settings: &Settings) {
        self.x += settings.alien_speed * settings.fleet_direction as f32;
        self.rect.x = self.x as i32;
    }

    /// True the moment this alien's flank reaches either screen edge.
    pub fn touches_edge(&self, screen_width: i32) -> bool {
        self.rect.right() >= screen_width || self.rect.x <= 0
    }
}
