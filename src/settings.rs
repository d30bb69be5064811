//! All world sizes and speeds are in braille dots: one terminal cell is 2 dots
//! wide and 4 dots tall.

pub const SHIP_WIDTH: i32 = 9;
pub const SHIP_HEIGHT: i32 = 6;
pub const ALIEN_WIDTH: i32 = 7;
pub const ALIEN_HEIGHT: i32 = 5;

const SHIP_SPEED: f32 = 1.5;
const SHIP_LIMIT: u32 = 3;
const BULLET_SPEED: f32 = 2.5;
const BULLET_WIDTH: i32 = 1;
const BULLET_HEIGHT: i32 = 3;
const BULLETS_ALLOWED: usize = 3;
const ALIEN_SPEED: f32 = 0.5;
const FLEET_DROP_SPEED: i32 = 4;
const ALIEN_POINTS: u32 = 50;
const SPEEDUP_SCALE: f32 = 1.1;
const SCORE_SCALE: f32 = 1.5;
const HIT_PAUSE_TICKS: u32 = 30;

pub type Rgb = (u8, u8, u8);

#[derive(Clone, Debug)]
pub struct Settings {
    // Static
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Rgb,
    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_limit: u32,
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Rgb,
    pub bullets_allowed: usize,
    pub alien_width: i32,
    pub alien_height: i32,
    pub fleet_drop_speed: i32,
    pub speedup_scale: f32,
    pub score_scale: f32,
    pub hit_pause_ticks: u32,

    // Dynamic: reset per game, scaled per level
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub alien_points: u32,
    /// 1 = right, -1 = left
    pub fleet_direction: i32,
}

impl Settings {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        let mut s = Self {
            screen_width,
            screen_height,
            bg_color: (230, 230, 230),
            ship_width: SHIP_WIDTH,
            ship_height: SHIP_HEIGHT,
            ship_limit: SHIP_LIMIT,
            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_color: (60, 60, 60),
            bullets_allowed: BULLETS_ALLOWED,
            alien_width: ALIEN_WIDTH,
            alien_height: ALIEN_HEIGHT,
            fleet_drop_speed: FLEET_DROP_SPEED,
            speedup_scale: SPEEDUP_SCALE,
            score_scale: SCORE_SCALE,
            hit_pause_ticks: HIT_PAUSE_TICKS,
            ship_speed: 0.0,
            bullet_speed: 0.0,
            alien_speed: 0.0,
            alien_points: 0,
            fleet_direction: 1,
        };
        s.initialize_dynamic_settings();
        s
    }

    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = SHIP_SPEED;
        self.bullet_speed = BULLET_SPEED;
        self.alien_speed = ALIEN_SPEED;
        self.alien_points = ALIEN_POINTS;
        self.fleet_direction = 1;
    }

    /// Level-up: every speed grows by `speedup_scale`, the point value by
    /// `score_scale` (truncated).
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }
}
