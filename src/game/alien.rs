use crate::game::geometry::Bounds;
use crate::game::{Entity, Sprite};
use crate::settings::Settings;

const ALIEN_COLOR: (u8, u8, u8) = (120, 60, 160);

// 7x5 octopus, two animation frames
const ALIEN_FRAME_A: &[(i32, i32)] = &[
    (1, 0), (2, 0), (3, 0), (4, 0), (5, 0),
    (0, 1), (1, 1), (2, 1), (3, 1), (4, 1), (5, 1), (6, 1),
    (0, 2), (1, 2), (3, 2), (5, 2), (6, 2),
    (0, 3), (2, 3), (3, 3), (4, 3), (6, 3),
    (1, 4), (5, 4),
];
const ALIEN_FRAME_B: &[(i32, i32)] = &[
    (1, 0), (2, 0), (3, 0), (4, 0), (5, 0),
    (0, 1), (1, 1), (2, 1), (3, 1), (4, 1), (5, 1), (6, 1),
    (0, 2), (1, 2), (3, 2), (5, 2), (6, 2),
    (0, 3), (2, 3), (3, 3), (4, 3), (6, 3),
    (0, 4), (6, 4),
];

/// One fleet member. Horizontal velocity is shared by the whole fleet and
/// read from `Settings` each tick.
pub struct Alien {
    x: f32,
    bounds: Bounds,
}

impl Alien {
    pub fn new(settings: &Settings, x: i32, y: i32) -> Self {
        Self {
            x: x as f32,
            bounds: Bounds::new(x, y, settings.alien_width, settings.alien_height),
        }
    }

    /// True when touching either side of the screen.
    pub fn at_edge(&self, settings: &Settings) -> bool {
        self.bounds.right() >= settings.screen_width || self.bounds.left() <= 0
    }

    pub fn drop_by(&mut self, dy: i32) {
        self.bounds.y += dy;
    }
}

impl Entity for Alien {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed * settings.fleet_direction as f32;
        self.bounds.x = self.x.floor() as i32;
    }

    fn sprite(&self, frame: u64) -> Sprite {
        let dots = if (frame / 15) % 2 == 0 {
            ALIEN_FRAME_A
        } else {
            ALIEN_FRAME_B
        };
        Sprite::Pattern {
            dots,
            color: ALIEN_COLOR,
        }
    }
}
