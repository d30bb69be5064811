use crate::game::geometry::Bounds;
use crate::game::{Entity, Sprite};
use crate::settings::Settings;

const SHIP_COLOR: (u8, u8, u8) = (40, 120, 40);

// 9x6 cannon, origin at the top-left of the bounds
const SHIP_DOTS: &[(i32, i32)] = &[
    (4, 0),
    (3, 1), (4, 1), (5, 1),
    (3, 2), (4, 2), (5, 2),
    (1, 3), (2, 3), (3, 3), (4, 3), (5, 3), (6, 3), (7, 3),
    (0, 4), (1, 4), (2, 4), (3, 4), (4, 4), (5, 4), (6, 4), (7, 4), (8, 4),
    (0, 5), (1, 5), (2, 5), (3, 5), (4, 5), (5, 5), (6, 5), (7, 5), (8, 5),
];

pub struct Ship {
    x: f32,
    bounds: Bounds,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            x: 0.0,
            bounds: Bounds::new(0, 0, settings.ship_width, settings.ship_height),
            moving_left: false,
            moving_right: false,
        };
        ship.center_ship(settings);
        ship
    }

    /// Put the ship back at the bottom center of the screen.
    pub fn center_ship(&mut self, settings: &Settings) {
        self.bounds
            .set_mid_bottom(settings.screen_width / 2, settings.screen_height);
        self.x = self.bounds.x as f32;
    }

    pub fn stop(&mut self) {
        self.moving_left = false;
        self.moving_right = false;
    }

    pub fn x(&self) -> f32 {
        self.x
    }
}

impl Entity for Ship {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn update(&mut self, settings: &Settings) {
        let max_x = (settings.screen_width - self.bounds.w).max(0) as f32;
        if self.moving_right && self.bounds.right() < settings.screen_width {
            self.x = (self.x + settings.ship_speed).min(max_x);
        }
        if self.moving_left && self.bounds.left() > 0 {
            self.x = (self.x - settings.ship_speed).max(0.0);
        }
        self.bounds.x = self.x as i32;
    }

    fn sprite(&self, _frame: u64) -> Sprite {
        Sprite::Pattern {
            dots: SHIP_DOTS,
            color: SHIP_COLOR,
        }
    }
}
