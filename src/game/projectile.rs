use crate::game::geometry::Bounds;
use crate::game::{Entity, Sprite};
use crate::settings::Settings;

/// A player bullet. Travels straight up at the current bullet speed.
pub struct Projectile {
    y: f32,
    bounds: Bounds,
    /// Top edge before the last step.
    prev_top: i32,
    color: (u8, u8, u8),
}

impl Projectile {
    /// Spawn at the top center of `ship_bounds`.
    pub fn new(settings: &Settings, ship_bounds: Bounds) -> Self {
        let mut bounds = Bounds::new(0, 0, settings.bullet_width, settings.bullet_height);
        bounds.set_mid_top(ship_bounds.center_x(), ship_bounds.top());
        Self {
            y: bounds.y as f32,
            bounds,
            prev_top: bounds.y,
            color: settings.bullet_color,
        }
    }

    pub fn off_screen(&self) -> bool {
        self.bounds.bottom() <= 0
    }

    /// Everything the projectile passed through during its last step. Fast
    /// projectiles move further than an alien is tall, so hits are tested
    /// against this instead of the end position.
    pub fn swept_bounds(&self) -> Bounds {
        let bottom = self.prev_top.max(self.bounds.y) + self.bounds.h;
        Bounds::new(self.bounds.x, self.bounds.y, self.bounds.w, bottom - self.bounds.y)
    }
}

impl Entity for Projectile {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn update(&mut self, settings: &Settings) {
        self.prev_top = self.bounds.y;
        self.y -= settings.bullet_speed;
        self.bounds.y = self.y.floor() as i32;
    }

    fn sprite(&self, _frame: u64) -> Sprite {
        Sprite::Solid { color: self.color }
    }
}
