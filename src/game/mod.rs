pub mod alien;
pub mod fleet;
pub mod geometry;
pub mod projectile;
pub mod ship;

use tracing::{debug, info};

use crate::settings::{Rgb, Settings};
use crate::stats::GameStats;

use fleet::Fleet;
use geometry::Bounds;
use projectile::Projectile;
use ship::Ship;

/// How an entity looks. Dot offsets are relative to the top-left of its
/// bounds.
pub enum Sprite {
    Pattern {
        dots: &'static [(i32, i32)],
        color: Rgb,
    },
    /// Fill the whole bounding rectangle.
    Solid { color: Rgb },
}

pub trait Entity {
    fn bounds(&self) -> Bounds;
    fn update(&mut self, settings: &Settings);
    fn sprite(&self, frame: u64) -> Sprite;
}

/// The whole simulation: one ship, its projectiles, one fleet, and the
/// settings/stats they run against.
pub struct Invasion {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    pub fleet: Fleet,
    pause_ticks: u32,
    cursor_visible: bool,
    tick: u64,
}

impl Invasion {
    pub fn new(screen_width: i32, screen_height: i32, high_score: u32) -> Self {
        let settings = Settings::new(screen_width, screen_height);
        let stats = GameStats::new(&settings, high_score);
        let ship = Ship::new(&settings);
        let fleet = Fleet::spawn(&settings);
        Self {
            settings,
            stats,
            ship,
            projectiles: Vec::new(),
            fleet,
            pause_ticks: 0,
            cursor_visible: true,
            tick: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.stats.game_active
    }

    pub fn is_paused(&self) -> bool {
        self.pause_ticks > 0
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Begin a fresh session. Ignored while a game is already running.
    pub fn start_game(&mut self) {
        if self.stats.game_active {
            return;
        }
        self.settings.initialize_dynamic_settings();
        self.stats.reset_stats(&self.settings);
        self.stats.game_active = true;

        self.projectiles.clear();
        self.fleet.respawn(&self.settings);
        self.ship.center_ship(&self.settings);
        self.ship.stop();
        self.pause_ticks = 0;
        self.cursor_visible = false;

        info!(
            aliens = self.fleet.len(),
            ships = self.stats.ships_left,
            "new game"
        );
    }

    /// Fire from the ship. Does nothing at the projectile cap, while the hit
    /// pause runs, or when no game is active.
    pub fn fire_bullet(&mut self) -> bool {
        if !self.stats.game_active || self.is_paused() {
            return false;
        }
        if self.projectiles.len() >= self.settings.bullets_allowed {
            return false;
        }
        self.projectiles
            .push(Projectile::new(&self.settings, self.ship.bounds()));
        true
    }

    /// Advance one tick.
    pub fn update(&mut self) {
        self.tick += 1;
        if !self.stats.game_active {
            return;
        }
        if self.pause_ticks > 0 {
            self.pause_ticks -= 1;
            return;
        }
        self.ship.update(&self.settings);
        self.update_projectiles();
        self.update_aliens();
    }

    fn update_projectiles(&mut self) {
        for p in &mut self.projectiles {
            p.update(&self.settings);
        }
        // Hits first: a fast projectile may cross its last alien and the
        // top edge in the same step.
        self.check_projectile_alien_collisions();
        self.projectiles.retain(|p| !p.off_screen());
    }

    fn check_projectile_alien_collisions(&mut self) {
        let removed = self.fleet.resolve_hits(&mut self.projectiles);
        if removed > 0 {
            let points = self.settings.alien_points.saturating_mul(removed as u32);
            self.stats.score = self.stats.score.saturating_add(points);
            if self.stats.check_high_score() {
                debug!(high_score = self.stats.high_score, "new high score");
            }
        }

        if self.fleet.is_empty() {
            self.start_new_level();
        }
    }

    fn start_new_level(&mut self) {
        self.projectiles.clear();
        self.fleet.respawn(&self.settings);
        self.settings.increase_speed();
        self.stats.level += 1;
        info!(
            level = self.stats.level,
            alien_speed = self.settings.alien_speed,
            alien_points = self.settings.alien_points,
            "fleet cleared"
        );
    }

    fn update_aliens(&mut self) {
        self.check_fleet_edges();
        self.fleet.update(&self.settings);

        if self.fleet.overlaps(&self.ship.bounds()) || self.fleet.reached_bottom(&self.settings)
        {
            self.ship_hit();
        }
    }

    fn check_fleet_edges(&mut self) {
        if self.fleet.at_edge(&self.settings) {
            self.fleet.drop_by(self.settings.fleet_drop_speed);
            self.settings.fleet_direction *= -1;
        }
    }

    fn ship_hit(&mut self) {
        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);
        if self.stats.ships_left > 0 {
            self.projectiles.clear();
            self.fleet.respawn(&self.settings);
            self.ship.center_ship(&self.settings);
            self.pause_ticks = self.settings.hit_pause_ticks;
            info!(ships_left = self.stats.ships_left, "ship hit");
        } else {
            self.stats.game_active = false;
            self.cursor_visible = true;
            info!(
                score = self.stats.score,
                level = self.stats.level,
                "game over"
            );
        }
    }
}
