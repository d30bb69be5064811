use crate::game::alien::Alien;
use crate::game::geometry::Bounds;
use crate::game::projectile::Projectile;
use crate::game::Entity;
use crate::settings::Settings;

/// How many aliens fit on screen: `(columns, rows)`.
///
/// Columns leave one alien width of margin on each side and one alien width
/// between neighbours. Rows leave room for the ship and empty space above it.
pub fn grid_size(settings: &Settings) -> (usize, usize) {
    let aw = settings.alien_width;
    let ah = settings.alien_height;
    if aw <= 0 || ah <= 0 {
        return (0, 0);
    }
    let available_x = (settings.screen_width - 2 * aw).max(0);
    let columns = available_x / (2 * aw);
    let available_y = (settings.screen_height - 3 * ah - settings.ship_height).max(0);
    let rows = available_y / (4 * ah);
    (columns as usize, rows as usize)
}

/// The live aliens. They move as one body; the travel direction lives in
/// `Settings::fleet_direction`.
#[derive(Default)]
pub struct Fleet {
    aliens: Vec<Alien>,
}

impl Fleet {
    pub fn spawn(settings: &Settings) -> Self {
        let mut fleet = Self::default();
        fleet.respawn(settings);
        fleet
    }

    /// Replace whatever is left with a fresh grid.
    pub fn respawn(&mut self, settings: &Settings) {
        self.aliens.clear();
        let (columns, rows) = grid_size(settings);
        let aw = settings.alien_width;
        let ah = settings.alien_height;
        for row in 0..rows as i32 {
            for col in 0..columns as i32 {
                let x = aw + 2 * aw * col;
                let y = ah + 2 * ah * row;
                self.aliens.push(Alien::new(settings, x, y));
            }
        }
    }

    pub fn clear(&mut self) {
        self.aliens.clear();
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.iter()
    }

    pub fn push(&mut self, alien: Alien) {
        self.aliens.push(alien);
    }

    pub fn at_edge(&self, settings: &Settings) -> bool {
        self.aliens.iter().any(|a| a.at_edge(settings))
    }

    pub fn drop_by(&mut self, dy: i32) {
        for alien in &mut self.aliens {
            alien.drop_by(dy);
        }
    }

    pub fn update(&mut self, settings: &Settings) {
        for alien in &mut self.aliens {
            alien.update(settings);
        }
    }

    pub fn overlaps(&self, bounds: &Bounds) -> bool {
        self.aliens.iter().any(|a| a.bounds().overlaps(bounds))
    }

    pub fn reached_bottom(&self, settings: &Settings) -> bool {
        self.aliens
            .iter()
            .any(|a| a.bounds().bottom() >= settings.screen_height)
    }

    /// Remove every projectile that touched an alien during its last step and
    /// every alien it touched.
    /// An alien already destroyed by an earlier projectile this tick cannot
    /// absorb another one. Returns the number of aliens destroyed.
    pub fn resolve_hits(&mut self, projectiles: &mut Vec<Projectile>) -> usize {
        let mut dead = vec![false; self.aliens.len()];
        projectiles.retain(|p| {
            let pb = p.swept_bounds();
            let mut hit = false;
            for (i, alien) in self.aliens.iter().enumerate() {
                if !dead[i] && pb.overlaps(&alien.bounds()) {
                    dead[i] = true;
                    hit = true;
                }
            }
            !hit
        });

        let removed = dead.iter().filter(|d| **d).count();
        if removed > 0 {
            let mut idx = 0;
            self.aliens.retain(|_| {
                let keep = !dead[idx];
                idx += 1;
                keep
            });
        }
        removed
    }
}
