use alien_invasion::game::alien::Alien;
use alien_invasion::game::fleet::grid_size;
use alien_invasion::game::geometry::Bounds;
use alien_invasion::game::projectile::Projectile;
use alien_invasion::game::{Entity, Invasion};

const W: i32 = 320;
const H: i32 = 180;

fn active_game() -> Invasion {
    let mut game = Invasion::new(W, H, 0);
    game.start_game();
    game
}

/// Replace the fleet with aliens at the given top-left positions.
fn place_aliens(game: &mut Invasion, positions: &[(i32, i32)]) {
    game.fleet.clear();
    for &(x, y) in positions {
        let alien = Alien::new(&game.settings, x, y);
        game.fleet.push(alien);
    }
}

/// An alien sitting a few dots straight above the ship's gun.
fn alien_over_ship(game: &Invasion) -> (i32, i32) {
    let ship = game.ship.bounds();
    (ship.center_x() - 3, ship.top() - 12)
}

// ── start ─────────────────────────────────────────────────────────────────────

#[test]
fn start_game_activates_and_hides_cursor() {
    let game = active_game();
    assert!(game.is_active());
    assert!(!game.cursor_visible());
    let (columns, rows) = grid_size(&game.settings);
    assert_eq!(game.fleet.len(), columns * rows);
    assert!(game.projectiles.is_empty());
}

#[test]
fn start_game_resets_dynamic_settings_and_stats() {
    let mut game = active_game();
    let baseline = game.settings.clone();
    game.settings.increase_speed();
    game.settings.increase_speed();
    game.settings.fleet_direction = -1;
    game.stats.score = 900;
    game.stats.level = 3;
    game.stats.check_high_score();

    // End the session, then start again
    game.stats.ships_left = 1;
    let (x, y) = alien_over_ship(&game);
    place_aliens(&mut game, &[(x, y + 10)]);
    game.update();
    assert!(!game.is_active());

    game.start_game();
    assert_eq!(game.settings.ship_speed, baseline.ship_speed);
    assert_eq!(game.settings.alien_speed, baseline.alien_speed);
    assert_eq!(game.settings.alien_points, baseline.alien_points);
    assert_eq!(game.settings.fleet_direction, 1);
    assert_eq!(game.stats.score, 0);
    assert_eq!(game.stats.level, 1);
    assert_eq!(game.stats.ships_left, game.settings.ship_limit);
    assert_eq!(game.stats.high_score, 900);
}

#[test]
fn start_game_while_active_is_ignored() {
    let mut game = active_game();
    game.stats.score = 100;
    game.start_game();
    assert_eq!(game.stats.score, 100);
}

// ── firing ────────────────────────────────────────────────────────────────────

#[test]
fn firing_respects_cap() {
    let mut game = active_game();
    let cap = game.settings.bullets_allowed;
    for i in 0..10 {
        let fired = game.fire_bullet();
        assert_eq!(fired, i < cap);
        assert!(game.projectiles.len() <= cap);
    }
    assert_eq!(game.projectiles.len(), cap);
}

#[test]
fn projectiles_leave_through_the_top() {
    let mut game = active_game();
    place_aliens(&mut game, &[(20, 100)]);
    assert!(game.fire_bullet());
    for _ in 0..200 {
        game.update();
        assert!(game.projectiles.iter().all(|p| p.bounds().bottom() > 0));
    }
    assert!(game.projectiles.is_empty());
    // Freed slot can be used again
    assert!(game.fire_bullet());
}

// ── collisions & scoring ──────────────────────────────────────────────────────

#[test]
fn hit_scores_points_per_alien() {
    let mut game = active_game();
    let target = alien_over_ship(&game);
    place_aliens(&mut game, &[target, (20, 20)]);
    let points = game.settings.alien_points;

    assert!(game.fire_bullet());
    for _ in 0..20 {
        game.update();
    }
    assert_eq!(game.fleet.len(), 1);
    assert!(game.projectiles.is_empty());
    assert_eq!(game.stats.score, points);
    assert_eq!(game.stats.high_score, points);
}

#[test]
fn batch_of_two_scores_twice() {
    let mut game = active_game();
    let ship = game.ship.bounds();
    // Two aliens side by side, both straddled by a 3-dot projectile
    let left = (ship.center_x() - 7, 40);
    let right = (ship.center_x(), 40);
    place_aliens(&mut game, &[left, right, (20, 20)]);
    game.settings.bullet_width = 3;
    game.projectiles
        .push(Projectile::new(&game.settings, Bounds::new(ship.center_x() - 4, 41, 9, 6)));

    let before = game.stats.score;
    game.update();
    assert_eq!(game.fleet.len(), 1);
    assert_eq!(game.stats.score, before + 2 * game.settings.alien_points);
}

#[test]
fn high_score_is_kept_when_beaten_score_is_lower() {
    let mut game = Invasion::new(W, H, 10_000);
    game.start_game();
    let target = alien_over_ship(&game);
    place_aliens(&mut game, &[target, (20, 20)]);
    game.fire_bullet();
    for _ in 0..20 {
        game.update();
    }
    assert_eq!(game.stats.score, game.settings.alien_points);
    assert_eq!(game.stats.high_score, 10_000);
}

#[test]
fn fast_projectiles_still_hit_after_many_levels() {
    // Bullet speed after many level-ups exceeds an alien's height plus the
    // bullet's; every alien height the end position could skip must still hit.
    for level_ups in [0, 11, 12, 15, 20] {
        for offset in 0..12 {
            let mut game = active_game();
            for _ in 0..level_ups {
                game.settings.increase_speed();
            }
            game.settings.alien_speed = 0.0;
            let (x, y) = alien_over_ship(&game);
            place_aliens(&mut game, &[(x, y - 50 - offset), (20, 20)]);
            let points = game.settings.alien_points;

            assert!(game.fire_bullet());
            for _ in 0..100 {
                game.update();
            }
            assert_eq!(game.fleet.len(), 1, "missed at {level_ups} level-ups, offset {offset}");
            assert_eq!(game.stats.score, points);
        }
    }
}

#[test]
fn score_saturates_instead_of_wrapping() {
    let mut game = active_game();
    for _ in 0..45 {
        game.settings.increase_speed();
    }
    game.settings.alien_speed = 0.0;
    game.stats.score = 4_000_000_000;
    let target = alien_over_ship(&game);
    place_aliens(&mut game, &[target, (20, 20)]);

    assert!(game.fire_bullet());
    for _ in 0..5 {
        game.update();
    }
    assert_eq!(game.fleet.len(), 1);
    assert_eq!(game.stats.score, u32::MAX);
    assert_eq!(game.stats.high_score, u32::MAX);
}

// ── level transitions ─────────────────────────────────────────────────────────

#[test]
fn clearing_the_fleet_levels_up_once() {
    let mut game = active_game();
    let target = alien_over_ship(&game);
    place_aliens(&mut game, &[target]);
    let ship_speed = game.settings.ship_speed;
    let bullet_speed = game.settings.bullet_speed;
    let alien_speed = game.settings.alien_speed;
    let points = game.settings.alien_points;

    game.fire_bullet();
    game.fire_bullet();
    let mut level_ups = 0;
    for _ in 0..20 {
        let level = game.stats.level;
        game.update();
        level_ups += game.stats.level - level;
    }

    assert_eq!(level_ups, 1);
    assert_eq!(game.stats.level, 2);
    assert_eq!(game.stats.score, points);
    let (columns, rows) = grid_size(&game.settings);
    assert_eq!(game.fleet.len(), columns * rows);
    assert!(game.projectiles.is_empty());
    assert!(game.settings.ship_speed > ship_speed);
    assert!(game.settings.bullet_speed > bullet_speed);
    assert!(game.settings.alien_speed > alien_speed);
    assert!(game.settings.alien_points > points);
}

// ── ship hit ──────────────────────────────────────────────────────────────────

#[test]
fn ship_hit_with_lives_left_respawns_and_pauses() {
    let mut game = active_game();
    let ship = game.ship.bounds();
    // On the ship but clear of the gun's column
    place_aliens(&mut game, &[(ship.x + 5, ship.y)]);
    game.fire_bullet();

    game.update();
    assert!(game.is_active());
    assert!(game.is_paused());
    assert_eq!(game.stats.ships_left, game.settings.ship_limit - 1);
    let (columns, rows) = grid_size(&game.settings);
    assert_eq!(game.fleet.len(), columns * rows);
    assert!(game.projectiles.is_empty());
    assert_eq!(game.ship.bounds().center_x(), W / 2);

    // Nothing moves while the pause runs
    game.ship.moving_right = true;
    let x = game.ship.x();
    let first = game.fleet.iter().next().map(|a| a.bounds());
    for _ in 0..game.settings.hit_pause_ticks {
        assert!(!game.fire_bullet());
        game.update();
        assert_eq!(game.ship.x(), x);
    }
    assert_eq!(game.fleet.iter().next().map(|a| a.bounds()), first);
    assert!(!game.is_paused());

    game.update();
    assert!(game.ship.x() > x);
}

#[test]
fn alien_at_bottom_counts_as_hit() {
    let mut game = active_game();
    let alien_height = game.settings.alien_height;
    place_aliens(&mut game, &[(20, H - alien_height)]);
    game.update();
    assert_eq!(game.stats.ships_left, game.settings.ship_limit - 1);
    assert!(game.is_paused());
}

#[test]
fn last_ship_hit_ends_the_game() {
    let mut game = active_game();
    game.stats.ships_left = 1;
    let ship = game.ship.bounds();
    place_aliens(&mut game, &[(ship.x, ship.y)]);

    game.update();
    assert!(!game.is_active());
    assert!(game.cursor_visible());
    assert!(!game.is_paused());
    assert_eq!(game.stats.ships_left, 0);
    // No respawn: the killer is still the only alien
    assert_eq!(game.fleet.len(), 1);

    // Frozen until Play
    let before = game.fleet.iter().next().map(|a| a.bounds());
    game.update();
    assert_eq!(game.fleet.iter().next().map(|a| a.bounds()), before);
}

// ── fleet movement ────────────────────────────────────────────────────────────

#[test]
fn fleet_bounces_between_edges() {
    let mut game = active_game();
    place_aliens(&mut game, &[(W / 2, 20)]);
    let mut flips = 0;
    let mut dir = game.settings.fleet_direction;
    for _ in 0..2000 {
        game.update();
        if !game.is_active() {
            break;
        }
        let a = game.fleet.iter().next().map(|a| a.bounds()).unwrap();
        assert!(a.left() >= -1 && a.right() <= W + 1);
        if game.settings.fleet_direction != dir {
            flips += 1;
            dir = game.settings.fleet_direction;
        }
    }
    assert!(flips >= 2);
}

#[test]
fn ship_never_leaves_screen_in_play() {
    let mut game = active_game();
    place_aliens(&mut game, &[(20, 20)]);
    game.ship.moving_left = true;
    for _ in 0..300 {
        game.update();
        let b = game.ship.bounds();
        assert!(b.left() >= 0 && b.right() <= W);
    }
    game.ship.moving_left = false;
    game.ship.moving_right = true;
    for _ in 0..300 {
        game.update();
        let b = game.ship.bounds();
        assert!(b.left() >= 0 && b.right() <= W);
    }
}
