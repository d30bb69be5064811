pub mod canvas;
pub mod hud;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::Entity;

use canvas::{rgb, BrailleCanvas};

pub struct Chunks {
    pub status: Rect,
    pub field: Rect,
    pub help: Rect,
}

fn frame_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(120, 80, 160)))
        .title(" Alien Invasion ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(200, 120, 255))
                .add_modifier(Modifier::BOLD),
        )
}

/// Split the whole terminal into HUD line, playing field and help line.
pub fn layout(area: Rect) -> Chunks {
    let inner = frame_block().inner(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);
    Chunks {
        status: rows[0],
        field: rows[1],
        help: rows[2],
    }
}

/// World size in dots for a terminal of the given size.
pub fn world_size(area: Rect) -> (i32, i32) {
    let field = layout(area).field;
    (field.width as i32 * 2, field.height as i32 * 4)
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(frame_block(), area);
    let chunks = layout(area);

    hud::render_status(frame, &app.game, chunks.status);

    let game = &app.game;
    let settings = &game.settings;
    let fw = chunks.field.width as usize;
    let fh = chunks.field.height as usize;
    if fw > 0 && fh > 0 {
        let mut canvas = BrailleCanvas::new(
            fw,
            fh,
            settings.screen_width,
            settings.screen_height,
            rgb(settings.bg_color),
        );
        let frame_no = game.tick();
        for alien in game.fleet.iter() {
            canvas.draw(alien.bounds(), &alien.sprite(frame_no));
        }
        for projectile in &game.projectiles {
            canvas.draw(projectile.bounds(), &projectile.sprite(frame_no));
        }
        canvas.draw(game.ship.bounds(), &game.ship.sprite(frame_no));
        frame.render_widget(Paragraph::new(canvas.into_lines()), chunks.field);
    }

    hud::render_help(frame, &app.game, chunks.help);

    app.play_button = if app.game.is_active() {
        Rect::default()
    } else {
        hud::render_play_button(frame, chunks.field)
    };
}
