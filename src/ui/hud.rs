use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::Invasion;

const SHIP_ICON: &str = "\u{25b2} ";

/// Scores are shown rounded to the nearest ten with thousands separators.
pub fn format_score(score: u32) -> String {
    let rounded = (score as u64 + 5) / 10 * 10;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Ships on the left, high score in the middle, score and level on the right.
pub fn render_status(frame: &mut Frame, game: &Invasion, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let ships = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(
            SHIP_ICON.repeat(game.stats.ships_left as usize),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(ships, cols[0]);

    let high = Paragraph::new(Line::from(vec![Span::styled(
        format!("High: {}", format_score(game.stats.high_score)),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Center);
    frame.render_widget(high, cols[1]);

    let score = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Score: {} ", format_score(game.stats.score)),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Level: {} ", game.stats.level),
            Style::default().fg(Color::Green),
        ),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(score, cols[2]);
}

pub fn render_help(frame: &mut Frame, game: &Invasion, area: Rect) {
    let line = if game.is_active() && game.is_paused() {
        Line::from(vec![Span::styled(
            " SHIP HIT! ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )])
    } else if game.is_active() {
        Line::from(vec![
            Span::styled(" \u{2190}\u{2192} Move ", Style::default().fg(Color::DarkGray)),
            Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled(
                "Space Shoot ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                " Click Play ",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled("or press P to start ", Style::default().fg(Color::Gray)),
            Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the Play button centered in `field` and return where it went.
pub fn render_play_button(frame: &mut Frame, field: Rect) -> Rect {
    let w = 14u16.min(field.width);
    let h = 3u16.min(field.height);
    let x = field.x + field.width.saturating_sub(w) / 2;
    let y = field.y + field.height.saturating_sub(h) / 2;
    let button = Rect::new(x, y, w, h);

    frame.render_widget(Clear, button);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::White))
        .style(Style::default().bg(Color::Rgb(0, 135, 0)));
    let inner = block.inner(button);
    frame.render_widget(block, button);
    let label = Paragraph::new(Line::from(Span::styled(
        "Play",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(Color::Rgb(0, 135, 0)));
    frame.render_widget(label, inner);
    button
}
