use std::collections::HashMap;

use ratatui::prelude::*;

use crate::game::geometry::Bounds;
use crate::game::Sprite;
use crate::settings::Rgb;

/// A grid of terminal cells drawn with braille characters: each cell holds
/// 2x4 dots. World coordinates are scaled onto the dot grid so the picture
/// survives a terminal resize.
pub struct BrailleCanvas {
    width: usize,
    height: usize,
    scale_x: f32,
    scale_y: f32,
    bg: Color,
    grid: Vec<Vec<(char, Style)>>,
}

type DotMap = HashMap<(usize, usize), u8>;

impl BrailleCanvas {
    pub fn new(width: usize, height: usize, world_width: i32, world_height: i32, bg: Color) -> Self {
        let bw = (width * 2) as f32;
        let bh = (height * 4) as f32;
        Self {
            width,
            height,
            scale_x: if world_width > 0 { bw / world_width as f32 } else { 1.0 },
            scale_y: if world_height > 0 { bh / world_height as f32 } else { 1.0 },
            bg,
            grid: vec![vec![(' ', Style::default().bg(bg)); width]; height],
        }
    }

    fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
        match (sub_x, sub_y) {
            (0, 0) => 0x01,
            (0, 1) => 0x02,
            (0, 2) => 0x04,
            (0, 3) => 0x40,
            (1, 0) => 0x08,
            (1, 1) => 0x10,
            (1, 2) => 0x20,
            (1, 3) => 0x80,
            _ => 0,
        }
    }

    fn set_dot(&self, map: &mut DotMap, wx: i32, wy: i32) {
        let bx = (wx as f32 * self.scale_x).floor() as i32;
        let by = (wy as f32 * self.scale_y).floor() as i32;
        let bw = (self.width * 2) as i32;
        let bh = (self.height * 4) as i32;
        if bx < 0 || by < 0 || bx >= bw || by >= bh {
            return;
        }
        let (bx, by) = (bx as usize, by as usize);
        *map.entry((bx / 2, by / 4)).or_insert(0) |= Self::braille_bit(bx % 2, by % 4);
    }

    fn write_layer(&mut self, map: &DotMap, color: Color) {
        let style = Style::default()
            .fg(color)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD);
        for (&(cx, cy), &bits) in map {
            if cx < self.width && cy < self.height && bits != 0 {
                let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
                self.grid[cy][cx] = (ch, style);
            }
        }
    }

    pub fn draw(&mut self, bounds: Bounds, sprite: &Sprite) {
        let mut map = DotMap::new();
        let color = match sprite {
            Sprite::Pattern { dots, color } => {
                for &(dx, dy) in dots.iter() {
                    self.set_dot(&mut map, bounds.x + dx, bounds.y + dy);
                }
                *color
            }
            Sprite::Solid { color } => {
                for y in bounds.top()..bounds.bottom() {
                    for x in bounds.left()..bounds.right() {
                        self.set_dot(&mut map, x, y);
                    }
                }
                *color
            }
        };
        self.write_layer(&map, rgb(color));
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.grid
            .into_iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .into_iter()
                    .map(|(ch, style)| Span::styled(String::from(ch), style))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    #[cfg(test)]
    fn cell(&self, x: usize, y: usize) -> char {
        self.grid[y][x].0
    }
}

pub fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}
