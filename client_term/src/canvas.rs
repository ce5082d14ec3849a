//! Character-grid draw surface
//!
//! Playfield coordinates are scaled onto terminal cells. Only two tones exist:
//! black cells are blank, anything else is drawn.

use crossterm::{cursor::MoveTo, queue, style::Print};
use game_core::{Anchor, Color, DrawSurface, Rect};
use glam::Vec2;
use std::io::{self, Write};

const FILL: char = '█';
const BALL: char = '●';
const LINE: char = '┊';

pub struct Canvas {
    cols: usize,
    rows: usize,
    scale: Vec2, // Cells per playfield pixel
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16, playfield: Vec2) -> Self {
        let cols = usize::from(cols.max(1));
        let rows = usize::from(rows.max(1));
        Self {
            cols,
            rows,
            scale: Vec2::new(cols as f32 / playfield.x, rows as f32 / playfield.y),
            cells: vec![' '; cols * rows],
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16, playfield: Vec2) {
        *self = Self::new(cols, rows, playfield);
    }

    pub fn row(&self, row: usize) -> String {
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .collect()
    }

    /// Write the whole grid to the terminal
    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        for row in 0..self.rows {
            queue!(out, MoveTo(0, row as u16), Print(self.row(row)))?;
        }
        out.flush()
    }

    fn to_cell(&self, pos: Vec2) -> (isize, isize) {
        let cell = pos * self.scale;
        (cell.x.floor() as isize, cell.y.floor() as isize)
    }

    fn set(&mut self, col: isize, row: isize, ch: char) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = ch;
        }
    }

    fn fill(&mut self, rect: Rect, ch: char) {
        let (x0, y0) = self.to_cell(Vec2::new(rect.x, rect.y));
        let x1 = ((rect.right() * self.scale.x).ceil() as isize).max(x0 + 1);
        let y1 = ((rect.bottom() * self.scale.y).ceil() as isize).max(y0 + 1);
        for row in y0..y1 {
            for col in x0..x1 {
                self.set(col, row, ch);
            }
        }
    }
}

fn ink(color: Color, ch: char) -> char {
    if color == Color::BLACK {
        ' '
    } else {
        ch
    }
}

impl DrawSurface for Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill(rect, ink(color, FILL));
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.fill(rect, ink(color, BALL));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let (x0, y0) = self.to_cell(from);
        let (x1, y1) = self.to_cell(to);
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
        let ch = ink(color, LINE);
        for i in 0..=steps {
            let col = x0 + (x1 - x0) * i / steps;
            let row = y0 + (y1 - y0) * i / steps;
            // Dotted, every other cell
            if i % 2 == 0 {
                self.set(col, row, ch);
            }
        }
    }

    fn text(&mut self, text: &str, pos: Vec2, _size: f32, anchor: Anchor, color: Color) {
        let (mut col, row) = self.to_cell(pos);
        if anchor == Anchor::Center {
            col -= text.chars().count() as isize / 2;
        }
        for (i, ch) in text.chars().enumerate() {
            self.set(col + i as isize, row, ink(color, ch));
        }
    }
}
