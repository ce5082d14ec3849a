//! Frame description as plain draw commands
//!
//! The engine never touches a display. It describes each frame as a list of
//! `DrawCommand`s that a presentation layer replays onto its `DrawSurface`.

use crate::Rect;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Which point of the text box `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

pub const SCORE_FONT_SIZE: f32 = 50.0;
pub const MENU_FONT_SIZE: f32 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillEllipse {
        rect: Rect,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        anchor: Anchor,
        color: Color,
    },
}

impl DrawCommand {
    /// Replay this command onto a surface
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        match self {
            DrawCommand::FillRect { rect, color } => surface.fill_rect(*rect, *color),
            DrawCommand::FillEllipse { rect, color } => surface.fill_ellipse(*rect, *color),
            DrawCommand::Line { from, to, color } => surface.line(*from, *to, *color),
            DrawCommand::Text {
                text,
                pos,
                size,
                anchor,
                color,
            } => surface.text(text, *pos, *size, *anchor, *color),
        }
    }
}

/// Drawing primitives provided by the presentation layer.
///
/// Calls are fire-and-forget; a surface that cannot draw something drops it.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_ellipse(&mut self, rect: Rect, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn text(&mut self, text: &str, pos: Vec2, size: f32, anchor: Anchor, color: Color);
}

/// Surface that records commands, used by headless drivers and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillEllipse { rect, color });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, anchor: Anchor, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            anchor,
            color,
        });
    }
}
