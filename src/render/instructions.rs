//! Abstract drawing instructions and the backend they are replayed on.
//!
//! The layout engine never touches a document. It produces a list of
//! [`DrawInstruction`]s; a [`Canvas`] implementation turns them into real
//! output. The order of the list is the painting order.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::types::{Color, Length, LengthVector};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Helvetica,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Font {
    pub family: FontFamily,
    pub bold: bool,
}

impl Font {
    pub const HELVETICA: Font = Font { family: FontFamily::Helvetica, bold: false };
    pub const HELVETICA_BOLD: Font = Font { family: FontFamily::Helvetica, bold: true };
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.family, self.bold) {
            (FontFamily::Helvetica, false) => write!(f, "Helvetica"),
            (FontFamily::Helvetica, true) => write!(f, "Helvetica-Bold"),
        }
    }
}

/// Output backend for draw instructions.
pub trait Canvas {
    fn fill_rect(&mut self, bottom_left: LengthVector, top_right: LengthVector, fill: Color);

    fn stroke_fill_rect(
        &mut self,
        bottom_left: LengthVector,
        top_right: LengthVector,
        stroke: Color,
        fill: Color,
        stroke_width: Length,
    );

    /// `origin` is the left end of the text baseline.
    fn draw_text(&mut self, origin: LengthVector, text: &str, font: Font, size_points: f64, color: Color);
}

/// Anything that can paint itself onto a canvas
#[enum_dispatch]
pub trait Draw {
    fn draw(&self, canvas: &mut dyn Canvas);
}

/// Filled rectangle without outline
#[derive(Clone, Debug, PartialEq)]
pub struct FillRect {
    pub bottom_left: LengthVector,
    pub top_right: LengthVector,
    pub fill: Color,
}

impl Draw for FillRect {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bottom_left, self.top_right, self.fill);
    }
}

/// Filled rectangle with an outline painted on top
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeFillRect {
    pub bottom_left: LengthVector,
    pub top_right: LengthVector,
    pub stroke: Color,
    pub fill: Color,
    pub stroke_width: Length,
}

impl Draw for StrokeFillRect {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.stroke_fill_rect(self.bottom_left, self.top_right, self.stroke, self.fill, self.stroke_width);
    }
}

/// Single line of text
#[derive(Clone, Debug, PartialEq)]
pub struct DrawText {
    pub origin: LengthVector,
    pub text: String,
    pub font: Font,
    pub size_points: f64,
    pub color: Color,
}

impl Draw for DrawText {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text(self.origin, &self.text, self.font, self.size_points, self.color);
    }
}

#[enum_dispatch(Draw)]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawInstruction {
    FillRect,
    StrokeFillRect,
    DrawText,
}

/// Execute instructions on a canvas in order.
pub fn replay(instructions: &[DrawInstruction], canvas: &mut dyn Canvas) {
    for instruction in instructions {
        instruction.draw(canvas);
    }
}
