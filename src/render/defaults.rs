//! Fixed colours, fonts and proportions of the poster

use crate::types::{Color, Length};

use super::instructions::Font;

pub const FLAG_COLOR: Color = Color::SWISS_RED;
pub const BOX_FILL: Color = Color::WHITE;
pub const BOX_STROKE: Color = Color::BLACK;
pub const BOX_STROKE_WIDTH: Length = Length::from_points(0.5);
pub const TEXT_COLOR: Color = Color::BLACK;

pub const NUMBER_FONT: Font = Font::HELVETICA_BOLD;
/// Number font size is the box side (in points) divided by this.
pub const NUMBER_FONT_DIVISOR: f64 = 2.2;

pub const DATE_FONT: Font = Font::HELVETICA;
/// Date font size is the number font size divided by this.
pub const DATE_FONT_DIVISOR: f64 = 3.0;
