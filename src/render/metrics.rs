//! Text measurement.
//!
//! The layout engine asks a [`TextMetrics`] provider how large a label will
//! be so it can centre it. [`Standard14Metrics`] answers from the published
//! advance widths of the PDF base-14 Helvetica faces, which are exactly the
//! fonts the PDF backend draws with.

use crate::errors::MetricsError;
use crate::types::{Length, LengthVector};

use super::instructions::{Font, FontFamily};

/// Measures single-line text.
pub trait TextMetrics {
    type Error;

    /// Width and height of `text` set in `font` at `size_points`.
    fn measure(&self, font: Font, size_points: f64, text: &str) -> Result<LengthVector, Self::Error>;
}

/// Advance widths of Helvetica, 1/1000 em, for ASCII 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191,
    333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556,
    556, 556, 278, 278, 584, 584, 584, 556,
   1015, 667, 667, 722, 722, 667, 611, 778,
    722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556,
    556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722,
    500, 500, 500, 334, 260, 334, 584,
];

/// Advance widths of Helvetica-Bold, 1/1000 em, for ASCII 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238,
    333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556,
    556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778,
    722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611,
    611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778,
    556, 556, 500, 389, 280, 389, 584,
];

// Bounding-box height of the digit zero, 1/1000 em. Labels are mostly
// digits, so this is used as the line height for vertical centring.
const HELVETICA_ZERO_HEIGHT: u16 = 722;
const HELVETICA_BOLD_ZERO_HEIGHT: u16 = 729;

/// Metrics for the built-in PDF Helvetica faces.
#[derive(Debug, Clone, Copy, Default)]
pub struct Standard14Metrics;

impl Standard14Metrics {
    fn tables(font: Font) -> (&'static [u16; 95], u16) {
        match (font.family, font.bold) {
            (FontFamily::Helvetica, false) => (&HELVETICA_WIDTHS, HELVETICA_ZERO_HEIGHT),
            (FontFamily::Helvetica, true) => (&HELVETICA_BOLD_WIDTHS, HELVETICA_BOLD_ZERO_HEIGHT),
        }
    }

    /// Total advance width of `text` in 1/1000 em.
    pub fn text_units(font: Font, text: &str) -> Result<u32, MetricsError> {
        let (widths, _) = Self::tables(font);
        text.chars().try_fold(0u32, |total, ch| match ch {
            ' '..='~' => Ok(total + u32::from(widths[ch as usize - 0x20])),
            _ => Err(MetricsError::UnsupportedCharacter { ch, font }),
        })
    }
}

impl TextMetrics for Standard14Metrics {
    type Error = MetricsError;

    fn measure(&self, font: Font, size_points: f64, text: &str) -> Result<LengthVector, MetricsError> {
        let (_, zero_height) = Self::tables(font);
        let width = f64::from(Self::text_units(font, text)?) * size_points / 1000.0;
        let height = f64::from(zero_height) * size_points / 1000.0;
        Ok(LengthVector::new(Length::from_points(width), Length::from_points(height)))
    }
}
