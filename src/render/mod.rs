//! Poster rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Fixed colours, fonts and proportions
//! - `instructions`: Draw instructions and the `Canvas` backend trait
//! - `layout`: Box traversal for the cross
//! - `metrics`: Text measurement
//! - `pdf`: PDF document backend

pub mod defaults;
pub mod instructions;
pub mod layout;
pub mod metrics;
pub mod pdf;

pub use instructions::*;
pub use layout::BoxPlacement;
pub use metrics::{Standard14Metrics, TextMetrics};
pub use pdf::PosterDocument;

use rayon::prelude::*;

use crate::calendar;
use crate::errors::PosterError;
use crate::search::Solution;
use crate::settings::{Settings, SettingsOptions};
use crate::types::{Length, LengthVector};

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    /// US Letter, 8.5 × 11 in
    #[default]
    Letter,
    /// ISO A4, 21 × 29.7 cm
    A4,
}

impl PageSize {
    pub fn dimensions(self) -> LengthVector {
        match self {
            PageSize::Letter => LengthVector::new(Length::from_inches(8.5), Length::from_inches(11.0)),
            PageSize::A4 => LengthVector::new(Length::from_centimeters(21.0), Length::from_centimeters(29.7)),
        }
    }
}

/// Lays out one poster.
#[derive(Debug, Clone, Copy)]
pub struct PageRenderer {
    settings: Settings,
}

impl PageRenderer {
    pub fn new(settings: Settings) -> Self {
        PageRenderer { settings }
    }

    /// Draw instructions for a page of `page_size`, in painting order: the
    /// red square first, then for every box its rectangle, number and date.
    ///
    /// Metrics failures are returned unchanged; no partial output is kept.
    pub fn render<M>(&self, page_size: LengthVector, metrics: &M) -> Result<Vec<DrawInstruction>, M::Error>
    where
        M: TextMetrics + ?Sized,
    {
        let settings = &self.settings;
        let page_middle = page_size.scale(0.5);
        let flag_length = settings.flag_length();
        let flag_half = LengthVector::new(flag_length, flag_length).scale(0.5);

        let mut instructions = Vec::with_capacity(1 + 3 * settings.box_count() as usize);
        instructions.push(
            FillRect {
                bottom_left: page_middle - flag_half,
                top_right: page_middle + flag_half,
                fill: defaults::FLAG_COLOR,
            }
            .into(),
        );

        for placement in layout::placements(settings, page_middle) {
            self.render_box(&placement, metrics, &mut instructions)?;
        }

        crate::log::debug!(
            top_arm_width = settings.top_arm_width(),
            top_arm_height = settings.top_arm_height(),
            boxes = settings.box_count(),
            instructions = instructions.len(),
            "rendered poster"
        );
        Ok(instructions)
    }

    fn render_box<M>(
        &self,
        placement: &BoxPlacement,
        metrics: &M,
        out: &mut Vec<DrawInstruction>,
    ) -> Result<(), M::Error>
    where
        M: TextMetrics + ?Sized,
    {
        let box_size = self.settings.box_size();
        let top_left = placement.top_left;
        let bottom_right = placement.bottom_right(box_size);
        let middle = placement.center(box_size);

        out.push(
            StrokeFillRect {
                bottom_left: LengthVector::new(top_left.x, bottom_right.y),
                top_right: LengthVector::new(bottom_right.x, top_left.y),
                stroke: defaults::BOX_STROKE,
                fill: defaults::BOX_FILL,
                stroke_width: defaults::BOX_STROKE_WIDTH,
            }
            .into(),
        );

        // Number, centred in the box.
        let number = placement.number.to_string();
        let number_size = box_size.points() / defaults::NUMBER_FONT_DIVISOR;
        let number_extent = metrics.measure(defaults::NUMBER_FONT, number_size, &number)?;
        let number_origin = middle - number_extent.scale(0.5);

        // Date, centred horizontally, halfway between the box bottom and the
        // number's baseline.
        let date = calendar::day_month_label(placement.date);
        let date_size = number_size / defaults::DATE_FONT_DIVISOR;
        let date_extent = metrics.measure(defaults::DATE_FONT, date_size, &date)?;
        let date_origin = LengthVector::new(
            middle.x - date_extent.x.scale(0.5),
            (bottom_right.y + number_origin.y).scale(0.5) - date_extent.y.scale(0.5),
        );

        out.push(
            DrawText {
                origin: number_origin,
                text: number,
                font: defaults::NUMBER_FONT,
                size_points: number_size,
                color: defaults::TEXT_COLOR,
            }
            .into(),
        );
        out.push(
            DrawText {
                origin: date_origin,
                text: date,
                font: defaults::DATE_FONT,
                size_points: date_size,
                color: defaults::TEXT_COLOR,
            }
            .into(),
        );
        Ok(())
    }
}

/// Render one poster from settings. See [`PageRenderer::render`].
pub fn render<M>(settings: &Settings, page_size: LengthVector, metrics: &M) -> Result<Vec<DrawInstruction>, M::Error>
where
    M: TextMetrics + ?Sized,
{
    PageRenderer::new(*settings).render(page_size, metrics)
}

/// A rendered poster variant, ready to be added to a document.
#[derive(Debug, Clone)]
pub struct Poster {
    pub solution: Solution,
    pub settings: Settings,
    pub page_size: LengthVector,
    pub instructions: Vec<DrawInstruction>,
}

/// Render one poster per candidate, in parallel.
///
/// Each candidate's arms replace those in `base`; everything else in `base`
/// applies to every poster. The result keeps candidate order. Any failure
/// aborts the whole batch.
pub fn render_posters<M>(
    solutions: &[Solution],
    base: SettingsOptions,
    page_size: LengthVector,
    metrics: &M,
) -> Result<Vec<Poster>, PosterError>
where
    M: TextMetrics + Sync + ?Sized,
    M::Error: std::error::Error + Send + Sync + 'static,
{
    solutions
        .par_iter()
        .map(|solution| {
            let options = base.with_arms(solution.top_arm_width, solution.top_arm_height);
            let settings = Settings::new(options)?;
            let instructions = render(&settings, page_size, metrics).map_err(|err| PosterError::Metrics(Box::new(err)))?;
            Ok(Poster { solution: *solution, settings, page_size, instructions })
        })
        .collect()
}
