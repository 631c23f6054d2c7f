//! Immutable per-poster configuration.

use chrono::NaiveDate;

use crate::calendar;
use crate::errors::SettingsError;
use crate::search::cross_box_count;
use crate::types::Length;

/// Physical side of the red square when the box size is derived.
pub const DEFAULT_FLAG_WIDTH: Length = Length::from_inches(8.0);
/// Arm proportions of the real flag.
pub const DEFAULT_TOP_ARM_WIDTH: u32 = 6;
pub const DEFAULT_TOP_ARM_HEIGHT: u32 = 7;

/// Options record for [`Settings::new`]. Unset lengths are derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingsOptions {
    /// Width of the topmost arm of the cross, in boxes.
    pub top_arm_width: u32,
    /// Height of the topmost arm of the cross, in boxes.
    pub top_arm_height: u32,
    /// Side of one square box.
    pub box_size: Option<Length>,
    /// Distance from the cross to the edge of the red square.
    pub border_width: Option<Length>,
    /// Date shown in the box counting "0".
    pub last_day: NaiveDate,
}

impl SettingsOptions {
    /// Flag proportions, derived lengths.
    pub fn new(last_day: NaiveDate) -> Self {
        SettingsOptions {
            top_arm_width: DEFAULT_TOP_ARM_WIDTH,
            top_arm_height: DEFAULT_TOP_ARM_HEIGHT,
            box_size: None,
            border_width: None,
            last_day,
        }
    }

    pub fn with_arms(self, top_arm_width: u32, top_arm_height: u32) -> Self {
        SettingsOptions { top_arm_width, top_arm_height, ..self }
    }
}

/// Fully resolved geometry and dates for one poster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    top_arm_width: u32,
    top_arm_height: u32,
    box_size: Length,
    border_width: Length,
    last_day: NaiveDate,
    first_day: NaiveDate,
}

impl Settings {
    /// Resolve options into settings.
    ///
    /// Without an explicit box size, boxes are sized so the whole flag
    /// (cross plus a border one arm-width wide on each side) is
    /// [`DEFAULT_FLAG_WIDTH`] across. Without an explicit border, the border
    /// is one arm width.
    pub fn new(options: SettingsOptions) -> Result<Settings, SettingsError> {
        let SettingsOptions { top_arm_width, top_arm_height, last_day, .. } = options;
        if top_arm_width == 0 || top_arm_height == 0 {
            return Err(SettingsError::DegenerateArms {
                width: top_arm_width,
                height: top_arm_height,
            });
        }

        let box_size = match options.box_size {
            Some(size) => Length::try_positive(size.points())
                .map_err(|source| SettingsError::InvalidLength { field: "box size", source })?,
            None => {
                let columns = f64::from(top_arm_width) * 3.0 + f64::from(top_arm_height) * 2.0;
                DEFAULT_FLAG_WIDTH.scale(1.0 / columns)
            }
        };
        let border_width = match options.border_width {
            Some(width) => Length::try_non_negative(width.points())
                .map_err(|source| SettingsError::InvalidLength { field: "border width", source })?,
            None => box_size.scale(f64::from(top_arm_width)),
        };

        let days = u64::from(top_arm_width)
            .checked_mul(4 * u64::from(top_arm_height) + u64::from(top_arm_width))
            .map_or(u64::MAX, |count| count - 1);
        let first_day = calendar::days_before(last_day, days)
            .ok_or(SettingsError::DateOutOfRange { last_day, days })?;

        crate::log::debug!(
            top_arm_width,
            top_arm_height,
            box_size = box_size.points(),
            border_width = border_width.points(),
            %first_day,
            %last_day,
            "resolved settings"
        );

        Ok(Settings {
            top_arm_width,
            top_arm_height,
            box_size,
            border_width,
            last_day,
            first_day,
        })
    }

    pub fn top_arm_width(&self) -> u32 {
        self.top_arm_width
    }

    pub fn top_arm_height(&self) -> u32 {
        self.top_arm_height
    }

    pub fn box_size(&self) -> Length {
        self.box_size
    }

    pub fn border_width(&self) -> Length {
        self.border_width
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Date of the first box, the one carrying the largest number.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Number of boxes in the cross.
    pub fn box_count(&self) -> u32 {
        // The calendar spans far fewer than u32::MAX days, so a validated
        // countdown always fits.
        cross_box_count(self.top_arm_width, self.top_arm_height) as u32
    }

    /// Boxes across the widest part of the cross.
    pub fn cross_columns(&self) -> u32 {
        self.top_arm_height * 2 + self.top_arm_width
    }

    /// Side of the red square.
    pub fn flag_length(&self) -> Length {
        self.box_size.scale(f64::from(self.cross_columns())) + self.border_width.scale(2.0)
    }
}
