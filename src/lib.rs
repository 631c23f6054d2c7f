//! Countdown posters shaped like the Swiss flag.
//!
//! A poster is a red square holding a white cross made of small boxes. Every
//! box is one day: it shows how many days are left and the calendar date of
//! that day, down to `0` on the last day.
//!
//! - [`search`] picks cross proportions whose box count matches the number
//!   of days to count down.
//! - [`settings`] turns proportions and a last day into poster geometry.
//! - [`render`] lays the poster out as draw instructions and writes PDF.

pub mod calendar;
pub mod errors;
pub mod log;
pub mod render;
pub mod search;
pub mod settings;
pub mod types;

pub use errors::{DocumentError, MetricsError, PosterError, SearchError, SettingsError};
pub use render::{PageSize, Poster, PosterDocument, Standard14Metrics, render_posters};
pub use search::{Solution, SolutionFinder, find_best_n};
pub use settings::{Settings, SettingsOptions};
pub use types::{Color, Length, LengthVector};
