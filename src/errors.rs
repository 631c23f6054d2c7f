//! Error types with diagnostics using miette
//!
//! One enum per concern. Nothing here is retried: every error aborts the
//! computation that raised it.

use chrono::NaiveDate;
use miette::Diagnostic;
use thiserror::Error;

use crate::render::Font;
use crate::types::NumericError;

// ============================================================================
// Search Errors
// ============================================================================

/// Invalid parameters handed to the solution search
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("target count must be at least 1, got {target}")]
    #[diagnostic(
        code(swiss_countdown::search::invalid_target_count),
        help("the last day must not lie before today")
    )]
    InvalidTargetCount { target: i64 },

    #[error("number of candidates must be at least 1")]
    #[diagnostic(code(swiss_countdown::search::invalid_candidate_count))]
    InvalidCandidateCount,
}

// ============================================================================
// Settings Errors
// ============================================================================

/// Settings that cannot describe a poster
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("arm dimensions must be positive, got {width}x{height}")]
    #[diagnostic(code(swiss_countdown::settings::degenerate_arms))]
    DegenerateArms { width: u32, height: u32 },

    #[error("invalid {field}")]
    #[diagnostic(code(swiss_countdown::settings::invalid_length))]
    InvalidLength {
        field: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("countdown of {days} days ending {last_day} starts outside the calendar")]
    #[diagnostic(code(swiss_countdown::settings::date_out_of_range))]
    DateOutOfRange { last_day: NaiveDate, days: u64 },
}

// ============================================================================
// Metrics Errors
// ============================================================================

/// Failures of the built-in text metrics provider
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("character {ch:?} has no metrics in {font}")]
    #[diagnostic(
        code(swiss_countdown::metrics::unsupported_character),
        help("only printable ASCII is available in the built-in fonts")
    )]
    UnsupportedCharacter { ch: char, font: Font },
}

// ============================================================================
// Document Errors
// ============================================================================

/// Errors raised while assembling or writing the output document
#[derive(Error, Diagnostic, Debug)]
pub enum DocumentError {
    #[error("failed to create PDF: {0}")]
    #[diagnostic(code(swiss_countdown::document::pdf))]
    Pdf(String),

    #[error("failed to write document")]
    #[diagnostic(code(swiss_countdown::document::io))]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Poster Errors
// ============================================================================

/// Failure to produce one of a batch of posters
#[derive(Error, Diagnostic, Debug)]
pub enum PosterError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Settings(#[from] SettingsError),

    #[error("failed to measure label text")]
    #[diagnostic(code(swiss_countdown::render::metrics))]
    Metrics(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}
