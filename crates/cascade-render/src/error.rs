//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur in the render layer.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The font database contains no usable faces.
    ///
    /// Typical in headless containers with no system fonts installed. Hosts
    /// can fall back to [`crate::FixedAdvanceMeasure`] for approximate
    /// measurement.
    #[error("no font faces available for text shaping")]
    NoFontsAvailable,
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
