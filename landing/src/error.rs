use thiserror::Error;

/// Failures while binding animations to the live DOM.
///
/// None of these are fatal: the page keeps the last computed frame and
/// logs the error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LandingError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("viewport height is not a number")]
    ViewportHeight,

    #[error("tracked element is not mounted")]
    Detached,
}

pub type Result<T> = std::result::Result<T, LandingError>;
