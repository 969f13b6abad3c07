//! Error types for the booking subsystem.

use thiserror::Error;

/// Errors emitted by booking components.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    /// Booking fields failed validation.
    #[error("invalid booking: {0}")]
    InvalidRecord(&'static str),
}

/// Result type alias for booking operations.
pub type BookingResult<T> = Result<T, BookingError>;
