use thiserror::Error;

/// Failures surfaced to the user as blocking notices.
///
/// Every failure is terminal to the triggering action and leaves the
/// booking store unmodified; nothing is retried or escalated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Invalid email or password")]
    InvalidCredential,

    /// `{0}` names the attempted operation, e.g. "delete bookings".
    #[error("Only admins can {0}")]
    PermissionDenied(String),

    #[error("{0}")]
    Validation(String),

    /// `{0}` identifies what was looked up (a booking id or code).
    #[error("No booking found for {0}")]
    NotFound(String),

    #[error("Court {court} at {time} is already occupied")]
    SlotConflict { court: u32, time: String },

    #[error("Booking id {0} already exists")]
    DuplicateId(String),
}
