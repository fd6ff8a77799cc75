//! Domain-level command and result types.
//!
//! These structs are what the services accept and return. The frontend
//! builds commands straight from its form state and renders the
//! `success_message` strings in its notice banner.

pub mod auth {
    /// Credentials submitted from the login form.
    #[derive(Debug, Clone)]
    pub struct LoginCommand {
        pub email: String,
        pub password: String,
    }
}

pub mod bookings {
    use shared::Booking;

    /// Input for creating a new booking. All fields are required.
    #[derive(Debug, Clone)]
    pub struct CreateBookingCommand {
        pub customer_name: String,
        pub phone: String,
        pub court: u32,
        pub date: String,
        pub start_time: String,
        pub end_time: String,
    }

    /// Result of creating a booking; the message carries the verification
    /// code so staff can read it back to the customer.
    #[derive(Debug, Clone)]
    pub struct CreateBookingResult {
        pub booking: Booking,
        pub success_message: String,
    }

    /// Input for rescheduling an existing booking. Customer identity is
    /// immutable; only court, date and times change.
    #[derive(Debug, Clone)]
    pub struct RescheduleCommand {
        pub booking_id: String,
        pub court: u32,
        pub date: String,
        pub start_time: String,
        pub end_time: String,
    }

    #[derive(Debug, Clone)]
    pub struct RescheduleResult {
        pub booking: Booking,
        pub success_message: String,
    }

    #[derive(Debug, Clone)]
    pub struct CheckInResult {
        pub booking: Booking,
        pub success_message: String,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteResult {
        pub booking: Booking,
        pub success_message: String,
    }

    /// Input for a drag-move on the schedule grid.
    #[derive(Debug, Clone)]
    pub struct MoveCommand {
        pub booking_id: String,
        pub new_court: u32,
        pub new_time: String,
    }

    /// Outcome of planning a drag-move, before the user has confirmed it.
    #[derive(Debug, Clone)]
    pub enum MovePlan {
        /// Target equals the booking's current position; nothing to do.
        Unchanged,
        Move(PlannedMove),
    }

    /// A validated move waiting on user confirmation. The end time is
    /// precomputed for the dialog text.
    #[derive(Debug, Clone)]
    pub struct PlannedMove {
        pub booking_id: String,
        pub customer: String,
        pub new_court: u32,
        pub new_time: String,
        pub new_end_time: String,
    }

    /// Outcome of committing a drag-move.
    #[derive(Debug, Clone)]
    pub enum MoveOutcome {
        /// No-op: the booking was already at the target position and no
        /// audit entry was appended.
        Unchanged,
        Moved {
            booking: Booking,
            success_message: String,
        },
    }
}
