//! Core domain logic for the court booking tracker.
//!
//! Everything in here is synchronous and in-memory: the booking store, the
//! session/role guard, the action handlers that mutate bookings, and the
//! pure projections the UI renders from. The egui frontend is the only
//! consumer; it owns one `BookingService` and one `AuthService` for the
//! lifetime of the process.

pub mod domain;
