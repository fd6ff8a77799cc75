//! # Domain Module
//!
//! Contains all business logic for the court booking tracker.
//!
//! This module encapsulates the core rules, entities, and services that
//! define how bookings are modeled, scheduled, and managed. It operates
//! independently of any UI framework; the egui frontend is a thin binding
//! over these services.
//!
//! ## Module Organization
//!
//! - **store**: The in-memory booking collection and its CRUD surface
//! - **auth_service**: Hard-coded credential check, sessions, and role gates
//! - **booking_service**: Action handlers (check-in, create, reschedule,
//!   delete, drag-move) with audit logging
//! - **dashboard**: Today-at-a-glance projection (alerts, upcoming, completed)
//! - **schedule**: Hourly-grid projection for the calendar view
//! - **booking_table**: Search-and-sort projection for the bookings list
//! - **commands**: Internal command and result types used by the services
//! - **seed**: The fixed mock dataset the store starts from
//!
//! ## Business Rules
//!
//! - Mutating a booking appends exactly one entry to its activity log
//! - Activity logs are append-only; entries are never edited or removed
//! - Only admin sessions may create, reschedule, delete, or move bookings
//! - A drag-move refuses a target slot another booking already occupies;
//!   reschedule deliberately does not perform that check
//! - Every rejected action leaves the store exactly as it was

pub mod auth_service;
pub mod booking_service;
pub mod booking_table;
pub mod commands;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod schedule;
pub mod seed;
pub mod store;

pub use auth_service::*;
pub use booking_service::*;
pub use booking_table::*;
pub use commands::*;
pub use dashboard::*;
pub use errors::*;
pub use models::*;
pub use schedule::*;
pub use store::*;
