//! # UI Module
//!
//! The egui presentation binding over the domain services: one application
//! state struct, the `eframe::App` implementation that dispatches to the
//! per-view render methods, and the view/modal components themselves.

pub mod app_implementation;
pub mod app_state;
pub mod components;

pub use app_state::CourtTrackerApp;
