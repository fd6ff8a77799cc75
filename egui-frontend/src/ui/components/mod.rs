//! # UI Components Module
//!
//! Per-view render methods on `CourtTrackerApp`, one file per page plus the
//! modal windows. Shared widgets live here.

pub mod bookings_table;
pub mod dashboard;
pub mod login;
pub mod modals;
pub mod schedule;
pub mod settings;

use eframe::egui;
use shared::BookingStatus;

/// Colored status badge used in lists, the schedule grid, and the detail
/// modal.
pub fn status_badge(ui: &mut egui::Ui, status: BookingStatus) {
    let color = match status {
        BookingStatus::CheckedIn => egui::Color32::from_rgb(40, 160, 70),
        BookingStatus::Completed => egui::Color32::from_rgb(120, 120, 120),
        BookingStatus::Pending | BookingStatus::Confirmed => egui::Color32::from_rgb(230, 150, 0),
    };
    ui.colored_label(color, status.badge_label());
}
