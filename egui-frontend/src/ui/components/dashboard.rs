//! The dashboard page: today's alerts, upcoming and completed bookings.

use chrono::Timelike;
use eframe::egui;
use shared::{today_iso, Booking};

use court_tracker_backend::domain::dashboard::dashboard_view;

use crate::ui::app_state::CourtTrackerApp;
use crate::ui::components::status_badge;

impl CourtTrackerApp {
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let now = chrono::Local::now();
        let now_minutes = now.hour() * 60 + now.minute();
        let view = dashboard_view(self.bookings.store(), &today_iso(), now_minutes);

        ui.heading(&view.date_label);
        ui.add_space(8.0);

        if !view.starting_soon.is_empty() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(format!(
                    "🔔 Starting Soon: {} booking(s) starting within 30 minutes.",
                    view.starting_soon.len()
                ));
            });
            ui.add_space(8.0);
        }

        let mut open: Option<String> = None;

        ui.label(egui::RichText::new("Upcoming Bookings").strong().size(16.0));
        if view.upcoming.is_empty() {
            ui.label("No upcoming bookings today.");
        } else {
            for booking in &view.upcoming {
                if booking_item(ui, booking) {
                    open = Some(booking.id.clone());
                }
            }
        }

        ui.add_space(12.0);
        ui.label(egui::RichText::new("Completed Bookings").strong().size(16.0));
        if view.completed.is_empty() {
            ui.label("No completed bookings today.");
        } else {
            for booking in &view.completed {
                if booking_item(ui, booking) {
                    open = Some(booking.id.clone());
                }
            }
        }

        if let Some(id) = open {
            self.open_booking_modal(id);
        }
    }
}

/// One dashboard list row; returns true when its View button was clicked.
fn booking_item(ui: &mut egui::Ui, booking: &Booking) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{} - {}", booking.start_time, booking.end_time)).strong(),
        );
        ui.label(format!("Court {} • {}", booking.court, booking.customer));
        status_badge(ui, booking.booking_status);
        if ui.small_button("View").clicked() {
            clicked = true;
        }
    });
    clicked
}
