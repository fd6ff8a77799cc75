//! The bookings list page: search, (inert) date filter, and the table with
//! role-gated row actions.

use eframe::egui;
use egui_extras::{Column, DatePickerButton, TableBuilder};

use court_tracker_backend::domain::booking_table::booking_table;

use crate::ui::app_state::CourtTrackerApp;
use crate::ui::components::status_badge;

/// Row action chosen by the user this frame.
enum RowAction {
    View(String),
    Reschedule(String),
    Delete(String),
}

impl CourtTrackerApp {
    pub fn render_bookings(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.booking_search)
                    .hint_text("Search by customer or booking ID")
                    .desired_width(240.0),
            );
            ui.add(DatePickerButton::new(&mut self.booking_date_filter).id_source("bookings_date"));
            if self.is_admin() && ui.button("➕ Add Booking").clicked() {
                self.booking_form.open_add(chrono::Local::now().date_naive());
            }
        });
        ui.add_space(8.0);

        let view = booking_table(self.bookings.store(), &self.booking_search, self.is_admin());
        let mut action: Option<RowAction> = None;

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(60.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::remainder().at_least(140.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(200.0))
            .header(24.0, |mut header| {
                for title in ["Time", "ID", "Customer", "Court", "Status", "Actions"] {
                    header.col(|ui| {
                        ui.label(egui::RichText::new(title).strong());
                    });
                }
            })
            .body(|body| {
                body.rows(28.0, view.bookings.len(), |mut row| {
                    let booking = &view.bookings[row.index()];
                    row.col(|ui| {
                        ui.label(&booking.start_time);
                    });
                    row.col(|ui| {
                        if ui.link(&booking.id).clicked() {
                            action = Some(RowAction::View(booking.id.clone()));
                        }
                    });
                    row.col(|ui| {
                        ui.label(&booking.customer);
                    });
                    row.col(|ui| {
                        ui.label(format!("Court {}", booking.court));
                    });
                    row.col(|ui| {
                        status_badge(ui, booking.booking_status);
                    });
                    row.col(|ui| {
                        if ui.small_button("View").clicked() {
                            action = Some(RowAction::View(booking.id.clone()));
                        }
                        if view.admin_actions {
                            if ui.small_button("Reschedule").clicked() {
                                action = Some(RowAction::Reschedule(booking.id.clone()));
                            }
                            if ui.small_button("Delete").clicked() {
                                action = Some(RowAction::Delete(booking.id.clone()));
                            }
                        }
                    });
                });
            });

        match action {
            Some(RowAction::View(id)) => self.open_booking_modal(id),
            Some(RowAction::Reschedule(id)) => self.open_reschedule_form(&id),
            Some(RowAction::Delete(id)) => self.modals.confirm_delete = Some(id),
            None => {}
        }
    }

    /// Prefill and show the reschedule form for a booking.
    pub fn open_reschedule_form(&mut self, id: &str) {
        if let Some(booking) = self.bookings.get(id) {
            self.booking_form.open_reschedule(&booking);
        }
    }
}
