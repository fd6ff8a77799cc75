//! Modal windows: the booking detail view, the shared add/reschedule form,
//! and the delete/move confirmation dialogs.

use eframe::egui;
use egui_extras::DatePickerButton;
use shared::{format_date_label, BookingStatus};

use court_tracker_backend::domain::bookings::{
    CreateBookingCommand, MoveCommand, MoveOutcome, RescheduleCommand,
};
use court_tracker_backend::domain::schedule::COURTS;

use crate::ui::app_state::CourtTrackerApp;
use crate::ui::components::status_badge;

enum DetailAction {
    CheckIn,
    Reschedule,
    Delete,
    Close,
}

impl CourtTrackerApp {
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_booking_detail_modal(ctx);
        self.render_booking_form_modal(ctx);
        self.render_delete_confirmation(ctx);
        self.render_move_confirmation(ctx);
    }

    fn render_booking_detail_modal(&mut self, ctx: &egui::Context) {
        let Some(id) = self.modals.selected_booking.clone() else {
            return;
        };
        let Some(booking) = self.bookings.get(&id) else {
            // The booking was deleted while the modal was open.
            self.modals.selected_booking = None;
            return;
        };
        let Some(session) = self.session.clone() else {
            return;
        };
        let is_admin = session.role.is_admin();

        let mut action: Option<DetailAction> = None;

        egui::Window::new("Booking Details")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                egui::Grid::new("booking_detail_grid")
                    .num_columns(2)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Booking ID");
                        ui.label(egui::RichText::new(&booking.id).strong());
                        ui.end_row();

                        ui.label("Customer");
                        ui.label(&booking.customer);
                        ui.end_row();

                        ui.label("Phone");
                        ui.label(&booking.phone);
                        ui.end_row();

                        ui.label("Court");
                        ui.label(format!("Court {}", booking.court));
                        ui.end_row();

                        ui.label("Date");
                        ui.label(format_date_label(&booking.date));
                        ui.end_row();

                        ui.label("Time");
                        ui.label(format!("{} - {}", booking.start_time, booking.end_time));
                        ui.end_row();

                        ui.label("Status");
                        status_badge(ui, booking.booking_status);
                        ui.end_row();

                        ui.label("Code");
                        ui.label(&booking.code);
                        ui.end_row();
                    });

                ui.separator();
                ui.label(egui::RichText::new("Activity Log").strong());
                for entry in &booking.activity_log {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&entry.time).weak());
                        ui.label(&entry.action);
                    });
                }

                ui.separator();
                ui.horizontal(|ui| {
                    // Hidden once checked in; that is the only idempotence
                    // guard for check-in.
                    if booking.booking_status != BookingStatus::CheckedIn
                        && ui.button("Check In").clicked()
                    {
                        action = Some(DetailAction::CheckIn);
                    }
                    if is_admin {
                        if ui.button("Reschedule").clicked() {
                            action = Some(DetailAction::Reschedule);
                        }
                        if ui.button("Delete").clicked() {
                            action = Some(DetailAction::Delete);
                        }
                    }
                    if ui.button("Close").clicked() {
                        action = Some(DetailAction::Close);
                    }
                });
            });

        match action {
            Some(DetailAction::CheckIn) => match self.bookings.check_in(&id, &session) {
                Ok(result) => {
                    self.success_message = Some(result.success_message);
                    self.error_message = None;
                }
                Err(e) => self.error_message = Some(e.to_string()),
            },
            Some(DetailAction::Reschedule) => {
                self.modals.selected_booking = None;
                self.open_reschedule_form(&id);
            }
            Some(DetailAction::Delete) => {
                self.modals.confirm_delete = Some(id);
            }
            Some(DetailAction::Close) => {
                self.modals.selected_booking = None;
            }
            None => {}
        }
    }

    fn render_booking_form_modal(&mut self, ctx: &egui::Context) {
        if !self.booking_form.visible {
            return;
        }
        let title = if self.booking_form.editing_id.is_some() {
            "Reschedule Booking"
        } else {
            "Add Booking"
        };

        let mut submitted = false;
        let mut cancelled = false;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let form = &mut self.booking_form;
                egui::Grid::new("booking_form_grid")
                    .num_columns(2)
                    .spacing([16.0, 8.0])
                    .show(ui, |ui| {
                        // Customer identity is immutable when rescheduling.
                        if form.editing_id.is_none() {
                            ui.label("Customer Name");
                            ui.add(
                                egui::TextEdit::singleline(&mut form.customer_name)
                                    .desired_width(200.0),
                            );
                            ui.end_row();

                            ui.label("Phone");
                            ui.add(
                                egui::TextEdit::singleline(&mut form.phone).desired_width(200.0),
                            );
                            ui.end_row();
                        }

                        ui.label("Court");
                        egui::ComboBox::from_id_source("booking_form_court")
                            .selected_text(format!("Court {}", form.court))
                            .show_ui(ui, |ui| {
                                for court in COURTS {
                                    ui.selectable_value(
                                        &mut form.court,
                                        court,
                                        format!("Court {}", court),
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label("Date");
                        ui.add(
                            DatePickerButton::new(&mut form.date).id_source("booking_form_date"),
                        );
                        ui.end_row();

                        ui.label("Start Time");
                        ui.add(
                            egui::TextEdit::singleline(&mut form.start_time)
                                .hint_text("HH:MM")
                                .desired_width(80.0),
                        );
                        ui.end_row();

                        ui.label("End Time");
                        ui.add(
                            egui::TextEdit::singleline(&mut form.end_time)
                                .hint_text("HH:MM")
                                .desired_width(80.0),
                        );
                        ui.end_row();
                    });

                if let Some(error) = &form.error {
                    ui.colored_label(egui::Color32::from_rgb(220, 50, 50), error);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        submitted = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if cancelled {
            self.booking_form.close();
        }
        if submitted {
            self.submit_booking_form();
        }
    }

    fn submit_booking_form(&mut self) {
        let Some(session) = self.session.clone() else {
            return;
        };
        let form = &self.booking_form;
        let date = form.date.format("%Y-%m-%d").to_string();

        let outcome = if let Some(id) = &form.editing_id {
            self.bookings
                .reschedule(
                    RescheduleCommand {
                        booking_id: id.clone(),
                        court: form.court,
                        date,
                        start_time: form.start_time.trim().to_string(),
                        end_time: form.end_time.trim().to_string(),
                    },
                    &session,
                )
                .map(|r| r.success_message)
        } else {
            self.bookings
                .create_booking(
                    CreateBookingCommand {
                        customer_name: form.customer_name.clone(),
                        phone: form.phone.clone(),
                        court: form.court,
                        date,
                        start_time: form.start_time.trim().to_string(),
                        end_time: form.end_time.trim().to_string(),
                    },
                    &session,
                )
                .map(|r| r.success_message)
        };

        match outcome {
            Ok(message) => {
                self.booking_form.close();
                self.success_message = Some(message);
                self.error_message = None;
            }
            Err(e) => self.booking_form.error = Some(e.to_string()),
        }
    }

    fn render_delete_confirmation(&mut self, ctx: &egui::Context) {
        let Some(id) = self.modals.confirm_delete.clone() else {
            return;
        };
        let customer = self
            .bookings
            .get(&id)
            .map(|b| b.customer)
            .unwrap_or_default();

        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Confirm Delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(format!(
                    "Are you sure you want to delete booking {} for {}?",
                    id, customer
                ));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if cancelled {
            self.modals.confirm_delete = None;
        }
        if confirmed {
            self.modals.confirm_delete = None;
            let Some(session) = self.session.clone() else {
                return;
            };
            match self.bookings.delete_booking(&id, &session) {
                Ok(result) => {
                    // Close the detail modal if it was showing this booking.
                    if self.modals.selected_booking.as_deref() == Some(id.as_str()) {
                        self.modals.selected_booking = None;
                    }
                    self.success_message = Some(result.success_message);
                    self.error_message = None;
                }
                Err(e) => self.error_message = Some(e.to_string()),
            }
        }
    }

    fn render_move_confirmation(&mut self, ctx: &egui::Context) {
        let Some(plan) = self.modals.pending_move.clone() else {
            return;
        };

        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Confirm Move")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(format!(
                    "Move booking for {} to Court {} at {}-{}?",
                    plan.customer, plan.new_court, plan.new_time, plan.new_end_time
                ));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Move").clicked() {
                        confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if cancelled {
            // Declining reverts the view; the store was never touched.
            self.modals.pending_move = None;
        }
        if confirmed {
            self.modals.pending_move = None;
            let Some(session) = self.session.clone() else {
                return;
            };
            let command = MoveCommand {
                booking_id: plan.booking_id.clone(),
                new_court: plan.new_court,
                new_time: plan.new_time.clone(),
            };
            match self.bookings.move_booking(command, &session) {
                Ok(MoveOutcome::Moved {
                    success_message, ..
                }) => {
                    self.success_message = Some(success_message);
                    self.error_message = None;
                }
                Ok(MoveOutcome::Unchanged) => {}
                Err(e) => self.error_message = Some(e.to_string()),
            }
        }
    }
}
