//! The schedule page: hourly grid with date/court controls, booking-code
//! lookup, and admin drag-and-drop.

use eframe::egui;
use egui_extras::DatePickerButton;
use shared::{Booking, CourtFilter, ScheduleCell};

use court_tracker_backend::domain::bookings::{MoveCommand, MovePlan};
use court_tracker_backend::domain::schedule::{schedule_grid, COURTS};

use crate::ui::app_state::CourtTrackerApp;
use crate::ui::components::status_badge;

/// Payload attached to a booking chip while it is being dragged.
#[derive(Debug, Clone)]
struct DraggedBooking {
    id: String,
}

/// What the user did to one grid cell this frame.
#[derive(Default)]
struct CellResponse {
    clicked: Option<String>,
    dropped: Option<String>,
}

impl CourtTrackerApp {
    pub fn render_schedule(&mut self, ui: &mut egui::Ui) {
        self.render_schedule_controls(ui);
        ui.add_space(8.0);

        let date = self.schedule_date.format("%Y-%m-%d").to_string();
        let grid = schedule_grid(
            self.bookings.store(),
            &date,
            self.court_filter,
            self.is_admin(),
        );

        let mut open: Option<String> = None;
        let mut dropped: Option<(String, u32, String)> = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("schedule_grid")
                .striped(true)
                .min_col_width(150.0)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Time").strong());
                    for court in &grid.courts {
                        ui.label(egui::RichText::new(format!("Court {}", court)).strong());
                    }
                    ui.end_row();

                    for row in &grid.rows {
                        ui.label(&row.time);
                        for cell in &row.cells {
                            let response = render_cell(ui, cell, grid.admin_controls);
                            if let Some(id) = response.clicked {
                                open = Some(id);
                            }
                            if let Some(id) = response.dropped {
                                dropped = Some((id, cell.court, cell.time.clone()));
                            }
                        }
                        ui.end_row();
                    }
                });
        });

        if let Some(id) = open {
            self.open_booking_modal(id);
        }
        if let Some((id, court, time)) = dropped {
            self.begin_move(id, court, time);
        }
    }

    fn render_schedule_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                if let Some(prev) = self.schedule_date.pred_opt() {
                    self.schedule_date = prev;
                }
            }
            if ui.button("Today").clicked() {
                self.schedule_date = chrono::Local::now().date_naive();
            }
            if ui.button("▶").clicked() {
                if let Some(next) = self.schedule_date.succ_opt() {
                    self.schedule_date = next;
                }
            }
            ui.add(DatePickerButton::new(&mut self.schedule_date).id_source("schedule_date"));

            egui::ComboBox::from_id_source("court_filter")
                .selected_text(self.court_filter.label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(
                        &mut self.court_filter,
                        CourtFilter::All,
                        CourtFilter::All.label(),
                    );
                    for court in COURTS {
                        ui.selectable_value(
                            &mut self.court_filter,
                            CourtFilter::Only(court),
                            CourtFilter::Only(court).label(),
                        );
                    }
                });

            if self.is_admin() && ui.button("➕ Add Booking").clicked() {
                self.booking_form.open_add(chrono::Local::now().date_naive());
            }
        });

        ui.horizontal(|ui| {
            let code_response = ui.add(
                egui::TextEdit::singleline(&mut self.code_lookup)
                    .hint_text("Booking code")
                    .desired_width(120.0),
            );
            let submitted =
                code_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Look Up").clicked() || submitted {
                self.lookup_booking_code();
            }
        });
    }

    /// Exact-match lookup by verification code; no authentication check.
    fn lookup_booking_code(&mut self) {
        let code = self.code_lookup.trim().to_string();
        if code.is_empty() {
            self.error_message = Some("Please enter a booking code".to_string());
            return;
        }
        match self.bookings.find_by_code(&code) {
            Ok(booking) => {
                self.code_lookup.clear();
                self.clear_messages();
                self.open_booking_modal(booking.id);
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    /// Validate a drop and queue the confirmation dialog. A same-position
    /// drop is silently ignored.
    fn begin_move(&mut self, id: String, new_court: u32, new_time: String) {
        let Some(session) = self.session.clone() else {
            return;
        };
        let command = MoveCommand {
            booking_id: id,
            new_court,
            new_time,
        };
        match self.bookings.plan_move(&command, &session) {
            Ok(MovePlan::Unchanged) => {}
            Ok(MovePlan::Move(plan)) => self.modals.pending_move = Some(plan),
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }
}

fn render_cell(ui: &mut egui::Ui, cell: &ScheduleCell, droppable: bool) -> CellResponse {
    let mut response = CellResponse::default();
    let frame = egui::Frame::none().inner_margin(egui::Margin::same(4.0));

    if droppable {
        let (_, payload) = ui.dnd_drop_zone::<DraggedBooking, ()>(frame, |ui| {
            ui.set_min_size(egui::vec2(140.0, 48.0));
            if let Some(booking) = &cell.booking {
                if booking_chip(ui, booking, cell.draggable) {
                    response.clicked = Some(booking.id.clone());
                }
            }
        });
        if let Some(payload) = payload {
            response.dropped = Some(payload.id.clone());
        }
    } else {
        frame.show(ui, |ui| {
            ui.set_min_size(egui::vec2(140.0, 48.0));
            if let Some(booking) = &cell.booking {
                if booking_chip(ui, booking, false) {
                    response.clicked = Some(booking.id.clone());
                }
            }
        });
    }
    response
}

/// A booking inside a grid cell; returns true when clicked open.
fn booking_chip(ui: &mut egui::Ui, booking: &Booking, draggable: bool) -> bool {
    if draggable {
        let drag_id = egui::Id::new(("schedule_drag", booking.id.as_str()));
        let payload = DraggedBooking {
            id: booking.id.clone(),
        };
        ui.dnd_drag_source(drag_id, payload, |ui| chip_contents(ui, booking))
            .inner
    } else {
        chip_contents(ui, booking)
    }
}

fn chip_contents(ui: &mut egui::Ui, booking: &Booking) -> bool {
    let mut clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&booking.customer).strong());
            ui.label(format!("{} - {}", booking.start_time, booking.end_time));
            ui.horizontal(|ui| {
                status_badge(ui, booking.booking_status);
                if ui.small_button("View").clicked() {
                    clicked = true;
                }
            });
        });
    });
    clicked
}
