//! The settings page: a read-only projection of the current session.

use eframe::egui;

use court_tracker_backend::domain::auth_service::settings_view;

use crate::ui::app_state::CourtTrackerApp;

impl CourtTrackerApp {
    pub fn render_settings(&mut self, ui: &mut egui::Ui) {
        let Some(session) = &self.session else {
            return;
        };
        let view = settings_view(session);

        ui.label(egui::RichText::new("Profile").strong().size(16.0));
        ui.add_space(8.0);
        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                ui.label("Name");
                ui.label(&view.name);
                ui.end_row();

                ui.label("Email");
                ui.label(&view.email);
                ui.end_row();

                ui.label("Role");
                ui.label(&view.role_label);
                ui.end_row();
            });
    }
}
