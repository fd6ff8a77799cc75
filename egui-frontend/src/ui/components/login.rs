//! The login page: two fixed credential pairs, one per role.

use eframe::egui;

use court_tracker_backend::domain::auth::LoginCommand;

use crate::ui::app_state::{CourtTrackerApp, Page};

impl CourtTrackerApp {
    pub fn render_login_page(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(120.0);
                ui.heading("🎾 Court Tracker");
                ui.label("Sign in to manage court bookings");
                ui.add_space(20.0);

                ui.add(
                    egui::TextEdit::singleline(&mut self.login_email)
                        .hint_text("Email")
                        .desired_width(260.0),
                );
                ui.add_space(6.0);
                let password_response = ui.add(
                    egui::TextEdit::singleline(&mut self.login_password)
                        .hint_text("Password")
                        .password(true)
                        .desired_width(260.0),
                );

                if let Some(error) = &self.error_message {
                    ui.add_space(6.0);
                    ui.colored_label(egui::Color32::from_rgb(220, 50, 50), error);
                }

                ui.add_space(10.0);
                let submitted = password_response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Sign In").clicked() || submitted {
                    self.attempt_login();
                }
            });
        });
    }

    fn attempt_login(&mut self) {
        let command = LoginCommand {
            email: self.login_email.trim().to_string(),
            password: self.login_password.clone(),
        };
        match self.auth.login(command) {
            Ok(session) => {
                self.session = Some(session);
                self.current_page = Page::Dashboard;
                self.login_password.clear();
                self.clear_messages();
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }
}
