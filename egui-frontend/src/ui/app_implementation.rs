use eframe::egui;

use crate::ui::app_state::{CourtTrackerApp, Page};

impl eframe::App for CourtTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.is_none() {
            self.render_login_page(ctx);
            return;
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| self.render_header(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_messages(ui);
            match self.current_page {
                Page::Dashboard => self.render_dashboard(ui),
                Page::Schedule => self.render_schedule(ui),
                Page::Bookings => self.render_bookings(ui),
                Page::Settings => self.render_settings(ui),
            }
        });

        // Modals render above whatever page is active.
        self.render_modals(ctx);
    }
}

impl CourtTrackerApp {
    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("🎾 Court Tracker").strong().size(20.0));
            ui.separator();

            for page in Page::ALL {
                if ui
                    .selectable_label(self.current_page == page, page.title())
                    .clicked()
                {
                    self.navigate(page);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Logout").clicked() {
                    self.logout();
                }
                if let Some(session) = &self.session {
                    ui.label(egui::RichText::new(session.role.label()).strong());
                    ui.label(&session.name);
                }
            });
        });
    }

    /// Error and success banners with a dismiss control. Banners also
    /// clear on navigation.
    fn render_messages(&mut self, ui: &mut egui::Ui) {
        let mut dismissed = false;
        if let Some(error) = &self.error_message {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::from_rgb(220, 50, 50), format!("❌ {}", error));
                if ui.small_button("✖").clicked() {
                    dismissed = true;
                }
            });
        }
        if let Some(success) = &self.success_message {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::from_rgb(40, 160, 70), format!("✅ {}", success));
                if ui.small_button("✖").clicked() {
                    dismissed = true;
                }
            });
        }
        if dismissed {
            self.clear_messages();
        }
    }
}
