// src/gui/components/search_bar.rs
//
// Title, URL field + SCRAPE button, inline error.
// Submit on button click or Enter; both go through actions::scrape.

use eframe::egui::{self, Color32, RichText};

use crate::gui::{actions, app::App};
use crate::view::View;

pub fn draw(ui: &mut egui::Ui, app: &mut App, view: &View) {
    ui.add_space(6.0);
    ui.heading(RichText::new("Universal Web Scraper").strong());
    ui.label("Extract static and dynamic content, analyze structures, and capture interactions.");
    ui.add_space(4.0);

    let mut submit = false;

    ui.horizontal(|ui| {
        let field_w = (ui.available_width() - 180.0).max(200.0);
        let resp = ui.add_enabled(
            !view.input.busy,
            egui::TextEdit::singleline(&mut app.gui.url_text)
                .hint_text("https://example.com/amazing-page")
                .font(egui::TextStyle::Monospace)
                .desired_width(field_w),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        let label = RichText::new(view.input.submit_label).strong();
        if ui
            .add_enabled(view.input.submit_enabled, egui::Button::new(label))
            .clicked()
        {
            submit = true;
        }
        if view.input.busy {
            ui.spinner();
        }
    });

    // Enter also lands here with an empty field; the lifecycle refuses it.
    if submit && !view.input.busy {
        actions::scrape(app, ui.ctx());
    }

    if let Some(err) = &view.error {
        ui.add_space(4.0);
        ui.colored_label(Color32::from_rgb(230, 90, 90), format!("⚠ {err}"));
    }
    ui.add_space(6.0);
}
