// src/gui/components/result_header.rs
//
// Page metadata, counts, backend warnings, and the export/clear controls.

use eframe::egui::{self, Color32, RichText};

use crate::gui::{actions, app::App};
use crate::view::ResultView;

pub fn draw(ui: &mut egui::Ui, app: &mut App, r: &ResultView, export_enabled: bool) {
    ui.label(RichText::new("PAGE METADATA").small().monospace());
    ui.heading(RichText::new(&r.title).strong());
    ui.hyperlink_to(RichText::new(&r.url).monospace(), &r.url);

    if let Some(d) = &r.description {
        ui.label(d);
    }
    ui.horizontal_wrapped(|ui| {
        if let Some(l) = &r.language { ui.weak(format!("Language: {l}")); }
        if let Some(c) = &r.canonical { ui.weak(format!("Canonical: {c}")); }
        if let Some(at) = &r.scraped_at { ui.weak(format!("Scraped at: {at}")); }
    });

    if !r.backend_errors.is_empty() {
        ui.collapsing(format!("{} backend warning(s)", r.backend_errors.len()), |ui| {
            for e in &r.backend_errors {
                ui.colored_label(Color32::from_rgb(220, 160, 40), e);
            }
        });
    }

    ui.separator();

    ui.horizontal(|ui| {
        ui.label(RichText::new("Scraped Sections").strong());
        ui.label(RichText::new(&r.sections_label).monospace());
        ui.separator();
        let mut interactions = format!("Interactions: {}", r.interactions_label);
        if let Some(p) = &r.pages_label {
            interactions.push_str(", ");
            interactions.push_str(p);
        }
        ui.label(interactions);
    });

    // --- Output dir + actions ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.gui.out_dir_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(240.0))
            .changed()
        {
            app.gui.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", app.gui.out_dir_text);
        }

        if ui
            .add_enabled(export_enabled, egui::Button::new("Download Full JSON"))
            .clicked()
        {
            actions::export(app);
        }
        if ui.button("Clear").clicked() {
            actions::clear(app);
        }
    });
}
