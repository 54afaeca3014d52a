// src/gui/components/section_list.rs
//
// The accordion. One row per section in result order; clicking a row toggles
// it through the lifecycle, which keeps at most one open. The open row shows
// the text preview, the counts table and the section's JSON.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::{actions, app::App};
use crate::view::{Preview, ResultView, SectionDetail};

pub fn draw(ui: &mut egui::Ui, app: &mut App, r: &ResultView) {
    let mut clicked: Option<&str> = None;

    for row in &r.sections {
        let open = row.is_expanded();
        let arrow = if open { "▼" } else { "▶" };
        let text = RichText::new(format!("{arrow}  [{}]  {}", row.kind.to_uppercase(), row.label));

        ui.push_id(("section_row", &row.id), |ui| {
            if ui.selectable_label(open, text).clicked() {
                clicked = Some(row.id.as_str());
            }
            if let Some(detail) = &row.detail {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    draw_detail(ui, &row.id, detail);
                });
            }
        });
        ui.add_space(2.0);
    }

    if let Some(id) = clicked {
        actions::toggle_section(app, id);
    }
}

fn draw_detail(ui: &mut egui::Ui, id: &str, d: &SectionDetail) {
    ui.columns(2, |cols| {
        let left = &mut cols[0];

        left.label(RichText::new("TEXT CONTENT PREVIEW").small().strong());
        match &d.preview {
            Preview::Empty => {
                left.label(RichText::new(d.preview.to_string()).italics().weak());
            }
            Preview::Text(_) => {
                left.label(RichText::new(d.preview.to_string()).monospace());
            }
        }
        left.add_space(8.0);

        left.label(RichText::new("DATA DETECTED").small().strong());
        stats_table(left, id, d);

        let right = &mut cols[1];
        right.label(RichText::new("SECTION JSON OBJECT").small().strong());
        egui::ScrollArea::vertical()
            .id_salt(("section_json", id))
            .max_height(400.0)
            .show(right, |ui| {
                let mut json: &str = &d.raw_json;
                ui.add(
                    egui::TextEdit::multiline(&mut json)
                        .code_editor()
                        .desired_width(f32::INFINITY),
                );
            });
    });
}

fn stats_table(ui: &mut egui::Ui, id: &str, d: &SectionDetail) {
    let accent = Color32::from_rgb(120, 140, 250);
    let amber = Color32::from_rgb(230, 160, 40);

    TableBuilder::new(ui)
        .id_salt(("section_stats", id))
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(40.0))
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("Field"); });
            header.col(|ui| { ui.strong("Count"); });
        })
        .body(|mut body| {
            for stat in &d.stats {
                body.row(18.0, |mut row| {
                    row.col(|ui| { ui.label(stat.label); });
                    row.col(|ui| {
                        if stat.count > 0 {
                            ui.colored_label(accent, stat.count.to_string());
                        } else {
                            ui.weak("0");
                        }
                    });
                });
            }
            body.row(18.0, |mut row| {
                row.col(|ui| { ui.label("HTML Truncated"); });
                row.col(|ui| {
                    if d.truncated == "Yes" {
                        ui.colored_label(amber, d.truncated);
                    } else {
                        ui.weak(d.truncated);
                    }
                });
            });
        });
}
