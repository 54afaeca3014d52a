// src/gui/actions.rs
//
// Button "executive" actions. Layout lives in components/*; the operational
// logic (lifecycle calls, file writes, status/log lines) lives here.

use eframe::egui;

use crate::export;
use crate::gui::app::App;
use crate::lifecycle::Submit;

pub fn scrape(app: &mut App, ctx: &egui::Context) {
    let url = app.gui.url_text.clone();
    let repaint = ctx.clone();

    match app.client.submit(&url, app.backend.clone(), move || repaint.request_repaint()) {
        Submit::Started => app.status(format!("Scraping {url}…")),
        Submit::Ignored => logd!("Scrape: Clicked, but the URL is empty"),
        Submit::Busy => logd!("Scrape: Clicked while a request is in flight"),
        Submit::Failed => app.status(s!("Scrape could not start")),
    }
}

pub fn export(app: &mut App) {
    if app.gui.out_dir_dirty {
        app.options.export.set_dir(&app.gui.out_dir_text);
        logf!("Export: Out dir set → {}", app.options.export.dir().display());
        app.gui.out_dir_dirty = false;
    }

    let Some(result) = app.client.result() else {
        app.status("Nothing to export");
        logd!("Export: Clicked, but there's no result");
        return;
    };

    match export::write_result(result, &app.options.export) {
        Ok(path) => {
            logf!("Export: OK sections={} → {}", result.sections.len(), path.display());
            app.status(format!("Exported {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}

pub fn toggle_section(app: &mut App, id: &str) {
    app.client.toggle(id);
}

pub fn clear(app: &mut App) {
    if app.client.reset() {
        logf!("UI: Cleared result");
        app.status("Idle");
    }
}
