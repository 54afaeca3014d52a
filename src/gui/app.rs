// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    backend::{Backend, HttpBackend},
    config::{options::ClientOptions, state::GuiState},
    lifecycle::{ClientState, Phase},
    view,
};

use super::{actions, components};

pub fn run(native: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    crate::log::init();

    let options = ClientOptions::from_env();
    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(options.endpoint.clone())?);
    logf!("Init: endpoint={} out_dir={}", options.endpoint, options.export.dir().display());

    eframe::run_native(
        "Universal Web Scraper",
        native,
        Box::new(move |_cc| Ok(Box::new(App::new(options, backend)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for the request lifecycle + accordion (UI thread only)
    pub client: ClientState,

    // text fields + status line
    pub gui: GuiState,

    pub options: ClientOptions,
    pub backend: Arc<dyn Backend>,
}

impl App {
    pub fn new(options: ClientOptions, backend: Arc<dyn Backend>) -> Self {
        let gui = GuiState {
            out_dir_text: options.export.dir().to_string_lossy().into_owned(),
            ..GuiState::default()
        };
        Self {
            client: ClientState::new(),
            gui,
            options,
            backend,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.gui.status = msg.into();
    }

    /// Status line after the worker's outcome has been applied.
    fn on_resolved(&mut self) {
        match self.client.phase() {
            Phase::Success(r) => {
                let msg = format!("Ready: {} section(s)", r.sections.len());
                self.status(msg);
            }
            Phase::Failed(_) => self.status("Error"),
            Phase::Idle | Phase::Loading => {}
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.client.poll() {
            self.on_resolved();
        }

        // Compose once per frame; components draw from it and act on `self`.
        let view = view::compose(&self.client, &self.gui.url_text);

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            components::search_bar::draw(ui, self, &view);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Status: {}", self.gui.status));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(&self.options.endpoint);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(result) = &view.result else {
                if view.input.busy {
                    ui.centered_and_justified(|ui| { ui.spinner(); });
                }
                return;
            };

            components::result_header::draw(ui, self, result, view.export_enabled);
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("sections_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    components::section_list::draw(ui, self, result);
                });
        });

        // Keyboard: Escape collapses the open section.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if let Some(id) = self.client.accordion().selected().map(str::to_owned) {
                actions::toggle_section(self, &id);
            }
        }
    }
}
