use crate::classifier_service::interface::ClassifierService;
use crate::library::logger::interface::Logger;
use crate::predictor::core::Event;
use crate::predictor::main::Predictor;
use crate::predictor::selected_file::SelectedFile;
use crate::predictor::view::{ResultPanel, View};
use crate::preview_store::impl_egui::PreviewStoreEgui;
use eframe::egui;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;

const PREVIEW_MAX_HEIGHT: f32 = 300.0;

pub fn run(
    logger: Arc<dyn Logger + Send + Sync>,
    classifier: Arc<dyn ClassifierService + Send + Sync>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([520.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Dog Breed Predictor",
        options,
        Box::new(move |cc| Box::new(AppGui::new(cc.egui_ctx.clone(), logger, classifier))),
    )
    .map_err(|e| e.to_string().into())
}

pub struct AppGui {
    predictor: Predictor,
    previews: Arc<PreviewStoreEgui>,
    path_input: String,
    load_error: Option<String>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl AppGui {
    pub fn new(
        ctx: egui::Context,
        logger: Arc<dyn Logger + Send + Sync>,
        classifier: Arc<dyn ClassifierService + Send + Sync>,
    ) -> Self {
        let previews = Arc::new(PreviewStoreEgui::new(ctx.clone()));
        let predictor = Predictor::new(
            logger.clone(),
            classifier,
            previews.clone(),
            Arc::new(move || ctx.request_repaint()),
        );

        Self {
            predictor,
            previews,
            path_input: String::new(),
            load_error: None,
            logger: logger.with_namespace("gui"),
        }
    }

    fn load_path(&mut self) {
        let path = self.path_input.trim().to_string();

        // An empty picker is a valid selection of nothing.
        if path.is_empty() {
            self.load_error = None;
            self.predictor.send(Event::FileSelected(None));
            return;
        }

        match SelectedFile::from_path(Path::new(&path)) {
            Ok(file) => {
                self.load_error = None;
                self.predictor.send(Event::FileSelected(Some(file)));
            }
            Err(e) => {
                let _ = self.logger.error(&format!("Could not read {}: {}", path, e));
                self.load_error = Some(format!("Could not read {}: {}", path, e));
            }
        }
    }

    fn take_dropped_file(&mut self, ctx: &egui::Context) {
        let Some(dropped) = ctx.input(|i| i.raw.dropped_files.first().cloned()) else {
            return;
        };

        match (dropped.bytes, dropped.path) {
            (Some(bytes), _) => {
                self.load_error = None;
                let file = SelectedFile::from_bytes(&dropped.name, bytes);
                self.predictor.send(Event::FileSelected(Some(file)));
            }
            (None, Some(path)) => {
                self.path_input = path.display().to_string();
                self.load_path();
            }
            (None, None) => {}
        }
    }

    fn form(&mut self, ui: &mut egui::Ui, view: &View) {
        ui.label("Upload an Image");
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.path_input)
                    .hint_text("Path to an image, or drop a file here"),
            );
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Load").clicked() || entered {
                self.load_path();
            }
        });

        if let Some(load_error) = &self.load_error {
            ui.colored_label(egui::Color32::from_rgb(176, 42, 55), load_error);
        }

        if let Some(file) = &view.file {
            ui.label(&file.label);
            if let Some(hint) = file.hint {
                ui.colored_label(egui::Color32::from_rgb(133, 100, 4), hint);
            }
        }

        if let Some(handle) = view.preview {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Preview:").strong());
                match self.previews.texture(handle) {
                    Some(texture) => {
                        ui.add(egui::Image::new(&texture).max_height(PREVIEW_MAX_HEIGHT));
                    }
                    None => {
                        ui.label("Preview unavailable");
                    }
                }
            });
        }

        ui.add_space(8.0);
        let button = egui::Button::new(view.submit.label)
            .min_size(egui::vec2(ui.available_width(), 32.0));
        if ui.add_enabled(view.submit.enabled, button).clicked() {
            self.predictor.send(Event::SubmitRequested);
        }
    }
}

impl eframe::App for AppGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.predictor.pump();
        self.take_dropped_file(ctx);

        let view = self.predictor.view();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Dog Breed Predictor");
            });
            ui.add_space(12.0);

            ui.add_enabled_ui(view.notice.is_none(), |ui| self.form(ui, &view));

            match &view.result {
                Some(ResultPanel::Error { message }) => {
                    ui.add_space(12.0);
                    alert(ui, Alert::Danger, |ui| {
                        ui.label(message);
                    });
                }
                Some(ResultPanel::Success { breed, confidence }) => {
                    ui.add_space(12.0);
                    alert(ui, Alert::Success, |ui| {
                        ui.heading("Prediction Result");
                        ui.label(format!("Breed: {}", breed));
                        ui.label(format!("Confidence: {}", confidence));
                    });
                }
                None => {}
            }
        });

        if let Some(notice) = view.notice {
            egui::Window::new("Notice")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(notice);
                    if ui.button("OK").clicked() {
                        self.predictor.send(Event::NoticeDismissed);
                    }
                });
        }
    }
}

enum Alert {
    Danger,
    Success,
}

fn alert(ui: &mut egui::Ui, kind: Alert, add_contents: impl FnOnce(&mut egui::Ui)) {
    let (fill, text) = match kind {
        Alert::Danger => (
            egui::Color32::from_rgb(248, 215, 218),
            egui::Color32::from_rgb(114, 28, 36),
        ),
        Alert::Success => (
            egui::Color32::from_rgb(212, 237, 218),
            egui::Color32::from_rgb(21, 87, 36),
        ),
    };

    egui::Frame::none()
        .fill(fill)
        .rounding(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.visuals_mut().override_text_color = Some(text);
            add_contents(ui);
        });
}
