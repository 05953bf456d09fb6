use egui::RichText;
use egui_phosphor::regular;

use crate::ui::audio_player::AudioPlayer;
use crate::ui::{FileUpload, Footer, Header, Page, SelectedPdf, Toasts, render_static};

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PdfToAudioApp {
    /// Current page; the only piece of state worth keeping across runs
    page: Page,
    // Everything below is ephemeral view state (the theme flag in the
    // header is deliberately not persisted).
    #[serde(skip)]
    header: Header,
    #[serde(skip)]
    footer: Footer,
    #[serde(skip)]
    file_upload: FileUpload,
    #[serde(skip)]
    player: AudioPlayer,
    #[serde(skip)]
    toasts: Toasts,
    /// The accepted PDF, shown on the upload page until replaced
    #[serde(skip)]
    selected_pdf: Option<SelectedPdf>,
}

impl Default for PdfToAudioApp {
    fn default() -> Self {
        Self {
            page: Page::Home,
            header: Header::new(),
            footer: Footer::new(),
            file_upload: FileUpload::new(),
            player: AudioPlayer::new(),
            toasts: Toasts::new(),
            selected_pdf: None,
        }
    }
}

impl PdfToAudioApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        cc.egui_ctx.set_visuals(egui::Visuals::light());

        // Load previous app state (if any).
        // Note that you must enable the `persistence` feature for this to work.
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }

        Default::default()
    }

    fn show_upload_page(&mut self, ui: &mut egui::Ui) {
        ui.heading("Upload & Convert");
        ui.add_space(8.0);

        if let Some(pdf) = self.file_upload.show(ui, &mut self.toasts) {
            log::info!("PDF selected for conversion: {}", pdf.name);
            self.selected_pdf = Some(pdf);
        }

        let Some(pdf) = self.selected_pdf.clone() else {
            return;
        };

        ui.add_space(12.0);
        egui::Frame::new()
            .fill(ui.visuals().extreme_bg_color)
            .corner_radius(6.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(regular::FILE_PDF).size(24.0));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&pdf.name).strong())
                            .on_hover_text(pdf.path.display().to_string());
                        ui.label(
                            RichText::new(format!("{:.1} MB", pdf.size as f64 / (1024.0 * 1024.0)))
                                .weak(),
                        );
                    });
                });

                ui.add_space(8.0);
                ui.label(
                    RichText::new(
                        "Conversion runs on the PDF to Audio service. Once the narrated \
                         audio file is on disk, open it here to play or download it.",
                    )
                    .weak(),
                );

                ui.add_space(8.0);
                if ui
                    .button(format!("{} Open converted audio...", regular::MUSIC_NOTES))
                    .clicked()
                {
                    if let Some(path) = rfd::FileDialog::new()
                        .set_title("Open Converted Audio")
                        .add_filter("Audio Files", &["mp3", "wav", "ogg", "flac", "m4a"])
                        .pick_file()
                    {
                        let display_name = path
                            .file_name()
                            .and_then(|n| n.to_str())
                            .unwrap_or("converted audio")
                            .to_string();
                        self.player.bind(
                            path.to_string_lossy().to_string(),
                            display_name,
                            &mut self.toasts,
                        );
                    }
                }
            });
    }
}

impl eframe::App for PdfToAudioApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(page) = self.header.show(ctx, self.page) {
            self.page = page;
        }

        if let Some(page) = self.footer.show(ctx) {
            self.page = page;
        }

        // Player panel sits above the footer, shown only while a source is
        // bound
        self.player.show(ctx, &mut self.toasts);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.page {
                Page::Upload => self.show_upload_page(ui),
                page => {
                    if let Some(target) = render_static(page, ui) {
                        self.page = target;
                    }
                }
            });
        });

        self.toasts.show(ctx);
    }
}
