use egui::{Button, Context, RichText};
use egui_phosphor::regular;

use super::page::Page;

/// Static informational footer
#[derive(Default)]
pub struct Footer {
    expanded: bool,
}

impl Footer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display the footer panel. Returns a navigation choice when one of
    /// its links is clicked.
    pub fn show(&mut self, ctx: &Context) -> Option<Page> {
        let mut navigate = None;

        egui::TopBottomPanel::bottom("footer_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(regular::SPEAKER_HIGH).size(16.0));
                ui.label(RichText::new("PDF to Audio").strong());
                ui.label(
                    RichText::new("Making documents accessible through text-to-speech.").weak(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let toggle = if self.expanded { "Less" } else { "More" };
                    if ui.add(Button::new(RichText::new(toggle).weak()).frame(false)).clicked() {
                        self.expanded = !self.expanded;
                    }
                    ui.label(RichText::new("\u{a9} 2024 PDF to Audio System").weak());
                });
            });

            if self.expanded {
                ui.separator();
                ui.columns(3, |columns| {
                    columns[0].label(RichText::new("FEATURES").weak().small());
                    if columns[0].link("PDF Conversion").clicked() {
                        navigate = Some(Page::Upload);
                    }
                    if columns[0].link("Accessibility Tools").clicked() {
                        navigate = Some(Page::Accessibility);
                    }
                    columns[0].label(RichText::new("Audio Controls").weak());

                    columns[1].label(RichText::new("SUPPORT").weak().small());
                    if columns[1].link("How It Works").clicked() {
                        navigate = Some(Page::HowItWorks);
                    }
                    if columns[1].link("Contact Us").clicked() {
                        navigate = Some(Page::Contact);
                    }
                    columns[1].label(RichText::new("Privacy Policy").weak());

                    columns[2].label(RichText::new("ACCESSIBILITY").weak().small());
                    columns[2].label(RichText::new("WCAG 2.1 AA Compliant").weak());
                    columns[2].label(RichText::new("Screen Reader Support").weak());
                    columns[2].label(RichText::new("Files Auto-Deleted").weak());
                });
            }
            ui.add_space(4.0);
        });

        navigate
    }
}
