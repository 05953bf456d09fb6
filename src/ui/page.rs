use egui::{RichText, Ui};
use serde::{Deserialize, Serialize};

/// The app's navigation surface: a fixed set of named routes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Home,
    HowItWorks,
    Upload,
    Accessibility,
    Contact,
}

impl Page {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::HowItWorks,
        Self::Upload,
        Self::Accessibility,
        Self::Contact,
    ];

    /// Navigation label
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::HowItWorks => "How It Works",
            Self::Upload => "Upload & Convert",
            Self::Accessibility => "Accessibility",
            Self::Contact => "Contact",
        }
    }

    /// Route of the original navigation surface
    pub fn route(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::HowItWorks => "/how-it-works",
            Self::Upload => "/upload",
            Self::Accessibility => "/accessibility",
            Self::Contact => "/contact",
        }
    }
}

/// Render the static pages. Returns a navigation choice when a page-level
/// call to action is clicked.
pub fn render_static(page: Page, ui: &mut Ui) -> Option<Page> {
    let mut navigate = None;

    match page {
        Page::Home => {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("Listen to your documents").size(28.0));
                ui.add_space(8.0);
                ui.label(
                    RichText::new(
                        "Upload a PDF and get back high-quality narrated audio you can \
                         play anywhere or download for later.",
                    )
                    .size(15.0),
                );
                ui.add_space(16.0);
                if ui.button(RichText::new("Start Converting").size(16.0)).clicked() {
                    navigate = Some(Page::Upload);
                }
            });
        }
        Page::HowItWorks => {
            ui.heading("How It Works");
            ui.add_space(8.0);
            ui.label("1. Upload a PDF document (up to 10MB).");
            ui.label("2. The PDF to Audio service converts the text to speech.");
            ui.label("3. Open the converted audio here to play it or download it.");
        }
        Page::Accessibility => {
            ui.heading("Accessibility");
            ui.add_space(8.0);
            ui.label("Making documents accessible through text-to-speech conversion.");
            ui.add_space(4.0);
            ui.label("\u{2022} Screen reader support");
            ui.label("\u{2022} Keyboard navigation");
            ui.label("\u{2022} Full transport controls for every audio file");
        }
        Page::Contact => {
            ui.heading("Contact");
            ui.add_space(8.0);
            ui.label("Questions or feedback? We would love to hear from you.");
            ui.hyperlink_to("support@pdftoaudio.example", "mailto:support@pdftoaudio.example");
        }
        // The upload page needs app state; the app renders it directly
        Page::Upload => {}
    }

    navigate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_stable() {
        assert_eq!(Page::Home.route(), "/");
        assert_eq!(Page::HowItWorks.route(), "/how-it-works");
        assert_eq!(Page::Upload.route(), "/upload");
        assert_eq!(Page::Accessibility.route(), "/accessibility");
        assert_eq!(Page::Contact.route(), "/contact");
    }

    #[test]
    fn all_pages_have_distinct_titles() {
        let mut titles: Vec<&str> = Page::ALL.iter().map(|p| p.title()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), Page::ALL.len());
    }
}
