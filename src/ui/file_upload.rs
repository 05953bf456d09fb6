use std::path::{Path, PathBuf};

use egui::{Align2, Button, Color32, CornerRadius, RichText, Stroke, Ui};
use egui_phosphor::regular;

use crate::ui::toast::Toasts;

/// Size ceiling for uploaded PDFs
pub const MAX_PDF_BYTES: u64 = 10 * 1024 * 1024; // 10 MiB

/// A validated PDF, handed to the caller and not retained here
#[derive(Debug, Clone)]
pub struct SelectedPdf {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

/// Why a submitted file was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    /// File exceeds the size ceiling
    TooLarge(u64),
    /// Not a PDF
    InvalidType,
    /// Anything else (unreadable, no metadata, ...)
    Unreadable(String),
}

impl UploadRejection {
    /// User-facing message for this rejection
    pub fn message(&self) -> &'static str {
        match self {
            Self::TooLarge(_) => "File is too large. Maximum size is 10MB.",
            Self::InvalidType => "Invalid file type. Only PDF files are allowed.",
            Self::Unreadable(_) => "File upload failed",
        }
    }
}

/// Validate a candidate file against the upload policy: PDF extension,
/// at most [`MAX_PDF_BYTES`] on disk.
pub fn validate_pdf(path: &Path) -> Result<SelectedPdf, UploadRejection> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        return Err(UploadRejection::InvalidType);
    }

    let metadata =
        std::fs::metadata(path).map_err(|e| UploadRejection::Unreadable(e.to_string()))?;
    if metadata.len() > MAX_PDF_BYTES {
        return Err(UploadRejection::TooLarge(metadata.len()));
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document.pdf")
        .to_string();

    Ok(SelectedPdf {
        path: path.to_path_buf(),
        name,
        size: metadata.len(),
    })
}

/// PDF drop target + file picker component
#[derive(Default)]
pub struct FileUpload {
    /// True only while a drag gesture is hovering the window
    drag_active: bool,
}

impl FileUpload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the drop target and handle this frame's drops/picks.
    ///
    /// Returns the accepted PDF, if any. Exactly one toast is shown per
    /// rejected interaction even when several files were dropped; only the
    /// first file of a drop is considered.
    pub fn show(&mut self, ui: &mut Ui, toasts: &mut Toasts) -> Option<SelectedPdf> {
        self.drag_active = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

        let dropped: Option<PathBuf> = ui
            .ctx()
            .input(|i| i.raw.dropped_files.first().and_then(|f| f.path.clone()));

        let mut picked: Option<PathBuf> = None;

        let (stroke_color, fill) = if self.drag_active {
            (
                Color32::from_rgb(100, 150, 255),
                ui.visuals().extreme_bg_color,
            )
        } else {
            (ui.visuals().weak_text_color(), ui.visuals().window_fill)
        };

        egui::Frame::new()
            .stroke(Stroke::new(1.5, stroke_color))
            .corner_radius(CornerRadius::same(8))
            .fill(fill)
            .inner_margin(32.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    let (icon, icon_color) = if self.drag_active {
                        (regular::UPLOAD_SIMPLE, Color32::from_rgb(100, 150, 255))
                    } else {
                        (regular::FILE_TEXT, ui.visuals().weak_text_color())
                    };
                    ui.label(RichText::new(icon).size(40.0).color(icon_color));

                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(if self.drag_active {
                            "Drop your PDF here"
                        } else {
                            "Drag & drop your PDF file"
                        })
                        .size(16.0)
                        .color(ui.visuals().strong_text_color()),
                    );
                    ui.label(RichText::new("or click to browse your files").weak());

                    ui.add_space(8.0);
                    if ui.add(Button::new("Select PDF File")).clicked() {
                        picked = rfd::FileDialog::new()
                            .set_title("Select PDF File")
                            .add_filter("PDF", &["pdf"])
                            .pick_file();
                    }

                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!(
                            "{} Max 10MB  \u{2022}  PDF files only",
                            regular::WARNING_CIRCLE
                        ))
                        .weak()
                        .size(12.0),
                    );
                });
            });

        if self.drag_active {
            // Overlay hint while the drag hovers the target
            egui::Area::new(egui::Id::new("pdf_drop_hint"))
                .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ui.ctx(), |ui| {
                    ui.label(
                        RichText::new("Release to upload")
                            .size(14.0)
                            .color(Color32::from_rgb(100, 150, 255)),
                    );
                });
        }

        let candidate = picked.or(dropped)?;
        // The drop is complete once a file arrives; never leave the
        // highlight stuck on.
        self.drag_active = false;

        match validate_pdf(&candidate) {
            Ok(pdf) => {
                log::info!("Accepted PDF: {} ({} bytes)", pdf.name, pdf.size);
                Some(pdf)
            }
            Err(rejection) => {
                log::warn!("Rejected upload {}: {rejection:?}", candidate.display());
                toasts.error(rejection.message());
                None
            }
        }
    }

    #[cfg(test)]
    pub fn drag_active(&self) -> bool {
        self.drag_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, len: usize) -> PathBuf {
        let nonce = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("pdf_to_audio_test_{nonce}_{name}"));
        std::fs::write(&path, vec![0u8; len]).unwrap();
        path
    }

    #[test]
    fn valid_pdf_is_accepted() {
        let path = temp_file("ok.pdf", 1024);
        let pdf = validate_pdf(&path).unwrap();
        assert_eq!(pdf.size, 1024);
        assert!(pdf.name.ends_with(".pdf"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn pdf_at_exact_ceiling_is_accepted() {
        let path = temp_file("edge.pdf", MAX_PDF_BYTES as usize);
        assert!(validate_pdf(&path).is_ok());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn oversize_pdf_is_rejected_as_too_large() {
        let path = temp_file("big.pdf", (MAX_PDF_BYTES + 1) as usize);
        let rejection = validate_pdf(&path).unwrap_err();
        assert!(matches!(rejection, UploadRejection::TooLarge(_)));
        assert_eq!(rejection.message(), "File is too large. Maximum size is 10MB.");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn non_pdf_is_rejected_as_invalid_type() {
        let path = temp_file("notes.txt", 10);
        let rejection = validate_pdf(&path).unwrap_err();
        assert_eq!(rejection, UploadRejection::InvalidType);
        assert_eq!(
            rejection.message(),
            "Invalid file type. Only PDF files are allowed."
        );
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let path = temp_file("UPPER.PDF", 10);
        assert!(validate_pdf(&path).is_ok());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_rejected_as_generic_failure() {
        let rejection = validate_pdf(Path::new("/nonexistent/ghost.pdf")).unwrap_err();
        assert!(matches!(rejection, UploadRejection::Unreadable(_)));
        assert_eq!(rejection.message(), "File upload failed");
    }

    #[test]
    fn drag_flag_starts_false() {
        let upload = FileUpload::new();
        assert!(!upload.drag_active());
    }
}
