use egui::{Align2, Color32, Context, RichText};
use std::time::Instant;

/// Toast notification message
#[derive(Clone)]
pub struct ToastMessage {
    pub message: String,
    pub expires_at: Instant,
    pub color: Color32,
}

impl ToastMessage {
    /// Create a new toast message
    pub fn new(message: String, color: Color32, duration_secs: u64) -> Self {
        Self {
            message,
            expires_at: Instant::now() + std::time::Duration::from_secs(duration_secs),
            color,
        }
    }

    /// Check if the toast message has expired
    pub fn has_expired(&self) -> bool {
        self.expires_at <= Instant::now()
    }
}

/// Transient notification surface shared by all components
#[derive(Default)]
pub struct Toasts {
    messages: Vec<ToastMessage>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast notification
    pub fn add(&mut self, message: String, color: Color32) {
        let toast = ToastMessage::new(message, color, 3); // Display for 3 seconds
        self.messages.push(toast);
    }

    /// Add a success/confirmation toast
    pub fn success(&mut self, message: impl Into<String>) {
        self.add(message.into(), Color32::from_rgb(100, 255, 150));
    }

    /// Add an error toast
    pub fn error(&mut self, message: impl Into<String>) {
        self.add(message.into(), Color32::from_rgb(255, 100, 100));
    }

    #[cfg(test)]
    pub fn messages(&self) -> &[ToastMessage] {
        &self.messages
    }

    /// Render toast notifications as an overlay at the top of the screen
    pub fn show(&mut self, ctx: &Context) {
        // Clean up expired toast messages first
        self.messages.retain(|toast| !toast.has_expired());

        if self.messages.is_empty() {
            return;
        }

        // Keep repainting while toasts are visible so they expire on time
        ctx.request_repaint();

        let available_rect = ctx.available_rect();
        let spacing = available_rect.height() * 0.08;
        let toast_offset = available_rect.height() * 0.06;

        for (i, toast) in self.messages.iter().enumerate() {
            let window_id = egui::Id::new("toast_message").with(i);
            let pos = [0.0, spacing + (i as f32 * toast_offset)];

            egui::containers::Window::new("Toast")
                .id(window_id)
                .title_bar(false)
                .resizable(false)
                .movable(false)
                .anchor(Align2::CENTER_TOP, pos)
                .default_size([
                    available_rect.width() * 0.4,
                    available_rect.height() * 0.06,
                ])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(&toast.message).color(toast.color).size(14.0));
                    });
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_duration() {
        let toast = ToastMessage::new("done".to_string(), Color32::WHITE, 0);
        assert!(toast.has_expired());

        let toast = ToastMessage::new("done".to_string(), Color32::WHITE, 60);
        assert!(!toast.has_expired());
    }

    #[test]
    fn toasts_collect_messages() {
        let mut toasts = Toasts::new();
        toasts.success("Download started");
        toasts.error("Upload Error");
        assert_eq!(toasts.messages().len(), 2);
        assert_eq!(toasts.messages()[0].message, "Download started");
    }
}
