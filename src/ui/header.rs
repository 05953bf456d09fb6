use egui::{Button, Color32, Context, RichText};
use egui_phosphor::regular;

use super::page::Page;

/// Window widths below this collapse the navigation into a menu button
const NARROW_WIDTH: f32 = 760.0;

/// Top navigation panel: brand, page links, theme toggle
#[derive(Default)]
pub struct Header {
    /// Collapsed-menu visibility (narrow windows only)
    menu_open: bool,
    /// Cosmetic theme flag; applied to the visuals, never persisted
    dark_mode: bool,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a page from the header, closing the collapsed menu
    fn navigate(&mut self, target: Page, navigate: &mut Option<Page>) {
        self.menu_open = false;
        *navigate = Some(target);
    }

    /// Display the header panel. Returns a navigation choice, if any.
    pub fn show(&mut self, ctx: &Context, current: Page) -> Option<Page> {
        let mut navigate = None;
        let is_narrow = ctx.screen_rect().width() < NARROW_WIDTH;
        if !is_narrow {
            self.menu_open = false;
        }

        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Brand
                ui.label(
                    RichText::new(regular::SPEAKER_HIGH)
                        .size(22.0)
                        .color(Color32::from_rgb(100, 150, 255)),
                );
                if ui
                    .add(Button::new(RichText::new("PDF to Audio").size(17.0).strong()).frame(false))
                    .clicked()
                {
                    self.navigate(Page::Home, &mut navigate);
                }

                if !is_narrow {
                    ui.add_space(12.0);
                    for page in Page::ALL {
                        let label = if page == current {
                            RichText::new(page.title()).color(Color32::from_rgb(100, 150, 255))
                        } else {
                            RichText::new(page.title())
                        };
                        if ui
                            .add(Button::new(label).frame(false))
                            .on_hover_text(page.route())
                            .clicked()
                        {
                            self.navigate(page, &mut navigate);
                        }
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if is_narrow {
                        let menu_button = Button::new(RichText::new(regular::LIST).size(18.0));
                        if ui.add(menu_button).on_hover_text("Toggle menu").clicked() {
                            self.menu_open = !self.menu_open;
                        }
                    } else if ui.button("Start Converting").clicked() {
                        self.navigate(Page::Upload, &mut navigate);
                    }

                    let theme_icon = if self.dark_mode {
                        regular::SUN
                    } else {
                        regular::MOON
                    };
                    if ui
                        .add(Button::new(RichText::new(theme_icon).size(18.0)).frame(false))
                        .on_hover_text("Toggle theme")
                        .clicked()
                    {
                        self.toggle_theme(ctx);
                    }
                });
            });

            // Collapsed menu below the bar
            if is_narrow && self.menu_open {
                ui.separator();
                ui.vertical(|ui| {
                    for page in Page::ALL {
                        let label = if page == current {
                            RichText::new(page.title())
                                .size(15.0)
                                .color(Color32::from_rgb(100, 150, 255))
                        } else {
                            RichText::new(page.title()).size(15.0)
                        };
                        if ui
                            .add(Button::new(label).frame(false))
                            .on_hover_text(page.route())
                            .clicked()
                        {
                            self.navigate(page, &mut navigate);
                        }
                    }
                    if ui.button("Start Converting").clicked() {
                        self.navigate(Page::Upload, &mut navigate);
                    }
                });
                ui.add_space(4.0);
            }
        });

        navigate
    }

    /// Flip the cosmetic theme flag and apply it to the visuals
    fn toggle_theme(&mut self, ctx: &Context) {
        self.dark_mode = !self.dark_mode;
        ctx.set_visuals(if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }

    #[cfg(test)]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[cfg(test)]
    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    #[cfg(test)]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }
}
