//! Main application struct and eframe integration.

use crate::session::SessionHandle;
use crate::ui::components::{InputBar, MessageList, Sidebar};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};
use std::time::Duration;

/// Main FloatChat application.
pub struct FloatChatApp {
    state: AppState,
    theme: Theme,
}

impl FloatChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>, handle: SessionHandle) -> Self {
        let theme = Theme::ocean();
        theme.apply(&cc.egui_ctx);

        Self {
            state: AppState::connect(handle),
            theme,
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("🌊 FloatChat")
                            .size(20.0)
                            .strong()
                            .color(self.theme.primary),
                    );

                    ui.label(
                        RichText::new("ARGO Ocean Data Explorer")
                            .size(14.0)
                            .color(self.theme.text_muted),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("🗑").on_hover_text("Clear Chat").clicked() {
                            self.state.clear_messages();
                        }
                    });
                });
            });
    }

    fn show_sidebar(&mut self, ctx: &egui::Context) {
        SidePanel::left("sidebar")
            .resizable(true)
            .default_width(280.0)
            .min_width(220.0)
            .max_width(400.0)
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                Sidebar::new(&mut self.state, &self.theme).show(ui);
            });
    }

    fn show_input_area(&mut self, ctx: &egui::Context) {
        TopBottomPanel::bottom("input_area")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                InputBar::new(&mut self.state, &self.theme).show(ui);
            });
    }

    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.bg_primary))
            .show(ctx, |ui| {
                MessageList::new(&self.state, &self.theme).show(ui);
            });
    }
}

impl eframe::App for FloatChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_events();

        self.show_header(ctx);
        self.show_sidebar(ctx);
        self.show_input_area(ctx);
        self.show_content(ctx);

        // Keep polling while a reply is pending.
        if self.state.awaiting_response {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
