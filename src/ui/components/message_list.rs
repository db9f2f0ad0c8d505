//! Message list component.
//!
//! Displays the conversation history in submission order, plus a thinking
//! indicator while a reply is pending.

use crate::messages::{Message, Sender};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Align, Color32, RichText};

pub struct MessageList<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> MessageList<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let messages = self.state.messages.all();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.add_space(self.theme.spacing);

                    if messages.is_empty() && !self.state.awaiting_response {
                        self.show_empty_state(ui);
                    } else {
                        for message in &messages {
                            self.show_message(ui, message);
                            ui.add_space(self.theme.spacing_sm);
                        }

                        if self.state.awaiting_response {
                            self.show_thinking_indicator(ui);
                        }
                    }

                    ui.add_space(self.theme.spacing);
                });
            });
    }

    fn show_empty_state(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);

            ui.label(
                RichText::new("Welcome to FloatChat")
                    .size(24.0)
                    .color(self.theme.text_primary),
            );

            ui.add_space(self.theme.spacing);

            ui.label(
                RichText::new("Ask about the ocean, or pick an example query from the sidebar.")
                    .size(14.0)
                    .color(self.theme.text_muted),
            );

            ui.add_space(self.theme.spacing_lg);

            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing = egui::Vec2::splat(self.theme.spacing);

                self.show_hint_card(ui, "Measurements", "Temperature, salinity, depth");
                self.show_hint_card(ui, "Live data", "Weather and ocean news");
                self.show_hint_card(ui, "Floats", "Locations and comparisons");
            });
        });
    }

    fn show_hint_card(&self, ui: &mut egui::Ui, title: &str, description: &str) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.set_width(170.0);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(title)
                            .size(14.0)
                            .strong()
                            .color(self.theme.primary),
                    );
                    ui.label(
                        RichText::new(description)
                            .size(12.0)
                            .color(self.theme.text_muted),
                    );
                });
            });
    }

    fn show_message(&self, ui: &mut egui::Ui, message: &Message) {
        let is_user = matches!(message.sender, Sender::User);
        let bubble_color = if is_user {
            self.theme.user_bubble
        } else {
            self.theme.assistant_bubble
        };
        let text_color = if is_user {
            Color32::WHITE
        } else {
            self.theme.text_primary
        };
        let align = if is_user { Align::RIGHT } else { Align::LEFT };

        ui.with_layout(egui::Layout::top_down(align), |ui| {
            ui.label(
                RichText::new(if is_user { "You" } else { "FloatChat" })
                    .size(12.0)
                    .color(self.theme.text_muted),
            );

            ui.add_space(2.0);

            let max_width = ui.available_width() * 0.75;

            egui::Frame::none()
                .fill(bubble_color)
                .rounding(self.theme.bubble_rounding)
                .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                .show(ui, |ui| {
                    ui.set_max_width(max_width);
                    ui.label(RichText::new(&message.text).color(text_color));
                });

            let time_str = message.timestamp.format("%H:%M").to_string();
            ui.label(
                RichText::new(time_str)
                    .size(10.0)
                    .color(self.theme.text_muted),
            );
        });
    }

    fn show_thinking_indicator(&self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::top_down(Align::LEFT), |ui| {
            ui.label(
                RichText::new("FloatChat")
                    .size(12.0)
                    .color(self.theme.text_muted),
            );

            ui.add_space(2.0);

            egui::Frame::none()
                .fill(self.theme.assistant_bubble)
                .rounding(self.theme.bubble_rounding)
                .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new("Thinking...")
                                .size(13.0)
                                .color(self.theme.text_muted),
                        );
                        for i in 0..3 {
                            let t = ui.ctx().input(|input| input.time);
                            let alpha = ((t * 3.0 + i as f64 * 0.5).sin() * 0.5 + 0.5) as f32;
                            ui.label(
                                RichText::new("●")
                                    .size(10.0)
                                    .color(self.theme.text_muted.gamma_multiply(alpha)),
                            );
                        }
                    });
                });
        });

        ui.ctx().request_repaint();
    }
}
