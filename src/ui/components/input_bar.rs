//! Input bar component.
//!
//! Text field plus send button. One submission at a time: both are
//! disabled while a reply is pending.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Key, RichText, Vec2};

pub struct InputBar<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> InputBar<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    self.show_text_input(ui);
                    ui.add_space(self.theme.spacing_sm);
                    self.show_send_button(ui);
                });
            });
    }

    fn show_text_input(&mut self, ui: &mut egui::Ui) {
        let awaiting = self.state.awaiting_response;
        let available_width = ui.available_width() - 60.0;

        let text_edit = egui::TextEdit::singleline(&mut self.state.input_text)
            .hint_text("Ask me about ocean data...")
            .desired_width(available_width)
            .font(egui::TextStyle::Body)
            .margin(egui::Margin::symmetric(12.0, 8.0));

        let response = ui.add_enabled(!awaiting, text_edit);

        if response.has_focus() && !self.state.input_text.trim().is_empty() {
            let enter_pressed = ui.input(|i| i.key_pressed(Key::Enter));
            if enter_pressed {
                self.state.send_message();
            }
        }

        if !awaiting {
            response.request_focus();
        }
    }

    fn show_send_button(&mut self, ui: &mut egui::Ui) {
        let can_send =
            !self.state.input_text.trim().is_empty() && !self.state.awaiting_response;

        let button_color = if can_send {
            self.theme.primary
        } else {
            self.theme.text_muted
        };

        let button = egui::Button::new(RichText::new("Send").color(egui::Color32::WHITE))
            .min_size(Vec2::new(60.0, 36.0))
            .rounding(self.theme.button_rounding)
            .fill(button_color);

        let response = ui.add_enabled(can_send, button);

        if response.clicked() {
            self.state.send_message();
        }

        response.on_hover_text("Send message (Enter)");
    }
}
