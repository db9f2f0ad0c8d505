//! Sidebar component: example queries and voice personality controls.

use crate::speech::voice::{SPEECH_PARAM_MAX, SPEECH_PARAM_MIN, VOICE_NAMES};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText};

/// Canned queries a new user can click instead of typing.
pub const EXAMPLE_QUERIES: [&str; 7] = [
    "Show me temperature profiles near India",
    "Compare salinity at 100m depth in 2023",
    "Plot the trajectory of float 2902754",
    "Show me ARGO float locations in Arabian Sea",
    "Compare temperature between different floats",
    "What's the current weather in the Indian Ocean?",
    "Give me the latest news about the ocean",
];

pub struct Sidebar<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.show_example_queries(ui);
                ui.add_space(self.theme.spacing);
                ui.separator();
                ui.add_space(self.theme.spacing);
                self.show_voice_controls(ui);
            });
    }

    fn show_example_queries(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("Example Queries")
                .size(16.0)
                .strong()
                .color(self.theme.text_primary),
        );

        ui.add_space(self.theme.spacing_sm);

        for query in EXAMPLE_QUERIES {
            let button = egui::Button::new(
                RichText::new(query).size(12.0).color(self.theme.text_primary),
            )
            .wrap()
            .min_size(egui::Vec2::new(ui.available_width(), 0.0))
            .rounding(self.theme.button_rounding)
            .fill(self.theme.bg_secondary);

            if ui
                .add_enabled(!self.state.awaiting_response, button)
                .clicked()
            {
                self.state.submit_query(query);
            }
        }
    }

    fn show_voice_controls(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("Voice Personality")
                .size(16.0)
                .strong()
                .color(self.theme.text_primary),
        );

        ui.add_space(self.theme.spacing_sm);

        egui::ComboBox::from_label("Voice")
            .selected_text(self.state.voice.voice.clone())
            .width(ui.available_width() * 0.7)
            .show_ui(ui, |ui| {
                for name in VOICE_NAMES {
                    ui.selectable_value(&mut self.state.voice.voice, name.to_string(), name);
                }
            });

        ui.add_space(self.theme.spacing_sm);

        ui.add(
            egui::Slider::new(&mut self.state.voice.pitch, SPEECH_PARAM_MIN..=SPEECH_PARAM_MAX)
                .text("Pitch"),
        );
        ui.add(
            egui::Slider::new(&mut self.state.voice.rate, SPEECH_PARAM_MIN..=SPEECH_PARAM_MAX)
                .text("Rate (speed)"),
        );

        self.state.apply_voice_bounds();
    }
}
