//! UI automation tests using egui_kittest and AccessKit.
//!
//! These tests verify the shell behavior by simulating user interactions
//! and checking the accessibility tree for expected elements.

use std::time::Duration;

use floatchat::config::AppConfig;
use floatchat::messages::{Message, Sender};
use floatchat::session;
use floatchat::speech::{SPEECH_PARAM_MAX, SPEECH_PARAM_MIN, VOICE_NAMES};
use floatchat::ui::components::EXAMPLE_QUERIES;
use floatchat::ui::AppState;
use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;

/// Application state wrapper for testing.
struct TestApp {
    state: AppState,
}

impl TestApp {
    fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    fn connected() -> Self {
        let config = AppConfig::default().with_thinking_delay(Duration::ZERO);
        let handle = session::start(config).expect("session should start");
        Self {
            state: AppState::connect(handle),
        }
    }

    fn with_message(self, sender: Sender, text: &str) -> Self {
        self.state.messages.add(Message::new(sender, text));
        self
    }
}

/// Render the chat UI for testing.
fn render_chat_ui(app: &mut TestApp, ui: &mut egui::Ui) {
    app.state.poll_events();

    // Message display area
    egui::ScrollArea::vertical()
        .id_salt("test_messages")
        .max_height(300.0)
        .show(ui, |ui| {
            for message in app.state.messages.all() {
                let is_user = matches!(message.sender, Sender::User);
                let label_text = if is_user {
                    format!("User message: {}", message.text)
                } else {
                    format!("Assistant response: {}", message.text)
                };

                let response = ui.label(&message.text);
                response.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::Label, true, &label_text)
                });
            }
        });

    ui.separator();

    // Example query buttons
    for query in EXAMPLE_QUERIES {
        let response = ui.add(egui::Button::new(query));
        response.widget_info(|| {
            egui::WidgetInfo::labeled(
                egui::WidgetType::Button,
                true,
                &format!("Example: {query}"),
            )
        });
        if response.clicked() {
            app.state.submit_query(query);
        }
    }

    ui.separator();

    // Input area
    ui.horizontal(|ui| {
        let text_edit = egui::TextEdit::singleline(&mut app.state.input_text)
            .hint_text("Ask me about ocean data...")
            .desired_width(200.0)
            .id(egui::Id::new("query_input"));

        let text_response = ui.add(text_edit);
        text_response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "Query input")
        });

        let send_enabled =
            !app.state.input_text.trim().is_empty() && !app.state.awaiting_response;
        let send_response = ui.add_enabled(send_enabled, egui::Button::new("Send"));
        send_response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, send_enabled, "Send query")
        });

        if send_response.clicked() {
            app.state.send_message();
        }
    });

    // Voice controls
    ui.add(
        egui::Slider::new(
            &mut app.state.voice.pitch,
            SPEECH_PARAM_MIN..=SPEECH_PARAM_MAX,
        )
        .text("Pitch"),
    );
    ui.add(
        egui::Slider::new(
            &mut app.state.voice.rate,
            SPEECH_PARAM_MIN..=SPEECH_PARAM_MAX,
        )
        .text("Rate (speed)"),
    );
    app.state.apply_voice_bounds();
}

fn build_harness(app: TestApp) -> Harness<'static, TestApp> {
    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(500.0, 700.0))
        .build_state(
            |ctx, app: &mut TestApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    render_chat_ui(app, ui);
                });
            },
            app,
        );

    harness.run();
    harness
}

#[test]
fn test_query_input_exists() {
    let harness = build_harness(TestApp::new());
    let _input = harness.get_by_label("Query input");
}

#[test]
fn test_send_button_exists() {
    let harness = build_harness(TestApp::new());
    let _button = harness.get_by_label("Send query");
}

#[test]
fn test_type_text_into_input() {
    let mut harness = build_harness(TestApp::new());

    harness.get_by_label("Query input").focus();
    harness.run();

    harness
        .get_by_label("Query input")
        .type_text("What's the salinity at 100m?");
    harness.run();

    assert_eq!(
        harness.state().state.input_text,
        "What's the salinity at 100m?"
    );
}

#[test]
fn test_send_query_creates_user_message() {
    let mut harness = build_harness(TestApp::new());

    harness.get_by_label("Query input").focus();
    harness.run();

    harness.get_by_label("Query input").type_text("Show me the map");
    harness.run();

    harness.get_by_label("Send query").click();
    harness.run();

    let messages = harness.state().state.messages.all();
    assert_eq!(messages.len(), 1, "Should have exactly one message");
    assert!(matches!(messages[0].sender, Sender::User));
    assert_eq!(messages[0].text, "Show me the map");

    assert!(
        harness.state().state.input_text.is_empty(),
        "Input should be cleared after sending"
    );
}

#[test]
fn test_cannot_send_empty_query() {
    let mut harness = build_harness(TestApp::new());

    harness.get_by_label("Send query").click();
    harness.run();

    assert!(harness.state().state.messages.is_empty());
}

#[test]
fn test_user_message_appears_in_list() {
    let harness = build_harness(TestApp::new().with_message(Sender::User, "Any storms nearby?"));
    let _message = harness.get_by_label("User message: Any storms nearby?");
}

#[test]
fn test_assistant_response_appears_in_list() {
    let harness = build_harness(
        TestApp::new().with_message(Sender::Assistant, "Salinity is averaging 34.8 PSU."),
    );
    let _message = harness.get_by_label("Assistant response: Salinity is averaging 34.8 PSU.");
}

#[test]
fn test_example_query_button_submits_query() {
    let mut harness = build_harness(TestApp::new());

    harness
        .get_by_label(&format!("Example: {}", EXAMPLE_QUERIES[0]))
        .click();
    harness.run();

    let messages = harness.state().state.messages.all();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, EXAMPLE_QUERIES[0]);
}

#[test]
fn test_voice_settings_stay_clamped() {
    let mut harness = build_harness(TestApp::new());

    // Force the values out of range as a control surface never should.
    harness.state_mut().state.voice.pitch = 10.0;
    harness.state_mut().state.voice.rate = -3.0;
    harness.run();

    let voice = &harness.state().state.voice;
    assert!(voice.pitch >= SPEECH_PARAM_MIN && voice.pitch <= SPEECH_PARAM_MAX);
    assert!(voice.rate >= SPEECH_PARAM_MIN && voice.rate <= SPEECH_PARAM_MAX);
}

#[test]
fn test_voice_roster_is_fixed() {
    assert_eq!(VOICE_NAMES.len(), 5);
    assert!(VOICE_NAMES.contains(&"Google US English"));
}

/// Complete flow against a live session: type a canned query, send it, and
/// poll until the assistant's reply lands in the history.
#[test]
fn test_complete_chat_flow() {
    let mut harness = build_harness(TestApp::connected());

    harness.get_by_label("Query input").focus();
    harness.run();

    harness
        .get_by_label("Query input")
        .type_text("What's the salinity at 100m?");
    harness.run();

    harness.get_by_label("Send query").click();
    harness.run();

    // With a zero thinking delay the reply can land during the frames
    // harness.run() just pumped, so only the user message is guaranteed.
    {
        let messages = harness.state().state.messages.all();
        assert!(!messages.is_empty(), "Should have the user message");
        assert!(matches!(messages[0].sender, Sender::User));
    }

    // The pipeline answers on a worker thread; poll until the reply arrives.
    for _ in 0..200 {
        harness.run();
        if harness.state().state.messages.len() >= 2 {
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    let messages = harness.state().state.messages.all();
    assert_eq!(messages.len(), 2, "Expected an assistant reply");
    assert!(matches!(messages[1].sender, Sender::Assistant));
    assert!(messages[1].text.contains("34.8 PSU"));
    assert!(!harness.state().state.awaiting_response);
}
