//! Main egui application: composes the panels and drives the session.

use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use chat_core::event_bus::EventBus;
use chat_core::ports::GatewayPort;
use chat_core::session::{SessionController, SubmitOutcome};
use chat_platform::gateway::HttpGateway;
use chat_types::config::{ClientConfig, DisplayStrings};
use chat_ui::panels::chat::{self, ChatAction};
use chat_ui::panels::settings::{self, SettingsAction};
use chat_ui::state::UiState;
use chat_ui::theme;

/// The main application state
pub struct ChatApp {
    ui_state: UiState,
    config: ClientConfig,
    strings: DisplayStrings,
    event_bus: EventBus,
    session: SessionController,
    gateway: Rc<dyn GatewayPort>,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ClientConfig::default();
        let strings = config.persona.strings();
        let event_bus = EventBus::new();
        let session = SessionController::new(strings.clone(), event_bus.clone());
        let gateway: Rc<dyn GatewayPort> = Rc::new(HttpGateway::new(&config.gateway));

        Self {
            ui_state: UiState::new(),
            config,
            strings,
            event_bus,
            session,
            gateway,
            first_frame: true,
        }
    }

    fn apply_config(&mut self) {
        self.gateway = Rc::new(HttpGateway::new(&self.config.gateway));
        let strings = self.config.persona.strings();
        if strings != self.strings {
            log::info!("Persona switched to {}", self.config.persona.label());
            self.session.set_strings(strings.clone());
            self.strings = strings;
        }
    }

    /// Run one submission to completion in the background
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let session = self.session.clone();
        let gateway = self.gateway.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            match session.submit(&text, gateway.as_ref()).await {
                SubmitOutcome::Ignored => log::debug!("Submit ignored by session gate"),
                SubmitOutcome::Discarded => log::info!("Reply arrived after clear; dropped"),
                SubmitOutcome::Answered(_) | SubmitOutcome::Failed(_) => {}
            }
            ctx.request_repaint();
        });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the session
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events, &self.strings);
            ctx.request_repaint();
        }

        if self.session.in_flight() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&self.strings.title)
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                let status = if self.session.in_flight() {
                    self.strings.loading_caption.as_str()
                } else {
                    "Ready"
                };
                ui.label(RichText::new(status).color(theme::TEXT_SECONDARY).small());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Settings")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                    }
                });
            });
        });

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    match settings::settings_panel(ui, &mut self.config, &mut self.ui_state) {
                        SettingsAction::CredentialChanged => {
                            self.session.set_credential(&self.ui_state.credential_input);
                        }
                        SettingsAction::ConfigChanged => self.apply_config(),
                        SettingsAction::None => {}
                    }
                });
        }

        // ── Chat ─────────────────────────────────────────────
        let gate_open = self.session.can_submit();
        let action = CentralPanel::default()
            .show(ctx, |ui| chat::chat_panel(ui, &mut self.ui_state, &self.strings, gate_open))
            .inner;

        match action {
            ChatAction::Submit(text) => self.dispatch_message(text, ctx),
            ChatAction::Clear => self.session.clear(),
            ChatAction::None => {}
        }
    }
}
