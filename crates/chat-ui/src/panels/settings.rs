//! Settings panel: credential entry, persona, and gateway endpoint.

use egui::{self, RichText};
use chat_types::config::{ClientConfig, Persona, DEFAULT_ENDPOINT};
use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Nothing changed
    None,
    /// The credential field was edited; push it into the session
    CredentialChanged,
    /// Persona or endpoint changed; rebuild whatever depends on them
    ConfigChanged,
}

/// Render the settings panel. Returns an action for the caller to handle.
pub fn settings_panel(
    ui: &mut egui::Ui,
    config: &mut ClientConfig,
    state: &mut UiState,
) -> SettingsAction {
    let mut credential_changed = false;
    let mut config_changed = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            // ── Credential ───────────────────────────────────
            ui.label(RichText::new("API Key").color(TEXT_SECONDARY).small());
            ui.horizontal(|ui| {
                let edit = egui::TextEdit::singleline(&mut state.credential_input)
                    .password(!state.show_credential)
                    .hint_text("sk-...")
                    .desired_width(ui.available_width() - 56.0);
                if ui.add(edit).changed() {
                    credential_changed = true;
                }
                let toggle = if state.show_credential { "Hide" } else { "Show" };
                if ui.button(toggle).clicked() {
                    state.show_credential = !state.show_credential;
                }
            });
            if state.has_credential() {
                ui.label(
                    RichText::new("Kept in memory only; sent with each request.")
                        .color(TEXT_SECONDARY)
                        .small()
                        .italics(),
                );
            } else {
                ui.label(RichText::new("An API key is required to chat.").color(ERROR).small());
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            // ── Assistant ────────────────────────────────────
            ui.label(RichText::new("Assistant").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Persona").color(TEXT_SECONDARY).small());
            egui::ComboBox::from_id_salt("persona")
                .selected_text(config.persona.label())
                .show_ui(ui, |ui| {
                    for p in Persona::all() {
                        if ui
                            .selectable_value(&mut config.persona, *p, p.label())
                            .changed()
                        {
                            config_changed = true;
                        }
                    }
                });

            ui.add_space(4.0);

            ui.label(RichText::new("Gateway Endpoint").color(TEXT_SECONDARY).small());
            if ui
                .add(
                    egui::TextEdit::singleline(&mut config.gateway.endpoint)
                        .hint_text(DEFAULT_ENDPOINT),
                )
                .changed()
            {
                config_changed = true;
            }
        });

    if credential_changed {
        SettingsAction::CredentialChanged
    } else if config_changed {
        SettingsAction::ConfigChanged
    } else {
        SettingsAction::None
    }
}
