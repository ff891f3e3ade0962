//! Chat panel: transcript, welcome screen, and the message input row.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use chat_types::config::DisplayStrings;
use crate::state::UiState;
use crate::theme::*;
use crate::transcript::{LoadingIndicator, TranscriptEntry};

/// What the caller should do after rendering the chat panel
#[derive(Debug, Clone, PartialEq)]
pub enum ChatAction {
    None,
    /// Submit this (already trimmed) text
    Submit(String),
    Clear,
}

/// Render the chat panel. `gate_open` is the session's interaction gate.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    strings: &DisplayStrings,
    gate_open: bool,
) -> ChatAction {
    let mut action = ChatAction::None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(&strings.title).color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let clear = ui.add_enabled(
                            !state.transcript.is_empty(),
                            egui::Button::new(RichText::new("Clear").color(TEXT_PRIMARY))
                                .corner_radius(PANEL_ROUNDING),
                        );
                        if clear.clicked() {
                            action = ChatAction::Clear;
                        }
                    });
                });

                ui.separator();

                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if state.transcript.shows_welcome() {
                            render_welcome(ui, strings);
                        }

                        for entry in state.transcript.entries() {
                            render_entry(ui, entry);
                            ui.add_space(4.0);
                        }

                        if let Some(indicator) = state.transcript.loading() {
                            render_loading(ui, indicator);
                        }

                        if state.transcript.take_scroll_request() {
                            ui.scroll_to_cursor(Some(Align::BOTTOM));
                        }
                    });

                ui.add_space(8.0);

                let hint = state.placeholder(strings);
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text(hint)
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));
                    let response = ui.add_enabled(gate_open, input);

                    let send_enabled = state.can_send(gate_open);
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if send_enabled && (enter || send_btn.clicked()) {
                        action = ChatAction::Submit(state.take_input());
                        response.request_focus();
                    }
                });
            });
        });

    action
}

fn render_welcome(ui: &mut egui::Ui, strings: &DisplayStrings) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(&strings.welcome_title).color(ACCENT).strong().size(20.0));
        ui.add_space(6.0);
        ui.label(RichText::new(&strings.welcome_text).color(TEXT_PRIMARY));
        ui.add_space(10.0);
        for feature in &strings.features {
            ui.label(RichText::new(format!("• {}", feature)).color(TEXT_SECONDARY));
        }
        ui.add_space(10.0);
        ui.label(RichText::new(&strings.start_prompt).color(TEXT_SECONDARY).italics());
    });
}

fn render_entry(ui: &mut egui::Ui, entry: &TranscriptEntry) {
    let (label_color, bg) = role_colors(entry.role);

    egui::Frame::default()
        .fill(bg)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(&entry.label).color(label_color).strong().small());
            // egui labels never interpret markup, so the text is shown literally
            ui.label(RichText::new(&entry.text).color(TEXT_PRIMARY));
            ui.label(RichText::new(&entry.time_label).color(TEXT_SECONDARY).small());
        });
}

fn render_loading(ui: &mut egui::Ui, indicator: &LoadingIndicator) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new().color(ACCENT));
                ui.label(RichText::new(&indicator.caption).color(TEXT_SECONDARY).italics());
            });
        });
}
