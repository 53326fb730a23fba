// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Password input with a reveal toggle.

use eframe::egui;

/// Password value and how it is rendered.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct PasswordModel {
    value: String,
    visible: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PasswordMsg {
    Changed(String),
    ToggleVisibility,
}

impl PasswordModel {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value renders in plain text.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The reveal control only exists while there is something to reveal.
    pub fn shows_toggle(&self) -> bool {
        !self.value.is_empty()
    }
}

/// Apply a message to the password model.
pub fn update(model: &mut PasswordModel, msg: PasswordMsg) {
    match msg {
        PasswordMsg::Changed(text) => model.value = text,
        PasswordMsg::ToggleVisibility => model.visible = !model.visible,
    }
}

/// Render the password field; `submit` is set when Enter is pressed inside it.
pub fn view(ui: &mut egui::Ui, model: &PasswordModel, submit: &mut bool) -> Vec<PasswordMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        let toggle_width = if model.shows_toggle() { 32.0 } else { 0.0 };
        let mut buffer = model.value().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut buffer)
                .password(!model.is_visible())
                .hint_text("Password")
                .desired_width(ui.available_width() - toggle_width),
        );
        if response.changed() {
            msgs.push(PasswordMsg::Changed(buffer));
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            *submit = true;
        }

        if model.shows_toggle() {
            let icon = if model.is_visible() {
                egui_phosphor::regular::EYE_SLASH
            } else {
                egui_phosphor::regular::EYE
            };
            let hover = if model.is_visible() {
                "Hide password"
            } else {
                "Show password"
            };
            if ui.button(icon).on_hover_text(hover).clicked() {
                msgs.push(PasswordMsg::ToggleVisibility);
            }
        }
    });

    msgs
}
