// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the contact form.
//! Handles layout, form controls, and wiring to background commands.

pub mod components;

use std::time::Duration;

use eframe::egui;

use crate::models::form::Field;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::{password, uploads};

/// How often to repaint while background work is outstanding.
const PENDING_REPAINT: Duration = Duration::from_millis(100);

/// Stateful egui application hosting the contact form.
pub struct ContactFormApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_tx: crossbeam_channel::Sender<Msg>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl Default for ContactFormApp {
    fn default() -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().clamp(2, 4))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    tracing::debug!(?cmd, "running command");
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_tx,
            msg_rx,
        }
    }
}

impl eframe::App for ContactFormApp {
    /// Drains worker results and drag/drop input, applies queued messages,
    /// and dispatches resulting commands. Runs before every [`Self::ui`] pass.
    fn logic(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        self.inbox.extend(
            uploads::drag_input(ctx, &self.model.uploads)
                .into_iter()
                .map(Msg::Uploads),
        );

        // Apply in arrival order.
        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.dispatch(cmd) {
                    self.model.pending_commands += 1;
                } else {
                    tracing::error!("command queue disconnected");
                }
            }
        }

        if self.model.pending_commands > 0 || self.model.uploads.is_drag_active() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }

    /// Renders the form. Interactions are queued in the inbox for the next [`Self::logic`] pass.
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                ui.heading(egui::RichText::new("Contact us").strong().size(26.0));
                ui.add_space(12.0);

                self.render_text_fields(ui);
                ui.add_space(8.0);

                self.render_password(ui);
                ui.add_space(8.0);

                self.render_message(ui);
                ui.add_space(8.0);

                let upload_msgs = uploads::view(ui, &self.model.uploads);
                self.inbox.extend(upload_msgs.into_iter().map(Msg::Uploads));
                ui.add_space(8.0);

                self.render_feedback(ui);
                self.render_submit_button(ui);
            });
        });

        if !self.inbox.is_empty() {
            ui.ctx().request_repaint();
        }
    }
}

impl ContactFormApp {
    /// Route a command: submission timers get their own thread so they never
    /// occupy the pool that resolves uploads. Returns false when the pool is gone.
    fn dispatch(&self, cmd: Command) -> bool {
        match cmd {
            Command::SimulateSubmit { .. } => {
                let msg_tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let _ = msg_tx.send(mvu::run_command(cmd));
                });
                true
            }
            other => self.cmd_tx.send(other).is_ok(),
        }
    }

    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.global_style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Name and email inputs. Enter in either submits the form.
    fn render_text_fields(&mut self, ui: &mut egui::Ui) {
        let mut name = self.model.fields.name.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut name)
                .hint_text("Name")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.inbox.push(Msg::FieldChanged(Field::Name, name));
        }
        self.submit_on_enter(ui, &response);

        let mut email = self.model.fields.email.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut email)
                .hint_text("Email")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.inbox.push(Msg::FieldChanged(Field::Email, email));
        }
        self.submit_on_enter(ui, &response);

        if self.model.fields.email_looks_invalid() {
            ui.label(
                egui::RichText::new("This does not look like an email address.")
                    .small()
                    .color(egui::Color32::from_rgb(232, 89, 12)),
            );
        }
    }

    fn render_password(&mut self, ui: &mut egui::Ui) {
        let mut submit = false;
        let msgs = password::view(ui, &self.model.password, &mut submit);
        self.inbox.extend(msgs.into_iter().map(Msg::Password));
        if submit {
            self.inbox.push(Msg::SubmitRequested);
        }
    }

    fn render_message(&mut self, ui: &mut egui::Ui) {
        let mut message = self.model.fields.message.clone();
        if ui
            .add(
                egui::TextEdit::multiline(&mut message)
                    .hint_text("Message")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            self.inbox.push(Msg::FieldChanged(Field::Message, message));
        }
    }

    fn submit_on_enter(&mut self, ui: &egui::Ui, response: &egui::Response) {
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.inbox.push(Msg::SubmitRequested);
        }
    }

    /// Error and success banners; both may show at once.
    fn render_feedback(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.model.feedback.error {
            banner(ui, error, egui::Color32::from_rgb(220, 38, 38));
            ui.add_space(6.0);
        }
        if let Some(success) = &self.model.feedback.success {
            banner(ui, success, egui::Color32::from_rgb(22, 163, 74));
            ui.add_space(6.0);
        }
    }

    /// Full-width submit button; shows a spinner while submitting but stays enabled.
    fn render_submit_button(&mut self, ui: &mut egui::Ui) {
        let size = egui::vec2(ui.available_width(), 40.0);
        let clicked = if self.model.is_submitting() {
            let response = ui.add_sized(size, egui::Button::new(""));
            let spinner_rect = egui::Rect::from_center_size(
                response.rect.center(),
                egui::vec2(22.0, 22.0),
            );
            ui.put(spinner_rect, egui::Spinner::new().size(22.0));
            response.clicked()
        } else {
            ui.add_sized(
                size,
                egui::Button::new(egui::RichText::new("Submit").size(18.0)),
            )
            .clicked()
        };

        if clicked {
            self.inbox.push(Msg::SubmitRequested);
        }
    }
}

/// Outlined, centered message box.
fn banner(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.12))
        .stroke(egui::Stroke::new(1.5, color))
        .corner_radius(8.0)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(text).color(color));
            });
        });
}
