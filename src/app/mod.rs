// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the contact form.

use crate::ui::ContactFormApp;
use eframe::egui;
use egui_phosphor::Variant;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> eframe::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Contact us")
            .with_inner_size([480.0, 720.0])
            .with_min_inner_size([360.0, 520.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    tracing::info!("starting contact form");
    eframe::run_native(
        "Contact form",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(ContactFormApp::default()))
        }),
    )
}
