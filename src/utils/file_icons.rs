// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges
//! Phosphor file-icon mapping for uploaded files.
//!
//! UI-agnostic so the list view and tests can share it. Favors the MIME
//! type and falls back to the filename extension.

/// Return a Phosphor file icon matching the MIME type or filename.
pub fn icon_for(mime: &str, name: &str) -> &'static str {
    let mime = mime
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if mime == "application/pdf" || ext == "pdf" {
        return egui_phosphor::regular::FILE_PDF;
    }
    if mime.starts_with("image/") {
        return match ext.as_str() {
            "png" => egui_phosphor::regular::FILE_PNG,
            "jpg" | "jpeg" => egui_phosphor::regular::FILE_JPG,
            _ => egui_phosphor::regular::FILE_IMAGE,
        };
    }

    egui_phosphor::regular::PAPERCLIP
}
