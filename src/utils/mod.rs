// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by UI and form logic.

pub mod file_icons;
pub mod format_bytes;

/// Select a Phosphor icon for the given MIME/filename.
pub use file_icons::icon_for;
/// Render a byte count with base-1024 units.
pub use format_bytes::format_bytes;
