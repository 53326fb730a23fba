// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Upload domain model and batch intake validation (UI-agnostic).

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use thiserror::Error;

/// Maximum number of characters shown before a filename is shortened.
const DISPLAY_NAME_MAX: usize = 30;
const DISPLAY_HEAD: usize = 10;
const DISPLAY_TAIL: usize = 15;

/// Opaque reference to the content of an offered file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileHandle {
    /// File on disk (native picker or native drop).
    Path(PathBuf),
    /// Bytes delivered with a drop payload.
    Memory(Arc<[u8]>),
}

/// A file offered by the picker or a drop, before its size is known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncomingFile {
    pub name: String,
    pub handle: FileHandle,
}

impl IncomingFile {
    /// Wrap a filesystem path, taking the display name from its last component.
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            name,
            handle: FileHandle::Path(path),
        }
    }

    /// Wrap an in-memory payload.
    pub fn from_bytes(name: impl Into<String>, bytes: Arc<[u8]>) -> Self {
        Self {
            name: name.into(),
            handle: FileHandle::Memory(bytes),
        }
    }
}

/// A file accepted into (or offered to) the upload sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    /// Full original filename, never truncated.
    pub name: String,
    /// Exact size in bytes.
    pub size: u64,
    pub handle: FileHandle,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size: u64, handle: FileHandle) -> Self {
        Self {
            name: name.into(),
            size,
            handle,
        }
    }

    /// Resolve the byte size of an offered file.
    ///
    /// # Errors
    ///
    /// Returns an error when a path-backed file's metadata cannot be read.
    pub fn resolve(incoming: IncomingFile) -> Result<Self> {
        let size = match &incoming.handle {
            FileHandle::Path(path) => {
                path.metadata()
                    .with_context(|| format!("Could not read {}", incoming.name))?
                    .len()
            }
            FileHandle::Memory(bytes) => bytes.len() as u64,
        };
        Ok(Self::new(incoming.name, size, incoming.handle))
    }

    /// Name shortened for list display: first 10 chars, `...`, last 15 chars.
    pub fn display_name(&self) -> String {
        truncate_name(&self.name)
    }

    /// Best-effort MIME type derived from the filename.
    pub fn mime(&self) -> String {
        mime_guess::from_path(&self.name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}

/// Reasons an upload batch is rejected as a whole.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error("You can not upload more than 5 files")]
    TooManyFiles,
    #[error("Maximum files size is 5Mb")]
    TooLargeFiles,
    #[error("only the following formats are accepted ‘.pdf, .png, .jpg’")]
    UnsupportedFormat,
}

/// Limits applied to every upload batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntakeLimits {
    pub max_files: usize,
    /// Cumulative byte budget across accepted and offered files.
    pub max_total_bytes: u64,
    /// Lowercase extensions without the leading dot.
    pub allowed_extensions: &'static [&'static str],
}

impl Default for IntakeLimits {
    fn default() -> Self {
        Self {
            max_files: 5,
            // 5 MiB
            max_total_bytes: 5_242_880,
            allowed_extensions: &["jpg", "jpeg", "png", "pdf"],
        }
    }
}

impl IntakeLimits {
    /// Count check on its own; needs no file sizes, so it can run before resolution.
    pub fn check_count(&self, existing: usize, offered: usize) -> Result<(), IntakeError> {
        if existing + offered > self.max_files {
            return Err(IntakeError::TooManyFiles);
        }
        Ok(())
    }

    /// Return true when `name` ends in `.<ext>` for an allowed extension (ASCII case-insensitive).
    pub fn accepts_name(&self, name: &str) -> bool {
        match name.rsplit_once('.') {
            Some((_, ext)) => self
                .allowed_extensions
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed)),
            None => false,
        }
    }
}

/// Check a batch against the files already accepted.
///
/// Checks run in a fixed order (count, cumulative size, extension) and the
/// first failure wins. Nothing is mutated here; callers append on `Ok`.
pub fn validate_batch(
    existing: &[UploadedFile],
    batch: &[UploadedFile],
    limits: &IntakeLimits,
) -> Result<(), IntakeError> {
    limits.check_count(existing.len(), batch.len())?;

    let total: u64 = batch
        .iter()
        .chain(existing.iter())
        .fold(0u64, |acc, f| acc.saturating_add(f.size));
    if total > limits.max_total_bytes {
        return Err(IntakeError::TooLargeFiles);
    }

    if batch.iter().any(|f| !limits.accepts_name(&f.name)) {
        return Err(IntakeError::UnsupportedFormat);
    }

    Ok(())
}

fn truncate_name(name: &str) -> String {
    let count = name.chars().count();
    if count <= DISPLAY_NAME_MAX {
        return name.to_string();
    }
    let head: String = name.chars().take(DISPLAY_HEAD).collect();
    let tail: String = name.chars().skip(count - DISPLAY_TAIL).collect();
    format!("{head}...{tail}")
}
