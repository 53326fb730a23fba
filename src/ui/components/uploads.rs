// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Upload drop zone and file list, structured for MVU-style updates.

use std::path::PathBuf;

use eframe::egui;

use crate::models::upload::{IncomingFile, IntakeLimits, UploadedFile, validate_batch};
use crate::utils::{format_bytes, icon_for};

/// MVU state for the drop zone and accepted files.
#[derive(Default)]
pub struct UploadsModel {
    files: Vec<UploadedFile>,
    limits: IntakeLimits,
    drag_active: bool,
}

/// Messages emitted by the uploads view and the drag/drop input hook.
#[derive(Debug)]
pub enum UploadsMsg {
    RequestPickFiles,
    FilesPicked(Vec<PathBuf>),
    DragEntered,
    DragLeft,
    FilesDropped(Vec<IncomingFile>),
    /// Sizes are known; run intake validation.
    BatchResolved(Vec<UploadedFile>),
    BatchFailed(String),
    Remove(usize),
}

/// Side-effectful commands that can be run off the UI path.
#[derive(Debug)]
pub enum UploadsCommand {
    PickFiles,
    ResolveBatch(Vec<IncomingFile>),
}

/// Outcome of an intake attempt, surfaced to the form feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadsEvent {
    Accepted { count: usize },
    Rejected(String),
}

impl UploadsModel {
    /// Build a model with custom intake limits.
    #[cfg(test)]
    pub fn with_limits(limits: IntakeLimits) -> Self {
        Self {
            limits,
            ..Default::default()
        }
    }

    /// Accepted files in upload order.
    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    /// Whether files are currently dragged over the window.
    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }
}

/// Apply a message to the uploads model. Returns an intake outcome when relevant.
pub fn update(
    model: &mut UploadsModel,
    msg: UploadsMsg,
    cmds: &mut Vec<UploadsCommand>,
) -> Option<UploadsEvent> {
    match msg {
        UploadsMsg::RequestPickFiles => {
            cmds.push(UploadsCommand::PickFiles);
            None
        }
        UploadsMsg::FilesPicked(paths) => {
            // An empty pick means the dialog was cancelled.
            if paths.is_empty() {
                return None;
            }
            let batch = paths.into_iter().map(IncomingFile::from_path).collect();
            queue_resolution(model, batch, cmds)
        }
        UploadsMsg::DragEntered => {
            model.drag_active = true;
            None
        }
        UploadsMsg::DragLeft => {
            model.drag_active = false;
            None
        }
        UploadsMsg::FilesDropped(batch) => {
            model.drag_active = false;
            if batch.is_empty() {
                return None;
            }
            queue_resolution(model, batch, cmds)
        }
        UploadsMsg::BatchResolved(batch) => Some(intake_batch(model, batch)),
        UploadsMsg::BatchFailed(err) => Some(UploadsEvent::Rejected(err)),
        UploadsMsg::Remove(index) => {
            if index < model.files.len() {
                let removed = model.files.remove(index);
                tracing::debug!(index, name = %removed.name, "upload removed");
            }
            None
        }
    }
}

/// Reject over-count batches up front; otherwise ask a worker for the sizes.
fn queue_resolution(
    model: &UploadsModel,
    batch: Vec<IncomingFile>,
    cmds: &mut Vec<UploadsCommand>,
) -> Option<UploadsEvent> {
    if let Err(err) = model.limits.check_count(model.files.len(), batch.len()) {
        return Some(UploadsEvent::Rejected(err.to_string()));
    }
    cmds.push(UploadsCommand::ResolveBatch(batch));
    None
}

/// Validate a batch as a unit and append it on success.
fn intake_batch(model: &mut UploadsModel, batch: Vec<UploadedFile>) -> UploadsEvent {
    match validate_batch(&model.files, &batch, &model.limits) {
        Ok(()) => {
            let count = batch.len();
            model.files.extend(batch);
            UploadsEvent::Accepted { count }
        }
        Err(err) => UploadsEvent::Rejected(err.to_string()),
    }
}

/// Translate window-level drag/drop input into messages for this frame.
///
/// The whole window acts as the drop target.
pub fn drag_input(ctx: &egui::Context, model: &UploadsModel) -> Vec<UploadsMsg> {
    let (hovering, dropped) = ctx.input(|i| {
        (
            !i.raw.hovered_files.is_empty(),
            i.raw.dropped_files.clone(),
        )
    });

    if !dropped.is_empty() {
        let batch = dropped
            .into_iter()
            .filter_map(|file| match (file.path, file.bytes) {
                (Some(path), _) => Some(IncomingFile::from_path(path)),
                (None, Some(bytes)) => Some(IncomingFile::from_bytes(file.name, bytes)),
                (None, None) => {
                    tracing::warn!(name = %file.name, "dropped file carried neither path nor bytes");
                    None
                }
            })
            .collect();
        return vec![UploadsMsg::FilesDropped(batch)];
    }

    match (hovering, model.drag_active) {
        (true, false) => vec![UploadsMsg::DragEntered],
        (false, true) => vec![UploadsMsg::DragLeft],
        _ => Vec::new(),
    }
}

/// Render the drop zone and uploaded file list; return messages triggered by interaction.
pub fn view(ui: &mut egui::Ui, model: &UploadsModel) -> Vec<UploadsMsg> {
    let mut msgs = Vec::new();

    render_drop_zone(ui, model, &mut msgs);

    if !model.files.is_empty() {
        ui.add_space(6.0);
        render_file_list(ui, model, &mut msgs);
    }

    msgs
}

/// Dashed-looking drop target; clicking it opens the file picker.
fn render_drop_zone(ui: &mut egui::Ui, model: &UploadsModel, msgs: &mut Vec<UploadsMsg>) {
    let visuals = ui.visuals().clone();
    let stroke = if model.drag_active {
        egui::Stroke::new(2.0, visuals.selection.stroke.color)
    } else {
        egui::Stroke::new(1.5, visuals.widgets.noninteractive.fg_stroke.color)
    };

    let frame = egui::Frame::new()
        .fill(visuals.extreme_bg_color)
        .stroke(stroke)
        .corner_radius(12.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                let icon = if model.drag_active {
                    egui_phosphor::regular::DOWNLOAD_SIMPLE
                } else {
                    egui_phosphor::regular::UPLOAD_SIMPLE
                };
                ui.label(egui::RichText::new(icon).size(28.0));
                ui.label(egui::RichText::new("Click to Upload or Drag and Drop").small());
                ui.label(egui::RichText::new("(pdf, png, jpg) up to 5Mb").small());
            });
        });

    let response = frame
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    if response.clicked() {
        msgs.push(UploadsMsg::RequestPickFiles);
    }
}

/// One row per file: type icon, shortened name with size, remove control.
fn render_file_list(ui: &mut egui::Ui, model: &UploadsModel, msgs: &mut Vec<UploadsMsg>) {
    for (index, file) in model.files.iter().enumerate() {
        ui.horizontal(|ui| {
            let mime = file.mime();
            ui.label(egui::RichText::new(icon_for(&mime, &file.name)).size(18.0));
            ui.label(format!(
                "{} ({})",
                file.display_name(),
                format_bytes(file.size)
            ))
            .on_hover_text(format!("{}\n{} bytes | {}", file.name, file.size, mime));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(egui::RichText::new(egui_phosphor::regular::X_CIRCLE))
                    .on_hover_text("Remove file")
                    .clicked()
                {
                    msgs.push(UploadsMsg::Remove(index));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;
    use crate::models::upload::FileHandle;

    fn file(name: &str, size: u64) -> UploadedFile {
        UploadedFile::new(name, size, FileHandle::Memory(Arc::from(Vec::new())))
    }

    fn names(model: &UploadsModel) -> Vec<&str> {
        model.files().iter().map(|f| f.name.as_str()).collect()
    }

    fn resolve(model: &mut UploadsModel, batch: Vec<UploadedFile>) -> Option<UploadsEvent> {
        let mut cmds = Vec::new();
        let event = update(model, UploadsMsg::BatchResolved(batch), &mut cmds);
        assert!(cmds.is_empty(), "intake should not enqueue commands");
        event
    }

    #[test]
    fn valid_batches_append_in_order() {
        let mut model = UploadsModel::default();

        let first = resolve(&mut model, vec![file("a.png", 10), file("b.pdf", 10)]);
        let second = resolve(&mut model, vec![file("c.jpg", 10)]);
        let third = resolve(&mut model, vec![file("d.jpeg", 10), file("e.PNG", 10)]);

        assert_eq!(first, Some(UploadsEvent::Accepted { count: 2 }));
        assert_eq!(second, Some(UploadsEvent::Accepted { count: 1 }));
        assert_eq!(third, Some(UploadsEvent::Accepted { count: 2 }));
        assert_eq!(names(&model), ["a.png", "b.pdf", "c.jpg", "d.jpeg", "e.PNG"]);
    }

    #[test]
    fn rejected_batch_leaves_sequence_unchanged() {
        let mut model = UploadsModel::default();
        resolve(&mut model, vec![file("a.png", 10)]);

        let event = resolve(&mut model, vec![file("b.png", 10), file("c.docx", 10)]);

        assert_eq!(
            event,
            Some(UploadsEvent::Rejected(
                "only the following formats are accepted ‘.pdf, .png, .jpg’".into()
            ))
        );
        assert_eq!(names(&model), ["a.png"]);
    }

    #[test]
    fn sixth_file_is_rejected() {
        let mut model = UploadsModel::default();
        resolve(&mut model, (0..5).map(|i| file(&format!("{i}.png"), 1)).collect());

        let event = resolve(&mut model, vec![file("extra.png", 1)]);

        assert_eq!(
            event,
            Some(UploadsEvent::Rejected("You can not upload more than 5 files".into()))
        );
        assert_eq!(model.files().len(), 5);
    }

    #[test]
    fn cumulative_size_counts_existing_files() {
        let mut model = UploadsModel::default();
        resolve(&mut model, vec![file("big.pdf", 5_000_000)]);

        let event = resolve(&mut model, vec![file("more.pdf", 242_881)]);

        assert_eq!(
            event,
            Some(UploadsEvent::Rejected("Maximum files size is 5Mb".into()))
        );
        assert_eq!(names(&model), ["big.pdf"]);

        let event = resolve(&mut model, vec![file("fits.pdf", 242_880)]);
        assert_eq!(event, Some(UploadsEvent::Accepted { count: 1 }));
    }

    #[test]
    fn custom_limits_are_honored() {
        let mut model = UploadsModel::with_limits(IntakeLimits {
            max_files: 1,
            ..IntakeLimits::default()
        });

        assert!(matches!(
            resolve(&mut model, vec![file("a.png", 1), file("b.png", 1)]),
            Some(UploadsEvent::Rejected(_))
        ));
    }

    #[test]
    fn remove_excises_exactly_one_entry() {
        let mut model = UploadsModel::default();
        resolve(
            &mut model,
            vec![file("a.png", 1), file("b.png", 1), file("c.png", 1), file("d.png", 1)],
        );

        let mut cmds = Vec::new();
        let event = update(&mut model, UploadsMsg::Remove(1), &mut cmds);

        assert!(event.is_none(), "removal never produces feedback");
        assert_eq!(names(&model), ["a.png", "c.png", "d.png"]);

        update(&mut model, UploadsMsg::Remove(2), &mut cmds);
        assert_eq!(names(&model), ["a.png", "c.png"]);
    }

    #[test]
    fn remove_out_of_range_is_ignored() {
        let mut model = UploadsModel::default();
        resolve(&mut model, vec![file("a.png", 1)]);

        let mut cmds = Vec::new();
        update(&mut model, UploadsMsg::Remove(3), &mut cmds);

        assert_eq!(names(&model), ["a.png"]);
    }

    #[test]
    fn drag_enter_and_leave_toggle_flag() {
        let mut model = UploadsModel::default();
        let mut cmds = Vec::new();

        update(&mut model, UploadsMsg::DragEntered, &mut cmds);
        assert!(model.is_drag_active());

        update(&mut model, UploadsMsg::DragLeft, &mut cmds);
        assert!(!model.is_drag_active());
        assert!(cmds.is_empty());
    }

    #[test]
    fn drop_clears_drag_and_enqueues_resolution() {
        let mut model = UploadsModel::default();
        let mut cmds = Vec::new();
        update(&mut model, UploadsMsg::DragEntered, &mut cmds);

        let dropped = vec![IncomingFile::from_bytes("a.png", Arc::from(vec![1u8, 2, 3]))];
        update(&mut model, UploadsMsg::FilesDropped(dropped.clone()), &mut cmds);

        assert!(!model.is_drag_active());
        assert_eq!(cmds.len(), 1);
        match cmds.pop().unwrap() {
            UploadsCommand::ResolveBatch(batch) => assert_eq!(batch, dropped),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn picked_paths_use_same_resolution_as_drops() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("photo.jpg");
        fs::write(&path, b"jpeg").unwrap();

        let mut model = UploadsModel::default();
        let mut cmds = Vec::new();
        update(&mut model, UploadsMsg::FilesPicked(vec![path.clone()]), &mut cmds);

        match cmds.pop().unwrap() {
            UploadsCommand::ResolveBatch(batch) => {
                assert_eq!(batch, vec![IncomingFile::from_path(path)]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cancelled_pick_does_nothing() {
        let mut model = UploadsModel::default();
        let mut cmds = Vec::new();

        let event = update(&mut model, UploadsMsg::FilesPicked(Vec::new()), &mut cmds);

        assert!(event.is_none());
        assert!(cmds.is_empty());
    }

    #[test]
    fn over_count_pick_is_rejected_before_resolution() {
        let tmp = TempDir::new().unwrap();
        // Missing files: the count error must win over any read error.
        let paths: Vec<PathBuf> = (0..6)
            .map(|i| tmp.path().join(format!("missing-{i}.png")))
            .collect();

        let mut model = UploadsModel::default();
        let mut cmds = Vec::new();
        let event = update(&mut model, UploadsMsg::FilesPicked(paths), &mut cmds);

        assert_eq!(
            event,
            Some(UploadsEvent::Rejected("You can not upload more than 5 files".into()))
        );
        assert!(cmds.is_empty(), "nothing should be resolved");
    }

    #[test]
    fn over_count_drop_is_rejected_and_clears_drag() {
        let mut model = UploadsModel::default();
        resolve(&mut model, (0..4).map(|i| file(&format!("{i}.png"), 1)).collect());
        let mut cmds = Vec::new();
        update(&mut model, UploadsMsg::DragEntered, &mut cmds);

        let dropped = vec![
            IncomingFile::from_bytes("a.png", Arc::from(vec![1u8])),
            IncomingFile::from_bytes("b.png", Arc::from(vec![1u8])),
        ];
        let event = update(&mut model, UploadsMsg::FilesDropped(dropped), &mut cmds);

        assert!(!model.is_drag_active());
        assert!(matches!(event, Some(UploadsEvent::Rejected(_))));
        assert!(cmds.is_empty());
        assert_eq!(model.files().len(), 4);
    }

    fn drag_msgs(raw: egui::RawInput, model: &UploadsModel) -> Vec<UploadsMsg> {
        let ctx = egui::Context::default();
        let mut msgs = Vec::new();
        let _ = ctx.run_ui(raw, |ui| msgs = drag_input(ui.ctx(), model));
        msgs
    }

    fn hovering() -> egui::RawInput {
        egui::RawInput {
            hovered_files: vec![egui::HoveredFile::default()],
            ..Default::default()
        }
    }

    fn dropping(files: Vec<egui::DroppedFile>) -> egui::RawInput {
        egui::RawInput {
            dropped_files: files,
            ..Default::default()
        }
    }

    #[test]
    fn hover_starts_drag_once() {
        let mut model = UploadsModel::default();

        let msgs = drag_msgs(hovering(), &model);
        assert!(matches!(msgs.as_slice(), [UploadsMsg::DragEntered]));

        model.drag_active = true;
        assert!(drag_msgs(hovering(), &model).is_empty());
    }

    #[test]
    fn hover_ending_clears_drag() {
        let mut model = UploadsModel::default();
        assert!(drag_msgs(egui::RawInput::default(), &model).is_empty());

        model.drag_active = true;
        let msgs = drag_msgs(egui::RawInput::default(), &model);
        assert!(matches!(msgs.as_slice(), [UploadsMsg::DragLeft]));
    }

    #[test]
    fn drop_while_hovering_reports_only_the_drop() {
        let model = UploadsModel {
            drag_active: true,
            ..Default::default()
        };
        let raw = egui::RawInput {
            hovered_files: vec![egui::HoveredFile::default()],
            dropped_files: vec![egui::DroppedFile {
                path: Some(PathBuf::from("/tmp/scan.pdf")),
                ..Default::default()
            }],
            ..Default::default()
        };

        let msgs = drag_msgs(raw, &model);

        match msgs.as_slice() {
            [UploadsMsg::FilesDropped(batch)] => {
                assert_eq!(
                    batch,
                    &vec![IncomingFile::from_path(PathBuf::from("/tmp/scan.pdf"))]
                );
            }
            other => panic!("unexpected messages: {other:?}"),
        }
    }

    #[test]
    fn drop_maps_paths_and_bytes_and_skips_empty_entries() {
        let model = UploadsModel::default();
        let bytes: Arc<[u8]> = Arc::from(vec![7u8; 16]);
        let raw = dropping(vec![
            egui::DroppedFile {
                path: Some(PathBuf::from("/tmp/photo.jpg")),
                name: "ignored.jpg".into(),
                ..Default::default()
            },
            egui::DroppedFile {
                name: "web.png".into(),
                bytes: Some(bytes.clone()),
                ..Default::default()
            },
            egui::DroppedFile {
                name: "nothing.png".into(),
                ..Default::default()
            },
        ]);

        let msgs = drag_msgs(raw, &model);

        match msgs.as_slice() {
            [UploadsMsg::FilesDropped(batch)] => {
                assert_eq!(
                    batch,
                    &vec![
                        IncomingFile::from_path(PathBuf::from("/tmp/photo.jpg")),
                        IncomingFile::from_bytes("web.png", bytes),
                    ]
                );
            }
            other => panic!("unexpected messages: {other:?}"),
        }
    }

    #[test]
    fn drop_without_usable_files_only_clears_drag() {
        let mut model = UploadsModel {
            drag_active: true,
            ..Default::default()
        };
        let msgs = drag_msgs(dropping(vec![egui::DroppedFile::default()]), &model);
        assert!(matches!(msgs.as_slice(), [UploadsMsg::FilesDropped(batch)] if batch.is_empty()));

        let mut cmds = Vec::new();
        for msg in msgs {
            assert!(update(&mut model, msg, &mut cmds).is_none());
        }
        assert!(!model.is_drag_active());
        assert!(cmds.is_empty());
    }

    #[test]
    fn failed_resolution_is_rejected_without_mutation() {
        let mut model = UploadsModel::default();
        let mut cmds = Vec::new();

        let event = update(
            &mut model,
            UploadsMsg::BatchFailed("Could not read x.png".into()),
            &mut cmds,
        );

        assert_eq!(event, Some(UploadsEvent::Rejected("Could not read x.png".into())));
        assert!(model.files().is_empty());
    }
}
