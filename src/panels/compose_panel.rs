use std::time::Duration;

use eframe::egui;

use crate::draft::{DraftStore, SlotKind};
use crate::package::{DOCUMENT_FILE, SCRIPT_FILE};

/// Edits one text fragment. Returns the new text if it changed and whether a clear was asked for.
fn text_editor(ui: &mut egui::Ui, title: &str, text: &str, hint: &str) -> (Option<String>, bool) {
    let mut clear = false;
    ui.horizontal(|ui| {
        ui.heading(title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            clear = ui.button("Clear draft").clicked();
        });
    });

    let mut edited = text.to_owned();
    let response = egui::ScrollArea::vertical()
        .id_salt(title)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut edited)
                    .code_editor()
                    .hint_text(hint)
                    .desired_rows(24)
                    .desired_width(f32::INFINITY),
            )
        })
        .inner;

    (response.changed().then_some(edited), clear)
}

/// Step 1: the usage document and the launch script side by side
pub fn compose_panel(ui: &mut egui::Ui, drafts: &mut DraftStore, now: Duration) -> Option<SlotKind> {
    let mut clear = None;

    ui.columns(2, |columns| {
        let (document, clear_document) = text_editor(
            &mut columns[0],
            DOCUMENT_FILE,
            drafts.document(),
            "# Usage\n\nDescribe what the template does.",
        );
        if let Some(text) = document {
            drafts.set_document(text, now);
        }
        if clear_document {
            clear = Some(SlotKind::Document);
        }

        let (script, clear_script) = text_editor(
            &mut columns[1],
            SCRIPT_FILE,
            drafts.script(),
            "#!/bin/sh\n",
        );
        if let Some(text) = script {
            drafts.set_script(text, now);
        }
        if clear_script {
            clear = Some(SlotKind::Script);
        }
    });

    clear
}
