use std::time::Duration;

use eframe::egui;

use crate::draft::{DraftStore, SlotKind};
use crate::manifest::ManifestField;
use crate::package::MANIFEST_FILE;

/// Step 2: the manifest form with a live `brick.json` preview
pub fn describe_panel(ui: &mut egui::Ui, drafts: &mut DraftStore, now: Duration) -> Option<SlotKind> {
    let mut clear = None;

    ui.horizontal(|ui| {
        ui.heading("Bundle information");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Clear draft").clicked() {
                clear = Some(SlotKind::Manifest);
            }
        });
    });
    ui.separator();

    egui::Grid::new("manifest_grid")
        .num_columns(2)
        .spacing([24.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            for field in ManifestField::ALL {
                ui.label(field.label());
                let mut value = drafts.manifest().get(field).to_owned();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut value)
                        .hint_text(field.hint())
                        .desired_width(320.0),
                );
                if response.changed() {
                    drafts.set_manifest_field(field, value, now);
                }
                ui.end_row();
            }
        });

    ui.add_space(12.0);
    ui.label(format!("{} preview", MANIFEST_FILE));
    let preview = drafts
        .manifest()
        .to_pretty_json()
        .unwrap_or_else(|_| "{}".to_owned());
    egui::ScrollArea::vertical()
        .id_salt("manifest_preview")
        .show(ui, |ui| {
            ui.code(preview);
        });

    clear
}
