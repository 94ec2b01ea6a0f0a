use eframe::egui;

use crate::draft::DraftStore;
use crate::package::{self, DOCUMENT_FILE, MANIFEST_FILE, PackageMode, SCRIPT_FILE};
use crate::workflow::WorkflowController;

/// Step 3: packaging mode and a summary of what "Download" will produce
pub fn export_panel(ui: &mut egui::Ui, workflow: &mut WorkflowController, drafts: &DraftStore) {
    ui.heading("Download build artifacts");
    ui.separator();

    let mut mode = workflow.mode();
    ui.horizontal(|ui| {
        ui.label("Packaging:");
        ui.radio_value(&mut mode, PackageMode::Loose, PackageMode::Loose.label());
        ui.radio_value(&mut mode, PackageMode::Archive, PackageMode::Archive.label());
    });
    if mode != workflow.mode() {
        workflow.set_mode(mode);
    }

    ui.add_space(8.0);
    ui.label("Files:");
    match mode {
        PackageMode::Loose => {
            for name in [SCRIPT_FILE, DOCUMENT_FILE, MANIFEST_FILE] {
                ui.monospace(name);
            }
        }
        PackageMode::Archive => {
            ui.monospace(package::archive_name(drafts.manifest()));
            ui.label(format!(
                "containing {}, {} and {}",
                SCRIPT_FILE, DOCUMENT_FILE, MANIFEST_FILE
            ));
        }
    }

    ui.add_space(8.0);
    ui.label("Place the files in the catalog repository under:");
    ui.monospace(drafts.manifest().index_path());
}
