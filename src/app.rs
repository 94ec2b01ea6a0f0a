use std::time::Duration;

use eframe::egui;

use crate::components::{DialogChoice, MessageDialog};
use crate::config::EditorConfig;
use crate::delivery::{self, Delivery};
use crate::draft::{DraftStore, SlotKind};
use crate::event::{ExportHandler, ExportOutcome, ExportReport, LogHandler, WorkflowEvent};
use crate::panels::{self, NavAction};
use crate::storage::{self, KeyValueStore};
use crate::workflow::{Step, Transition, WorkflowController};

/// Storage namespace for the native build
pub const APP_ID: &str = "brick_studio";

/// At most one dialog is open at a time
#[derive(Debug, Clone, PartialEq, Eq)]
enum Dialog {
    Rejected(String),
    ConfirmClear(SlotKind),
    Exported(ExportOutcome),
}

/// The bundle editor.
///
/// Drafts persist through their slots; the workflow step is never saved and every
/// launch starts at the first step.
pub struct BrickApp {
    drafts: DraftStore,
    workflow: WorkflowController,
    export_report: ExportReport,
    dialog: Option<Dialog>,
}

impl BrickApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let store = storage::open_default(APP_ID);
        let config = EditorConfig::load(&*store);
        let delivery = delivery::platform_delivery(&config);
        Self::with_parts(store, config, delivery)
    }

    pub fn with_parts(
        store: Box<dyn KeyValueStore>,
        config: EditorConfig,
        delivery: Box<dyn Delivery>,
    ) -> Self {
        let drafts = DraftStore::open(store, &config);
        let workflow = WorkflowController::new(config.package_mode);
        let export_report = ExportReport::new();

        workflow.bus().subscribe(Box::new(LogHandler));
        workflow
            .bus()
            .subscribe(Box::new(ExportHandler::new(delivery, export_report.clone())));

        Self {
            drafts,
            workflow,
            export_report,
            dialog: None,
        }
    }

    pub fn drafts(&self) -> &DraftStore {
        &self.drafts
    }

    pub fn drafts_mut(&mut self) -> &mut DraftStore {
        &mut self.drafts
    }

    pub fn current_step(&self) -> Step {
        self.workflow.current_step()
    }

    fn next(&mut self) {
        let draft = self.drafts.snapshot();
        match self.workflow.advance(&draft) {
            Ok(Transition::ExportRequested) => {
                if let Some(outcome) = self.export_report.take() {
                    self.dialog = Some(Dialog::Exported(outcome));
                }
            }
            Ok(_) => {}
            Err(err) => self.dialog = Some(Dialog::Rejected(err.reason())),
        }
    }

    fn back(&mut self) {
        self.workflow.retreat();
    }

    fn clear(&mut self, kind: SlotKind) {
        self.drafts.clear(kind);
        self.workflow.bus().emit(WorkflowEvent::DraftCleared(kind));
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.dialog.clone() else {
            return;
        };

        match dialog {
            Dialog::Rejected(reason) => {
                let choice = MessageDialog::new("Cannot continue", &reason)
                    .confirm_text("Got it")
                    .show(ctx);
                if choice.is_some() {
                    self.dialog = None;
                }
            }
            Dialog::ConfirmClear(kind) => {
                let body = format!(
                    "Discard the saved {} draft? This removes it from local storage.",
                    kind.label()
                );
                match MessageDialog::new("Clear draft", &body)
                    .confirm_text("Clear")
                    .cancel_text("Cancel")
                    .show(ctx)
                {
                    Some(DialogChoice::Confirm) => {
                        self.clear(kind);
                        self.dialog = None;
                    }
                    Some(DialogChoice::Cancel) => self.dialog = None,
                    None => {}
                }
            }
            Dialog::Exported(outcome) => {
                let (title, body) = match outcome {
                    ExportOutcome::Delivered { files, index_path } => (
                        "Download ready",
                        format!(
                            "Saved {}.\nPlace the bundle in the catalog repository under {}",
                            files.join(", "),
                            index_path
                        ),
                    ),
                    ExportOutcome::Failed { reason } => ("Export failed", reason),
                };
                if MessageDialog::new(title, &body).show(ctx).is_some() {
                    self.dialog = None;
                }
            }
        }
    }
}

impl eframe::App for BrickApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time));
        self.drafts.tick(now);
        if let Some(wait) = self.drafts.next_flush_in(now) {
            ctx.request_repaint_after(wait);
        }

        let step = self.workflow.current_step();

        egui::TopBottomPanel::top("steps_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            panels::steps_panel(ui, step);
            ui.add_space(4.0);
        });

        let nav = egui::TopBottomPanel::bottom("nav_panel")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let action = panels::nav_panel(ui, step);
                ui.add_space(4.0);
                action
            })
            .inner;

        egui::CentralPanel::default().show(ctx, |ui| {
            let clear = match step {
                Step::Compose => panels::compose_panel(ui, &mut self.drafts, now),
                Step::Describe => panels::describe_panel(ui, &mut self.drafts, now),
                Step::Export => {
                    panels::export_panel(ui, &mut self.workflow, &self.drafts);
                    None
                }
            };
            if let Some(kind) = clear {
                self.dialog = Some(Dialog::ConfirmClear(kind));
            }
        });

        // Ignore navigation while a dialog is up.
        if self.dialog.is_none() {
            match nav {
                Some(NavAction::Back) => self.back(),
                Some(NavAction::Next) => self.next(),
                None => {}
            }
        }

        self.show_dialog(ctx);
    }

    /// Runs on the auto-save timer, on native shutdown and on the web page's unload.
    /// Drafts live in their own store, so eframe's storage is left alone.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        let flushed = self.drafts.flush_all();
        if flushed > 0 {
            log::debug!("Flushed {} pending drafts on save", flushed);
        }
    }
}
