use std::sync::Arc;

use parking_lot::Mutex;

use crate::delivery::Delivery;
use crate::event::{EventHandler, ExportRequest, WorkflowEvent};
use crate::package;

/// The result of the most recent export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Delivered {
        files: Vec<String>,
        /// Where the bundle goes in the catalog repository
        index_path: String,
    },
    Failed {
        reason: String,
    },
}

/// Shared slot the export handler reports into and the UI reads from
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    latest: Arc<Mutex<Option<ExportOutcome>>>,
}

impl ExportReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, outcome: ExportOutcome) {
        *self.latest.lock() = Some(outcome);
    }

    /// Takes the pending outcome so it is shown once
    pub fn take(&self) -> Option<ExportOutcome> {
        self.latest.lock().take()
    }

    pub fn peek(&self) -> Option<ExportOutcome> {
        self.latest.lock().clone()
    }
}

/// Packages and delivers the draft whenever an export is requested
pub struct ExportHandler {
    delivery: Box<dyn Delivery>,
    report: ExportReport,
}

impl std::fmt::Debug for ExportHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportHandler")
            .field("report", &self.report)
            .finish_non_exhaustive()
    }
}

impl ExportHandler {
    pub fn new(delivery: Box<dyn Delivery>, report: ExportReport) -> Self {
        Self { delivery, report }
    }

    fn run(&mut self, request: &ExportRequest) -> ExportOutcome {
        match package::export(&request.draft, request.mode, self.delivery.as_mut()) {
            Ok(files) => ExportOutcome::Delivered {
                files,
                index_path: request.draft.manifest.index_path(),
            },
            Err(err) => {
                log::error!("Export failed: {}", err);
                ExportOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}

impl EventHandler for ExportHandler {
    fn handle_event(&mut self, event: &WorkflowEvent) {
        if let WorkflowEvent::ExportRequested(request) = event {
            let outcome = self.run(request);
            self.report.record(outcome);
        }
    }
}

/// Logs every workflow event
#[derive(Debug, Default)]
pub struct LogHandler;

impl EventHandler for LogHandler {
    fn handle_event(&mut self, event: &WorkflowEvent) {
        match event {
            WorkflowEvent::StepChanged { from, to } => {
                log::info!("Step changed: {:?} -> {:?}", from, to);
            }
            WorkflowEvent::AdvanceRejected { step, error } => {
                log::info!("Cannot leave {:?}: {}", step, error);
            }
            WorkflowEvent::ExportRequested(request) => {
                log::info!("Export requested ({:?})", request.mode);
            }
            WorkflowEvent::DraftCleared(kind) => {
                log::info!("Draft cleared: {}", kind.label());
            }
        }
    }
}
