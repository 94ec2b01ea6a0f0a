use crate::draft::{Draft, SlotKind};
use crate::package::PackageMode;
use crate::workflow::{GateError, Step};

/// Everything an export handler needs, captured when the user presses "Download"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub draft: Draft,
    pub mode: PackageMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowEvent {
    StepChanged {
        from: Step,
        to: Step,
    },
    AdvanceRejected {
        step: Step,
        error: GateError,
    },
    ExportRequested(ExportRequest),
    DraftCleared(SlotKind),
}
