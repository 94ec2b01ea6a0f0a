use super::{GateError, Step, can_advance};
use crate::draft::Draft;
use crate::event::{EventBus, ExportRequest, WorkflowEvent};
use crate::package::PackageMode;

/// What a call to [`WorkflowController::advance`] or [`WorkflowController::retreat`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: Step, to: Step },
    /// Already at the first step, nothing to go back to
    Stayed,
    /// Advance on the last step: an export was requested instead of a step change
    ExportRequested,
}

/// Steps through Compose, Describe and Export, gating every forward move.
///
/// The current step lives only in memory; every fresh load starts at Compose.
/// Export never ends the workflow and may be requested any number of times.
#[derive(Debug, Default)]
pub struct WorkflowController {
    step: Step,
    mode: PackageMode,
    bus: EventBus,
}

impl WorkflowController {
    pub fn new(mode: PackageMode) -> Self {
        Self {
            step: Step::Compose,
            mode,
            bus: EventBus::new(),
        }
    }

    pub fn current_step(&self) -> Step {
        self.step
    }

    pub fn mode(&self) -> PackageMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PackageMode) {
        self.mode = mode;
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Moves forward if the gate for the current step passes.
    ///
    /// On the last step this publishes [`WorkflowEvent::ExportRequested`] with a copy of
    /// `draft` and the current packaging mode. A rejection leaves the step unchanged.
    pub fn advance(&mut self, draft: &Draft) -> Result<Transition, GateError> {
        let from = self.step;
        if let Err(error) = can_advance(from, draft) {
            self.bus.emit(WorkflowEvent::AdvanceRejected {
                step: from,
                error: error.clone(),
            });
            return Err(error);
        }

        match from.next() {
            Some(to) => {
                self.step = to;
                self.bus.emit(WorkflowEvent::StepChanged { from, to });
                Ok(Transition::Moved { from, to })
            }
            None => {
                self.bus.emit(WorkflowEvent::ExportRequested(ExportRequest {
                    draft: draft.clone(),
                    mode: self.mode,
                }));
                Ok(Transition::ExportRequested)
            }
        }
    }

    /// Moves back one step. Backward moves are never gated.
    pub fn retreat(&mut self) -> Transition {
        match self.step.prev() {
            Some(to) => {
                let from = self.step;
                self.step = to;
                self.bus.emit(WorkflowEvent::StepChanged { from, to });
                Transition::Moved { from, to }
            }
            None => Transition::Stayed,
        }
    }
}
