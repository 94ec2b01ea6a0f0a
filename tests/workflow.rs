use std::cell::RefCell;
use std::rc::Rc;

use brick_studio::delivery::{Delivery, MemoryDelivery};
use brick_studio::draft::Draft;
use brick_studio::error::DeliveryError;
use brick_studio::event::{EventHandler, ExportHandler, ExportOutcome, ExportReport, WorkflowEvent};
use brick_studio::manifest::{Manifest, ManifestField};
use brick_studio::package::{Artifact, PackageMode};
use brick_studio::workflow::{GateError, Step, Transition, WorkflowController, can_advance};

// Helper to build a draft that passes every gate
fn complete_draft() -> Draft {
    let mut manifest = Manifest::default();
    for (field, value) in [
        (ManifestField::Name, "demo"),
        (ManifestField::Description, "d"),
        (ManifestField::Variant, "v"),
        (ManifestField::Os, "ubuntu"),
        (ManifestField::Version, "22.04"),
        (ManifestField::Release, "v1.0"),
        (ManifestField::Author, "a"),
        (ManifestField::Contact, "c"),
    ] {
        manifest.set(field, value);
    }
    Draft {
        document: "Hello".to_owned(),
        script: "#!/bin/sh\necho hi".to_owned(),
        manifest,
    }
}

/// Records every event it sees
#[derive(Clone, Default)]
struct Recorder {
    events: Rc<RefCell<Vec<WorkflowEvent>>>,
}

impl EventHandler for Recorder {
    fn handle_event(&mut self, event: &WorkflowEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Refuses every artifact, like a browser that blocks downloads
struct RefusingDelivery;

impl Delivery for RefusingDelivery {
    fn deliver(&mut self, artifact: &Artifact) -> Result<(), DeliveryError> {
        Err(DeliveryError::Browser {
            filename: artifact.filename.clone(),
            reason: "blocked".to_owned(),
        })
    }
}

#[test]
fn test_compose_gate_requires_both_texts() {
    let mut draft = complete_draft();
    assert_eq!(can_advance(Step::Compose, &draft), Ok(()));

    draft.script = "   ".to_owned();
    assert_eq!(
        can_advance(Step::Compose, &draft),
        Err(GateError::MissingContent {
            document: false,
            script: true
        })
    );
}

#[test]
fn test_describe_gate_lists_the_seven_missing_fields() {
    let mut manifest = Manifest::default();
    manifest.set(ManifestField::Name, "demo");
    let draft = Draft {
        manifest,
        ..complete_draft()
    };

    let err = can_advance(Step::Describe, &draft).unwrap_err();
    assert_eq!(
        err.missing_fields(),
        &[
            ManifestField::Description,
            ManifestField::Variant,
            ManifestField::Os,
            ManifestField::Version,
            ManifestField::Release,
            ManifestField::Author,
            ManifestField::Contact,
        ]
    );
    assert!(
        err.reason()
            .ends_with("description, variant, os, version, release, author, contact")
    );
}

#[test]
fn test_describe_gate_rejects_exactly_the_empty_fields() {
    for blank in ManifestField::ALL {
        let mut draft = complete_draft();
        draft.manifest.set(blank, " \t");

        let err = can_advance(Step::Describe, &draft).unwrap_err();
        assert_eq!(err.missing_fields(), &[blank]);
    }
    assert_eq!(can_advance(Step::Describe, &complete_draft()), Ok(()));
}

#[test]
fn test_rejected_advance_keeps_step() {
    let mut workflow = WorkflowController::new(PackageMode::Loose);
    let recorder = Recorder::default();
    workflow.bus().subscribe(Box::new(recorder.clone()));

    let result = workflow.advance(&Draft::default());

    assert!(result.is_err());
    assert_eq!(workflow.current_step(), Step::Compose);
    assert!(matches!(
        recorder.events.borrow().as_slice(),
        [WorkflowEvent::AdvanceRejected {
            step: Step::Compose,
            ..
        }]
    ));
}

#[test]
fn test_advance_and_retreat_walk_the_steps() {
    let mut workflow = WorkflowController::default();
    let draft = complete_draft();

    assert_eq!(workflow.retreat(), Transition::Stayed);
    assert_eq!(
        workflow.advance(&draft),
        Ok(Transition::Moved {
            from: Step::Compose,
            to: Step::Describe
        })
    );
    assert_eq!(
        workflow.advance(&draft),
        Ok(Transition::Moved {
            from: Step::Describe,
            to: Step::Export
        })
    );
    assert_eq!(workflow.current_step(), Step::Export);

    // Going back is never gated, even with an empty draft in hand.
    assert_eq!(
        workflow.retreat(),
        Transition::Moved {
            from: Step::Export,
            to: Step::Describe
        }
    );
    assert_eq!(workflow.current_step(), Step::Describe);
}

#[test]
fn test_advance_on_last_step_requests_export() {
    let mut workflow = WorkflowController::new(PackageMode::Archive);
    let recorder = Recorder::default();
    workflow.bus().subscribe(Box::new(recorder.clone()));
    let draft = complete_draft();

    workflow.advance(&draft).unwrap();
    workflow.advance(&draft).unwrap();
    assert_eq!(workflow.advance(&draft), Ok(Transition::ExportRequested));
    assert_eq!(workflow.advance(&draft), Ok(Transition::ExportRequested));
    assert_eq!(workflow.current_step(), Step::Export);

    let exports: Vec<_> = recorder
        .events
        .borrow()
        .iter()
        .filter_map(|event| match event {
            WorkflowEvent::ExportRequested(request) => Some(request.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(exports.len(), 2);
    assert_eq!(exports[0].mode, PackageMode::Archive);
    assert_eq!(exports[0].draft, draft);
}

#[test]
fn test_export_handler_delivers_on_request() {
    let mut workflow = WorkflowController::new(PackageMode::Loose);
    let delivery = MemoryDelivery::new();
    let report = ExportReport::new();
    workflow
        .bus()
        .subscribe(Box::new(ExportHandler::new(Box::new(delivery.clone()), report.clone())));
    let draft = complete_draft();

    workflow.advance(&draft).unwrap();
    workflow.advance(&draft).unwrap();
    workflow.advance(&draft).unwrap();

    assert_eq!(
        report.take(),
        Some(ExportOutcome::Delivered {
            files: vec![
                "template.sh".to_owned(),
                "README.md".to_owned(),
                "brick.json".to_owned()
            ],
            index_path: "index/ubuntu/22.04/v/".to_owned(),
        })
    );
    assert_eq!(report.peek(), None);
    assert_eq!(delivery.delivered().len(), 3);
}

#[test]
fn test_mode_change_applies_to_next_export() {
    let mut workflow = WorkflowController::new(PackageMode::Loose);
    let delivery = MemoryDelivery::new();
    workflow
        .bus()
        .subscribe(Box::new(ExportHandler::new(Box::new(delivery.clone()), ExportReport::new())));
    let draft = complete_draft();

    workflow.advance(&draft).unwrap();
    workflow.advance(&draft).unwrap();
    workflow.set_mode(PackageMode::Archive);
    workflow.advance(&draft).unwrap();

    let delivered = delivery.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].filename, "brick_demo_v1.0.zip");
}

#[test]
fn test_failed_delivery_is_reported_and_keeps_step() {
    let mut workflow = WorkflowController::new(PackageMode::Archive);
    let report = ExportReport::new();
    workflow
        .bus()
        .subscribe(Box::new(ExportHandler::new(Box::new(RefusingDelivery), report.clone())));
    let draft = complete_draft();

    workflow.advance(&draft).unwrap();
    workflow.advance(&draft).unwrap();
    assert_eq!(workflow.advance(&draft), Ok(Transition::ExportRequested));

    assert_eq!(
        report.take(),
        Some(ExportOutcome::Failed {
            reason: "Browser download failed for brick_demo_v1.0.zip: blocked".to_owned(),
        })
    );
    assert_eq!(workflow.current_step(), Step::Export);

    // A later attempt goes through the same path again.
    assert_eq!(workflow.advance(&draft), Ok(Transition::ExportRequested));
    assert!(matches!(report.take(), Some(ExportOutcome::Failed { .. })));
}
