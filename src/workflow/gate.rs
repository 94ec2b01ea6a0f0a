use thiserror::Error;

use super::Step;
use crate::draft::Draft;
use crate::manifest::ManifestField;

/// Why the workflow refused to move forward
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("{}", missing_content_message(.document, .script))]
    MissingContent { document: bool, script: bool },

    #[error("Manifest is incomplete, missing: {}", join_fields(.0))]
    MissingFields(Vec<ManifestField>),
}

impl GateError {
    /// Missing manifest fields in declaration order; empty for other rejections
    pub fn missing_fields(&self) -> &[ManifestField] {
        match self {
            GateError::MissingFields(fields) => fields,
            GateError::MissingContent { .. } => &[],
        }
    }

    /// The human-readable reason shown to the user
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

fn join_fields(fields: &[ManifestField]) -> String {
    fields
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}

fn missing_content_message(document: &bool, script: &bool) -> String {
    match (*document, *script) {
        (true, true) => "Write the document and the script before continuing".to_owned(),
        (true, false) => "Write the document before continuing".to_owned(),
        _ => "Write the script before continuing".to_owned(),
    }
}

/// Decides whether the workflow may leave `step` given the current draft.
///
/// Pure: it looks at `draft` as it is now and nothing else.
pub fn can_advance(step: Step, draft: &Draft) -> Result<(), GateError> {
    match step {
        Step::Compose => {
            let document = draft.document.trim().is_empty();
            let script = draft.script.trim().is_empty();
            if document || script {
                return Err(GateError::MissingContent { document, script });
            }
            Ok(())
        }
        Step::Describe => {
            let missing = draft.manifest.missing_fields();
            if missing.is_empty() {
                Ok(())
            } else {
                Err(GateError::MissingFields(missing))
            }
        }
        Step::Export => Ok(()),
    }
}
