//! Turns a draft into downloadable files.
//!
//! Loose mode yields `README.md`, `template.sh` and `brick.json` as separate artifacts;
//! archive mode bundles the same three entries into `brick_<name>_<release>.zip`.

mod archive;

use serde::{Deserialize, Serialize};

use crate::delivery::Delivery;
use crate::draft::Draft;
use crate::error::{ExportError, PackageError};
use crate::manifest::{Manifest, ManifestField};

pub const DOCUMENT_FILE: &str = "README.md";
pub const SCRIPT_FILE: &str = "template.sh";
pub const MANIFEST_FILE: &str = "brick.json";
pub const ARCHIVE_EXTENSION: &str = "zip";

const NAME_FALLBACK: &str = "brick";
const RELEASE_FALLBACK: &str = "release";

/// How the exported bundle is handed over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageMode {
    /// Three separate downloads
    #[default]
    Loose,
    /// One compressed archive
    Archive,
}

impl PackageMode {
    pub fn label(self) -> &'static str {
        match self {
            PackageMode::Loose => "Separate files",
            PackageMode::Archive => "Zip archive",
        }
    }
}

/// A named file ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Artifact {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }
}

/// Replaces every character outside `[A-Za-z0-9._-]` with `_`.
/// An empty input becomes `fallback` first.
pub fn sanitize_segment(value: &str, fallback: &str) -> String {
    let value = if value.is_empty() { fallback } else { value };
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// `brick_<name>_<release>.zip`, with both segments sanitized
pub fn archive_name(manifest: &Manifest) -> String {
    format!(
        "brick_{}_{}.{}",
        sanitize_segment(manifest.get(ManifestField::Name), NAME_FALLBACK),
        sanitize_segment(manifest.get(ManifestField::Release), RELEASE_FALLBACK),
        ARCHIVE_EXTENSION
    )
}

/// The three bundle entries, in the order they are delivered and archived
pub fn bundle_files(draft: &Draft) -> Result<Vec<Artifact>, PackageError> {
    Ok(vec![
        Artifact::new(SCRIPT_FILE, draft.script.as_bytes()),
        Artifact::new(DOCUMENT_FILE, draft.document.as_bytes()),
        Artifact::new(MANIFEST_FILE, draft.manifest.to_pretty_json()?),
    ])
}

/// Serializes `draft` according to `mode`. Never touches the draft store.
pub fn package(draft: &Draft, mode: PackageMode) -> Result<Vec<Artifact>, PackageError> {
    let files = bundle_files(draft)?;
    match mode {
        PackageMode::Loose => Ok(files),
        PackageMode::Archive => {
            let bytes = archive::build(&files)?;
            Ok(vec![Artifact::new(archive_name(&draft.manifest), bytes)])
        }
    }
}

/// Packages `draft` and hands every artifact to `delivery`. Returns the delivered names.
pub fn export(
    draft: &Draft,
    mode: PackageMode,
    delivery: &mut dyn Delivery,
) -> Result<Vec<String>, ExportError> {
    let artifacts = package(draft, mode)?;
    let mut delivered = Vec::with_capacity(artifacts.len());
    for artifact in &artifacts {
        delivery.deliver(artifact)?;
        log::info!("Delivered {} ({} bytes)", artifact.filename, artifact.bytes.len());
        delivered.push(artifact.filename.clone());
    }
    Ok(delivered)
}
