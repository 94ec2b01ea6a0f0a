use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::{Artifact, SCRIPT_FILE};
use crate::error::PackageError;

/// Deflates `entries` into an in-memory zip.
///
/// Entry timestamps are pinned to the zip epoch so the same entries always produce
/// the same bytes.
pub(super) fn build(entries: &[Artifact]) -> Result<Vec<u8>, PackageError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for entry in entries {
        let permissions = if entry.filename == SCRIPT_FILE { 0o755 } else { 0o644 };
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
            .unix_permissions(permissions);
        writer.start_file(entry.filename.as_str(), options)?;
        writer.write_all(&entry.bytes)?;
    }

    let bytes = writer.finish()?.into_inner();
    log::debug!("Built archive with {} entries ({} bytes)", entries.len(), bytes.len());
    Ok(bytes)
}
