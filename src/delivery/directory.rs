use std::fs;
use std::path::PathBuf;

use super::Delivery;
use crate::error::DeliveryError;
use crate::package::Artifact;

/// Writes artifacts into a directory, overwriting same-named files
#[derive(Debug, Clone)]
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Delivery for DirectoryDelivery {
    fn deliver(&mut self, artifact: &Artifact) -> Result<(), DeliveryError> {
        let path = self.dir.join(&artifact.filename);
        fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(&path, &artifact.bytes))
            .map_err(|source| DeliveryError::Write {
                filename: artifact.filename.clone(),
                source,
            })?;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_artifact_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut delivery = DirectoryDelivery::new(dir.path().join("out"));

        delivery
            .deliver(&Artifact::new("README.md", "Hello"))
            .unwrap();

        let written = fs::read_to_string(dir.path().join("out").join("README.md")).unwrap();
        assert_eq!(written, "Hello");
    }
}
