use crate::{IdentitySlot, SlotError, SlotResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

/// Identity slot backed by `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>, key: &str) -> Self {
        let dir = dir.into();
        let path = dir.join(format!("{key}.json"));
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.dir
            .join(format!("{file_name}.tmp.{}", std::process::id()))
    }
}

impl IdentitySlot for FileSlot {
    fn read(&self) -> SlotResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No identity slot at {:?}", self.path);
                Ok(None)
            }
            // Not UTF-8, so it cannot hold a serialized identity.
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                Err(SlotError::corrupted(self.describe(), e.to_string()))
            }
            Err(e) => Err(SlotError::file_read(self.path.clone(), e)),
        }
    }

    /// Writes using the atomic pattern: temp file, fsync, rename.
    fn write(&self, contents: &str) -> SlotResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| SlotError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self.temp_path();

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SlotError::file_write(temp_path.clone(), e))?;

            file.write_all(contents.as_bytes())
                .map_err(|e| SlotError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SlotError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            SlotError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        info!("Wrote identity slot {:?}", self.path);
        Ok(())
    }

    fn remove(&self) -> SlotResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed identity slot {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SlotError::file_remove(self.path.clone(), e)),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
