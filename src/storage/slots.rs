use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

const TRAINLOG_DIR: &str = ".trainlog";

/// Named byte slots under a `.trainlog/` data directory.
///
/// Each slot is a single file holding the latest serialized snapshot of one
/// collection. Writes replace the whole slot.
pub struct SlotStore {
    dir: PathBuf,
}

impl SlotStore {
    pub fn new(root: &Path) -> Self {
        Self {
            dir: root.join(TRAINLOG_DIR),
        }
    }

    /// Directory holding the slot files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read a slot's current value. Absent or unreadable slots yield `None`.
    pub fn read(&self, key: &str) -> Option<Vec<u8>> {
        fs::read(self.slot_path(key)).ok()
    }

    /// Replace a slot's value, creating the data directory on first write.
    pub fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.slot_path(key), bytes)?;
        Ok(())
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}
