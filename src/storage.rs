//! Snapshot persistence behind the stores.
//!
//! Each collection serializes to one named slot. The file-backed
//! implementation keeps one JSON file per slot under a data directory and
//! writes atomically (temp file + rename), so readers never observe a
//! partial snapshot. The in-memory implementation backs tests and
//! ephemeral runs.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Durable key-value slots, one serialized collection per slot.
///
/// Write failures propagate to the caller; the in-memory collection stays
/// authoritative for the rest of the process either way.
pub trait SnapshotStore {
    /// Read the payload stored under `slot`, if any.
    fn read(&self, slot: &str) -> io::Result<Option<String>>;
    /// Replace the payload stored under `slot`.
    fn write(&self, slot: &str, payload: &str) -> io::Result<()>;
}

/// One JSON file per slot under a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl SnapshotStore for JsonFileStore {
    fn read(&self, slot: &str) -> io::Result<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let mut buf = String::new();
        File::open(&path)?.read_to_string(&mut buf)?;
        Ok(Some(buf))
    }

    fn write(&self, slot: &str, payload: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.slot_path(slot);
        // Atomic-ish write via temp + rename.
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        f.write_all(payload.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }
}

/// In-memory slots shared between clones of the same store.
///
/// Cloning hands out another handle onto the same map, so several
/// collection stores can share one storage collaborator the way they
/// share one data directory in the file-backed case.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self, slot: &str) -> io::Result<Option<String>> {
        Ok(self.slots.borrow().get(slot).cloned())
    }

    fn write(&self, slot: &str, payload: &str) -> io::Result<()> {
        self.slots.borrow_mut().insert(slot.to_string(), payload.to_string());
        Ok(())
    }
}
