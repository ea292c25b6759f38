// src/fs/mock.rs

use super::FileSystem;
use crate::errors::{HudError, Result};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File { content: Vec<u8>, modified: u64 },
    Dir(Vec<String>), // List of child names
}

#[derive(Debug, Default)]
struct MockState {
    entries: HashMap<PathBuf, MockEntry>,
    /// Logical clock, in seconds since the epoch. Every write/touch ticks it.
    clock: u64,
}

/// In-memory filesystem with a logical modification clock.
///
/// Each write or touch gets a strictly later mtime than anything before it,
/// so "newest file" logic is deterministic in tests.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<MockState>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let fs = Self::default();
        {
            let mut state = fs.state.lock().unwrap();
            state
                .entries
                .insert(PathBuf::from("/"), MockEntry::Dir(Vec::new()));
        }
        fs
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let mut state = self.state.lock().unwrap();
        state.clock += 1;
        let modified = state.clock;
        Self::insert_file(&mut state, path.as_ref(), content.into(), modified);
    }

    /// Add a file with an explicit mtime (seconds since the epoch).
    pub fn add_file_at(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>, modified: u64) {
        let mut state = self.state.lock().unwrap();
        state.clock = state.clock.max(modified);
        Self::insert_file(&mut state, path.as_ref(), content.into(), modified);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut state = self.state.lock().unwrap();
        Self::ensure_dir_entry(&mut state.entries, path.as_ref());
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut state = self.state.lock().unwrap();
        state.entries.remove(path);
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            if let Some(MockEntry::Dir(children)) = state.entries.get_mut(parent) {
                children.retain(|c| c.as_str() != name.to_string_lossy());
            }
        }
    }

    fn insert_file(state: &mut MockState, path: &Path, content: Vec<u8>, modified: u64) {
        state
            .entries
            .insert(path.to_path_buf(), MockEntry::File { content, modified });
        if let Some(parent) = path.parent() {
            Self::ensure_dir_entry(&mut state.entries, parent);
            Self::link_child(&mut state.entries, parent, path);
        }
    }

    fn ensure_dir_entry(entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        if entries.contains_key(path) {
            return;
        }
        entries.insert(path.to_path_buf(), MockEntry::Dir(Vec::new()));
        if let Some(parent) = path.parent() {
            if parent != path {
                Self::ensure_dir_entry(entries, parent);
                Self::link_child(entries, parent, path);
            }
        }
    }

    fn link_child(entries: &mut HashMap<PathBuf, MockEntry>, parent: &Path, child: &Path) {
        if let Some(MockEntry::Dir(children)) = entries.get_mut(parent) {
            if let Some(name) = child.file_name().and_then(|n| n.to_str()) {
                if !children.iter().any(|c| c == name) {
                    children.push(name.to_string());
                }
            }
        }
    }

    fn not_found(path: &Path) -> HudError {
        HudError::io(path, io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let state = self.state.lock().unwrap();
        match state.entries.get(path) {
            Some(MockEntry::File { content, .. }) => Ok(content.clone()),
            Some(MockEntry::Dir(_)) => Err(HudError::io(
                path,
                io::Error::new(io::ErrorKind::IsADirectory, "is a directory"),
            )),
            None => Err(Self::not_found(path)),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.add_file(path, contents);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.state.lock().unwrap().entries.contains_key(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        matches!(state.entries.get(path), Some(MockEntry::File { .. }))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.add_dir(path);
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let state = self.state.lock().unwrap();
        match state.entries.get(path) {
            Some(MockEntry::Dir(children)) => {
                Ok(children.iter().map(|name| path.join(name)).collect())
            }
            _ => Err(Self::not_found(path)),
        }
    }

    fn modified(&self, path: &Path) -> Result<SystemTime> {
        let state = self.state.lock().unwrap();
        match state.entries.get(path) {
            Some(MockEntry::File { modified, .. }) => {
                Ok(SystemTime::UNIX_EPOCH + Duration::from_secs(*modified))
            }
            Some(MockEntry::Dir(_)) => Ok(SystemTime::UNIX_EPOCH),
            None => Err(Self::not_found(path)),
        }
    }

    fn touch(&self, path: &Path) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.clock += 1;
        let now = state.clock;
        match state.entries.get_mut(path) {
            Some(MockEntry::File { modified, .. }) => {
                *modified = now;
                Ok(())
            }
            _ => Err(Self::not_found(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_file_registers_parent_directories() {
        let fs = MockFileSystem::new();
        fs.add_file("/tmp/mangohud.abcd", "fps_limit=60\n");

        assert!(fs.is_file(Path::new("/tmp/mangohud.abcd")));
        assert_eq!(
            fs.read_dir(Path::new("/tmp")).unwrap(),
            vec![PathBuf::from("/tmp/mangohud.abcd")]
        );
        assert_eq!(
            fs.read_dir(Path::new("/")).unwrap(),
            vec![PathBuf::from("/tmp")]
        );
    }

    #[test]
    fn touch_ticks_the_logical_clock() {
        let fs = MockFileSystem::new();
        fs.add_file("/tmp/a", "a");
        let before = fs.modified(Path::new("/tmp/a")).unwrap();
        fs.touch(Path::new("/tmp/a")).unwrap();
        assert!(fs.modified(Path::new("/tmp/a")).unwrap() > before);
    }

    #[test]
    fn removed_files_disappear_from_listing() {
        let fs = MockFileSystem::new();
        fs.add_file("/proc/42/cmdline", "mangoapp");
        fs.remove("/proc/42/cmdline");

        assert!(fs.read_dir(Path::new("/proc/42")).unwrap().is_empty());
        assert!(fs.read(Path::new("/proc/42/cmdline")).unwrap_err().is_not_found());
    }
}
