//! Settings file watcher for hot-reload.
//!
//! Watches the directory holding the settings file (editors often replace
//! files instead of writing in place) and reports events for that one file.
//! Polled from the UI thread; nothing here blocks.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};

pub use crate::settings::default_settings_path;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    Created,
    Modified,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    // Canonical directory joined with the file name; event paths are
    // reported under the canonical directory.
    watched: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    // Dropping the watcher stops event delivery.
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> notify::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.send(res);
        })?;

        let file_name = path
            .file_name()
            .ok_or_else(|| notify::Error::generic("settings path has no file name"))?;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .canonicalize()
            .map_err(notify::Error::io)?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        let watched = dir.join(file_name);
        tracing::debug!(path = %watched.display(), "Watching settings file");

        Ok(Self {
            path,
            watched,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute form of [`path`](Self::path) that events are matched against.
    pub fn watched_path(&self) -> &Path {
        &self.watched
    }

    fn is_settings_file(&self, event_path: &Path) -> bool {
        if event_path == self.watched {
            return true;
        }
        event_path.file_name() == self.watched.file_name()
            && event_path
                .parent()
                .and_then(|dir| dir.canonicalize().ok())
                .is_some_and(|dir| Some(dir.as_path()) == self.watched.parent())
    }

    /// Next relevant event, if any arrived since the last poll.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        loop {
            let res = match self.rx.try_recv() {
                Ok(res) => res,
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    return Some(SettingsEvent::Error("watcher disconnected".to_string()));
                }
            };

            let event = match res {
                Ok(event) => event,
                Err(e) => return Some(SettingsEvent::Error(e.to_string())),
            };

            if !event.paths.iter().any(|p| self.is_settings_file(p)) {
                continue;
            }

            match event.kind {
                EventKind::Create(_) => return Some(SettingsEvent::Created),
                EventKind::Modify(_) => return Some(SettingsEvent::Modified),
                EventKind::Remove(_) => return Some(SettingsEvent::Deleted),
                _ => continue,
            }
        }
    }
}
