// Session module - persists console state between runs
//
// One JSON document holding the last route and the start-route selection.
// Writes go through a small worker task fed by a channel so the UI thread
// never touches the filesystem; the whole file is rewritten on every save.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

use crate::form::SelectProperty;

/// Wire format version for [`Session`]
pub const SESSION_VERSION: u32 = 1;

/// Console state worth restoring on the next run.
///
/// The start-route selection is stored as a full holder snapshot, so the
/// permitted routes and the deselection policy travel with the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub route: String,
    pub start_route: SelectProperty<String>,
}

impl Session {
    pub fn new(route: impl Into<String>, start_route: SelectProperty<String>) -> Self {
        Self {
            version: SESSION_VERSION,
            saved_at: Utc::now(),
            route: route.into(),
            start_route,
        }
    }

    /// Load a saved session, treating anything unusable as absent.
    ///
    /// A missing file, a parse failure or an unsupported version all yield
    /// `None`; only real I/O trouble is an error. A stale session file must
    /// never stop the console from starting.
    pub fn load(path: &Path) -> Result<Option<Session>> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).context("Failed to read session file"),
        };
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.version == SESSION_VERSION => Ok(Some(session)),
            Ok(session) => {
                tracing::warn!(
                    found = session.version,
                    "ignoring session file with unsupported version"
                );
                Ok(None)
            }
            Err(e) => {
                tracing::warn!("ignoring unreadable session file: {e}");
                Ok(None)
            }
        }
    }
}

/// Default location of the session file
pub fn session_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("viewdeck"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("session.json")
}

/// Handles writing session snapshots to disk
pub struct SessionWriter {
    path: PathBuf,
    session_rx: mpsc::Receiver<Session>,
}

impl SessionWriter {
    /// Create a new session writer targeting `path`
    pub fn new(path: PathBuf, session_rx: mpsc::Receiver<Session>) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create session directory")?;
        }
        Ok(Self { path, session_rx })
    }

    /// Run the writer loop, saving snapshots as they arrive
    ///
    /// This runs in its own async task and continues until the channel is
    /// closed, which happens when the app drops its sender on shutdown.
    pub async fn run(mut self) -> Result<()> {
        tracing::info!("Session writer started, file: {:?}", self.path);

        while let Some(session) = self.session_rx.recv().await {
            if let Err(e) = self.write_session(&session) {
                tracing::error!("Failed to write session: {:?}", e);
                // Continue processing even if one write fails
            }
        }

        tracing::info!("Session writer shutting down");
        Ok(())
    }

    /// Replace the session file with the given snapshot
    fn write_session(&self, session: &Session) -> Result<()> {
        let json =
            serde_json::to_string_pretty(session).context("Failed to serialize session")?;
        fs::write(&self.path, json).context("Failed to write session file")?;
        tracing::debug!(route = %session.route, "session saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::SingleSelect;
    use crate::nav::{ROUTE_HOME, ROUTE_SETTINGS};

    fn start_route_property() -> SelectProperty<String> {
        SelectProperty::new(
            "start_route",
            SingleSelect::with_deselection([ROUTE_HOME.to_string(), ROUTE_SETTINGS.to_string()]),
        )
    }

    #[test]
    fn session_round_trips_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut start_route = start_route_property();
        start_route.set(ROUTE_SETTINGS.to_string());
        let session = Session::new(ROUTE_HOME, start_route);

        fs::write(&path, serde_json::to_string(&session).unwrap()).unwrap();
        let restored = Session::load(&path).unwrap().unwrap();

        assert_eq!(restored, session);
        assert_eq!(restored.route, ROUTE_HOME);
        assert_eq!(restored.start_route.get(), Ok(ROUTE_SETTINGS.to_string()));
    }

    #[test]
    fn missing_session_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");

        assert_eq!(Session::load(&path).unwrap(), None);
    }

    #[test]
    fn unsupported_version_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = Session::new(ROUTE_HOME, start_route_property());
        session.version = 99;
        fs::write(&path, serde_json::to_string(&session).unwrap()).unwrap();

        assert_eq!(Session::load(&path).unwrap(), None);
    }

    #[test]
    fn corrupt_session_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        assert_eq!(Session::load(&path).unwrap(), None);
    }

    #[test]
    fn writer_replaces_the_file_on_each_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let (_tx, rx) = mpsc::channel(1);
        let writer = SessionWriter::new(path.clone(), rx).unwrap();

        let first = Session::new(ROUTE_HOME, start_route_property());
        writer.write_session(&first).unwrap();
        let second = Session::new(ROUTE_SETTINGS, start_route_property());
        writer.write_session(&second).unwrap();

        let restored = Session::load(&path).unwrap().unwrap();
        assert_eq!(restored.route, ROUTE_SETTINGS);
    }
}
