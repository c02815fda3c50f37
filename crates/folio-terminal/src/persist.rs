//! Saving and restoring the durable part of a session.
//!
//! Only the theme and the persistence flag always survive. History and
//! recall lists are written only when persistence is on.

use serde::{Deserialize, Serialize};

use folio_store::KeyValueStore;
use folio_types::error::Result;

use crate::session::{HistoryEntry, SessionState};

/// The stored form of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub theme: String,
    #[serde(default)]
    pub persist_history: bool,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub command_history: Vec<String>,
}

impl SessionSnapshot {
    /// Capture a session, leaving the lists empty unless persistence is on.
    pub fn capture(session: &SessionState) -> Self {
        let persist = session.persist_history();
        Self {
            theme: session.theme().to_string(),
            persist_history: persist,
            history: if persist { session.history().to_vec() } else { Vec::new() },
            command_history: if persist {
                session.command_history().to_vec()
            } else {
                Vec::new()
            },
        }
    }

    /// Overwrite the session's persisted fields with this snapshot.
    pub fn apply_to(self, session: &mut SessionState) {
        session.restore(
            self.theme,
            self.persist_history,
            self.history,
            self.command_history,
        );
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Write the session's snapshot under `key`.
pub fn save_session<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    session: &SessionState,
) -> Result<()> {
    let json = SessionSnapshot::capture(session).to_json()?;
    store.set(key, &json)?;
    log::debug!("Saved session under {key} ({} bytes)", json.len());
    Ok(())
}

/// Read the snapshot stored under `key`, if any.
pub fn load_snapshot<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<SessionSnapshot>> {
    match store.get(key)? {
        Some(text) => Ok(Some(SessionSnapshot::from_json(&text)?)),
        None => Ok(None),
    }
}
