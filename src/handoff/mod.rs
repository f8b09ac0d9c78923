use crate::shared::fs_atomic::atomic_write_file;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A record older than this is treated as absent on read. Checked at read
/// time only; there is no active timer.
pub const HANDOFF_VALIDITY_MS: i64 = 5 * 60 * 1000;

pub const HANDOFF_FILE_NAME: &str = "pending-command.json";
pub const PICKUP_FILE_NAME: &str = "next-command.txt";

#[derive(Debug, thiserror::Error)]
pub enum HandoffError {
    #[error("failed to create state directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write handoff state {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode handoff state {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PendingHandoff {
    pub command: String,
    pub created_at_epoch_ms: i64,
}

/// Single-slot store for the one command that may be waiting for the next
/// session start. Anonymous, global, last-writer-wins.
#[derive(Debug, Clone)]
pub struct HandoffStore {
    state_root: PathBuf,
}

impl HandoffStore {
    pub fn from_state_root(state_root: &Path) -> Self {
        Self {
            state_root: state_root.to_path_buf(),
        }
    }

    pub fn handoff_path(&self) -> PathBuf {
        self.state_root.join(HANDOFF_FILE_NAME)
    }

    pub fn pickup_path(&self) -> PathBuf {
        self.state_root.join(PICKUP_FILE_NAME)
    }

    pub fn write(&self, handoff: &PendingHandoff) -> Result<(), HandoffError> {
        let path = self.handoff_path();
        fs::create_dir_all(&self.state_root).map_err(|source| HandoffError::CreateDir {
            path: self.state_root.display().to_string(),
            source,
        })?;
        let encoded = serde_json::to_vec_pretty(handoff).map_err(|source| HandoffError::Encode {
            path: path.display().to_string(),
            source,
        })?;
        atomic_write_file(&path, &encoded).map_err(|source| HandoffError::Write {
            path: path.display().to_string(),
            source,
        })
    }

    /// Atomic read-and-delete. The rename onto a process-unique claim path
    /// is the take: of two interleaved consumers, one rename fails and that
    /// consumer sees `None`. A read always removes the record, expired or
    /// not, and every failure path also resolves to `None`.
    pub fn consume(&self, now_ms: i64) -> Option<PendingHandoff> {
        let claim = self.state_root.join(format!(
            ".{HANDOFF_FILE_NAME}.claim-{}",
            std::process::id()
        ));
        fs::rename(self.handoff_path(), &claim).ok()?;
        let raw = fs::read_to_string(&claim).ok();
        let _ = fs::remove_file(&claim);
        let handoff: PendingHandoff = serde_json::from_str(&raw?).ok()?;
        if now_ms.saturating_sub(handoff.created_at_epoch_ms) > HANDOFF_VALIDITY_MS {
            return None;
        }
        Some(handoff)
    }

    /// Non-destructive read for the status surface; expiry is reported, not
    /// enforced, so an expired record stays visible until something consumes
    /// it.
    pub fn peek(&self) -> Option<PendingHandoff> {
        let raw = fs::read_to_string(self.handoff_path()).ok()?;
        serde_json::from_str(&raw).ok()
    }

    pub fn clear(&self) -> bool {
        fs::remove_file(self.handoff_path()).is_ok()
    }

    /// Plain command text for human pickup at the next session start.
    pub fn surface(&self, command: &str) -> Result<(), HandoffError> {
        let path = self.pickup_path();
        fs::create_dir_all(&self.state_root).map_err(|source| HandoffError::CreateDir {
            path: self.state_root.display().to_string(),
            source,
        })?;
        atomic_write_file(&path, format!("{command}\n").as_bytes()).map_err(|source| {
            HandoffError::Write {
                path: path.display().to_string(),
                source,
            }
        })
    }
}
