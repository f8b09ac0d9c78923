use crate::chain::eligibility::decide;
use crate::chain::extract::extract_next_command;
use crate::config::{resolve_chain_config, ChainConfig};
use crate::handoff::{HandoffStore, PendingHandoff};
use crate::host::{last_assistant_text, HostError, SessionControl, SessionQuery};
use crate::shared::logging::{append_chain_log_line, reset_chain_log};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Terminal outcome of one triggering event. None of these is a hard
/// failure; the host never sees an error from the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainOutcome {
    AutoContinued { command: String },
    Deferred { command: String },
    NoCommandFound,
    Ineligible { reason: String },
    ConfirmOnlyReported { command: String },
}

/// Best-effort notification capability; implementations must swallow their
/// own failures.
pub trait Notifier {
    fn notify(&self, summary: &str, body: &str);
}

pub struct ChainController<'a> {
    pub query: &'a dyn SessionQuery,
    pub control: &'a dyn SessionControl,
    pub notifier: &'a dyn Notifier,
    pub state_root: PathBuf,
    pub global_config_path: PathBuf,
}

impl ChainController<'_> {
    /// The automatic path: a session went idle, so look at what the
    /// assistant last said and either chain the suggested command into a
    /// fresh session or park it for later.
    pub fn handle_session_idle(
        &self,
        session_id: &str,
        project_dir: &Path,
        now_ms: i64,
    ) -> ChainOutcome {
        reset_chain_log(&self.state_root);
        self.log(&format!("session.idle session_id={session_id}"));

        if session_id.trim().is_empty() {
            self.log("empty session id, nothing to do");
            return ChainOutcome::NoCommandFound;
        }

        let turns = match self.query.session_turns(session_id) {
            Ok(turns) => turns,
            Err(err) => {
                // No turns means no candidate command, so there is nothing
                // to defer either.
                self.log(&format!("message retrieval failed: {err}"));
                return ChainOutcome::NoCommandFound;
            }
        };

        let Some(text) = last_assistant_text(&turns) else {
            self.log("no assistant turn with text parts");
            return ChainOutcome::NoCommandFound;
        };

        let Some(candidate) = extract_next_command(&text) else {
            self.log("no next command found in assistant output");
            return ChainOutcome::NoCommandFound;
        };
        self.log(&format!("extracted candidate: {candidate}"));

        let config = resolve_chain_config(&self.global_config_path, project_dir, &text);
        let decision = decide(&candidate, &text, &config);
        if !decision.run {
            let reason = decision
                .reason
                .unwrap_or_else(|| "command is not eligible".to_string());
            self.log(&format!("ineligible: {reason}"));
            return ChainOutcome::Ineligible { reason };
        }
        let command = decision.command;
        if command != candidate {
            self.log(&format!("rewritten to: {command}"));
        }

        if config.confirm_only {
            self.log(&format!("confirm-only mode, would run: {command}"));
            return ChainOutcome::ConfirmOnlyReported { command };
        }

        if !config.auto_chain_enabled {
            self.log("auto-chain disabled, deferring");
            return self.defer(command, &config, now_ms);
        }

        match self.execute(&command, &config) {
            Ok(()) => {
                self.log(&format!("auto-continued: {command}"));
                ChainOutcome::AutoContinued { command }
            }
            Err(err) => {
                self.log(&format!("live continuation failed: {err}"));
                self.defer(command, &config, now_ms)
            }
        }
    }

    /// The pickup path: a session was just created, so surface a deferred
    /// command if one is waiting and still fresh. Never resubmits
    /// automatically.
    pub fn handle_session_created(&self, session_id: &str, now_ms: i64) -> Option<String> {
        reset_chain_log(&self.state_root);
        self.log(&format!("session.created session_id={session_id}"));

        let store = HandoffStore::from_state_root(&self.state_root);
        let handoff = store.consume(now_ms)?;
        if let Err(err) = store.surface(&handoff.command) {
            self.log(&format!("pickup file write failed: {err}"));
        }
        self.log(&format!(
            "pending command from an earlier session: {}",
            handoff.command
        ));
        Some(handoff.command)
    }

    /// The three control calls, strictly sequential: the new context must
    /// exist before text can land in it, and the text before submit.
    fn execute(&self, command: &str, config: &ChainConfig) -> Result<(), HostError> {
        self.control.create_session()?;
        // the host needs time to switch into the fresh context
        thread::sleep(Duration::from_millis(config.auto_chain_delay_ms));
        self.control.append_prompt(command)?;
        self.control.submit_prompt()
    }

    fn defer(&self, command: String, config: &ChainConfig, now_ms: i64) -> ChainOutcome {
        let store = HandoffStore::from_state_root(&self.state_root);
        let handoff = PendingHandoff {
            command: command.clone(),
            created_at_epoch_ms: now_ms,
        };
        if let Err(err) = store.write(&handoff) {
            self.log(&format!("handoff write failed: {err}"));
        } else {
            self.log(&format!("handoff persisted: {command}"));
        }
        thread::sleep(Duration::from_millis(config.auto_chain_delay_ms));
        self.notifier
            .notify("Autochain", &format!("Pending command: {command}"));
        ChainOutcome::Deferred { command }
    }

    fn log(&self, line: &str) {
        append_chain_log_line(&self.state_root, line);
    }
}
