use crate::app::cli::{cli_help_lines, parse_cli_verb, CliVerb};
use crate::chain::{ChainController, ChainOutcome};
use crate::config::{default_global_config_path, default_state_root, resolve_chain_config};
use crate::handoff::{HandoffStore, HANDOFF_VALIDITY_MS};
use crate::host::{HostEvent, HttpHostClient};
use crate::notify::DesktopNotifier;
use chrono::Utc;
use std::io::Read;
use std::path::PathBuf;

pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    let Some(verb) = args.first() else {
        return Ok(cli_help_lines().join("\n"));
    };

    match parse_cli_verb(verb) {
        CliVerb::Event => handle_event(),
        CliVerb::Status => handle_status(),
        CliVerb::Clear => handle_clear(),
        CliVerb::Config => handle_config(args.get(1).cloned()),
        CliVerb::Unknown => Err(format!(
            "unknown command `{verb}`\n{}",
            cli_help_lines().join("\n")
        )),
    }
}

fn handle_event() -> Result<String, String> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|err| format!("failed to read event from stdin: {err}"))?;
    let event: HostEvent =
        serde_json::from_str(&raw).map_err(|err| format!("invalid event payload: {err}"))?;

    let state_root = default_state_root().map_err(|err| err.to_string())?;
    let global_config_path = default_global_config_path().map_err(|err| err.to_string())?;
    let client = HttpHostClient::from_env();
    let notifier = DesktopNotifier;
    let controller = ChainController {
        query: &client,
        control: &client,
        notifier: &notifier,
        state_root,
        global_config_path,
    };
    let now_ms = Utc::now().timestamp_millis();

    match event {
        HostEvent::SessionIdle { session_id } => {
            let project_dir = std::env::current_dir()
                .map_err(|err| format!("failed to resolve project directory: {err}"))?;
            let outcome = controller.handle_session_idle(&session_id, &project_dir, now_ms);
            Ok(describe_outcome(&outcome))
        }
        HostEvent::SessionCreated { session_id } => {
            match controller.handle_session_created(&session_id, now_ms) {
                Some(command) => Ok(format!("pending command ready: {command}")),
                None => Ok("no pending command".to_string()),
            }
        }
    }
}

fn describe_outcome(outcome: &ChainOutcome) -> String {
    match outcome {
        ChainOutcome::AutoContinued { command } => format!("auto-continued: {command}"),
        ChainOutcome::Deferred { command } => format!("deferred: {command}"),
        ChainOutcome::NoCommandFound => "no command found".to_string(),
        ChainOutcome::Ineligible { reason } => format!("ineligible: {reason}"),
        ChainOutcome::ConfirmOnlyReported { command } => {
            format!("confirm-only: would run {command}")
        }
    }
}

fn handle_status() -> Result<String, String> {
    let state_root = default_state_root().map_err(|err| err.to_string())?;
    let store = HandoffStore::from_state_root(&state_root);
    match store.peek() {
        Some(handoff) => {
            let age_ms = Utc::now()
                .timestamp_millis()
                .saturating_sub(handoff.created_at_epoch_ms);
            let freshness = if age_ms > HANDOFF_VALIDITY_MS {
                "expired"
            } else {
                "fresh"
            };
            Ok(format!(
                "pending command: {} ({freshness}, {}s old)",
                handoff.command,
                age_ms / 1000
            ))
        }
        None => Ok("no pending command".to_string()),
    }
}

fn handle_clear() -> Result<String, String> {
    let state_root = default_state_root().map_err(|err| err.to_string())?;
    let store = HandoffStore::from_state_root(&state_root);
    if store.clear() {
        Ok("pending command cleared".to_string())
    } else {
        Ok("no pending command".to_string())
    }
}

fn handle_config(project_dir: Option<String>) -> Result<String, String> {
    let project_dir = match project_dir {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()
            .map_err(|err| format!("failed to resolve project directory: {err}"))?,
    };
    let global_config_path = default_global_config_path().map_err(|err| err.to_string())?;
    let config = resolve_chain_config(&global_config_path, &project_dir, "");
    Ok(format!(
        "autoChain: {}\nautoChainDelay: {}ms\nconfirmBeforeChain: {}\nskipDiscuss: {}",
        config.auto_chain_enabled,
        config.auto_chain_delay_ms,
        config.confirm_only,
        config.skip_discuss
    ))
}
