use crate::config::directives::{chain_suppressed, NO_CHAIN_DIRECTIVE};
use crate::config::ChainConfig;

/// Commands that open an interactive questionnaire; chaining one unattended
/// would stall the fresh session on a prompt nobody is watching.
pub const DENIED_COMMANDS: &[&str] = &["/gsd-new-project", "/gsd-new-milestone"];

/// The optional intermediate step and the step it collapses into when the
/// resolved configuration says to skip it.
pub const INTERMEDIATE_STEP_COMMAND: &str = "/gsd-discuss-phase";
pub const INTERMEDIATE_STEP_SUCCESSOR: &str = "/gsd-plan-phase";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility {
    pub run: bool,
    pub command: String,
    pub reason: Option<String>,
}

impl Eligibility {
    fn rejected(command: &str, reason: String) -> Self {
        Self {
            run: false,
            command: command.to_string(),
            reason: Some(reason),
        }
    }
}

/// Decides whether `command` may continue unattended, rewriting the
/// intermediate step when the skip flag is resolved on. The text is consulted
/// only for directive tokens.
pub fn decide(command: &str, assistant_text: &str, config: &ChainConfig) -> Eligibility {
    if chain_suppressed(assistant_text) {
        return Eligibility::rejected(
            command,
            format!("chaining suppressed by {NO_CHAIN_DIRECTIVE}"),
        );
    }

    if let Some(denied) = DENIED_COMMANDS
        .iter()
        .find(|denied| command.starts_with(**denied))
    {
        return Eligibility::rejected(command, format!("{denied} requires interactive input"));
    }

    let command = if config.skip_discuss && command.starts_with(INTERMEDIATE_STEP_COMMAND) {
        format!(
            "{INTERMEDIATE_STEP_SUCCESSOR}{}",
            &command[INTERMEDIATE_STEP_COMMAND.len()..]
        )
    } else {
        command.to_string()
    };

    Eligibility {
        run: true,
        command,
        reason: None,
    }
}
