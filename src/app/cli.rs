#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliVerb {
    Event,
    Status,
    Clear,
    Config,
    Unknown,
}

pub fn parse_cli_verb(input: &str) -> CliVerb {
    match input {
        "event" => CliVerb::Event,
        "status" => CliVerb::Status,
        "clear" => CliVerb::Clear,
        "config" => CliVerb::Config,
        _ => CliVerb::Unknown,
    }
}

pub fn cli_help_lines() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        "  event               Read one host signal (JSON) from stdin and handle it".to_string(),
        "  status              Show the pending command, if any, without consuming it".to_string(),
        "  clear               Drop the pending command".to_string(),
        "  config [dir]        Print the resolved chain configuration for a project dir"
            .to_string(),
    ]
}
