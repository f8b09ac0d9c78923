use autochain::chain::decide;
use autochain::config::directives::{
    KEEP_DISCUSS_DIRECTIVE, NO_CHAIN_DIRECTIVE, SKIP_DISCUSS_DIRECTIVE,
};
use autochain::config::ChainConfig;

#[test]
fn eligibility_rejects_when_no_chain_directive_present() {
    let text = format!("## Next Up\n`/gsd-execute-phase 3`\n{NO_CHAIN_DIRECTIVE}");
    let decision = decide("/gsd-execute-phase 3", &text, &ChainConfig::default());
    assert!(!decision.run);
    assert!(decision.reason.expect("reason").contains("suppressed"));
}

#[test]
fn eligibility_rejects_deny_listed_commands() {
    let config = ChainConfig::default();
    for command in ["/gsd-new-project", "/gsd-new-milestone", "/gsd-new-milestone 2"] {
        let decision = decide(command, "", &config);
        assert!(!decision.run, "expected {command} to be rejected");
        assert!(decision
            .reason
            .expect("reason")
            .contains("interactive input"));
    }
}

#[test]
fn eligibility_rewrites_discuss_to_plan_when_skip_resolved() {
    let config = ChainConfig {
        skip_discuss: true,
        ..ChainConfig::default()
    };
    let decision = decide("/gsd-discuss-phase 3", "", &config);
    assert!(decision.run);
    assert_eq!(decision.command, "/gsd-plan-phase 3");
}

#[test]
fn eligibility_keeps_discuss_when_skip_not_resolved() {
    let decision = decide("/gsd-discuss-phase 3", "", &ChainConfig::default());
    assert!(decision.run);
    assert_eq!(decision.command, "/gsd-discuss-phase 3");
}

#[test]
fn eligibility_leaves_other_commands_alone_under_skip() {
    let config = ChainConfig {
        skip_discuss: true,
        ..ChainConfig::default()
    };
    let decision = decide("/gsd-execute-phase 08", "", &config);
    assert!(decision.run);
    assert_eq!(decision.command, "/gsd-execute-phase 08");
}

#[test]
fn eligibility_no_chain_directive_beats_everything_else() {
    // even a perfectly ordinary command is held back by the directive
    let text = format!("{SKIP_DISCUSS_DIRECTIVE}\n{NO_CHAIN_DIRECTIVE}\n{KEEP_DISCUSS_DIRECTIVE}");
    let decision = decide("/gsd-execute-phase 1", &text, &ChainConfig::default());
    assert!(!decision.run);
}
