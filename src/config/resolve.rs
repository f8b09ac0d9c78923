use crate::config::directives::skip_discuss_directive;
use crate::config::paths::project_config_path;
use crate::config::settings::{GlobalSettings, ProjectSettings};
use std::path::Path;

pub const DEFAULT_AUTO_CHAIN_DELAY_MS: u64 = 1000;

/// Immutable per-invocation snapshot of the chaining configuration. Rebuilt
/// fresh on every triggering event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    pub auto_chain_enabled: bool,
    pub auto_chain_delay_ms: u64,
    pub confirm_only: bool,
    pub skip_discuss: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            auto_chain_enabled: true,
            auto_chain_delay_ms: DEFAULT_AUTO_CHAIN_DELAY_MS,
            confirm_only: false,
            skip_discuss: false,
        }
    }
}

/// Precedence for the skip-discuss flag, all four layers in one place:
/// inline directive > project file > global file > built-in default.
pub fn resolve_skip_discuss(
    directive: Option<bool>,
    project: Option<bool>,
    global: Option<bool>,
    default: bool,
) -> bool {
    directive.or(project).or(global).unwrap_or(default)
}

/// Builds the invocation snapshot. Missing or unparseable files fall back
/// silently to the values already resolved; this function cannot fail.
pub fn resolve_chain_config(
    global_config_path: &Path,
    project_dir: &Path,
    assistant_text: &str,
) -> ChainConfig {
    let defaults = ChainConfig::default();

    let global = GlobalSettings::from_path(global_config_path).unwrap_or_default();
    let project = ProjectSettings::from_path(&project_config_path(project_dir)).unwrap_or_default();

    ChainConfig {
        auto_chain_enabled: global.auto_chain.unwrap_or(defaults.auto_chain_enabled),
        auto_chain_delay_ms: global
            .auto_chain_delay
            .unwrap_or(defaults.auto_chain_delay_ms),
        confirm_only: global
            .confirm_before_chain
            .unwrap_or(defaults.confirm_only),
        skip_discuss: resolve_skip_discuss(
            skip_discuss_directive(assistant_text),
            project.skip_discuss_value(),
            global.skip_discuss,
            defaults.skip_discuss,
        ),
    }
}
