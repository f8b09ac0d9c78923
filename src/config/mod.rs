pub mod directives;
pub mod error;
pub mod paths;
pub mod resolve;
pub mod settings;

pub use error::ConfigError;
pub use paths::{
    default_global_config_path, default_state_root, project_config_path, GLOBAL_STATE_DIR,
};
pub use resolve::{resolve_chain_config, resolve_skip_discuss, ChainConfig};
pub use settings::{GlobalSettings, ProjectSettings};
