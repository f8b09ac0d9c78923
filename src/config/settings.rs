use crate::config::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk shape of `~/.autochain/config.json`. Every key is optional so a
/// partial file overrides defaults field-by-field.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    pub auto_chain: Option<bool>,
    pub auto_chain_delay: Option<u64>,
    pub confirm_before_chain: Option<bool>,
    pub skip_discuss: Option<bool>,
}

/// On-disk shape of `<project>/.autochain.json`. The skip flag is accepted
/// both flat and nested under an `autoChain` section; nested wins.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    pub skip_discuss: Option<bool>,
    pub auto_chain: Option<ProjectAutoChainSection>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAutoChainSection {
    pub skip_discuss: Option<bool>,
}

impl GlobalSettings {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

impl ProjectSettings {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn skip_discuss_value(&self) -> Option<bool> {
        self.auto_chain
            .as_ref()
            .and_then(|section| section.skip_discuss)
            .or(self.skip_discuss)
    }
}
