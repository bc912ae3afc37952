//! Gating configuration.
//!
//! Synthesis is enabled exactly when the loaded mode is `test`; the
//! annotation-stripping pass is active exactly when it is not. Settings are
//! read from an optional `mockdoc.toml` plus `MOCKDOC_*` environment
//! variables (`MOCKDOC_MODE=test`, `MOCKDOC_PREFIX=...`).

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Test,
    Production,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub mode: Mode,
    /// Default document prefix used when a caller does not pass one.
    pub prefix: String,
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = std::path::Path::new(root).join("mockdoc");
        let s = Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(Environment::with_prefix("MOCKDOC"))
            .set_default("mode", "production")?
            .set_default("prefix", "mock")?
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        Ok(settings)
    }

    pub fn synthesis_enabled(&self) -> bool {
        self.mode == Mode::Test
    }
}
