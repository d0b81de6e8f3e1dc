use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use contract_intel_core::{AnalyzerConfig, RiskThresholds};
use serde::Deserialize;

/// Runtime settings layered from defaults, an optional config file and `CONTRACT_INTEL_*` variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bind: String,
    pub log_json: bool,
    pub max_body_bytes: usize,
    pub risk: RiskThresholds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8000".to_string(),
            log_json: false,
            max_body_bytes: 1024 * 1024,
            risk: RiskThresholds::default(),
        }
    }
}

impl Settings {
    const ENV_PREFIX: &'static str = "CONTRACT_INTEL";

    /// Load settings from `path` (if given) and the process environment.
    ///
    /// * `CONTRACT_INTEL_BIND`: listen address for `serve`.
    /// * `CONTRACT_INTEL_LOG_JSON`: emit JSON log lines.
    /// * `CONTRACT_INTEL_RISK__MEDIUM` / `CONTRACT_INTEL_RISK__HIGH`: risk level thresholds.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    fn load_with_env(path: Option<&Path>, vars: Option<HashMap<String, String>>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let environment = Environment::with_prefix(Self::ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(vars);

        let settings: Settings = builder
            .add_source(environment)
            .build()
            .context("failed to assemble settings")?
            .try_deserialize()
            .context("invalid settings")?;
        if settings.max_body_bytes == 0 {
            anyhow::bail!("max_body_bytes must be greater than zero");
        }
        settings.risk.validate()?;
        Ok(settings)
    }

    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            risk: self.risk.clone(),
        }
    }
}
