//! CLI command implementations.

use std::path::PathBuf;

use serde::Serialize;

use crate::demo;
use crate::privatize::Privatizer;
use crate::slots::{SlotName, SlotNameSet};
use crate::types::config::{Config, PrivatizerConfig, ValidationPolicy, CONFIG_FILE};
use crate::MemoResult;

/// Runs the bundled counter scenario.
pub fn demo(calls: Option<usize>, slot: Option<String>, config: &Config) -> MemoResult<()> {
    let calls = calls.unwrap_or(config.demo.calls);
    let slot = slot.unwrap_or_else(|| config.demo.slot.clone());

    tracing::debug!("Running counter over '{}' for {} calls", slot, calls);

    let privatizer = Privatizer::new(config.privatizer.clone());
    let stdout = std::io::stdout();
    demo::run_counter(&privatizer, &slot, calls, &mut stdout.lock())
}

/// Result of validating a name list.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub valid: bool,
    pub policy: ValidationPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<SlotName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Validates `names` the same way the privatizer does.
pub fn check(names: &[String], strict: bool, json: bool, config: &Config) -> MemoResult<()> {
    let privatizer = Privatizer::new(if strict {
        PrivatizerConfig::strict()
    } else {
        config.privatizer.clone()
    });
    let policy = privatizer.config().policy;

    let result = SlotNameSet::from_names(names.iter().cloned(), policy);
    let report = match &result {
        Ok(set) => CheckReport {
            valid: true,
            policy,
            declaration: Some(set.to_string()),
            names: set.iter().cloned().collect(),
            error: None,
        },
        Err(e) => CheckReport {
            valid: false,
            policy,
            declaration: None,
            names: Vec::new(),
            error: Some(e.to_string()),
        },
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(declaration) = &report.declaration {
        println!("{}", declaration);
    }

    result.map(|_| ())
}

/// Writes a default configuration file into the target directory.
pub fn init(path: Option<PathBuf>) -> MemoResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join(CONFIG_FILE);

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    Config::default_config().save(&config_path)?;
    println!("Configuration created at: {}", config_path.display());

    Ok(())
}

/// Shows version.
pub fn version() {
    println!("multimemo {}", env!("CARGO_PKG_VERSION"));
}
