use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use deploy_utils::read_json_file;
use log::{debug, info};
use serde_json::{Map, Value};

pub const HYPERPARAMETERS_FILE: &str = "hyperparameters.json";

// Training jobs take every hyperparameter as a string.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// Loads `hyperparameters.json` from `data_dir` when present. Nothing in the
/// generated parameter files depends on it.
pub fn load_hyperparameters(data_dir: &Path) -> Result<Option<BTreeMap<String, String>>> {
    let path = data_dir.join(HYPERPARAMETERS_FILE);
    if !path.exists() {
        debug!("No {} in {}", HYPERPARAMETERS_FILE, data_dir.display());
        return Ok(None);
    }

    let raw: Map<String, Value> = read_json_file(&path)?;
    let hyperparameters: BTreeMap<String, String> = raw
        .iter()
        .map(|(key, value)| (key.clone(), stringify(value)))
        .collect();
    info!("hyperparameters: {:?}", hyperparameters);
    Ok(Some(hyperparameters))
}
