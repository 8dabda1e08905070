use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Deployment stage a parameter file is generated for.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Dev,
    Prd,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Dev => "dev",
            Stage::Prd => "prd",
        }
    }

    /// Name of the parameter file the downstream deploy step picks up for this stage.
    pub fn file_name(&self) -> String {
        format!("deploy-model-{}.json", self.as_str())
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter document consumed by the infrastructure deployment step.
///
/// Serializes to `{"Parameters": {...}, "Tags": {...}}`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DeploymentConfig {
    #[serde(rename = "Parameters")]
    pub parameters: BTreeMap<String, String>,
    #[serde(rename = "Tags")]
    pub tags: BTreeMap<String, String>,
}

impl DeploymentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_parameter(&mut self, key: &str, value: impl Into<String>) {
        self.parameters.insert(key.to_string(), value.into());
    }

    pub fn set_tag(&mut self, key: &str, value: impl Into<String>) {
        self.tags.insert(key.to_string(), value.into());
    }

    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Returns a copy of this config with the given parameter and tag entries
    /// written over it. Keys not listed are carried over untouched.
    pub fn with_overrides(
        &self,
        parameters: &[(&str, String)],
        tags: &[(&str, String)],
    ) -> DeploymentConfig {
        let mut config = self.clone();
        for (key, value) in parameters {
            config.set_parameter(key, value.clone());
        }
        for (key, value) in tags {
            config.set_tag(key, value.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> DeploymentConfig {
        let mut config = DeploymentConfig::new();
        config.set_parameter("ModelName", "churn");
        config.set_parameter("ModelVariant", "dev");
        config.set_tag("mlops:stage", "dev");
        config
    }

    #[test]
    fn test_stage_file_names() {
        assert_eq!(Stage::Dev.file_name(), "deploy-model-dev.json");
        assert_eq!(Stage::Prd.file_name(), "deploy-model-prd.json");
        assert_eq!(Stage::Prd.to_string(), "prd");
    }

    #[test]
    fn test_serializes_with_capitalized_sections() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "Parameters": {"ModelName": "churn", "ModelVariant": "dev"},
                "Tags": {"mlops:stage": "dev"}
            })
        );
    }

    #[test]
    fn test_with_overrides_leaves_base_untouched() {
        let base = sample();
        let derived = base.with_overrides(
            &[("ModelVariant", "prd".to_string()), ("Extra", "x".to_string())],
            &[("mlops:stage", "prd".to_string())],
        );

        assert_eq!(base.parameter("ModelVariant"), Some("dev"));
        assert_eq!(derived.parameter("ModelVariant"), Some("prd"));
        assert_eq!(derived.parameter("Extra"), Some("x"));
        assert_eq!(derived.parameter("ModelName"), Some("churn"));
        assert_eq!(derived.tag("mlops:stage"), Some("prd"));
    }
}
