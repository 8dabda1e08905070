use serde::{Deserialize, Serialize};

/// Storage locations the training and baseline jobs write to for a given run.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct OutputLocations {
    #[serde(rename = "ModelOutputUri")]
    pub model_output_uri: String,
    #[serde(rename = "BaselineOutputUri")]
    pub baseline_output_uri: String,
}

impl OutputLocations {
    pub fn new(bucket: &str, model_name: &str, job_id: &str) -> Self {
        OutputLocations {
            model_output_uri: format!("s3://{}/{}", bucket, model_name),
            baseline_output_uri: format!(
                "s3://{}/{}/monitoring/baseline/mlops-{}-pbl-{}",
                bucket, model_name, model_name, job_id
            ),
        }
    }
}
