use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "params_builder", about = "Load parameters")]
pub struct BuildArgs {
    /// External id of the build running this step, used to find its pipeline execution
    #[arg(long)]
    pub codebuild_id: String,

    /// Directory that may hold a hyperparameters.json
    #[arg(long)]
    pub data_dir: PathBuf,

    /// Directory the deploy-model-*.json files are written to
    #[arg(long)]
    pub output_dir: PathBuf,

    /// Directory holding the imageDetail.json of a custom training image
    #[arg(long)]
    pub ecr_dir: Option<PathBuf>,

    #[arg(long)]
    pub pipeline_name: String,

    #[arg(long)]
    pub model_name: String,

    #[arg(long)]
    pub deploy_role: String,

    #[arg(long)]
    pub sagemaker_bucket: String,

    #[arg(long)]
    pub kms_key_id: String,

    /// Accepted for compatibility with existing build specs, not used
    #[arg(long)]
    pub workflow_role_arn: Option<String>,

    /// Topic notified when the production drift schedule breaches its threshold
    #[arg(long)]
    pub notification_arn: String,
}
