use anyhow::Result;
use deploy_defs::{BuilderError, PipelineExecutionContext, PipelineProvider};
use log::{debug, info, warn};

pub const MODEL_SOURCE_OUTPUT: &str = "ModelSourceOutput";
pub const DATA_SOURCE_OUTPUT: &str = "DataSourceOutput";

/// Maps the running build back to its pipeline execution and the source
/// revisions that execution was started with.
///
/// A build id that no action in the pipeline reports leaves the job id
/// unresolved, and the run fails here rather than guessing an execution.
pub async fn resolve_execution_context(
    pipelines: &dyn PipelineProvider,
    pipeline_name: &str,
    codebuild_id: &str,
) -> Result<PipelineExecutionContext> {
    let state = pipelines.get_pipeline_state(pipeline_name).await?;

    let job_id = match state.find_action(codebuild_id) {
        Some((stage, action)) => {
            debug!(
                "Build {} ran as action {} in stage {} of pipeline {}",
                codebuild_id, action.action_name, stage.stage_name, state.pipeline_name
            );
            stage.latest_execution_id.clone()
        }
        None => {
            warn!(
                "No action in pipeline {} reports external execution id {}",
                state.pipeline_name, codebuild_id
            );
            None
        }
    };
    let job_id = job_id.ok_or_else(|| {
        BuilderError::MissingExecutionId(codebuild_id.to_string(), pipeline_name.to_string())
    })?;

    let execution = pipelines
        .get_pipeline_execution(pipeline_name, &job_id)
        .await?;
    let git_commit_id = execution.revision(MODEL_SOURCE_OUTPUT)?;
    let data_version_id = execution.revision(DATA_SOURCE_OUTPUT)?;

    info!("job id: {}", job_id);
    info!("git commit: {}", git_commit_id);
    info!("data version: {}", data_version_id);

    Ok(PipelineExecutionContext {
        job_id,
        git_commit_id,
        data_version_id,
    })
}
