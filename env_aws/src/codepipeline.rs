use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_codepipeline::config::Region;
use aws_sdk_codepipeline::types;
use deploy_defs::{
    ActionState, ArtifactRevision, BuilderError, PipelineExecution, PipelineProvider,
    PipelineState, StageState,
};
use log::debug;

pub struct AwsPipelineProvider {
    client: aws_sdk_codepipeline::Client,
}

impl AwsPipelineProvider {
    pub async fn new(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        AwsPipelineProvider {
            client: aws_sdk_codepipeline::Client::new(&config),
        }
    }
}

fn to_stage_state(stage: &types::StageState) -> StageState {
    StageState {
        stage_name: stage.stage_name().unwrap_or_default().to_string(),
        latest_execution_id: stage
            .latest_execution()
            .map(|execution| execution.pipeline_execution_id().to_string()),
        actions: stage
            .action_states()
            .iter()
            .map(|action| ActionState {
                action_name: action.action_name().unwrap_or_default().to_string(),
                external_execution_id: action
                    .latest_execution()
                    .and_then(|execution| execution.external_execution_id())
                    .map(str::to_string),
            })
            .collect(),
    }
}

fn to_artifact_revision(revision: &types::ArtifactRevision) -> ArtifactRevision {
    ArtifactRevision {
        name: revision.name().map(str::to_string),
        revision_id: revision.revision_id().map(str::to_string),
    }
}

#[async_trait]
impl PipelineProvider for AwsPipelineProvider {
    async fn get_pipeline_state(&self, pipeline_name: &str) -> Result<PipelineState> {
        let response = self
            .client
            .get_pipeline_state()
            .name(pipeline_name)
            .send()
            .await
            .with_context(|| format!("Failed to get state of pipeline {}", pipeline_name))?;

        let stages: Vec<StageState> = response.stage_states().iter().map(to_stage_state).collect();
        debug!("Pipeline {} has {} stages", pipeline_name, stages.len());

        Ok(PipelineState {
            pipeline_name: pipeline_name.to_string(),
            stages,
        })
    }

    async fn get_pipeline_execution(
        &self,
        pipeline_name: &str,
        execution_id: &str,
    ) -> Result<PipelineExecution> {
        let response = self
            .client
            .get_pipeline_execution()
            .pipeline_name(pipeline_name)
            .pipeline_execution_id(execution_id)
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to get execution {} of pipeline {}",
                    execution_id, pipeline_name
                )
            })?;

        let execution = response.pipeline_execution().ok_or_else(|| {
            BuilderError::MissingExecution(execution_id.to_string(), pipeline_name.to_string())
        })?;

        Ok(PipelineExecution {
            pipeline_execution_id: execution
                .pipeline_execution_id()
                .unwrap_or(execution_id)
                .to_string(),
            artifact_revisions: execution
                .artifact_revisions()
                .iter()
                .map(to_artifact_revision)
                .collect(),
        })
    }
}
