use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::BuilderError;

/// Snapshot of a pipeline's current state, reduced to what is needed to map
/// an external build back to the pipeline execution that started it.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineState {
    pub pipeline_name: String,
    pub stages: Vec<StageState>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StageState {
    pub stage_name: String,
    pub latest_execution_id: Option<String>, // Pipeline execution the stage last ran under
    pub actions: Vec<ActionState>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionState {
    pub action_name: String,
    pub external_execution_id: Option<String>, // e.g. the CodeBuild build id
}

impl PipelineState {
    /// Finds the action reporting the given external execution id, together
    /// with the stage it belongs to. The first match in stage/action order wins.
    ///
    /// Returns `None` when no action matches; callers must not substitute a
    /// fallback.
    pub fn find_action(
        &self,
        external_execution_id: &str,
    ) -> Option<(&StageState, &ActionState)> {
        self.stages.iter().find_map(|stage| {
            stage
                .actions
                .iter()
                .find(|action| {
                    action.external_execution_id.as_deref() == Some(external_execution_id)
                })
                .map(|action| (stage, action))
        })
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtifactRevision {
    pub name: Option<String>,
    pub revision_id: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineExecution {
    pub pipeline_execution_id: String,
    pub artifact_revisions: Vec<ArtifactRevision>,
}

impl PipelineExecution {
    /// Maps artifact name to revision id. Later entries win on duplicate names,
    /// entries missing either field are left out.
    pub fn revisions(&self) -> HashMap<String, String> {
        self.artifact_revisions
            .iter()
            .filter_map(|r| match (&r.name, &r.revision_id) {
                (Some(name), Some(revision_id)) => Some((name.clone(), revision_id.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn revision(&self, name: &str) -> Result<String, BuilderError> {
        self.revisions().remove(name).ok_or_else(|| {
            BuilderError::MissingRevision(self.pipeline_execution_id.clone(), name.to_string())
        })
    }
}

/// Identifiers tied to the pipeline execution a build belongs to. Resolved
/// once per run.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PipelineExecutionContext {
    pub job_id: String,
    pub git_commit_id: String,
    pub data_version_id: String,
}
