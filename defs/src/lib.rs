mod config;
mod errors;
mod image;
mod output;
mod pipeline;
mod provider;

pub use config::{DeploymentConfig, Stage};
pub use errors::BuilderError;
pub use image::{ImageDetail, ImageSpec};
pub use output::OutputLocations;
pub use pipeline::{
    ActionState, ArtifactRevision, PipelineExecution, PipelineExecutionContext, PipelineState,
    StageState,
};
pub use provider::{ImageUriProvider, PipelineProvider};
