use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("No pipeline execution id was resolved for build {0} in pipeline {1}")]
    MissingExecutionId(String, String),

    #[error("Pipeline execution {0} has no artifact revision named {1}")]
    MissingRevision(String, String),

    #[error("Pipeline execution {0} was not returned by pipeline {1}")]
    MissingExecution(String, String),

    #[error("Image manifest {0} has no ImageURI field")]
    MissingImageUri(String),

    #[error("No managed {0} image is registered for region {1}")]
    UnsupportedRegion(String, String),

    #[error("No region found, did you forget to set AWS_REGION?")]
    MissingRegion(),
}
