mod args;
mod config;
mod execution;
mod hyperparameters;
mod image;
mod run;

pub use args::BuildArgs;
pub use config::{build_dev_config, build_prd_config};
pub use execution::{resolve_execution_context, DATA_SOURCE_OUTPUT, MODEL_SOURCE_OUTPUT};
pub use hyperparameters::{load_hyperparameters, HYPERPARAMETERS_FILE};
pub use image::{resolve_image, IMAGE_DETAIL_FILE, TRAINING_IMAGE};
pub use run::run;
