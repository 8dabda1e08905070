use anyhow::Result;
use deploy_defs::{ImageUriProvider, OutputLocations, PipelineProvider, Stage};
use deploy_utils::{create_dir_if_missing, write_json_file};
use log::info;

use crate::{
    build_dev_config, build_prd_config, load_hyperparameters, resolve_execution_context,
    resolve_image, BuildArgs,
};

/// Resolves the image and pipeline execution for this build and writes the
/// dev and prd parameter files into `args.output_dir`. Any failure aborts the
/// run, files already written are left in place.
pub async fn run(
    args: &BuildArgs,
    region: &str,
    pipelines: &dyn PipelineProvider,
    images: &dyn ImageUriProvider,
) -> Result<()> {
    info!("region: {}", region);

    let image_uri = resolve_image(images, region, args.ecr_dir.as_deref())?;

    let context =
        resolve_execution_context(pipelines, &args.pipeline_name, &args.codebuild_id).await?;

    let output_locations =
        OutputLocations::new(&args.sagemaker_bucket, &args.model_name, &context.job_id);
    info!("model output uri: {}", output_locations.model_output_uri);
    info!("baseline output uri: {}", output_locations.baseline_output_uri);

    let _hyperparameters = load_hyperparameters(&args.data_dir)?;

    create_dir_if_missing(&args.output_dir)?;

    let dev_config = build_dev_config(
        &args.model_name,
        &context.job_id,
        &args.deploy_role,
        &image_uri,
        &args.kms_key_id,
    );
    write_json_file(&args.output_dir.join(Stage::Dev.file_name()), &dev_config)?;

    let prd_config = build_prd_config(
        &args.model_name,
        &context.job_id,
        &args.deploy_role,
        &image_uri,
        &args.kms_key_id,
        &args.notification_arn,
    );
    write_json_file(&args.output_dir.join(Stage::Prd.file_name()), &prd_config)?;

    Ok(())
}
