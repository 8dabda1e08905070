use anyhow::Result;
use clap::Parser;
use deploy_utils::setup_logging;
use env_aws::{get_region, AwsPipelineProvider, ManagedImageRegistry};
use log::info;
use params_builder::{run, BuildArgs};

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let args = BuildArgs::parse();
    info!("args: {:?}", args);

    let region = get_region().await?;
    let pipelines = AwsPipelineProvider::new(&region).await;

    run(&args, &region, &pipelines, &ManagedImageRegistry).await
}
