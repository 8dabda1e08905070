use aws_config::meta::region::RegionProviderChain;
use deploy_defs::BuilderError;

pub async fn get_region() -> Result<String, BuilderError> {
    if let Ok(region_env) = std::env::var("AWS_REGION") {
        return Ok(region_env);
    }

    let region_provider = RegionProviderChain::default_provider();
    match region_provider.region().await {
        Some(region) => Ok(region.to_string()),
        None => Err(BuilderError::MissingRegion()),
    }
}
