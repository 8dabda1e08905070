use std::path::Path;

use anyhow::Result;
use deploy_defs::{BuilderError, ImageDetail, ImageSpec, ImageUriProvider};
use deploy_utils::read_json_file;
use log::info;

pub const IMAGE_DETAIL_FILE: &str = "imageDetail.json";

pub const TRAINING_IMAGE: ImageSpec<'static> = ImageSpec {
    framework: "xgboost",
    version: "latest",
};

/// Uses the image pushed by an earlier stage when `ecr_dir` is given, the
/// managed training image for `region` otherwise. A given `ecr_dir` without a
/// readable manifest is an error, there is no fallback to the managed image.
pub fn resolve_image(
    images: &dyn ImageUriProvider,
    region: &str,
    ecr_dir: Option<&Path>,
) -> Result<String> {
    let image_uri = match ecr_dir {
        Some(dir) => {
            let path = dir.join(IMAGE_DETAIL_FILE);
            let detail: ImageDetail = read_json_file(&path)?;
            detail
                .image_uri
                .ok_or_else(|| BuilderError::MissingImageUri(path.display().to_string()))?
        }
        None => images.image_uri(region, TRAINING_IMAGE)?,
    };
    info!("image uri: {}", image_uri);
    Ok(image_uri)
}
