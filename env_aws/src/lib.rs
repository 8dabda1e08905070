mod codepipeline;
mod image_uris;
mod utils;

pub use codepipeline::AwsPipelineProvider;
pub use image_uris::ManagedImageRegistry;
pub use utils::get_region;
