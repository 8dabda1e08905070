use serde::{Deserialize, Serialize};

/// `imageDetail.json` as written by the image build stage.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ImageDetail {
    #[serde(rename = "ImageURI")]
    pub image_uri: Option<String>,
}

/// Framework/version pair used to look up a managed training image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSpec<'a> {
    pub framework: &'a str,
    pub version: &'a str,
}
