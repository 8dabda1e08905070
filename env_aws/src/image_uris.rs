use anyhow::Result;
use deploy_defs::{BuilderError, ImageSpec, ImageUriProvider};
use log::debug;

/// Accounts hosting the first-party XGBoost training image, per region.
const XGBOOST_REGISTRIES: &[(&str, &str)] = &[
    ("af-south-1", "455444449433"),
    ("ap-east-1", "286214385809"),
    ("ap-northeast-1", "501404015308"),
    ("ap-northeast-2", "306986355934"),
    ("ap-northeast-3", "867004704886"),
    ("ap-south-1", "991648021394"),
    ("ap-southeast-1", "475088953585"),
    ("ap-southeast-2", "544295431143"),
    ("ca-central-1", "469771592824"),
    ("cn-north-1", "390948362332"),
    ("cn-northwest-1", "387376663083"),
    ("eu-central-1", "813361260812"),
    ("eu-north-1", "669576153137"),
    ("eu-south-1", "257386234256"),
    ("eu-west-1", "685385470294"),
    ("eu-west-2", "644912444149"),
    ("eu-west-3", "749696950732"),
    ("me-south-1", "249704162688"),
    ("sa-east-1", "855470959533"),
    ("us-east-1", "811284229777"),
    ("us-east-2", "825641698319"),
    ("us-gov-west-1", "226302683700"),
    ("us-west-1", "632365934929"),
    ("us-west-2", "433757028032"),
];

fn registries(framework: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match framework {
        "xgboost" => Some(XGBOOST_REGISTRIES),
        _ => None,
    }
}

fn dns_suffix(region: &str) -> &'static str {
    if region.starts_with("cn-") {
        "amazonaws.com.cn"
    } else {
        "amazonaws.com"
    }
}

/// Resolves managed training images from a static registry table, without
/// calling any service.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManagedImageRegistry;

impl ImageUriProvider for ManagedImageRegistry {
    fn image_uri(&self, region: &str, spec: ImageSpec<'_>) -> Result<String> {
        let account = registries(spec.framework)
            .and_then(|table| {
                table
                    .iter()
                    .find(|(r, _)| *r == region)
                    .map(|(_, account)| *account)
            })
            .ok_or_else(|| {
                BuilderError::UnsupportedRegion(spec.framework.to_string(), region.to_string())
            })?;

        let uri = format!(
            "{}.dkr.ecr.{}.{}/{}:{}",
            account,
            region,
            dns_suffix(region),
            spec.framework,
            spec.version
        );
        debug!("Resolved managed {} image: {}", spec.framework, uri);
        Ok(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const XGBOOST_LATEST: ImageSpec<'static> = ImageSpec {
        framework: "xgboost",
        version: "latest",
    };

    #[test]
    fn test_image_uri_for_commercial_region() {
        let uri = ManagedImageRegistry
            .image_uri("us-east-1", XGBOOST_LATEST)
            .unwrap();
        assert_eq!(
            uri,
            "811284229777.dkr.ecr.us-east-1.amazonaws.com/xgboost:latest"
        );
    }

    #[test]
    fn test_image_uri_for_china_region() {
        let uri = ManagedImageRegistry
            .image_uri("cn-north-1", XGBOOST_LATEST)
            .unwrap();
        assert_eq!(
            uri,
            "390948362332.dkr.ecr.cn-north-1.amazonaws.com.cn/xgboost:latest"
        );
    }

    #[test]
    fn test_unknown_region_is_an_error() {
        let err = ManagedImageRegistry
            .image_uri("mars-west-1", XGBOOST_LATEST)
            .unwrap_err();
        assert!(err.to_string().contains("mars-west-1"));
    }

    #[test]
    fn test_unknown_framework_is_an_error() {
        let spec = ImageSpec {
            framework: "pytorch",
            version: "2.1",
        };
        assert!(ManagedImageRegistry.image_uri("us-east-1", spec).is_err());
    }
}
