use deploy_defs::{DeploymentConfig, Stage};

const IMAGE_REPO_URI: &str = "ImageRepoUri";
const MODEL_NAME: &str = "ModelName";
const TRAIN_JOB_ID: &str = "TrainJobId";
const DEPLOY_ROLE_ARN: &str = "DeployRoleArn";
const MODEL_VARIANT: &str = "ModelVariant";
const KMS_KEY_ID: &str = "KmsKeyId";
const SCHEDULE_METRIC_NAME: &str = "ScheduleMetricName";
const SCHEDULE_METRIC_THRESHOLD: &str = "ScheduleMetricThreshold";
const NOTIFICATION_ARN: &str = "NotificationArn";

const TAG_MODEL_NAME: &str = "mlops:model-name";
const TAG_STAGE: &str = "mlops:stage";

const DRIFT_METRIC_NAME: &str = "feature_baseline_drift_total_amount";
// Written as a string, the template parameter is typed String.
const DRIFT_METRIC_THRESHOLD: &str = "0.20";

pub fn build_dev_config(
    model_name: &str,
    job_id: &str,
    deploy_role: &str,
    image_uri: &str,
    kms_key_id: &str,
) -> DeploymentConfig {
    let mut config = DeploymentConfig::new();
    config.set_parameter(IMAGE_REPO_URI, image_uri);
    config.set_parameter(MODEL_NAME, model_name);
    config.set_parameter(TRAIN_JOB_ID, job_id);
    config.set_parameter(DEPLOY_ROLE_ARN, deploy_role);
    config.set_parameter(MODEL_VARIANT, Stage::Dev.as_str());
    config.set_parameter(KMS_KEY_ID, kms_key_id);
    config.set_tag(TAG_MODEL_NAME, model_name);
    config.set_tag(TAG_STAGE, Stage::Dev.as_str());
    config
}

fn prd_parameter_overrides(notification_arn: &str) -> [(&'static str, String); 4] {
    [
        (MODEL_VARIANT, Stage::Prd.as_str().to_string()),
        (SCHEDULE_METRIC_NAME, DRIFT_METRIC_NAME.to_string()),
        (SCHEDULE_METRIC_THRESHOLD, DRIFT_METRIC_THRESHOLD.to_string()),
        (NOTIFICATION_ARN, notification_arn.to_string()),
    ]
}

fn prd_tag_overrides() -> [(&'static str, String); 1] {
    [(TAG_STAGE, Stage::Prd.as_str().to_string())]
}

/// The dev config with the production override list applied on top.
pub fn build_prd_config(
    model_name: &str,
    job_id: &str,
    deploy_role: &str,
    image_uri: &str,
    kms_key_id: &str,
    notification_arn: &str,
) -> DeploymentConfig {
    let dev_config = build_dev_config(model_name, job_id, deploy_role, image_uri, kms_key_id);
    dev_config.with_overrides(
        &prd_parameter_overrides(notification_arn),
        &prd_tag_overrides(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn differing_keys<'a>(
        base: &'a std::collections::BTreeMap<String, String>,
        derived: &'a std::collections::BTreeMap<String, String>,
    ) -> BTreeSet<&'a str> {
        base.keys()
            .chain(derived.keys())
            .filter(|key| base.get(*key) != derived.get(*key))
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_dev_config() {
        let config = build_dev_config("m", "j", "r", "img", "k");
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "Parameters": {
                    "ImageRepoUri": "img",
                    "ModelName": "m",
                    "TrainJobId": "j",
                    "DeployRoleArn": "r",
                    "ModelVariant": "dev",
                    "KmsKeyId": "k"
                },
                "Tags": {"mlops:model-name": "m", "mlops:stage": "dev"}
            })
        );
    }

    #[test]
    fn test_prd_config() {
        let config = build_prd_config("m", "j", "r", "img", "k", "arn:sns:x");
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["Parameters"]["ScheduleMetricThreshold"], json!("0.20"));
        assert_eq!(value["Parameters"]["ModelVariant"], json!("prd"));
        assert_eq!(
            value["Parameters"]["ScheduleMetricName"],
            json!("feature_baseline_drift_total_amount")
        );
        assert_eq!(value["Parameters"]["NotificationArn"], json!("arn:sns:x"));
        assert_eq!(value["Tags"]["mlops:stage"], json!("prd"));
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_prd_differs_from_dev_only_in_override_keys() {
        let inputs = [
            ("m", "j", "r", "img", "k", "arn:sns:x"),
            (
                "churn",
                "4d2c-aa",
                "arn:aws:iam::123:role/deploy",
                "123.dkr.ecr.eu-west-1.amazonaws.com/churn:latest",
                "",
                "arn:aws:sns:eu-west-1:123:drift",
            ),
            // Inputs that collide with override values must not widen the diff
            ("prd", "dev", "prd", "0.20", "prd", "dev"),
        ];

        for (model, job, role, image, kms, arn) in inputs {
            let dev = build_dev_config(model, job, role, image, kms);
            let prd = build_prd_config(model, job, role, image, kms, arn);

            assert_eq!(
                differing_keys(&dev.parameters, &prd.parameters),
                BTreeSet::from([
                    "ModelVariant",
                    "ScheduleMetricName",
                    "ScheduleMetricThreshold",
                    "NotificationArn",
                ])
            );
            assert_eq!(
                differing_keys(&dev.tags, &prd.tags),
                BTreeSet::from(["mlops:stage"])
            );
        }
    }
}
