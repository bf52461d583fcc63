use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[kube(
    group = "app.example.com",
    version = "v1alpha1",
    kind = "MyApp",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct MyAppSpec {
    /// namespace hosting the scheduled job, created if it doesn't exist
    pub namespace: String,
    /// scheduled job deployed into the namespace
    pub cron_job_config: CronJobConfig,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CronJobConfig {
    /// name of the cron job, also used for its job template and container
    pub name: String,
    /// container image run on every schedule tick
    pub image: String,
    /// cron-style schedule, e.g. `0 2 * * *`
    pub schedule: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::MyApp;

    #[test]
    fn myapp_is_read_from_camel_case_manifest() {
        let myapp: MyApp = serde_json::from_value(json!({
            "apiVersion": "app.example.com/v1alpha1",
            "kind": "MyApp",
            "metadata": { "name": "reports", "namespace": "operators" },
            "spec": {
                "namespace": "team-a",
                "cronJobConfig": {
                    "name": "nightly",
                    "image": "repo/app:1.0",
                    "schedule": "0 2 * * *"
                }
            }
        }))
        .unwrap();

        assert_eq!(myapp.spec.namespace, "team-a");
        assert_eq!(myapp.spec.cron_job_config.name, "nightly");
        assert_eq!(myapp.spec.cron_job_config.image, "repo/app:1.0");
        assert_eq!(myapp.spec.cron_job_config.schedule, "0 2 * * *");
    }
}
