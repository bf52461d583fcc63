use k8s_openapi::api::{
    batch::v1::{CronJob, CronJobSpec, JobSpec, JobTemplateSpec},
    core::v1::{Container, PodSpec, PodTemplateSpec},
};
use kube::core::ObjectMeta;

use super::{crd::v1alpha1::myapp::MyApp, labels::get_cronjob_labels, policy::JobPolicy};

impl MyApp {
    /// The job always lands in `spec.namespace`, whether or not that namespace exists yet.
    pub fn generate_cronjob(&self, policy: &JobPolicy) -> CronJob {
        let config = &self.spec.cron_job_config;

        let pod_spec = PodSpec {
            restart_policy: Some(policy.restart_policy.as_str().to_owned()),
            containers: vec![Container {
                name: config.name.to_owned(),
                image: Some(config.image.to_owned()),
                image_pull_policy: Some(policy.image_pull_policy.as_str().to_owned()),
                command: Some(policy.command.to_owned()),
                args: Some(policy.args.to_owned()),
                ..Default::default()
            }],
            ..Default::default()
        };

        CronJob {
            metadata: ObjectMeta {
                name: Some(config.name.to_owned()),
                namespace: Some(self.spec.namespace.to_owned()),
                labels: Some(get_cronjob_labels()),
                ..Default::default()
            },
            spec: Some(CronJobSpec {
                schedule: config.schedule.to_owned(),
                concurrency_policy: Some(policy.concurrency_policy.as_str().to_owned()),
                starting_deadline_seconds: Some(policy.starting_deadline_seconds),
                job_template: JobTemplateSpec {
                    metadata: Some(ObjectMeta {
                        name: Some(config.name.to_owned()),
                        ..Default::default()
                    }),
                    spec: Some(JobSpec {
                        template: PodTemplateSpec {
                            metadata: None,
                            spec: Some(pod_spec),
                        },
                        ..Default::default()
                    }),
                },
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}
