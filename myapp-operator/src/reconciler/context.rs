use std::time::Duration;

use crate::settings::ReconcilerSettings;

use super::{
    derived::{DerivedCronJob, DerivedNamespace, EnsureResource},
    store::ObjectStore,
};

pub struct ReconcilerContext<S: ObjectStore> {
    pub store: S,
    /// derived resources, ensured in order on every reconciliation
    pub resources: Vec<Box<dyn EnsureResource<S>>>,
    pub requeue_interval: Duration,
}

impl<S: ObjectStore + 'static> ReconcilerContext<S> {
    pub fn new(store: S, settings: &ReconcilerSettings) -> Self {
        Self::with_resources(
            store,
            settings.requeue_interval,
            vec![
                Box::new(DerivedNamespace),
                Box::new(DerivedCronJob::new(settings.job_policy.to_owned())),
            ],
        )
    }

    pub fn with_resources(
        store: S,
        requeue_interval: Duration,
        resources: Vec<Box<dyn EnsureResource<S>>>,
    ) -> Self {
        Self {
            store,
            resources,
            requeue_interval,
        }
    }
}
