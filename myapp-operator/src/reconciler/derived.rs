use async_trait::async_trait;
use k8s_openapi::api::{batch::v1::CronJob, core::v1::Namespace};
use log::{debug, error, info};
use myapp_operator_core::{
    helpers::pretty_type_name,
    kubernetes::{CreateOutcome, ObjectKey, ScopedResource},
    resources::{crd::v1alpha1::myapp::MyApp, policy::JobPolicy},
};

use super::{error::ReconcilerError, store::ObjectStore};

/// A resource created on behalf of a `MyApp` object.
///
/// Implementations only describe where the resource lives and what it looks like,
/// probing and creating is shared by every kind through [`EnsureResource`].
pub trait DerivedResource: Send + Sync {
    type Resource: ScopedResource;

    fn kind(&self) -> &'static str {
        pretty_type_name::<Self::Resource>()
    }

    fn key(&self, desired: &MyApp) -> ObjectKey;

    fn synthesize(&self, desired: &MyApp) -> Self::Resource;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    Present,
    Created,
    /// the resource was created by someone else between our probe and create
    CreatedConcurrently,
}

/// Existing resources satisfy the desired state no matter what they contain.
pub fn needs_create<T>(observed: &Option<T>) -> bool {
    observed.is_none()
}

#[async_trait]
pub trait EnsureResource<S: ObjectStore>: Send + Sync {
    async fn ensure(&self, store: &S, desired: &MyApp) -> Result<EnsureOutcome, ReconcilerError>;
}

#[async_trait]
impl<S, D> EnsureResource<S> for D
where
    S: ObjectStore + 'static,
    D: DerivedResource + 'static,
{
    async fn ensure(&self, store: &S, desired: &MyApp) -> Result<EnsureOutcome, ReconcilerError> {
        let kind = self.kind();
        let key = self.key(desired);

        info!("Checking {kind} '{key}'...");
        let observed = match store.get::<D::Resource>(&key).await {
            Ok(observed) => observed,
            Err(err) => {
                error!("Couldn't check {kind} '{key}'! {err}");
                return Err(ReconcilerError::Probe(kind, key, err));
            }
        };
        debug!("{kind} '{key}' check completed");

        if !needs_create(&observed) {
            return Ok(EnsureOutcome::Present);
        }

        info!("Creating {kind} '{key}'...");
        let resource = self.synthesize(desired);

        match store.create(&key, &resource).await {
            Ok(CreateOutcome::Created) => {
                info!("Successfully created {kind} '{key}'!");
                Ok(EnsureOutcome::Created)
            }
            Ok(CreateOutcome::AlreadyExists) => {
                info!("{kind} '{key}' was created concurrently, skipping");
                Ok(EnsureOutcome::CreatedConcurrently)
            }
            Err(err) => {
                error!("Failed to create {kind} '{key}'! {err}");
                Err(ReconcilerError::Create(kind, key, err))
            }
        }
    }
}

pub struct DerivedNamespace;

impl DerivedResource for DerivedNamespace {
    type Resource = Namespace;

    fn key(&self, desired: &MyApp) -> ObjectKey {
        ObjectKey::cluster(&desired.spec.namespace)
    }

    fn synthesize(&self, desired: &MyApp) -> Self::Resource {
        desired.generate_namespace()
    }
}

pub struct DerivedCronJob {
    policy: JobPolicy,
}

impl DerivedCronJob {
    pub fn new(policy: JobPolicy) -> Self {
        Self { policy }
    }
}

impl DerivedResource for DerivedCronJob {
    type Resource = CronJob;

    fn key(&self, desired: &MyApp) -> ObjectKey {
        ObjectKey::namespaced(&desired.spec.cron_job_config.name, &desired.spec.namespace)
    }

    fn synthesize(&self, desired: &MyApp) -> Self::Resource {
        desired.generate_cronjob(&self.policy)
    }
}
