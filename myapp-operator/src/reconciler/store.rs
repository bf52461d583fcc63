use async_trait::async_trait;
use kube::{api::PostParams, Client};
use myapp_operator_core::kubernetes::{
    operations::{create_resource, try_get_resource},
    CreateOutcome, ObjectKey, ScopedResource,
};

/// Backing store the reconciler reads from and creates into.
///
/// A missing object is `Ok(None)` and a lost create race is [`CreateOutcome::AlreadyExists`].
/// Every other failure is returned as is, the store never retries.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get<T: ScopedResource>(&self, key: &ObjectKey) -> Result<Option<T>, kube::Error>;

    async fn create<T: ScopedResource>(
        &self,
        key: &ObjectKey,
        resource: &T,
    ) -> Result<CreateOutcome, kube::Error>;
}

pub struct KubeStore {
    client: Client,
    post_params: PostParams,
}

impl KubeStore {
    pub fn new(client: Client, field_manager: &str) -> Self {
        Self {
            client,
            post_params: PostParams {
                field_manager: Some(field_manager.to_owned()),
                ..Default::default()
            },
        }
    }
}

#[async_trait]
impl ObjectStore for KubeStore {
    async fn get<T: ScopedResource>(&self, key: &ObjectKey) -> Result<Option<T>, kube::Error> {
        try_get_resource(&self.client, key).await
    }

    async fn create<T: ScopedResource>(
        &self,
        key: &ObjectKey,
        resource: &T,
    ) -> Result<CreateOutcome, kube::Error> {
        create_resource(&self.client, key, resource, &self.post_params).await
    }
}
