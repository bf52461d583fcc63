use std::fmt::{Debug, Display};

use k8s_openapi::{
    api::{batch::v1::CronJob, core::v1::Namespace},
    serde::{de::DeserializeOwned, Serialize},
    NamespaceResourceScope,
};
use kube::{Api, Client, Resource};

use crate::resources::crd::v1alpha1::myapp::MyApp;

pub mod operations;

/// Namespaced name of an object. Cluster scoped objects have no namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey {
    pub name: String,
    pub namespace: Option<String>,
}

impl ObjectKey {
    pub fn cluster(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    pub fn namespaced(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Some(namespace.into()),
        }
    }

    pub fn of<K: Resource>(resource: &K) -> Option<Self> {
        let meta = resource.meta();

        Some(Self {
            name: meta.name.to_owned()?,
            namespace: meta.namespace.to_owned(),
        })
    }
}

impl Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{}/{}", namespace, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Outcome of a create call that didn't fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// someone else created the object first
    AlreadyExists,
}

/// A kubernetes resource that knows how to reach its own API endpoint for a given key.
pub trait ScopedResource:
    Resource<DynamicType = ()> + Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    fn scoped_api(client: Client, namespace: Option<&str>) -> Api<Self>;
}

impl ScopedResource for Namespace {
    fn scoped_api(client: Client, _namespace: Option<&str>) -> Api<Self> {
        Api::all(client)
    }
}

impl ScopedResource for CronJob {
    fn scoped_api(client: Client, namespace: Option<&str>) -> Api<Self> {
        match namespace {
            Some(namespace) => Api::namespaced(client, namespace),
            None => Api::all(client),
        }
    }
}

impl ScopedResource for MyApp {
    fn scoped_api(client: Client, namespace: Option<&str>) -> Api<Self> {
        match namespace {
            Some(namespace) => Api::namespaced(client, namespace),
            None => Api::all(client),
        }
    }
}

pub trait GetApi {
    fn global_api<T: Resource<DynamicType = ()>>(&self) -> Api<T>;
    fn namespaced_api<T: Resource<Scope = NamespaceResourceScope, DynamicType = ()>>(
        &self,
        namespace: &str,
    ) -> Api<T>;
}

impl GetApi for Client {
    fn global_api<T: Resource<DynamicType = ()>>(&self) -> Api<T> {
        Api::all(self.clone())
    }

    fn namespaced_api<T: Resource<Scope = NamespaceResourceScope, DynamicType = ()>>(
        &self,
        namespace: &str,
    ) -> Api<T> {
        Api::namespaced(self.clone(), namespace)
    }
}
