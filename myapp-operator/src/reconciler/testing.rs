//! In-memory [`ObjectStore`] used by the reconciler tests.

use std::{
    collections::{hash_map::Entry, HashMap, HashSet},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use kube::error::ErrorResponse;
use myapp_operator_core::{
    kubernetes::{CreateOutcome, ObjectKey, ScopedResource},
    resources::crd::v1alpha1::myapp::{CronJobConfig, MyApp, MyAppSpec},
};
use tokio::sync::Barrier;

use super::store::ObjectStore;

type StoredKey = (String, ObjectKey);

#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<StoredKey, serde_json::Value>>,
    failing_reads: HashSet<String>,
    failing_creates: HashSet<String>,
    stale_reads: HashSet<String>,
    create_calls: AtomicUsize,
    read_barrier: Option<Barrier>,
}

pub fn team_a_nightly() -> MyApp {
    let mut myapp = MyApp::new(
        "reports",
        MyAppSpec {
            namespace: "team-a".to_owned(),
            cron_job_config: CronJobConfig {
                name: "nightly".to_owned(),
                image: "repo/app:1.0".to_owned(),
                schedule: "0 2 * * *".to_owned(),
            },
        },
    );
    myapp.metadata.namespace = Some("operators".to_owned());

    myapp
}

pub fn internal_error() -> kube::Error {
    kube::Error::Api(ErrorResponse {
        status: "Failure".to_owned(),
        message: "etcdserver: request timed out".to_owned(),
        reason: "InternalError".to_owned(),
        code: 500,
    })
}

fn kind_of<T: ScopedResource>() -> String {
    T::kind(&()).into_owned()
}

impl MemoryStore {
    pub fn with_failing_reads<T: ScopedResource>(mut self) -> Self {
        self.failing_reads.insert(kind_of::<T>());
        self
    }

    pub fn with_failing_creates<T: ScopedResource>(mut self) -> Self {
        self.failing_creates.insert(kind_of::<T>());
        self
    }

    /// Reads of `T` always report the object as absent.
    pub fn with_stale_reads<T: ScopedResource>(mut self) -> Self {
        self.stale_reads.insert(kind_of::<T>());
        self
    }

    /// Every read waits for `parties` readers before returning its snapshot.
    pub fn with_read_barrier(mut self, parties: usize) -> Self {
        self.read_barrier = Some(Barrier::new(parties));
        self
    }

    pub fn insert<T: ScopedResource>(&self, resource: &T) {
        let key = ObjectKey::of(resource).unwrap();
        let value = serde_json::to_value(resource).unwrap();

        self.objects
            .lock()
            .unwrap()
            .insert((kind_of::<T>(), key), value);
    }

    pub fn remove<T: ScopedResource>(&self, key: &ObjectKey) {
        self.objects
            .lock()
            .unwrap()
            .remove(&(kind_of::<T>(), key.clone()));
    }

    pub fn fetch<T: ScopedResource>(&self, key: &ObjectKey) -> Option<T> {
        self.objects
            .lock()
            .unwrap()
            .get(&(kind_of::<T>(), key.clone()))
            .map(|value| serde_json::from_value(value.clone()).unwrap())
    }

    pub fn count<T: ScopedResource>(&self) -> usize {
        let kind = kind_of::<T>();

        self.objects
            .lock()
            .unwrap()
            .keys()
            .filter(|(stored_kind, _)| *stored_kind == kind)
            .count()
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    fn snapshot(&self, kind: &str, key: &ObjectKey) -> Option<serde_json::Value> {
        if self.stale_reads.contains(kind) {
            return None;
        }

        self.objects
            .lock()
            .unwrap()
            .get(&(kind.to_owned(), key.clone()))
            .cloned()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get<T: ScopedResource>(&self, key: &ObjectKey) -> Result<Option<T>, kube::Error> {
        let kind = kind_of::<T>();

        if self.failing_reads.contains(&kind) {
            return Err(internal_error());
        }

        let snapshot = self.snapshot(&kind, key);

        if let Some(barrier) = &self.read_barrier {
            barrier.wait().await;
        }

        snapshot
            .map(|value| serde_json::from_value(value).map_err(kube::Error::SerdeError))
            .transpose()
    }

    async fn create<T: ScopedResource>(
        &self,
        key: &ObjectKey,
        resource: &T,
    ) -> Result<CreateOutcome, kube::Error> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let kind = kind_of::<T>();

        if self.failing_creates.contains(&kind) {
            return Err(internal_error());
        }

        let value = serde_json::to_value(resource).map_err(kube::Error::SerdeError)?;

        match self.objects.lock().unwrap().entry((kind, key.clone())) {
            Entry::Occupied(_) => Ok(CreateOutcome::AlreadyExists),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(CreateOutcome::Created)
            }
        }
    }
}
