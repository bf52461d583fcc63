use std::{sync::Arc, time::Duration};

use kube::runtime::controller::Action;
use log::{debug, info, warn};
use myapp_operator_core::{kubernetes::ObjectKey, resources::crd::v1alpha1::myapp::MyApp};

use super::{context::ReconcilerContext, error::ReconcilerError, store::ObjectStore};

const ERROR_REQUEUE_SECS: u64 = 10;
const USER_ERROR_REQUEUE_SECS: u64 = 60 * 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// the MyApp object is gone, nothing to do until it comes back
    ParentAbsent,
    Ready,
}

pub async fn reconcile_myapp<S: ObjectStore + 'static>(
    object: Arc<MyApp>,
    context: Arc<ReconcilerContext<S>>,
) -> Result<Action, ReconcilerError> {
    let key = ObjectKey::of(object.as_ref()).ok_or(ReconcilerError::MissingObjectMetadata)?;

    match try_reconcile(&key, &context).await? {
        ReconcileOutcome::ParentAbsent => Ok(Action::await_change()),
        ReconcileOutcome::Ready => Ok(Action::requeue(context.requeue_interval)),
    }
}

pub fn reconcile_myapp_error<S: ObjectStore>(
    _object: Arc<MyApp>,
    error: &ReconcilerError,
    _context: Arc<ReconcilerContext<S>>,
) -> Action {
    Action::requeue(match error {
        ReconcilerError::MissingObjectMetadata => Duration::from_secs(USER_ERROR_REQUEUE_SECS),
        _ => Duration::from_secs(ERROR_REQUEUE_SECS),
    })
}

/// Reads the MyApp object behind `key` from the store and creates every derived resource
/// that's missing. The object handed over by the watcher is never trusted, only its key.
pub async fn try_reconcile<S: ObjectStore + 'static>(
    key: &ObjectKey,
    context: &ReconcilerContext<S>,
) -> Result<ReconcileOutcome, ReconcilerError> {
    info!("Reconciling MyApp '{key}'...");

    let desired = match context.store.get::<MyApp>(key).await {
        Ok(Some(desired)) => desired,
        Ok(None) => {
            info!("MyApp '{key}' not found, it must have been deleted");
            return Ok(ReconcileOutcome::ParentAbsent);
        }
        Err(err) => {
            warn!("Couldn't read MyApp '{key}'! {err}");
            return Err(ReconcilerError::ParentRead(key.to_owned(), err));
        }
    };

    debug!("MyApp '{key}' spec: {:?}", desired.spec);

    for resource in &context.resources {
        resource.ensure(&context.store, &desired).await?;
    }

    info!("MyApp '{key}' reconciled");

    Ok(ReconcileOutcome::Ready)
}
