use std::time::Duration;

use kube::runtime::{
    controller::{Action, Error as ControllerError},
    reflector::ObjectRef,
    watcher::Error as WatcherError,
};
use kube::Resource;
use log::{error, info, warn};
use myapp_operator_core::resources::crd::v1alpha1::myapp::MyApp;

use crate::reconciler::error::ReconcilerError;

pub type MyAppRunResult =
    Result<(ObjectRef<MyApp>, Action), ControllerError<ReconcilerError, WatcherError>>;

/// Logs the outcome of a single MyApp run emitted by the controller stream.
pub fn handle_reconciliation_result(
    result: MyAppRunResult,
    requeue_interval: Duration,
) -> impl std::future::Future<Output = ()> {
    match result {
        Ok((myapp, action)) => info!(
            "Reconciled MyApp {}, {}",
            describe_myapp(&myapp),
            describe_action(&action, requeue_interval)
        ),
        // deleted before the run started
        Err(ControllerError::ObjectNotFound(_)) => (),
        Err(ControllerError::ReconcilerFailed(reconciler_error, myapp)) => warn!(
            "MyApp {} failed to reconcile: {}",
            describe_myapp(&myapp),
            reconciler_error
        ),
        Err(ControllerError::QueueError(watcher_err)) => {
            error!("MyApp watcher has failed! {watcher_err:#?}")
        }
    }

    std::future::ready(())
}

fn describe_myapp<K: Resource>(myapp: &ObjectRef<K>) -> String {
    match myapp.namespace.as_deref() {
        Some(namespace) => format!("'{namespace}/{}'", myapp.name),
        None => format!("'{}'", myapp.name),
    }
}

fn describe_action(action: &Action, requeue_interval: Duration) -> String {
    if *action == Action::await_change() {
        "parent is gone, waiting for changes".to_owned()
    } else if *action == Action::requeue(requeue_interval) {
        format!("next check in {}s", requeue_interval.as_secs())
    } else {
        format!("next action: {action:?}")
    }
}
