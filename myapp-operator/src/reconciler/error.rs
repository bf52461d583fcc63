use myapp_operator_core::kubernetes::ObjectKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcilerError {
    #[error("Object is missing metadata!")]
    MissingObjectMetadata,
    #[error("Couldn't read the '{}' MyApp! Reason: {}", .0, .1)]
    ParentRead(ObjectKey, kube::Error),
    #[error("Couldn't check whether {} '{}' exists! Reason: {}", .0, .1, .2)]
    Probe(&'static str, ObjectKey, kube::Error),
    #[error("Couldn't create {} '{}'! Reason: {}", .0, .1, .2)]
    Create(&'static str, ObjectKey, kube::Error),
}
