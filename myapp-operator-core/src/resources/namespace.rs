use k8s_openapi::api::core::v1::Namespace;
use kube::core::ObjectMeta;

use super::{crd::v1alpha1::myapp::MyApp, labels::get_namespace_labels};

impl MyApp {
    pub fn generate_namespace(&self) -> Namespace {
        Namespace {
            metadata: ObjectMeta {
                name: Some(self.spec.namespace.to_owned()),
                labels: Some(get_namespace_labels()),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
