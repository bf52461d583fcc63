use anyhow::Context;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::CustomResourceExt;

use self::myapp::MyApp;

pub mod myapp;

pub fn get_v1alpha1_crds() -> Vec<CustomResourceDefinition> {
    vec![MyApp::crd()]
}

/// Renders every v1alpha1 CRD as a multi-document YAML stream.
pub fn render_v1alpha1_crds() -> anyhow::Result<String> {
    let documents = get_v1alpha1_crds()
        .iter()
        .map(|crd| {
            serde_yaml::to_string(crd).with_context(|| {
                format!(
                    "Couldn't serialize {} CRD!",
                    crd.metadata.name.as_deref().unwrap_or("---")
                )
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(documents.join("---\n"))
}
