use kube::{
    api::PostParams,
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config,
};
use log::{debug, info};

use crate::helpers::pretty_type_name;

use super::{CreateOutcome, ObjectKey, ScopedResource};

const ALREADY_EXISTS_REASON: &str = "AlreadyExists";
const CONFLICT_CODE: u16 = 409;

pub async fn create_local_client(
    config_path: &Option<String>,
    context_name: &Option<String>,
) -> anyhow::Result<Client> {
    let config_options = KubeConfigOptions {
        context: context_name.to_owned(),
        ..Default::default()
    };

    let config = match (config_path, context_name) {
        (Some(path), _) => {
            let kubeconfig = Kubeconfig::read_from(path)?;
            Config::from_custom_kubeconfig(kubeconfig, &config_options).await?
        }
        (None, Some(_)) => Config::from_kubeconfig(&config_options).await?,
        // in-cluster service account first, local kubeconfig otherwise
        (None, None) => Config::infer().await?,
    };

    let client = Client::try_from(config)?;

    Ok(client)
}

/// Returns `None` when the object doesn't exist, any other failure is passed through.
pub async fn try_get_resource<T: ScopedResource>(
    client: &Client,
    key: &ObjectKey,
) -> Result<Option<T>, kube::Error> {
    debug!(
        "Fetching '{key}' {} resource from the cluster...",
        pretty_type_name::<T>()
    );

    T::scoped_api(client.clone(), key.namespace.as_deref())
        .get_opt(&key.name)
        .await
}

pub async fn create_resource<T: ScopedResource>(
    client: &Client,
    key: &ObjectKey,
    resource: &T,
    post_params: &PostParams,
) -> Result<CreateOutcome, kube::Error> {
    info!(
        "Creating '{key}' {} resource on the cluster...",
        pretty_type_name::<T>()
    );

    let result = T::scoped_api(client.clone(), key.namespace.as_deref())
        .create(post_params, resource)
        .await;

    match result {
        Ok(_) => Ok(CreateOutcome::Created),
        Err(error) if is_already_exists(&error) => Ok(CreateOutcome::AlreadyExists),
        Err(error) => Err(error),
    }
}

pub fn is_already_exists(error: &kube::Error) -> bool {
    match error {
        kube::Error::Api(response) => {
            response.code == CONFLICT_CODE && response.reason == ALREADY_EXISTS_REASON
        }
        _ => false,
    }
}
