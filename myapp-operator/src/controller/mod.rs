use kube::{Api, Client};
use myapp_operator_core::{kubernetes::GetApi, resources::crd::v1alpha1::myapp::MyApp};
use log::info;

use crate::{
    reconciler::{context::ReconcilerContext, store::KubeStore},
    settings::ReconcilerSettings,
};

use self::myapp::start_myapp_controller;

pub mod myapp;

pub async fn main_controller(client: Client, settings: ReconcilerSettings) {
    let myapp_api: Api<MyApp> = match &settings.watch_namespace {
        Some(namespace) => {
            info!("Watching MyApp resources in '{namespace}' namespace");
            client.namespaced_api(namespace)
        }
        None => {
            info!("Watching MyApp resources in all namespaces");
            client.global_api()
        }
    };

    let store = KubeStore::new(client, &settings.field_manager);
    let reconciler_context = ReconcilerContext::new(store, &settings);

    start_myapp_controller(myapp_api, reconciler_context.into()).await
}
