use std::sync::Arc;

use futures::StreamExt;
use kube::{
    runtime::{watcher::Config, Controller},
    Api,
};
use log::info;
use myapp_operator_core::resources::crd::v1alpha1::myapp::MyApp;

use crate::{
    helpers::handle_reconciliation_result,
    reconciler::{
        context::ReconcilerContext,
        myapp::{reconcile_myapp, reconcile_myapp_error},
        store::KubeStore,
    },
};

pub async fn start_myapp_controller(
    myapp_api: Api<MyApp>,
    context: Arc<ReconcilerContext<KubeStore>>,
) {
    info!("Creating MyApp controller...");

    let requeue_interval = context.requeue_interval;

    let controller = Controller::new(myapp_api, Config::default())
        .shutdown_on_signal()
        .run(
            reconcile_myapp::<KubeStore>,
            reconcile_myapp_error::<KubeStore>,
            context,
        )
        .for_each(move |result| handle_reconciliation_result(result, requeue_interval));

    info!("MyApp controller created!");

    controller.await;

    info!("MyApp controller stopped");
}
