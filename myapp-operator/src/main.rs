use std::process::exit;

use clap::Parser;
use cli::{Cli, Commands, GlobalArgs, LogLevel};
use env_logger::Target;
use kube::Client;
use log::{error, LevelFilter};
use myapp_operator_core::{
    kubernetes::operations::create_local_client, resources::crd::v1alpha1::render_v1alpha1_crds,
};
use settings::ReconcilerSettings;

use crate::controller::main_controller;

mod cli;
mod controller;
mod helpers;
mod reconciler;
mod settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    configure_logging(&cli.global_args);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let settings = get_settings();
            let client = create_client(&cli.global_args).await;

            main_controller(client, settings).await;
        }
        Commands::Crd => print!("{}", render_v1alpha1_crds()?),
    }

    Ok(())
}

async fn create_client(global_args: &GlobalArgs) -> Client {
    match create_local_client(&global_args.kube_config, &global_args.kube_context).await {
        Ok(client) => client,
        Err(error) => {
            error!("Couldn't create client! {error:?}");
            exit(6)
        }
    }
}

fn get_settings() -> ReconcilerSettings {
    match ReconcilerSettings::from_env() {
        Ok(settings) => settings,
        Err(error) => {
            error!("Couldn't load operator settings! {error}");
            exit(7)
        }
    }
}

fn configure_logging(global_args: &GlobalArgs) {
    let log_level = global_args.get_log_level();
    let mut logger = env_logger::builder();

    logger
        .format_module_path(matches!(log_level, LogLevel::Trace))
        .target(Target::Stderr);

    match log_level {
        LogLevel::Normal => logger.filter_level(LevelFilter::Info),
        LogLevel::Verbose => logger
            .filter_level(LevelFilter::Info)
            .filter_module("myapp_operator", LevelFilter::Debug),
        LogLevel::Trace => logger.filter_level(LevelFilter::Debug),
    };

    logger.parse_default_env().init();
}
