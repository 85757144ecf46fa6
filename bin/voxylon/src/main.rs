use std::{env, net::SocketAddr, sync::Arc};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use voxylon_registry::RegistrationService;
use voxylon_rpc::{config::RpcServerConfig, quota::RouteQuotas, server::start_rpc_server};
use voxylon_storage::{
    db::RegistrationDB,
    dir::{reset_db, setup_data_dir},
    fixture::StaticStore,
    store::RegistrationStore,
};

use crate::cli::{Cli, Commands, log_directive, node::NodeConfig};

mod cli;
mod startup_message;

pub const APP_NAME: &str = "voxylon";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default log level comes from the verbosity flag; RUST_LOG wins.
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let env_filter = match rust_log.is_empty() {
        true => EnvFilter::builder().parse_lossy(log_directive(cli.verbosity)),
        false => EnvFilter::builder().parse_lossy(rust_log),
    };
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    info!("\n{}", startup_message::startup_message());

    match cli.command {
        Commands::Node(config) => run_node(*config).await,
    }
}

async fn run_node(config: NodeConfig) -> anyhow::Result<()> {
    let store: Arc<dyn RegistrationStore> = if config.static_data {
        info!("serving static fixture data, live store disabled");
        Arc::new(StaticStore::campaign_fixtures())
    } else {
        let data_dir = setup_data_dir(APP_NAME, config.data_dir.clone(), config.ephemeral)?;
        if config.purge_db {
            reset_db(&data_dir)?;
        }
        Arc::new(RegistrationDB::new(data_dir)?)
    };

    let service = Arc::new(RegistrationService::new(store));
    let server_config = RpcServerConfig::new(
        SocketAddr::new(config.http_address.parse()?, config.http_port),
        config.http_allow_origin,
    );

    start_rpc_server(server_config, service, RouteQuotas::standard()).await?;
    Ok(())
}
