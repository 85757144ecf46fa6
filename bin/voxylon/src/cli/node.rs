use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_HTTP_PORT: u16 = 3000;
pub const DEFAULT_HTTP_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_HTTP_ALLOW_ORIGIN: bool = false;

#[derive(Debug, Parser)]
pub struct NodeConfig {
    /// HTTP port number
    #[arg(long, default_value_t = DEFAULT_HTTP_PORT)]
    pub http_port: u16,

    /// HTTP bind address
    #[arg(long, default_value_t = DEFAULT_HTTP_ADDRESS.to_string())]
    pub http_address: String,

    /// Allow CORS for all origins
    #[arg(long, default_value_t = DEFAULT_HTTP_ALLOW_ORIGIN)]
    pub http_allow_origin: bool,

    /// Serve the fixed fixture data set instead of a live registration store
    #[arg(long, env = "VOXYLON_STATIC_DATA", default_value_t = false)]
    pub static_data: bool,

    /// The directory for storing application data
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Use a new data directory located in the OS temporary directory. If
    /// used together with --data-dir, the new directory is created there
    /// instead.
    #[arg(long, short)]
    pub ephemeral: bool,

    /// Delete the registration database before starting
    #[arg(long)]
    pub purge_db: bool,
}
