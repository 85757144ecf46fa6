pub mod node;

use clap::{Parser, Subcommand};

use crate::cli::node::NodeConfig;

#[derive(Debug, Parser)]
#[command(author, version, about = "Voxylon validator registration portal", long_about = None)]
pub struct Cli {
    /// Verbosity level (0 = error, 1 = warn, 2 = info, 3 = debug, 4+ = trace)
    #[arg(short, long, global = true, default_value_t = 2)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the registration portal
    #[command(name = "node")]
    Node(Box<NodeConfig>),
}

pub fn log_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_command_parses_with_defaults() {
        let cli = Cli::try_parse_from(["voxylon", "node"]).expect("cli should parse");
        let Commands::Node(config) = cli.command;

        assert_eq!(cli.verbosity, 2);
        assert_eq!(config.http_port, node::DEFAULT_HTTP_PORT);
        assert_eq!(config.http_address, node::DEFAULT_HTTP_ADDRESS);
        assert!(!config.static_data);
        assert!(!config.purge_db);
    }

    #[test]
    fn node_command_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "voxylon",
            "node",
            "--http-port",
            "8080",
            "--static-data",
            "--ephemeral",
        ])
        .expect("cli should parse");
        let Commands::Node(config) = cli.command;

        assert_eq!(config.http_port, 8080);
        assert!(config.static_data);
        assert!(config.ephemeral);
    }

    #[test]
    fn verbosity_maps_to_directives() {
        assert_eq!(log_directive(0), "error");
        assert_eq!(log_directive(2), "info");
        assert_eq!(log_directive(9), "trace");
    }
}
