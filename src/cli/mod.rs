//! CLI module for the Keyring API
//!
//! A single server process; flags override the layered configuration.

pub mod serve;

use clap::Parser;

use crate::config::AppConfig;

/// Keyring API - In-memory API key management service
#[derive(Parser, Debug)]
#[command(name = "keyring-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Address to bind (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides `PORT` and `server.port`)
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory of static assets (overrides `keys.public_dir`)
    #[arg(long)]
    pub public_dir: Option<String>,
}

impl Cli {
    /// Apply command-line overrides on top of loaded configuration
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }

        if let Some(port) = self.port {
            config.server.port = port;
        }

        if let Some(public_dir) = &self.public_dir {
            config.keys.public_dir = public_dir.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_flags() {
        let cli = Cli::try_parse_from(["keyring-api"]).unwrap();
        let mut config = AppConfig::default();

        cli.apply_to(&mut config);

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.keys.public_dir, "public");
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "keyring-api",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--public-dir",
            "static",
        ])
        .unwrap();
        let mut config = AppConfig::default();

        cli.apply_to(&mut config);

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.keys.public_dir, "static");
    }

    #[test]
    fn test_rejects_subcommands() {
        assert!(Cli::try_parse_from(["keyring-api", "serve"]).is_err());
    }
}
