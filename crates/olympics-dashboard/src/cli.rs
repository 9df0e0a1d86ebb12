//! Command line interface

use clap::{Parser, Subcommand};
use olympics_config::Config;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "olympics-dashboard", version, about = "German Olympic history dashboard")]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive, e.g. `debug` or `olympics_data=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Pretty debug logs with span timings, ignoring the logging section
    #[arg(long, global = true)]
    pub dev: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the dashboard over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Write every figure as SVG and JSON
    Export {
        /// Output directory, created when missing
        #[arg(long)]
        out: PathBuf,
        /// Sport of the sport figures; the configured default when omitted
        #[arg(long)]
        sport: Option<String>,
    },
}

impl Cli {
    /// Command line values win over the file and the environment
    pub fn apply(&self, config: &mut Config) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Command::Serve { host, port } = &self.command {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from([
            "olympics-dashboard",
            "--log-level",
            "debug",
            "serve",
            "--port",
            "9000",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(!cli.dev);
    }

    #[test]
    fn test_directive_log_level_survives_validation() {
        let cli = Cli::parse_from([
            "olympics-dashboard",
            "--log-level",
            "olympics_data=trace",
            "serve",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.logging.level, "olympics_data=trace");
        assert!(config.validate_all().is_ok());
    }

    #[test]
    fn test_export_arguments() {
        let cli = Cli::parse_from([
            "olympics-dashboard",
            "export",
            "--out",
            "figures",
            "--sport",
            "Swimming",
            "--config",
            "dashboard.yaml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("dashboard.yaml")));
        match cli.command {
            Command::Export { out, sport } => {
                assert_eq!(out, PathBuf::from("figures"));
                assert_eq!(sport.as_deref(), Some("Swimming"));
            }
            Command::Serve { .. } => panic!("expected export"),
        }
    }

    #[test]
    fn test_export_requires_out() {
        assert!(Cli::try_parse_from(["olympics-dashboard", "export"]).is_err());
    }
}
