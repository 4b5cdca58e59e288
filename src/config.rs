use clap::{ArgAction, Parser};
use std::net::{Ipv4Addr, SocketAddr};
use tracing::Level;

pub const DEFAULT_PORT: u16 = 8888;
pub const DEFAULT_MESSAGE: &str = "Pong!";

/// Ping HTTP service.
///
/// Answers GET /ping with a pong message, logs JSON payloads POSTed to
/// /ping and acknowledges every other request with 204 No Content.
#[derive(Debug, Parser)]
#[command(name = "ping-service", version)]
pub struct Cli {
    /// Port to listen for HTTP traffic on
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Omit timestamps from log lines (the journal already adds them)
    #[arg(long)]
    pub systemd: bool,

    /// Enable verbose messages
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Enable noisy debug messages and fail loudly on fatal errors
    #[arg(long)]
    pub debug: bool,

    /// Message returned by GET /ping
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_MESSAGE)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub message: String,
    pub systemd: bool,
    pub verbose: u8,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            message: DEFAULT_MESSAGE.to_string(),
            systemd: false,
            verbose: 0,
            debug: false,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            port: cli.port,
            message: cli.message,
            systemd: cli.systemd,
            verbose: cli.verbose,
            debug: cli.debug,
        }
    }
}

impl Config {
    /// Maximum level handed to the log subscriber.
    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else if self.verbose > 0 {
            Level::INFO
        } else {
            Level::WARN
        }
    }

    /// Listen on every interface.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
