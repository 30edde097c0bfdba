//! Process configuration, from CLI flags or environment variables.

use std::net::{IpAddr, SocketAddr};

use clap::Parser;

use crate::error::Error;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 9999;

/// In-memory posts service.
#[derive(Debug, Clone, Parser)]
#[command(name = "posts")]
#[command(about = "In-memory posts service with query-string routes")]
#[command(version)]
pub struct Config {
    /// Interface to listen on.
    #[arg(long, env = "POSTS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port to listen on.
    #[arg(short, long, env = "POSTS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log filter used when `RUST_LOG` is not set (e.g. `debug`, `posts=trace`).
    #[arg(long, env = "POSTS_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn socket_addr(&self) -> Result<SocketAddr, Error> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
