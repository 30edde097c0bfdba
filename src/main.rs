//! `posts` binary: parse config, install logging, serve until signalled.
//!
//! Run with:
//!   RUST_LOG=debug cargo run
//!
//! Try:
//!   curl 'http://localhost:9999/posts.post?content=hello'
//!   curl  http://localhost:9999/posts.get
//!   curl 'http://localhost:9999/posts.delete?id=1'
//!   curl 'http://localhost:9999/posts.restore?id=1'

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use posts::config::Config;
use posts::{App, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr = config.socket_addr()?;
    Server::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?
        .serve(App::new())
        .await?;

    Ok(())
}
