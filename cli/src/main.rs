use std::net::{IpAddr, Ipv4Addr};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use server::{ServerOpts, serve};

#[derive(Debug, Parser)]
#[command(version, about = "In-memory key-value cache with tag based invalidation")]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the cache server.
    Server {
        /// The address the server binds to.
        /// Example: `127.0.0.1` (local only) or `0.0.0.0` (all interfaces)
        #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
        host: IpAddr,

        /// The port number on which the server will listen for incoming connections.
        /// Example: `8080`
        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    run(Args::parse().cmd).await
}

async fn run(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Server { host, port } => serve(ServerOpts { host, port })
            .await
            .inspect_err(|e| tracing::error!("cache server stopped :: {:?}", e))
            .context("run cache server"),
    }
}
