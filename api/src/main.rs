use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::http::server::http_server;
use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();
    let args = Arc::new(Args::parse());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if args.log_json {
        tracing_subscriber::fmt().with_env_filter(env_filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = http_server::state(Arc::clone(&args)).await?;
    let router = http_server::router(state)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.server.port)).await?;
    info!(port = args.server.port, "SmartEats API listening");
    axum::serve(listener, router).await?;

    Ok(())
}
