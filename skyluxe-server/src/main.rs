use std::{io, net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Error;

use axum_server::Handle;

use clap::Parser as _;

use skyluxe_server::{
    app::AppState,
    cli::{Args, run_command},
    config::Config,
    routes,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt::fmt()
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // load config
    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from("./skyluxe.toml"));
    let config = Config::load(config_path)?;

    let state = AppState::new(config)?;

    // Execute command if it exists
    if let Some(command) = args.command {
        return run_command(&command, &state).await;
    }

    let addr: SocketAddr = ([0, 0, 0, 0], state.port).into();

    let router = routes::router(state);

    let handle = Handle::new();
    tokio::spawn(shutdown_on_ctrl_c(handle.clone()));

    // Serve HTTP
    tracing::info!("engine is running on {} (http)", addr);

    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .map_err(From::from)
}

async fn shutdown_on_ctrl_c(handle: Handle) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(?err, "failed to listen for ctrl-c");
        return;
    }

    tracing::info!("shutting down");
    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}
