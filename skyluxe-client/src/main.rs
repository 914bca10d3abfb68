use std::{io, path::PathBuf};

use clap::Parser as _;

use skyluxe_client::{
    cli::Args,
    config::Config,
    display::{render_detail, render_results},
    http::Client,
    session::SearchSession,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    // stdout carries the rendered results
    tracing_subscriber::fmt::fmt()
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // load config
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("skyluxe-client.toml"));
    let config = Config::load(config_path)?;

    tracing::info!("using gateway at {}", config.api.endpoint);

    let client = Client::new(&config.api)?;

    let mut session = SearchSession::new(&config.search);
    args.apply(&mut session);

    session.search(&client).await;

    print!("{}", render_results(&session));

    if let Some(n) = args.select {
        if n > 0 && session.select(n - 1) {
            if let Some(detail) = session.detail() {
                println!();
                print!("{}", render_detail(&detail));
            }
        } else {
            tracing::warn!("no offer #{} to show", n);
        }
    }

    Ok(())
}
