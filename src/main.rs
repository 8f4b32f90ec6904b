use std::process::ExitCode;

use clap::Parser;

use dataset_gallery::config::{Cli, GalleryConfig, Mode};
use dataset_gallery::{export, routes, state};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = match GalleryConfig::from_cli(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match &config.mode {
        Mode::Export { out, select } => {
            match export::export_page(&config.root, &config.page, out, select.as_deref()) {
                Ok(summary) => {
                    tracing::info!(
                        out = %summary.out.display(),
                        count = summary.datasets,
                        selected = ?summary.selected,
                        "gallery exported"
                    );
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    tracing::error!(error = %e, "export failed");
                    ExitCode::FAILURE
                }
            }
        }
        Mode::Serve => serve(&config).await,
    }
}

async fn serve(config: &GalleryConfig) -> ExitCode {
    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    let app = routes::app(state::AppState::from_config(config));
    tracing::info!(%addr, root = %config.root.display(), "gallery listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
