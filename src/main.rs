//! kara-server entry point.
//!
//! - `kara-server` / `kara-server chat` - interactive terminal chat
//! - `kara-server serve` - HTTP API

use anyhow::Context;
use kara::{
    AppState, Config, SessionStore, build_pipeline,
    cli::{Cli, Commands, chat, output::Output},
};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let default_filter = if cli.verbose { "kara=debug,info" } else { "kara=info,warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let mut config = Config::from_env().context("failed to load configuration")?;

    match cli.command {
        None | Some(Commands::Chat) => {
            let pipeline = Arc::new(build_pipeline(&config)?);
            chat::run(pipeline, &output).await
        }
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let state = AppState {
                pipeline: Arc::new(build_pipeline(&config)?),
                sessions: Arc::new(SessionStore::new()),
                config: Arc::new(config),
            };

            let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
            output.banner();
            output.success(&format!("Listening on http://{}", addr));

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {}", addr))?;
            axum::serve(listener, kara::api::routes::app(state))
                .await
                .context("server error")
        }
    }
}
