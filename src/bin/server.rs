use std::sync::Arc;

use blogdoc::fetch::HttpFetcher;
use blogdoc::server::{app, AppState};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "blogdoc-server",
    about = "HTTP service converting blog articles to .docx",
    version
)]
struct Args {
    /// Listen address
    #[arg(long, env = "BLOGDOC_ADDR", default_value = "0.0.0.0:3000")]
    addr: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogdoc=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // The blocking client owns its own runtime and must be built outside ours.
    let fetcher = HttpFetcher::new()?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let app = app(AppState::new(Arc::new(fetcher)));
        let listener = tokio::net::TcpListener::bind(&args.addr).await?;
        info!("blogdoc-server listening on http://{}", args.addr);
        axum::serve(listener, app).await?;
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
