use anyhow::Result;
use axum::Router;
use clap::Parser;
use searchcore::ScoringMethod;
use server::{build_app, load_searcher, resolve_corpus_path, CONFIG_FILE, DEFAULT_WEB_DIR};
use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Corpus file; read from config.txt when omitted
    #[arg(long)]
    corpus: Option<String>,
    /// Scoring method: tf or tfidf
    #[arg(long, default_value = "tf")]
    scoring: ScoringMethod,
    /// Directory with the static search page
    #[arg(long, default_value = DEFAULT_WEB_DIR)]
    web: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let corpus = resolve_corpus_path(args.corpus, Path::new(CONFIG_FILE))?;

    // Ingestion finishes here, before any request can observe the index.
    let searcher = load_searcher(&corpus, args.scoring);
    let app: Router = build_app(searcher, &args.web);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
