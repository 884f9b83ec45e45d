use rsky_guzzle::store::pg::PgStore;
use rsky_guzzle::{GuzzleConfig, Store};
use std::env;
use std::sync::Arc;
use tracing::info;

/// The search service's own command-line surface, kept separate from the
/// ingestion engine's: it needs a database connection but none of the
/// Jetstream or log-sink configuration.
#[derive(Debug, clap::Parser)]
struct SearchArgs {
    #[arg(long, default_value = "")]
    cursor: String,
    #[arg(long, env = "GUZZLE_LOG", default_value = "logs/guzzle.log")]
    log: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let args: SearchArgs = clap::Parser::parse();
    let config = match GuzzleConfig::from_env(&rsky_guzzle::GuzzleArgs {
        log: args.log,
        cursor: args.cursor,
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let store: Arc<dyn Store> = match PgStore::new(&config.db_connection) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            eprintln!("failed to connect to the store: {e}");
            std::process::exit(1);
        }
    };

    let port: u16 = env::var("GUZZLE_SEARCH_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    let routes = rsky_guzzle::search::routes(store);
    let (_addr, server) = warp::serve(routes).bind_with_graceful_shutdown(([0, 0, 0, 0], port), async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("stopping search service..."),
            Err(e) => eprintln!("unable to listen for shutdown signal: {e}"),
        };
    });

    info!("search service listening on 0.0.0.0:{port}");
    server.await;
}
