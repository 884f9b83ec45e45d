use clap::Parser;
use rsky_guzzle::store::pg::PgStore;
use rsky_guzzle::{Guzzle, GuzzleArgs, GuzzleConfig};
use std::env;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let args = GuzzleArgs::parse();

    let config = match GuzzleConfig::from_env(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let store: Arc<dyn rsky_guzzle::Store> = match PgStore::new(&config.db_connection) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            eprintln!("failed to connect to the store: {e}");
            std::process::exit(1);
        }
    };

    let engine = match Guzzle::new(&config, store) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("failed to start guzzle: {e}");
            std::process::exit(1);
        }
    };

    let metrics_port: u16 = env::var("GUZZLE_METRICS_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(9091);
    tokio::spawn(async move {
        let metrics_route = warp::path("metrics").map(|| match rsky_guzzle::metrics::encode_metrics() {
            Ok(body) => warp::http::Response::builder()
                .header("Content-Type", "text/plain; version=0.0.4")
                .body(body)
                .unwrap(),
            Err(e) => warp::http::Response::builder()
                .status(500)
                .body(format!("error encoding metrics: {e}"))
                .unwrap(),
        });
        info!("metrics server listening on 0.0.0.0:{metrics_port}");
        warp::serve(metrics_route).run(([0, 0, 0, 0], metrics_port)).await;
    });

    let token = CancellationToken::new();
    let shutdown_token = token.clone();
    tokio::spawn(async move {
        let mut terminate = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(stream) => stream,
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                return;
            }
        };
        tokio::select! {
            result = tokio::signal::ctrl_c() => match result {
                Ok(()) => info!("received SIGINT, shutting down"),
                Err(e) => error!("error waiting for SIGINT: {e}"),
            },
            _ = terminate.recv() => info!("received SIGTERM, shutting down"),
        }
        shutdown_token.cancel();
    });

    let result = engine.run(token, &args.cursor).await;
    engine.close();

    if let Err(e) = result {
        error!("guzzle exited with an error: {e}");
        std::process::exit(1);
    }
}
