use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{http::Method, Router};
use camino::{Utf8Path as Path, Utf8PathBuf as PathBuf};
use clap::Parser;
use content_canvas::{
    app_state::{AppState, SharedState},
    routes,
    spa_serve_dir::SpaServeDirService,
};
use eyre::{Context, Result};
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{prelude::*, EnvFilter};

use canvas_core::{
    deadpool_diesel, interact,
    model::repository::db::{self, DbPool},
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    config: String,
}

async fn db_setup(dir: &Path) -> Result<DbPool> {
    let db_url = dir.join("content_canvas.db").to_string();
    let pool = db::open_db_pool(&db_url)?;
    let conn = pool.get().await?;
    interact!(conn, db::migrate).await??;
    Ok(pool)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "1")
    }
    if std::env::var("RUST_SPANTRACE").is_err() {
        std::env::set_var("RUST_SPANTRACE", "1");
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "debug,hyper=info")
    }
    tracing_subscriber::registry()
        .with(EnvFilter::from_env("CONTENT_CANVAS_LOG"))
        .with(ErrorLayer::default())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = PathBuf::from(args.config);
    let config = canvas_core::config::read_config(&config_path)
        .await
        .wrap_err("could not read config")?;
    // relative paths in the config resolve against its directory
    let config_dir = config_path
        .parent()
        .expect("has read config file, so parent must be a directory");

    let addr: IpAddr = config
        .address
        .as_ref()
        .map(|a| a.parse().wrap_err("error parsing listening address"))
        .transpose()?
        .unwrap_or("127.0.0.1".parse().expect("is a valid address"));
    let port = config.port.unwrap_or(3000);

    let data_dir_path = if config.data_dir.path.is_absolute() {
        config.data_dir.path.clone()
    } else {
        config_dir.join(&config.data_dir.path)
    };
    info!("Starting up...");
    std::fs::create_dir_all(&data_dir_path).wrap_err("could not create data directory")?;
    let pool = db_setup(&data_dir_path).await?;
    let shared_state: SharedState = Arc::new(AppState {
        pool: pool.clone(),
        config,
    });
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_origin(Any);
    let app = Router::new()
        .nest("/api/content", routes::content::router())
        .nest("/api/auth", routes::auth::router())
        .fallback_service(SpaServeDirService::new(ServeDir::new("./static")))
        .layer(
            ServiceBuilder::new()
                .set_x_request_id(MakeRequestUuid)
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().include_headers(true))
                        .on_response(DefaultOnResponse::new().include_headers(true)),
                ),
        )
        .layer(cors)
        .with_state(shared_state);
    let listener = tokio::net::TcpListener::bind(SocketAddr::new(addr, port))
        .await
        .wrap_err("Error binding socket")?;
    info!("Listening on {}:{}", addr, port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server error")?;
    info!("Shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => {}
        Err(err) => {
            eprintln!("Unable to listen for shutdown signal: {}", err);
            std::process::exit(1);
            // we also shut down in case of error
        }
    }
}
