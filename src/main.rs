#![recursion_limit = "256"]

mod config;
mod db;
mod routes;
mod services;
mod state;

use services::identity::IdentityConfig;

#[tokio::main]
async fn main() {
    // `.env` is optional; real environment variables win.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let pool = match db::init_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "database init failed");
            std::process::exit(1);
        }
    };

    // Sign-in is disabled when the identity provider is not configured.
    let identity = IdentityConfig::from_env();
    if identity.is_none() {
        tracing::warn!("identity provider not configured; sign-in disabled");
    }

    let port = config.port;
    let state = state::AppState::new(pool, config, identity);

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router setup failed");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%port, "hirehub listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
    }
}
