mod config;
mod di_container;
mod entities;
mod errors;
mod extraction;
mod handlers;
mod interactors;
mod models;
mod services;
mod utils;

use config::read_config_from_env;
use tokio::net::TcpListener;
use tracing::{event, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};
use utils::shutdown_signal;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let config = match read_config_from_env() {
        Ok(config) => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(EnvFilter::from_env("LOGGING_LEVEL"))
                .init();

            event!(Level::DEBUG, "Config loaded from env");

            config
        }
        Err(err) => {
            eprintln!("Error reading config from env: {err}");

            std::process::exit(1);
        }
    };

    match &config.converter.url {
        Some(url) => event!(Level::INFO, %url, "MP3 conversion enabled"),
        None => event!(Level::INFO, "MP3 conversion disabled, `CONVERTER_API` isn't set"),
    }

    let app = handlers::router(di_container::init(&config));

    let address = config.server.get_address();
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            event!(Level::ERROR, %err, %address, "Error while binding address");

            std::process::exit(1);
        }
    };

    event!(Level::INFO, %address, "Server started");

    match axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await {
        Ok(()) => {
            event!(Level::INFO, "Server stopped");
        }
        Err(err) => {
            event!(Level::ERROR, error = %err, "Server stopped");
        }
    }
}
