mod config;
mod services;

use crate::config::ServerConfig;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            return Err(io::Error::new(io::ErrorKind::InvalidInput, err));
        }
    };

    info!("Server running at {}", config.url());

    let json_limit = config.json_limit;
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(services::flights::json_config(json_limit))
            .service(services::flights::configure_routes())
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
