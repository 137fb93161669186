pub mod config;
pub mod dto;
pub mod errors;
pub mod gql;
pub mod handlers;
pub mod models;
pub mod service;
pub mod views;

use std::io;

use actix_web::{web, App, HttpServer};
use config::Settings;
use dotenv::dotenv;
use gql::ApiClient;
use log::info;
use service::log::{init_logger, LoggerMiddleware};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    init_logger();

    let settings = Settings::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let api = ApiClient::new(settings.api_url.clone(), settings.api_timeout)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    info!("events API at {}", api.base_url());

    let bind = (settings.bind_addr.clone(), settings.port);
    info!("listening on {}:{}", bind.0, bind.1);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(api.clone()))
            .app_data(web::Data::new(settings.clone()))
            .wrap(LoggerMiddleware)
            .configure(handlers::config(api.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
