use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use dotenvy::dotenv;

mod api;
mod client;
mod config;
mod dashboard;
mod docs;
mod error;
mod model;
mod models;
mod routes;
mod utils;

#[cfg(test)]
mod test_support;

use client::BackendClient;
use config::Config;
use dashboard::Dashboard;

use crate::docs::ApiDoc;
use tracing::{info, warn};
use tracing_appender::rolling;
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "Payroll console is running"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "console.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    let client = BackendClient::new(&config.backend_url)?;
    info!(backend = client.base_url(), "Payroll console starting...");
    let dashboard = Data::new(Dashboard::new(client));

    // Mount: fetch everything once before serving. A failure is recorded in
    // the dashboard view; `POST {prefix}/reload` retries.
    if let Err(e) = dashboard.load().await {
        warn!(error = %e, "Initial dashboard load failed");
    }

    let server_addr = config.server_addr.clone();
    let api_prefix = config.api_prefix.clone();
    let openapi = ApiDoc::at_prefix(&api_prefix);

    HttpServer::new(move || {
        let api_prefix = api_prefix.clone();
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", openapi.clone()),
            )
            .app_data(dashboard.clone())
            .service(index)
            .configure(move |cfg| routes::configure(cfg, &api_prefix))
    })
    .bind(server_addr)?
    .run()
    .await?;

    Ok(())
}
