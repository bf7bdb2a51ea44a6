use crate::config::AppConfig;
use crate::db::seed::seed_demo_data;
use crate::db::{init_db, Database};
use crate::router::{respond, App};
use astra::{Request, Server};
use std::net::SocketAddr;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod handlers;
mod responses;
mod router;
mod spreadsheets;
mod table;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, path = %AppConfig::config_path().display(), "failed to load config");
            std::process::exit(1);
        }
    };

    let db = Database::new(config.database_path.clone());
    if let Err(e) = init_db(&db) {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    if config.seed_demo_data {
        match seed_demo_data(&db, chrono::Utc::now().naive_utc()) {
            Ok(true) => info!("demo data inserted"),
            Ok(false) => {}
            Err(e) => warn!(error = %e, "seeding demo data failed"),
        }
    }

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, bind_addr = %config.bind_addr, "invalid bind address");
            std::process::exit(1);
        }
    };
    info!(%addr, workers = config.max_workers, "starting server");

    let server = Server::bind(&addr).max_workers(config.max_workers);
    let app = App { db, config };

    let result = server.serve(move |req: Request, _info| respond(req, &app));

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
