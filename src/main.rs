use crate::backend::HttpBackend;
use crate::config::Config;
use crate::db::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::{handle, App};
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod backend;
mod config;
mod db;
mod domain;
mod errors;
mod query;
mod responses;
mod router;
mod session;
mod state_store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config = Config::from_env();

    let db = Database::new(config.database_path.clone());
    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    let backend = match HttpBackend::new(&config.backend_url) {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("Backend client setup failed: {e}");
            std::process::exit(1);
        }
    };

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("Bad bind address {}: {e}", config.bind_addr);
            std::process::exit(1);
        }
    };

    let app = Arc::new(App {
        db,
        backend: Box::new(backend),
    });

    println!("Starting server at http://{addr}");
    println!("Backend at {}", config.backend_url);

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(e) => error_to_response(e),
    });

    if let Err(e) = result {
        eprintln!("Server exited with error: {e}");
        std::process::exit(1);
    }
}
