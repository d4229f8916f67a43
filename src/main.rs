use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use astra::Server;

use crate::app::App;
use crate::router::handle;

mod analysis;
mod app;
mod dataset;
mod domain;
mod errors;
mod model;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let dataset_path =
        env::var("DASHBOARD_DATASET").unwrap_or_else(|_| "data/listings.csv".to_string());
    let model_path = env::var("DASHBOARD_MODEL").unwrap_or_else(|_| "data/model.json".to_string());
    let addr_var = env::var("DASHBOARD_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    // 1️⃣ Load the dataset and the model artifact; both are fatal on failure
    let app = match App::load(&dataset_path, &model_path) {
        Ok(app) => Arc::new(app),
        Err(e) => {
            eprintln!("❌ Startup failed: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "✅ Loaded {} listings from {dataset_path} and model '{}' from {model_path}",
        app.dataset.len(),
        app.model.name
    );

    // 2️⃣ Start the server
    let addr: SocketAddr = match addr_var.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Invalid DASHBOARD_ADDR '{addr_var}': {e}");
            std::process::exit(1);
        }
    };
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, passing the shared read-only state into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
