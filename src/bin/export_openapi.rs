use books_service::openapi::document;
use std::fs;
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("export_openapi=info")
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "openapi.json".to_string());

    let contents = match serde_json::to_string_pretty(&document()) {
        Ok(contents) => contents,
        Err(e) => {
            error!("Failed to serialize API contract: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = fs::write(&path, contents) {
        error!("Failed to write {}: {}", path, e);
        std::process::exit(1);
    }

    info!("API contract written to {}", path);
}
