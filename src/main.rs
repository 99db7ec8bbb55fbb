mod data;
mod server;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

// Dataset location and bind address are fixed at build time; the service
// takes no flags.
const DATASET_PATH: &str = "indian_food.csv";
const BIND_ADDRESS: &str = "127.0.0.1:5000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = data::loader::load_file(Path::new(DATASET_PATH)).context(
        "failed to load dataset (run `cargo run --bin generate_sample` to create a sample file)",
    )?;
    log::info!("Loaded {} food records from {DATASET_PATH}", dataset.len());

    server::serve(Arc::new(dataset), BIND_ADDRESS).await
}
