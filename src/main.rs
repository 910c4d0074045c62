use std::path::PathBuf;

use anyhow::Context;
use menuz_lib::bootstrap::{self, config::CONFIG_PATH_ENV};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let config = bootstrap::resolve_config(config_path.as_deref(), dirs::data_local_dir())?;

    bootstrap::tracing::init_tracing_subscriber(&config.log_filter)
        .context("Failed to initialize tracing")?;
    info!(store = %config.store_path().display(), "starting menuz");

    let stores = bootstrap::wire_dependencies(&config)?;
    let route = stores.resolve_launch_route().execute().await;

    println!("{}", serde_json::json!({ "route": route }));
    Ok(())
}
