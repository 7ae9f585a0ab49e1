use std::{env, process};

use movie_catalog::{config::STORAGE_PATH_ENV_VAR, CatalogConfig};

mod logging;

fn get_config() -> CatalogConfig {
    CatalogConfig::resolve(env::args().nth(1), env::var(STORAGE_PATH_ENV_VAR).ok())
}

#[tokio::main]
async fn main() {
    logging::setup_logging();

    if let Err(e) = movie_catalog::run(get_config()).await {
        log::error!("Movie catalog session ended with an I/O error: {}", e);
        process::exit(1);
    }
}
