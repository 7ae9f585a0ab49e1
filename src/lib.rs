use tokio::io::{self, AsyncBufRead, AsyncWrite, BufReader};

pub mod catalog;
pub mod cli;
pub mod config;
pub mod model;
pub mod persisters;

pub use cli::console::Console;
pub use config::CatalogConfig;
pub use model::movie::{FilterField, Movie, UnknownFilterField};
pub use persisters::json_store::{JsonStore, StoreError};

/// Runs an interactive session on the process's stdin and stdout.
pub async fn run(config: CatalogConfig) -> io::Result<()> {
    let mut console = Console::new(BufReader::new(io::stdin()), io::stdout());
    run_session(&config, &mut console).await
}

pub async fn run_session<R, W>(config: &CatalogConfig, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let store = JsonStore::new(config.storage_path.clone());
    log::info!("Using movie catalog at {}", store.path().display());

    cli::menu::run_menu(console, &store).await
}
