//! Binary entry point: read the configuration, start file logging, open the
//! SQLite catalog and run the menu loop until the user exits.
use std::io;

use log::info;
use movie_catalog::config::AppConfig;
use movie_catalog::logging::init_logging;
use movie_catalog::{open_catalog, App, LinePrompt, SqliteStore};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let _logger = match init_logging(&config.log_level, &config.log_dir) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("logging disabled: {err:#}");
            None
        }
    };

    let conn = open_catalog(&config.db_path)?;
    info!("event=schema_ready path={}", config.db_path.display());
    let store = SqliteStore::new(conn);

    let mut app = App::new(&store, LinePrompt::stdio(), io::stdout())
        .with_stop_answer(config.stop_answer.clone());
    app.run()?;
    Ok(())
}
