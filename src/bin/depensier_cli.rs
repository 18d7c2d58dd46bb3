use std::process::ExitCode;

use depensier::{
    cli,
    config::ConfigManager,
    engine::Engine,
    ledger::LedgerStore,
};

fn main() -> ExitCode {
    depensier::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::output::error(err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigManager::new()?.load();
    let store = match &config.data_file {
        Some(path) => LedgerStore::new(path.clone()),
        None => LedgerStore::open_default()?,
    };
    let engine = Engine::new(store, &config);
    cli::run(&engine)?;
    Ok(())
}
