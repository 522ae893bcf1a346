mod app;
mod config;
mod error;
mod event;
mod frame;
mod greek;
mod layout;
mod paths;
mod render;
mod search_field;
mod shell;
mod terminal;

use std::fs::{self, File};

use simplelog::{Config, LevelFilter, WriteLogger};

/// Log to `<cache dir>/latest.log`. Runs without a log if that fails.
fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    if let Err(e) = app::run().await {
        eprintln!("Error: {}", e);
    }
}
