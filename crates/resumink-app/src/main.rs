//! Main application entry point.
//!
//! Usage: `resumink [config.json] [output.html]`

use std::path::PathBuf;

fn main() {
    env_logger::init();
    log::info!("Starting Resumink");

    let mut args = std::env::args_os().skip(1);
    let config_path = args.next().map(PathBuf::from).filter(|p| !p.as_os_str().is_empty());
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(resumink_export::DEFAULT_FILE_NAME));

    match resumink_app::run(config_path.as_deref(), &output) {
        Ok(path) => log::info!("Resume written to {}", path.display()),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
