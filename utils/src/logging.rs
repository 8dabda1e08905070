use std::env;

use chrono::Local;
use log::LevelFilter;

fn level_from_env() -> LevelFilter {
    match env::var("LOG_LEVEL").as_deref() {
        Ok("debug") => LevelFilter::Debug,
        Ok("info") => LevelFilter::Info,
        Ok("warn") => LevelFilter::Warn,
        Ok("error") => LevelFilter::Error,
        _ => LevelFilter::Info, // Default to Info if unset or unrecognized
    }
}

pub fn setup_logging() -> Result<(), fern::InitError> {
    let stderr_config = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}: {}",
                Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level_from_env())
        .chain(std::io::stderr());

    fern::Dispatch::new().chain(stderr_config).apply()?;

    Ok(())
}
