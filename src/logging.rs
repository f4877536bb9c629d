use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{self, Config};

pub fn init(config: &Config) -> Result<()> {
    let log_level = config.log_level.clone().unwrap_or(tracing::Level::INFO.to_string());
    let log_file = match &config.log_file {
        Some(path) => PathBuf::from(path),
        None => {
            let dir = config::get_project_dir()?.data_dir().to_owned();
            fs::create_dir_all(&dir)
                .with_context(|| format!("Fail to create directory `{}`", dir.display()))?;
            dir.join(format!("{}.log", env!("CARGO_PKG_NAME")))
        }
    };
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Fail to open log file `{}`", log_file.display()))?;

    // `RUST_LOG` syntax, e.g. `info` or `crm_multisort=trace`
    let env_filter = EnvFilter::try_new(&log_level)?;

    let file_subscriber = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
