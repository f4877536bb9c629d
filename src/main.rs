use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, ValueHint};
use crm_multisort::config::{self, Config};
use crm_multisort::models::{LEAD_COLS, Lead, SortKey};
use crm_multisort::utils::columns::{apply_cols, find_col, header_labels};
use crm_multisort::{SortState, logging};
use serde::Serialize;
use tracing::{info, warn};

mod cli;
mod panic;

#[derive(Serialize)]
struct Output<'a> {
    headers: Vec<String>,
    keys: Vec<SortKey<&'static str>>,
    rows: &'a [Lead],
}

fn main() -> Result<()> {
    panic::init()?;

    // Enhance the help message for the config argument
    let def = config::get_config_path()?;
    let help = format!("Path to config file (default: {})", def.display());
    let cmd = cli::Args::command()
        .mut_arg("config", |a| a.help(help).value_hint(ValueHint::FilePath).next_line_help(true));
    let args = cli::Args::from_arg_matches(&cmd.get_matches())?;

    let config = Config::new(args.config.clone())?;
    logging::init(&config)?;

    let leads = load_leads(&args.input)?;
    let state = build_state(&config, &args)?;
    let sorted = apply_cols(&state, &leads, LEAD_COLS);
    info!(rows = sorted.len(), keys = state.len(), "leads sorted");

    let output = Output { headers: header_labels(&state, LEAD_COLS), keys: state.keys(), rows: &sorted };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn load_leads(path: &Path) -> Result<Vec<Lead>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Fail to read file `{}`", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Fail to deserialize leads from `{}`", path.display()))
}

/// Seed from the configured default order, then replay the header clicks.
fn build_state(config: &Config, args: &cli::Args) -> Result<SortState<&'static str>> {
    let mut state = SortState::new();
    if !args.clear {
        for spec in &config.default_sort {
            match column_id(&spec.column) {
                Ok(id) => state.seed(id, spec.dir),
                Err(e) => warn!("Skip default sort entry: {e}"),
            }
        }
    }
    for name in &args.sort {
        state.toggle_column(column_id(name)?);
    }
    Ok(state)
}

fn column_id(name: &str) -> Result<&'static str> {
    find_col(LEAD_COLS, name).map(|c| c.id).with_context(|| {
        let known: Vec<&str> = LEAD_COLS.iter().filter(|c| c.sortable).map(|c| c.id).collect();
        format!("Unknown or unsortable column `{name}`, expected one of: {}", known.join(", "))
    })
}
