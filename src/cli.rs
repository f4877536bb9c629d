use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    version = concat!(
        env!("CARGO_PKG_VERSION"), " - ",
        env!("VERGEN_GIT_DESCRIBE"), "(",
        env!("VERGEN_BUILD_DATE"), ")"
    ),
    about
)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Click a column header; repeat to add keys or to cycle asc, desc, off
    #[arg(short, long = "sort", value_name = "COLUMN")]
    pub sort: Vec<String>,

    /// Ignore the `default-sort` from the config file
    #[arg(long)]
    pub clear: bool,

    /// JSON file holding an array of leads
    #[arg(value_name = "LEADS_JSON")]
    pub input: PathBuf,
}
