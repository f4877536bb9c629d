use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::models::SortDir;

const DEFAULT_CONFIG: &str = include_str!("../.config/config.yaml");

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
    /// Initial sort order, replayed as header clicks when a view mounts
    #[serde(default)]
    pub default_sort: Vec<SortSpec>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SortSpec {
    pub column: String,
    #[serde(default)]
    pub dir: SortDir,
}

impl Config {
    /// Load from `path`, or from the default location when `None`. A missing
    /// default file is created from the bundled config.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::load(&path, false),
            None => Self::load(&get_config_path()?, true),
        }
    }

    pub fn load(config_path: &Path, write_default: bool) -> Result<Self> {
        if !config_path.is_file() {
            if !write_default {
                bail!("Config file `{}` does not exist", config_path.display());
            }
            if let Some(dir) = config_path.parent() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Fail to create directory `{}`", dir.display()))?;
            }
            fs::write(config_path, DEFAULT_CONFIG)
                .with_context(|| format!("Fail to write file `{}`", config_path.display()))?;
            return Self::parse(DEFAULT_CONFIG);
        }

        let file = fs::File::open(config_path)
            .with_context(|| format!("Fail to open file `{}`", config_path.display()))?;
        serde_yaml_ng::from_reader(file)
            .with_context(|| format!("Fail to deserialize file `{}`", config_path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).context("Fail to deserialize bundled config")
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_project_dir()?.config_dir().join("config.yaml"))
}

pub fn get_project_dir() -> Result<ProjectDirs> {
    ProjectDirs::from("io.github", "", env!("CARGO_PKG_NAME"))
        .ok_or_else(|| anyhow!("Fail to get project directory"))
}
