//! Startup configuration. Everything lives under `~/.karaoke-songs/`; an
//! optional `config.toml` there can relocate the CSV file and switch on the
//! git push after each save.

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".karaoke-songs";
/// Default song list file inside the data directory.
const CSV_FILE_NAME: &str = "song_list.csv";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "karaoke-songs.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub csv_file: PathBuf,
    pub log_file: PathBuf,
    pub git_push: bool,
    pub git_remote: String,
    pub git_branch: String,
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    csv_file: Option<PathBuf>,
    git_push: bool,
    git_remote: Option<String>,
    git_branch: Option<String>,
}

impl Config {
    /// Resolve the data directory from the user's home and load the config
    /// file inside it, if any.
    pub fn load() -> Result<Self> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| Error::Config("could not locate home directory".into()))?;
        Self::load_from(base_dirs.home_dir().join(DATA_DIR_NAME))
    }

    /// Same as [`Config::load`] but rooted at an explicit data directory.
    pub fn load_from(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let file = read_config_file(&data_dir.join(CONFIG_FILE_NAME))?;

        let csv_file = match file.csv_file {
            Some(path) if path.is_relative() => data_dir.join(path),
            Some(path) => path,
            None => data_dir.join(CSV_FILE_NAME),
        };

        Ok(Self {
            log_file: data_dir.join(LOG_FILE_NAME),
            csv_file,
            git_push: file.git_push,
            git_remote: file.git_remote.unwrap_or_else(|| "origin".to_string()),
            git_branch: file.git_branch.unwrap_or_else(|| "main".to_string()),
            data_dir,
        })
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = fs::read_to_string(path)?;
    toml::from_str(&raw)
        .map_err(|err| Error::Config(format!("failed to parse {}: {err}", path.display())))
}
