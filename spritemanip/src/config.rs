//! Parses config file
use std::{
    env,
    fs::OpenOptions,
    io::Read,
    path::{Path, PathBuf},
};

use eyre::eyre;
use serde::Deserialize;
use snesgfx::palette::{GloveLevel, Mail};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Written into new sprites when no author is given
    pub author_name: String,
    /// Empty means derived from `author_name`
    pub author_name_rom: String,
    pub default_mail: String,
    pub glove_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author_name: zspr::constants::DEFAULT_AUTHOR_NAME.to_string(),
            author_name_rom: String::new(),
            default_mail: Mail::Green.name().to_string(),
            glove_level: GloveLevel::None.name().to_string(),
        }
    }
}

impl Config {
    pub fn mail(&self) -> eyre::Result<Mail> {
        self.default_mail.parse::<Mail>().map_err(|err| eyre!(err))
    }

    pub fn glove_level(&self) -> eyre::Result<GloveLevel> {
        self.glove_level
            .parse::<GloveLevel>()
            .map_err(|err| eyre!(err))
    }

    pub fn author_name_rom(&self) -> Option<&str> {
        if self.author_name_rom.is_empty() {
            None
        } else {
            Some(self.author_name_rom.as_str())
        }
    }
}

pub static CONFIG_FILE_NAME: &str = "config.toml";

pub fn config_path() -> PathBuf {
    match env::current_exe() {
        Ok(path) => path
            .parent()
            .map(|parent| parent.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
        Err(_) => PathBuf::from(CONFIG_FILE_NAME),
    }
}

/// Parse `config.toml` in the same folder as the binary.
///
/// A missing file gives the defaults.
pub fn parse_config() -> eyre::Result<Config> {
    let path = config_path();

    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    parse_config_from_file(path.as_path())
}

pub fn parse_config_from_file(path: &Path) -> eyre::Result<Config> {
    let mut file = OpenOptions::new().read(true).open(path.as_os_str())?;
    let mut buffer = String::new();

    file.read_to_string(&mut buffer)?;

    parse_config_from_str(&buffer)
}

pub fn parse_config_from_str(s: &str) -> eyre::Result<Config> {
    let config: Config = toml::from_str(s)?;

    // fail early instead of at the first export
    config.mail()?;
    config.glove_level()?;

    Ok(config)
}
