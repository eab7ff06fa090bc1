use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};
use subleq_x86::TargetFormat;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfError {
    #[error("Failed to read configuration `{}`: {}", .0.display(), .1)]
    ReadError(PathBuf, std::io::Error),
    #[error("Invalid configuration `{}`: {}", .0.display(), .1)]
    ParseError(PathBuf, toml::de::Error),
}

/// Settings read from a `subleq.toml` file; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    pub build_dir: Option<PathBuf>,
    pub cc: Option<String>,
    pub target_os: Option<String>,
    pub target_arch: Option<String>,
    /// step budget for the interpreter
    pub fuel: Option<u64>,
}

impl FromStr for Conf {
    type Err = toml::de::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl Conf {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|err| ConfError::ReadError(path.to_path_buf(), err))?;
        let conf = text.parse().map_err(|err| ConfError::ParseError(path.to_path_buf(), err))?;
        log::debug!("loaded configuration from `{}`", path.display());
        Ok(conf)
    }
}

/// Everything the native backend needs, with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConf {
    pub build_dir: PathBuf,
    pub cc: String,
    pub target_os: String,
    pub target_arch: String,
    /// reuse the assembly already in the build directory
    pub link_existing: bool,
}

impl Default for BuildConf {
    fn default() -> Self {
        Self::new(&Conf::default())
    }
}

impl BuildConf {
    pub fn new(conf: &Conf) -> Self {
        let Conf { build_dir, cc, target_os, target_arch, fuel: _ } = conf.clone();
        Self {
            build_dir: build_dir.unwrap_or_else(|| PathBuf::from("target").join("subleq")),
            cc: cc.unwrap_or_else(|| "cc".to_string()),
            target_os: target_os.unwrap_or_else(|| std::env::consts::OS.to_string()),
            target_arch: target_arch.unwrap_or_else(|| std::env::consts::ARCH.to_string()),
            link_existing: false,
        }
    }
    pub fn target_format(&self) -> Option<TargetFormat> {
        TargetFormat::from_os(&self.target_os)
    }
}
