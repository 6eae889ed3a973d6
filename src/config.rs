use confique::{yaml::FormatOptions, Config as _};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Confique(#[from] confique::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not determine config dir parent path")]
    ParentPath,

    #[error("Config file already exists: {0}")]
    Exists(PathBuf),

    #[error(transparent)]
    Xdg(#[from] xdg::BaseDirectoriesError),
}

#[derive(Clone, Debug, Serialize, Deserialize, confique::Config)]
pub struct Config {
    /// Base url of the remote posts service
    #[config(env = "POSTBOARD_API_BASE_URL", default = "https://jsonplaceholder.typicode.com")]
    pub api_base_url: String,

    /// Author id attached to every created post
    #[config(env = "POSTBOARD_AUTHOR_ID", default = 1)]
    pub author_id: i64,

    /// Address the web server listens on
    #[config(env = "POSTBOARD_LISTEN_ADDRESS", default = "127.0.0.1:3000")]
    pub listen_address: String,

    /// Directory served under /static
    #[config(default = "static")]
    pub static_dir: PathBuf,

    /// Timeout for requests to the remote service, in seconds. Unset means no timeout.
    #[config(env = "POSTBOARD_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Config> {
        let config_path = get_config_path(config_path)?;
        let config = Config::builder().env().file(config_path).load()?;

        Ok(config)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

pub fn init_config(config_path: Option<PathBuf>) -> Result<()> {
    let config_path = write_config_template(config_path)?;

    println!("Configuration file created: {}", config_path.display());

    Ok(())
}

pub fn get_config_template() -> String {
    confique::yaml::template::<Config>(FormatOptions::default())
}

pub fn print_config_template() {
    println!("{}", get_config_template());
}

pub fn get_config_path(config_path: Option<PathBuf>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path),
        None => {
            let xdg_dirs = xdg::BaseDirectories::with_prefix("postboard")?;
            Ok(xdg_dirs.get_config_file("config.yml"))
        }
    }
}

pub fn write_config_template(config_path: Option<PathBuf>) -> Result<PathBuf> {
    let config_path = get_config_path(config_path)?;
    if config_path.exists() {
        return Err(Error::Exists(config_path));
    }

    let config_template = get_config_template();
    let config_path_dir = config_path.parent().ok_or(Error::ParentPath)?;

    std::fs::create_dir_all(config_path_dir)?;
    std::fs::write(&config_path, config_template)?;

    Ok(config_path)
}
