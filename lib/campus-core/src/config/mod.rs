pub mod app_config;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("config parsing error: {0}")]
    GeneralParsingError(String),
}
