use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
