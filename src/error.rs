use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrinkzError {
    #[error("Search request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Print spooler error: {0}")]
    Print(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DrinkzError>;
