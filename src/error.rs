use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
