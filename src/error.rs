use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CcstatError>;

#[derive(Error, Debug)]
pub enum CcstatError {
    #[error("\"{0}\" not found")]
    GitNotFound(String),
    #[error("\"{}\" is not git repository", .0.display())]
    NotARepository(PathBuf),
    #[error("Git discover error: {0}")]
    Discover(#[from] Box<gix::discover::Error>),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Unsupported: {0}")]
    Unsupported(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<gix::discover::Error> for CcstatError {
    fn from(err: gix::discover::Error) -> Self {
        CcstatError::Discover(Box::new(err))
    }
}
