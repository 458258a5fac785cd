use std::io;
use thiserror::Error;

/// Failures of the terminal front end. Counting and sorting cannot fail.
#[derive(Error, Debug)]
pub enum WordTallyError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, WordTallyError>;
