use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("expected a non-empty value, found {0}")]
    InvalidValue(std::string::String),
}
