use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NameError {
    /// The value needs a scale label beyond quintillion.
    #[error("{number} is too large to name (maximum is {max})")]
    OutOfRange { number: String, max: u128 },

    #[error("negative numbers are not supported: {0}")]
    Negative(String),

    #[error("not a non-negative decimal integer: {0:?}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, NameError>;
