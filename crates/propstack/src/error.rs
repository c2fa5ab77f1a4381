use thiserror::Error;

/// Errors surfaced while loading configuration.
///
/// Resolution itself never returns an error: an unresolvable key is `None`
/// (or the caller's default, for the typed accessors), and I/O failures
/// inside a source are logged and treated as "this source has nothing".
#[derive(Error, Debug)]
pub enum StackError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StackError>;
