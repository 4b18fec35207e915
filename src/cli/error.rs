use crate::settings;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Settings(#[from] settings::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("aborted")]
    Aborted,
}
