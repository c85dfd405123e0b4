use thiserror::Error;

/// Failures from browser glue and startup. None of them stop the page; the
/// event handler that hits one logs it and carries on.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("embedded site content is invalid: {0}")]
    Content(#[from] serde_json::Error),
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("local storage failed: {0}")]
    Storage(String),
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    #[error("opening a new tab failed: {0}")]
    OpenTab(String),
    #[error("intersection observer failed: {0}")]
    Observer(String),
}
