use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuillError {
    #[error("config error: {0}")]
    Config(String),

    #[error("document error: {0}")]
    Document(String),

    #[error("export error: {0}")]
    Export(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type QuillResult<T> = Result<T, QuillError>;
