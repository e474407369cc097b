use wasm_bindgen::JsValue;

/// Failures in the browser glue. The gesture core itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("No window available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Failed to schedule animation timer: {0}")]
    Scheduler(String),

    #[error("Malformed board config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid board config: {0}")]
    InvalidConfig(String),
}

impl BoardError {
    pub fn scheduler(err: JsValue) -> Self {
        BoardError::Scheduler(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
