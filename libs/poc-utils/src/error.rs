#[derive(thiserror::Error, Debug)]
pub enum UtilsError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
