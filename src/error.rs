/// Failure of the JSON-text entry point. Decoding an in-memory value is total
/// and never produces this.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
