use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("gist request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("gist API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("gist response parse failed: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}
