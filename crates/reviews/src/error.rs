use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("reviews service rejected the request: {status_code} - {body}")]
    Client { status_code: u16, body: String },

    #[error("reviews service error: {message}")]
    Server { message: String },

    #[error("failed to decode reviews at {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
