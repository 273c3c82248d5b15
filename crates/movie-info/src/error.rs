use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovieInfoError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("no movie info available for id {id}")]
    NotFound { id: String },

    #[error("movie info service rejected the request: {status_code} - {body}")]
    Client { status_code: u16, body: String },

    #[error("movie info service error: {message}")]
    Server { message: String },

    #[error("failed to decode movie info at {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
