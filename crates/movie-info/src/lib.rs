mod client;
mod error;
pub mod models;

pub use client::MovieInfoClient;
pub use error::MovieInfoError;
pub use models::MovieInfo;

pub type Result<T> = std::result::Result<T, MovieInfoError>;
