mod client;
mod error;
pub mod models;

pub use client::ReviewsClient;
pub use error::ReviewsError;
pub use models::Review;

pub type Result<T> = std::result::Result<T, ReviewsError>;
