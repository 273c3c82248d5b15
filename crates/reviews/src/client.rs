use reqwest::{Client, StatusCode};

use crate::error::ReviewsError;
use crate::models::Review;

/// Query parameter the reviews service filters on. Part of the wire contract.
const MOVIE_INFO_ID_PARAM: &str = "movieInfoId";

pub struct ReviewsClient {
    client: Client,
    base_url: String,
}

impl ReviewsClient {
    /// Create a client with a shared reqwest Client and the reviews service
    /// base URL (e.g. `http://localhost:8081/v1/reviews`).
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch all reviews for one movie info id.
    /// GET {base_url}?movieInfoId={id}
    ///
    /// A 404 from the reviews service means the movie simply has no reviews
    /// yet and resolves to an empty list, not an error.
    pub async fn fetch_by_movie_info_id(&self, movie_info_id: &str) -> crate::Result<Vec<Review>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[(MOVIE_INFO_ID_PARAM, movie_info_id)])
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn handle_response(&self, response: reqwest::Response) -> crate::Result<Vec<Review>> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let body = response.text().await?;
        if status.is_client_error() {
            return Err(ReviewsError::Client {
                status_code: status.as_u16(),
                body,
            });
        }
        if !status.is_success() {
            return Err(ReviewsError::Server { message: body });
        }

        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| ReviewsError::Decode {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
