use reqwest::{Client, StatusCode};

use crate::error::MovieInfoError;
use crate::models::MovieInfo;

pub struct MovieInfoClient {
    client: Client,
    base_url: String,
}

impl MovieInfoClient {
    /// Create a client with a shared reqwest Client and the movie-info
    /// service base URL (e.g. `http://localhost:8080/v1/movieinfos`).
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Fetch one movie info record by id.
    /// GET {base_url}/{id}
    pub async fn fetch(&self, id: &str) -> crate::Result<MovieInfo> {
        let url = self.url(id);
        let response = self.client.get(&url).send().await?;
        self.handle_response(id, response).await
    }

    async fn handle_response(
        &self,
        id: &str,
        response: reqwest::Response,
    ) -> crate::Result<MovieInfo> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(MovieInfoError::NotFound { id: id.to_string() });
        }

        let body = response.text().await?;
        if status.is_client_error() {
            return Err(MovieInfoError::Client {
                status_code: status.as_u16(),
                body,
            });
        }
        if !status.is_success() {
            return Err(MovieInfoError::Server { message: body });
        }

        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| MovieInfoError::Decode {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
