use std::sync::Arc;

use movie_info::MovieInfoClient;
use reviews::ReviewsClient;

use crate::config::Config;
use crate::services::MovieService;

#[derive(Clone)]
pub struct AppState {
    pub movie_info: Arc<MovieInfoClient>,
    pub reviews: Arc<ReviewsClient>,
    pub movies: Arc<MovieService>,
}

impl AppState {
    /// Wire up the downstream clients and the aggregation service. Both
    /// clients share one reqwest Client carrying the configured timeout.
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let movie_info = Arc::new(MovieInfoClient::new(
            client.clone(),
            &config.movie_info_url,
        ));
        let reviews = Arc::new(ReviewsClient::new(client, &config.reviews_url));
        let movies = Arc::new(MovieService::new(
            Arc::clone(&movie_info),
            Arc::clone(&reviews),
        ));

        Ok(Self {
            movie_info,
            reviews,
            movies,
        })
    }
}
