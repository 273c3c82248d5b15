use std::sync::Arc;

use movie_info::MovieInfoClient;
use reviews::ReviewsClient;

use crate::error::AppResult;
use crate::models::Movie;

/// Aggregates one movie info record with its reviews.
pub struct MovieService {
    movie_info: Arc<MovieInfoClient>,
    reviews: Arc<ReviewsClient>,
}

impl MovieService {
    pub fn new(movie_info: Arc<MovieInfoClient>, reviews: Arc<ReviewsClient>) -> Self {
        Self {
            movie_info,
            reviews,
        }
    }

    /// Fetch the movie info record, then its reviews, and compose the two.
    ///
    /// The calls are strictly sequential: the reviews service is only
    /// contacted once movie info resolved, so a miss or fault there produces
    /// no call against the reviews service. Any error from either client
    /// fails the whole request; no partial result is ever returned.
    pub async fn get_movie(&self, id: &str) -> AppResult<Movie> {
        let movie_info = self.movie_info.fetch(id).await?;
        let reviews = self.reviews.fetch_by_movie_info_id(id).await?;
        Ok(Movie {
            movie_info,
            reviews,
        })
    }
}
