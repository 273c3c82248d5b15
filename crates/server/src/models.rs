use movie_info::MovieInfo;
use reviews::Review;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The composed result of one movie info record plus its reviews. Built per
/// request and never persisted; review order is the reviews service's
/// response order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_info: MovieInfo,
    pub reviews: Vec<Review>,
}
