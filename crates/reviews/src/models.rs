use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// One review record as served by the reviews service. `movie_info_id` is a
/// foreign key into the movie-info service; it is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Review {
    pub id: Option<String>,
    pub movie_info_id: String,
    pub comment: String,
    pub rating: f64,
}
