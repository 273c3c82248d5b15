use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// One movie info record as served by the movie-info service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct MovieInfo {
    /// Absent until the record has been persisted by the movie-info service.
    pub id: Option<String>,
    pub name: String,
    pub year: i32,
    pub cast: Vec<String>,
    pub release_date: NaiveDate,
}
