use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::Movie;
use crate::state::AppState;

/// Retrieve one movie with its reviews
#[utoipa::path(
    get,
    path = "/v1/movies/{id}",
    tag = "movies",
    params(
        ("id" = String, Path, description = "Movie info id")
    ),
    responses(
        (status = 200, description = "Movie info composed with its reviews", body = Movie),
        (status = 404, description = "No movie info available for the id"),
        (status = 502, description = "A downstream service failed")
    )
)]
pub async fn get_movie_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    let movie = state.movies.get_movie(&id).await?;
    Ok(Json(movie))
}
