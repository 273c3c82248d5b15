use utoipa::OpenApi;

use crate::models::Movie;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movies API",
        version = "1.0.0"
    ),
    tags(
        (name = "movies", description = "Movie aggregation endpoints")
    ),
    components(schemas(
        Movie,
        movie_info::MovieInfo,
        reviews::Review
    ))
)]
pub struct ApiDoc;
