mod movies;

// Re-export all handlers
pub use movies::get_movie_by_id;

// Re-export utoipa path structs for OpenAPI routing
#[doc(hidden)]
pub use movies::__path_get_movie_by_id;
