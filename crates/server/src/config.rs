use std::time::Duration;

/// Default timeout applied to every downstream call. The services this
/// aggregator talks to enforce no deadline of their own, so an unbounded
/// request would otherwise hold its connection until the peer gives up.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the movie-info service, e.g. `http://localhost:8080/v1/movieinfos`.
    pub movie_info_url: String,
    /// Base URL of the reviews service, e.g. `http://localhost:8081/v1/reviews`.
    pub reviews_url: String,
    /// Timeout for each outbound call to either downstream service.
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(movie_info_url: impl Into<String>, reviews_url: impl Into<String>) -> Self {
        Self {
            movie_info_url: movie_info_url.into(),
            reviews_url: reviews_url.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
