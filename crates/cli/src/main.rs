use server::Config;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8082".to_string())
        .parse()?;
    let movie_info_url = env::var("MOVIE_INFO_URL")
        .unwrap_or_else(|_| "http://localhost:8080/v1/movieinfos".to_string());
    let reviews_url =
        env::var("REVIEWS_URL").unwrap_or_else(|_| "http://localhost:8081/v1/reviews".to_string());

    let mut config = Config::new(movie_info_url, reviews_url);
    if let Ok(secs) = env::var("REQUEST_TIMEOUT_SECS") {
        config = config.with_request_timeout(Duration::from_secs(secs.parse()?));
    }

    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    server::run_server(addr, config).await
}
