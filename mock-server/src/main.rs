use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// `PORT` picks the port (default 3000). `MOCK_SEED` may name a JSON file
/// holding an array of todos to start with.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let seed = match std::env::var("MOCK_SEED") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(std::io::Error::other)?
        }
        Err(_) => Vec::new(),
    };

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    mock_server::serve(listener, seed).await
}
