use tokio::net::TcpListener;

/// Standalone entry point for manual poking; tests embed the router
/// directly.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("mock kos backend listening on {addr}");
    mock_server::run(listener).await
}
