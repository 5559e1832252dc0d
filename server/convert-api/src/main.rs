//! Binary entrypoint for the convert API.

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "4447".into())
    .parse()
    .expect("PORT must be a valid u16");

  let addr = SocketAddr::from(([0, 0, 0, 0], port));
  tracing::info!("convert-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, convert_api::app()).await?;

  Ok(())
}
