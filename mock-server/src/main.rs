use score_stub::Stubs;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,score_stub=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let stubs = match std::env::var("STUBS") {
        Ok(path) => {
            let stubs = Stubs::from_json(&std::fs::read_to_string(&path)?)?;
            info!(%path, count = stubs.len(), "loaded stubs");
            stubs
        }
        Err(_) => Stubs::new(),
    };

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    score_stub::run(listener, stubs).await?;
    Ok(())
}
