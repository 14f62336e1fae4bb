#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let addr = std::env::var("STOCKROOM_ADDR").unwrap_or_else(|_| {
        tracing::debug!("STOCKROOM_ADDR not set; using default bind address");
        "0.0.0.0:8080".to_string()
    });

    let app = stockroom_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
