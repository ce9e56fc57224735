use pitchzy_api::{
    api::create_router, config::Config, email::HttpMailer, observability::init_tracing,
};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize tracing/logging
    init_tracing(&config.observability);

    tracing::info!("Starting pitchZY contact API");
    tracing::info!("Configuration loaded: {:?}", config.server);

    // Create the email dispatcher
    let mailer = Arc::new(HttpMailer::new(config.email.clone()));

    // Bind server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create router
    let app = create_router(config, mailer)?;

    tracing::info!("Listening on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Contact API is ready to accept requests");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
