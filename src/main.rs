use accounts::server::{
    config::Config, error::Error, model::app::AppState, router, startup,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "accounts=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;

    let state = AppState::from((db, config.auth_domain.clone()));
    let app = router::routes().with_state(state).layer(session);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;

    tracing::info!(
        listen_addr = %config.listen_addr,
        auth_domain = %config.auth_domain,
        "Starting server"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
