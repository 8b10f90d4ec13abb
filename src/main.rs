use foodgram::server::{config::Config, model::app::AppState, router, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config).await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), foodgram::server::error::Error> {
    let db = startup::connect_to_database(&config).await?;
    let shopping_list = startup::build_shopping_list_renderer(&config)?;

    let app = router::routes().with_state(AppState { db, shopping_list });

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
