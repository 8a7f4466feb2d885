use dioxus_logger::tracing::{self, Level};
use mintgate::server::{config::Config, router, scheduler::Scheduler, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO).expect("Failed to initialize logger");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();
    let state = startup::build_app_state(&config, db).unwrap();

    Scheduler::new(state.rate_limiter.clone())
        .await
        .unwrap()
        .start()
        .await
        .unwrap();

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .unwrap();

    tracing::info!(
        "Starting server on {} for ticker {}",
        config.bind_address,
        config.supported_ticker
    );

    let app = router::routes().with_state(state);

    axum::serve(listener, app).await.unwrap();
}
