use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use rooster::adapters::in_memory::in_memory_clock_store::InMemoryClockStore;
use rooster::adapters::in_memory::in_memory_schedule_store::InMemoryScheduleStore;
use rooster::adapters::in_memory::in_memory_user_directory::InMemoryUserDirectory;
use rooster::core::user::{Role, User};
use rooster::shell::http::router;
use rooster::shell::state::AppState;

fn seed_directory() -> anyhow::Result<InMemoryUserDirectory> {
    // Demo directory, hashed at startup. A real deployment swaps this for a
    // persistent credential store behind the same port.
    let password = std::env::var("SEED_PASSWORD").unwrap_or_else(|_| "changeme".to_string());
    let directory = InMemoryUserDirectory::new();
    directory.insert(User::new("admin", "Admin", Role::Admin, &password)?);
    directory.insert(User::new("sven", "Sven", Role::Employee, &password)?);
    directory.insert(User::new("anna", "Anna", Role::Employee, &password)?);
    directory.insert(User::new("tom", "Tom", Role::Employee, &password)?);
    Ok(directory)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let state = AppState::in_memory(
        Arc::new(seed_directory()?),
        Arc::new(InMemoryScheduleStore::new()),
        Arc::new(InMemoryClockStore::new()),
    );

    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    tracing::info!("rooster listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
