//! One-shot brand catalogue seeder.
//!
//! Applies migrations against `DATABASE_URL` and inserts the default brand
//! names, skipping any that already exist.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vehicle_manager_api::config::ServerConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vehicle_manager_db=info,vehicle_manager_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    let pool = vehicle_manager_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("Failed to connect to database");

    vehicle_manager_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let inserted = vehicle_manager_db::seed::seed_brands(&pool)
        .await
        .expect("Failed to seed brands");
    tracing::info!(
        inserted,
        total = vehicle_manager_db::seed::BRAND_NAMES.len(),
        "Brand seeding complete"
    );

    pool.close().await;
}
