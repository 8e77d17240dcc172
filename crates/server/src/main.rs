use database::{
    db::create_connection,
    services::{CatalogService, PlanService},
};
use log::info;
use migration::{Migrator, MigratorTrait};
use planner::Advisor;
use server::{AppState, app, config::Config, utils::shutdown::shutdown_signal};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().expect("Invalid configuration");

    let db = create_connection(&config.database_url)
        .await
        .expect("Failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        info!("Migrations applied");
    }

    let catalog = Arc::new(CatalogService::new(db.clone()));
    let advisor = Advisor::new(
        catalog.clone(),
        catalog.clone(),
        Arc::new(PlanService::new(db)),
        catalog,
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .unwrap();
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app(AppState::new(advisor)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
