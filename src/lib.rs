pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::manufacturer_service::ManufacturerService;
use crate::domain::ports::ManufacturerRepository;
use crate::errors::StartupError;
use crate::handlers::manufacturers::SharedService;
use crate::handlers::ApiDoc;
use crate::infrastructure::manufacturer_repo::DieselManufacturerRepository;
use crate::infrastructure::memory_repo::InMemoryManufacturerRepository;

pub use config::Config;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), StartupError> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| StartupError::Migrations(e.to_string()))?;
    Ok(())
}

/// Picks the store from `config`: Postgres when a database URL is set (pool
/// created and migrated here), in-memory otherwise.
pub fn build_service(config: &Config) -> Result<SharedService, StartupError> {
    let repo: Box<dyn ManufacturerRepository> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url, config.pool_size)?;
            run_migrations(&pool)?;
            Box::new(DieselManufacturerRepository::new(pool))
        }
        None => {
            log::warn!("DATABASE_URL not set, keeping manufacturers in memory");
            Box::new(InMemoryManufacturerRepository::new())
        }
    };
    Ok(ManufacturerService::new(repo))
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    service: SharedService,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(service);
    let openapi = ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Logger::default())
            .configure(handlers::manufacturers::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
