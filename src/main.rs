use dotenvy::dotenv;
use manufacturer_service::errors::StartupError;
use manufacturer_service::{build_server, build_service, Config};

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env()?;
    let service = build_service(&config)?;

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    build_server(service, &config.host, config.port)?.await?;
    Ok(())
}
