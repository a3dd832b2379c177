use std::io;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use chrono::Duration;
use log::{info, warn};

use todo_api::auth::{PasswordHasher, TokenKeys};
use todo_api::config::Config;
use todo_api::routes;
use todo_api::store::{MemoryStore, PgStore, TodoStore, UserStore};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    match config.database_url.clone() {
        Some(database_url) => {
            let store = PgStore::connect(&database_url, config.database_max_connections)
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e))?;
            store
                .migrate()
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

            let result = serve(&config, store.clone()).await;
            store.close().await;
            info!("database pool closed");
            result
        }
        None => {
            warn!("DATABASE_URL is not set; data is kept in memory and lost on exit");
            serve(&config, MemoryStore::new()).await
        }
    }
}

async fn serve<S>(config: &Config, store: S) -> io::Result<()>
where
    S: UserStore + TodoStore + Send + Sync + 'static,
{
    let store = web::Data::new(store);
    let keys = web::Data::new(TokenKeys::new(
        &config.jwt_secret,
        Duration::hours(config.jwt_expiration_hours),
    ));
    let hasher = web::Data::new(PasswordHasher::new(config.bcrypt_cost));

    info!("Starting todo-api server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(keys.clone())
            .app_data(hasher.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config::<S>)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
