use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use posts_api::application::post_service::PostService;
use posts_api::data::post_repository::SqlitePostRepository;
use posts_api::infrastructure::config::AppConfig;
use posts_api::infrastructure::database::{create_pool, init_schema};
use posts_api::infrastructure::logging::init_logging;
use posts_api::presentation::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config = AppConfig::from_env().expect("invalid configuration");
    let pool = create_pool(&config.database_url)
        .await
        .expect("failed to open database");
    init_schema(&pool).await.expect("failed to create schema");

    let repo = Arc::new(SqlitePostRepository::new(pool));
    let post_service = PostService::new(repo);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(post_service.clone()))
            .configure(handlers::post::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
