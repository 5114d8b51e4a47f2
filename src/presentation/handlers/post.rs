use actix_web::http::header;
use actix_web::{HttpResponse, get, post, put, web};
use serde_json::Value;
use tracing::info;

use crate::application::post_service::PostService;
use crate::data::post_repository::SqlitePostRepository;
use crate::domain::error::ApiError;
use crate::presentation::dto::{ListPostsQuery, UpdatePostRequest};
use crate::presentation::middleware::{AcceptJson, RequireJson};
use crate::presentation::validation::validate_post_payload;

/// Mounts the `/api` scope. The Accept guard covers every route; the
/// Content-Type guard only wraps the write routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(AcceptJson)
            .service(list_posts)
            .service(get_post)
            .service(
                web::scope("")
                    .wrap(RequireJson)
                    .service(create_post)
                    .service(update_post),
            ),
    );
}

#[get("/posts")]
async fn list_posts(
    service: web::Data<PostService<SqlitePostRepository>>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse, ApiError> {
    let posts = service.list_posts(query.into_inner().into_filter()).await?;

    info!(count = posts.len(), "posts listed");

    Ok(HttpResponse::Ok().json(posts))
}

#[get("/posts/{id}")]
async fn get_post(
    service: web::Data<PostService<SqlitePostRepository>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let post = service.get_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[post("/posts")]
async fn create_post(
    service: web::Data<PostService<SqlitePostRepository>>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let (title, body) = validate_post_payload(&payload)?;
    let post = service.create_post(title, body).await?;

    info!(post_id = post.id, "post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/posts/{}", post.id)))
        .json(post))
}

#[put("/posts/{id}")]
async fn update_post(
    service: web::Data<PostService<SqlitePostRepository>>,
    path: web::Path<i64>,
    payload: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let post = service
        .update_post(path.into_inner(), payload.title, payload.body)
        .await?;

    info!(post_id = post.id, "post updated");

    Ok(HttpResponse::Ok().json(post))
}
