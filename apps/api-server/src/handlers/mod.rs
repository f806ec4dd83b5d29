//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;
mod users;


use actix_web::web;
use uuid::Uuid;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/User")
                    .route("", web::get().to(users::get_all))
                    .route("", web::post().to(users::create))
                    .route("", web::patch().to(users::update))
                    .route("/{id}", web::get().to(users::get_by_id))
                    .route("/{id}", web::delete().to(users::delete)),
            )
            .service(
                web::scope("/Post")
                    .route("", web::get().to(posts::get_all))
                    .route("", web::post().to(posts::create))
                    .route("", web::patch().to(posts::update))
                    .route(
                        "/GetPostsByUserId/{userId}",
                        web::get().to(posts::get_by_user_id),
                    )
                    .route("/{id}", web::get().to(posts::get_by_id))
                    .route("/{id}", web::delete().to(posts::delete)),
            )
            .service(
                web::scope("/Comment")
                    .route("", web::get().to(comments::get_all))
                    .route("", web::post().to(comments::create))
                    .route("", web::patch().to(comments::update))
                    .route(
                        "/GetCommentsByPostId/{postId}",
                        web::get().to(comments::get_by_post_id),
                    )
                    .route(
                        "/GetCommentsByUserId/{userId}",
                        web::get().to(comments::get_by_user_id),
                    )
                    .route(
                        "/GetCommentsByPostAndUserId/{postId}/{userId}",
                        web::get().to(comments::get_by_post_and_user),
                    )
                    .route("/{id}", web::get().to(comments::get_by_id))
                    .route("/{id}", web::delete().to(comments::delete)),
            ),
    );
}

/// JSON body settings: a body that does not deserialize is a 400 problem.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Path segments arrive as text so a malformed id is reported as 400, not 404.
fn parse_id(raw: &str, name: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::BadRequest(format!("Incorrect parameter {}: {}", name, raw)))
}
