//! # Routes
//!
//! 스코프별 라우트 구성과 헬스 체크 엔드포인트입니다.
//!
//! ```text
//! /health
//! /api/movies/{idMovie}/comments[/{idComment}]
//! /api/theaters[/{idTheater}]
//! ```

use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::config::Environment;
use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::db::Database;
use crate::handlers;
use crate::services::comments::CommentService;
use crate::services::theaters::TheaterService;

/// 애플리케이션 전체 라우트를 등록합니다.
///
/// 서비스와 데이터베이스 핸들은 `ServiceLocator`에서 가져와 `web::Data`로 공유합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::Data::from(ServiceLocator::get::<Database>()))
        .app_data(web::Data::from(CommentService::instance()))
        .app_data(web::Data::from(TheaterService::instance()));

    cfg.service(health_check);

    configure_comment_routes(cfg);
    configure_theater_routes(cfg);
}

pub fn configure_comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/movies")
            .service(handlers::comments::list_comments)
            .service(handlers::comments::get_comment)
            .service(handlers::comments::add_comment)
            .service(handlers::comments::update_comment)
            .service(handlers::comments::delete_comment),
    );
}

pub fn configure_theater_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/theaters")
            .app_data(json_config())
            .service(handlers::theaters::list_theaters)
            .service(handlers::theaters::get_theater)
            .service(handlers::theaters::create_theater)
            .service(handlers::theaters::update_theater)
            .service(handlers::theaters::delete_theater),
    );
}

/// JSON 본문 추출 실패(형식 오류, 객체가 아닌 값, Content-Type 누락)를 응답 봉투로 변환합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// 서비스 상태와 MongoDB `ping` 결과를 반환합니다. 항상 200입니다.
#[actix_web::get("/health")]
async fn health_check(database: Option<web::Data<Database>>) -> HttpResponse {
    let database_status = match database {
        Some(database) => match database.ping().await {
            Ok(()) => "up",
            Err(e) => {
                log::warn!("⚠️ MongoDB ping 실패: {}", e);
                "down"
            }
        },
        None => "down",
    };

    HttpResponse::Ok().json(json!({
        "status": 200,
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "environment": Environment::current().as_str(),
        "database": database_status,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_without_database_reports_down() {
        let app = test::init_service(App::new().service(health_check)).await;

        let response = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["status"], 200);
        assert_eq!(body["database"], "down");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_json_error_handler_renders_envelope() {
        #[actix_web::post("/echo")]
        async fn echo(body: web::Json<mongodb::bson::Document>) -> HttpResponse {
            HttpResponse::Ok().body(body.len().to_string())
        }

        let app = test::init_service(App::new().app_data(json_config()).service(echo)).await;

        let request = test::TestRequest::post()
            .uri("/echo")
            .insert_header(("content-type", "application/json"))
            .set_payload("not json")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["message"], "Invalid request body");
        assert!(body["error"].is_string());
    }
}
