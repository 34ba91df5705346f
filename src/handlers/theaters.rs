//! # Theater HTTP Handlers
//!
//! 극장 엔드포인트입니다. (`/api/theaters` 스코프)
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `` | 극장 목록 (최대 10건) | 200 |
//! | `GET` | `/{idTheater}` | 극장 조회 | 200 / 404 |
//! | `POST` | `/{idTheater}` | 본문으로 극장 생성, `_id`는 경로 값 | 201 / 400 |
//! | `PUT` | `/{idTheater}` | 본문 필드 병합 | 200 / 400 / 404 |
//! | `DELETE` | `/{idTheater}` | 극장 삭제 | 200 / 404 |
//!
//! 본문은 JSON 객체여야 하며, 그렇지 않으면 `JsonConfig` 에러 핸들러가 400으로 응답합니다.
//! 본문에 `_id`를 넣을 경우 경로의 `{idTheater}`와 같아야 하며, 다르면 400입니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, post, put, web};
use mongodb::bson::Document;

use crate::core::errors::{AppError, ErrorContext};
use crate::domain::dto::request::TheaterPath;
use crate::domain::dto::response::{ApiResponse, DeletedResponse, InsertedResponse, ModifiedResponse};
use crate::services::theaters::TheaterService;
use crate::utils::bson_json::{bson_to_json, document_to_json, documents_to_json};

#[get("")]
pub async fn list_theaters(service: web::Data<TheaterService>) -> Result<HttpResponse, AppError> {
    let theaters = service.list().await?;

    Ok(ApiResponse::ok().with_data(documents_to_json(theaters)).into_response())
}

#[get("/{idTheater}")]
pub async fn get_theater(
    path: web::Path<TheaterPath>,
    service: web::Data<TheaterService>,
) -> Result<HttpResponse, AppError> {
    let theater_id = path.theater_id()?;
    let theater = service.get(theater_id).await?;

    Ok(ApiResponse::ok().with_data(document_to_json(theater)).into_response())
}

#[post("/{idTheater}")]
pub async fn create_theater(
    path: web::Path<TheaterPath>,
    body: web::Json<Document>,
    service: web::Data<TheaterService>,
) -> Result<HttpResponse, AppError> {
    let theater_id = path.theater_id()?;
    let inserted_id = service.create(theater_id, body.into_inner()).await?;

    let data = serde_json::to_value(InsertedResponse {
        inserted_id: bson_to_json(inserted_id),
    })
    .context("응답 직렬화 실패")?;

    Ok(ApiResponse::new(StatusCode::CREATED, "Theater created")
        .with_data(data)
        .into_response())
}

#[put("/{idTheater}")]
pub async fn update_theater(
    path: web::Path<TheaterPath>,
    body: web::Json<Document>,
    service: web::Data<TheaterService>,
) -> Result<HttpResponse, AppError> {
    let theater_id = path.theater_id()?;
    let modified_count = service.update(theater_id, body.into_inner()).await?;

    let data = serde_json::to_value(ModifiedResponse { modified_count })
        .context("응답 직렬화 실패")?;

    Ok(ApiResponse::new(StatusCode::OK, "Theater updated")
        .with_data(data)
        .into_response())
}

#[delete("/{idTheater}")]
pub async fn delete_theater(
    path: web::Path<TheaterPath>,
    service: web::Data<TheaterService>,
) -> Result<HttpResponse, AppError> {
    let theater_id = path.theater_id()?;
    let deleted_count = service.remove(theater_id).await?;

    let data = serde_json::to_value(DeletedResponse { deleted_count })
        .context("응답 직렬화 실패")?;

    Ok(ApiResponse::new(StatusCode::OK, "Theater deleted")
        .with_data(data)
        .into_response())
}
