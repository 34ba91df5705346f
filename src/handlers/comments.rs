//! # Comment HTTP Handlers
//!
//! 영화별 댓글 엔드포인트입니다. (`/api/movies` 스코프)
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/{idMovie}/comments` | 영화의 댓글 목록 | 200 |
//! | `GET` | `/{idMovie}/comments/{idComment}` | 댓글 조회 | 200 / 404 |
//! | `POST` | `/{idMovie}/comments/{idComment}` | 댓글 작성 | 201 |
//! | `PUT` | `/{idMovie}/comments/{idComment}` | 댓글 수정 | 200 / 404 |
//! | `DELETE` | `/{idMovie}/comments/{idComment}` | 댓글 삭제 | 200 / 404 |
//!
//! 경로의 식별자가 24자리 16진수가 아니면 서비스 호출 없이 400으로 응답합니다.
//! 요청 본문은 읽지 않습니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::core::errors::{AppError, ErrorContext};
use crate::domain::dto::request::{CommentPath, MoviePath};
use crate::domain::dto::response::{ApiResponse, InsertedResponse};
use crate::services::comments::CommentService;
use crate::utils::bson_json::{bson_to_json, document_to_json, documents_to_json};

#[get("/{idMovie}/comments")]
pub async fn list_comments(
    path: web::Path<MoviePath>,
    service: web::Data<CommentService>,
) -> Result<HttpResponse, AppError> {
    let movie_id = path.movie_id()?;
    let comments = service.list_for_movie(movie_id).await?;

    Ok(ApiResponse::ok().with_data(documents_to_json(comments)).into_response())
}

#[get("/{idMovie}/comments/{idComment}")]
pub async fn get_comment(
    path: web::Path<CommentPath>,
    service: web::Data<CommentService>,
) -> Result<HttpResponse, AppError> {
    let (movie_id, comment_id) = path.ids()?;
    let comment = service.get(movie_id, comment_id).await?;

    Ok(ApiResponse::ok().with_data(document_to_json(comment)).into_response())
}

/// 댓글 작성
///
/// `{idComment}` 세그먼트는 라우팅에만 쓰이고 검증하지 않습니다.
#[post("/{idMovie}/comments/{idComment}")]
pub async fn add_comment(
    path: web::Path<CommentPath>,
    service: web::Data<CommentService>,
) -> Result<HttpResponse, AppError> {
    let movie_id = path.movie_id()?;
    let inserted_id = service.add(movie_id).await?;

    let data = serde_json::to_value(InsertedResponse {
        inserted_id: bson_to_json(inserted_id),
    })
    .context("응답 직렬화 실패")?;

    Ok(ApiResponse::new(StatusCode::CREATED, "Comment added")
        .with_data(data)
        .into_response())
}

#[put("/{idMovie}/comments/{idComment}")]
pub async fn update_comment(
    path: web::Path<CommentPath>,
    service: web::Data<CommentService>,
) -> Result<HttpResponse, AppError> {
    let (movie_id, comment_id) = path.ids()?;
    service.edit(movie_id, comment_id).await?;

    Ok(ApiResponse::new(StatusCode::OK, "Comment updated").into_response())
}

#[delete("/{idMovie}/comments/{idComment}")]
pub async fn delete_comment(
    path: web::Path<CommentPath>,
    service: web::Data<CommentService>,
) -> Result<HttpResponse, AppError> {
    let (movie_id, comment_id) = path.ids()?;
    service.remove(movie_id, comment_id).await?;

    Ok(ApiResponse::new(StatusCode::OK, "Comment deleted").into_response())
}
