//! # Application Error Handling System
//!
//! API 전역에서 사용하는 에러 타입과 HTTP 응답 변환을 정의합니다.
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하고,
//! 에러는 `actix_web::ResponseError` 구현을 통해 공통 응답 봉투로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `InvalidId` | 400 Bad Request | 경로의 ObjectId 형식 오류 |
//! | `ValidationError` | 400 Bad Request | 요청 본문 파싱 실패 |
//! | `NotFound` | 404 Not Found | 일치하는 문서 없음 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 드라이버 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! { "status": 400, "message": "Invalid comment ID", "error": "ID format incorrect" }
//! { "status": 404, "message": "Comment not found" }
//! { "status": 500, "message": "Internal Server Error", "error": "<driver message>" }
//! ```
//!
//! 500 응답의 `error` 필드에는 드라이버가 돌려준 원본 메시지가 그대로 담깁니다.

use actix_web::ResponseError;
use actix_web::http::StatusCode;
use log::{error, warn};
use thiserror::Error;

use crate::domain::dto::response::ApiResponse;

/// ID 형식 오류 시 `error` 필드에 담기는 상세 메시지
pub const ID_FORMAT_INCORRECT: &str = "ID format incorrect";

/// 5xx 응답의 공통 `message`
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 하나의 HTTP 상태 코드에 대응합니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // 경로 파라미터 검증
/// let id = parse_object_id(raw, "Invalid theater ID")?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 경로에 포함된 식별자가 24자리 16진수가 아님 (400)
    ///
    /// 값은 클라이언트에게 그대로 전달되는 메시지입니다 (예: `Invalid movie ID`).
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// 요청 본문 검증 실패 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 일치하는 문서가 없음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// MongoDB 연산 중 발생한 에러 (500)
    ///
    /// 드라이버 에러 메시지를 가공하지 않고 보관합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 봉투로 변환합니다.
    ///
    /// `status`는 실제 HTTP 상태 코드와 항상 동일합니다.
    pub fn to_envelope(&self) -> ApiResponse {
        let status = self.status_code();

        match self {
            AppError::InvalidId(message) => {
                ApiResponse::new(status, message).with_error(ID_FORMAT_INCORRECT)
            }
            AppError::ValidationError(detail) => {
                ApiResponse::new(status, "Invalid request body").with_error(detail)
            }
            AppError::NotFound(message) => ApiResponse::new(status, message),
            AppError::DatabaseError(raw) | AppError::InternalError(raw) => {
                ApiResponse::new(status, INTERNAL_SERVER_ERROR).with_error(raw)
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidId(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx는 `error!`, 4xx는 `warn!` 레벨로 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            error!("❌ {}", self);
        } else {
            warn!("⚠️ {}", self);
        }

        self.to_envelope().into_response()
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let document = mongodb::bson::to_document(&comment)
///     .context("Failed to encode comment")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
