//! 공통 응답 봉투
//!
//! 모든 엔드포인트는 성공/실패와 관계없이 같은 JSON 구조로 응답합니다.
//! HTTP 상태 코드가 기준이며, 같은 값이 본문의 `status`에도 기록됩니다.
//!
//! ```json
//! { "status": 201, "message": "Comment added", "data": { "insertedId": "..." } }
//! ```

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// API 응답 봉투
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP 상태 코드와 동일한 값
    pub status: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// 실패 상세 (400 형식 오류, 500 드라이버 메시지)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// 메시지를 가진 응답 생성
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: Some(message.into()),
            data: None,
            error: None,
        }
    }

    /// 데이터만 담는 응답 생성 (조회 성공)
    pub fn with_status(status: StatusCode) -> Self {
        Self {
            status: status.as_u16(),
            message: None,
            data: None,
            error: None,
        }
    }

    pub fn ok() -> Self {
        Self::with_status(StatusCode::OK)
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// `status`를 실제 HTTP 상태 코드로 사용해 응답을 만듭니다.
    pub fn into_response(self) -> HttpResponse {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        HttpResponse::build(status).json(self)
    }
}
