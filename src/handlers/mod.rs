//! # HTTP Handlers
//!
//! 리소스별 요청 핸들러입니다. 각 핸들러는 경로 식별자를 검증하고,
//! `web::Data`로 주입된 서비스를 한 번 호출한 뒤 결과를 [`ApiResponse`](crate::domain::dto::response::ApiResponse)로 감싸 반환합니다.
//! 실패는 `AppError`가 `ResponseError`로 변환합니다.
//!
//! - [`comments`] - `/api/movies/{idMovie}/comments[/{idComment}]`
//! - [`theaters`] - `/api/theaters[/{idTheater}]`

pub mod comments;
pub mod theaters;
