//! # Core Framework Module
//!
//! 애플리케이션 전역에서 쓰이는 기반 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: `TypeId` 기반 싱글톤 컨테이너
//! - **자동 레지스트리**: `inventory`로 수집된 리포지토리/서비스 생성자
//! - **지연 초기화**: 첫 `get` 시점에 생성, 이후 같은 `Arc<T>` 재사용
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 응답 봉투(envelope) 생성
//! - **ErrorContext**: 외부 에러에 문맥 메시지를 붙여 `AppError`로 변환
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::errors::AppResult;
//! use crate::core::registry::ServiceLocator;
//! use crate::services::comments::CommentService;
//!
//! async fn list(movie_id: ObjectId) -> AppResult<Vec<Document>> {
//!     let service: Arc<CommentService> = ServiceLocator::get::<CommentService>();
//!     service.list_for_movie(movie_id).await
//! }
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
