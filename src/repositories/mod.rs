//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 `inventory`로 등록되어 `ServiceLocator`에서 싱글톤으로 관리되며,
//! 드라이버 대신 [`DocumentCollection`](crate::db::store::DocumentCollection)에 의존합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::theaters::TheaterRepository;
//!
//! let theater_repo = TheaterRepository::instance();
//! let theaters = theater_repo.find_all(10).await?;
//! ```

pub mod comments;
pub mod theaters;
