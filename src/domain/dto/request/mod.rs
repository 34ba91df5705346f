//! # 요청 DTO 모듈
//!
//! 경로 파라미터 구조체와 식별자 검증 게이트를 제공합니다.
//! 요청 본문은 스키마 없이 `Document`로 그대로 받으므로 별도 DTO가 없습니다.

pub mod paths;

pub use paths::{CommentPath, MoviePath, TheaterPath};
