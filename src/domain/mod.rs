//! # Domain Layer Module
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 컬렉션에 쓰는 문서 (Comment, NewTheater)
//! └── DTOs      - 경로 파라미터 요청 / 응답 봉투
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`]
//! `comments`, `theaters` 컬렉션에 기록되는 문서 모델입니다.
//!
//! ### [`dto`]
//! - `request` - `validator`로 검증되는 경로 파라미터 (`{idMovie}`, `{idComment}`, `{idTheater}`)
//! - `response` - `{ status, message?, data?, error? }` 응답 봉투와 결과 페이로드

pub mod entities;
pub mod dto;

pub use entities::*;
pub use dto::*;
