//! mflix API
//!
//! MongoDB `sample_mflix` 데이터베이스의 `comments`, `theaters` 컬렉션에 대한
//! CRUD REST API입니다.
//!
//! # Features
//!
//! - **댓글**: 영화별 댓글 목록/조회/작성/수정/삭제
//! - **극장**: 극장 목록(최대 10건)/조회/생성/수정/삭제
//! - **식별자 검증**: 모든 경로 식별자는 쿼리 전에 24자리 16진수인지 확인
//! - **공통 응답 봉투**: `{ status, message?, data?, error? }`
//! - **싱글톤 DI**: `inventory` 기반 `ServiceLocator`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/movies, /api/theaters, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 식별자 검증, 응답 봉투
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 규칙, 404 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 필터/업데이트 문서 구성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← DocumentCollection
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use mflix_api::services::theaters::TheaterService;
//!
//! let theater_service = TheaterService::instance();
//! let theaters = theater_service.list().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
