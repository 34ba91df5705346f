//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`object_id`] - 경로 식별자(ObjectId) 검증
//! - [`bson_json`] - 저장 문서를 API 응답용 JSON으로 변환
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::object_id::is_valid_object_id;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! assert!(is_valid_object_id("5a9427648b0beebeb69579e7"));
//! print_boxed_title("System Initialized");
//! ```

pub mod object_id;
pub mod bson_json;
pub mod display_terminal;
