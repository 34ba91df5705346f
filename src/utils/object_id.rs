//! # ObjectId 검증 유틸리티
//!
//! 경로 파라미터로 들어온 식별자가 MongoDB ObjectId 형식(24자리 16진수)인지
//! 확인합니다. 모든 쿼리는 이 검증을 통과한 값만 사용합니다.

use mongodb::bson::oid::ObjectId;
use validator::ValidationError;

use crate::core::errors::{AppError, ID_FORMAT_INCORRECT};

/// ObjectId 16진수 표현의 길이
pub const OBJECT_ID_HEX_LEN: usize = 24;

/// 문자열이 24자리 16진수 ObjectId인지 확인합니다.
///
/// 대소문자를 구분하지 않으며, 부작용이 없습니다.
///
/// # Examples
///
/// ```rust
/// use mflix_api::utils::object_id::is_valid_object_id;
///
/// assert!(is_valid_object_id("5a9427648b0beebeb69579e7"));
/// assert!(!is_valid_object_id("not-an-id"));
/// ```
pub fn is_valid_object_id(value: &str) -> bool {
    value.len() == OBJECT_ID_HEX_LEN && value.bytes().all(|b| b.is_ascii_hexdigit())
}

fn invalid_object_id() -> ValidationError {
    ValidationError::new("invalid_object_id").with_message(ID_FORMAT_INCORRECT.into())
}

/// `#[validate(custom(function = "validate_object_id"))]`에서 사용하는 검증 함수
pub fn validate_object_id(value: &str) -> Result<(), ValidationError> {
    if is_valid_object_id(value) {
        Ok(())
    } else {
        Err(invalid_object_id())
    }
}

/// 검증 후 ObjectId로 변환합니다.
///
/// # Errors
///
/// * `AppError::InvalidId(message)` - 형식이 올바르지 않은 경우
pub fn parse_object_id(value: &str, message: &str) -> Result<ObjectId, AppError> {
    if !is_valid_object_id(value) {
        return Err(AppError::InvalidId(message.to_string()));
    }

    ObjectId::parse_str(value).map_err(|_| AppError::InvalidId(message.to_string()))
}
