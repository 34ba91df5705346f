//! 경로 파라미터 DTO
//!
//! actix-web `web::Path` 추출기로 역직렬화되는 구조체들입니다.
//! 각 식별자는 `validator`로 형식을 검증한 뒤에만 `ObjectId`로 변환되며,
//! 검증에 실패하면 어떤 쿼리도 실행되지 않습니다.

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::core::errors::{AppError, AppResult};
use crate::utils::object_id::{parse_object_id, validate_object_id};

pub const INVALID_MOVIE_ID: &str = "Invalid movie ID";
pub const INVALID_COMMENT_ID: &str = "Invalid comment ID";
pub const INVALID_THEATER_ID: &str = "Invalid theater ID";

/// 검증 대상 필드 (Rust 필드명, 경로 세그먼트명, 클라이언트 메시지)
type FieldSpec = (&'static str, &'static str, &'static str);

const MOVIE_FIELD: FieldSpec = ("id_movie", "idMovie", INVALID_MOVIE_ID);
const COMMENT_FIELD: FieldSpec = ("id_comment", "idComment", INVALID_COMMENT_ID);
const THEATER_FIELD: FieldSpec = ("id_theater", "idTheater", INVALID_THEATER_ID);

/// 검증 결과를 `AppError::InvalidId`로 변환합니다.
///
/// 여러 필드가 동시에 실패하면 `fields`에 나열된 순서대로 첫 번째 메시지를 사용합니다.
fn ensure_valid(result: Result<(), ValidationErrors>, fields: &[FieldSpec]) -> AppResult<()> {
    let Err(errors) = result else {
        return Ok(());
    };

    let field_errors = errors.field_errors();

    for (name, segment, message) in fields {
        if field_errors.contains_key(*name) || field_errors.contains_key(*segment) {
            return Err(AppError::InvalidId((*message).to_string()));
        }
    }

    Err(AppError::InvalidId(errors.to_string()))
}

/// `/api/movies/{idMovie}/comments`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MoviePath {
    #[serde(rename = "idMovie")]
    #[validate(custom(function = "validate_object_id"))]
    pub id_movie: String,
}

impl MoviePath {
    /// 영화 ID를 검증하고 변환합니다.
    pub fn movie_id(&self) -> AppResult<ObjectId> {
        ensure_valid(self.validate(), &[MOVIE_FIELD])?;
        parse_object_id(&self.id_movie, INVALID_MOVIE_ID)
    }
}

/// `/api/movies/{idMovie}/comments/{idComment}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentPath {
    #[serde(rename = "idMovie")]
    #[validate(custom(function = "validate_object_id"))]
    pub id_movie: String,

    #[serde(rename = "idComment")]
    #[validate(custom(function = "validate_object_id"))]
    pub id_comment: String,
}

impl CommentPath {
    /// 영화 ID와 댓글 ID를 모두 검증하고 `(movie_id, comment_id)`로 반환합니다.
    ///
    /// 둘 다 잘못된 경우 영화 ID 메시지가 우선합니다.
    pub fn ids(&self) -> AppResult<(ObjectId, ObjectId)> {
        ensure_valid(self.validate(), &[MOVIE_FIELD, COMMENT_FIELD])?;

        Ok((
            parse_object_id(&self.id_movie, INVALID_MOVIE_ID)?,
            parse_object_id(&self.id_comment, INVALID_COMMENT_ID)?,
        ))
    }

    /// 영화 ID만 검증합니다.
    ///
    /// 댓글 생성은 `{idComment}` 세그먼트를 사용하지 않으므로 이쪽을 씁니다.
    pub fn movie_id(&self) -> AppResult<ObjectId> {
        parse_object_id(&self.id_movie, INVALID_MOVIE_ID)
    }
}

/// `/api/theaters/{idTheater}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TheaterPath {
    #[serde(rename = "idTheater")]
    #[validate(custom(function = "validate_object_id"))]
    pub id_theater: String,
}

impl TheaterPath {
    pub fn theater_id(&self) -> AppResult<ObjectId> {
        ensure_valid(self.validate(), &[THEATER_FIELD])?;
        parse_object_id(&self.id_theater, INVALID_THEATER_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "5a9427648b0beebeb69579e7";

    fn comment_path(movie: &str, comment: &str) -> CommentPath {
        CommentPath {
            id_movie: movie.to_string(),
            id_comment: comment.to_string(),
        }
    }

    fn invalid_message(result: AppResult<impl std::fmt::Debug>) -> String {
        match result {
            Err(AppError::InvalidId(message)) => message,
            other => panic!("Expected InvalidId, got {:?}", other),
        }
    }

    #[test]
    fn test_movie_path() {
        let path = MoviePath { id_movie: VALID.to_string() };
        assert_eq!(path.movie_id().unwrap().to_hex(), VALID);

        let path = MoviePath { id_movie: "123".to_string() };
        assert_eq!(invalid_message(path.movie_id()), INVALID_MOVIE_ID);
    }

    #[test]
    fn test_comment_path_reports_the_failing_segment() {
        let (movie_id, comment_id) = comment_path(VALID, "000000000000000000000000")
            .ids()
            .unwrap();
        assert_eq!(movie_id.to_hex(), VALID);
        assert_eq!(comment_id.to_hex(), "000000000000000000000000");

        assert_eq!(invalid_message(comment_path("bad", VALID).ids()), INVALID_MOVIE_ID);
        assert_eq!(invalid_message(comment_path(VALID, "bad").ids()), INVALID_COMMENT_ID);
        assert_eq!(invalid_message(comment_path("bad", "bad").ids()), INVALID_MOVIE_ID);
    }

    #[test]
    fn test_comment_path_movie_id_ignores_comment_segment() {
        let path = comment_path(VALID, "anything-goes");

        assert_eq!(path.movie_id().unwrap().to_hex(), VALID);
    }

    #[test]
    fn test_theater_path() {
        let path = TheaterPath { id_theater: VALID.to_string() };
        assert_eq!(path.theater_id().unwrap().to_hex(), VALID);

        let path = TheaterPath { id_theater: "zzzzzzzzzzzzzzzzzzzzzzzz".to_string() };
        assert_eq!(invalid_message(path.theater_id()), INVALID_THEATER_ID);
    }

    #[test]
    fn test_path_deserializes_from_route_segment_names() {
        let path: CommentPath = serde_json::from_value(serde_json::json!({
            "idMovie": VALID,
            "idComment": VALID,
        }))
        .unwrap();

        assert_eq!(path.id_movie, VALID);
        assert_eq!(path.id_comment, VALID);
    }
}
