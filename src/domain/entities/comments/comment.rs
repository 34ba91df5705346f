//! Comment Entity Implementation
//!
//! `comments` 컬렉션에 기록되는 댓글 문서입니다.
//! 조회는 저장된 문서를 그대로 내보내므로, 이 타입은 쓰기 경로에서만 사용됩니다.

use mongodb::bson::{self, DateTime, Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppResult, ErrorContext};

/// 댓글 작성자 (고정값)
pub const DEMO_AUTHOR: &str = "Antony Lozano";
/// 새 댓글 본문 (고정값)
pub const DEMO_TEXT: &str = "Super film !";
/// 수정된 댓글 본문 (고정값)
pub const DEMO_UPDATED_TEXT: &str = "Commentaire modifié";

/// 댓글 엔티티
///
/// 요청 본문은 반영하지 않고, 작성자와 본문은 항상 고정값으로 채워집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 댓글이 달린 영화 (참조 무결성은 검사하지 않음)
    pub movie_id: ObjectId,
    pub author: String,
    pub text: String,
    /// 작성 시각
    pub date: DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl Comment {
    /// 고정 작성자/본문으로 새 댓글 생성
    pub fn new_demo(movie_id: ObjectId) -> Self {
        Self {
            id: None,
            movie_id,
            author: DEMO_AUTHOR.to_string(),
            text: DEMO_TEXT.to_string(),
            date: DateTime::now(),
            updated_at: None,
        }
    }

    /// 삽입용 BSON 문서로 변환
    pub fn to_document(&self) -> AppResult<Document> {
        bson::to_document(self).context("댓글 문서 변환 실패")
    }
}

/// 댓글 수정 내용 (`$set` 대상 필드)
#[derive(Debug, Clone, PartialEq)]
pub struct CommentEdit {
    pub text: String,
    pub updated_at: DateTime,
}

impl CommentEdit {
    /// 고정 본문과 현재 시각으로 수정 내용 생성
    pub fn demo() -> Self {
        Self {
            text: DEMO_UPDATED_TEXT.to_string(),
            updated_at: DateTime::now(),
        }
    }

    pub fn to_set_document(&self) -> Document {
        doc! {
            "text": &self.text,
            "updated_at": self.updated_at,
        }
    }
}
