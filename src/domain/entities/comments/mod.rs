//! Comments Entity Module
//!
//! `comments` 컬렉션에 쓰는 댓글 문서와 수정 내용을 정의합니다.

pub mod comment;

pub use comment::{Comment, CommentEdit};
