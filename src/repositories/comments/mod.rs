//! 댓글 데이터 액세스 계층
//!
//! [`CommentRepository`](comment_repo::CommentRepository)는 `comments` 컬렉션을 다루며
//! `inventory`로 등록되어 `ServiceLocator`에서 싱글톤으로 관리됩니다.

pub mod comment_repo;

pub use comment_repo::CommentRepository;
