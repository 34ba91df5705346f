//! # 댓글 서비스 구현
//!
//! 영화별 댓글의 조회, 작성, 수정, 삭제 규칙을 담당합니다.
//!
//! ## 비즈니스 규칙
//!
//! - 작성되는 댓글의 작성자와 본문은 고정값이며 요청 본문은 무시합니다.
//! - 수정은 본문을 고정 문구로 바꾸고 `updated_at`을 기록합니다.
//! - 개별 댓글은 경로의 영화에 속한 경우에만 조회/수정/삭제됩니다.
//! - 대상이 없으면 `Comment not found` (404)
//!
//! ```text
//! Handler ──▶ CommentService ──▶ CommentRepository ──▶ comments
//! ```

use std::any::Any;
use std::sync::Arc;

use mongodb::bson::{Bson, Document, oid::ObjectId};

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{ServiceLocator, ServiceRegistration};
use crate::db::store::UpdateOutcome;
use crate::domain::entities::comments::{Comment, CommentEdit};
use crate::repositories::comments::CommentRepository;

pub const COMMENT_NOT_FOUND: &str = "Comment not found";

/// 댓글 비즈니스 로직 서비스
///
/// ```rust,ignore
/// let comment_service = CommentService::instance();
/// let inserted_id = comment_service.add(movie_id).await?;
/// ```
pub struct CommentService {
    comment_repo: Arc<CommentRepository>,
}

impl CommentService {
    pub fn new(comment_repo: Arc<CommentRepository>) -> Self {
        Self { comment_repo }
    }

    /// 전역 싱글톤 인스턴스
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    fn not_found() -> AppError {
        AppError::NotFound(COMMENT_NOT_FOUND.to_string())
    }

    /// 영화에 달린 모든 댓글
    ///
    /// 댓글이 없거나 영화가 존재하지 않아도 빈 목록을 반환합니다.
    pub async fn list_for_movie(&self, movie_id: ObjectId) -> AppResult<Vec<Document>> {
        let comments = self.comment_repo.find_by_movie(movie_id).await?;
        log::debug!("댓글 {}건 조회: movie_id={}", comments.len(), movie_id);

        Ok(comments)
    }

    pub async fn get(&self, movie_id: ObjectId, comment_id: ObjectId) -> AppResult<Document> {
        self.comment_repo
            .find_in_movie(movie_id, comment_id)
            .await?
            .ok_or_else(Self::not_found)
    }

    /// 고정 작성자/본문으로 댓글을 작성하고 생성된 `_id`를 반환합니다.
    pub async fn add(&self, movie_id: ObjectId) -> AppResult<Bson> {
        let comment = Comment::new_demo(movie_id);
        let inserted_id = self.comment_repo.insert(&comment).await?;

        log::info!("📝 댓글 작성: movie_id={}, _id={}", movie_id, inserted_id);
        Ok(inserted_id)
    }

    pub async fn edit(&self, movie_id: ObjectId, comment_id: ObjectId) -> AppResult<UpdateOutcome> {
        let outcome = self
            .comment_repo
            .update_in_movie(movie_id, comment_id, &CommentEdit::demo())
            .await?;

        if outcome.matched == 0 {
            return Err(Self::not_found());
        }

        log::info!("✏️ 댓글 수정: movie_id={}, _id={}", movie_id, comment_id);
        Ok(outcome)
    }

    pub async fn remove(&self, movie_id: ObjectId, comment_id: ObjectId) -> AppResult<u64> {
        let deleted = self.comment_repo.delete_in_movie(movie_id, comment_id).await?;

        if deleted == 0 {
            return Err(Self::not_found());
        }

        log::info!("🗑️ 댓글 삭제: movie_id={}, _id={}", movie_id, comment_id);
        Ok(deleted)
    }
}

fn build_comment_service() -> Arc<dyn Any + Send + Sync> {
    Arc::new(CommentService::new(CommentRepository::instance()))
}

inventory::submit! {
    ServiceRegistration {
        name: "comment_service",
        constructor: build_comment_service,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryCollection;
    use crate::domain::entities::comments::comment::{DEMO_AUTHOR, DEMO_TEXT, DEMO_UPDATED_TEXT};
    use crate::repositories::comments::comment_repo::COMMENTS_COLLECTION;
    use mongodb::bson::doc;

    fn service_with(documents: Vec<Document>) -> (Arc<MemoryCollection>, CommentService) {
        let collection = Arc::new(MemoryCollection::with_documents(COMMENTS_COLLECTION, documents));
        let service = CommentService::new(Arc::new(CommentRepository::new(collection.clone())));

        (collection, service)
    }

    fn assert_not_found<T: std::fmt::Debug>(result: AppResult<T>) {
        match result {
            Err(AppError::NotFound(message)) => assert_eq!(message, COMMENT_NOT_FOUND),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_add_ignores_everything_but_movie_id() {
        let (collection, service) = service_with(Vec::new());
        let movie_id = ObjectId::new();

        let inserted_id = service.add(movie_id).await.unwrap();

        let stored = collection.documents();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].get("_id"), Some(&inserted_id));
        assert_eq!(stored[0].get_object_id("movie_id").unwrap(), movie_id);
        assert_eq!(stored[0].get_str("author").unwrap(), DEMO_AUTHOR);
        assert_eq!(stored[0].get_str("text").unwrap(), DEMO_TEXT);
    }

    #[actix_web::test]
    async fn test_list_returns_only_comments_of_movie() {
        let (movie_id, other_movie) = (ObjectId::new(), ObjectId::new());
        let (_, service) = service_with(vec![
            doc! { "_id": ObjectId::new(), "movie_id": movie_id },
            doc! { "_id": ObjectId::new(), "movie_id": other_movie },
            doc! { "_id": ObjectId::new(), "movie_id": movie_id },
        ]);

        assert_eq!(service.list_for_movie(movie_id).await.unwrap().len(), 2);
        assert!(service.list_for_movie(ObjectId::new()).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_edit_overwrites_text_only() {
        let (movie_id, comment_id) = (ObjectId::new(), ObjectId::new());
        let (collection, service) = service_with(vec![doc! {
            "_id": comment_id,
            "movie_id": movie_id,
            "name": "Mercedes Tyler",
            "text": "original",
        }]);

        service.edit(movie_id, comment_id).await.unwrap();

        let stored = &collection.documents()[0];
        assert_eq!(stored.get_str("text").unwrap(), DEMO_UPDATED_TEXT);
        assert_eq!(stored.get_str("name").unwrap(), "Mercedes Tyler");
        assert!(stored.get_datetime("updated_at").is_ok());
    }

    #[actix_web::test]
    async fn test_absent_comment_is_not_found() {
        let (movie_id, comment_id) = (ObjectId::new(), ObjectId::new());
        let (collection, service) = service_with(vec![doc! { "_id": comment_id, "movie_id": movie_id }]);
        let other_movie = ObjectId::new();

        assert_not_found(service.get(other_movie, comment_id).await);
        assert_not_found(service.edit(other_movie, comment_id).await);
        assert_not_found(service.remove(movie_id, ObjectId::new()).await);

        assert_eq!(collection.documents()[0].get_str("text").ok(), None);
        assert_eq!(collection.documents().len(), 1);
    }

    #[actix_web::test]
    async fn test_remove_deletes_once() {
        let (movie_id, comment_id) = (ObjectId::new(), ObjectId::new());
        let (_, service) = service_with(vec![doc! { "_id": comment_id, "movie_id": movie_id }]);

        assert_eq!(service.remove(movie_id, comment_id).await.unwrap(), 1);
        assert_not_found(service.remove(movie_id, comment_id).await);
    }

    #[actix_web::test]
    async fn test_store_failure_propagates() {
        let (collection, service) = service_with(Vec::new());
        collection.fail_with_errors();

        assert!(matches!(
            service.list_for_movie(ObjectId::new()).await,
            Err(AppError::DatabaseError(_))
        ));
    }
}
