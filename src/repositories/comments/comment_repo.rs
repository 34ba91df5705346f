//! # 댓글 리포지토리 구현
//!
//! `comments` 컬렉션에 대한 데이터 액세스를 담당합니다.
//! 개별 댓글 연산은 항상 `_id`와 `movie_id`를 함께 필터로 사용하므로
//! 다른 영화에 달린 댓글은 보이지도, 수정/삭제되지도 않습니다.

use std::any::Any;
use std::sync::Arc;

use mongodb::bson::{Bson, Document, doc, oid::ObjectId};

use crate::core::errors::AppResult;
use crate::core::registry::{RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::db::store::{DocumentCollection, MongoCollection, UpdateOutcome};
use crate::domain::entities::comments::{Comment, CommentEdit};

/// 컬렉션 이름
pub const COMMENTS_COLLECTION: &str = "comments";

/// 댓글 데이터 액세스 리포지토리
///
/// ```rust,ignore
/// let repo = CommentRepository::instance();
/// let comments = repo.find_by_movie(movie_id).await?;
/// ```
pub struct CommentRepository {
    collection: Arc<dyn DocumentCollection>,
}

impl CommentRepository {
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self { collection }
    }

    /// 전역 싱글톤 인스턴스
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    fn in_movie(movie_id: ObjectId, comment_id: ObjectId) -> Document {
        doc! { "_id": comment_id, "movie_id": movie_id }
    }

    /// 영화에 달린 모든 댓글 (저장 순서, 제한 없음)
    pub async fn find_by_movie(&self, movie_id: ObjectId) -> AppResult<Vec<Document>> {
        self.collection
            .find_many(doc! { "movie_id": movie_id }, None)
            .await
    }

    pub async fn find_in_movie(
        &self,
        movie_id: ObjectId,
        comment_id: ObjectId,
    ) -> AppResult<Option<Document>> {
        self.collection
            .find_one(Self::in_movie(movie_id, comment_id))
            .await
    }

    /// 댓글을 삽입하고 생성된 `_id`를 반환합니다.
    pub async fn insert(&self, comment: &Comment) -> AppResult<Bson> {
        log::debug!("📝 {} insert: movie_id={}", self.collection.name(), comment.movie_id);
        self.collection.insert_one(comment.to_document()?).await
    }

    pub async fn update_in_movie(
        &self,
        movie_id: ObjectId,
        comment_id: ObjectId,
        edit: &CommentEdit,
    ) -> AppResult<UpdateOutcome> {
        log::debug!("📝 {} update: _id={}, movie_id={}", self.collection.name(), comment_id, movie_id);
        self.collection
            .update_one(Self::in_movie(movie_id, comment_id), edit.to_set_document())
            .await
    }

    pub async fn delete_in_movie(&self, movie_id: ObjectId, comment_id: ObjectId) -> AppResult<u64> {
        log::debug!("📝 {} delete: _id={}, movie_id={}", self.collection.name(), comment_id, movie_id);
        self.collection
            .delete_one(Self::in_movie(movie_id, comment_id))
            .await
    }
}

fn build_comment_repository() -> Arc<dyn Any + Send + Sync> {
    let database = ServiceLocator::get::<Database>();
    let collection = MongoCollection::new(database.collection(COMMENTS_COLLECTION));

    Arc::new(CommentRepository::new(Arc::new(collection)))
}

inventory::submit! {
    RepositoryRegistration {
        name: "comment_repository",
        constructor: build_comment_repository,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryCollection;
    use crate::domain::entities::comments::comment::{DEMO_AUTHOR, DEMO_UPDATED_TEXT};

    fn seeded(movie_id: ObjectId, other_movie: ObjectId) -> (Arc<MemoryCollection>, CommentRepository, ObjectId) {
        let comment_id = ObjectId::new();
        let collection = Arc::new(MemoryCollection::with_documents(
            COMMENTS_COLLECTION,
            vec![
                doc! { "_id": comment_id, "movie_id": movie_id, "text": "first" },
                doc! { "_id": ObjectId::new(), "movie_id": movie_id, "text": "second" },
                doc! { "_id": ObjectId::new(), "movie_id": other_movie, "text": "elsewhere" },
            ],
        ));
        let repository = CommentRepository::new(collection.clone());

        (collection, repository, comment_id)
    }

    #[actix_web::test]
    async fn test_find_by_movie_filters_on_movie_id() {
        let (movie_id, other_movie) = (ObjectId::new(), ObjectId::new());
        let (_, repository, _) = seeded(movie_id, other_movie);

        let comments = repository.find_by_movie(movie_id).await.unwrap();

        assert_eq!(comments.len(), 2);
        assert!(comments.iter().all(|c| c.get_object_id("movie_id").unwrap() == movie_id));
    }

    #[actix_web::test]
    async fn test_single_comment_operations_require_matching_movie() {
        let (movie_id, other_movie) = (ObjectId::new(), ObjectId::new());
        let (collection, repository, comment_id) = seeded(movie_id, other_movie);

        assert!(repository.find_in_movie(other_movie, comment_id).await.unwrap().is_none());
        assert!(repository.find_in_movie(movie_id, comment_id).await.unwrap().is_some());

        let outcome = repository
            .update_in_movie(other_movie, comment_id, &CommentEdit::demo())
            .await
            .unwrap();
        assert_eq!(outcome.matched, 0);

        assert_eq!(repository.delete_in_movie(other_movie, comment_id).await.unwrap(), 0);
        assert_eq!(collection.documents().len(), 3);
    }

    #[actix_web::test]
    async fn test_insert_update_delete() {
        let (movie_id, other_movie) = (ObjectId::new(), ObjectId::new());
        let (collection, repository, _) = seeded(movie_id, other_movie);

        let inserted = repository.insert(&Comment::new_demo(movie_id)).await.unwrap();
        let inserted_id = inserted.as_object_id().unwrap();

        let stored = repository.find_in_movie(movie_id, inserted_id).await.unwrap().unwrap();
        assert_eq!(stored.get_str("author").unwrap(), DEMO_AUTHOR);

        let outcome = repository
            .update_in_movie(movie_id, inserted_id, &CommentEdit::demo())
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome { matched: 1, modified: 1 });

        let stored = repository.find_in_movie(movie_id, inserted_id).await.unwrap().unwrap();
        assert_eq!(stored.get_str("text").unwrap(), DEMO_UPDATED_TEXT);
        assert!(stored.get_datetime("updated_at").is_ok());

        assert_eq!(repository.delete_in_movie(movie_id, inserted_id).await.unwrap(), 1);
        assert_eq!(collection.documents().len(), 3);
    }
}
