//! 컬렉션 추상화
//!
//! 리포지토리는 MongoDB 드라이버 대신 [`DocumentCollection`]에 의존합니다.
//! 운영 환경에서는 [`MongoCollection`], 테스트에서는 메모리 구현을 주입합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Bson, Document, doc},
};

use crate::core::errors::{AppError, AppResult};

/// `update_one` 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    /// 필터에 일치한 문서 수 (0 또는 1)
    pub matched: u64,
    /// 실제로 값이 바뀐 문서 수
    pub modified: u64,
}

/// 단일 컬렉션에 대한 기본 연산
///
/// 모든 연산은 요청당 한 번의 쿼리로 끝나며 재시도하지 않습니다.
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    /// 컬렉션 이름
    fn name(&self) -> &str;

    async fn find_one(&self, filter: Document) -> AppResult<Option<Document>>;

    /// `limit`이 `None`이면 일치하는 모든 문서를 반환합니다.
    async fn find_many(&self, filter: Document, limit: Option<i64>) -> AppResult<Vec<Document>>;

    /// 문서를 삽입하고 `_id`를 반환합니다.
    async fn insert_one(&self, document: Document) -> AppResult<Bson>;

    /// 첫 번째로 일치하는 문서에 `fields`를 `$set` 합니다.
    async fn update_one(&self, filter: Document, fields: Document) -> AppResult<UpdateOutcome>;

    /// 첫 번째로 일치하는 문서를 삭제하고 삭제된 수를 반환합니다.
    async fn delete_one(&self, filter: Document) -> AppResult<u64>;
}

/// MongoDB 드라이버 기반 구현
pub struct MongoCollection {
    collection: Collection<Document>,
}

impl MongoCollection {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

fn database_error(error: mongodb::error::Error) -> AppError {
    AppError::DatabaseError(error.to_string())
}

#[async_trait]
impl DocumentCollection for MongoCollection {
    fn name(&self) -> &str {
        self.collection.name()
    }

    async fn find_one(&self, filter: Document) -> AppResult<Option<Document>> {
        self.collection.find_one(filter).await.map_err(database_error)
    }

    async fn find_many(&self, filter: Document, limit: Option<i64>) -> AppResult<Vec<Document>> {
        let find = self.collection.find(filter);

        let cursor = match limit {
            Some(limit) => find.limit(limit).await,
            None => find.await,
        }
        .map_err(database_error)?;

        cursor.try_collect().await.map_err(database_error)
    }

    async fn insert_one(&self, document: Document) -> AppResult<Bson> {
        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(database_error)?;

        Ok(result.inserted_id)
    }

    async fn update_one(&self, filter: Document, fields: Document) -> AppResult<UpdateOutcome> {
        let result = self
            .collection
            .update_one(filter, doc! { "$set": fields })
            .await
            .map_err(database_error)?;

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete_one(&self, filter: Document) -> AppResult<u64> {
        let result = self
            .collection
            .delete_one(filter)
            .await
            .map_err(database_error)?;

        Ok(result.deleted_count)
    }
}
