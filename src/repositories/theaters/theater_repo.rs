//! # 극장 리포지토리 구현
//!
//! `theaters` 컬렉션에 대한 데이터 액세스를 담당합니다.
//! 문서 구조는 강제하지 않으며 `_id`로만 식별합니다.

use std::any::Any;
use std::sync::Arc;

use mongodb::bson::{Bson, Document, doc, oid::ObjectId};

use crate::core::errors::AppResult;
use crate::core::registry::{RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::db::store::{DocumentCollection, MongoCollection, UpdateOutcome};
use crate::domain::entities::theaters::NewTheater;

pub const THEATERS_COLLECTION: &str = "theaters";

/// 극장 데이터 액세스 리포지토리
pub struct TheaterRepository {
    collection: Arc<dyn DocumentCollection>,
}

impl TheaterRepository {
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self { collection }
    }

    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 저장 순서대로 최대 `limit`개의 극장을 반환합니다.
    pub async fn find_all(&self, limit: i64) -> AppResult<Vec<Document>> {
        self.collection.find_many(doc! {}, Some(limit)).await
    }

    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Document>> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    pub async fn insert(&self, theater: NewTheater) -> AppResult<Bson> {
        log::debug!("📝 {} insert: _id={}", self.collection.name(), theater.id);
        self.collection.insert_one(theater.into_document()).await
    }

    /// 본문 필드를 `$set`으로 병합합니다.
    pub async fn update_by_id(&self, id: ObjectId, fields: Document) -> AppResult<UpdateOutcome> {
        log::debug!("📝 {} update: _id={}, fields={}", self.collection.name(), id, fields.len());
        self.collection.update_one(doc! { "_id": id }, fields).await
    }

    pub async fn delete_by_id(&self, id: ObjectId) -> AppResult<u64> {
        log::debug!("📝 {} delete: _id={}", self.collection.name(), id);
        self.collection.delete_one(doc! { "_id": id }).await
    }
}

fn build_theater_repository() -> Arc<dyn Any + Send + Sync> {
    let database = ServiceLocator::get::<Database>();
    let collection = MongoCollection::new(database.collection(THEATERS_COLLECTION));

    Arc::new(TheaterRepository::new(Arc::new(collection)))
}

inventory::submit! {
    RepositoryRegistration {
        name: "theater_repository",
        constructor: build_theater_repository,
    }
}
