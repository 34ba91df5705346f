//! # 극장 서비스 구현
//!
//! ## 비즈니스 규칙
//!
//! - 목록 조회는 최대 [`THEATER_LIST_LIMIT`]건
//! - 생성 시 `_id`는 경로 값을 사용하며 본문은 그대로 저장
//! - 본문에 `_id`가 있으면 경로 값과 같아야 함 (다르면 400)
//! - 수정은 본문 필드를 `$set`으로 병합
//! - 대상이 없으면 `Theater not found` (404)

use std::any::Any;
use std::sync::Arc;

use mongodb::bson::{Bson, Document, oid::ObjectId};

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{ServiceLocator, ServiceRegistration};
use crate::domain::entities::theaters::{NewTheater, theater_fields};
use crate::repositories::theaters::TheaterRepository;

pub const THEATER_NOT_FOUND: &str = "Theater not found";

/// 목록 조회 최대 건수
pub const THEATER_LIST_LIMIT: i64 = 10;

pub struct TheaterService {
    theater_repo: Arc<TheaterRepository>,
}

impl TheaterService {
    pub fn new(theater_repo: Arc<TheaterRepository>) -> Self {
        Self { theater_repo }
    }

    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    fn not_found() -> AppError {
        AppError::NotFound(THEATER_NOT_FOUND.to_string())
    }

    pub async fn list(&self) -> AppResult<Vec<Document>> {
        self.theater_repo.find_all(THEATER_LIST_LIMIT).await
    }

    pub async fn get(&self, id: ObjectId) -> AppResult<Document> {
        self.theater_repo
            .find_by_id(id)
            .await?
            .ok_or_else(Self::not_found)
    }

    /// 본문을 저장하고 `_id`(= 경로 값)를 반환합니다.
    ///
    /// 같은 `_id`가 이미 있으면 저장소 에러(500)가 됩니다.
    pub async fn create(&self, id: ObjectId, body: Document) -> AppResult<Bson> {
        let inserted_id = self.theater_repo.insert(NewTheater::new(id, body)?).await?;

        log::info!("🎬 극장 생성: _id={}", id);
        Ok(inserted_id)
    }

    /// 본문 필드를 병합하고 실제로 바뀐 문서 수를 반환합니다.
    pub async fn update(&self, id: ObjectId, body: Document) -> AppResult<u64> {
        let fields = theater_fields(id, body)?;

        if fields.is_empty() {
            return Err(AppError::ValidationError(
                "update body must contain at least one field".to_string(),
            ));
        }

        let outcome = self.theater_repo.update_by_id(id, fields).await?;

        if outcome.matched == 0 {
            return Err(Self::not_found());
        }

        log::info!("✏️ 극장 수정: _id={}, modified={}", id, outcome.modified);
        Ok(outcome.modified)
    }

    pub async fn remove(&self, id: ObjectId) -> AppResult<u64> {
        let deleted = self.theater_repo.delete_by_id(id).await?;

        if deleted == 0 {
            return Err(Self::not_found());
        }

        log::info!("🗑️ 극장 삭제: _id={}", id);
        Ok(deleted)
    }
}

fn build_theater_service() -> Arc<dyn Any + Send + Sync> {
    Arc::new(TheaterService::new(TheaterRepository::instance()))
}

inventory::submit! {
    ServiceRegistration {
        name: "theater_service",
        constructor: build_theater_service,
    }
}
