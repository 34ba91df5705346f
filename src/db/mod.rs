//! # Database Module
//!
//! MongoDB 연결 핸들과 컬렉션 접근 계층입니다.
//!
//! - [`Database`] - 프로세스 전역에서 공유되는 클라이언트 핸들 (`ServiceLocator`에 등록)
//! - [`store`] - 리포지토리가 의존하는 컬렉션 추상화 [`store::DocumentCollection`]
//!
//! 드라이버는 커넥션 풀을 내부에서 관리하며 첫 쿼리 시점에 실제로 연결합니다.
//! 따라서 서버 시작 시 MongoDB가 내려가 있어도 프로세스는 뜨고,
//! 해당 요청만 500으로 응답합니다.

pub mod store;

#[cfg(test)]
pub mod memory;

use mongodb::bson::doc;
use mongodb::{Client, Collection, bson::Document, options::ClientOptions};

use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};

/// MongoDB 클라이언트 핸들
///
/// `Client`는 내부적으로 `Arc`이므로 복제 비용이 작습니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 설정으로 클라이언트를 생성합니다.
    ///
    /// 연결 문자열 파싱(SRV 조회 포함)만 수행하며 서버에 연결하지는 않습니다.
    pub async fn new() -> AppResult<Self> {
        Self::with_uri(&DatabaseConfig::uri(), DatabaseConfig::name()).await
    }

    pub async fn with_uri(uri: &str, database_name: impl Into<String>) -> AppResult<Self> {
        let database_name = database_name.into();

        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 서버 측 로그에서 클라이언트 식별용
        client_options.app_name = Some(DatabaseConfig::app_name());

        let client =
            Client::with_options(client_options).map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("✅ MongoDB 클라이언트 준비 완료: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 이름으로 문서 컬렉션을 가져옵니다.
    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.get_database().collection::<Document>(name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// `ping` 명령으로 서버 응답 여부를 확인합니다.
    pub async fn ping(&self) -> AppResult<()> {
        self.get_database()
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
