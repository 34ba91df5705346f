//! 테스트용 메모리 컬렉션
//!
//! 필터는 최상위 필드 동등 비교만 지원합니다.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use mongodb::bson::{Bson, Document, oid::ObjectId};

use crate::core::errors::{AppError, AppResult};
use crate::db::store::{DocumentCollection, UpdateOutcome};

pub struct MemoryCollection {
    name: String,
    documents: Mutex<Vec<Document>>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryCollection {
    pub fn new(name: &str) -> Self {
        Self::with_documents(name, Vec::new())
    }

    pub fn with_documents(name: &str, documents: Vec<Document>) -> Self {
        Self {
            name: name.to_string(),
            documents: Mutex::new(documents),
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// 지금까지 실행된 연산 수
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 이후 모든 연산이 `DatabaseError`를 반환하도록 합니다.
    pub fn fail_with_errors(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// 현재 저장된 문서 스냅샷
    pub fn documents(&self) -> Vec<Document> {
        self.documents.lock().unwrap().clone()
    }

    fn begin(&self) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(format!(
                "connection refused: {}",
                self.name
            )));
        }

        Ok(())
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn find_one(&self, filter: Document) -> AppResult<Option<Document>> {
        self.begin()?;

        let documents = self.documents.lock().unwrap();
        Ok(documents.iter().find(|doc| matches(doc, &filter)).cloned())
    }

    async fn find_many(&self, filter: Document, limit: Option<i64>) -> AppResult<Vec<Document>> {
        self.begin()?;

        let documents = self.documents.lock().unwrap();
        let found = documents.iter().filter(|doc| matches(doc, &filter)).cloned();

        Ok(match limit {
            Some(limit) if limit > 0 => found.take(limit as usize).collect(),
            _ => found.collect(),
        })
    }

    async fn insert_one(&self, mut document: Document) -> AppResult<Bson> {
        self.begin()?;

        if !document.contains_key("_id") {
            let mut with_id = Document::new();
            with_id.insert("_id", ObjectId::new());
            for (key, value) in document {
                with_id.insert(key, value);
            }
            document = with_id;
        }

        let id = document.get("_id").cloned().unwrap_or(Bson::Null);
        let mut documents = self.documents.lock().unwrap();

        if documents.iter().any(|doc| doc.get("_id") == Some(&id)) {
            return Err(AppError::DatabaseError(format!(
                "E11000 duplicate key error collection: {} index: _id_",
                self.name
            )));
        }

        documents.push(document);
        Ok(id)
    }

    async fn update_one(&self, filter: Document, fields: Document) -> AppResult<UpdateOutcome> {
        self.begin()?;

        let mut documents = self.documents.lock().unwrap();
        let Some(target) = documents.iter_mut().find(|doc| matches(doc, &filter)) else {
            return Ok(UpdateOutcome::default());
        };

        let mut changed = false;
        for (key, value) in fields {
            if target.get(&key) != Some(&value) {
                target.insert(key, value);
                changed = true;
            }
        }

        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(changed),
        })
    }

    async fn delete_one(&self, filter: Document) -> AppResult<u64> {
        self.begin()?;

        let mut documents = self.documents.lock().unwrap();
        match documents.iter().position(|doc| matches(doc, &filter)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
