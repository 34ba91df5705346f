//! Theater Entity Implementation
//!
//! `theaters` 컬렉션 문서는 스키마 없이 요청 본문을 그대로 저장합니다.
//!
//! ```json
//! {
//!   "_id": "59a47286cfa9a3a73e51e72c",
//!   "theaterId": 1000,
//!   "location": {
//!     "address": { "street1": "340 W Market", "city": "Bloomington", "state": "MN", "zipcode": "55425" },
//!     "geo": { "type": "Point", "coordinates": [-93.24565, 44.85466] }
//!   }
//! }
//! ```

use mongodb::bson::{Bson, Document, doc, oid::ObjectId};

use crate::core::errors::{AppError, AppResult};
use crate::utils::bson_json::narrow_integers;

/// 새 극장 문서
///
/// `_id`는 저장소가 생성하지 않고 경로에서 지정됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTheater {
    pub id: ObjectId,
    pub body: Document,
}

impl NewTheater {
    /// 본문은 [`theater_fields`] 규칙으로 정리됩니다.
    pub fn new(id: ObjectId, body: Document) -> AppResult<Self> {
        Ok(Self {
            id,
            body: theater_fields(id, body)?,
        })
    }

    /// 삽입용 문서로 변환합니다. `_id`가 맨 앞에 옵니다.
    pub fn into_document(self) -> Document {
        let mut document = doc! { "_id": self.id };

        for (key, value) in self.body {
            document.insert(key, value);
        }

        document
    }
}

/// 요청 본문을 저장할 필드로 정리합니다.
///
/// - 본문의 `_id`는 생략하거나 경로 값과 같아야 하며, 결과에서는 빠집니다.
/// - 32비트 범위의 정수는 `Int32`로 저장합니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 본문 `_id`가 경로 값과 다른 경우
pub fn theater_fields(id: ObjectId, body: Document) -> AppResult<Document> {
    let mut fields = Document::new();

    for (key, value) in body {
        if key == "_id" {
            if !is_same_id(&value, id) {
                return Err(AppError::ValidationError(format!(
                    "_id in body must match the path id {}",
                    id.to_hex()
                )));
            }
            continue;
        }

        fields.insert(key, narrow_integers(value));
    }

    Ok(fields)
}

fn is_same_id(value: &Bson, id: ObjectId) -> bool {
    match value {
        Bson::ObjectId(oid) => *oid == id,
        Bson::String(hex) => hex.eq_ignore_ascii_case(&id.to_hex()),
        _ => false,
    }
}
