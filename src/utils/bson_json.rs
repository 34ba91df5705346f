//! BSON ↔ JSON 변환
//!
//! 저장된 문서를 API 응답으로 내보낼 때 사용합니다.
//! `ObjectId`는 16진수 문자열, `DateTime`은 RFC 3339 문자열로 바꾸고
//! 나머지 값은 relaxed extended JSON 규칙을 따릅니다.
//!
//! 반대 방향으로는 JSON 본문에서 온 정수 폭을 맞추는 [`narrow_integers`]가 있습니다.

use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

/// 단일 BSON 값을 JSON으로 변환합니다.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(date) => match date.try_to_rfc3339_string() {
            Ok(formatted) => Value::String(formatted),
            // 표현 범위를 벗어난 날짜는 epoch 밀리초로 내보냄
            Err(_) => Value::from(date.timestamp_millis()),
        },
        Bson::Document(document) => document_to_json(document),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// 문서를 JSON 객체로 변환합니다. 필드 순서는 유지됩니다.
pub fn document_to_json(document: Document) -> Value {
    let map: Map<String, Value> = document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect();

    Value::Object(map)
}

/// 문서 목록을 JSON 배열로 변환합니다.
pub fn documents_to_json(documents: Vec<Document>) -> Value {
    Value::Array(documents.into_iter().map(document_to_json).collect())
}

/// 32비트 범위의 `Int64`를 `Int32`로 바꿉니다. 하위 문서와 배열에도 적용됩니다.
///
/// JSON 역직렬화는 음수를 항상 `Int64`로 만들기 때문에,
/// 같은 필드가 부호에 따라 다른 타입으로 저장되지 않도록 맞춥니다.
pub fn narrow_integers(value: Bson) -> Bson {
    match value {
        Bson::Int64(n) => i32::try_from(n).map_or(Bson::Int64(n), Bson::Int32),
        Bson::Document(document) => Bson::Document(
            document
                .into_iter()
                .map(|(key, value)| (key, narrow_integers(value)))
                .collect(),
        ),
        Bson::Array(items) => Bson::Array(items.into_iter().map(narrow_integers).collect()),
        other => other,
    }
}
