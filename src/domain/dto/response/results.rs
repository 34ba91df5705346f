//! 쓰기 연산 결과 DTO
//!
//! 응답 봉투의 `data` 필드에 들어가는 값입니다. JSON 키는 camelCase입니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 생성 결과 (`POST`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertedResponse {
    /// 저장소가 할당했거나 경로로 지정된 `_id` (16진수 문자열)
    pub inserted_id: Value,
}

/// 수정 결과 (`PUT /api/theaters/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifiedResponse {
    pub modified_count: u64,
}

/// 삭제 결과 (`DELETE /api/theaters/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_keys_are_camel_case() {
        let inserted = InsertedResponse { inserted_id: json!("64b7f0c2a1b2c3d4e5f60718") };
        let modified = ModifiedResponse { modified_count: 1 };
        let deleted = DeletedResponse { deleted_count: 0 };

        assert_eq!(
            serde_json::to_value(inserted).unwrap(),
            json!({ "insertedId": "64b7f0c2a1b2c3d4e5f60718" })
        );
        assert_eq!(serde_json::to_value(modified).unwrap(), json!({ "modifiedCount": 1 }));
        assert_eq!(serde_json::to_value(deleted).unwrap(), json!({ "deletedCount": 0 }));
    }
}
