//! # Domain Entities
//!
//! 컬렉션에 기록되는 쓰기 모델입니다.
//! 조회 결과는 엔티티로 역직렬화하지 않고 저장된 문서를 그대로 응답에 실어 보냅니다.
//!
//! - [`comments`] - 고정 작성자/본문을 갖는 댓글
//! - [`theaters`] - 요청 본문 + 경로 `_id`로 구성되는 극장

pub mod comments;
pub mod theaters;
