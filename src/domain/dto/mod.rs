//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 데이터 구조를 정의합니다.
//!
//! ```text
//! dto/
//! ├── request/   ← 경로 파라미터 + 식별자 검증
//! └── response/  ← 응답 봉투와 쓰기 결과
//! ```

pub mod request;
pub mod response;
