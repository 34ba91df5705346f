//! # Service Layer
//!
//! 요청 단위 비즈니스 규칙을 담당합니다. 각 서비스는 `ServiceLocator`에 등록된 싱글톤이며
//! 대응하는 리포지토리 하나에만 의존합니다.
//!
//! | 서비스 | 리포지토리 | 컬렉션 |
//! |--------|------------|--------|
//! | [`CommentService`](comments::CommentService) | `CommentRepository` | `comments` |
//! | [`TheaterService`](theaters::TheaterService) | `TheaterRepository` | `theaters` |

pub mod comments;
pub mod theaters;
