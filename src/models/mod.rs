//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `memo`: 메모(Memo) 엔티티와 요청/응답 구조체, 입력 검증
//!
//! `pub use memo::*;`로 재공개하므로 `crate::models::Memo`처럼 짧게 접근할 수 있습니다.

pub mod memo;

pub use memo::*;
