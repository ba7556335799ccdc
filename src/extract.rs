//! # 요청 추출자(Extractor)
//!
//! axum 기본 추출자(`Json`, `Query`, `Path`)를 감싸서,
//! 거부(rejection) 시 `AppError::BadRequest`로 바꿔 주는 래퍼들입니다.
//!
//! `#[derive(FromRequest)]` + `#[from_request(via(...), rejection(AppError))]`:
//! "원래 추출자로 꺼내되, 실패하면 `AppError::from(rejection)`을 반환하라"는 뜻입니다.
//! 변환 규칙은 `error.rs`의 `From<...Rejection> for AppError` 구현에 있습니다.
//!
//! 덕분에 필수 필드 누락, 잘못된 타입, `/memos/abc` 같은 숫자가 아닌 id가
//! 모두 DB에 닿기 전에 같은 JSON 에러 형식(400)으로 끝납니다.

use crate::error::AppError; // 거부 시 반환할 에러 타입
// FromRequest: 요청 본문을 소비하는 추출자 (핸들러의 마지막 인자로만 올 수 있음)
// FromRequestParts: 헤더, URL 등 본문 외 부분만 읽는 추출자 (순서 제약 없음)
use axum::extract::{FromRequest, FromRequestParts};

/// JSON 요청 본문
///
/// 핸들러에서는 `AppJson(req): AppJson<CreateMemoRequest>`처럼 패턴으로 바로 풀어 씁니다.
// via(axum::Json): 실제 파싱은 axum::Json이 하고, 성공하면 안의 값을 AppJson으로 옮깁니다.
// rejection(AppError): 실패하면 JsonRejection을 AppError로 변환해 응답합니다.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T); // 튜플 구조체: .0 또는 패턴 매칭으로 값을 꺼냅니다

/// URL 쿼리 문자열 (`?skip=0&limit=10`)
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// URL 경로 파라미터 (`/memos/{id}`)
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
