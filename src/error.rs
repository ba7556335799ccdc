//! # 에러 처리 모듈
//!
//! 요청 처리 중 발생할 수 있는 모든 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환
//! - 추출자 거부(rejection) → `AppError::BadRequest` 변환
//!
//! 에러는 세 갈래뿐입니다:
//! - 클라이언트 잘못(400): 저장소에 닿기 전에 걸러집니다.
//! - 찾을 수 없음(404): 고정 메시지만 내보냅니다.
//! - 저장소 치명 오류(500): 로그에 남기고, 클라이언트에는 일반 메시지만 보냅니다.
//!   재시도는 하지 않습니다.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 메모를 찾지 못했을 때의 고정 메시지
pub const NOT_FOUND_MESSAGE: &str = "Memo not found";

/// 요청 처리 중 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 메모가 없음 (HTTP 404)
    #[error("Memo not found")]
    NotFound,

    /// 잘못된 요청 (HTTP 400)
    /// 필수 필드 누락, 타입 불일치, 제목 길이 위반 등
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 데이터베이스 오류 (HTTP 500)
    /// #[from]: sqlx 함수 결과에 `?`를 쓰면 자동으로 이 variant로 변환됩니다.
    /// 커밋 실패도 여기로 들어옵니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 응답 본문 형식:
    /// `{ "error": { "code": "not_found", "message": "Memo not found" } }`
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "not_found",
                NOT_FOUND_MESSAGE.to_string(),
            ),
            AppError::BadRequest(ref msg) => {
                tracing::debug!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
            AppError::Database(ref e) => {
                // 내부 에러 내용은 로그에만 남깁니다.
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A database error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

// ── 추출자 거부(rejection) 변환 ──
// axum의 기본 거부 응답은 상태 코드가 제각각(400, 415, 422)이고 본문이 일반 텍스트입니다.
// 모두 AppError::BadRequest로 모아서 같은 JSON 에러 형식으로 내보냅니다.
// `body_text()`에는 "missing field `content`" 같은 구체적인 사유가 들어 있습니다.

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            AppError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::BadRequest("nope".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database(sqlx::Error::PoolTimedOut)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
