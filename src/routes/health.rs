//! # 동작 확인 핸들러
//!
//! ## 엔드포인트
//! - `GET /` → `{ "message": "Welcome to the memo app" }`

use axum::Json;
use serde_json::{json, Value};

pub const WELCOME_MESSAGE: &str = "Welcome to the memo app";

/// `GET /`: 서버가 떠 있는지 확인하는 고정 메시지를 반환합니다.
///
/// DB에 접근하지 않으므로 실패하지 않습니다.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}
