//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 조립 함수입니다.
//!
//! 각 하위 모듈:
//! - `health`: 루트(`GET /`) 동작 확인 메시지
//! - `memos`: 메모 CRUD 및 검색 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | GET | / | `health::root` |
//! | GET | /memos/ (또는 /memos) | `memos::list_memos` |
//! | POST | /memos/ (또는 /memos) | `memos::create_memo` |
//! | GET | /memos/search/ | `memos::search_memos` |
//! | GET | /memos/{id} | `memos::get_memo` |
//! | PUT | /memos/{id} | `memos::update_memo` |
//! | DELETE | /memos/{id} | `memos::delete_memo` |

pub mod health;
pub mod memos;

pub use health::*;
pub use memos::*;

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// 애플리케이션 공유 상태
///
/// 모든 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 전역 변수 대신 `main()`에서 한 번 만들어 라우터에 주입합니다.
/// 요청 사이에 공유되는 것은 연결 풀 하나뿐이고, 변경 가능한 상태는 모두 DB에 있습니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀 (내부적으로 Arc로 공유)
    pub pool: SqlitePool,
}

/// 전체 라우터를 조립합니다.
///
/// `main()`과 테스트가 같은 함수를 쓰므로, 테스트는 실제 서버와 같은 라우팅을 검증합니다.
///
/// ## 경로 매칭 순서
/// `/memos/search/`는 고정 경로이고 `/memos/{id}`는 캡처 경로입니다.
/// axum(matchit)은 고정 경로를 항상 먼저 매칭하므로 "search"가 id로 해석되지 않습니다.
/// 끝 슬래시 없는 `/memos`, `/memos/search`도 같은 핸들러로 연결해 둡니다.
/// axum은 끝 슬래시를 자동으로 맞춰 주지 않으므로 두 형태를 모두 등록합니다.
pub fn router(state: AppState) -> Router {
    // ── CORS ──
    // 개발용 허용 정책: 모든 출처/메서드/헤더 + 자격 증명(쿠키) 허용.
    // 자격 증명을 허용할 때는 `Any`(*)를 쓸 수 없으므로 요청 값을 그대로 되돌려줍니다.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(root))
        .route("/memos/", get(list_memos).post(create_memo))
        .route("/memos", get(list_memos).post(create_memo))
        .route("/memos/search/", get(search_memos))
        .route("/memos/search", get(search_memos))
        .route(
            "/memos/{id}",
            get(get_memo).put(update_memo).delete(delete_memo),
        )
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn root_returns_welcome_message() {
        let app = router(AppState {
            pool: test_pool().await,
        });

        let resp = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], WELCOME_MESSAGE);
    }

    #[tokio::test]
    async fn cors_preflight_mirrors_origin_with_credentials() {
        let app = router(AppState {
            pool: test_pool().await,
        });

        let resp = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/memos/")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = resp.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }
}
