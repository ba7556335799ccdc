//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 코드를 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)는 요청마다 `Session`을 열어 이 모듈의 함수를 사용합니다.
//!
//! 각 하위 모듈:
//! - `schema`: `memos` 테이블 정의 (시작 시 한 번, 멱등적으로 생성)
//! - `session`: 요청 하나에 대응하는 트랜잭션 핸들
//! - `memos`: 메모 CRUD 및 부분 문자열 검색 쿼리

pub mod memos;
pub mod schema;
pub mod session;

pub use session::Session;

use crate::config::Config;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// 설정으로부터 SQLite 연결 풀을 만듭니다.
///
/// `create_if_missing(true)`: DB 파일이 없으면 새로 만듭니다.
/// 최초 실행 시 별도 준비 없이 바로 서버를 띄울 수 있습니다.
///
/// 풀은 `Arc` 기반이라 clone해도 같은 풀을 가리킵니다.
/// 이 풀이 요청 사이에 공유되는 유일한 자원입니다.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// 테스트용 인메모리 DB 풀
///
/// `sqlite::memory:`는 연결마다 별개의 DB가 되므로 연결을 하나로 고정하고,
/// 유휴/수명 만료로 연결이 닫혀 데이터가 사라지지 않도록 타임아웃을 끕니다.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    schema::create(&pool).await.expect("schema");
    pool
}
