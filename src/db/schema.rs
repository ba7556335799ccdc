//! # 저장 스키마
//!
//! `memos` 테이블의 구조만 정의합니다. 업무 규칙은 검증 계층(models)의 몫이고,
//! 여기서는 NOT NULL과 제목 길이 제약만 겁니다.
//!
//! 마이그레이션 도구 없이 `CREATE TABLE IF NOT EXISTS`를 서버 시작 때마다 실행합니다.
//! 이미 테이블이 있으면 아무 일도 일어나지 않습니다.

use sqlx::SqlitePool;

/// `memos` 테이블 DDL
///
/// - `INTEGER PRIMARY KEY`: rowid 별칭이므로 id 조회는 기본 키 인덱스를 탑니다.
/// - `AUTOINCREMENT`: 가장 큰 id를 지운 뒤에도 그 값을 다시 쓰지 않습니다.
///   (없으면 SQLite는 max(rowid)+1을 재사용할 수 있음)
/// - `length(title)`: SQLite의 length()는 TEXT에 대해 바이트가 아닌 문자 수를 셉니다.
/// - 시각 컬럼은 RFC 3339 TEXT로 저장됩니다 (sqlx의 chrono 인코딩).
pub const CREATE_MEMOS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS memos (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT    NOT NULL CHECK (length(title) BETWEEN 1 AND 100),
    content     TEXT    NOT NULL,
    created_at  TEXT    NOT NULL,
    updated_at  TEXT    NOT NULL
)
"#;

/// 스키마를 생성합니다 (멱등).
pub async fn create(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_MEMOS_TABLE).execute(pool).await?;
    Ok(())
}
