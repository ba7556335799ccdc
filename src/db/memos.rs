//! # 메모 데이터베이스 쿼리 모듈
//!
//! `memos` 테이블에 대한 CRUD 및 부분 문자열 검색 쿼리 함수들입니다.
//!
//! 모든 함수는 풀이 아니라 `&mut SqliteConnection`을 받습니다.
//! 호출자(`Session`)가 연 트랜잭션 안에서 실행되도록 하기 위해서입니다.
//! (`Transaction`은 `DerefMut<Target = SqliteConnection>`이므로 `&mut tx`를 그대로 넘길 수 있습니다)

use crate::error::AppError; // sqlx::Error는 `?`에서 AppError::Database로 자동 변환됩니다
use crate::models::{Memo, NewMemo};
use sqlx::SqliteConnection; // 풀이 아닌 "연결 하나"에 대한 타입

/// 새 메모를 INSERT하고 DB가 부여한 id를 반환합니다.
///
/// 생성 시점에는 `updated_at = created_at`입니다.
pub async fn insert_memo(conn: &mut SqliteConnection, memo: &NewMemo) -> Result<i64, AppError> {
    // sqlx::query(): 결과 행을 구조체로 매핑할 필요가 없을 때 (INSERT/UPDATE/DELETE)
    // r#"..."#: raw 문자열. 여러 줄 SQL을 이스케이프 없이 그대로 쓸 수 있습니다.
    let result = sqlx::query(
        r#"
        INSERT INTO memos (title, content, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    // .bind(): SQL의 `?` 자리에 순서대로 값을 채웁니다 (SQL 인젝션 방지).
    // &memo.title: String을 복사하지 않고 참조로 넘깁니다.
    .bind(&memo.title)
    .bind(&memo.content)
    .bind(memo.created_at) // DateTime<Utc>: sqlx "chrono" 기능 덕분에 바로 바인딩
    .bind(memo.created_at) // 생성 시점에는 updated_at도 같은 값
    // .execute(): 실행만 하고 영향받은 행 수 등의 결과를 돌려받습니다.
    .execute(conn)
    .await?;

    // last_insert_rowid(): INTEGER PRIMARY KEY는 rowid 별칭이므로 곧 id입니다.
    Ok(result.last_insert_rowid())
}

/// id로 메모 하나를 조회합니다. 없으면 `None`.
pub async fn find_memo(conn: &mut SqliteConnection, id: i64) -> Result<Option<Memo>, AppError> {
    // query_as::<_, Memo>: 결과 행을 Memo 구조체로 매핑합니다 (Memo의 derive(FromRow) 필요).
    // 첫 번째 `_`는 DB 종류(Sqlite)로, 컴파일러가 추론합니다.
    let memo = sqlx::query_as::<_, Memo>(
        "SELECT id, title, content, created_at, updated_at FROM memos WHERE id = ?",
    )
    .bind(id)
    // fetch_optional(): 0행이면 None, 1행이면 Some(Memo)
    .fetch_optional(conn)
    .await?;

    Ok(memo)
}

/// 삽입 순서(id 오름차순)로 `skip`개를 건너뛰고 최대 `limit`개를 가져옵니다.
pub async fn list_memos(
    conn: &mut SqliteConnection,
    skip: u32,
    limit: u32,
) -> Result<Vec<Memo>, AppError> {
    let memos = sqlx::query_as::<_, Memo>(
        r#"
        SELECT id, title, content, created_at, updated_at
        FROM memos
        ORDER BY id
        LIMIT ? OFFSET ?
        "#,
    )
    // SQLite 정수는 i64이므로 u32를 손실 없이 변환해 바인딩합니다.
    .bind(i64::from(limit))
    .bind(i64::from(skip))
    // fetch_all(): 모든 결과 행을 Vec<Memo>로 모읍니다.
    .fetch_all(conn)
    .await?;

    Ok(memos)
}

/// 제목 또는 내용에 `query`가 포함된 메모를 모두 찾습니다.
///
/// - 대소문자를 구분합니다. SQLite의 `LIKE`는 ASCII 대소문자를 무시하므로
///   대신 `instr()`를 씁니다.
/// - 인덱스 없이 전체 스캔입니다.
/// - 빈 검색어는 모든 메모와 일치합니다.
pub async fn search_memos(conn: &mut SqliteConnection, query: &str) -> Result<Vec<Memo>, AppError> {
    // 빈 문자열은 어디에나 포함되므로 전체 목록과 같습니다.
    if query.is_empty() {
        return list_memos(conn, 0, u32::MAX).await;
    }

    let memos = sqlx::query_as::<_, Memo>(
        r#"
        SELECT id, title, content, created_at, updated_at
        FROM memos
        WHERE instr(title, ?) > 0 OR instr(content, ?) > 0
        ORDER BY id
        "#,
    )
    // `?`가 두 개이므로 같은 값을 두 번 바인딩합니다.
    .bind(query)
    .bind(query)
    .fetch_all(conn)
    .await?;

    Ok(memos)
}

/// 메모의 제목, 내용, 수정 시각을 덮어씁니다. `created_at`은 건드리지 않습니다.
pub async fn update_memo(conn: &mut SqliteConnection, memo: &Memo) -> Result<(), AppError> {
    sqlx::query("UPDATE memos SET title = ?, content = ?, updated_at = ? WHERE id = ?")
        .bind(&memo.title)
        .bind(&memo.content)
        .bind(memo.updated_at)
        .bind(memo.id)
        .execute(conn)
        .await?;

    Ok(())
}

/// id로 메모를 삭제합니다.
///
/// - `true`: 삭제됨
/// - `false`: 해당 id가 없음
pub async fn delete_memo(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM memos WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;

    // rows_affected(): 이 쿼리로 실제 삭제된 행 수
    Ok(result.rows_affected() > 0)
}
