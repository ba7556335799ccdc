//! # 요청 단위 세션
//!
//! 요청 하나가 DB와 주고받는 모든 작업은 `Session` 하나를 통합니다.
//!
//! `Session`은 풀에서 연결을 하나 빌려 트랜잭션을 연 상태입니다.
//! - `commit()`: 변경 사항을 확정하고 연결을 풀에 돌려줍니다.
//! - 그 외 모든 종료 경로(검증 실패, NotFound, `?`로 인한 조기 반환, 패닉):
//!   `Session`이 drop되면서 sqlx `Transaction`이 롤백되고 연결이 풀로 돌아갑니다.
//!
//! 즉 연결 반납을 잊을 방법이 없습니다. 읽기 전용 요청은 commit 없이 drop합니다.

use crate::db::memos;
use crate::error::AppError;
use crate::models::{Memo, NewMemo};
use sqlx::{Sqlite, SqlitePool, Transaction};

/// 요청 하나에 묶인 트랜잭션 핸들
///
/// `Transaction<'static, Sqlite>`: 풀에서 빌린 연결을 소유하므로 수명이 `'static`입니다.
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    /// 풀에서 연결을 얻고 트랜잭션을 시작합니다.
    ///
    /// 풀이 가득 차 있으면 acquire 타임아웃까지 기다리고,
    /// 실패하면 `AppError::Database`(500)로 전파됩니다.
    ///
    /// 읽기 전용 요청(조회, 목록, 검색)용입니다.
    pub async fn begin(pool: &SqlitePool) -> Result<Self, AppError> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// 쓰기 요청(생성, 수정, 삭제)용 트랜잭션을 시작합니다.
    ///
    /// 기본 `BEGIN`(DEFERRED)은 첫 SELECT에서 읽기 잠금만 잡고, 이후 UPDATE에서
    /// 쓰기 잠금으로 올리려 합니다. 두 요청이 동시에 이 단계에 오면 SQLite는
    /// 기다리지 않고 바로 `SQLITE_BUSY`(database is locked)를 돌려줍니다.
    ///
    /// `BEGIN IMMEDIATE`는 트랜잭션 시작 시점에 쓰기 잠금을 잡습니다.
    /// 다른 쓰기가 진행 중이면 busy_timeout(기본 5초) 동안 기다렸다가 이어서 실행하므로,
    /// 동시 수정은 에러 없이 차례로 커밋되고 마지막 커밋이 남습니다.
    pub async fn begin_write(pool: &SqlitePool) -> Result<Self, AppError> {
        let tx = pool.begin_with("BEGIN IMMEDIATE").await?;
        Ok(Self { tx })
    }

    /// 새 메모를 추가하고 부여된 id를 반환합니다.
    /// 생성된 필드까지 포함한 완전한 레코드는 `refresh()`로 다시 읽습니다.
    pub async fn add(&mut self, memo: &NewMemo) -> Result<i64, AppError> {
        memos::insert_memo(&mut self.tx, memo).await
    }

    /// id로 레코드를 다시 읽습니다 (생성/수정 직후 저장된 값을 확인하는 용도).
    ///
    /// 같은 트랜잭션 안에서 방금 쓴 행이므로 없으면 내부 오류입니다.
    pub async fn refresh(&mut self, id: i64) -> Result<Memo, AppError> {
        memos::find_memo(&mut self.tx, id)
            .await?
            .ok_or(AppError::Database(sqlx::Error::RowNotFound))
    }

    pub async fn get(&mut self, id: i64) -> Result<Option<Memo>, AppError> {
        memos::find_memo(&mut self.tx, id).await
    }

    pub async fn list(&mut self, skip: u32, limit: u32) -> Result<Vec<Memo>, AppError> {
        memos::list_memos(&mut self.tx, skip, limit).await
    }

    pub async fn search(&mut self, query: &str) -> Result<Vec<Memo>, AppError> {
        memos::search_memos(&mut self.tx, query).await
    }

    /// 수정된 레코드(제목, 내용, updated_at)를 덮어씁니다.
    pub async fn save(&mut self, memo: &Memo) -> Result<(), AppError> {
        memos::update_memo(&mut self.tx, memo).await
    }

    /// 레코드를 삭제합니다. 삭제된 행이 없으면 `false`.
    pub async fn delete(&mut self, id: i64) -> Result<bool, AppError> {
        memos::delete_memo(&mut self.tx, id).await
    }

    /// 트랜잭션을 커밋합니다. 실패하면 요청 전체가 500으로 끝납니다.
    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await?;
        Ok(())
    }
}
